//! API error types with HTTP status mapping.
//!
//! Validation failures never reach this module — they are recovered by
//! re-rendering the form. What remains is the storage layer: a write
//! that fails after validation surfaces as a generic 500 with the
//! detail kept server-side.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::db::DatabaseError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Internal(detail) => {
                tracing::error!(detail, "API internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(crate::api::pages::render_error_page()),
                )
                    .into_response()
            }
        }
    }
}

impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl From<rusqlite::Error> for ApiError {
    fn from(err: rusqlite::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn internal_returns_500() {
        let response = ApiError::Internal("disk full".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(response.into_body(), 64 * 1024).await.unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        // Internal errors hide details from client
        assert!(text.contains("Something went wrong"));
        assert!(!text.contains("disk full"));
    }

    #[tokio::test]
    async fn database_error_maps_to_internal() {
        let err: ApiError = DatabaseError::InvalidDate {
            value: "garbage".into(),
        }
        .into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
