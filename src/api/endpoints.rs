//! Route handlers: form rendering, submission, health check.

use axum::extract::State;
use axum::response::Html;
use axum::{Form, Json};
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::pages;
use crate::api::types::ApiContext;
use crate::db;
use crate::intake::{validate_intake, IntakeForm};

/// `GET /` — the empty intake form.
pub async fn show_form() -> Html<String> {
    Html(pages::render_form_page(&IntakeForm::default(), None))
}

/// `POST /submit` — validate, persist, confirm.
///
/// Validation failures re-render the form with the message and the
/// trimmed values the user typed; nothing is written. A storage fault
/// after successful validation surfaces as a generic 500.
pub async fn submit(
    State(ctx): State<ApiContext>,
    Form(form): Form<IntakeForm>,
) -> Result<Html<String>, ApiError> {
    let form = form.trimmed();
    let today = chrono::Local::now().date_naive();

    let patient = match validate_intake(&form, today) {
        Ok(patient) => patient,
        Err(e) => {
            tracing::debug!(error = %e, "intake validation failed");
            return Ok(Html(pages::render_form_page(&form, Some(&e.to_string()))));
        }
    };

    // Connection is scoped to this request and dropped on return.
    let conn = ctx.open_db()?;
    let id = db::insert_patient(&conn, &patient)?;
    tracing::info!(id, "patient record stored");

    Ok(Html(pages::render_confirmation_page(&form)))
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// `GET /health` — liveness check.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: crate::config::APP_VERSION,
    })
}
