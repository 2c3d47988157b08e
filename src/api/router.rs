//! Route table.
//!
//! Returns a composable `Router` that can be mounted on any axum server.

use std::path::PathBuf;

use axum::routing::{get, post};
use axum::Router;

use crate::api::endpoints;
use crate::api::types::ApiContext;

/// Build the intake router for the given database path.
pub fn intake_router(db_path: PathBuf) -> Router {
    build_router(ApiContext::new(db_path))
}

fn build_router(ctx: ApiContext) -> Router {
    Router::new()
        .route("/", get(endpoints::show_form))
        .route("/submit", post(endpoints::submit))
        .route("/health", get(endpoints::health))
        .with_state(ctx)
}
