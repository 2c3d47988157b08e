//! HTTP surface: the intake form, the submission handler, and a health
//! check, served by axum.

pub mod endpoints;
pub mod error;
pub mod pages;
pub mod router;
pub mod server;
pub mod types;

pub use router::intake_router;
pub use server::{start_server, start_server_on, IntakeServer};
