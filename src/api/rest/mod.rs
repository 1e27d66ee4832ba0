//! # REST API
//!
//! axum handlers and routes for the registry's HTTP interface.

pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::create_router;
