//! # REST Routes
//!
//! Route definitions for the REST API.
//!
//! # Route Structure
//!
//! ```text
//! /api/v1
//! ├── /health                      GET    - Health check
//! ├── /venues                      GET    - List venues (filterable)
//! │   ├── /                        POST   - Create venue
//! │   └── /{id}                    GET    - Get venue by ID
//! │       ├── /                    PUT    - Update venue details
//! │       ├── /                    DELETE - Delete venue (cascades)
//! │       └── /status              PATCH  - Change venue status
//! └── /instruments                 GET    - List instruments (filterable)
//!     ├── /                        POST   - List a new instrument
//!     └── /{id}                    GET    - Get instrument by ID
//!         ├── /                    PUT    - Update instrument details
//!         ├── /                    DELETE - Delist instrument
//!         └── /orders              POST   - Order admission check
//! ```

use crate::api::rest::handlers::{
    AppState, admit_order, create_instrument, create_venue, delete_instrument, delete_venue,
    get_instrument, get_venue, health_check, list_instruments, list_venues, update_instrument,
    update_venue, update_venue_status,
};
use axum::{
    Router,
    routing::{get, patch, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Creates the REST API router with all endpoints and middleware.
///
/// # Arguments
///
/// * `state` - Shared application state containing the registry services
#[must_use]
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/health", get(health_check))
        .route("/venues", get(list_venues).post(create_venue))
        .route(
            "/venues/{id}",
            get(get_venue).put(update_venue).delete(delete_venue),
        )
        .route("/venues/{id}/status", patch(update_venue_status))
        .route("/instruments", get(list_instruments).post(create_instrument))
        .route(
            "/instruments/{id}",
            get(get_instrument)
                .put(update_instrument)
                .delete(delete_instrument),
        )
        .route("/instruments/{id}/orders", post(admit_order));

    Router::new()
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
