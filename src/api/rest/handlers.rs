//! # REST Handlers
//!
//! Request handlers for the REST endpoints.
//!
//! This module provides axum handlers for venue management, instrument
//! management, and the order admission gate, plus the single place where
//! domain errors become wire-level status codes. The core services never
//! produce transport codes themselves.
//!
//! # Endpoints
//!
//! ## Venues
//! - `GET /api/v1/venues` - List venues with optional filters
//! - `POST /api/v1/venues` - Create venue
//! - `GET /api/v1/venues/{id}` - Get venue by ID
//! - `PUT /api/v1/venues/{id}` - Update venue details
//! - `PATCH /api/v1/venues/{id}/status` - Change venue status
//! - `DELETE /api/v1/venues/{id}` - Delete venue (cascades to instruments)
//!
//! ## Instruments
//! - `GET /api/v1/instruments` - List instruments with optional filters
//! - `POST /api/v1/instruments` - List a new instrument
//! - `GET /api/v1/instruments/{id}` - Get instrument by ID
//! - `PUT /api/v1/instruments/{id}` - Update instrument details
//! - `DELETE /api/v1/instruments/{id}` - Delist instrument
//! - `POST /api/v1/instruments/{id}/orders` - Order admission check

use crate::application::services::venue_service::VenueFilter;
use crate::application::services::{Admission, InstrumentService, OrderGate, VenueService};
use crate::domain::entities::{Instrument, Venue};
use crate::domain::errors::DomainError;
use crate::domain::value_objects::{
    InstrumentId, InstrumentType, VenueId, VenueStatus, VenueType,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for REST handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Venue lifecycle service.
    pub venue_service: Arc<VenueService>,
    /// Instrument registry service.
    pub instrument_service: Arc<InstrumentService>,
    /// Order admission gate.
    pub order_gate: Arc<OrderGate>,
}

// ============================================================================
// Error Response
// ============================================================================

/// Standard error response format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    /// Creates a new error response.
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Wire-level error shape: status code plus JSON body.
pub type ApiError = (StatusCode, Json<ErrorResponse>);

impl From<DomainError> for (StatusCode, Json<ErrorResponse>) {
    fn from(err: DomainError) -> Self {
        let (status, code) = match &err {
            DomainError::InvalidInput { .. } => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            DomainError::NotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            DomainError::Conflict { .. } => (StatusCode::CONFLICT, "CONFLICT"),
            DomainError::InvalidTransition { .. } => (StatusCode::CONFLICT, "INVALID_TRANSITION"),
            DomainError::VenueClosed { .. } => (StatusCode::CONFLICT, "VENUE_CLOSED"),
            DomainError::Store(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        (status, Json(ErrorResponse::new(code, err.to_string())))
    }
}

// ============================================================================
// Health
// ============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "ok" when the service is up.
    pub status: String,
    /// Crate version.
    pub version: String,
}

/// `GET /api/v1/health`
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============================================================================
// Venue DTOs
// ============================================================================

/// Request body for creating a venue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateVenueRequest {
    /// Venue name; must be unique case-insensitively.
    pub name: String,
    /// Free-text location.
    #[serde(default)]
    pub location: String,
    /// Regulatory classification.
    pub venue_type: VenueType,
}

/// Request body for updating a venue's descriptive fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateVenueRequest {
    /// New venue name.
    pub name: String,
    /// New location.
    #[serde(default)]
    pub location: String,
    /// New regulatory classification.
    pub venue_type: VenueType,
}

/// Request body for changing a venue's operational status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateVenueStatusRequest {
    /// The target status.
    pub status: VenueStatus,
}

/// Query parameters for venue listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VenueQuery {
    /// Restrict to this venue type.
    pub venue_type: Option<VenueType>,
    /// Case-insensitive substring match on the name.
    pub name: Option<String>,
    /// Case-insensitive substring match on the location.
    pub location: Option<String>,
    /// Restrict to this operational status.
    pub status: Option<VenueStatus>,
}

impl From<VenueQuery> for VenueFilter {
    fn from(query: VenueQuery) -> Self {
        Self {
            venue_type: query.venue_type,
            name_contains: query.name,
            location_contains: query.location,
            status: query.status,
        }
    }
}

// ============================================================================
// Venue Handlers
// ============================================================================

/// `GET /api/v1/venues`
pub async fn list_venues(
    State(state): State<AppState>,
    Query(query): Query<VenueQuery>,
) -> Result<Json<Vec<Venue>>, ApiError> {
    let venues = state.venue_service.list(&query.into()).await?;
    Ok(Json(venues))
}

/// `POST /api/v1/venues`
pub async fn create_venue(
    State(state): State<AppState>,
    Json(request): Json<CreateVenueRequest>,
) -> Result<(StatusCode, Json<Venue>), ApiError> {
    let venue = state
        .venue_service
        .create(&request.name, &request.location, request.venue_type)
        .await?;
    Ok((StatusCode::CREATED, Json(venue)))
}

/// `GET /api/v1/venues/{id}`
pub async fn get_venue(
    State(state): State<AppState>,
    Path(id): Path<VenueId>,
) -> Result<Json<Venue>, ApiError> {
    let venue = state.venue_service.get(id).await?;
    Ok(Json(venue))
}

/// `PUT /api/v1/venues/{id}`
pub async fn update_venue(
    State(state): State<AppState>,
    Path(id): Path<VenueId>,
    Json(request): Json<UpdateVenueRequest>,
) -> Result<Json<Venue>, ApiError> {
    let venue = state
        .venue_service
        .update(id, &request.name, &request.location, request.venue_type)
        .await?;
    Ok(Json(venue))
}

/// `PATCH /api/v1/venues/{id}/status`
pub async fn update_venue_status(
    State(state): State<AppState>,
    Path(id): Path<VenueId>,
    Json(request): Json<UpdateVenueStatusRequest>,
) -> Result<Json<Venue>, ApiError> {
    let venue = state.venue_service.set_status(id, request.status).await?;
    Ok(Json(venue))
}

/// `DELETE /api/v1/venues/{id}`
pub async fn delete_venue(
    State(state): State<AppState>,
    Path(id): Path<VenueId>,
) -> Result<StatusCode, ApiError> {
    state.venue_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Instrument DTOs
// ============================================================================

/// Request body for listing a new instrument.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateInstrumentRequest {
    /// Ticker symbol; must be unique case-insensitively across the registry.
    pub symbol: String,
    /// Descriptive name.
    #[serde(default)]
    pub name: String,
    /// Asset-class classification.
    pub instrument_type: InstrumentType,
    /// The owning venue.
    pub venue_id: VenueId,
}

/// Request body for updating an instrument's descriptive fields.
///
/// `symbol` and `venue_id` may be supplied but are ignored: both are
/// immutable after creation, and a change request for them is a silent
/// no-op rather than an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateInstrumentRequest {
    /// New descriptive name.
    #[serde(default)]
    pub name: String,
    /// New asset-class classification.
    pub instrument_type: InstrumentType,
    /// Ignored if supplied.
    #[serde(default)]
    pub symbol: Option<String>,
    /// Ignored if supplied.
    #[serde(default)]
    pub venue_id: Option<VenueId>,
}

/// Query parameters for instrument listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InstrumentQuery {
    /// Restrict to instruments listed on this venue.
    pub venue_id: Option<VenueId>,
    /// Restrict to this instrument type.
    pub instrument_type: Option<InstrumentType>,
    /// Case-insensitive substring match on the symbol.
    pub symbol: Option<String>,
}

// ============================================================================
// Instrument Handlers
// ============================================================================

/// `GET /api/v1/instruments`
///
/// Filters are applied one at a time in order of specificity: venue, then
/// type, then symbol fragment; with no filter the full listing is returned.
pub async fn list_instruments(
    State(state): State<AppState>,
    Query(query): Query<InstrumentQuery>,
) -> Result<Json<Vec<Instrument>>, ApiError> {
    let instruments = if let Some(venue_id) = query.venue_id {
        state.instrument_service.list_by_venue(venue_id).await?
    } else if let Some(instrument_type) = query.instrument_type {
        state.instrument_service.list_by_type(instrument_type).await?
    } else if let Some(fragment) = &query.symbol {
        state.instrument_service.find_by_symbol(fragment).await?
    } else {
        state.instrument_service.list().await?
    };
    Ok(Json(instruments))
}

/// `POST /api/v1/instruments`
pub async fn create_instrument(
    State(state): State<AppState>,
    Json(request): Json<CreateInstrumentRequest>,
) -> Result<(StatusCode, Json<Instrument>), ApiError> {
    let instrument = state
        .instrument_service
        .create(
            &request.symbol,
            &request.name,
            request.instrument_type,
            request.venue_id,
        )
        .await?;
    Ok((StatusCode::CREATED, Json(instrument)))
}

/// `GET /api/v1/instruments/{id}`
pub async fn get_instrument(
    State(state): State<AppState>,
    Path(id): Path<InstrumentId>,
) -> Result<Json<Instrument>, ApiError> {
    let instrument = state.instrument_service.get(id).await?;
    Ok(Json(instrument))
}

/// `PUT /api/v1/instruments/{id}`
pub async fn update_instrument(
    State(state): State<AppState>,
    Path(id): Path<InstrumentId>,
    Json(request): Json<UpdateInstrumentRequest>,
) -> Result<Json<Instrument>, ApiError> {
    // request.symbol and request.venue_id are deliberately dropped here.
    let instrument = state
        .instrument_service
        .update(id, &request.name, request.instrument_type)
        .await?;
    Ok(Json(instrument))
}

/// `DELETE /api/v1/instruments/{id}`
pub async fn delete_instrument(
    State(state): State<AppState>,
    Path(id): Path<InstrumentId>,
) -> Result<StatusCode, ApiError> {
    state.instrument_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `POST /api/v1/instruments/{id}/orders`
pub async fn admit_order(
    State(state): State<AppState>,
    Path(id): Path<InstrumentId>,
) -> Result<Json<Admission>, ApiError> {
    let admission = state.order_gate.admit(id).await?;
    Ok(Json(admission))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn mapped(err: DomainError) -> (StatusCode, ErrorResponse) {
        let (status, Json(body)): ApiError = err.into();
        (status, body)
    }

    #[test]
    fn invalid_input_maps_to_bad_request() {
        let (status, body) = mapped(DomainError::invalid_input("empty name"));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.code, "VALIDATION_ERROR");
    }

    #[test]
    fn not_found_maps_to_404() {
        let (status, body) = mapped(DomainError::venue_not_found(VenueId::new_v4()));
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.code, "NOT_FOUND");
    }

    #[test]
    fn conflict_and_transition_and_closed_map_to_409() {
        let (status, body) = mapped(DomainError::conflict("dup"));
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body.code, "CONFLICT");

        let (status, body) = mapped(DomainError::InvalidTransition {
            from: VenueStatus::Decommissioned,
            to: VenueStatus::Open,
        });
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body.code, "INVALID_TRANSITION");

        let (status, body) = mapped(DomainError::venue_closed("NYSE", VenueStatus::Halted));
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body.code, "VENUE_CLOSED");
        assert!(body.message.contains("HALTED"));
    }

    #[test]
    fn store_failure_maps_to_500() {
        let (status, body) = mapped(DomainError::store("backend down"));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.code, "INTERNAL_ERROR");
    }

    #[test]
    fn update_instrument_request_tolerates_immutable_fields() {
        let json = r#"{
            "name": "Apple Inc.",
            "instrument_type": "STOCK",
            "symbol": "IGNORED",
            "venue_id": "550e8400-e29b-41d4-a716-446655440000"
        }"#;
        let request: UpdateInstrumentRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.name, "Apple Inc.");
        assert_eq!(request.symbol.as_deref(), Some("IGNORED"));
    }
}
