//! # Order Gate
//!
//! Policy check consulted before any order-related action.
//!
//! The gate admits an order only if the instrument's venue is currently
//! open. It performs no writes; its one observable side effect is a
//! best-effort audit record on successful admission. This is not a matching
//! or execution engine; admission is where its responsibility ends.

use crate::application::services::audit::{EventPublisher, publish_best_effort};
use crate::application::services::instrument_service::InstrumentService;
use crate::application::services::venue_service::VenueService;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::events::DomainEvent;
use crate::domain::value_objects::{InstrumentId, Timestamp, VenueId};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// A successful admission verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admission {
    /// The admitted instrument.
    pub instrument_id: InstrumentId,
    /// The admitted instrument's symbol.
    pub symbol: String,
    /// The open venue the instrument trades on.
    pub venue_id: VenueId,
    /// The venue's name, for the audit trail.
    pub venue_name: String,
    /// When the admission was granted.
    pub admitted_at: Timestamp,
}

/// Read-side gate admitting orders only on instruments whose venue is open.
#[derive(Debug, Clone)]
pub struct OrderGate {
    instruments: Arc<InstrumentService>,
    venues: Arc<VenueService>,
    events: Arc<dyn EventPublisher>,
}

impl OrderGate {
    /// Creates an order gate over the registry services.
    #[must_use]
    pub fn new(
        instruments: Arc<InstrumentService>,
        venues: Arc<VenueService>,
        events: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            instruments,
            venues,
            events,
        }
    }

    /// Admits an order for the given instrument.
    ///
    /// # Errors
    ///
    /// - [`DomainError::NotFound`] if the instrument (or, should referential
    ///   integrity ever be broken, its venue) does not resolve
    /// - [`DomainError::VenueClosed`] if the venue's status is anything but
    ///   open — an expected business outcome, not a fault
    /// - [`DomainError::Store`] on storage failure
    pub async fn admit(&self, instrument_id: InstrumentId) -> DomainResult<Admission> {
        let instrument = self.instruments.get(instrument_id).await?;
        let venue = self.venues.get(instrument.venue_id()).await?;

        if !venue.status().is_open() {
            return Err(DomainError::venue_closed(venue.name(), venue.status()));
        }

        info!(
            instrument_id = %instrument_id,
            symbol = instrument.symbol(),
            venue = venue.name(),
            "order admitted"
        );
        publish_best_effort(
            self.events.as_ref(),
            DomainEvent::OrderAdmitted {
                instrument_id,
                symbol: instrument.symbol().to_string(),
                venue_id: venue.id(),
            },
        )
        .await;

        Ok(Admission {
            instrument_id,
            symbol: instrument.symbol().to_string(),
            venue_id: venue.id(),
            venue_name: venue.name().to_string(),
            admitted_at: Timestamp::now(),
        })
    }
}
