//! # Instrument Service
//!
//! Owns instrument listing, lookup, updates, and delisting. Venue existence
//! is delegated to the venue service; symbol uniqueness to the consistency
//! guard.

use crate::application::services::audit::{EventPublisher, publish_best_effort};
use crate::application::services::consistency::ConsistencyGuard;
use crate::application::services::venue_service::VenueService;
use crate::domain::entities::Instrument;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::events::DomainEvent;
use crate::domain::value_objects::{InstrumentId, InstrumentType, VenueId};
use crate::infrastructure::persistence::traits::InstrumentRepository;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

/// Application service managing the instrument registry.
#[derive(Debug, Clone)]
pub struct InstrumentService {
    instruments: Arc<dyn InstrumentRepository>,
    venues: Arc<VenueService>,
    guard: ConsistencyGuard,
    events: Arc<dyn EventPublisher>,
    write_lock: Arc<Mutex<()>>,
}

impl InstrumentService {
    /// Creates an instrument service.
    ///
    /// The `write_lock` must be the same lock held by the venue service, so
    /// that listing an instrument cannot interleave with a cascading venue
    /// delete.
    #[must_use]
    pub fn new(
        instruments: Arc<dyn InstrumentRepository>,
        venues: Arc<VenueService>,
        guard: ConsistencyGuard,
        events: Arc<dyn EventPublisher>,
        write_lock: Arc<Mutex<()>>,
    ) -> Self {
        Self {
            instruments,
            venues,
            guard,
            events,
            write_lock,
        }
    }

    /// Lists a new instrument on a venue.
    ///
    /// # Errors
    ///
    /// - [`DomainError::InvalidInput`] if the symbol is empty
    /// - [`DomainError::NotFound`] if the venue id does not resolve
    /// - [`DomainError::Conflict`] if the symbol collides with an existing
    ///   listing (case-insensitively, across all venues)
    /// - [`DomainError::Store`] on storage failure
    pub async fn create(
        &self,
        symbol: &str,
        name: &str,
        instrument_type: InstrumentType,
        venue_id: VenueId,
    ) -> DomainResult<Instrument> {
        let instrument = Instrument::new(symbol, name, instrument_type, venue_id)?;

        let _write = self.write_lock.lock().await;
        self.venues.get(venue_id).await?;
        self.guard.check_unique_symbol(instrument.symbol()).await?;
        self.instruments.insert(&instrument).await?;

        info!(
            instrument_id = %instrument.id(),
            symbol = instrument.symbol(),
            venue_id = %venue_id,
            "instrument listed"
        );
        publish_best_effort(
            self.events.as_ref(),
            DomainEvent::InstrumentListed {
                instrument_id: instrument.id(),
                symbol: instrument.symbol().to_string(),
                venue_id,
            },
        )
        .await;
        Ok(instrument)
    }

    /// Returns the instrument with the given id.
    ///
    /// # Errors
    ///
    /// [`DomainError::NotFound`] if the id does not resolve.
    pub async fn get(&self, id: InstrumentId) -> DomainResult<Instrument> {
        self.instruments
            .get(id)
            .await?
            .ok_or_else(|| DomainError::instrument_not_found(id))
    }

    /// Returns all instruments.
    ///
    /// # Errors
    ///
    /// [`DomainError::Store`] on storage failure.
    pub async fn list(&self) -> DomainResult<Vec<Instrument>> {
        Ok(self.instruments.find_all().await?)
    }

    /// Returns all instruments listed on the given venue.
    ///
    /// An unknown venue id yields an empty list rather than an error; the
    /// query is a filter, not a reference.
    ///
    /// # Errors
    ///
    /// [`DomainError::Store`] on storage failure.
    pub async fn list_by_venue(&self, venue_id: VenueId) -> DomainResult<Vec<Instrument>> {
        Ok(self.instruments.find_by_venue(venue_id).await?)
    }

    /// Returns all instruments of the given type.
    ///
    /// # Errors
    ///
    /// [`DomainError::Store`] on storage failure.
    pub async fn list_by_type(
        &self,
        instrument_type: InstrumentType,
    ) -> DomainResult<Vec<Instrument>> {
        let instruments = self.instruments.find_all().await?;
        Ok(instruments
            .into_iter()
            .filter(|instrument| instrument.instrument_type() == instrument_type)
            .collect())
    }

    /// Returns all instruments whose symbol contains the fragment,
    /// case-insensitively.
    ///
    /// This is the user-facing search; it is substring-based and therefore
    /// deliberately looser than the exact-equality uniqueness check.
    ///
    /// # Errors
    ///
    /// [`DomainError::Store`] on storage failure.
    pub async fn find_by_symbol(&self, fragment: &str) -> DomainResult<Vec<Instrument>> {
        let needle = fragment.to_lowercase();
        let instruments = self.instruments.find_all().await?;
        Ok(instruments
            .into_iter()
            .filter(|instrument| instrument.symbol().to_lowercase().contains(&needle))
            .collect())
    }

    /// Updates an instrument's descriptive fields.
    ///
    /// Symbol and venue are immutable after creation and are not parameters
    /// of this operation; changing them would be a delist/relist.
    ///
    /// # Errors
    ///
    /// - [`DomainError::NotFound`] if the id does not resolve
    /// - [`DomainError::Store`] on storage failure
    pub async fn update(
        &self,
        id: InstrumentId,
        name: &str,
        instrument_type: InstrumentType,
    ) -> DomainResult<Instrument> {
        let _write = self.write_lock.lock().await;
        let mut instrument = self
            .instruments
            .get(id)
            .await?
            .ok_or_else(|| DomainError::instrument_not_found(id))?;

        instrument.set_name(name);
        instrument.set_instrument_type(instrument_type);
        self.instruments.update(&instrument).await?;

        publish_best_effort(
            self.events.as_ref(),
            DomainEvent::InstrumentUpdated { instrument_id: id },
        )
        .await;
        Ok(instrument)
    }

    /// Removes an instrument from the registry.
    ///
    /// # Errors
    ///
    /// - [`DomainError::NotFound`] if the id does not resolve
    /// - [`DomainError::Store`] on storage failure
    pub async fn delete(&self, id: InstrumentId) -> DomainResult<()> {
        let _write = self.write_lock.lock().await;
        let instrument = self
            .instruments
            .get(id)
            .await?
            .ok_or_else(|| DomainError::instrument_not_found(id))?;

        self.instruments.delete(id).await?;

        info!(instrument_id = %id, symbol = instrument.symbol(), "instrument delisted");
        publish_best_effort(
            self.events.as_ref(),
            DomainEvent::InstrumentDelisted {
                instrument_id: id,
                symbol: instrument.symbol().to_string(),
            },
        )
        .await;
        Ok(())
    }
}
