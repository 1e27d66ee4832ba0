//! # Venue Service
//!
//! Owns venue creation, updates, status transitions, and deletion with
//! cascading removal of dependent instruments.
//!
//! Every mutating operation runs its check-then-write sequence under the
//! registry write lock shared with the instrument service, so uniqueness
//! checks and the cascade cannot interleave with concurrent writers.

use crate::application::services::audit::{EventPublisher, publish_best_effort};
use crate::application::services::consistency::ConsistencyGuard;
use crate::domain::entities::Venue;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::events::DomainEvent;
use crate::domain::value_objects::{VenueId, VenueStatus, VenueType};
use crate::infrastructure::persistence::traits::{InstrumentRepository, VenueRepository};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

/// Optional predicates for venue listing.
///
/// All present predicates must match. Name and location matching is
/// case-insensitive substring search, deliberately distinct from the exact
/// equality the uniqueness checks use.
#[derive(Debug, Clone, Default)]
pub struct VenueFilter {
    /// Restrict to venues of this regulatory type.
    pub venue_type: Option<VenueType>,
    /// Restrict to venues whose name contains this fragment.
    pub name_contains: Option<String>,
    /// Restrict to venues whose location contains this fragment.
    pub location_contains: Option<String>,
    /// Restrict to venues in this operational status.
    pub status: Option<VenueStatus>,
}

impl VenueFilter {
    /// Returns true if the venue satisfies every present predicate.
    #[must_use]
    pub fn matches(&self, venue: &Venue) -> bool {
        if let Some(venue_type) = self.venue_type
            && venue.venue_type() != venue_type
        {
            return false;
        }
        if let Some(status) = self.status
            && venue.status() != status
        {
            return false;
        }
        if let Some(fragment) = &self.name_contains
            && !venue.name().to_lowercase().contains(&fragment.to_lowercase())
        {
            return false;
        }
        if let Some(fragment) = &self.location_contains
            && !venue
                .location()
                .to_lowercase()
                .contains(&fragment.to_lowercase())
        {
            return false;
        }
        true
    }
}

/// Application service managing the venue lifecycle.
#[derive(Debug, Clone)]
pub struct VenueService {
    venues: Arc<dyn VenueRepository>,
    instruments: Arc<dyn InstrumentRepository>,
    guard: ConsistencyGuard,
    events: Arc<dyn EventPublisher>,
    write_lock: Arc<Mutex<()>>,
    initial_status: VenueStatus,
}

impl VenueService {
    /// Creates a venue service. New venues start in [`VenueStatus::Open`].
    ///
    /// The `write_lock` must be the same lock handed to the instrument
    /// service; it serializes every check-then-write sequence across both.
    #[must_use]
    pub fn new(
        venues: Arc<dyn VenueRepository>,
        instruments: Arc<dyn InstrumentRepository>,
        guard: ConsistencyGuard,
        events: Arc<dyn EventPublisher>,
        write_lock: Arc<Mutex<()>>,
    ) -> Self {
        Self {
            venues,
            instruments,
            guard,
            events,
            write_lock,
            initial_status: VenueStatus::Open,
        }
    }

    /// Overrides the status newly created venues start in.
    ///
    /// Used for the approval-gated deployment variant, where venues start in
    /// [`VenueStatus::PendingApproval`] and must be explicitly opened.
    #[must_use]
    pub fn with_initial_status(mut self, status: VenueStatus) -> Self {
        self.initial_status = status;
        self
    }

    /// Creates a new venue.
    ///
    /// # Errors
    ///
    /// - [`DomainError::InvalidInput`] if the name is empty
    /// - [`DomainError::Conflict`] if another venue carries the name
    ///   (case-insensitively)
    /// - [`DomainError::Store`] on storage failure
    pub async fn create(
        &self,
        name: &str,
        location: &str,
        venue_type: VenueType,
    ) -> DomainResult<Venue> {
        let venue = Venue::new(name, location, venue_type, self.initial_status)?;

        let _write = self.write_lock.lock().await;
        self.guard.check_unique_name(venue.name(), None).await?;
        self.venues.insert(&venue).await?;

        info!(venue_id = %venue.id(), name = venue.name(), "venue created");
        publish_best_effort(
            self.events.as_ref(),
            DomainEvent::VenueCreated {
                venue_id: venue.id(),
                name: venue.name().to_string(),
                status: venue.status(),
            },
        )
        .await;
        Ok(venue)
    }

    /// Returns the venue with the given id.
    ///
    /// # Errors
    ///
    /// [`DomainError::NotFound`] if the id does not resolve.
    pub async fn get(&self, id: VenueId) -> DomainResult<Venue> {
        self.venues
            .get(id)
            .await?
            .ok_or_else(|| DomainError::venue_not_found(id))
    }

    /// Lists venues matching the filter; an empty filter returns all venues.
    ///
    /// # Errors
    ///
    /// [`DomainError::Store`] on storage failure.
    pub async fn list(&self, filter: &VenueFilter) -> DomainResult<Vec<Venue>> {
        let venues = self.venues.find_all().await?;
        Ok(venues
            .into_iter()
            .filter(|venue| filter.matches(venue))
            .collect())
    }

    /// Updates a venue's descriptive fields. Status is untouched by this
    /// path; use [`set_status`](VenueService::set_status).
    ///
    /// # Errors
    ///
    /// - [`DomainError::NotFound`] if the id does not resolve
    /// - [`DomainError::InvalidInput`] if the new name is empty
    /// - [`DomainError::Conflict`] if the new name collides with another
    ///   venue (matching its own current name is fine)
    /// - [`DomainError::Store`] on storage failure
    pub async fn update(
        &self,
        id: VenueId,
        name: &str,
        location: &str,
        venue_type: VenueType,
    ) -> DomainResult<Venue> {
        let _write = self.write_lock.lock().await;
        let mut venue = self
            .venues
            .get(id)
            .await?
            .ok_or_else(|| DomainError::venue_not_found(id))?;

        venue.rename(name)?;
        self.guard.check_unique_name(venue.name(), Some(id)).await?;
        venue.set_location(location);
        venue.set_venue_type(venue_type);

        self.venues.update(&venue).await?;

        publish_best_effort(
            self.events.as_ref(),
            DomainEvent::VenueUpdated {
                venue_id: venue.id(),
                name: venue.name().to_string(),
            },
        )
        .await;
        Ok(venue)
    }

    /// Moves a venue to a new operational status.
    ///
    /// Setting the current status again is an idempotent no-op; any attempt
    /// on a decommissioned venue fails.
    ///
    /// # Errors
    ///
    /// - [`DomainError::NotFound`] if the id does not resolve
    /// - [`DomainError::InvalidTransition`] if the target is unreachable
    /// - [`DomainError::Store`] on storage failure
    pub async fn set_status(&self, id: VenueId, status: VenueStatus) -> DomainResult<Venue> {
        let _write = self.write_lock.lock().await;
        let mut venue = self
            .venues
            .get(id)
            .await?
            .ok_or_else(|| DomainError::venue_not_found(id))?;

        let previous = venue.status();
        let changed = venue.transition_to(status)?;
        if changed {
            self.venues.update(&venue).await?;
            info!(venue_id = %id, from = %previous, to = %status, "venue status changed");
            publish_best_effort(
                self.events.as_ref(),
                DomainEvent::VenueStatusChanged {
                    venue_id: id,
                    from: previous,
                    to: status,
                },
            )
            .await;
        }
        Ok(venue)
    }

    /// Deletes a venue together with every instrument it owns.
    ///
    /// The cascade runs under the registry write lock, so no instrument can
    /// be listed on the venue while it disappears. If removing the venue
    /// record itself fails after the instruments are gone, the instruments
    /// are re-inserted so callers never observe a dangling venue reference.
    ///
    /// # Errors
    ///
    /// - [`DomainError::NotFound`] if the id does not resolve
    /// - [`DomainError::Store`] on storage failure
    pub async fn delete(&self, id: VenueId) -> DomainResult<()> {
        let _write = self.write_lock.lock().await;
        self.venues
            .get(id)
            .await?
            .ok_or_else(|| DomainError::venue_not_found(id))?;

        let owned = self.instruments.find_by_venue(id).await?;
        let owned_ids: Vec<_> = owned.iter().map(|instrument| instrument.id()).collect();

        if let Err(err) = self.instruments.delete_many(&owned_ids).await {
            self.restore(&owned).await;
            return Err(err.into());
        }

        match self.venues.delete(id).await {
            Ok(true) => {
                info!(venue_id = %id, instruments_removed = owned_ids.len(), "venue deleted");
                publish_best_effort(
                    self.events.as_ref(),
                    DomainEvent::VenueDeleted {
                        venue_id: id,
                        instruments_removed: owned_ids.len(),
                    },
                )
                .await;
                Ok(())
            }
            Ok(false) => {
                self.restore(&owned).await;
                Err(DomainError::venue_not_found(id))
            }
            Err(err) => {
                self.restore(&owned).await;
                Err(err.into())
            }
        }
    }

    /// Compensating rollback for a failed cascade: put the removed
    /// instruments back. Best-effort by necessity; the store is already
    /// failing.
    async fn restore(&self, instruments: &[crate::domain::entities::Instrument]) {
        for instrument in instruments {
            let _ = self.instruments.insert(instrument).await;
        }
    }
}
