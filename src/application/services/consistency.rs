//! # Consistency Guard
//!
//! Uniqueness checks consulted before any write reaches the entity store.
//!
//! Comparison is exact case-insensitive equality. Substring matching is
//! reserved for the user-facing search operations; using it for uniqueness
//! would reject "AAPL" merely because "AA" is already listed.

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::VenueId;
use crate::infrastructure::persistence::traits::{InstrumentRepository, VenueRepository};
use std::sync::Arc;

/// Read-then-decide uniqueness checks for venue names and instrument symbols.
///
/// The guard performs no writes and never errors on absent records; the only
/// failure modes are a [`DomainError::Conflict`] verdict or a pass-through
/// storage failure.
///
/// The check itself is not atomic against concurrent writers; the services
/// serialize their check-then-write sequences through a shared write lock.
#[derive(Debug, Clone)]
pub struct ConsistencyGuard {
    venues: Arc<dyn VenueRepository>,
    instruments: Arc<dyn InstrumentRepository>,
}

impl ConsistencyGuard {
    /// Creates a guard over the given repositories.
    #[must_use]
    pub fn new(venues: Arc<dyn VenueRepository>, instruments: Arc<dyn InstrumentRepository>) -> Self {
        Self {
            venues,
            instruments,
        }
    }

    /// Checks that no venue other than `exclude` already carries the
    /// candidate name (case-insensitively).
    ///
    /// `exclude` lets an update match its own record without a false
    /// conflict.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Conflict`] on a collision, or a storage
    /// failure from the repository.
    pub async fn check_unique_name(
        &self,
        candidate: &str,
        exclude: Option<VenueId>,
    ) -> DomainResult<()> {
        let needle = candidate.trim().to_lowercase();
        let venues = self.venues.find_all().await?;

        let collision = venues
            .iter()
            .filter(|venue| exclude != Some(venue.id()))
            .any(|venue| venue.name().to_lowercase() == needle);

        if collision {
            return Err(DomainError::conflict(format!(
                "a venue named '{}' already exists",
                candidate.trim()
            )));
        }
        Ok(())
    }

    /// Checks that no instrument anywhere in the registry already carries
    /// the candidate symbol (case-insensitively).
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Conflict`] on a collision, or a storage
    /// failure from the repository.
    pub async fn check_unique_symbol(&self, candidate: &str) -> DomainResult<()> {
        let needle = candidate.trim().to_lowercase();
        let instruments = self.instruments.find_all().await?;

        let collision = instruments
            .iter()
            .any(|instrument| instrument.symbol().to_lowercase() == needle);

        if collision {
            return Err(DomainError::conflict(format!(
                "an instrument with symbol '{}' is already listed",
                candidate.trim()
            )));
        }
        Ok(())
    }
}
