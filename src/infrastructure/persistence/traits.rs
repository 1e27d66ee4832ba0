//! # Repository Ports
//!
//! Storage-facing traits consumed by the application services.
//!
//! The entity store guarantees atomic single-record writes and nothing more;
//! multi-record consistency (uniqueness, cascades) is the application
//! layer's job. Any failure surfaced here is opaque and fatal to the calling
//! operation.

use crate::domain::entities::{Instrument, Venue};
use crate::domain::errors::DomainError;
use crate::domain::value_objects::{InstrumentId, VenueId};
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Storage-layer error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// The storage backend failed (connectivity, corruption, ...).
    #[error("storage backend failure: {0}")]
    Backend(String),

    /// An update targeted a record that is not present.
    #[error("{entity} with id {id} is not present")]
    Missing {
        /// The record kind.
        entity: &'static str,
        /// The id that failed to resolve.
        id: String,
    },
}

impl RepositoryError {
    /// Creates a backend failure.
    #[must_use]
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }

    /// Creates a missing-record error.
    #[must_use]
    pub fn missing(entity: &'static str, id: impl ToString) -> Self {
        Self::Missing {
            entity,
            id: id.to_string(),
        }
    }
}

impl From<RepositoryError> for DomainError {
    fn from(err: RepositoryError) -> Self {
        Self::Store(err.to_string())
    }
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Durable keyed storage for venue records.
#[async_trait]
pub trait VenueRepository: Send + Sync + fmt::Debug {
    /// Inserts a venue record.
    async fn insert(&self, venue: &Venue) -> RepositoryResult<()>;

    /// Replaces an existing venue record.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Missing`] if no record with the venue's id
    /// exists.
    async fn update(&self, venue: &Venue) -> RepositoryResult<()>;

    /// Looks up a venue by id.
    async fn get(&self, id: VenueId) -> RepositoryResult<Option<Venue>>;

    /// Returns all venue records.
    async fn find_all(&self) -> RepositoryResult<Vec<Venue>>;

    /// Deletes a venue record, returning whether it existed.
    async fn delete(&self, id: VenueId) -> RepositoryResult<bool>;
}

/// Durable keyed storage for instrument records.
#[async_trait]
pub trait InstrumentRepository: Send + Sync + fmt::Debug {
    /// Inserts an instrument record.
    async fn insert(&self, instrument: &Instrument) -> RepositoryResult<()>;

    /// Replaces an existing instrument record.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Missing`] if no record with the
    /// instrument's id exists.
    async fn update(&self, instrument: &Instrument) -> RepositoryResult<()>;

    /// Looks up an instrument by id.
    async fn get(&self, id: InstrumentId) -> RepositoryResult<Option<Instrument>>;

    /// Returns all instrument records.
    async fn find_all(&self) -> RepositoryResult<Vec<Instrument>>;

    /// Returns all instruments owned by the given venue.
    async fn find_by_venue(&self, venue_id: VenueId) -> RepositoryResult<Vec<Instrument>>;

    /// Deletes an instrument record, returning whether it existed.
    async fn delete(&self, id: InstrumentId) -> RepositoryResult<bool>;

    /// Deletes a batch of instrument records, returning how many existed.
    async fn delete_many(&self, ids: &[InstrumentId]) -> RepositoryResult<usize>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::VenueId;

    #[test]
    fn repository_error_surfaces_as_opaque_store_failure() {
        let err = RepositoryError::backend("connection refused");
        let domain: DomainError = err.into();
        assert!(domain.is_store_failure());
        assert_eq!(
            domain.to_string(),
            "storage failure: storage backend failure: connection refused"
        );
    }

    #[test]
    fn missing_error_names_entity_and_id() {
        let id = VenueId::new_v4();
        let err = RepositoryError::missing("venue", id);
        assert_eq!(err.to_string(), format!("venue with id {id} is not present"));
    }
}
