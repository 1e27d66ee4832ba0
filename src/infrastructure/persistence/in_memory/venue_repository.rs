//! # In-Memory Venue Repository
//!
//! In-memory implementation of [`VenueRepository`].
//!
//! This implementation uses a thread-safe `HashMap` for storage. It is the
//! default entity store for the service binary and for tests; single-record
//! writes are atomic because each one happens under the map's write lock.

use crate::domain::entities::Venue;
use crate::domain::value_objects::VenueId;
use crate::infrastructure::persistence::traits::{
    RepositoryError, RepositoryResult, VenueRepository,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory implementation of [`VenueRepository`].
///
/// # Thread Safety
///
/// Uses `Arc<RwLock<HashMap>>` for thread-safe access.
///
/// # Examples
///
/// ```
/// use venue_registry::infrastructure::persistence::in_memory::InMemoryVenueRepository;
///
/// let repo = InMemoryVenueRepository::new();
/// assert!(repo.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryVenueRepository {
    storage: Arc<RwLock<HashMap<VenueId, Venue>>>,
}

impl InMemoryVenueRepository {
    /// Creates a new empty in-memory venue repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Returns the number of venues in the repository.
    #[must_use]
    pub fn len(&self) -> usize {
        // try_read keeps this callable from sync contexts
        self.storage
            .try_read()
            .map(|guard| guard.len())
            .unwrap_or(0)
    }

    /// Returns true if the repository is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears all venues from the repository.
    pub async fn clear(&self) {
        let mut storage = self.storage.write().await;
        storage.clear();
    }
}

#[async_trait]
impl VenueRepository for InMemoryVenueRepository {
    async fn insert(&self, venue: &Venue) -> RepositoryResult<()> {
        let mut storage = self.storage.write().await;
        storage.insert(venue.id(), venue.clone());
        Ok(())
    }

    async fn update(&self, venue: &Venue) -> RepositoryResult<()> {
        let mut storage = self.storage.write().await;
        if !storage.contains_key(&venue.id()) {
            return Err(RepositoryError::missing("venue", venue.id()));
        }
        storage.insert(venue.id(), venue.clone());
        Ok(())
    }

    async fn get(&self, id: VenueId) -> RepositoryResult<Option<Venue>> {
        let storage = self.storage.read().await;
        Ok(storage.get(&id).cloned())
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Venue>> {
        let storage = self.storage.read().await;
        Ok(storage.values().cloned().collect())
    }

    async fn delete(&self, id: VenueId) -> RepositoryResult<bool> {
        let mut storage = self.storage.write().await;
        Ok(storage.remove(&id).is_some())
    }
}
