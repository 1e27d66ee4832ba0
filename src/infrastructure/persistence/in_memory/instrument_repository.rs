//! # In-Memory Instrument Repository
//!
//! In-memory implementation of [`InstrumentRepository`].
//!
//! Mirrors [`InMemoryVenueRepository`](super::InMemoryVenueRepository) with
//! the instrument-specific queries: lookup by owning venue and batch delete
//! for the cascade.

use crate::domain::entities::Instrument;
use crate::domain::value_objects::{InstrumentId, VenueId};
use crate::infrastructure::persistence::traits::{
    InstrumentRepository, RepositoryError, RepositoryResult,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory implementation of [`InstrumentRepository`].
///
/// # Examples
///
/// ```
/// use venue_registry::infrastructure::persistence::in_memory::InMemoryInstrumentRepository;
///
/// let repo = InMemoryInstrumentRepository::new();
/// assert!(repo.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryInstrumentRepository {
    storage: Arc<RwLock<HashMap<InstrumentId, Instrument>>>,
}

impl InMemoryInstrumentRepository {
    /// Creates a new empty in-memory instrument repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Returns the number of instruments in the repository.
    #[must_use]
    pub fn len(&self) -> usize {
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

    /// Clears all instruments from the repository.
    pub async fn clear(&self) {
        let mut storage = self.storage.write().await;
        storage.clear();
    }
}

#[async_trait]
impl InstrumentRepository for InMemoryInstrumentRepository {
    async fn insert(&self, instrument: &Instrument) -> RepositoryResult<()> {
        let mut storage = self.storage.write().await;
        storage.insert(instrument.id(), instrument.clone());
        Ok(())
    }

    async fn update(&self, instrument: &Instrument) -> RepositoryResult<()> {
        let mut storage = self.storage.write().await;
        if !storage.contains_key(&instrument.id()) {
            return Err(RepositoryError::missing("instrument", instrument.id()));
        }
        storage.insert(instrument.id(), instrument.clone());
        Ok(())
    }

    async fn get(&self, id: InstrumentId) -> RepositoryResult<Option<Instrument>> {
        let storage = self.storage.read().await;
        Ok(storage.get(&id).cloned())
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Instrument>> {
        let storage = self.storage.read().await;
        Ok(storage.values().cloned().collect())
    }

    async fn find_by_venue(&self, venue_id: VenueId) -> RepositoryResult<Vec<Instrument>> {
        let storage = self.storage.read().await;
        let instruments = storage
            .values()
            .filter(|instrument| instrument.venue_id() == venue_id)
            .cloned()
            .collect();
        Ok(instruments)
    }

    async fn delete(&self, id: InstrumentId) -> RepositoryResult<bool> {
        let mut storage = self.storage.write().await;
        Ok(storage.remove(&id).is_some())
    }

    async fn delete_many(&self, ids: &[InstrumentId]) -> RepositoryResult<usize> {
        let mut storage = self.storage.write().await;
        let removed = ids
            .iter()
            .filter(|id| storage.remove(id).is_some())
            .count();
        Ok(removed)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::InstrumentType;

    fn sample_instrument(symbol: &str, venue_id: VenueId) -> Instrument {
        Instrument::new(symbol, "Test Instrument", InstrumentType::Stock, venue_id).unwrap()
    }

    #[tokio::test]
    async fn insert_and_get() {
        let repo = InMemoryInstrumentRepository::new();
        let instrument = sample_instrument("AAPL", VenueId::new_v4());

        repo.insert(&instrument).await.unwrap();

        let retrieved = repo.get(instrument.id()).await.unwrap();
        assert_eq!(retrieved.unwrap().symbol(), "AAPL");
    }

    #[tokio::test]
    async fn update_missing_fails() {
        let repo = InMemoryInstrumentRepository::new();
        let instrument = sample_instrument("GHST", VenueId::new_v4());

        let err = repo.update(&instrument).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Missing { .. }));
    }

    #[tokio::test]
    async fn find_by_venue_filters_ownership() {
        let repo = InMemoryInstrumentRepository::new();
        let venue_a = VenueId::new_v4();
        let venue_b = VenueId::new_v4();

        repo.insert(&sample_instrument("AAPL", venue_a)).await.unwrap();
        repo.insert(&sample_instrument("MSFT", venue_a)).await.unwrap();
        repo.insert(&sample_instrument("VOD", venue_b)).await.unwrap();

        let on_a = repo.find_by_venue(venue_a).await.unwrap();
        assert_eq!(on_a.len(), 2);
        assert!(on_a.iter().all(|i| i.venue_id() == venue_a));

        let on_b = repo.find_by_venue(venue_b).await.unwrap();
        assert_eq!(on_b.len(), 1);
    }

    #[tokio::test]
    async fn delete_reports_existence() {
        let repo = InMemoryInstrumentRepository::new();
        let instrument = sample_instrument("TSLA", VenueId::new_v4());
        repo.insert(&instrument).await.unwrap();

        assert!(repo.delete(instrument.id()).await.unwrap());
        assert!(!repo.delete(instrument.id()).await.unwrap());
    }

    #[tokio::test]
    async fn delete_many_counts_only_present_records() {
        let repo = InMemoryInstrumentRepository::new();
        let venue_id = VenueId::new_v4();
        let a = sample_instrument("A", venue_id);
        let b = sample_instrument("B", venue_id);
        repo.insert(&a).await.unwrap();
        repo.insert(&b).await.unwrap();

        let removed = repo
            .delete_many(&[a.id(), b.id(), InstrumentId::new_v4()])
            .await
            .unwrap();
        assert_eq!(removed, 2);
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn delete_many_with_empty_slice_is_a_noop() {
        let repo = InMemoryInstrumentRepository::new();
        repo.insert(&sample_instrument("KEEP", VenueId::new_v4()))
            .await
            .unwrap();

        let removed = repo.delete_many(&[]).await.unwrap();
        assert_eq!(removed, 0);
        assert_eq!(repo.len(), 1);
    }
}
