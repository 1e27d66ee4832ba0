//! # Registry Integration Tests
//!
//! Cross-component scenarios exercising the venue service, instrument
//! service, and order gate together over the in-memory store.

#![allow(clippy::unwrap_used)]

use crate::application::services::audit::TracingEventPublisher;
use crate::application::services::consistency::ConsistencyGuard;
use crate::application::services::instrument_service::InstrumentService;
use crate::application::services::order_gate::OrderGate;
use crate::application::services::venue_service::{VenueFilter, VenueService};
use crate::domain::errors::DomainError;
use crate::domain::value_objects::{InstrumentType, VenueStatus, VenueType};
use crate::infrastructure::persistence::in_memory::{
    InMemoryInstrumentRepository, InMemoryVenueRepository,
};
use std::sync::Arc;
use tokio::sync::Mutex;

struct Registry {
    venues: Arc<VenueService>,
    instruments: Arc<InstrumentService>,
    gate: OrderGate,
}

fn registry() -> Registry {
    let venue_repo: Arc<InMemoryVenueRepository> = Arc::new(InMemoryVenueRepository::new());
    let instrument_repo = Arc::new(InMemoryInstrumentRepository::new());
    let guard = ConsistencyGuard::new(venue_repo.clone(), instrument_repo.clone());
    let events: Arc<TracingEventPublisher> = Arc::new(TracingEventPublisher::new());
    let write_lock = Arc::new(Mutex::new(()));

    let venues = Arc::new(VenueService::new(
        venue_repo,
        instrument_repo.clone(),
        guard.clone(),
        events.clone(),
        write_lock.clone(),
    ));
    let instruments = Arc::new(InstrumentService::new(
        instrument_repo,
        venues.clone(),
        guard,
        events.clone(),
        write_lock,
    ));
    let gate = OrderGate::new(instruments.clone(), venues.clone(), events);
    Registry {
        venues,
        instruments,
        gate,
    }
}

/// The full lifecycle walk: create a venue, list an instrument, collide on
/// a case variant, halt and reopen the venue around admission attempts, and
/// finally delete the venue out from under the instrument.
#[tokio::test]
async fn full_registry_lifecycle() {
    let r = registry();

    // Create NYSE; the default variant opens it immediately.
    let nyse = r.venues.create("NYSE", "New York", VenueType::Rm).await.unwrap();
    assert_eq!(nyse.status(), VenueStatus::Open);

    // List AAPL on NYSE.
    let aapl = r
        .instruments
        .create("AAPL", "Apple Inc.", InstrumentType::Stock, nyse.id())
        .await
        .unwrap();

    // A case variant of the symbol is a conflict.
    let err = r
        .instruments
        .create("aapl", "Apple again", InstrumentType::Stock, nyse.id())
        .await
        .unwrap_err();
    assert!(err.is_conflict());

    // Halt the venue; admission is now rejected with the halted status.
    r.venues.set_status(nyse.id(), VenueStatus::Halted).await.unwrap();
    let err = r.gate.admit(aapl.id()).await.unwrap_err();
    assert_eq!(err, DomainError::venue_closed("NYSE", VenueStatus::Halted));

    // Reopen; admission succeeds.
    r.venues.set_status(nyse.id(), VenueStatus::Open).await.unwrap();
    let admission = r.gate.admit(aapl.id()).await.unwrap();
    assert_eq!(admission.symbol, "AAPL");
    assert_eq!(admission.venue_name, "NYSE");

    // Delete the venue; the instrument goes with it.
    r.venues.delete(nyse.id()).await.unwrap();
    assert!(r.instruments.get(aapl.id()).await.unwrap_err().is_not_found());
    assert!(r.gate.admit(aapl.id()).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn venue_name_collision_is_case_insensitive_end_to_end() {
    let r = registry();
    r.venues.create("Deutsche Börse", "Frankfurt", VenueType::Rm).await.unwrap();

    let err = r
        .venues
        .create("DEUTSCHE BÖRSE", "Frankfurt", VenueType::Rm)
        .await
        .unwrap_err();
    assert!(err.is_conflict());
}

#[tokio::test]
async fn cascade_delete_with_many_instruments_leaves_no_orphans() {
    let r = registry();
    let nyse = r.venues.create("NYSE", "New York", VenueType::Rm).await.unwrap();
    let lse = r.venues.create("LSE", "London", VenueType::Rm).await.unwrap();

    for symbol in ["AAPL", "MSFT", "GE"] {
        r.instruments
            .create(symbol, "On NYSE", InstrumentType::Stock, nyse.id())
            .await
            .unwrap();
    }
    let vod = r
        .instruments
        .create("VOD", "Vodafone", InstrumentType::Stock, lse.id())
        .await
        .unwrap();

    r.venues.delete(nyse.id()).await.unwrap();

    // No instrument references the deleted venue; the other venue's listing
    // is untouched.
    assert!(r.instruments.list_by_venue(nyse.id()).await.unwrap().is_empty());
    let remaining = r.instruments.list().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id(), vod.id());

    // The freed symbols are usable again.
    r.instruments
        .create("AAPL", "Apple on LSE", InstrumentType::Stock, lse.id())
        .await
        .unwrap();
}

#[tokio::test]
async fn search_is_looser_than_uniqueness() {
    let r = registry();
    let nyse = r.venues.create("NYSE", "New York", VenueType::Rm).await.unwrap();

    r.instruments
        .create("AAPL", "Apple", InstrumentType::Stock, nyse.id())
        .await
        .unwrap();
    // Uniqueness is exact-match: the shared prefix does not collide.
    r.instruments
        .create("AA", "Alcoa", InstrumentType::Stock, nyse.id())
        .await
        .unwrap();

    // Search is substring: "aa" finds both.
    assert_eq!(r.instruments.find_by_symbol("aa").await.unwrap().len(), 2);

    // Venue listing behaves the same way.
    r.venues.create("NYSE Arca", "Chicago", VenueType::Mtf).await.unwrap();
    let filter = VenueFilter {
        name_contains: Some("nyse".to_string()),
        ..VenueFilter::default()
    };
    assert_eq!(r.venues.list(&filter).await.unwrap().len(), 2);
}

#[tokio::test]
async fn decommissioned_venue_is_frozen_but_deletable() {
    let r = registry();
    let venue = r.venues.create("MTS", "Milan", VenueType::Otf).await.unwrap();
    let bond = r
        .instruments
        .create("BTP10", "Italian 10Y", InstrumentType::Bond, venue.id())
        .await
        .unwrap();

    r.venues
        .set_status(venue.id(), VenueStatus::Decommissioned)
        .await
        .unwrap();

    // No status change can revive it, and no order passes.
    assert!(matches!(
        r.venues
            .set_status(venue.id(), VenueStatus::Open)
            .await
            .unwrap_err(),
        DomainError::InvalidTransition { .. }
    ));
    assert!(r.gate.admit(bond.id()).await.unwrap_err().is_venue_closed());

    // Deletion still works and takes the listing with it.
    r.venues.delete(venue.id()).await.unwrap();
    assert!(r.instruments.get(bond.id()).await.unwrap_err().is_not_found());
}
