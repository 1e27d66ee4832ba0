//! # Domain Events
//!
//! Events emitted during registry operations for the audit trail.
//!
//! - `VenueCreated` / `VenueUpdated` / `VenueStatusChanged` / `VenueDeleted`
//! - `InstrumentListed` / `InstrumentUpdated` / `InstrumentDelisted`
//! - `OrderAdmitted`

pub mod domain_event;

pub use domain_event::{DomainEvent, EventRecord};
