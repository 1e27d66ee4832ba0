//! # Application Layer
//!
//! Orchestration of domain objects over the repository ports.
//!
//! The services here are the only writers in the system. Each mutating
//! operation is a check-then-write sequence serialized through a shared
//! registry write lock, so the uniqueness and referential-integrity checks
//! cannot race each other.

pub mod services;

pub use services::{
    Admission, ConsistencyGuard, EventPublisher, InstrumentService, OrderGate,
    TracingEventPublisher, VenueFilter, VenueService,
};
