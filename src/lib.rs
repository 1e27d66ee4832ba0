//! # Venue Registry
//!
//! Registry service for trading venues and the financial instruments listed
//! on them, enforcing the consistency rules that keep the two in step:
//! case-insensitive name/symbol uniqueness, a venue operational-status
//! lifecycle, referential integrity between an instrument and its owning
//! venue, and an admission gate that blocks order processing unless the
//! venue is open.
//!
//! ## Architecture
//!
//! This crate follows Domain-Driven Design with a layered architecture:
//!
//! - **Domain Layer** (`domain`): Entities, value objects, domain events, and typed errors
//! - **Application Layer** (`application`): Services orchestrating the consistency rules
//! - **Infrastructure Layer** (`infrastructure`): Repository ports and storage adapters
//! - **API Layer** (`api`): REST interface
//!
//! ## Example
//!
//! ```rust,ignore
//! use venue_registry::application::services::VenueService;
//! use venue_registry::domain::value_objects::VenueType;
//!
//! let venue = venue_service.create("NYSE", "New York", VenueType::Rm).await?;
//! let instrument = instrument_service
//!     .create("AAPL", "Apple Inc.", InstrumentType::Stock, venue.id())
//!     .await?;
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
