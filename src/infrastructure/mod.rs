//! # Infrastructure Layer
//!
//! Implementations of the domain's storage ports.
//!
//! ## Persistence
//!
//! - Repository traits consumed by the application services
//! - In-memory repositories backing the service binary and the tests

pub mod persistence;

pub use persistence as repos;
