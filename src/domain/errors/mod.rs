//! # Domain Errors
//!
//! Typed error definitions for the domain layer.

pub mod domain_error;

pub use domain_error::{DomainError, DomainResult, EntityKind};
