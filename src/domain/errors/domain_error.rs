//! # Domain Errors
//!
//! Typed domain error definitions.
//!
//! This module provides the [`DomainError`] enum for representing
//! domain-level failures with numeric error codes. Every registry operation
//! surfaces one of these typed outcomes; nothing is retried internally and
//! nothing substitutes a default.
//!
//! # Error Code Ranges
//!
//! - **1000-1999**: Validation errors
//! - **2000-2999**: State errors
//! - **3000-3999**: Policy errors
//! - **4000-4999**: Storage errors
//!
//! # Examples
//!
//! ```
//! use venue_registry::domain::errors::DomainError;
//!
//! let error = DomainError::invalid_input("venue name must not be empty");
//! assert_eq!(error.code(), 1001);
//! assert_eq!(error.category(), "validation");
//! ```

use crate::domain::value_objects::{InstrumentId, VenueId, VenueStatus};
use thiserror::Error;

/// The entity kind referenced by a [`DomainError::NotFound`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// A trading venue.
    Venue,
    /// A financial instrument.
    Instrument,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Venue => "venue",
            Self::Instrument => "instrument",
        };
        write!(f, "{}", s)
    }
}

/// Domain-level error with numeric error codes.
///
/// All variants are terminal, non-retryable outcomes. [`VenueClosed`]
/// (order admission blocked) is an expected business outcome rather than a
/// fault; [`Store`] wraps an opaque storage failure and is fatal to the
/// calling operation.
///
/// [`VenueClosed`]: DomainError::VenueClosed
/// [`Store`]: DomainError::Store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (1000-1999)
    // ========================================================================
    /// A required field is missing or malformed.
    #[error("{message}")]
    InvalidInput {
        /// Description of the rejected input.
        message: String,
    },

    // ========================================================================
    // State Errors (2000-2999)
    // ========================================================================
    /// The referenced entity does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound {
        /// The entity kind that was looked up.
        entity: EntityKind,
        /// The id that failed to resolve.
        id: String,
    },

    /// A uniqueness invariant would be violated.
    #[error("{message}")]
    Conflict {
        /// Description of the colliding value.
        message: String,
    },

    /// An illegal venue lifecycle transition was attempted.
    #[error("invalid status transition from {from} to {to}")]
    InvalidTransition {
        /// The venue's current status.
        from: VenueStatus,
        /// The attempted target status.
        to: VenueStatus,
    },

    // ========================================================================
    // Policy Errors (3000-3999)
    // ========================================================================
    /// Order admission blocked because the venue is not open.
    #[error("venue '{venue}' is not open for trading (status: {status})")]
    VenueClosed {
        /// Name of the venue that rejected the order.
        venue: String,
        /// The venue's current status.
        status: VenueStatus,
    },

    // ========================================================================
    // Storage Errors (4000-4999)
    // ========================================================================
    /// An opaque failure from the entity store, surfaced unchanged.
    #[error("storage failure: {0}")]
    Store(String),
}

impl DomainError {
    /// Creates a validation error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Creates a not-found error for a venue id.
    #[must_use]
    pub fn venue_not_found(id: VenueId) -> Self {
        Self::NotFound {
            entity: EntityKind::Venue,
            id: id.to_string(),
        }
    }

    /// Creates a not-found error for an instrument id.
    #[must_use]
    pub fn instrument_not_found(id: InstrumentId) -> Self {
        Self::NotFound {
            entity: EntityKind::Instrument,
            id: id.to_string(),
        }
    }

    /// Creates a uniqueness conflict error.
    #[must_use]
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Creates an order-admission rejection for a venue that is not open.
    #[must_use]
    pub fn venue_closed(venue: impl Into<String>, status: VenueStatus) -> Self {
        Self::VenueClosed {
            venue: venue.into(),
            status,
        }
    }

    /// Creates an opaque storage failure.
    #[must_use]
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store(message.into())
    }

    /// Returns the numeric error code.
    ///
    /// # Examples
    ///
    /// ```
    /// use venue_registry::domain::errors::DomainError;
    ///
    /// assert_eq!(DomainError::invalid_input("empty").code(), 1001);
    /// assert_eq!(DomainError::conflict("duplicate").code(), 2002);
    /// ```
    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            // Validation errors (1000-1999)
            Self::InvalidInput { .. } => 1001,

            // State errors (2000-2999)
            Self::NotFound { .. } => 2001,
            Self::Conflict { .. } => 2002,
            Self::InvalidTransition { .. } => 2003,

            // Policy errors (3000-3999)
            Self::VenueClosed { .. } => 3001,

            // Storage errors (4000-4999)
            Self::Store(_) => 4001,
        }
    }

    /// Returns the error category name.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self.code() {
            1000..=1999 => "validation",
            2000..=2999 => "state",
            3000..=3999 => "policy",
            4000..=4999 => "storage",
            _ => "unknown",
        }
    }

    /// Returns true if this is a not-found error.
    #[inline]
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true if this is a uniqueness conflict.
    #[inline]
    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }

    /// Returns true if this is an order-admission rejection.
    #[inline]
    #[must_use]
    pub const fn is_venue_closed(&self) -> bool {
        matches!(self, Self::VenueClosed { .. })
    }

    /// Returns true if this is a storage failure.
    #[inline]
    #[must_use]
    pub const fn is_store_failure(&self) -> bool {
        matches!(self, Self::Store(_))
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
