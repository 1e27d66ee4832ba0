//! # Instrument Entity
//!
//! Represents a financial instrument listed on a venue.
//!
//! The symbol and the owning venue are fixed at creation. Changing either
//! would amount to a silent relisting, so neither has a mutator; a delisting
//! followed by a fresh listing is the supported path.
//!
//! # Examples
//!
//! ```
//! use venue_registry::domain::entities::instrument::Instrument;
//! use venue_registry::domain::value_objects::{InstrumentType, VenueId};
//!
//! let venue_id = VenueId::new_v4();
//! let instrument =
//!     Instrument::new("AAPL", "Apple Inc.", InstrumentType::Stock, venue_id).unwrap();
//! assert_eq!(instrument.symbol(), "AAPL");
//! assert_eq!(instrument.venue_id(), venue_id);
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{InstrumentId, InstrumentType, Timestamp, VenueId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A financial instrument listed on exactly one venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instrument {
    /// Unique identifier.
    id: InstrumentId,
    /// Ticker symbol, unique case-insensitively across the whole registry.
    symbol: String,
    /// Free-text descriptive name.
    name: String,
    /// Asset-class classification.
    instrument_type: InstrumentType,
    /// The owning venue.
    venue_id: VenueId,
    /// When this instrument was listed.
    created_at: Timestamp,
    /// When this instrument was last updated.
    updated_at: Timestamp,
}

impl Instrument {
    /// Creates a new instrument listed on the given venue.
    ///
    /// The symbol is trimmed. Whether the venue exists and whether the
    /// symbol collides with an existing listing are the registry's concern,
    /// not this constructor's.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidInput`] if the symbol is empty after
    /// trimming.
    pub fn new(
        symbol: impl AsRef<str>,
        name: impl Into<String>,
        instrument_type: InstrumentType,
        venue_id: VenueId,
    ) -> DomainResult<Self> {
        let symbol = symbol.as_ref().trim();
        if symbol.is_empty() {
            return Err(DomainError::invalid_input(
                "instrument symbol must not be empty",
            ));
        }
        let now = Timestamp::now();
        Ok(Self {
            id: InstrumentId::new_v4(),
            symbol: symbol.to_string(),
            name: name.into(),
            instrument_type,
            venue_id,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstructs an instrument from stored parts.
    #[must_use]
    pub fn from_parts(
        id: InstrumentId,
        symbol: String,
        name: String,
        instrument_type: InstrumentType,
        venue_id: VenueId,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            symbol,
            name,
            instrument_type,
            venue_id,
            created_at,
            updated_at,
        }
    }

    // ========== Accessors ==========

    /// Returns the instrument ID.
    #[inline]
    #[must_use]
    pub fn id(&self) -> InstrumentId {
        self.id
    }

    /// Returns the ticker symbol.
    #[inline]
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Returns the descriptive name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the asset-class classification.
    #[inline]
    #[must_use]
    pub fn instrument_type(&self) -> InstrumentType {
        self.instrument_type
    }

    /// Returns the id of the owning venue.
    #[inline]
    #[must_use]
    pub fn venue_id(&self) -> VenueId {
        self.venue_id
    }

    /// Returns when this instrument was listed.
    #[inline]
    #[must_use]
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Returns when this instrument was last updated.
    #[inline]
    #[must_use]
    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    // ========== Mutators ==========
    //
    // Only the descriptive fields are mutable. Symbol and venue have no
    // setters: both are immutable after creation.

    /// Sets the descriptive name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.touch();
    }

    /// Sets the asset-class classification.
    pub fn set_instrument_type(&mut self, instrument_type: InstrumentType) {
        self.instrument_type = instrument_type;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Instrument({} '{}' [{}] on {})",
            self.id, self.symbol, self.instrument_type, self.venue_id
        )
    }
}
