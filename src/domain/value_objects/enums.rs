//! # Domain Enums
//!
//! Closed classification sets for venues and instruments.
//!
//! - [`VenueType`]: regulatory classification of a trading venue
//! - [`InstrumentType`]: asset-class classification of an instrument

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when parsing an enum from a string fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind}: '{value}'")]
pub struct ParseEnumError {
    /// The enum kind that failed to parse.
    pub kind: &'static str,
    /// The rejected input value.
    pub value: String,
}

impl ParseEnumError {
    fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// Regulatory classification of a trading venue.
///
/// # Examples
///
/// ```
/// use venue_registry::domain::value_objects::enums::VenueType;
///
/// let venue_type: VenueType = "MTF".parse().unwrap();
/// assert_eq!(venue_type, VenueType::Mtf);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VenueType {
    /// Regulated Market.
    Rm,
    /// Multilateral Trading Facility.
    Mtf,
    /// Organized Trading Facility.
    Otf,
}

impl fmt::Display for VenueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Rm => "RM",
            Self::Mtf => "MTF",
            Self::Otf => "OTF",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for VenueType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "RM" => Ok(Self::Rm),
            "MTF" => Ok(Self::Mtf),
            "OTF" => Ok(Self::Otf),
            other => Err(ParseEnumError::new("venue type", other)),
        }
    }
}

/// Asset-class classification of a financial instrument.
///
/// # Examples
///
/// ```
/// use venue_registry::domain::value_objects::enums::InstrumentType;
///
/// let instrument_type: InstrumentType = "stock".parse().unwrap();
/// assert_eq!(instrument_type, InstrumentType::Stock);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstrumentType {
    /// Equity share.
    Stock,
    /// Debt security.
    Bond,
    /// Exchange-traded fund.
    Etf,
    /// Derivative contract.
    Derivative,
}

impl fmt::Display for InstrumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Stock => "STOCK",
            Self::Bond => "BOND",
            Self::Etf => "ETF",
            Self::Derivative => "DERIVATIVE",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for InstrumentType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "STOCK" => Ok(Self::Stock),
            "BOND" => Ok(Self::Bond),
            "ETF" => Ok(Self::Etf),
            "DERIVATIVE" => Ok(Self::Derivative),
            other => Err(ParseEnumError::new("instrument type", other)),
        }
    }
}
