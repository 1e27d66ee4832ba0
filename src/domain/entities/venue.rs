//! # Venue Entity
//!
//! Represents a trading venue.
//!
//! A venue has a human-readable name (unique case-insensitively across the
//! registry), a free-text location, a regulatory [`VenueType`] and an
//! operational [`VenueStatus`]. A venue exclusively owns the instruments
//! listed on it; that ownership lives in the instrument's venue reference
//! and the cascading delete routine of the venue service, not in this
//! struct.
//!
//! # Examples
//!
//! ```
//! use venue_registry::domain::entities::venue::Venue;
//! use venue_registry::domain::value_objects::{VenueStatus, VenueType};
//!
//! let mut venue = Venue::new("NYSE", "New York", VenueType::Rm, VenueStatus::Open).unwrap();
//! assert!(venue.status().is_open());
//!
//! let changed = venue.transition_to(VenueStatus::Halted).unwrap();
//! assert!(changed);
//! assert_eq!(venue.status(), VenueStatus::Halted);
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{Timestamp, VenueId, VenueStatus, VenueType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A trading venue.
///
/// The id is generated at construction and never changes. Status changes go
/// through [`transition_to`](Venue::transition_to), which enforces the
/// lifecycle state machine; there is no raw status setter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    /// Unique identifier.
    id: VenueId,
    /// Human-readable name, unique case-insensitively among venues.
    name: String,
    /// Free-text location.
    location: String,
    /// Regulatory classification.
    venue_type: VenueType,
    /// Operational status.
    status: VenueStatus,
    /// When this venue was created.
    created_at: Timestamp,
    /// When this venue was last updated.
    updated_at: Timestamp,
}

impl Venue {
    /// Creates a new venue.
    ///
    /// The name is trimmed; leading/trailing whitespace never reaches
    /// storage.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidInput`] if the name is empty after
    /// trimming.
    pub fn new(
        name: impl AsRef<str>,
        location: impl Into<String>,
        venue_type: VenueType,
        status: VenueStatus,
    ) -> DomainResult<Self> {
        let name = validated_name(name.as_ref())?;
        let now = Timestamp::now();
        Ok(Self {
            id: VenueId::new_v4(),
            name,
            location: location.into(),
            venue_type,
            status,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstructs a venue from stored parts.
    #[must_use]
    pub fn from_parts(
        id: VenueId,
        name: String,
        location: String,
        venue_type: VenueType,
        status: VenueStatus,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            name,
            location,
            venue_type,
            status,
            created_at,
            updated_at,
        }
    }

    // ========== Accessors ==========

    /// Returns the venue ID.
    #[inline]
    #[must_use]
    pub fn id(&self) -> VenueId {
        self.id
    }

    /// Returns the venue name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the venue location.
    #[inline]
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns the regulatory classification.
    #[inline]
    #[must_use]
    pub fn venue_type(&self) -> VenueType {
        self.venue_type
    }

    /// Returns the operational status.
    #[inline]
    #[must_use]
    pub fn status(&self) -> VenueStatus {
        self.status
    }

    /// Returns when this venue was created.
    #[inline]
    #[must_use]
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Returns when this venue was last updated.
    #[inline]
    #[must_use]
    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Returns true if the venue is open for trading.
    #[inline]
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.status.is_open()
    }

    // ========== Mutators ==========

    /// Renames the venue.
    ///
    /// Uniqueness against other venues is the caller's concern; this only
    /// validates the shape of the name itself.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidInput`] if the name is empty after
    /// trimming.
    pub fn rename(&mut self, name: impl AsRef<str>) -> DomainResult<()> {
        self.name = validated_name(name.as_ref())?;
        self.touch();
        Ok(())
    }

    /// Sets the venue location.
    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = location.into();
        self.touch();
    }

    /// Sets the regulatory classification.
    pub fn set_venue_type(&mut self, venue_type: VenueType) {
        self.venue_type = venue_type;
        self.touch();
    }

    /// Moves the venue to a new operational status.
    ///
    /// Returns `true` if the status actually changed, `false` for the
    /// idempotent same-state no-op.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidTransition`] if the venue is
    /// decommissioned (every attempt fails, including to `Decommissioned`
    /// itself) or if the target is unreachable from the current status.
    pub fn transition_to(&mut self, target: VenueStatus) -> DomainResult<bool> {
        if self.status.is_terminal() {
            return Err(DomainError::InvalidTransition {
                from: self.status,
                to: target,
            });
        }
        if self.status == target {
            return Ok(false);
        }
        if !self.status.can_transition_to(target) {
            return Err(DomainError::InvalidTransition {
                from: self.status,
                to: target,
            });
        }
        self.status = target;
        self.touch();
        Ok(true)
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Venue({} '{}' [{}] {})",
            self.id, self.name, self.venue_type, self.status
        )
    }
}

fn validated_name(name: &str) -> DomainResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::invalid_input("venue name must not be empty"));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_venue() -> Venue {
        Venue::new("NYSE", "New York", VenueType::Rm, VenueStatus::Open).unwrap()
    }

    mod construction {
        use super::*;

        #[test]
        fn new_assigns_id_and_timestamps() {
            let venue = sample_venue();
            assert_eq!(venue.name(), "NYSE");
            assert_eq!(venue.location(), "New York");
            assert_eq!(venue.venue_type(), VenueType::Rm);
            assert_eq!(venue.status(), VenueStatus::Open);
            assert_eq!(venue.created_at(), venue.updated_at());
        }

        #[test]
        fn new_trims_name() {
            let venue =
                Venue::new("  LSE  ", "London", VenueType::Rm, VenueStatus::Open).unwrap();
            assert_eq!(venue.name(), "LSE");
        }

        #[test]
        fn new_empty_name_fails() {
            let result = Venue::new("   ", "Nowhere", VenueType::Otf, VenueStatus::Open);
            assert!(matches!(result, Err(DomainError::InvalidInput { .. })));
        }

        #[test]
        fn ids_are_unique() {
            assert_ne!(sample_venue().id(), sample_venue().id());
        }
    }

    mod mutation {
        use super::*;

        #[test]
        fn rename_validates_and_trims() {
            let mut venue = sample_venue();
            venue.rename(" Euronext ").unwrap();
            assert_eq!(venue.name(), "Euronext");
            assert!(venue.rename("").is_err());
        }

        #[test]
        fn set_location_and_type() {
            let mut venue = sample_venue();
            venue.set_location("Jersey City");
            venue.set_venue_type(VenueType::Mtf);
            assert_eq!(venue.location(), "Jersey City");
            assert_eq!(venue.venue_type(), VenueType::Mtf);
        }
    }

    mod transitions {
        use super::*;

        #[test]
        fn legal_transition_changes_status() {
            let mut venue = sample_venue();
            assert!(venue.transition_to(VenueStatus::Halted).unwrap());
            assert_eq!(venue.status(), VenueStatus::Halted);
            assert!(venue.transition_to(VenueStatus::Open).unwrap());
            assert!(venue.is_open());
        }

        #[test]
        fn same_state_is_a_noop() {
            let mut venue = sample_venue();
            assert!(!venue.transition_to(VenueStatus::Open).unwrap());
            assert_eq!(venue.status(), VenueStatus::Open);
        }

        #[test]
        fn illegal_transition_fails() {
            let mut venue =
                Venue::new("CBOE", "Chicago", VenueType::Rm, VenueStatus::PendingApproval)
                    .unwrap();
            let err = venue.transition_to(VenueStatus::Halted).unwrap_err();
            assert!(matches!(
                err,
                DomainError::InvalidTransition {
                    from: VenueStatus::PendingApproval,
                    to: VenueStatus::Halted,
                }
            ));
            assert_eq!(venue.status(), VenueStatus::PendingApproval);
        }

        #[test]
        fn decommissioned_rejects_everything() {
            let mut venue = sample_venue();
            venue.transition_to(VenueStatus::Decommissioned).unwrap();

            for target in [
                VenueStatus::PendingApproval,
                VenueStatus::Open,
                VenueStatus::Closed,
                VenueStatus::Halted,
                VenueStatus::Decommissioned,
            ] {
                let err = venue.transition_to(target).unwrap_err();
                assert!(
                    matches!(err, DomainError::InvalidTransition { .. }),
                    "expected InvalidTransition for {target}"
                );
            }
        }
    }

    mod serde {
        use super::*;

        #[test]
        fn roundtrip() {
            let venue = sample_venue();
            let json = serde_json::to_string(&venue).unwrap();
            let deserialized: Venue = serde_json::from_str(&json).unwrap();
            assert_eq!(venue, deserialized);
        }
    }
}
