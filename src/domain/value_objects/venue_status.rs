//! # Venue Status
//!
//! Venue operational-status state machine.
//!
//! This module provides the [`VenueStatus`] enum representing the lifecycle
//! of a trading venue with enforced state transitions.
//!
//! # State Machine
//!
//! ```text
//! PendingApproval → Open ⇄ Closed
//!                    ↓  ↘   ↓
//!                    ↓   Halted
//!                    ↓  ↙   ↓
//!                Decommissioned (terminal)
//! ```
//!
//! Orders are admitted only while a venue is [`Open`](VenueStatus::Open).
//! [`Decommissioned`](VenueStatus::Decommissioned) is terminal: no further
//! transitions are permitted, not even to itself.
//!
//! # Examples
//!
//! ```
//! use venue_registry::domain::value_objects::venue_status::VenueStatus;
//!
//! let status = VenueStatus::Open;
//! assert!(status.can_transition_to(VenueStatus::Halted));
//! assert!(!status.can_transition_to(VenueStatus::PendingApproval));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Venue operational status.
///
/// Represents the current lifecycle state of a trading venue. State
/// transitions are enforced via [`can_transition_to`](VenueStatus::can_transition_to).
///
/// # Terminal States
///
/// [`Decommissioned`](VenueStatus::Decommissioned) is the only terminal
/// state; once a venue reaches it, every further transition attempt fails.
///
/// # Examples
///
/// ```
/// use venue_registry::domain::value_objects::venue_status::VenueStatus;
///
/// assert!(!VenueStatus::Halted.is_terminal());
/// assert!(VenueStatus::Decommissioned.is_terminal());
/// assert!(VenueStatus::Open.is_open());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum VenueStatus {
    /// The venue is registered but awaiting approval to begin trading.
    PendingApproval = 0,

    /// The venue is approved and currently open for trading.
    #[default]
    Open = 1,

    /// The venue is approved but currently closed (e.g. outside market hours).
    Closed = 2,

    /// Trading on the venue is temporarily suspended.
    Halted = 3,

    /// The venue has been permanently retired (terminal).
    Decommissioned = 4,
}

impl VenueStatus {
    /// Returns true if this is a terminal state.
    ///
    /// # Examples
    ///
    /// ```
    /// use venue_registry::domain::value_objects::venue_status::VenueStatus;
    ///
    /// assert!(VenueStatus::Decommissioned.is_terminal());
    /// assert!(!VenueStatus::Closed.is_terminal());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Decommissioned)
    }

    /// Returns true if the venue is open for trading.
    ///
    /// Order admission requires exactly this state; every other status
    /// rejects order processing.
    #[inline]
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }

    /// Returns true if this state can transition to the target state.
    ///
    /// Enforces the venue lifecycle rules:
    /// - PendingApproval → Open, Decommissioned
    /// - Open → Closed, Halted, Decommissioned
    /// - Closed → Open, Halted, Decommissioned
    /// - Halted → Open, Closed, Decommissioned
    /// - Decommissioned → (none)
    ///
    /// A same-state "transition" is not an edge of the machine; callers that
    /// want idempotent status updates handle that case before consulting
    /// this check.
    ///
    /// # Examples
    ///
    /// ```
    /// use venue_registry::domain::value_objects::venue_status::VenueStatus;
    ///
    /// assert!(VenueStatus::PendingApproval.can_transition_to(VenueStatus::Open));
    /// assert!(VenueStatus::Halted.can_transition_to(VenueStatus::Closed));
    /// assert!(!VenueStatus::PendingApproval.can_transition_to(VenueStatus::Halted));
    /// assert!(!VenueStatus::Decommissioned.can_transition_to(VenueStatus::Open));
    /// ```
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            // From PendingApproval
            (Self::PendingApproval, Self::Open)
                | (Self::PendingApproval, Self::Decommissioned)
                // From Open
                | (Self::Open, Self::Closed)
                | (Self::Open, Self::Halted)
                | (Self::Open, Self::Decommissioned)
                // From Closed
                | (Self::Closed, Self::Open)
                | (Self::Closed, Self::Halted)
                | (Self::Closed, Self::Decommissioned)
                // From Halted
                | (Self::Halted, Self::Open)
                | (Self::Halted, Self::Closed)
                | (Self::Halted, Self::Decommissioned)
        )
    }

    /// Returns the valid next states from this state.
    ///
    /// # Examples
    ///
    /// ```
    /// use venue_registry::domain::value_objects::venue_status::VenueStatus;
    ///
    /// let next = VenueStatus::Open.valid_transitions();
    /// assert!(next.contains(&VenueStatus::Halted));
    /// assert!(VenueStatus::Decommissioned.valid_transitions().is_empty());
    /// ```
    #[must_use]
    pub fn valid_transitions(&self) -> Vec<Self> {
        match self {
            Self::PendingApproval => vec![Self::Open, Self::Decommissioned],
            Self::Open => vec![Self::Closed, Self::Halted, Self::Decommissioned],
            Self::Closed => vec![Self::Open, Self::Halted, Self::Decommissioned],
            Self::Halted => vec![Self::Open, Self::Closed, Self::Decommissioned],
            Self::Decommissioned => vec![],
        }
    }

    /// Returns the numeric value of this status.
    #[inline]
    #[must_use]
    pub const fn as_u8(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for VenueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::PendingApproval => "PENDING_APPROVAL",
            Self::Open => "OPEN",
            Self::Closed => "CLOSED",
            Self::Halted => "HALTED",
            Self::Decommissioned => "DECOMMISSIONED",
        };
        write!(f, "{}", s)
    }
}

impl TryFrom<u8> for VenueStatus {
    type Error = InvalidVenueStatusError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::PendingApproval),
            1 => Ok(Self::Open),
            2 => Ok(Self::Closed),
            3 => Ok(Self::Halted),
            4 => Ok(Self::Decommissioned),
            _ => Err(InvalidVenueStatusError(value)),
        }
    }
}

/// Error returned when converting an invalid u8 to [`VenueStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidVenueStatusError(pub u8);

impl fmt::Display for InvalidVenueStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid venue status value: {}", self.0)
    }
}

impl std::error::Error for InvalidVenueStatusError {}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const ALL: [VenueStatus; 5] = [
        VenueStatus::PendingApproval,
        VenueStatus::Open,
        VenueStatus::Closed,
        VenueStatus::Halted,
        VenueStatus::Decommissioned,
    ];

    mod transitions {
        use super::*;

        #[test]
        fn pending_approval_can_only_open_or_decommission() {
            assert!(VenueStatus::PendingApproval.can_transition_to(VenueStatus::Open));
            assert!(VenueStatus::PendingApproval.can_transition_to(VenueStatus::Decommissioned));
            assert!(!VenueStatus::PendingApproval.can_transition_to(VenueStatus::Closed));
            assert!(!VenueStatus::PendingApproval.can_transition_to(VenueStatus::Halted));
        }

        #[test]
        fn open_and_closed_are_mutually_reachable() {
            assert!(VenueStatus::Open.can_transition_to(VenueStatus::Closed));
            assert!(VenueStatus::Closed.can_transition_to(VenueStatus::Open));
        }

        #[test]
        fn halt_and_resume() {
            assert!(VenueStatus::Open.can_transition_to(VenueStatus::Halted));
            assert!(VenueStatus::Closed.can_transition_to(VenueStatus::Halted));
            assert!(VenueStatus::Halted.can_transition_to(VenueStatus::Open));
            assert!(VenueStatus::Halted.can_transition_to(VenueStatus::Closed));
        }

        #[test]
        fn every_non_terminal_state_can_decommission() {
            for status in ALL {
                if !status.is_terminal() {
                    assert!(
                        status.can_transition_to(VenueStatus::Decommissioned),
                        "{status} should be able to decommission"
                    );
                }
            }
        }

        #[test]
        fn decommissioned_has_no_transitions() {
            for target in ALL {
                assert!(
                    !VenueStatus::Decommissioned.can_transition_to(target),
                    "DECOMMISSIONED must not transition to {target}"
                );
            }
            assert!(VenueStatus::Decommissioned.valid_transitions().is_empty());
        }

        #[test]
        fn no_state_reaches_pending_approval() {
            for status in ALL {
                assert!(!status.can_transition_to(VenueStatus::PendingApproval));
            }
        }

        #[test]
        fn same_state_is_not_an_edge() {
            for status in ALL {
                assert!(!status.can_transition_to(status));
            }
        }

        #[test]
        fn valid_transitions_agree_with_can_transition_to() {
            for from in ALL {
                for to in ALL {
                    assert_eq!(
                        from.valid_transitions().contains(&to),
                        from.can_transition_to(to),
                        "mismatch for {from} -> {to}"
                    );
                }
            }
        }
    }

    mod predicates {
        use super::*;

        #[test]
        fn only_decommissioned_is_terminal() {
            for status in ALL {
                assert_eq!(
                    status.is_terminal(),
                    status == VenueStatus::Decommissioned,
                    "{status}"
                );
            }
        }

        #[test]
        fn only_open_is_open() {
            for status in ALL {
                assert_eq!(status.is_open(), status == VenueStatus::Open, "{status}");
            }
        }

        #[test]
        fn default_is_open() {
            assert_eq!(VenueStatus::default(), VenueStatus::Open);
        }
    }

    mod conversions {
        use super::*;

        #[test]
        fn try_from_u8_roundtrip() {
            for status in ALL {
                assert_eq!(VenueStatus::try_from(status.as_u8()).unwrap(), status);
            }
        }

        #[test]
        fn try_from_invalid_u8_fails() {
            assert!(VenueStatus::try_from(99).is_err());
        }

        #[test]
        fn display_screaming_snake_case() {
            assert_eq!(VenueStatus::PendingApproval.to_string(), "PENDING_APPROVAL");
            assert_eq!(VenueStatus::Open.to_string(), "OPEN");
            assert_eq!(VenueStatus::Decommissioned.to_string(), "DECOMMISSIONED");
        }

        #[test]
        fn serde_roundtrip() {
            for status in ALL {
                let json = serde_json::to_string(&status).unwrap();
                let deserialized: VenueStatus = serde_json::from_str(&json).unwrap();
                assert_eq!(status, deserialized);
            }
        }

        #[test]
        fn serde_uses_screaming_snake_case() {
            let json = serde_json::to_string(&VenueStatus::PendingApproval).unwrap();
            assert_eq!(json, "\"PENDING_APPROVAL\"");
        }
    }
}
