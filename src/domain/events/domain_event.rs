//! # Domain Events
//!
//! Audit events emitted by registry operations.
//!
//! Events are non-authoritative: they record what happened for the audit
//! trail but never participate in the consistency contract. A lost event is
//! a logging gap, not a data problem.

use crate::domain::value_objects::{EventId, InstrumentId, Timestamp, VenueId, VenueStatus};
use serde::{Deserialize, Serialize};

/// An audit event describing a completed registry operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DomainEvent {
    /// A venue was created.
    VenueCreated {
        /// The new venue's id.
        venue_id: VenueId,
        /// The new venue's name.
        name: String,
        /// The status the venue started in.
        status: VenueStatus,
    },

    /// A venue's descriptive fields were updated.
    VenueUpdated {
        /// The updated venue's id.
        venue_id: VenueId,
        /// The venue's (possibly new) name.
        name: String,
    },

    /// A venue moved to a new operational status.
    VenueStatusChanged {
        /// The venue's id.
        venue_id: VenueId,
        /// The previous status.
        from: VenueStatus,
        /// The new status.
        to: VenueStatus,
    },

    /// A venue and all instruments it owned were removed.
    VenueDeleted {
        /// The deleted venue's id.
        venue_id: VenueId,
        /// How many owned instruments were removed by the cascade.
        instruments_removed: usize,
    },

    /// An instrument was listed on a venue.
    InstrumentListed {
        /// The new instrument's id.
        instrument_id: InstrumentId,
        /// The new instrument's symbol.
        symbol: String,
        /// The owning venue's id.
        venue_id: VenueId,
    },

    /// An instrument's descriptive fields were updated.
    InstrumentUpdated {
        /// The updated instrument's id.
        instrument_id: InstrumentId,
    },

    /// An instrument was removed from the registry.
    InstrumentDelisted {
        /// The removed instrument's id.
        instrument_id: InstrumentId,
        /// The removed instrument's symbol.
        symbol: String,
    },

    /// An order passed the admission gate.
    OrderAdmitted {
        /// The admitted instrument's id.
        instrument_id: InstrumentId,
        /// The admitted instrument's symbol.
        symbol: String,
        /// The open venue's id.
        venue_id: VenueId,
    },
}

impl DomainEvent {
    /// Returns a short machine-readable name for the event kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::VenueCreated { .. } => "venue_created",
            Self::VenueUpdated { .. } => "venue_updated",
            Self::VenueStatusChanged { .. } => "venue_status_changed",
            Self::VenueDeleted { .. } => "venue_deleted",
            Self::InstrumentListed { .. } => "instrument_listed",
            Self::InstrumentUpdated { .. } => "instrument_updated",
            Self::InstrumentDelisted { .. } => "instrument_delisted",
            Self::OrderAdmitted { .. } => "order_admitted",
        }
    }
}

/// An event stamped with identity and occurrence time, ready for a sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Unique identifier of this emission.
    id: EventId,
    /// When the event was recorded.
    occurred_at: Timestamp,
    /// The event payload.
    event: DomainEvent,
}

impl EventRecord {
    /// Stamps an event with a fresh id and the current time.
    #[must_use]
    pub fn new(event: DomainEvent) -> Self {
        Self {
            id: EventId::new_v4(),
            occurred_at: Timestamp::now(),
            event,
        }
    }

    /// Returns the emission id.
    #[inline]
    #[must_use]
    pub fn id(&self) -> EventId {
        self.id
    }

    /// Returns when the event was recorded.
    #[inline]
    #[must_use]
    pub fn occurred_at(&self) -> Timestamp {
        self.occurred_at
    }

    /// Returns the event payload.
    #[inline]
    #[must_use]
    pub fn event(&self) -> &DomainEvent {
        &self.event
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_are_stable() {
        let event = DomainEvent::VenueStatusChanged {
            venue_id: VenueId::new_v4(),
            from: VenueStatus::Open,
            to: VenueStatus::Halted,
        };
        assert_eq!(event.kind(), "venue_status_changed");
    }

    #[test]
    fn record_stamps_id_and_time() {
        let event = DomainEvent::VenueDeleted {
            venue_id: VenueId::new_v4(),
            instruments_removed: 3,
        };
        let record = EventRecord::new(event.clone());
        assert_eq!(record.event(), &event);
        assert!(record.occurred_at() > Timestamp::from_millis(0));

        let other = EventRecord::new(event);
        assert_ne!(record.id(), other.id());
    }

    #[test]
    fn serde_tags_event_type() {
        let event = DomainEvent::OrderAdmitted {
            instrument_id: InstrumentId::new_v4(),
            symbol: "AAPL".to_string(),
            venue_id: VenueId::new_v4(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"ORDER_ADMITTED\""));
        let deserialized: DomainEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
