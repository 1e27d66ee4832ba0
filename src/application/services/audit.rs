//! # Audit Trail
//!
//! Best-effort publication of domain events.
//!
//! Audit events are non-authoritative: a publish failure is logged and
//! swallowed, never surfaced to the caller. The consistency contract lives
//! entirely in the entity store.

use crate::domain::events::{DomainEvent, EventRecord};
use async_trait::async_trait;
use std::fmt;
use tracing::{info, warn};

/// Sink for audit events.
#[async_trait]
pub trait EventPublisher: Send + Sync + fmt::Debug {
    /// Publishes a domain event.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink rejects the event. Callers treat this as
    /// a logging gap, not a failure of the operation that emitted the event.
    async fn publish(&self, event: DomainEvent) -> Result<(), String>;
}

/// [`EventPublisher`] that writes events to the tracing subscriber.
///
/// This is the default audit sink: every event becomes a structured
/// `info`-level log record carrying the event kind and JSON payload.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventPublisher;

impl TracingEventPublisher {
    /// Creates a new tracing-backed publisher.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EventPublisher for TracingEventPublisher {
    async fn publish(&self, event: DomainEvent) -> Result<(), String> {
        let record = EventRecord::new(event);
        let payload = serde_json::to_string(record.event()).map_err(|e| e.to_string())?;
        info!(
            event_id = %record.id(),
            kind = record.event().kind(),
            %payload,
            "audit event"
        );
        Ok(())
    }
}

/// Publishes an event, downgrading any failure to a warning log.
pub(crate) async fn publish_best_effort(publisher: &dyn EventPublisher, event: DomainEvent) {
    let kind = event.kind();
    if let Err(error) = publisher.publish(event).await {
        warn!(kind, %error, "audit event publish failed");
    }
}
