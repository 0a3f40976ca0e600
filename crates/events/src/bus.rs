//! In-process event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] is shared via `Arc<EventBus>`. It implements
//! [`ChangeSink`], so handing it to a
//! [`Workspace`](teamspace_db::Workspace) turns every store mutation into a
//! [`TeamEvent`].

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use teamspace_core::changes::{ChangeSink, EntityChange};
use tokio::sync::broadcast;

// ---------------------------------------------------------------------------
// TeamEvent
// ---------------------------------------------------------------------------

/// Something that happened in the workspace.
#[derive(Debug, Clone, Serialize)]
pub struct TeamEvent {
    /// Dot-separated event name, e.g. `"space.created"`.
    pub event_type: String,

    /// The store mutation behind this event, if it came from a store.
    pub change: Option<EntityChange>,

    /// Free-form JSON payload carrying event-specific data.
    pub payload: serde_json::Value,

    pub timestamp: DateTime<Utc>,
}

impl TeamEvent {
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            change: None,
            payload: serde_json::Value::Object(Default::default()),
            timestamp: Utc::now(),
        }
    }

    /// Event for a committed store mutation.
    pub fn from_change(change: EntityChange) -> Self {
        Self {
            change: Some(change.clone()),
            ..Self::new(change.event_type())
        }
    }

    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = payload;
        self
    }
}

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 1024;

/// In-process fan-out event bus.
///
/// ```rust
/// use teamspace_events::bus::{EventBus, TeamEvent};
///
/// let bus = EventBus::default();
/// let mut rx = bus.subscribe();
///
/// bus.publish(TeamEvent::new("space.created"));
/// ```
pub struct EventBus {
    sender: broadcast::Sender<TeamEvent>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// Slow receivers observe `RecvError::Lagged` once the buffer is full.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// Events published with no subscriber are dropped.
    pub fn publish(&self, event: TeamEvent) {
        let _ = self.sender.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<TeamEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl ChangeSink for EventBus {
    fn notify(&self, change: EntityChange) {
        tracing::debug!(
            event_type = %change.event_type(),
            entity_id = %change.entity_id,
            "Publishing store change"
        );
        self.publish(TeamEvent::from_change(change));
    }
}

/// Convenience for callers holding the bus behind an `Arc`.
pub fn as_sink(bus: &Arc<EventBus>) -> Arc<dyn ChangeSink> {
    bus.clone()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
