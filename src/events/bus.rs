//! Notification bus for adapter status events.

use std::fmt;

use serde::Serialize;
use tokio::sync::broadcast;

/// Buffered events per subscriber before slow receivers start lagging.
pub const DEFAULT_CAPACITY: usize = 64;

/// Named status events the host listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EventKind {
    Online,
    Offline,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Online => "ONLINE",
            EventKind::Offline => "OFFLINE",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An event plus its `{id}` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdapterEvent {
    #[serde(rename = "event")]
    pub kind: EventKind,
    /// Identity of the adapter instance that emitted the event.
    pub id: String,
}

impl AdapterEvent {
    pub fn new(kind: EventKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }
}

/// Broadcast channel every host observer can subscribe to.
#[derive(Debug, Clone)]
pub struct EventBus {
    tx: broadcast::Sender<AdapterEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<AdapterEvent> {
        self.tx.subscribe()
    }

    /// Publish an event. Returns how many subscribers received it; having
    /// none is not an error.
    pub fn emit(&self, event: AdapterEvent) -> usize {
        self.tx.send(event).unwrap_or(0)
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
