//! Instance health state machine.
//!
//! # States
//! - Unknown: no check has completed yet
//! - Online: the last check reached the Table API
//! - Offline: the last check failed (transport, status or hibernation)
//!
//! # State Transitions
//! ```text
//! Unknown / Online / Offline → Online:  check succeeded
//! Unknown / Online / Offline → Offline: check failed
//! ```
//!
//! # Design Decisions
//! - No hysteresis: every check sets the state outright
//! - Nothing moves the state back to Unknown

use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};

use serde::Serialize;

use crate::events::EventKind;

/// Health of one adapter instance.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthState {
    Unknown = 0,
    Online = 1,
    Offline = 2,
}

impl From<u8> for HealthState {
    fn from(val: u8) -> Self {
        match val {
            1 => HealthState::Online,
            2 => HealthState::Offline,
            _ => HealthState::Unknown,
        }
    }
}

impl From<EventKind> for HealthState {
    fn from(kind: EventKind) -> Self {
        match kind {
            EventKind::Online => HealthState::Online,
            EventKind::Offline => HealthState::Offline,
        }
    }
}

impl fmt::Display for HealthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HealthState::Unknown => "unknown",
            HealthState::Online => "online",
            HealthState::Offline => "offline",
        };
        f.write_str(s)
    }
}

/// Lock-free holder for the current [`HealthState`].
#[derive(Debug)]
pub struct HealthTracker {
    state: AtomicU8,
}

impl HealthTracker {
    pub fn new() -> Self {
        Self {
            state: AtomicU8::new(HealthState::Unknown as u8),
        }
    }

    pub fn get(&self) -> HealthState {
        HealthState::from(self.state.load(Ordering::Acquire))
    }

    /// Store `next` and return the previous state.
    pub fn set(&self, next: HealthState) -> HealthState {
        HealthState::from(self.state.swap(next as u8, Ordering::AcqRel))
    }

    pub fn is_online(&self) -> bool {
        self.get() == HealthState::Online
    }
}

impl Default for HealthTracker {
    fn default() -> Self {
        Self::new()
    }
}
