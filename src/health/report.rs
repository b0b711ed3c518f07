//! Result of a single health check.

use serde::Serialize;

use crate::health::state::HealthState;
use crate::records::AdapterData;

/// What a completed health check observed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthReport {
    /// Identity of the adapter that ran the check.
    pub id: String,
    pub state: HealthState,
    /// Data returned by the read the check performed, when it succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_data: Option<AdapterData>,
    /// Unavailability message, when it failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl HealthReport {
    pub fn online(id: impl Into<String>, data: AdapterData) -> Self {
        Self {
            id: id.into(),
            state: HealthState::Online,
            response_data: Some(data),
            error_message: None,
        }
    }

    pub fn offline(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            state: HealthState::Offline,
            response_data: None,
            error_message: Some(message.into()),
        }
    }

    pub fn is_online(&self) -> bool {
        self.state == HealthState::Online
    }
}
