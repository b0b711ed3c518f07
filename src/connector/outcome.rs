//! Classification of a raw HTTP exchange.
//!
//! # Precedence
//! ```text
//! transport error  >  bad status  >  hibernating instance  >  success
//! ```
//!
//! A hibernating instance answers `200 OK` with an HTML placeholder page, so the
//! hibernation check has to run after the status check and before success.

use crate::connector::types::{CallError, HttpResponse, TransportError};

/// Phrase the hibernation placeholder page contains.
pub const HIBERNATION_MARKER: &str = "Instance Hibernating page";

/// The placeholder is an HTML document, never a Table API JSON body.
pub const HTML_ROOT_TAG: &str = "<html>";

/// Message reported in place of the placeholder page.
pub const HIBERNATING_MESSAGE: &str = "Service Now instance is hibernating";

/// The classified result of exactly one HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// 2xx status and a real API body.
    Success(HttpResponse),
    /// No response was obtained.
    TransportError(TransportError),
    /// A response with a status outside 2xx.
    BadStatus(HttpResponse),
    /// `200 OK` carrying the hibernation placeholder page.
    ServiceDegraded(String),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Short label used for logs and metrics.
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Success(_) => "success",
            Outcome::TransportError(_) => "transport_error",
            Outcome::BadStatus(_) => "bad_status",
            Outcome::ServiceDegraded(_) => "service_degraded",
        }
    }

    /// Split into the successful response or the error payload, unchanged.
    pub fn into_result(self) -> Result<HttpResponse, CallError> {
        match self {
            Outcome::Success(response) => Ok(response),
            Outcome::TransportError(error) => Err(CallError::Transport(error)),
            Outcome::BadStatus(response) => Err(CallError::BadStatus(response)),
            Outcome::ServiceDegraded(message) => Err(CallError::ServiceDegraded(message)),
        }
    }
}

/// Classify the result of one transport call. First match wins.
pub fn classify(result: Result<HttpResponse, TransportError>) -> Outcome {
    match result {
        Err(error) => Outcome::TransportError(error),
        Ok(response) if !is_success_status(response.status) => Outcome::BadStatus(response),
        Ok(response) if is_hibernating(&response) => {
            Outcome::ServiceDegraded(HIBERNATING_MESSAGE.to_string())
        }
        Ok(response) => Outcome::Success(response),
    }
}

/// 2xx class check.
pub fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

/// True when the response is the hibernation placeholder page.
pub fn is_hibernating(response: &HttpResponse) -> bool {
    response.status == 200
        && response.body.contains(HIBERNATION_MARKER)
        && response.body.contains(HTML_ROOT_TAG)
}
