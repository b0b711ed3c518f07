//! Wire-level types shared by the connector and its transports.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// HTTP methods the Table API adapter issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Basic-auth credentials. The password never shows up in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// A fully built request handed to an [`HttpTransport`](super::transport::HttpTransport).
#[derive(Debug, Clone, PartialEq)]
pub struct TransportRequest {
    pub method: HttpMethod,
    /// Instance base URL, e.g. `https://dev12345.service-now.com`.
    pub base_url: String,
    /// Path and query relative to `base_url`.
    pub uri: String,
    pub credentials: Credentials,
    /// JSON body, only ever set for POST.
    pub body: Option<Value>,
}

/// A completed HTTP exchange, status and body untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpResponse {
    /// Method of the request that produced this response.
    pub method: HttpMethod,
    pub status: u16,
    /// Lower-cased header names. Repeated headers are joined with `", "`.
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl HttpResponse {
    pub fn new(method: HttpMethod, status: u16, body: impl Into<String>) -> Self {
        Self {
            method,
            status,
            headers: BTreeMap::new(),
            body: body.into(),
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}

/// The HTTP capability failed before any response was obtained.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),

    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("request failed: {0}")]
    Request(String),

    #[error("failed to read response body: {0}")]
    Body(String),
}

/// A classified, non-successful call as seen by callers of the adapter.
///
/// Each variant carries its payload unchanged: the transport error verbatim,
/// the whole response for a bad status, a fixed message for a sleeping instance.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("bad response code {} from {} request", .0.status, .0.method)]
    BadStatus(HttpResponse),

    #[error("{0}")]
    ServiceDegraded(String),
}

/// Result type for adapter record operations.
pub type CallResult<T> = Result<T, CallError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_redacts_password() {
        let creds = Credentials::new("admin", "hunter2");
        let printed = format!("{:?}", creds);
        assert!(printed.contains("admin"));
        assert!(!printed.contains("hunter2"));
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let mut response = HttpResponse::new(HttpMethod::Get, 200, "{}");
        response
            .headers
            .insert("content-type".to_string(), "application/json".to_string());
        assert_eq!(response.header("Content-Type"), Some("application/json"));
        assert_eq!(response.header("x-missing"), None);
    }

    #[test]
    fn test_bad_status_message() {
        let err = CallError::BadStatus(HttpResponse::new(HttpMethod::Post, 401, "denied"));
        assert_eq!(err.to_string(), "bad response code 401 from POST request");
    }
}
