//! ServiceNow Table API connector.
//!
//! # Responsibilities
//! - Hold the immutable connection parameters
//! - Turn a logical `get`/`post` into one transport call
//! - Classify the result into an [`Outcome`]
//!
//! # Design Decisions
//! - Single shot: no retries, no polling, no logging
//! - `get` is hardcoded to one record (`sysparm_limit=1`); no pagination,
//!   sorting or filtering
//! - `post` takes an optional JSON payload; `None` sends an empty create call

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::config::AdapterProperties;
use crate::connector::outcome::{classify, Outcome};
use crate::connector::transport::HttpTransport;
use crate::connector::types::{Credentials, HttpMethod, TransportRequest};
use crate::connector::uri::construct_uri;

/// Query sent with every read.
pub const GET_QUERY: &str = "sysparm_limit=1";

/// Connection parameters, fixed for the lifetime of a connector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    pub url: String,
    pub credentials: Credentials,
    pub table: String,
}

impl From<&AdapterProperties> for ConnectionConfig {
    fn from(props: &AdapterProperties) -> Self {
        Self {
            url: props.url.clone(),
            credentials: Credentials::new(&props.auth.username, &props.auth.password),
            table: props.service_now_table.clone(),
        }
    }
}

/// Options for a single call. Built fresh per call.
#[derive(Debug, Clone, PartialEq)]
pub struct CallOptions {
    pub method: HttpMethod,
    pub query: Option<String>,
    pub table: String,
    pub payload: Option<Value>,
}

/// Issues classified calls against one table.
#[derive(Clone)]
pub struct ServiceNowConnector {
    config: ConnectionConfig,
    transport: Arc<dyn HttpTransport>,
}

impl ServiceNowConnector {
    pub fn new(config: ConnectionConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    /// Read at most one record from the configured table.
    pub async fn get(&self) -> Outcome {
        let options = CallOptions {
            method: HttpMethod::Get,
            query: Some(GET_QUERY.to_string()),
            table: self.config.table.clone(),
            payload: None,
        };
        self.dispatch(options).await
    }

    /// Create a record in the configured table.
    pub async fn post(&self, payload: Option<Value>) -> Outcome {
        let options = CallOptions {
            method: HttpMethod::Post,
            query: None,
            table: self.config.table.clone(),
            payload,
        };
        self.dispatch(options).await
    }

    /// Build the request, perform exactly one call and classify it.
    pub async fn dispatch(&self, options: CallOptions) -> Outcome {
        let request = TransportRequest {
            method: options.method,
            base_url: self.config.url.clone(),
            uri: construct_uri(&options.table, options.query.as_deref()),
            credentials: self.config.credentials.clone(),
            body: options.payload,
        };
        classify(self.transport.execute(request).await)
    }
}

impl fmt::Debug for ServiceNowConnector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceNowConnector")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::testing::ScriptedTransport;
    use crate::connector::types::{HttpResponse, TransportError};
    use serde_json::json;

    fn connection() -> ConnectionConfig {
        ConnectionConfig {
            url: "https://dev1.service-now.com".to_string(),
            credentials: Credentials::new("admin", "secret"),
            table: "change_request".to_string(),
        }
    }

    #[tokio::test]
    async fn test_get_requests_one_record() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push_json(HttpMethod::Get, 200, json!({ "result": [] }));
        let connector = ServiceNowConnector::new(connection(), transport.clone());

        let outcome = connector.get().await;
        assert!(outcome.is_success());

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, HttpMethod::Get);
        assert_eq!(requests[0].uri, "/api/now/table/change_request?sysparm_limit=1");
        assert_eq!(requests[0].base_url, "https://dev1.service-now.com");
        assert_eq!(requests[0].credentials, Credentials::new("admin", "secret"));
        assert!(requests[0].body.is_none());
    }

    #[tokio::test]
    async fn test_post_has_no_query_and_carries_payload() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push_json(HttpMethod::Post, 201, json!({ "result": { "number": "CHG1" } }));
        let connector = ServiceNowConnector::new(connection(), transport.clone());

        let payload = json!({ "short_description": "patch db" });
        let outcome = connector.post(Some(payload.clone())).await;
        assert!(outcome.is_success());

        let requests = transport.requests();
        assert_eq!(requests[0].method, HttpMethod::Post);
        assert_eq!(requests[0].uri, "/api/now/table/change_request");
        assert_eq!(requests[0].body, Some(payload));
    }

    #[tokio::test]
    async fn test_dispatch_classifies_failures() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push(Err(TransportError::Timeout("30s".into())));
        transport.push(Ok(HttpResponse::new(HttpMethod::Get, 404, "missing")));
        let connector = ServiceNowConnector::new(connection(), transport.clone());

        assert_eq!(connector.get().await.label(), "transport_error");
        assert_eq!(connector.get().await.label(), "bad_status");
        assert_eq!(transport.requests().len(), 2);
    }

    #[test]
    fn test_connection_debug_hides_password() {
        let printed = format!("{:?}", connection());
        assert!(printed.contains("change_request"));
        assert!(!printed.contains("secret"));
    }
}
