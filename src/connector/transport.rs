//! The HTTP capability the connector calls through.
//!
//! # Responsibilities
//! - Perform exactly one HTTP exchange per `execute`
//! - Report either a transport failure or the raw status, headers and body
//!
//! # Design Decisions
//! - No classification here; `outcome.rs` owns that
//! - Timeouts live in the transport, the connector has none
//! - Any status code is a completed exchange, not an error

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, Method};

use crate::config::TimeoutConfig;
use crate::connector::types::{HttpMethod, HttpResponse, TransportError, TransportRequest};

/// Performs a single HTTP call.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: TransportRequest) -> Result<HttpResponse, TransportError>;
}

/// Production transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a transport with the configured connect and request timeouts.
    pub fn new(timeouts: &TimeoutConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .timeout(Duration::from_secs(timeouts.request_secs))
            .build()
            .map_err(|e| TransportError::Request(e.to_string()))?;
        Ok(Self { client })
    }

    /// Wrap an existing client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: TransportRequest) -> Result<HttpResponse, TransportError> {
        let url = join_url(&request.base_url, &request.uri)?;
        let method = match request.method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
        };

        let mut builder = self
            .client
            .request(method, url)
            .basic_auth(&request.credentials.username, Some(&request.credentials.password))
            .header(ACCEPT, "application/json");
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(map_reqwest_error)?;

        let status = response.status().as_u16();
        let mut headers: BTreeMap<String, String> = BTreeMap::new();
        for (name, value) in response.headers() {
            let Ok(value) = value.to_str() else { continue };
            headers
                .entry(name.as_str().to_string())
                .and_modify(|existing| {
                    existing.push_str(", ");
                    existing.push_str(value);
                })
                .or_insert_with(|| value.to_string());
        }

        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;

        Ok(HttpResponse {
            method: request.method,
            status,
            headers,
            body,
        })
    }
}

/// Join the instance base URL and a Table API URI.
pub fn join_url(base_url: &str, uri: &str) -> Result<url::Url, TransportError> {
    let joined = format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        uri.trim_start_matches('/')
    );
    url::Url::parse(&joined).map_err(|e| TransportError::InvalidUrl(format!("{}: {}", joined, e)))
}

fn map_reqwest_error(error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::Timeout(error.to_string())
    } else if error.is_connect() {
        TransportError::Connect(error.to_string())
    } else if error.is_builder() {
        TransportError::InvalidUrl(error.to_string())
    } else {
        TransportError::Request(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url_handles_slashes() {
        let url = join_url(
            "https://dev1.service-now.com/",
            "/api/now/table/change_request?sysparm_limit=1",
        )
        .unwrap();
        assert_eq!(
            url.as_str(),
            "https://dev1.service-now.com/api/now/table/change_request?sysparm_limit=1"
        );

        let url = join_url("https://dev1.service-now.com", "/api/now/table/x").unwrap();
        assert_eq!(url.path(), "/api/now/table/x");
    }

    #[test]
    fn test_join_url_rejects_relative_base() {
        let err = join_url("dev1.service-now.com", "/api/now/table/x").unwrap_err();
        assert!(matches!(err, TransportError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn test_invalid_base_url_is_transport_error() {
        let transport = ReqwestTransport::new(&TimeoutConfig::default()).unwrap();
        let request = TransportRequest {
            method: HttpMethod::Get,
            base_url: "not a url".to_string(),
            uri: "/api/now/table/change_request".to_string(),
            credentials: crate::connector::types::Credentials::new("u", "p"),
            body: None,
        };
        let err = transport.execute(request).await.unwrap_err();
        assert!(matches!(err, TransportError::InvalidUrl(_)));
    }
}
