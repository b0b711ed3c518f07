//! ServiceNow change request adapter.
//!
//! # Responsibilities
//! - Wrap the connector with the Online/Offline health state machine
//! - Publish ONLINE/OFFLINE notifications carrying the adapter identity
//! - Normalize read and create results; forward errors untouched
//!
//! # Design Decisions
//! - One connector call per public operation, no retries
//! - Health checks go through `get_record`, same as a host read
//! - Checks are serialized per instance with an async mutex

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::{broadcast, Mutex};

use crate::adapter::ChangeRequestAdapter;
use crate::config::{AdapterConfig, AdapterProperties};
use crate::connector::{
    CallResult, ConnectionConfig, HttpMethod, HttpTransport, Outcome, ReqwestTransport,
    ServiceNowConnector, TransportError,
};
use crate::events::{AdapterEvent, EventBus, EventKind};
use crate::health::{HealthReport, HealthState, HealthTracker};
use crate::observability::metrics;
use crate::records::{shape_create, shape_read, AdapterData};

/// An adapter instance bound to one ServiceNow table.
pub struct ServiceNowAdapter {
    id: String,
    connector: ServiceNowConnector,
    health: HealthTracker,
    events: EventBus,
    check_lock: Mutex<()>,
}

impl ServiceNowAdapter {
    pub fn new(
        id: impl Into<String>,
        properties: &AdapterProperties,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        let connector = ServiceNowConnector::new(ConnectionConfig::from(properties), transport);
        Self {
            id: id.into(),
            connector,
            health: HealthTracker::new(),
            events: EventBus::default(),
            check_lock: Mutex::new(()),
        }
    }

    /// Build an adapter with the `reqwest` transport and configured timeouts.
    pub fn from_config(config: &AdapterConfig) -> Result<Self, TransportError> {
        let transport = ReqwestTransport::new(&config.timeouts)?;
        Ok(Self::new(config.id.clone(), &config.properties, Arc::new(transport)))
    }

    pub fn connector(&self) -> &ServiceNowConnector {
        &self.connector
    }

    fn emit_status(&self, kind: EventKind) {
        self.health.set(HealthState::from(kind));
        metrics::record_instance_health(&self.id, kind == EventKind::Online);

        match kind {
            EventKind::Online => {
                tracing::info!(id = %self.id, "ServiceNow instance is available")
            }
            EventKind::Offline => {
                tracing::warn!(id = %self.id, "ServiceNow instance is unavailable")
            }
        }

        let delivered = self.events.emit(AdapterEvent::new(kind, self.id.as_str()));
        tracing::debug!(id = %self.id, event = %kind, delivered, "Status event emitted");
    }

    fn observe(&self, method: HttpMethod, outcome: &Outcome) {
        metrics::record_call(method.as_str(), outcome.label());
        match outcome {
            Outcome::Success(response) => tracing::debug!(
                id = %self.id,
                method = %method,
                status = response.status,
                "Response returned from request"
            ),
            Outcome::BadStatus(response) => tracing::error!(
                id = %self.id,
                method = %method,
                status = response.status,
                "Bad response code returned from request"
            ),
            Outcome::TransportError(error) => tracing::error!(
                id = %self.id,
                method = %method,
                error = %error,
                "Transport error returned from request"
            ),
            Outcome::ServiceDegraded(message) => tracing::error!(
                id = %self.id,
                method = %method,
                message = %message,
                "Instance is hibernating"
            ),
        }
    }
}

#[async_trait]
impl ChangeRequestAdapter for ServiceNowAdapter {
    fn id(&self) -> &str {
        &self.id
    }

    fn health(&self) -> HealthState {
        self.health.get()
    }

    fn subscribe(&self) -> broadcast::Receiver<AdapterEvent> {
        self.events.subscribe()
    }

    async fn connect(&self) -> HealthReport {
        tracing::debug!(id = %self.id, "Connecting, running health check");
        self.healthcheck().await
    }

    async fn healthcheck(&self) -> HealthReport {
        let _guard = self.check_lock.lock().await;

        match self.get_record().await {
            Ok(data) => {
                self.emit_status(EventKind::Online);
                HealthReport::online(self.id.as_str(), data)
            }
            Err(error) => {
                let message = format!("{}: ServiceNow instance is unavailable", self.id);
                tracing::error!(id = %self.id, error = %error, "Health check failed");
                self.emit_status(EventKind::Offline);
                HealthReport::offline(self.id.as_str(), message)
            }
        }
    }

    async fn get_record(&self) -> CallResult<AdapterData> {
        let outcome = self.connector.get().await;
        self.observe(HttpMethod::Get, &outcome);

        let data = shape_read(outcome.into_result()?);
        tracing::debug!(
            id = %self.id,
            records = data.record_count(),
            passthrough = data.is_passthrough(),
            "getRecord completed"
        );
        Ok(data)
    }

    async fn post_record(&self, payload: Option<Value>) -> CallResult<AdapterData> {
        let outcome = self.connector.post(payload).await;
        self.observe(HttpMethod::Post, &outcome);

        let data = shape_create(outcome.into_result()?);
        tracing::debug!(
            id = %self.id,
            records = data.record_count(),
            passthrough = data.is_passthrough(),
            "postRecord completed"
        );
        Ok(data)
    }
}
