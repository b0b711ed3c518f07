//! Periodic health checking for the host binary.
//!
//! # Responsibilities
//! - Run the adapter's health check on a fixed interval
//! - Stop cleanly on the shutdown signal
//!
//! The adapter never schedules checks itself; this is the host's loop.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;
use tokio::time;

use crate::adapter::ChangeRequestAdapter;

pub struct HealthMonitor {
    adapter: Arc<dyn ChangeRequestAdapter>,
    interval: Duration,
}

impl HealthMonitor {
    pub fn new(adapter: Arc<dyn ChangeRequestAdapter>, interval: Duration) -> Self {
        Self { adapter, interval }
    }

    /// Run checks until shutdown. Returns the number of checks completed.
    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) -> u64 {
        tracing::info!(
            id = %self.adapter.id(),
            interval_secs = self.interval.as_secs(),
            "Health monitor starting"
        );

        let mut ticker = time::interval(self.interval);
        ticker.set_missed_tick_behavior(time::MissedTickBehavior::Delay);
        let mut checks = 0u64;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let report = self.adapter.healthcheck().await;
                    checks += 1;
                    match &report.error_message {
                        Some(message) => tracing::warn!(
                            id = %report.id,
                            state = %report.state,
                            message = %message,
                            "Health check completed"
                        ),
                        None => tracing::info!(
                            id = %report.id,
                            state = %report.state,
                            "Health check completed"
                        ),
                    }
                }
                _ = shutdown.recv() => {
                    tracing::info!(checks, "Health monitor received shutdown signal, exiting loop");
                    break;
                }
            }
        }

        checks
    }
}
