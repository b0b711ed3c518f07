//! ServiceNow change request adapter (host binary)
//!
//! Plays the orchestration host for one adapter instance.
//!
//! # Architecture Overview
//!
//! ```text
//!   CLI command ──▶ ServiceNowAdapter ──▶ ServiceNowConnector ──▶ HttpTransport ──▶ ServiceNow
//!                        │    ▲                   │                                 Table API
//!                        │    └──── AdapterData ◀─┴── classify(Outcome)
//!                        │
//!                        └──▶ EventBus ──▶ ONLINE / OFFLINE {id}
//! ```

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;
use tokio::sync::broadcast;

use servicenow_adapter::config::load_config;
use servicenow_adapter::health::HealthMonitor;
use servicenow_adapter::lifecycle::{startup, Shutdown};
use servicenow_adapter::{AdapterData, AdapterEvent, CallError, ChangeRequestAdapter};

#[derive(Parser)]
#[command(name = "servicenow-adapter")]
#[command(about = "ServiceNow change request adapter", long_about = None)]
struct Cli {
    /// Path to the adapter configuration file.
    #[arg(short, long, default_value = "adapter.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one health check and print the report
    Connect,
    /// Read one change request
    Get,
    /// Create a change request
    Post {
        /// JSON object to send as the new record
        #[arg(short, long)]
        payload: Option<String>,
    },
    /// Run health checks on an interval until interrupted
    Monitor {
        #[arg(short, long, default_value_t = 60, value_parser = clap::value_parser!(u64).range(1..))]
        interval_secs: u64,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(&cli.config)?;
    let adapter: Arc<dyn ChangeRequestAdapter> = Arc::new(startup::start(&config)?);
    let mut events = adapter.subscribe();

    let ok = match cli.command {
        Commands::Connect => {
            let report = adapter.connect().await;
            print_json(&report)?;
            drain_events(&mut events)?;
            report.is_online()
        }
        Commands::Get => print_result(adapter.get_record().await)?,
        Commands::Post { payload } => {
            let payload = payload
                .map(|raw| serde_json::from_str::<Value>(&raw))
                .transpose()?;
            print_result(adapter.post_record(payload).await)?
        }
        Commands::Monitor { interval_secs } => {
            let shutdown = Shutdown::new();
            let monitor = HealthMonitor::new(adapter.clone(), Duration::from_secs(interval_secs));
            let handle = tokio::spawn(monitor.run(shutdown.subscribe()));
            tokio::spawn(log_events(events));

            shutdown.trigger_on_signal().await;
            let checks = handle.await?;
            tracing::info!(checks, "Shutdown complete");
            true
        }
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_result(result: Result<AdapterData, CallError>) -> Result<bool, serde_json::Error> {
    match result {
        Ok(data) => {
            print_json(&data)?;
            Ok(true)
        }
        Err(CallError::BadStatus(response)) => {
            eprintln!("Error: ServiceNow returned status {}", response.status);
            print_json(&response)?;
            Ok(false)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            Ok(false)
        }
    }
}

/// Print the notifications a one-shot command produced.
fn drain_events(events: &mut broadcast::Receiver<AdapterEvent>) -> Result<(), serde_json::Error> {
    while let Ok(event) = events.try_recv() {
        println!("{}", serde_json::to_string(&event)?);
    }
    Ok(())
}

async fn log_events(mut events: broadcast::Receiver<AdapterEvent>) {
    loop {
        match events.recv().await {
            Ok(event) => tracing::info!(event = %event.kind, id = %event.id, "Adapter notification"),
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "Notification listener lagged")
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}
