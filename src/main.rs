//! Operator console shell.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────────┐
//!                    │                  CONSOLE SHELL                    │
//!                    │                                                   │
//!   Browser request  │  ┌─────────┐    ┌──────────┐    ┌─────────────┐  │
//!   ─────────────────┼─▶│  http   │───▶│ session  │───▶│   console   │  │
//!                    │  │ server  │    │ is_auth? │    │ (RouteTree) │  │
//!                    │  └─────────┘    └──────────┘    └──────┬──────┘  │
//!                    │                                        │         │
//!                    │                  ┌─────────────────────┴──────┐  │
//!                    │                  ▼                            ▼  │
//!                    │          ┌──────────────┐          ┌───────────┐ │
//!                    │          │   routing    │          │navigation │ │
//!                    │          │ resolve path │          │ groups +  │ │
//!                    │          └──────┬───────┘          │ publisher │ │
//!                    │                 ▼                  └─────┬─────┘ │
//!                    │          ┌──────────────┐                ▼       │
//!   Page (JSON)      │          │    views     │        SharedNavigation│
//!   ◀────────────────┼──────────│  suspense    │        (sidebar reads) │
//!                    │          └──────────────┘                        │
//!                    └──────────────────────────────────────────────────┘
//! ```

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use console_router::config::{load_config, ConsoleConfig};
use console_router::lifecycle::Shutdown;
use console_router::observability::{logging, metrics};
use console_router::ConsoleServer;

#[derive(Parser)]
#[command(name = "console-router")]
#[command(about = "Operator console shell", long_about = None)]
struct Args {
    /// Path to a TOML configuration file. Built-in defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => ConsoleConfig::default(),
    };

    logging::init_logging(&config.observability)?;

    tracing::info!("console-router v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        bundle_dir = %config.views.bundle_dir,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(address = %local_addr, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = ConsoleServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
