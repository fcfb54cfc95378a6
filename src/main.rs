//! api-tester backend
//!
//! # Architecture Overview
//!
//! ```text
//!   Browser client
//!        │
//!        ▼
//!   ┌──────────────────────────── http ─────────────────────────────┐
//!   │ request id → trace → CORS allow-list → body limit → handlers  │
//!   └───────┬──────────────┬───────────────┬───────────────┬────────┘
//!           │              │               │               │
//!           ▼              ▼               ▼               ▼
//!      accounts      collections        history         gateway ───▶ any upstream
//!           │              │               │
//!           └──────────────┴───── store ───┘
//!                  (Store<T> + IdAllocator, in memory)
//! ```

use std::path::PathBuf;

use clap::Parser;

use api_tester::config::{load_config, validate_config, ServerConfig};
use api_tester::lifecycle::{startup, Shutdown};
use api_tester::observability::logging;

#[derive(Parser)]
#[command(name = "api-tester")]
#[command(about = "API testing backend: request forwarding, collections and history", long_about = None)]
struct Args {
    /// TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen port. Overrides the config file and PORT.
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };
    config.apply_port_override(std::env::var("PORT").ok().as_deref());
    if let Some(port) = args.port {
        config.apply_port_override(Some(&port.to_string()));
    }
    validate_config(&config).map_err(|errors| {
        errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    })?;

    logging::init_logging(&config.observability);
    tracing::info!("api-tester v{} starting", env!("CARGO_PKG_VERSION"));

    let shutdown = Shutdown::new();
    startup::start(config, &shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
