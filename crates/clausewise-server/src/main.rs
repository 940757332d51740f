//! Clausewise Server CLI
//!
//! Starts the contract analysis HTTP server.

use anyhow::Context;
use clap::Parser;
use clausewise_server::config::{api_key_from_env, ServerConfig};
use clausewise_server::start_server;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

/// Contract analysis HTTP server
#[derive(Debug, Parser)]
#[command(name = "clausewise-server", version, about)]
struct Cli {
    /// Load configuration from a TOML file
    #[arg(short, long, env = "CLAUSEWISE_CONFIG")]
    config: Option<PathBuf>,

    /// Override the bind port from the config file
    #[arg(short, long, env = "CLAUSEWISE_PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() {
    // A missing .env file is fine; the variables may come from the environment
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run(Cli::parse()).await {
        tracing::error!("{:#}", e);
        process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => ServerConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => {
            tracing::info!("No config file specified, using defaults");
            ServerConfig::default()
        }
    };

    if let Some(port) = cli.port {
        config.bind_port = port;
    }

    // Fatal before binding: the service cannot answer anything without a key
    let api_key = api_key_from_env()?;

    start_server(config, api_key).await?;

    Ok(())
}
