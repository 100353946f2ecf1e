//! Allowance engine HTTP server.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use allowance_engine::api::{AppState, create_router};
use allowance_engine::config::ConfigLoader;

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(version, about = "Budget and HR allowance engine")]
struct Args {
    /// Directory holding organization.yaml, rates.yaml and holidays/.
    #[arg(long, env = "ALLOWANCE_CONFIG_DIR", default_value = "./config")]
    config_dir: PathBuf,

    /// Address the HTTP server listens on.
    #[arg(long, env = "ALLOWANCE_BIND", default_value = "0.0.0.0:3000")]
    bind: String,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ConfigLoader::load(&args.config_dir)
        .map_err(|err| std::io::Error::other(format!("Failed to load configuration: {err}")))?;
    info!(
        config_dir = %args.config_dir.display(),
        organization = %config.organization().name,
        "Configuration loaded"
    );

    let state = AppState::new(config)
        .map_err(|err| std::io::Error::other(format!("Failed to seed record store: {err}")))?;

    let listener = TcpListener::bind(&args.bind).await?;
    info!(bind = %args.bind, "Listening");

    axum::serve(listener, create_router(state)).await
}
