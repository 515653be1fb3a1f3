//! moji-web - Kaomoji generator HTTP service
//!
//! Serves the JSON API and the static UI. Configuration resolves as
//! command line > environment > TOML file > defaults.

use anyhow::Result;
use clap::Parser;
use moji_common::config::MojiConfig;
use moji_web::{build_router, AppState};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "moji-web", version, about = "Kaomoji generator web service")]
struct Cli {
    /// Config file path
    #[arg(long, env = "MOJI_CONFIG")]
    config: Option<PathBuf>,

    /// Bind host
    #[arg(long)]
    host: Option<String>,

    /// Bind port
    #[arg(long)]
    port: Option<u16>,

    /// Sample corpus path (JSON)
    #[arg(long)]
    samples: Option<PathBuf>,

    /// Static site directory
    #[arg(long)]
    static_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = MojiConfig::load(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level)),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting moji-web v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(samples) = cli.samples {
        config.samples = Some(samples);
    }
    if let Some(static_dir) = cli.static_dir {
        config.static_dir = static_dir;
    }

    info!("Sample corpus: {}", config.samples_path().display());
    info!("Source list: {}", config.sources_path().display());
    if config.cors_allows_any() {
        info!("CORS: any origin");
    } else {
        info!("CORS: {}", config.server.cors_allow_origins.join(", "));
    }

    let bind_addr = config.bind_addr();
    let app = build_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("Listening on http://{}", bind_addr);
    info!("Health check: http://{}/health", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
