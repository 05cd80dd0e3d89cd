//! Server entrypoint for pollbooth
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use pollbooth_infrastructure::{ConfigLoader, SqlitePollRepository, TeraRenderer};
use pollbooth_presentation::{router, AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Poll web application
#[derive(Parser, Debug)]
#[command(name = "pollbooth", version, about)]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listen port
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the database URL
    #[arg(short, long)]
    database_url: Option<String>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting pollbooth");

    let mut config = ConfigLoader::load(cli.config.as_ref())
        .map_err(|err| anyhow::anyhow!(err))
        .context("failed to load configuration")?;
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(database_url) = cli.database_url {
        config.database_url = database_url;
    }

    // === Dependency Injection ===
    let repository = SqlitePollRepository::connect(&config.database_url)
        .await
        .with_context(|| format!("failed to open {}", config.database_url))?;
    repository.apply_schema().await?;
    if config.seed_demo_data && repository.seed_demo_data().await? {
        info!("Database was empty; seeded demo polls");
    }

    let renderer = Arc::new(TeraRenderer::new().context("failed to compile templates")?);
    let state = Arc::new(AppState::new(Arc::new(repository), renderer));
    let app = router(state);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Listening on http://{addr}/polls/");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
