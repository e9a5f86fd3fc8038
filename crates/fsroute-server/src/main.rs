mod app;
mod process;
mod registry;
mod state;

use anyhow::{Context, Result};
use app::{create_app, AppOptions, DOCS_PATH};
use fsroute::Config;
use process::{ProcessConfig, ProcessType};
use state::AppState;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing()?;

    let config = Config::load_default().unwrap_or_else(|e| {
        warn!("Failed to load config: {}, using defaults", e);
        Config::default()
    });

    let process = ProcessConfig::from_env(&config)?;
    info!(process = %process.kind, "Starting {}", process.name);

    if process.kind == ProcessType::Worker {
        return run_worker().await;
    }

    let mut options = AppOptions::new(process).with_env();
    options.base_path = config.routing.base_path.clone();

    let app = create_app(&options, AppState::default()).await?;

    let addr = format!("{}:{}", options.process.host, options.process.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!("{} running on http://{}", options.process.name, addr);
    if options.process.enable_docs && !options.production {
        info!("Route docs at http://{}{}", addr, DOCS_PATH);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("{} stopped", options.process.name);
    Ok(())
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();
    Ok(())
}

async fn run_worker() -> Result<()> {
    info!("Worker process idle, waiting for shutdown");
    shutdown_signal().await;
    info!("Worker stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
