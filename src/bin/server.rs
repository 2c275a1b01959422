//! Mergington activities HTTP server binary.
//!
//! # Environment Variables
//!
//! - `HOST` — bind address (default: 0.0.0.0)
//! - `PORT` — HTTP port (default: 8000)
//! - `ACTIVITIES_SEED` — YAML/JSON seed file (default: built-in activities)
//! - `STATIC_DIR` — landing page assets (default: ./static)
//! - `RUST_LOG` — Tracing filter (default: "info,mergington_activities=debug")
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin server
//! # with a custom roster:
//! ACTIVITIES_SEED=activities.yaml cargo run --bin server
//! ```

use anyhow::Context;
use mergington_activities::{app_router, AppState, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,mergington_activities=debug,tower_http=debug".into()),
        )
        .init();

    let config = ServerConfig::from_env().context("invalid server configuration")?;
    let roster = config
        .load_roster()
        .context("failed to load activity seed data")?;
    if config.seed_path.is_none() {
        tracing::info!("Using built-in activity list ({} activities)", roster.len());
    }

    let state = AppState::new(roster, config.static_dir.clone());
    let app = app_router(state);

    let bind_addr = config.bind_addr();
    tracing::info!("mergington-activities server starting on {}", bind_addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET    /activities                      — list activities");
    tracing::info!("  POST   /activities/:name/signup?email=   — sign up");
    tracing::info!("  DELETE /activities/:name/unregister?email= — unregister");
    tracing::info!("  GET    /static/*                        — {:?}", config.static_dir);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server failed")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
