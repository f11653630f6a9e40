mod catalog;
mod config;
mod eligibility;
mod errors;
mod events;
mod quiz;
mod routes;
mod skills;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::Catalog;
use crate::config::{Config, MatchStrategy};
use crate::quiz::matching::{OverlapMatcher, ProfileMatcher, WeightedMatcher};
use crate::quiz::store::{spawn_purge_task, SessionStore};
use crate::routes::build_router;
use crate::state::AppState;

const PURGE_INTERVAL: Duration = Duration::from_secs(5 * 60);

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Pathways API v{}", env!("CARGO_PKG_VERSION"));

    // Load content tables (built in unless CATALOG_PATH points at a JSON override)
    let catalog = match &config.catalog_path {
        Some(path) => {
            info!("Loading catalog from {}", path.display());
            Catalog::from_json_file(path)?
        }
        None => Catalog::builtin().checked()?,
    };

    // Initialize profile matcher (OverlapMatcher by default; swap via QUIZ_MATCH_STRATEGY)
    let matcher: Arc<dyn ProfileMatcher> = match config.match_strategy {
        MatchStrategy::Overlap => Arc::new(OverlapMatcher),
        MatchStrategy::Weighted => Arc::new(WeightedMatcher),
    };
    info!("Profile matcher: {}", matcher.backend());

    // Initialize session store and its idle sweeper
    let sessions = SessionStore::new();
    spawn_purge_task(
        sessions.clone(),
        chrono::Duration::minutes(config.session_idle_minutes),
        PURGE_INTERVAL,
    );
    info!(
        "Session store initialized (idle timeout: {} min)",
        config.session_idle_minutes
    );

    // Build app state
    let state = AppState {
        config: config.clone(),
        catalog: Arc::new(catalog),
        sessions,
        matcher,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
