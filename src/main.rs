//! ClimateOS footprint API server.

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use climateos_footprint::adapters::http::{api_router, FootprintAppState, SessionAppState};
use climateos_footprint::adapters::storage::{FileProfileStore, InMemoryProfileStore};
use climateos_footprint::config::AppConfig;
use climateos_footprint::domain::emissions::EmissionFactorTable;
use climateos_footprint::ports::ProfileStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let profile_store: Arc<dyn ProfileStore> = match &config.storage.profile_dir {
        Some(dir) => {
            tracing::info!(profile_dir = %dir.display(), "Remembering profiles on disk");
            Arc::new(FileProfileStore::new(dir))
        }
        None => {
            tracing::info!("Remembering profiles in memory");
            Arc::new(InMemoryProfileStore::new())
        }
    };

    let verbose = config.features.verbose_errors;
    let footprint_state =
        FootprintAppState::new(EmissionFactorTable::canonical(), &config.server.public_url)
            .with_sharing(config.features.enable_sharing)
            .with_verbose_errors(verbose);
    let session_state = SessionAppState::new(profile_store).with_verbose_errors(verbose);

    let mut app = api_router(footprint_state, session_state).layer(TimeoutLayer::new(
        Duration::from_secs(config.server.request_timeout_secs),
    ));

    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();
    if !origins.is_empty() {
        app = app.layer(
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    if config.features.enable_tracing {
        app = app.layer(TraceLayer::new_for_http());
    }

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        sharing = config.features.enable_sharing,
        "ClimateOS footprint API listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
