mod config;
mod errors;
mod evaluation;
mod export;
mod generation;
mod import;
mod models;
mod notification;
mod preferences;
mod render;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::{Config, MatcherKind};
use crate::evaluation::job_matching::{
    CatalogJobMatcher, JobCatalog, JobMatcher, SkillOverlapJobMatcher,
};
use crate::generation::generator::ResumeGenerator;
use crate::import::linkedin::MockLinkedInSource;
use crate::preferences::store::FilePreferenceStore;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resumecraft API v{}", env!("CARGO_PKG_VERSION"));

    // Job catalog: file if configured, built-in listings otherwise
    let catalog = match &config.job_catalog_path {
        Some(path) => {
            let catalog = JobCatalog::from_file(path)?;
            info!("Loaded {} jobs from {}", catalog.jobs.len(), path.display());
            catalog
        }
        None => JobCatalog::default(),
    };

    // Initialize job matcher (CatalogJobMatcher by default — swap via JOB_MATCHER)
    let job_matcher: Arc<dyn JobMatcher> = match config.job_matcher {
        MatcherKind::Catalog => Arc::new(CatalogJobMatcher::new(catalog)),
        MatcherKind::Skills => Arc::new(SkillOverlapJobMatcher::new(catalog)),
    };
    info!("Job matcher: {}", job_matcher.backend());

    let generator = Arc::new(ResumeGenerator::new(
        Arc::clone(&job_matcher),
        config.generation_delay,
    ));
    info!(
        "Simulated generation delay: {:?}, import delay: {:?}",
        config.generation_delay, config.import_delay
    );

    let preferences = Arc::new(FilePreferenceStore::new(&config.preferences_path));
    info!("Preferences stored at {}", config.preferences_path.display());

    // Build app state
    let state = AppState {
        config: config.clone(),
        job_matcher,
        generator,
        preferences,
        linkedin: Arc::new(MockLinkedInSource::new(config.import_delay)),
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
