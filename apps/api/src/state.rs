use std::sync::Arc;

use crate::config::Config;
use crate::evaluation::job_matching::JobMatcher;
use crate::generation::generator::ResumeGenerator;
use crate::import::linkedin::LinkedInSource;
use crate::preferences::store::PreferenceStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable job matcher. Default: CatalogJobMatcher. Swap via JOB_MATCHER env.
    pub job_matcher: Arc<dyn JobMatcher>,
    /// Simulated generation flow; shares `job_matcher`.
    pub generator: Arc<ResumeGenerator>,
    pub preferences: Arc<dyn PreferenceStore>,
    pub linkedin: Arc<dyn LinkedInSource>,
}
