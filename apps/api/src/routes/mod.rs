pub mod contact;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::evaluation::handlers as evaluation;
use crate::generation::handlers as generation;
use crate::import::handlers as import;
use crate::preferences::handlers as preferences;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Résumé API
        .route("/api/v1/resumes/evaluate", post(evaluation::handle_evaluate))
        .route("/api/v1/resumes/generate", post(generation::handle_generate))
        .route("/api/v1/resumes/export", post(generation::handle_export_resume))
        // Cover letters
        .route("/api/v1/cover-letters", post(generation::handle_cover_letter))
        .route(
            "/api/v1/cover-letters/export",
            post(generation::handle_export_cover_letter),
        )
        // Import
        .route("/api/v1/import/linkedin", post(import::handle_linkedin_import))
        // Preferences
        .route(
            "/api/v1/preferences",
            get(preferences::handle_get_preferences).put(preferences::handle_put_preferences),
        )
        .route("/api/v1/contact", post(contact::handle_contact))
        .with_state(state)
}
