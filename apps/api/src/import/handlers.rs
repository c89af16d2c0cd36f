//! Axum route handlers for profile import.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::error;

use crate::models::submission::ResumeSubmission;
use crate::notification::Notification;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResponse {
    pub profile: Option<ResumeSubmission>,
    pub notification: Notification,
}

/// POST /api/v1/import/linkedin
///
/// Failures come back as an error toast rather than an error status.
pub async fn handle_linkedin_import(
    State(state): State<AppState>,
) -> Json<ImportResponse> {
    let response = match state.linkedin.fetch_profile().await {
        Ok(profile) => ImportResponse {
            profile: Some(profile),
            notification: Notification::success("LinkedIn profile imported successfully!"),
        },
        Err(e) => {
            error!("Error importing from LinkedIn: {e}");
            ImportResponse {
                profile: None,
                notification: Notification::error("Failed to import LinkedIn profile."),
            }
        }
    };
    Json(response)
}
