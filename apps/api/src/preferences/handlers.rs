//! Axum route handlers for UI preferences.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::preferences::Preferences;
use crate::state::AppState;

/// GET /api/v1/preferences
pub async fn handle_get_preferences(
    State(state): State<AppState>,
) -> Result<Json<Preferences>, AppError> {
    let prefs = Preferences::load(state.preferences.as_ref()).await?;
    Ok(Json(prefs))
}

/// PUT /api/v1/preferences
pub async fn handle_put_preferences(
    State(state): State<AppState>,
    Json(prefs): Json<Preferences>,
) -> Result<Json<Preferences>, AppError> {
    prefs.save(state.preferences.as_ref()).await?;
    Ok(Json(prefs))
}
