use axum::Json;
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::notification::Notification;

#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// POST /api/v1/contact
///
/// Acknowledges the marketing-page contact form. Nothing is stored.
pub async fn handle_contact(
    Json(request): Json<ContactRequest>,
) -> Result<Json<Notification>, AppError> {
    if request.message.trim().is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }
    info!(
        "Contact message from {} <{}> ({} chars)",
        request.name,
        request.email,
        request.message.chars().count()
    );
    Ok(Json(Notification::success(
        "Thank you for your message! We will get back to you soon.",
    )))
}
