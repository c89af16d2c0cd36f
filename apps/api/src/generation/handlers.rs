//! Axum route handlers for the Generation API.

use axum::{extract::State, Json};
use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::export::{ExportKind, ExportedDocument};
use crate::generation::generator::GeneratedResume;
use crate::models::form::FormSubmission;
use crate::notification::Notification;
use crate::render::cover_letter::build_cover_letter;
use crate::render::resume::build_resume_document;
use crate::render::{to_html, to_text};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Identifies the résumé form on the page; one generation per session at a time.
    pub session_id: String,
    #[serde(default)]
    pub form: FormSubmission,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub resume: GeneratedResume,
    pub notification: Notification,
}

#[derive(Debug, Deserialize)]
pub struct FormRequest {
    #[serde(default)]
    pub form: FormSubmission,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterResponse {
    pub html: String,
    pub text: String,
    pub notification: Notification,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/generate
///
/// Collects the form, waits the simulated latency, then returns the preview,
/// score, suggestions and job matches.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    if request.session_id.trim().is_empty() {
        return Err(AppError::Validation("sessionId cannot be empty".to_string()));
    }

    let submission = request.form.collect();
    let resume = state
        .generator
        .generate(&request.session_id, &submission)
        .await?;

    Ok(Json(GenerateResponse {
        resume,
        notification: Notification::success("Resume generated successfully!"),
    }))
}

/// POST /api/v1/resumes/export
///
/// Downloads the plain-text résumé as `<Name>_resume.pdf`.
pub async fn handle_export_resume(Json(request): Json<FormRequest>) -> ExportedDocument {
    let submission = request.form.collect();
    let text = to_text(&build_resume_document(&submission));
    let doc = ExportedDocument::new(&submission.personal_info.name, ExportKind::Resume, text);
    info!("Exporting {}", doc.filename);
    doc
}

/// POST /api/v1/cover-letters
pub async fn handle_cover_letter(Json(request): Json<FormRequest>) -> Json<CoverLetterResponse> {
    let submission = request.form.collect();
    let letter = build_cover_letter(&submission, Local::now().date_naive());

    Json(CoverLetterResponse {
        html: to_html(&letter),
        text: to_text(&letter),
        notification: Notification::success("Cover letter generated!"),
    })
}

/// POST /api/v1/cover-letters/export
pub async fn handle_export_cover_letter(Json(request): Json<FormRequest>) -> ExportedDocument {
    let submission = request.form.collect();
    let letter = build_cover_letter(&submission, Local::now().date_naive());
    let doc = ExportedDocument::new(
        &submission.personal_info.name,
        ExportKind::CoverLetter,
        to_text(&letter),
    );
    info!("Exporting {}", doc.filename);
    doc
}
