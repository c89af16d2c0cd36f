//! Axum route handlers for the Evaluation API.

use axum::{extract::State, Json};

use crate::evaluation::evaluate;
use crate::models::evaluation::EvaluationResult;
use crate::models::submission::ResumeSubmission;
use crate::state::AppState;

/// POST /api/v1/resumes/evaluate
///
/// Scores an already-collected submission without the simulated generation delay.
pub async fn handle_evaluate(
    State(state): State<AppState>,
    Json(submission): Json<ResumeSubmission>,
) -> Json<EvaluationResult> {
    Json(evaluate(&submission, state.job_matcher.as_ref()))
}
