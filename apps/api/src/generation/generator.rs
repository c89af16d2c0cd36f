//! Résumé Generation — the simulated "generate résumé" backend call.
//!
//! Flow: claim session → simulated latency → evaluate → render preview and
//! feedback panel → release session.
//!
//! A session may only have one generation in flight; a second request for the
//! same session is rejected with `AppError::Conflict` instead of racing.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::evaluation::evaluate;
use crate::evaluation::job_matching::JobMatcher;
use crate::evaluation::scoring::unmet_criteria;
use crate::models::evaluation::EvaluationResult;
use crate::models::submission::ResumeSubmission;
use crate::render::feedback::{build_feedback_document, score_feedback};
use crate::render::resume::build_resume_document;
use crate::render::{to_html, to_text};

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedResume {
    pub resume_id: Uuid,
    /// Résumé preview markup.
    pub html: String,
    /// Plain-text rendering, the content of the export.
    pub text: String,
    pub score_feedback: String,
    /// Score panel, suggestions and job cards.
    pub feedback_html: String,
    #[serde(flatten)]
    pub evaluation: EvaluationResult,
}

// ────────────────────────────────────────────────────────────────────────────
// In-flight registry
// ────────────────────────────────────────────────────────────────────────────

type Registry = Arc<Mutex<HashSet<String>>>;

/// Held for the lifetime of one generation; releases the session on drop,
/// including when the request future is cancelled.
struct InFlightGuard {
    registry: Registry,
    session_id: String,
}

impl InFlightGuard {
    fn claim(registry: &Registry, session_id: &str) -> Option<Self> {
        let mut active = registry.lock().unwrap_or_else(|e| e.into_inner());
        if !active.insert(session_id.to_string()) {
            return None;
        }
        Some(Self {
            registry: Arc::clone(registry),
            session_id: session_id.to_string(),
        })
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        let mut active = self.registry.lock().unwrap_or_else(|e| e.into_inner());
        active.remove(&self.session_id);
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Generator
// ────────────────────────────────────────────────────────────────────────────

pub struct ResumeGenerator {
    matcher: Arc<dyn JobMatcher>,
    delay: Duration,
    in_flight: Registry,
}

impl ResumeGenerator {
    pub fn new(matcher: Arc<dyn JobMatcher>, delay: Duration) -> Self {
        Self {
            matcher,
            delay,
            in_flight: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    /// Runs one simulated generation for `session_id`.
    pub async fn generate(
        &self,
        session_id: &str,
        submission: &ResumeSubmission,
    ) -> Result<GeneratedResume, AppError> {
        let _guard = InFlightGuard::claim(&self.in_flight, session_id).ok_or_else(|| {
            AppError::Conflict(format!(
                "A resume is already being generated for session {session_id}"
            ))
        })?;

        debug!("Simulating generation latency of {:?}", self.delay);
        tokio::time::sleep(self.delay).await;

        let evaluation = evaluate(submission, self.matcher.as_ref());
        let resume_doc = build_resume_document(submission);
        let feedback_doc = build_feedback_document(&evaluation);

        let resume_id = Uuid::new_v4();
        info!(
            "Generated resume {resume_id}: score {} ({} suggestions, {} job matches via {}), unmet: {:?}",
            evaluation.score,
            evaluation.suggestions.len(),
            evaluation.job_matches.len(),
            self.matcher.backend(),
            unmet_criteria(submission),
        );

        Ok(GeneratedResume {
            resume_id,
            html: to_html(&resume_doc),
            text: to_text(&resume_doc),
            score_feedback: score_feedback(evaluation.score).to_string(),
            feedback_html: to_html(&feedback_doc),
            evaluation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::job_matching::CatalogJobMatcher;

    fn in_flight(generator: &ResumeGenerator, session_id: &str) -> bool {
        generator.in_flight.lock().unwrap().contains(session_id)
    }

    fn generator(delay_ms: u64) -> Arc<ResumeGenerator> {
        Arc::new(ResumeGenerator::new(
            Arc::new(CatalogJobMatcher::default()),
            Duration::from_millis(delay_ms),
        ))
    }

    #[tokio::test(start_paused = true)]
    async fn test_generate_waits_then_evaluates() {
        let generator = generator(2000);
        let start = tokio::time::Instant::now();

        let resume = generator
            .generate("s1", &ResumeSubmission::default())
            .await
            .unwrap();

        assert!(start.elapsed() >= Duration::from_millis(2000));
        assert_eq!(resume.evaluation.score, 50);
        assert!(resume.score_feedback.starts_with("Needs work"));
        assert!(resume.html.starts_with("<div class=\"resume-template\">"));
        assert!(resume.feedback_html.contains("50/100"));
        assert!(!in_flight(&generator, "s1"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_duplicate_session_is_rejected_while_in_flight() {
        let generator = generator(2000);

        let first = {
            let generator = Arc::clone(&generator);
            tokio::spawn(async move { generator.generate("s1", &ResumeSubmission::default()).await })
        };
        // Let the first request claim the session.
        tokio::task::yield_now().await;
        assert!(in_flight(&generator, "s1"));

        let second = generator.generate("s1", &ResumeSubmission::default()).await;
        assert!(matches!(second, Err(AppError::Conflict(_))));

        // Other sessions are unaffected.
        let other = generator.generate("s2", &ResumeSubmission::default()).await;
        assert!(other.is_ok());

        assert!(first.await.unwrap().is_ok());
        assert!(!in_flight(&generator, "s1"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_generation_releases_session() {
        let generator = generator(2000);

        let result = tokio::time::timeout(
            Duration::from_millis(10),
            generator.generate("s1", &ResumeSubmission::default()),
        )
        .await;
        assert!(result.is_err());
        assert!(!in_flight(&generator, "s1"));

        assert!(generator
            .generate("s1", &ResumeSubmission::default())
            .await
            .is_ok());
    }
}
