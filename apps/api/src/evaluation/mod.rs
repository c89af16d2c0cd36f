// Résumé Evaluation Engine
// Pure functions over a ResumeSubmission: completeness score, suggestions, job ranking.
// No I/O and no shared state — handlers and the generator call in directly.

pub mod handlers;
pub mod job_matching;
pub mod scoring;
pub mod suggestions;

use crate::models::evaluation::EvaluationResult;
use crate::models::submission::ResumeSubmission;

use job_matching::JobMatcher;

pub use scoring::score;
pub use suggestions::suggest;

/// Runs all three evaluations over one submission.
pub fn evaluate(submission: &ResumeSubmission, matcher: &dyn JobMatcher) -> EvaluationResult {
    EvaluationResult {
        score: score(submission),
        suggestions: suggest(submission),
        job_matches: matcher.match_jobs(submission),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use job_matching::CatalogJobMatcher;

    #[test]
    fn test_evaluate_empty_submission() {
        let result = evaluate(&ResumeSubmission::default(), &CatalogJobMatcher::default());
        assert_eq!(result.score, 50);
        assert_eq!(result.suggestions.len(), 2);
        assert_eq!(result.job_matches.len(), 3);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let submission = ResumeSubmission {
            skills: vec!["JavaScript".to_string()],
            ..Default::default()
        };
        let matcher = CatalogJobMatcher::default();
        assert_eq!(
            evaluate(&submission, &matcher),
            evaluate(&submission, &matcher)
        );
    }
}
