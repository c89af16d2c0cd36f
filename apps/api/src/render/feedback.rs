//! Feedback panel — score, suggestions and job cards shown next to the preview.

use crate::models::evaluation::{EvaluationResult, JobMatch};
use crate::render::document::{Block, Document};

/// One-line verdict for a résumé score.
pub fn score_feedback(score: u8) -> &'static str {
    match score {
        90..=u8::MAX => "Excellent! Your resume is well-optimized and ready to send to employers.",
        75..=89 => "Good! Your resume is strong but could benefit from a few improvements.",
        60..=74 => "Fair. Consider implementing the suggestions below to improve your resume.",
        _ => "Needs work. Follow the suggestions below to create a more competitive resume.",
    }
}

pub fn build_feedback_document(result: &EvaluationResult) -> Document {
    let score_panel = Block::section(
        "resume-score",
        vec![
            Block::heading(3, format!("Your Resume Score: {}/100", result.score)),
            Block::Bar {
                class: "score-bar",
                percent: result.score,
            },
            Block::paragraph(score_feedback(result.score)),
        ],
    );

    let suggestions = Block::section(
        "suggestions",
        vec![
            Block::heading(3, "Improvement Suggestions"),
            Block::List {
                items: result.suggestions.clone(),
            },
        ],
    );

    let jobs = Block::section(
        "job-matches",
        vec![
            Block::heading(3, "Recommended Job Matches"),
            Block::section("job-cards", result.job_matches.iter().map(job_card).collect()),
        ],
    );

    Document {
        class: "resume-feedback",
        blocks: vec![score_panel, suggestions, jobs],
    }
}

fn job_card(job: &JobMatch) -> Block {
    Block::section(
        "job-card",
        vec![
            Block::heading(4, job.title.as_str()),
            Block::classed("company", job.company.as_str()),
            Block::classed("location", job.location.as_str()),
            Block::classed("platform", format!("Found on {}", job.platform)),
            Block::section(
                "match-score",
                vec![
                    Block::paragraph(format!("{}% Match", job.match_score)),
                    Block::Bar {
                        class: "match-bar",
                        percent: job.match_score,
                    },
                ],
            ),
            Block::Link {
                class: "view-job",
                href: job.url.clone(),
                text: "View Job".to_string(),
            },
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::html::to_html;

    #[test]
    fn test_score_feedback_bands() {
        assert!(score_feedback(100).starts_with("Excellent"));
        assert!(score_feedback(90).starts_with("Excellent"));
        assert!(score_feedback(89).starts_with("Good"));
        assert!(score_feedback(75).starts_with("Good"));
        assert!(score_feedback(74).starts_with("Fair"));
        assert!(score_feedback(60).starts_with("Fair"));
        assert!(score_feedback(59).starts_with("Needs work"));
        assert!(score_feedback(50).starts_with("Needs work"));
    }

    #[test]
    fn test_feedback_html_contains_cards() {
        let result = EvaluationResult {
            score: 85,
            suggestions: vec!["Add skills".to_string()],
            job_matches: vec![JobMatch {
                title: "Frontend Developer".to_string(),
                company: "WebSolutions".to_string(),
                location: "Remote".to_string(),
                platform: "Glassdoor".to_string(),
                match_score: 92,
                url: "#".to_string(),
            }],
        };

        let html = to_html(&build_feedback_document(&result));
        assert!(html.contains("Your Resume Score: 85/100"));
        assert!(html.contains("width: 85%"));
        assert!(html.contains("<li>Add skills</li>"));
        assert!(html.contains("Found on Glassdoor"));
        assert!(html.contains("92% Match"));
        assert!(html.contains("<a href=\"#\" target=\"_blank\" class=\"view-job\">View Job</a>"));
    }
}
