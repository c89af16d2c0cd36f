use serde::{Deserialize, Serialize};

/// A job candidate ranked against a submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JobMatch {
    pub title: String,
    pub company: String,
    pub location: String,
    pub platform: String,
    pub match_score: u8, // 0 – 100
    pub url: String,
}

/// Everything the engine produces for one submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    pub score: u8, // 50 – 100
    pub suggestions: Vec<String>,
    pub job_matches: Vec<JobMatch>,
}
