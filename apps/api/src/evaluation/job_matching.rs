//! Job Matching — pluggable, trait-based ranking of job candidates for a submission.
//!
//! Default: `CatalogJobMatcher` (fixed catalog, scores taken as-is).
//! Opt-in: `SkillOverlapJobMatcher` (scores derived from skill overlap with each job).
//!
//! `AppState` holds an `Arc<dyn JobMatcher>`, chosen at startup via `JOB_MATCHER`.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::models::evaluation::JobMatch;
use crate::models::submission::ResumeSubmission;

/// Bonus for an experience title sharing a word with the job title.
const TITLE_OVERLAP_BONUS: u32 = 5;
const MAX_MATCH_SCORE: u8 = 100;

// ────────────────────────────────────────────────────────────────────────────
// Catalog
// ────────────────────────────────────────────────────────────────────────────

/// One job listing in the candidate catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogJob {
    pub title: String,
    pub company: String,
    pub location: String,
    pub platform: String,
    /// Score used when the matcher does not compute one.
    pub match_score: u8,
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
}

fn default_url() -> String {
    "#".to_string()
}

impl CatalogJob {
    fn to_match(&self, match_score: u8) -> JobMatch {
        JobMatch {
            title: self.title.clone(),
            company: self.company.clone(),
            location: self.location.clone(),
            platform: self.platform.clone(),
            match_score,
            url: self.url.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobCatalog {
    pub jobs: Vec<CatalogJob>,
}

impl JobCatalog {
    /// Loads a catalog from a JSON file shaped like `{"jobs": [...]}`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read job catalog at {}", path.display()))?;
        let catalog: JobCatalog = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid job catalog JSON in {}", path.display()))?;

        if let Some(job) = catalog.jobs.iter().find(|j| j.match_score > MAX_MATCH_SCORE) {
            bail!(
                "Job '{}' in {} has matchScore {} (must be 0-{MAX_MATCH_SCORE})",
                job.title,
                path.display(),
                job.match_score
            );
        }
        Ok(catalog)
    }
}

impl Default for JobCatalog {
    fn default() -> Self {
        let job = |title: &str,
                   company: &str,
                   location: &str,
                   platform: &str,
                   match_score: u8,
                   skills: &[&str]| CatalogJob {
            title: title.to_string(),
            company: company.to_string(),
            location: location.to_string(),
            platform: platform.to_string(),
            match_score,
            url: default_url(),
            required_skills: skills.iter().map(|s| s.to_string()).collect(),
        };

        JobCatalog {
            jobs: vec![
                job(
                    "Senior Software Engineer",
                    "TechCorp",
                    "San Francisco, CA (Remote)",
                    "LinkedIn",
                    85,
                    &["JavaScript", "Node.js", "Python", "SQL"],
                ),
                job(
                    "Project Manager",
                    "Innovate Inc",
                    "New York, NY",
                    "Indeed",
                    78,
                    &["Project Management", "Agile", "Communication"],
                ),
                job(
                    "Frontend Developer",
                    "WebSolutions",
                    "Remote",
                    "Glassdoor",
                    92,
                    &["JavaScript", "React", "HTML", "CSS"],
                ),
            ],
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Ranks job candidates for a submission. Implementations must return results
/// sorted by descending `match_score` (see [`rank_matches`]).
pub trait JobMatcher: Send + Sync {
    fn match_jobs(&self, submission: &ResumeSubmission) -> Vec<JobMatch>;

    /// "catalog" | "skills" — for logs and the health endpoint.
    fn backend(&self) -> &'static str;
}

/// Stable sort by descending match score; ties keep catalog order.
pub fn rank_matches(mut matches: Vec<JobMatch>) -> Vec<JobMatch> {
    matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    matches
}

// ────────────────────────────────────────────────────────────────────────────
// CatalogJobMatcher — default
// ────────────────────────────────────────────────────────────────────────────

/// Returns the catalog with its stored scores, ranked. Ignores the submission.
pub struct CatalogJobMatcher {
    catalog: JobCatalog,
}

impl CatalogJobMatcher {
    pub fn new(catalog: JobCatalog) -> Self {
        Self { catalog }
    }
}

impl Default for CatalogJobMatcher {
    fn default() -> Self {
        Self::new(JobCatalog::default())
    }
}

impl JobMatcher for CatalogJobMatcher {
    fn match_jobs(&self, _submission: &ResumeSubmission) -> Vec<JobMatch> {
        rank_matches(
            self.catalog
                .jobs
                .iter()
                .map(|job| job.to_match(job.match_score))
                .collect(),
        )
    }

    fn backend(&self) -> &'static str {
        "catalog"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// SkillOverlapJobMatcher
// ────────────────────────────────────────────────────────────────────────────

/// Scores each job by the share of its required skills the submission lists.
///
/// Algorithm:
/// 1. score = round(100 × |required ∩ skills| / |required|), case-insensitive
/// 2. +5 when any experience title shares a word with the job title
/// 3. clamp to 100; jobs with no required skills keep their catalog score
pub struct SkillOverlapJobMatcher {
    catalog: JobCatalog,
}

impl SkillOverlapJobMatcher {
    pub fn new(catalog: JobCatalog) -> Self {
        Self { catalog }
    }
}

impl JobMatcher for SkillOverlapJobMatcher {
    fn match_jobs(&self, submission: &ResumeSubmission) -> Vec<JobMatch> {
        let skills: HashSet<String> = submission
            .skills
            .iter()
            .map(|s| s.to_lowercase())
            .collect();
        let title_words: HashSet<String> = submission
            .experiences
            .iter()
            .flat_map(|e| words(&e.job_title))
            .collect();

        let matches = self
            .catalog
            .jobs
            .iter()
            .map(|job| {
                let score = compute_overlap_score(job, &skills, &title_words);
                job.to_match(score)
            })
            .collect();

        rank_matches(matches)
    }

    fn backend(&self) -> &'static str {
        "skills"
    }
}

fn compute_overlap_score(
    job: &CatalogJob,
    skills: &HashSet<String>,
    title_words: &HashSet<String>,
) -> u8 {
    if job.required_skills.is_empty() {
        return job.match_score;
    }

    let covered = job
        .required_skills
        .iter()
        .filter(|s| skills.contains(&s.to_lowercase()))
        .count();
    let mut score = ((covered as f64 / job.required_skills.len() as f64) * 100.0).round() as u32;

    if words(&job.title).any(|w| title_words.contains(&w)) {
        score += TITLE_OVERLAP_BONUS;
    }

    score.min(MAX_MATCH_SCORE as u32) as u8
}

fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().map(|w| w.to_lowercase())
}
