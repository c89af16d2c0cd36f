use crate::evaluation::scoring::MIN_SKILLS;
use crate::models::submission::ResumeSubmission;

/// Descriptions shorter than this (in characters) get a "add more details" nudge.
const MIN_DESCRIPTION_CHARS: usize = 50;

pub const ADD_EXPERIENCE: &str =
    "Consider adding your work experience to make your resume stronger.";
pub const ADD_SKILLS: &str =
    "Consider adding more skills to your resume. Most job descriptions look for 5-10 key skills.";
pub const PMP_CERTIFICATION: &str =
    "Consider obtaining a PMP certification to validate your Project Management skills.";
pub const JAVASCRIPT_CERTIFICATION: &str =
    "Consider getting a JavaScript certification to strengthen your profile for developer roles.";

/// Skill that makes a certification worth suggesting, the substring a certification
/// name must contain to count as already held, and the advice to give otherwise.
///
/// Both comparisons are case-sensitive.
const CERTIFICATION_RULES: &[(&str, &str, &str)] = &[
    ("Project Management", "PMP", PMP_CERTIFICATION),
    ("JavaScript", "JavaScript", JAVASCRIPT_CERTIFICATION),
];

/// Advisory messages for improving a submission.
///
/// Order is fixed: experience, per-entry descriptions, skills count, then
/// certification relevance. Several rules may fire at once.
pub fn suggest(submission: &ResumeSubmission) -> Vec<String> {
    let mut suggestions = Vec::new();

    if submission.experiences.is_empty() {
        suggestions.push(ADD_EXPERIENCE.to_string());
    } else {
        for exp in &submission.experiences {
            if exp.description.chars().count() < MIN_DESCRIPTION_CHARS {
                suggestions.push(format!(
                    "Add more details to your \"{}\" position description. Focus on achievements and quantifiable results.",
                    exp.job_title
                ));
            }
        }
    }

    if submission.skills.len() < MIN_SKILLS {
        suggestions.push(ADD_SKILLS.to_string());
    }

    for &(skill, marker, advice) in CERTIFICATION_RULES {
        let has_skill = submission.skills.iter().any(|s| s == skill);
        let certified = submission
            .certifications
            .iter()
            .any(|c| c.name.contains(marker));
        if has_skill && !certified {
            suggestions.push(advice.to_string());
        }
    }

    suggestions
}
