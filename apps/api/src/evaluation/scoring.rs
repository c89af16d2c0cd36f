use crate::models::submission::ResumeSubmission;

const BASE_SCORE: u8 = 50;
const MAX_SCORE: u8 = 100;
pub(crate) const MIN_SKILLS: usize = 5;

/// Completeness criteria and the points each one is worth. Every criterion that
/// holds contributes; they are not mutually exclusive.
const CRITERIA: &[(&str, fn(&ResumeSubmission) -> bool, u8)] = &[
    ("contact", has_contact, 10),
    ("experience", has_experience, 15),
    ("education", has_education, 10),
    ("skills", has_enough_skills, 10),
    ("certification", has_certification, 5),
];

fn has_contact(s: &ResumeSubmission) -> bool {
    !s.personal_info.name.is_empty() && !s.personal_info.email.is_empty()
}

fn has_experience(s: &ResumeSubmission) -> bool {
    !s.experiences.is_empty()
}

fn has_education(s: &ResumeSubmission) -> bool {
    !s.education.is_empty()
}

fn has_enough_skills(s: &ResumeSubmission) -> bool {
    s.skills.len() >= MIN_SKILLS
}

fn has_certification(s: &ResumeSubmission) -> bool {
    !s.certifications.is_empty()
}

/// Heuristic completeness score in `[50, 100]`.
///
/// Looks only at presence and counts, never at the text itself.
pub fn score(submission: &ResumeSubmission) -> u8 {
    let earned: u8 = CRITERIA
        .iter()
        .filter(|(_, holds, _)| holds(submission))
        .map(|(_, _, points)| points)
        .sum();

    BASE_SCORE.saturating_add(earned).min(MAX_SCORE)
}

/// Names of the criteria a submission does not meet yet, in scoring order.
pub fn unmet_criteria(submission: &ResumeSubmission) -> Vec<&'static str> {
    CRITERIA
        .iter()
        .filter(|(_, holds, _)| !holds(submission))
        .map(|(name, _, _)| *name)
        .collect()
}
