//! Cover letter — a short template filled from the submission's most recent role.

use chrono::NaiveDate;

use crate::models::submission::ResumeSubmission;
use crate::render::document::{Block, Document};

pub fn build_cover_letter(submission: &ResumeSubmission, date: NaiveDate) -> Document {
    let latest = submission.experiences.first();
    let field = latest
        .map(|e| e.job_title.as_str())
        .filter(|t| !t.is_empty())
        .unwrap_or("my field");
    let company = latest
        .map(|e| e.company.as_str())
        .filter(|c| !c.is_empty())
        .unwrap_or("my previous company");
    let achievement = latest
        .map(|e| e.description.as_str())
        .filter(|d| !d.is_empty())
        .unwrap_or("gained valuable experience");

    let top_skills = submission
        .skills
        .iter()
        .take(3)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    let skills = if top_skills.is_empty() {
        "relevant skills".to_string()
    } else {
        top_skills
    };

    Document {
        class: "cover-letter",
        blocks: vec![
            Block::paragraph(date.format("%-m/%-d/%Y").to_string()),
            Block::paragraph("Dear Hiring Manager,"),
            Block::paragraph(format!(
                "I am excited to apply for the position at your company. With my background in {field}, I believe I would be a great fit for your team."
            )),
            Block::paragraph(format!(
                "In my most recent role at {company}, I {achievement}."
            )),
            Block::paragraph(format!(
                "My skills in {skills} would allow me to contribute immediately to your team."
            )),
            Block::paragraph(
                "I would welcome the opportunity to discuss how my experience aligns with your needs. Thank you for your time and consideration.",
            ),
            Block::paragraph("Sincerely,"),
            Block::paragraph(submission.personal_info.name.as_str()),
        ],
    }
}
