//! Résumé projection — the submission laid out as a printable document.

use chrono::NaiveDate;

use crate::models::submission::{EducationEntry, ExperienceEntry, ResumeSubmission};
use crate::render::document::{Block, Document};

pub const PRESENT: &str = "Present";

pub fn build_resume_document(submission: &ResumeSubmission) -> Document {
    let info = &submission.personal_info;
    let mut blocks = vec![
        Block::heading(1, info.name.as_str()),
        Block::paragraph(format!(
            "{} | {} | {}",
            info.email, info.phone, info.linkedin
        )),
        Block::heading(2, "Professional Experience"),
    ];

    blocks.extend(submission.experiences.iter().map(experience_block));

    blocks.push(Block::heading(2, "Education"));
    blocks.extend(submission.education.iter().map(education_block));

    blocks.push(Block::heading(2, "Skills"));
    blocks.push(Block::List {
        items: submission.skills.clone(),
    });

    if !submission.certifications.is_empty() {
        blocks.push(Block::heading(2, "Certifications"));
        blocks.push(Block::List {
            items: submission
                .certifications
                .iter()
                .map(|c| format!("{} ({}, {})", c.name, c.organization, c.year))
                .collect(),
        });
    }

    Document {
        class: "resume-template",
        blocks,
    }
}

fn experience_block(exp: &ExperienceEntry) -> Block {
    let end = if exp.end_date.is_empty() {
        PRESENT.to_string()
    } else {
        format_month(&exp.end_date)
    };

    Block::section(
        "experience",
        vec![
            Block::heading(3, format!("{} at {}", exp.job_title, exp.company)),
            Block::paragraph(format!("{} - {}", format_month(&exp.start_date), end)),
            Block::paragraph(exp.description.as_str()),
        ],
    )
}

fn education_block(edu: &EducationEntry) -> Block {
    let end = if edu.end_year.is_empty() {
        PRESENT
    } else {
        edu.end_year.as_str()
    };

    Block::section(
        "education",
        vec![
            Block::heading(3, edu.degree.as_str()),
            Block::paragraph(format!("{}, {} - {}", edu.institution, edu.start_year, end)),
        ],
    )
}

/// `2018-06` → `Jun 2018`. Empty input stays empty; anything unparseable is
/// returned verbatim.
pub fn format_month(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    match NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d") {
        Ok(date) => date.format("%b %Y").to_string(),
        Err(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::submission::{CertificationEntry, PersonalInfo};
    use crate::render::text::to_text;

    fn sample() -> ResumeSubmission {
        ResumeSubmission {
            personal_info: PersonalInfo {
                name: "John Doe".to_string(),
                email: "john@example.com".to_string(),
                phone: "555-0100".to_string(),
                linkedin: "linkedin.com/in/johndoe".to_string(),
            },
            experiences: vec![ExperienceEntry {
                job_title: "Developer".to_string(),
                company: "Acme".to_string(),
                start_date: "2018-06".to_string(),
                end_date: String::new(),
                description: "Built things.".to_string(),
            }],
            education: vec![EducationEntry {
                degree: "BSc".to_string(),
                institution: "State University".to_string(),
                start_year: "2011".to_string(),
                end_year: "2015".to_string(),
            }],
            skills: vec!["Rust".to_string()],
            certifications: vec![],
        }
    }

    #[test]
    fn test_format_month() {
        assert_eq!(format_month("2018-06"), "Jun 2018");
        assert_eq!(format_month("2024-12"), "Dec 2024");
        assert_eq!(format_month(""), "");
        assert_eq!(format_month("sometime"), "sometime");
    }

    #[test]
    fn test_resume_text_projection() {
        let text = to_text(&build_resume_document(&sample()));
        assert!(text.starts_with("John Doe\njohn@example.com | 555-0100 | linkedin.com/in/johndoe\n"));
        assert!(text.contains("Developer at Acme\nJun 2018 - Present\nBuilt things."));
        assert!(text.contains("BSc\nState University, 2011 - 2015"));
        assert!(text.contains("Skills\n- Rust"));
    }

    #[test]
    fn test_certifications_section_omitted_when_empty() {
        let doc = build_resume_document(&sample());
        assert!(!doc
            .blocks
            .contains(&Block::heading(2, "Certifications")));
    }

    #[test]
    fn test_certifications_listed_with_org_and_year() {
        let mut submission = sample();
        submission.certifications.push(CertificationEntry {
            name: "AWS Certified Developer".to_string(),
            organization: "Amazon Web Services".to_string(),
            year: "2020".to_string(),
        });
        let text = to_text(&build_resume_document(&submission));
        assert!(text.contains("- AWS Certified Developer (Amazon Web Services, 2020)"));
    }

    #[test]
    fn test_ongoing_education_shows_present() {
        let mut submission = sample();
        submission.education[0].end_year.clear();
        let text = to_text(&build_resume_document(&submission));
        assert!(text.contains("State University, 2011 - Present"));
    }
}
