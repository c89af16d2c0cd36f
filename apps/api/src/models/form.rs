use serde::{Deserialize, Serialize};

use crate::models::submission::{
    CertificationEntry, EducationEntry, ExperienceEntry, PersonalInfo, ResumeSubmission,
};

/// Raw résumé form as the widget posts it. Skills arrive as one comma-separated field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormSubmission {
    pub personal_info: PersonalInfo,
    pub experiences: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: String,
    pub certifications: Vec<CertificationEntry>,
}

impl FormSubmission {
    /// Builds the evaluation record. Only the skills field is normalized.
    pub fn collect(self) -> ResumeSubmission {
        ResumeSubmission {
            personal_info: self.personal_info,
            experiences: self.experiences,
            education: self.education,
            skills: split_skills(&self.skills),
            certifications: self.certifications,
        }
    }
}

/// Splits on commas, trims each piece, drops blanks. Order and duplicates are kept.
pub fn split_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_skills_trims_and_drops_blanks() {
        let skills = split_skills(" Rust ,, SQL,   , Go ");
        assert_eq!(skills, vec!["Rust", "SQL", "Go"]);
    }

    #[test]
    fn test_split_skills_keeps_duplicates() {
        assert_eq!(split_skills("Rust, Rust"), vec!["Rust", "Rust"]);
    }

    #[test]
    fn test_split_skills_empty_input() {
        assert!(split_skills("").is_empty());
        assert!(split_skills("  ,  ").is_empty());
    }

    #[test]
    fn test_collect_passes_other_fields_through() {
        let form = FormSubmission {
            personal_info: PersonalInfo {
                name: "  Ada Lovelace ".to_string(),
                ..Default::default()
            },
            skills: "Math, Engines".to_string(),
            ..Default::default()
        };

        let submission = form.collect();
        assert_eq!(submission.personal_info.name, "  Ada Lovelace ");
        assert_eq!(submission.skills, vec!["Math", "Engines"]);
    }
}
