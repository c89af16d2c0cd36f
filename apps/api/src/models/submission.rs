use serde::{Deserialize, Serialize};

/// Contact details from the top of the résumé form. No format validation happens here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub job_title: String,
    pub company: String,
    /// `YYYY-MM`
    pub start_date: String,
    /// `YYYY-MM`, empty while the position is current.
    pub end_date: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub start_year: String,
    /// Empty while ongoing.
    pub end_year: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CertificationEntry {
    pub name: String,
    pub organization: String,
    pub year: String,
}

/// The structured résumé record evaluated and rendered by the service.
///
/// Every field defaults to empty so a half-filled form still deserializes.
/// Skills are already split and trimmed; duplicates are kept.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumeSubmission {
    pub personal_info: PersonalInfo,
    pub experiences: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,
    pub certifications: Vec<CertificationEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_partial_payload_fills_defaults() {
        let submission: ResumeSubmission = serde_json::from_value(json!({
            "personalInfo": { "name": "Ada" },
            "experiences": [{ "jobTitle": "Engineer" }]
        }))
        .unwrap();

        assert_eq!(submission.personal_info.name, "Ada");
        assert!(submission.personal_info.email.is_empty());
        assert_eq!(submission.experiences[0].job_title, "Engineer");
        assert!(submission.experiences[0].end_date.is_empty());
        assert!(submission.skills.is_empty());
    }

    #[test]
    fn test_serializes_camel_case_keys() {
        let value = serde_json::to_value(ResumeSubmission::default()).unwrap();
        assert!(value.get("personalInfo").is_some());
        assert!(value.get("certifications").is_some());
    }
}
