//! LinkedIn import — mock profile source.
//!
//! Real OAuth and the LinkedIn API are out of scope; `MockLinkedInSource`
//! waits a configurable delay and returns a fixed profile.

use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use crate::errors::AppError;
use crate::models::submission::{
    CertificationEntry, EducationEntry, ExperienceEntry, PersonalInfo, ResumeSubmission,
};

#[async_trait]
pub trait LinkedInSource: Send + Sync {
    async fn fetch_profile(&self) -> Result<ResumeSubmission, AppError>;
}

pub struct MockLinkedInSource {
    delay: Duration,
}

impl MockLinkedInSource {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl LinkedInSource for MockLinkedInSource {
    async fn fetch_profile(&self) -> Result<ResumeSubmission, AppError> {
        tokio::time::sleep(self.delay).await;
        info!("Returning mock LinkedIn profile");
        Ok(mock_profile())
    }
}

fn mock_profile() -> ResumeSubmission {
    ResumeSubmission {
        personal_info: PersonalInfo {
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            phone: "(123) 456-7890".to_string(),
            linkedin: "linkedin.com/in/johndoe".to_string(),
        },
        experiences: vec![
            ExperienceEntry {
                job_title: "Senior Software Engineer".to_string(),
                company: "TechCorp".to_string(),
                start_date: "2018-06".to_string(),
                end_date: String::new(),
                description: "Led a team of 5 developers to build scalable web applications. Implemented CI/CD pipelines reducing deployment times by 40%.".to_string(),
            },
            ExperienceEntry {
                job_title: "Software Developer".to_string(),
                company: "Innovate Inc".to_string(),
                start_date: "2015-01".to_string(),
                end_date: "2018-05".to_string(),
                description: "Developed and maintained company website and internal tools. Collaborated with design team to implement UI improvements.".to_string(),
            },
        ],
        education: vec![EducationEntry {
            degree: "Bachelor of Science in Computer Science".to_string(),
            institution: "State University".to_string(),
            start_year: "2011".to_string(),
            end_year: "2015".to_string(),
        }],
        skills: ["JavaScript", "React", "Node.js", "Python", "SQL", "Project Management"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        certifications: vec![CertificationEntry {
            name: "AWS Certified Developer".to_string(),
            organization: "Amazon Web Services".to_string(),
            year: "2020".to_string(),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::{score, suggest};
    use crate::evaluation::suggestions::{JAVASCRIPT_CERTIFICATION, PMP_CERTIFICATION};

    #[tokio::test(start_paused = true)]
    async fn test_mock_profile_waits_for_delay() {
        let source = MockLinkedInSource::new(Duration::from_millis(1500));
        let start = tokio::time::Instant::now();
        let profile = source.fetch_profile().await.unwrap();

        assert!(start.elapsed() >= Duration::from_millis(1500));
        assert_eq!(profile.personal_info.name, "John Doe");
        assert_eq!(profile.experiences.len(), 2);
    }

    #[test]
    fn test_mock_profile_evaluates_as_complete() {
        let profile = mock_profile();
        assert_eq!(score(&profile), 100);
        assert_eq!(
            suggest(&profile),
            vec![PMP_CERTIFICATION, JAVASCRIPT_CERTIFICATION]
        );
    }
}
