//! Candidate and job posting profiles
//!
//! Structured fields the algorithmic scorer operates on. Optional fields
//! degrade to documented defaults in scoring rather than erroring.

use serde::{Deserialize, Serialize};

/// A candidate's structured profile
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProfile {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_min: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_max: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl CandidateProfile {
    #[must_use]
    pub fn new(skills: Vec<String>, experience: impl Into<String>) -> Self {
        Self {
            skills,
            experience: experience.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    #[must_use]
    pub fn with_work_type(mut self, work_type: impl Into<String>) -> Self {
        self.work_type = Some(work_type.into());
        self
    }

    #[must_use]
    pub fn with_salary_range(mut self, min: u64, max: u64) -> Self {
        self.salary_min = Some(min);
        self.salary_max = Some(max);
        self
    }
}

/// A job posting's structured fields
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub skills: Vec<String>,
    /// Ordered requirement lines as written in the posting
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_min: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_max: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub description: String,
}

impl JobPosting {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        company: impl Into<String>,
        skills: Vec<String>,
    ) -> Self {
        Self {
            title: title.into(),
            company: company.into(),
            skills,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    #[must_use]
    pub fn with_work_type(mut self, work_type: impl Into<String>) -> Self {
        self.work_type = Some(work_type.into());
        self
    }

    #[must_use]
    pub fn with_salary_range(mut self, min: u64, max: u64) -> Self {
        self.salary_min = Some(min);
        self.salary_max = Some(max);
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Flatten the posting into one searchable text blob for indexing
    #[must_use]
    pub fn to_search_text(&self) -> String {
        let mut parts = vec![
            self.title.clone(),
            self.company.clone(),
            self.skills.join(" "),
            self.requirements.join(" "),
        ];
        if let Some(location) = &self.location {
            parts.push(location.clone());
        }
        parts.push(self.description.clone());
        parts.retain(|p| !p.is_empty());
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_wire_format() {
        let candidate = CandidateProfile::new(vec!["rust".to_string()], "5 years")
            .with_salary_range(100_000, 150_000)
            .with_work_type("remote");

        let json = serde_json::to_string(&candidate).unwrap();
        assert!(json.contains("\"salaryMin\":100000"));
        assert!(json.contains("\"workType\":\"remote\""));

        let parsed: CandidateProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.salary_min, Some(100_000));
    }

    #[test]
    fn test_missing_optionals_deserialize() {
        let job: JobPosting =
            serde_json::from_str(r#"{"title": "Engineer", "company": "Acme", "skills": []}"#)
                .unwrap();
        assert!(job.location.is_none());
        assert!(job.salary_max.is_none());
        assert!(job.requirements.is_empty());
    }

    #[test]
    fn test_to_search_text() {
        let job = JobPosting::new(
            "Backend Engineer",
            "Acme",
            vec!["rust".to_string(), "postgres".to_string()],
        )
        .with_location("Berlin")
        .with_description("Build the matching engine");

        let text = job.to_search_text();
        assert!(text.contains("Backend Engineer"));
        assert!(text.contains("rust postgres"));
        assert!(text.contains("Berlin"));
    }
}
