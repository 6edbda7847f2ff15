//! Careers domain types
//!
//! Open positions and the applications submitted against them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    default_true, null_as_default, null_as_true, require, require_email, Entity, Ordering,
    ValidationError,
};

// ============================================================================
// Positions
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobPosition {
    pub title: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub employment_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub requirements: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub salary_range: Option<String>,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
    #[serde(default = "default_true", deserialize_with = "null_as_true")]
    pub active: bool,
}

impl Entity for JobPosition {
    const TABLE: &'static str = "job_positions";
    const ORDERING: Ordering = Ordering::NewestFirst;

    fn validate(&mut self) -> Result<(), ValidationError> {
        require("title", &self.title)
    }
}

// ============================================================================
// Applications
// ============================================================================

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Reviewed,
    Shortlisted,
    Rejected,
    Hired,
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApplicationStatus::Pending => write!(f, "pending"),
            ApplicationStatus::Reviewed => write!(f, "reviewed"),
            ApplicationStatus::Shortlisted => write!(f, "shortlisted"),
            ApplicationStatus::Rejected => write!(f, "rejected"),
            ApplicationStatus::Hired => write!(f, "hired"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobApplication {
    #[serde(default)]
    pub position_id: Option<Uuid>,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub cover_letter: Option<String>,
    #[serde(default)]
    pub resume_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: ApplicationStatus,
}

impl Entity for JobApplication {
    const TABLE: &'static str = "job_applications";
    const ORDERING: Ordering = Ordering::NewestFirst;

    fn validate(&mut self) -> Result<(), ValidationError> {
        require("full_name", &self.full_name)?;
        require_email("email", &self.email)
    }
}

/// Public application form input
#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSubmission {
    #[serde(default)]
    pub position_id: Option<Uuid>,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub cover_letter: Option<String>,
    #[serde(default)]
    pub resume_url: Option<String>,
}

impl From<ApplicationSubmission> for JobApplication {
    fn from(s: ApplicationSubmission) -> Self {
        Self {
            position_id: s.position_id,
            full_name: s.full_name,
            email: s.email,
            phone: s.phone,
            cover_letter: s.cover_letter,
            resume_url: s.resume_url,
            // Applicants cannot pick their own review status
            status: ApplicationStatus::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn submissions_always_start_pending() {
        let submission: ApplicationSubmission = serde_json::from_value(json!({
            "full_name": "Abebe Kebede",
            "email": "abebe@example.com",
            "status": "hired"
        }))
        .unwrap();

        let mut application = JobApplication::from(submission);
        assert_eq!(application.status, ApplicationStatus::Pending);
        assert!(application.validate().is_ok());
    }

    #[test]
    fn applications_need_a_usable_email() {
        let mut application = JobApplication {
            position_id: None,
            full_name: "Abebe Kebede".to_string(),
            email: "not-an-email".to_string(),
            phone: None,
            cover_letter: None,
            resume_url: None,
            status: ApplicationStatus::Pending,
        };
        assert_eq!(application.validate().unwrap_err().field, "email");
    }

    #[test]
    fn status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_value(ApplicationStatus::Shortlisted).unwrap(),
            json!("shortlisted")
        );
        assert_eq!(ApplicationStatus::Hired.to_string(), "hired");
    }
}
