use serde::{Deserialize, Serialize};

/// Job posting as supplied by the persistence layer
///
/// Identity fields (id, company, role, location) are opaque to the scoring
/// engine and passed through unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub company: String,
    pub role: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub salary: f64,
    pub deadline: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "skillsRequired", default)]
    pub skills_required: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "applyLink", default)]
    pub apply_link: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    FullTime,
    Internship,
    Remote,
}

/// Application record; lifecycle is owned by the application store.
/// The engine only reads the job reference and status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    #[serde(rename = "jobId")]
    pub job_id: String,
    pub status: ApplicationStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Applied,
    Interview,
    Selected,
    Rejected,
}

impl ApplicationStatus {
    /// Helper to check whether the application progressed past screening
    pub fn reached_interview(&self) -> bool {
        matches!(self, ApplicationStatus::Interview | ApplicationStatus::Selected)
    }
}
