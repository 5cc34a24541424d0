use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ApplicationId;

/// Review state of an application as reported by the intake service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    Pending,
    Accepted,
    Rejected,
    Scheduled,
}

/// A candidate's application to a job posting.
///
/// Applications are owned by the external intake process; the portal only reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub application_id: ApplicationId,
    pub candidate_name: String,
    pub email: String,
    pub application_date: DateTime<Utc>,
    pub application_status: ApplicationStatus,
    /// Automated resume score in the range 0–100
    pub resume_score: f64,
    /// Reference to the stored resume artifact
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume: Option<String>,
}

/// Response body of `GET /applications/:jobId`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationsResponse {
    pub applications: Vec<Application>,
}
