use serde::{Deserialize, Serialize};

use super::InterviewerId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interviewer {
    pub id: InterviewerId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Response body of `GET /auth/interviewers`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewersResponse {
    pub interviewers: Vec<Interviewer>,
}
