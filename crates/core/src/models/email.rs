use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::errors::TalentError;

/// Names of the templates in the e-mail catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TemplateName {
    InterviewScheduled,
    ThankYou,
    FinalStatus,
    InterviewAccepted,
    InterviewRejected,
}

impl TemplateName {
    pub const ALL: [TemplateName; 5] = [
        TemplateName::InterviewScheduled,
        TemplateName::ThankYou,
        TemplateName::FinalStatus,
        TemplateName::InterviewAccepted,
        TemplateName::InterviewRejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateName::InterviewScheduled => "INTERVIEW_SCHEDULED",
            TemplateName::ThankYou => "THANK_YOU",
            TemplateName::FinalStatus => "FINAL_STATUS",
            TemplateName::InterviewAccepted => "INTERVIEW_ACCEPTED",
            TemplateName::InterviewRejected => "INTERVIEW_REJECTED",
        }
    }
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateName {
    type Err = TalentError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        TemplateName::ALL
            .into_iter()
            .find(|name| name.as_str().eq_ignore_ascii_case(raw.trim()))
            .ok_or_else(|| TalentError::NotFound(format!("Email template '{raw}' does not exist")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    #[serde(default)]
    pub name: String,
    pub email: String,
}

/// Normalized payload accepted by the send-emails endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub template_name: TemplateName,
    pub recipients: Vec<Recipient>,
    #[serde(default)]
    pub variables: BTreeMap<String, String>,
}

impl Envelope {
    pub fn new(template_name: TemplateName, recipient: Recipient) -> Self {
        Self {
            template_name,
            recipients: vec![recipient],
            variables: BTreeMap::new(),
        }
    }

    pub fn with_variable(mut self, key: &str, value: impl Into<String>) -> Self {
        self.variables.insert(key.to_string(), value.into());
        self
    }

    /// Adds the variable only when a value is present; absent values leave the
    /// placeholder unresolved in the rendered mail.
    pub fn with_optional_variable(self, key: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.with_variable(key, value),
            None => self,
        }
    }
}

/// Response body of `POST /google/send-emails`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchResult {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sent: Option<usize>,
}

fn default_success() -> bool {
    true
}

/// Who a single-recipient notification goes to and for which position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateNotice {
    pub candidate_name: String,
    pub email: String,
    pub job_title: String,
}

/// Formatted e-mail data for one confirmed interview
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewNotice {
    pub candidate_name: String,
    pub email: String,
    pub job_title: String,
    /// Long-form date, e.g. "October 16, 2026"
    pub interview_date: String,
    /// Time range, e.g. "10:00 AM to 10:45 AM"
    pub interview_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_id: Option<String>,
}

/// Outcome communicated by the final status e-mail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FinalStatus {
    Selected,
    Rejected,
    OnHold,
}

impl FinalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FinalStatus::Selected => "selected",
            FinalStatus::Rejected => "rejected",
            FinalStatus::OnHold => "onhold",
        }
    }
}
