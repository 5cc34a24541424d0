use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Identifiers arrive either as JSON strings or as bare numbers depending on
/// which backend table they came from.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}

/// Identifier of a job application (and therefore of the candidate being scheduled)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationId(#[serde(deserialize_with = "deserialize_id")] String);

/// Identifier of an interviewer account
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InterviewerId(#[serde(deserialize_with = "deserialize_id")] String);

impl ApplicationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl InterviewerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for InterviewerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ApplicationId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<&str> for InterviewerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}
