use thiserror::Error;

#[derive(Error, Debug)]
pub enum TalentError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Index error: {0}")]
    Index(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Email dispatch failed: {0}")]
    Dispatch(#[source] Box<TalentError>),

    #[error("Capacity exceeded: {0} candidate(s) could not be placed")]
    Capacity(usize),

    #[error("Authorization error: {0}")]
    Authorization(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl TalentError {
    /// Wraps a failed send so callers can tell delivery failures apart from
    /// the other network calls.
    pub fn dispatch(cause: TalentError) -> Self {
        match cause {
            TalentError::Dispatch(_) => cause,
            other => TalentError::Dispatch(Box::new(other)),
        }
    }
}

pub type TalentResult<T> = Result<T, TalentError>;
