use eyre::{eyre, Result};
use std::env;

/// Connection settings for the portal backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the backend, without a trailing slash (required)
    pub api_url: String,
    /// Bearer token sent with every request
    pub api_token: Option<String>,
}

impl ClientConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into().trim_end_matches('/').to_string(),
            api_token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("PORTAL_API_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| eyre!("PORTAL_API_URL environment variable not set"))?;

        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(eyre!("PORTAL_API_URL must be an http(s) URL, got '{}'", api_url));
        }

        let config = Self::new(api_url.trim());
        Ok(match lookup("PORTAL_API_TOKEN").filter(|token| !token.is_empty()) {
            Some(token) => config.with_token(token),
            None => config,
        })
    }
}
