//! Delivery of rendered e-mails.
//!
//! The server renders templates itself and only hands finished messages to a
//! [`Mailer`]. [`TracingMailer`] logs each message instead of sending it and is
//! what the `talentsync` binary runs with.

use async_trait::async_trait;
use serde::Serialize;
use talentsync_core::{
    errors::TalentResult,
    models::email::{Recipient, TemplateName},
};
use tracing::info;

/// A fully rendered message for a single recipient
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedEmail {
    pub from: String,
    pub to: Recipient,
    pub template_name: TemplateName,
    pub subject: String,
    pub body: String,
}

#[async_trait]
pub trait Mailer: Send + Sync {
    /// Sends the whole batch, returning how many messages were accepted.
    async fn deliver(&self, emails: Vec<RenderedEmail>) -> TalentResult<usize>;
}

/// Logs every message at info level and reports it as sent
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingMailer;

#[async_trait]
impl Mailer for TracingMailer {
    async fn deliver(&self, emails: Vec<RenderedEmail>) -> TalentResult<usize> {
        for email in &emails {
            info!(
                from = %email.from,
                to = %email.to.email,
                template = %email.template_name,
                subject = %email.subject,
                "delivering e-mail"
            );
        }
        Ok(emails.len())
    }
}
