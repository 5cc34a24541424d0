use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use talentsync_core::{
    errors::{TalentError, TalentResult},
    models::email::{DispatchResult, Recipient, TemplateName},
    templates::RenderedTemplate,
};
use tracing::{debug, info};

use crate::{mailer::RenderedEmail, middleware::error_handling::AppError, ApiState};

/// One entry of the send-emails batch as received on the wire.
///
/// The template name stays a string here so an unknown name is reported as a
/// bad request rather than a body rejection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeRequest {
    pub template_name: String,
    #[serde(default)]
    pub recipients: Vec<Recipient>,
    #[serde(default)]
    pub variables: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PreviewRequest {
    #[serde(default)]
    pub variables: BTreeMap<String, String>,
}

#[axum::debug_handler]
pub async fn send_emails(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<Vec<EnvelopeRequest>>,
) -> Result<Json<DispatchResult>, AppError> {
    let emails = render_batch(&payload, &state.sender)?;
    debug!(envelopes = payload.len(), emails = emails.len(), "rendered e-mail batch");

    let sent = state
        .mailer
        .deliver(emails)
        .await
        .map_err(TalentError::dispatch)?;
    info!(sent, "e-mail batch delivered");

    Ok(Json(DispatchResult {
        success: true,
        message: None,
        sent: Some(sent),
    }))
}

#[axum::debug_handler]
pub async fn preview_template(
    Path(name): Path<String>,
    Json(payload): Json<PreviewRequest>,
) -> Result<Json<RenderedTemplate>, AppError> {
    let template = name.parse::<TemplateName>()?.template();
    Ok(Json(template.render(&payload.variables)))
}

/// Validates the whole batch before anything is rendered, then renders one
/// message per recipient. `candidateName` falls back to the recipient's name.
pub fn render_batch(envelopes: &[EnvelopeRequest], sender: &str) -> TalentResult<Vec<RenderedEmail>> {
    if envelopes.is_empty() {
        return Err(TalentError::Validation(
            "No valid email data provided".to_string(),
        ));
    }

    let mut emails = Vec::new();
    for (index, envelope) in envelopes.iter().enumerate() {
        let template_name = envelope.template_name.parse::<TemplateName>().map_err(|_| {
            TalentError::Validation(format!(
                "envelope {index}: unknown email template '{}'",
                envelope.template_name
            ))
        })?;
        if envelope.recipients.is_empty() {
            return Err(TalentError::Validation(format!(
                "envelope {index}: no recipients"
            )));
        }

        let template = template_name.template();
        for recipient in &envelope.recipients {
            if recipient.email.trim().is_empty() {
                return Err(TalentError::Validation(format!(
                    "envelope {index}: recipient '{}' has no e-mail address",
                    recipient.name
                )));
            }

            let mut variables = envelope.variables.clone();
            variables
                .entry("candidateName".to_string())
                .or_insert_with(|| recipient.name.clone());
            let rendered = template.render(&variables);

            emails.push(RenderedEmail {
                from: sender.to_string(),
                to: recipient.clone(),
                template_name,
                subject: rendered.subject,
                body: rendered.body,
            });
        }
    }

    Ok(emails)
}
