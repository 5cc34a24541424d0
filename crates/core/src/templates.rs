//! # E-mail Templates
//!
//! The fixed catalog of candidate e-mails and the `{{placeholder}}` renderer used
//! by the send-emails endpoint.
//!
//! Rendering is literal: a placeholder is replaced only when its exact
//! key is present in the variables, and anything else between `{{` and `}}` is
//! emitted unchanged. That includes the `{{#if ...}}` / `{{/if}}` markers in the
//! final status template, which are not evaluated.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::email::TemplateName;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// A named subject/body pair from the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmailTemplate {
    pub name: TemplateName,
    pub subject: &'static str,
    pub body: &'static str,
}

/// Subject and body after substitution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedTemplate {
    pub subject: String,
    pub body: String,
}

impl EmailTemplate {
    pub fn render(&self, variables: &BTreeMap<String, String>) -> RenderedTemplate {
        RenderedTemplate {
            subject: render(self.subject, variables),
            body: render(self.body, variables),
        }
    }

    /// Variable keys referenced by the subject or body, in order of first use
    pub fn placeholders(&self) -> Vec<&'static str> {
        let mut keys = placeholders(self.subject);
        for key in placeholders(self.body) {
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
        keys
    }
}

impl TemplateName {
    pub fn template(self) -> EmailTemplate {
        let (subject, body) = match self {
            TemplateName::InterviewScheduled => (INTERVIEW_SCHEDULED_SUBJECT, INTERVIEW_SCHEDULED_BODY),
            TemplateName::ThankYou => (THANK_YOU_SUBJECT, THANK_YOU_BODY),
            TemplateName::FinalStatus => (FINAL_STATUS_SUBJECT, FINAL_STATUS_BODY),
            TemplateName::InterviewAccepted => (INTERVIEW_ACCEPTED_SUBJECT, INTERVIEW_ACCEPTED_BODY),
            TemplateName::InterviewRejected => (INTERVIEW_REJECTED_SUBJECT, INTERVIEW_REJECTED_BODY),
        };
        EmailTemplate {
            name: self,
            subject,
            body,
        }
    }
}

/// Every template in the catalog
pub fn catalog() -> Vec<EmailTemplate> {
    TemplateName::ALL.into_iter().map(TemplateName::template).collect()
}

/// Substitutes `{{key}}` placeholders in a single left-to-right pass.
///
/// Unknown keys are left in place and substituted values are never re-scanned.
pub fn render(template: &str, variables: &BTreeMap<String, String>) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find(OPEN) {
        output.push_str(&rest[..open]);
        let after_open = &rest[open + OPEN.len()..];

        let value = after_open
            .find(CLOSE)
            .and_then(|close| variables.get(&after_open[..close]).map(|value| (close, value)));

        match value {
            Some((close, value)) => {
                output.push_str(value);
                rest = &after_open[close + CLOSE.len()..];
            }
            None => {
                // Advance a single brace so `{{{key}}}` still resolves the inner placeholder
                output.push('{');
                rest = &rest[open + 1..];
            }
        }
    }

    output.push_str(rest);
    output
}

/// Variable keys referenced by a template, skipping `{{#...}}` and `{{/...}}` markers
pub fn placeholders(template: &str) -> Vec<&str> {
    let mut keys = Vec::new();
    let mut rest = template;

    while let Some(open) = rest.find(OPEN) {
        let after_open = &rest[open + OPEN.len()..];
        let Some(close) = after_open.find(CLOSE) else {
            break;
        };
        let key = &after_open[..close];
        if !key.is_empty() && !key.starts_with(['#', '/']) && !key.contains(OPEN) && !keys.contains(&key) {
            keys.push(key);
        }
        rest = &after_open[close + CLOSE.len()..];
    }

    keys
}

const INTERVIEW_SCHEDULED_SUBJECT: &str = "Interview Scheduled: {{position}}";
const INTERVIEW_SCHEDULED_BODY: &str = "Dear {{candidateName}},

Your interview for {{position}} has been scheduled for {{date}} at {{time}}.

Meeting Link: {{meetingLink}}
Meeting ID: {{meetingId}}

Best regards,
HR Team";

const THANK_YOU_SUBJECT: &str = "Thank You for Applying to {{position}}";
const THANK_YOU_BODY: &str = "Dear {{candidateName}},

Thank you for applying to the {{position}} position at our company. We have received your application and our team is currently reviewing it.

We appreciate your interest in joining our team.

Best regards,
HR Team";

const FINAL_STATUS_SUBJECT: &str = "Application Status for {{position}}";
const FINAL_STATUS_BODY: &str = "Dear {{candidateName}},

We have completed the review of your application for the {{position}} position.

Status: {{status}}

{{#if status === 'selected'}}
Congratulations! You have been selected for the position. Our HR team will contact you with further details.
{{/if}}

{{#if status === 'rejected'}}
We regret to inform you that you have not been selected for the position. We encourage you to apply for other opportunities in the future.
{{/if}}

{{#if status === 'onhold'}}
Your application is currently on hold. We will update you on the next steps shortly.
{{/if}}

Best regards,
HR Team";

const INTERVIEW_ACCEPTED_SUBJECT: &str = "Congratulations! Your Application Has Been Accepted";
const INTERVIEW_ACCEPTED_BODY: &str = "Dear {{candidateName}},

We are pleased to inform you that your application for the position of {{position}} has been accepted.

We were impressed with your performance during the interview process and believe your skills and experience align well with what we're looking for.

Our HR team will be in touch shortly with the next steps and additional details.

Best regards,
ATS Architects Team";

const INTERVIEW_REJECTED_SUBJECT: &str = "Update Regarding Your Application";
const INTERVIEW_REJECTED_BODY: &str = "Dear {{candidateName}},

Thank you for your interest in the {{position}} position and for taking the time to interview with us.

After careful consideration, we regret to inform you that we have decided to move forward with other candidates whose qualifications more closely match our current needs.

We appreciate your interest in ATS Architects and wish you the best in your future endeavors.

Best regards,
ATS Architects Team";
