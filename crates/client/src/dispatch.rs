//! Candidate notifications.
//!
//! Each kind of notification builds [`Envelope`]s for one catalog template and
//! goes through [`EmailDispatcher::send`], a single `POST /google/send-emails`
//! call. The batch succeeds or fails as a whole and is never retried.

use talentsync_core::{
    errors::{TalentError, TalentResult},
    models::email::{
        CandidateNotice, DispatchResult, Envelope, FinalStatus, InterviewNotice, Recipient,
        TemplateName,
    },
};
use tracing::{error, info};

use crate::api::PortalApi;

pub struct EmailDispatcher<'a> {
    api: &'a dyn PortalApi,
}

impl<'a> EmailDispatcher<'a> {
    pub fn new(api: &'a dyn PortalApi) -> Self {
        Self { api }
    }

    pub async fn send_thank_you(&self, notice: &CandidateNotice) -> TalentResult<DispatchResult> {
        self.send(vec![candidate_envelope(TemplateName::ThankYou, notice)])
            .await
    }

    /// One envelope per notice, sent as a single batch
    pub async fn send_interview_scheduled(
        &self,
        notices: &[InterviewNotice],
    ) -> TalentResult<DispatchResult> {
        if notices.is_empty() {
            return Err(TalentError::Validation(
                "No valid email data provided".to_string(),
            ));
        }

        let envelopes = notices
            .iter()
            .map(|notice| {
                Envelope::new(
                    TemplateName::InterviewScheduled,
                    Recipient {
                        name: notice.candidate_name.clone(),
                        email: notice.email.clone(),
                    },
                )
                .with_variable("candidateName", notice.candidate_name.as_str())
                .with_variable("position", notice.job_title.as_str())
                .with_variable("date", notice.interview_date.as_str())
                .with_variable("time", notice.interview_time.as_str())
                .with_optional_variable("meetingLink", notice.meeting_link.as_deref())
                .with_optional_variable("meetingId", notice.meeting_id.as_deref())
            })
            .collect();

        self.send(envelopes).await
    }

    pub async fn send_final_status(
        &self,
        notice: &CandidateNotice,
        status: FinalStatus,
    ) -> TalentResult<DispatchResult> {
        let envelope = candidate_envelope(TemplateName::FinalStatus, notice)
            .with_variable("status", status.as_str());
        self.send(vec![envelope]).await
    }

    pub async fn send_acceptance(&self, notice: &CandidateNotice) -> TalentResult<DispatchResult> {
        self.send(vec![candidate_envelope(TemplateName::InterviewAccepted, notice)])
            .await
    }

    pub async fn send_rejection(&self, notice: &CandidateNotice) -> TalentResult<DispatchResult> {
        self.send(vec![candidate_envelope(TemplateName::InterviewRejected, notice)])
            .await
    }

    pub async fn send(&self, envelopes: Vec<Envelope>) -> TalentResult<DispatchResult> {
        let count = envelopes.len();
        let template = envelopes.first().map(|envelope| envelope.template_name);

        match self.api.send_emails(envelopes).await {
            Ok(result) => {
                info!(count, ?template, success = result.success, "e-mail batch sent");
                Ok(result)
            }
            Err(e) => {
                error!(count, ?template, error = %e, "e-mail batch failed");
                Err(TalentError::dispatch(e))
            }
        }
    }
}

fn candidate_envelope(template: TemplateName, notice: &CandidateNotice) -> Envelope {
    Envelope::new(
        template,
        Recipient {
            name: notice.candidate_name.clone(),
            email: notice.email.clone(),
        },
    )
    .with_variable("position", notice.job_title.as_str())
    .with_variable("candidateName", notice.candidate_name.as_str())
}
