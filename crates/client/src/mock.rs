use async_trait::async_trait;
use mockall::mock;
use talentsync_core::{
    errors::TalentResult,
    models::{
        application::Application,
        email::{DispatchResult, Envelope},
        interviewer::Interviewer,
        schedule::{ScheduleConfirmationRequest, ScheduleConfirmationResponse},
    },
};

use crate::api::PortalApi;

// Mock backend for testing sessions and dispatch
mock! {
    pub PortalApi {}

    #[async_trait]
    impl PortalApi for PortalApi {
        async fn fetch_applications(&self, job_id: &str) -> TalentResult<Vec<Application>>;

        async fn fetch_interviewers(&self) -> TalentResult<Vec<Interviewer>>;

        async fn confirm_schedule(
            &self,
            request: ScheduleConfirmationRequest,
        ) -> TalentResult<ScheduleConfirmationResponse>;

        async fn send_emails(&self, envelopes: Vec<Envelope>) -> TalentResult<DispatchResult>;
    }
}
