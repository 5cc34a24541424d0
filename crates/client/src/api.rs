//! Calls to the portal backend.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use talentsync_core::{
    errors::{TalentError, TalentResult},
    models::{
        application::{Application, ApplicationsResponse},
        email::{DispatchResult, Envelope},
        interviewer::{Interviewer, InterviewersResponse},
        schedule::{ScheduleConfirmationRequest, ScheduleConfirmationResponse},
    },
};
use tracing::debug;

use crate::config::ClientConfig;

const CONFIRMATION_FAILED: &str = "Failed to schedule interviews";

#[async_trait]
pub trait PortalApi: Send + Sync {
    /// `GET /applications/:jobId`
    async fn fetch_applications(&self, job_id: &str) -> TalentResult<Vec<Application>>;

    /// `GET /auth/interviewers`
    async fn fetch_interviewers(&self) -> TalentResult<Vec<Interviewer>>;

    /// `POST /interviews/schedule`. A response with `success: false` is an error.
    async fn confirm_schedule(
        &self,
        request: ScheduleConfirmationRequest,
    ) -> TalentResult<ScheduleConfirmationResponse>;

    /// `POST /google/send-emails`
    async fn send_emails(&self, envelopes: Vec<Envelope>) -> TalentResult<DispatchResult>;
}

/// [`PortalApi`] over HTTP with reqwest
#[derive(Debug, Clone)]
pub struct HttpPortalApi {
    client: Client,
    config: ClientConfig,
}

impl HttpPortalApi {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.api_url, path.trim_start_matches('/'))
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.api_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> TalentResult<Response> {
        let response = self
            .authorized(request)
            .send()
            .await
            .map_err(|e| TalentError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(TalentError::Network(format!("{status}: {error_text}")));
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> TalentResult<T> {
        response
            .json::<T>()
            .await
            .map_err(|e| TalentError::Network(format!("invalid response body: {e}")))
    }
}

#[async_trait]
impl PortalApi for HttpPortalApi {
    async fn fetch_applications(&self, job_id: &str) -> TalentResult<Vec<Application>> {
        let url = self.endpoint(&format!("applications/{}", urlencoding::encode(job_id)));
        debug!(%url, "fetching applications");

        let response = self.send(self.client.get(url)).await?;
        let body: ApplicationsResponse = Self::decode(response).await?;
        Ok(body.applications)
    }

    async fn fetch_interviewers(&self) -> TalentResult<Vec<Interviewer>> {
        let response = self
            .send(self.client.get(self.endpoint("auth/interviewers")))
            .await?;
        let body: InterviewersResponse = Self::decode(response).await?;
        Ok(body.interviewers)
    }

    async fn confirm_schedule(
        &self,
        request: ScheduleConfirmationRequest,
    ) -> TalentResult<ScheduleConfirmationResponse> {
        debug!(interviews = request.schedules.len(), "confirming schedule");
        let response = self
            .send(self.client.post(self.endpoint("interviews/schedule")).json(&request))
            .await?;
        let body: ScheduleConfirmationResponse = Self::decode(response).await?;

        if !body.success {
            return Err(TalentError::Network(
                body.message.unwrap_or_else(|| CONFIRMATION_FAILED.to_string()),
            ));
        }
        Ok(body)
    }

    async fn send_emails(&self, envelopes: Vec<Envelope>) -> TalentResult<DispatchResult> {
        let response = self
            .send(self.client.post(self.endpoint("google/send-emails")).json(&envelopes))
            .await?;
        Self::decode(response).await
    }
}
