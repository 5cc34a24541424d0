use talentsync_core::{
    applications::SelectionSet,
    errors::{TalentError, TalentResult},
    models::{
        interviewer::Interviewer,
        schedule::{
            ScheduleConfirmationRequest, ScheduleDay, ScheduleHandoff, ScheduleOutcome,
            ScheduleParameters, SlotUpdate,
        },
        InterviewerId,
    },
    permissions::{Capabilities, Permission},
    scheduling::{
        edit_slot, edit_slot_checked, format_interview_notices, generate_schedule,
        to_scheduled_interviews,
    },
};
use tracing::{debug, error, info, warn};

use crate::{
    api::PortalApi,
    cancellation::{CancellationToken, LoadOutcome},
    dispatch::EmailDispatcher,
};

/// How a confirmation ended. Every variant means the backend accepted the
/// schedule; they differ only in what happened to the candidate e-mails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmationOutcome {
    Scheduled {
        interviews: usize,
    },
    ScheduledAndNotified {
        interviews: usize,
        notified: usize,
    },
    ScheduledWithEmailWarning {
        interviews: usize,
        warning: String,
    },
}

/// State of the scheduler page for one hand-off from the applications page
#[derive(Debug, Clone)]
pub struct SchedulerSession {
    handoff: ScheduleHandoff,
    interviewers: Vec<Interviewer>,
    selection: SelectionSet<InterviewerId>,
    params: ScheduleParameters,
    generated: Option<ScheduleOutcome>,
    schedule: Vec<ScheduleDay>,
    loading: bool,
    error: Option<String>,
}

impl SchedulerSession {
    pub fn new(handoff: ScheduleHandoff, params: ScheduleParameters) -> Self {
        Self {
            handoff,
            interviewers: Vec::new(),
            selection: SelectionSet::new(),
            params,
            generated: None,
            schedule: Vec::new(),
            loading: false,
            error: None,
        }
    }

    pub fn handoff(&self) -> &ScheduleHandoff {
        &self.handoff
    }

    /// Fetches the interviewer roster; every interviewer starts unselected.
    pub async fn load_interviewers(
        &mut self,
        api: &dyn PortalApi,
        capabilities: &Capabilities,
        token: &CancellationToken,
    ) -> TalentResult<LoadOutcome> {
        self.guard(capabilities.require(Permission::ScheduleInterview))?;

        self.loading = true;
        let result = api.fetch_interviewers().await;

        if token.is_cancelled() {
            debug!("interviewer response superseded, discarding");
            return Ok(LoadOutcome::Discarded);
        }
        self.loading = false;

        match result {
            Ok(interviewers) => {
                info!(count = interviewers.len(), "interviewers loaded");
                self.selection = SelectionSet::unselected(interviewers.iter().map(|i| &i.id));
                self.interviewers = interviewers;
                self.error = None;
                Ok(LoadOutcome::Applied)
            }
            Err(e) => {
                error!(error = %e, "failed to fetch interviewers");
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    pub fn interviewers(&self) -> &[Interviewer] {
        &self.interviewers
    }

    pub fn toggle_interviewer(&mut self, id: &InterviewerId) -> bool {
        self.selection.toggle(id)
    }

    /// Selected interviewers in roster order
    pub fn selected_interviewers(&self) -> Vec<InterviewerId> {
        self.selection
            .selected_in(self.interviewers.iter().map(|interviewer| &interviewer.id))
    }

    pub fn params(&self) -> &ScheduleParameters {
        &self.params
    }

    pub fn set_params(&mut self, params: ScheduleParameters) {
        self.params = params;
    }

    /// Generates a fresh schedule and makes it the editable copy.
    ///
    /// Candidates that did not fit are reported through the outcome's
    /// `unplaced` list; that is not an error.
    pub fn generate(&mut self, capabilities: &Capabilities) -> TalentResult<&ScheduleOutcome> {
        self.guard(capabilities.require(Permission::ScheduleInterview))?;

        let interviewers = self.selected_interviewers();
        let outcome = generate_schedule(
            &interviewers,
            &self.handoff.selected_applications,
            &self.params,
        );
        let outcome = self.guard(outcome)?;

        if let Some(shortfall) = outcome.capacity_error() {
            warn!(error = %shortfall, "schedule does not cover every candidate");
        }
        info!(
            days = outcome.days.len(),
            interviews = outcome.slot_count(),
            "schedule generated"
        );

        self.schedule = outcome.days.clone();
        self.error = None;
        Ok(&*self.generated.insert(outcome))
    }

    /// The outcome of the last generation, before any edits
    pub fn outcome(&self) -> Option<&ScheduleOutcome> {
        self.generated.as_ref()
    }

    /// The editable schedule
    pub fn schedule(&self) -> &[ScheduleDay] {
        &self.schedule
    }

    /// Replaces one slot; overlapping another slot is allowed.
    pub fn edit(&mut self, day: usize, slot: usize, update: SlotUpdate) -> TalentResult<()> {
        let edited = edit_slot(&self.schedule, day, slot, update, self.params.interview_duration);
        self.schedule = self.guard(edited)?;
        Ok(())
    }

    /// Like [`SchedulerSession::edit`] but refuses edits that overlap another slot that day.
    pub fn edit_checked(&mut self, day: usize, slot: usize, update: SlotUpdate) -> TalentResult<()> {
        let edited =
            edit_slot_checked(&self.schedule, day, slot, update, self.params.interview_duration);
        self.schedule = self.guard(edited)?;
        Ok(())
    }

    /// Sends the editable schedule to the backend and optionally e-mails the
    /// candidates.
    ///
    /// Once the backend has accepted the schedule, a failed e-mail batch is
    /// reported as a warning in the outcome rather than as an error.
    pub async fn confirm(
        &mut self,
        api: &dyn PortalApi,
        capabilities: &Capabilities,
        send_email: bool,
    ) -> TalentResult<ConfirmationOutcome> {
        self.guard(capabilities.require(Permission::ScheduleInterview))?;

        let schedules = to_scheduled_interviews(&self.schedule, &self.handoff.job_posting_id);
        if schedules.is_empty() {
            return self.guard(Err(TalentError::Validation(
                "there are no interviews to confirm".to_string(),
            )));
        }
        let interviews = schedules.len();

        self.loading = true;
        let confirmed = api
            .confirm_schedule(ScheduleConfirmationRequest { schedules })
            .await;
        self.loading = false;

        let confirmed = match confirmed {
            Ok(response) => response,
            Err(e) => {
                error!(error = %e, "failed to confirm schedule");
                self.error = Some(e.to_string());
                return Err(e);
            }
        };
        info!(interviews, "schedule confirmed");
        self.error = None;

        if !send_email || confirmed.schedules.is_empty() {
            return Ok(ConfirmationOutcome::Scheduled { interviews });
        }

        let notices = format_interview_notices(&confirmed.schedules);
        if notices.is_empty() {
            warn!("no confirmed interview carried usable e-mail data");
            return Ok(ConfirmationOutcome::ScheduledWithEmailWarning {
                interviews,
                warning: "No valid email data generated".to_string(),
            });
        }

        let notified = notices.len();
        let outcome = match EmailDispatcher::new(api).send_interview_scheduled(&notices).await {
            Ok(result) if result.success => {
                ConfirmationOutcome::ScheduledAndNotified { interviews, notified }
            }
            Ok(result) => ConfirmationOutcome::ScheduledWithEmailWarning {
                interviews,
                warning: result
                    .message
                    .unwrap_or_else(|| "some emails failed to send".to_string()),
            },
            Err(e) => {
                error!(error = %e, "interviews scheduled but notification failed");
                ConfirmationOutcome::ScheduledWithEmailWarning {
                    interviews,
                    warning: e.to_string(),
                }
            }
        };
        Ok(outcome)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn guard<T>(&mut self, result: TalentResult<T>) -> TalentResult<T> {
        if let Err(e) = &result {
            self.error = Some(e.to_string());
        }
        result
    }
}
