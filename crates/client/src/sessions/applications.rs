use talentsync_core::{
    applications::{filter_applications, ApplicationFilter, FilterForm, SelectionSet},
    errors::{TalentError, TalentResult},
    models::{application::Application, schedule::ScheduleHandoff, ApplicationId},
    permissions::{Capabilities, Permission},
};
use tracing::{debug, error, info};

use crate::{
    api::PortalApi,
    cancellation::{CancellationToken, LoadOutcome},
};

/// State of the applications page for one job posting
#[derive(Debug, Clone)]
pub struct ApplicationsSession {
    job_id: String,
    applications: Vec<Application>,
    form: FilterForm,
    filter: ApplicationFilter,
    selection: SelectionSet,
    loading: bool,
    error: Option<String>,
}

impl ApplicationsSession {
    pub fn new(job_id: impl Into<String>) -> Self {
        let form = FilterForm::default();
        Self {
            job_id: job_id.into(),
            applications: Vec::new(),
            filter: form.parse(),
            form,
            selection: SelectionSet::new(),
            loading: false,
            error: None,
        }
    }

    pub fn job_id(&self) -> &str {
        &self.job_id
    }

    /// Fetches the applications for the job posting and replaces the list.
    ///
    /// A response that arrives after `token` was cancelled is dropped and the
    /// session is left as it was. Failures are recorded and leave the previous
    /// list in place.
    pub async fn load(
        &mut self,
        api: &dyn PortalApi,
        capabilities: &Capabilities,
        token: &CancellationToken,
    ) -> TalentResult<LoadOutcome> {
        self.guard(capabilities.require(Permission::ViewApplications))?;

        self.loading = true;
        let result = api.fetch_applications(&self.job_id).await;

        if token.is_cancelled() {
            debug!(job_id = %self.job_id, "applications response superseded, discarding");
            return Ok(LoadOutcome::Discarded);
        }
        self.loading = false;

        match result {
            Ok(applications) => {
                info!(job_id = %self.job_id, count = applications.len(), "applications loaded");
                self.selection =
                    SelectionSet::unselected(applications.iter().map(|a| &a.application_id));
                self.applications = applications;
                self.error = None;
                Ok(LoadOutcome::Applied)
            }
            Err(e) => {
                error!(job_id = %self.job_id, error = %e, "failed to load applications");
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    pub fn applications(&self) -> &[Application] {
        &self.applications
    }

    pub fn form(&self) -> &FilterForm {
        &self.form
    }

    pub fn filter(&self) -> &ApplicationFilter {
        &self.filter
    }

    /// Replaces the form and re-parses the active filter
    pub fn apply_filters(&mut self, form: FilterForm) {
        self.filter = form.parse();
        self.form = form;
    }

    pub fn reset_filters(&mut self) {
        self.apply_filters(FilterForm::cleared());
    }

    /// The applications that pass the active filter, in list order
    pub fn filtered(&self) -> Vec<&Application> {
        filter_applications(&self.applications, &self.filter)
    }

    pub fn toggle(&mut self, id: &ApplicationId) -> bool {
        self.selection.toggle(id)
    }

    pub fn is_selected(&self, id: &ApplicationId) -> bool {
        self.selection.is_selected(id)
    }

    /// Sets every application in the filtered view; others keep their state.
    pub fn toggle_select_all(&mut self, selected: bool) {
        let view: Vec<ApplicationId> = self
            .filtered()
            .into_iter()
            .map(|application| application.application_id.clone())
            .collect();
        self.selection.select_all(&view, selected);
    }

    /// Whether every application in the filtered view is selected
    pub fn all_filtered_selected(&self) -> bool {
        let view = self.filtered();
        !view.is_empty()
            && view
                .iter()
                .all(|application| self.selection.is_selected(&application.application_id))
    }

    pub fn selected_count(&self) -> usize {
        self.selection.selected_count()
    }

    /// Selected ids in the order of the application list
    pub fn selected_ids(&self) -> Vec<ApplicationId> {
        self.selection
            .selected_in(self.applications.iter().map(|a| &a.application_id))
    }

    /// The state passed on to the scheduler page
    pub fn handoff(&mut self, capabilities: &Capabilities) -> TalentResult<ScheduleHandoff> {
        self.guard(capabilities.require(Permission::ScheduleInterview))?;

        let selected_applications = self.selected_ids();
        if selected_applications.is_empty() {
            return self.guard(Err(TalentError::Validation(
                "select at least one application to schedule".to_string(),
            )));
        }

        Ok(ScheduleHandoff {
            selected_applications,
            job_posting_id: self.job_id.clone(),
        })
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
