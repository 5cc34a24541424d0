use chrono::{TimeZone, Utc};
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use pretty_assertions::assert_eq;
use talentsync_client::{
    mock::MockPortalApi, sessions::ApplicationsSession, CancellationToken, LoadOutcome,
};
use talentsync_core::{
    applications::FilterForm,
    errors::TalentError,
    models::{
        application::{Application, ApplicationStatus},
        ApplicationId,
    },
    permissions::{Capabilities, Permission},
};

fn application(id: &str, day: u32, score: f64) -> Application {
    Application {
        application_id: ApplicationId::new(id),
        candidate_name: Name().fake(),
        email: SafeEmail().fake(),
        application_date: Utc.with_ymd_and_hms(2026, 10, day, 9, 0, 0).unwrap(),
        application_status: ApplicationStatus::Pending,
        resume_score: score,
        resume: None,
    }
}

fn applications() -> Vec<Application> {
    vec![
        application("1", 1, 65.0),
        application("2", 2, 70.0),
        application("3", 3, 85.0),
        application("4", 4, 100.0),
        application("5", 5, 40.0),
    ]
}

fn api_returning(list: Vec<Application>) -> MockPortalApi {
    let mut api = MockPortalApi::new();
    api.expect_fetch_applications()
        .times(1)
        .returning(move |job_id| {
            assert_eq!(job_id, "job-42");
            Ok(list.clone())
        });
    api
}

async fn loaded_session() -> ApplicationsSession {
    let api = api_returning(applications());
    let mut session = ApplicationsSession::new("job-42");
    let outcome = session
        .load(&api, &Capabilities::all(), &CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(outcome, LoadOutcome::Applied);
    session
}

fn ids(session: &ApplicationsSession) -> Vec<String> {
    session
        .filtered()
        .into_iter()
        .map(|application| application.application_id.to_string())
        .collect()
}

#[test_log::test(tokio::test)]
async fn test_load_applies_response() {
    let session = loaded_session().await;

    assert_eq!(session.applications().len(), 5);
    assert_eq!(session.selected_count(), 0);
    assert!(!session.is_loading());
    assert_eq!(session.error(), None);
    // the page opens with the 0..100 score range
    assert_eq!(session.form(), &FilterForm::default());
    assert_eq!(ids(&session), vec!["1", "2", "3", "4", "5"]);
}

#[tokio::test]
async fn test_load_requires_view_permission() {
    let api = MockPortalApi::new();
    let mut session = ApplicationsSession::new("job-42");

    let error = session
        .load(&api, &Capabilities::none(), &CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(error, TalentError::Authorization(_)));
    assert!(session.error().unwrap().contains("view_applications"));
    assert!(session.applications().is_empty());
}

#[tokio::test]
async fn test_superseded_load_is_discarded() {
    let mut session = loaded_session().await;
    let api = api_returning(vec![application("9", 9, 99.0)]);
    let token = CancellationToken::new();
    token.cancel();

    let outcome = session
        .load(&api, &Capabilities::all(), &token)
        .await
        .unwrap();

    assert_eq!(outcome, LoadOutcome::Discarded);
    assert_eq!(session.applications().len(), 5);
}

#[tokio::test]
async fn test_failed_reload_keeps_previous_list() {
    let mut session = loaded_session().await;
    session.toggle(&ApplicationId::new("2"));

    let mut api = MockPortalApi::new();
    api.expect_fetch_applications()
        .times(1)
        .returning(|_| Err(TalentError::Network("connection reset".to_string())));

    let error = session
        .load(&api, &Capabilities::all(), &CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(error, TalentError::Network(_)));
    assert_eq!(session.error(), Some("Network error: connection reset"));
    assert_eq!(session.applications().len(), 5);
    assert!(session.is_selected(&ApplicationId::new("2")));
    assert!(!session.is_loading());
}

#[tokio::test]
async fn test_select_all_follows_filtered_view() {
    let mut session = loaded_session().await;
    session.toggle(&ApplicationId::new("1"));

    session.apply_filters(FilterForm {
        min_score: "70".to_string(),
        max_score: "100".to_string(),
        ..FilterForm::cleared()
    });
    assert_eq!(ids(&session), vec!["2", "3", "4"]);
    assert!(!session.all_filtered_selected());

    session.toggle_select_all(true);
    assert!(session.all_filtered_selected());
    assert_eq!(session.selected_count(), 4);
    assert!(!session.is_selected(&ApplicationId::new("5")));

    session.toggle_select_all(false);
    assert_eq!(session.selected_ids(), vec![ApplicationId::new("1")]);
}

#[tokio::test]
async fn test_reset_clears_every_field() {
    let mut session = loaded_session().await;
    session.apply_filters(FilterForm {
        limit: "2".to_string(),
        ..FilterForm::default()
    });
    assert_eq!(ids(&session), vec!["1", "2"]);

    session.reset_filters();

    assert_eq!(session.form(), &FilterForm::cleared());
    assert_eq!(session.filtered().len(), 5);
}

#[tokio::test]
async fn test_handoff_carries_selection_in_list_order() {
    let mut session = loaded_session().await;
    session.toggle(&ApplicationId::new("4"));
    session.toggle(&ApplicationId::new("2"));

    let handoff = session.handoff(&Capabilities::all()).unwrap();

    assert_eq!(
        handoff.selected_applications,
        vec![ApplicationId::new("2"), ApplicationId::new("4")]
    );
    assert_eq!(handoff.job_posting_id, "job-42");
}

#[tokio::test]
async fn test_handoff_checks_permission_and_selection() {
    let mut session = loaded_session().await;

    let viewer = Capabilities::none().grant(Permission::ViewApplications);
    session.toggle(&ApplicationId::new("3"));
    assert!(matches!(
        session.handoff(&viewer),
        Err(TalentError::Authorization(_))
    ));

    session.toggle(&ApplicationId::new("3"));
    assert!(matches!(
        session.handoff(&Capabilities::all()),
        Err(TalentError::Validation(_))
    ));
    assert!(session.error().is_some());
}
