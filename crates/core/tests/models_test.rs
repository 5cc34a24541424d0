use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{from_str, json, to_value};
use serde_test::{assert_tokens, Token};
use talentsync_core::models::{
    application::{Application, ApplicationStatus, ApplicationsResponse},
    email::{DispatchResult, Envelope, FinalStatus, Recipient, TemplateName},
    interviewer::InterviewersResponse,
    schedule::{
        InterviewSlot, ScheduleConfirmationResponse, ScheduleHandoff, ScheduleParameters,
    },
    ApplicationId, InterviewerId,
};

#[rstest]
#[case(ApplicationStatus::Pending, "PENDING")]
#[case(ApplicationStatus::Accepted, "ACCEPTED")]
#[case(ApplicationStatus::Rejected, "REJECTED")]
#[case(ApplicationStatus::Scheduled, "SCHEDULED")]
fn test_application_status_tokens(#[case] status: ApplicationStatus, #[case] variant: &'static str) {
    assert_tokens(
        &status,
        &[Token::UnitVariant {
            name: "ApplicationStatus",
            variant,
        }],
    );
}

#[test]
fn test_application_deserialization_accepts_numeric_ids() {
    let body = json!({
        "applications": [{
            "applicationId": 17,
            "candidateName": "Jane Doe",
            "email": "jane@example.com",
            "applicationDate": "2026-10-01T09:30:00Z",
            "applicationStatus": "PENDING",
            "resumeScore": 82.5,
            "resume": "resumes/17.pdf"
        }]
    });

    let response: ApplicationsResponse =
        serde_json::from_value(body).expect("Failed to deserialize applications");
    let application: &Application = &response.applications[0];

    assert_eq!(application.application_id, ApplicationId::new("17"));
    assert_eq!(application.candidate_name, "Jane Doe");
    assert_eq!(
        application.application_date,
        Utc.with_ymd_and_hms(2026, 10, 1, 9, 30, 0).unwrap()
    );
    assert_eq!(application.application_status, ApplicationStatus::Pending);
    assert_eq!(application.resume.as_deref(), Some("resumes/17.pdf"));
}

#[test]
fn test_interviewers_response_deserialization() {
    let response: InterviewersResponse = from_str(
        r#"{"interviewers":[{"id":"u-1","name":"Alex"},{"id":2,"name":"Sam","email":"sam@example.com"}]}"#,
    )
    .expect("Failed to deserialize interviewers");

    assert_eq!(response.interviewers.len(), 2);
    assert_eq!(response.interviewers[0].id, InterviewerId::new("u-1"));
    assert_eq!(response.interviewers[1].id, InterviewerId::new("2"));
    assert_eq!(response.interviewers[1].email.as_deref(), Some("sam@example.com"));
}

#[test]
fn test_schedule_parameters_use_clock_strings() {
    let body = json!({
        "startDate": "2026-10-19",
        "endDate": "2026-10-23",
        "dailyStartTime": "09:00",
        "dailyEndTime": "17:30",
        "interviewDuration": 30,
        "skipWeekends": true,
        "includeLunchBreak": false,
        "lunchStartTime": "12:00",
        "lunchEndTime": "13:00"
    });

    let params: ScheduleParameters =
        serde_json::from_value(body.clone()).expect("Failed to deserialize parameters");

    assert_eq!(params.daily_start_time, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
    assert_eq!(params.daily_end_time, NaiveTime::from_hms_opt(17, 30, 0).unwrap());
    assert_eq!(params.interview_duration, 30);
    assert_eq!(to_value(&params).unwrap(), body);
}

#[test]
fn test_schedule_parameters_reject_bad_clock_string() {
    let body = json!({
        "startDate": "2026-10-19",
        "endDate": "2026-10-19",
        "dailyStartTime": "nine",
        "dailyEndTime": "17:00",
        "interviewDuration": 45,
        "skipWeekends": true,
        "includeLunchBreak": true,
        "lunchStartTime": "13:00",
        "lunchEndTime": "14:00"
    });

    assert!(serde_json::from_value::<ScheduleParameters>(body).is_err());
}

#[test]
fn test_default_parameters() {
    let day = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
    let params = ScheduleParameters::new(day, day);

    assert_eq!(params.daily_start_time, NaiveTime::from_hms_opt(10, 0, 0).unwrap());
    assert_eq!(params.daily_end_time, NaiveTime::from_hms_opt(17, 0, 0).unwrap());
    assert_eq!(params.interview_duration, 45);
    assert!(params.skip_weekends);
    assert_eq!(
        params.lunch_window(),
        Some((
            NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(14, 0, 0).unwrap()
        ))
    );
    assert!(params.validate().is_ok());
}

#[rstest]
#[case::start_after_end(|p: &mut ScheduleParameters| p.start_date = p.end_date.succ_opt().unwrap())]
#[case::empty_day(|p: &mut ScheduleParameters| p.daily_end_time = p.daily_start_time)]
#[case::zero_duration(|p: &mut ScheduleParameters| p.interview_duration = 0)]
#[case::lunch_outside_hours(|p: &mut ScheduleParameters| p.lunch_end_time = NaiveTime::from_hms_opt(18, 0, 0).unwrap())]
#[case::inverted_lunch(|p: &mut ScheduleParameters| p.lunch_start_time = NaiveTime::from_hms_opt(14, 30, 0).unwrap())]
fn test_invalid_parameters(#[case] break_params: fn(&mut ScheduleParameters)) {
    let day = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
    let mut params = ScheduleParameters::new(day, day);
    break_params(&mut params);

    assert!(params.validate().is_err());
}

#[test]
fn test_lunch_ignored_when_not_included() {
    let day = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
    let mut params = ScheduleParameters::new(day, day);
    params.include_lunch_break = false;
    params.lunch_end_time = NaiveTime::from_hms_opt(23, 0, 0).unwrap();

    assert!(params.validate().is_ok());
    assert_eq!(params.lunch_window(), None);
}

#[test]
fn test_interview_slot_derives_end_time() {
    let start = NaiveDate::from_ymd_opt(2026, 10, 19)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap();
    let slot = InterviewSlot::new(
        ApplicationId::new("c1"),
        InterviewerId::new("A"),
        start,
        chrono::Duration::minutes(45),
    );

    assert_eq!(slot.end_time(), start + chrono::Duration::minutes(45));
    assert_eq!(
        to_value(&slot).unwrap(),
        json!({
            "candidate": "c1",
            "interviewer": "A",
            "startTime": "2026-10-19T10:00:00",
            "endTime": "2026-10-19T10:45:00"
        })
    );

    let confirmed = slot.with_meeting("https://meet.example.com/abc", "abc");
    assert_eq!(confirmed.meeting_link(), Some("https://meet.example.com/abc"));
    assert_eq!(confirmed.meeting_id(), Some("abc"));
}

#[test]
fn test_handoff_wire_format() {
    let handoff = ScheduleHandoff {
        selected_applications: vec![ApplicationId::new("3"), ApplicationId::new("9")],
        job_posting_id: "42".to_string(),
    };

    assert_eq!(
        to_value(&handoff).unwrap(),
        json!({"selectedApplications": ["3", "9"], "jobPostingId": "42"})
    );
}

#[test]
fn test_confirmation_response_defaults() {
    let response: ScheduleConfirmationResponse =
        from_str(r#"{"success": false, "message": "Interviewer unavailable"}"#).unwrap();

    assert!(!response.success);
    assert_eq!(response.message.as_deref(), Some("Interviewer unavailable"));
    assert!(response.schedules.is_empty());
}

#[test]
fn test_envelope_wire_format() {
    let envelope = Envelope::new(
        TemplateName::FinalStatus,
        Recipient {
            name: "Mike Johnson".to_string(),
            email: "mike@example.com".to_string(),
        },
    )
    .with_variable("position", "Data Analyst")
    .with_variable("status", FinalStatus::OnHold.as_str())
    .with_optional_variable("meetingId", None);

    assert_eq!(
        to_value(&envelope).unwrap(),
        json!({
            "templateName": "FINAL_STATUS",
            "recipients": [{"name": "Mike Johnson", "email": "mike@example.com"}],
            "variables": {"position": "Data Analyst", "status": "onhold"}
        })
    );
}

#[rstest]
#[case("INTERVIEW_SCHEDULED", TemplateName::InterviewScheduled)]
#[case("thank_you", TemplateName::ThankYou)]
#[case(" FINAL_STATUS ", TemplateName::FinalStatus)]
fn test_template_name_parsing(#[case] raw: &str, #[case] expected: TemplateName) {
    assert_eq!(raw.parse::<TemplateName>().unwrap(), expected);
}

#[test]
fn test_unknown_template_name() {
    assert!("WELCOME".parse::<TemplateName>().is_err());
}

#[test]
fn test_dispatch_result_defaults_to_success() {
    let result: DispatchResult = from_str("{}").unwrap();

    assert!(result.success);
    assert_eq!(result.sent, None);
}
