use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rstest::rstest;
use talentsync_core::{
    models::{
        schedule::{ConfirmedSlot, ScheduleParameters},
        ApplicationId, InterviewerId,
    },
    scheduling::{
        format::{format_clock, format_long_date, parse_timestamp},
        format_interview_notices, generate_schedule, to_scheduled_interviews,
    },
};

#[test]
fn test_scheduled_interviews_cover_every_day() {
    let params = ScheduleParameters::new(
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
        NaiveDate::from_ymd_opt(2026, 10, 21).unwrap(),
    );
    let candidates: Vec<_> = (1..=10)
        .map(|n| ApplicationId::new(format!("c{n}")))
        .collect();
    let outcome = generate_schedule(&[InterviewerId::new("A")], &candidates, &params).unwrap();
    assert_eq!(outcome.days.len(), 2);

    let request = to_scheduled_interviews(&outcome.days, "42");

    assert_eq!(request.len(), 10);
    assert!(request.iter().all(|entry| entry.job_posting_id == "42"));
    assert_eq!(request[7].application_id, ApplicationId::new("c8"));
    assert_eq!(
        request[7].start_date_time,
        NaiveDate::from_ymd_opt(2026, 10, 20)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    );
    assert_eq!(request[0].meeting_id, None);

    let body = serde_json::to_value(&request[0]).unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "applicationId": "c1",
            "jobPostingId": "42",
            "interviewerId": "A",
            "startDateTime": "2026-10-19T10:00:00",
            "endDateTime": "2026-10-19T10:45:00"
        })
    );
}

#[test]
fn test_notice_formatting() {
    let confirmed = ConfirmedSlot {
        candidate_name: Some("Jane Smith".to_string()),
        candidate_email: Some("jane@example.com".to_string()),
        job_title: Some("Product Manager".to_string()),
        start_date_time: Some("2026-10-19T09:30:00Z".to_string()),
        end_date_time: Some("2026-10-19T10:15:00Z".to_string()),
        join_url: Some("https://meet.example.com/xyz".to_string()),
        meeting_id: Some("xyz".to_string()),
        ..ConfirmedSlot::default()
    };

    let notices = format_interview_notices(&[confirmed]);

    assert_eq!(notices.len(), 1);
    let notice = &notices[0];
    assert_eq!(notice.candidate_name, "Jane Smith");
    assert_eq!(notice.email, "jane@example.com");
    assert_eq!(notice.job_title, "Product Manager");
    assert_eq!(notice.interview_date, "October 19, 2026");
    assert_eq!(notice.interview_time, "09:30 AM to 10:15 AM");
    assert_eq!(notice.meeting_link.as_deref(), Some("https://meet.example.com/xyz"));
    assert_eq!(notice.meeting_id.as_deref(), Some("xyz"));
}

#[test]
fn test_notice_defaults_and_fallbacks() {
    let confirmed = ConfirmedSlot {
        email: Some("sam@example.com".to_string()),
        interview_date: Some("2026-11-02".to_string()),
        start_date_time: Some("2026-11-02T14:00:00".to_string()),
        end_date_time: Some("2026-11-02T14:45:00".to_string()),
        meeting_link: Some("https://meet.example.com/fallback".to_string()),
        ..ConfirmedSlot::default()
    };

    let notices = format_interview_notices(&[confirmed]);

    assert_eq!(notices[0].candidate_name, "Candidate");
    assert_eq!(notices[0].job_title, "Interview");
    assert_eq!(notices[0].interview_date, "November 2, 2026");
    assert_eq!(notices[0].interview_time, "02:00 PM to 02:45 PM");
    assert_eq!(
        notices[0].meeting_link.as_deref(),
        Some("https://meet.example.com/fallback")
    );
}

#[test]
fn test_unusable_slots_are_skipped() {
    let usable = ConfirmedSlot {
        email: Some("ok@example.com".to_string()),
        start_date_time: Some("2026-10-19T10:00:00".to_string()),
        end_date_time: Some("2026-10-19T10:45:00".to_string()),
        ..ConfirmedSlot::default()
    };
    let no_email = ConfirmedSlot {
        start_date_time: Some("2026-10-19T10:00:00".to_string()),
        end_date_time: Some("2026-10-19T10:45:00".to_string()),
        ..ConfirmedSlot::default()
    };
    let bad_time = ConfirmedSlot {
        email: Some("late@example.com".to_string()),
        start_date_time: Some("tomorrow".to_string()),
        end_date_time: Some("2026-10-19T10:45:00".to_string()),
        ..ConfirmedSlot::default()
    };

    let notices = format_interview_notices(&[no_email, usable, bad_time]);

    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].email, "ok@example.com");
    assert!(format_interview_notices(&[]).is_empty());
}

#[rstest]
#[case("2026-10-19T10:00:00.000Z", "2026-10-19 10:00")]
#[case("2026-10-19T10:00:00+05:30", "2026-10-19 10:00")]
#[case("2026-10-19T10:00", "2026-10-19 10:00")]
#[case("2026-10-19 10:00:00", "2026-10-19 10:00")]
#[case("2026-10-19", "2026-10-19 00:00")]
fn test_parse_timestamp(#[case] raw: &str, #[case] expected: &str) {
    let parsed = parse_timestamp(raw).expect("timestamp should parse");

    assert_eq!(parsed.format("%Y-%m-%d %H:%M").to_string(), expected);
}

#[test]
fn test_clock_and_date_formats() {
    let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();

    assert_eq!(format_long_date(date), "January 5, 2026");
    assert_eq!(
        format_clock(chrono::NaiveTime::from_hms_opt(0, 5, 0).unwrap()),
        "12:05 AM"
    );
    assert_eq!(
        format_clock(chrono::NaiveTime::from_hms_opt(12, 0, 0).unwrap()),
        "12:00 PM"
    );
}
