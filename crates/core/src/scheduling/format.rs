//! Conversions from the in-memory schedule to the shapes the backend expects:
//! the confirmation request body, and candidate notices built from the
//! confirmed slots the backend sends back.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::warn;

use crate::models::email::InterviewNotice;
use crate::models::schedule::{ConfirmedSlot, ScheduleDay, ScheduledInterview};

const DEFAULT_CANDIDATE_NAME: &str = "Candidate";
const DEFAULT_JOB_TITLE: &str = "Interview";

/// Flattens every day of the schedule into the `POST /interviews/schedule` body.
pub fn to_scheduled_interviews(
    schedule: &[ScheduleDay],
    job_posting_id: &str,
) -> Vec<ScheduledInterview> {
    schedule
        .iter()
        .flat_map(ScheduleDay::interviews)
        .map(|slot| ScheduledInterview {
            application_id: slot.candidate().clone(),
            job_posting_id: job_posting_id.to_string(),
            interviewer_id: slot.interviewer().clone(),
            start_date_time: slot.start_time(),
            end_date_time: slot.end_time(),
            meeting_id: slot.meeting_id().map(str::to_string),
            join_url: slot.meeting_link().map(str::to_string),
        })
        .collect()
}

/// Builds one notice per confirmed slot.
///
/// Slots without a recipient address or with unreadable timestamps are skipped
/// with a warning; the rest are still returned.
pub fn format_interview_notices(schedules: &[ConfirmedSlot]) -> Vec<InterviewNotice> {
    schedules.iter().filter_map(format_notice).collect()
}

fn format_notice(slot: &ConfirmedSlot) -> Option<InterviewNotice> {
    let Some(email) = slot.candidate_email.as_ref().or(slot.email.as_ref()) else {
        warn!(candidate = ?slot.candidate_name, "confirmed slot has no candidate e-mail, skipping");
        return None;
    };

    let start = slot.start_date_time.as_deref().and_then(parse_timestamp);
    let end = slot.end_date_time.as_deref().and_then(parse_timestamp);
    let (Some(start), Some(end)) = (start, end) else {
        warn!(
            start = ?slot.start_date_time,
            end = ?slot.end_date_time,
            "confirmed slot has unreadable interview times, skipping"
        );
        return None;
    };

    let date = slot
        .interview_date
        .as_deref()
        .and_then(parse_timestamp)
        .map(|timestamp| timestamp.date())
        .unwrap_or_else(|| start.date());

    Some(InterviewNotice {
        candidate_name: slot
            .candidate_name
            .clone()
            .unwrap_or_else(|| DEFAULT_CANDIDATE_NAME.to_string()),
        email: email.clone(),
        job_title: slot
            .job_title
            .clone()
            .unwrap_or_else(|| DEFAULT_JOB_TITLE.to_string()),
        interview_date: format_long_date(date),
        interview_time: format!(
            "{} to {}",
            format_clock(start.time()),
            format_clock(end.time())
        ),
        meeting_link: slot.join_url.clone().or_else(|| slot.meeting_link.clone()),
        meeting_id: slot.meeting_id.clone(),
    })
}

/// Reads RFC 3339 timestamps as their wall-clock time, plus offset-less
/// `YYYY-MM-DDTHH:MM[:SS]` and bare dates.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.naive_local());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"]
        .into_iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// "October 16, 2026"
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// "09:30 AM"
pub fn format_clock(time: NaiveTime) -> String {
    time.format("%I:%M %p").to_string()
}
