use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::{ApplicationId, InterviewerId};
use crate::errors::{TalentError, TalentResult};

/// Serializes wall-clock times as `"HH:MM"`, the format used by the scheduling form.
pub mod clock_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| D::Error::custom(format!("invalid time of day '{raw}'")))
    }

    /// Accepts `HH:MM` and `HH:MM:SS`
    pub fn parse(raw: &str) -> Option<NaiveTime> {
        let raw = raw.trim();
        NaiveTime::parse_from_str(raw, FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
            .ok()
    }
}

fn clock(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}

/// Inputs to schedule generation, as entered in the scheduling form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleParameters {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(with = "clock_time")]
    pub daily_start_time: NaiveTime,
    #[serde(with = "clock_time")]
    pub daily_end_time: NaiveTime,
    /// Slot length in minutes
    pub interview_duration: u32,
    pub skip_weekends: bool,
    pub include_lunch_break: bool,
    #[serde(with = "clock_time")]
    pub lunch_start_time: NaiveTime,
    #[serde(with = "clock_time")]
    pub lunch_end_time: NaiveTime,
}

impl ScheduleParameters {
    /// Parameters for the given date range with the form's defaults: 10:00–17:00,
    /// 45 minute interviews, weekends skipped and a 13:00–14:00 lunch break.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
            daily_start_time: clock(10, 0),
            daily_end_time: clock(17, 0),
            interview_duration: 45,
            skip_weekends: true,
            include_lunch_break: true,
            lunch_start_time: clock(13, 0),
            lunch_end_time: clock(14, 0),
        }
    }

    pub fn validate(&self) -> TalentResult<()> {
        if self.start_date > self.end_date {
            return Err(TalentError::Validation(
                "start date must not be after end date".to_string(),
            ));
        }
        if self.daily_start_time >= self.daily_end_time {
            return Err(TalentError::Validation(
                "daily start time must be before daily end time".to_string(),
            ));
        }
        if self.interview_duration == 0 {
            return Err(TalentError::Validation(
                "interview duration must be greater than zero".to_string(),
            ));
        }
        if self.include_lunch_break {
            if self.lunch_start_time >= self.lunch_end_time {
                return Err(TalentError::Validation(
                    "lunch start time must be before lunch end time".to_string(),
                ));
            }
            if self.lunch_start_time < self.daily_start_time
                || self.lunch_end_time > self.daily_end_time
            {
                return Err(TalentError::Validation(
                    "lunch break must lie within working hours".to_string(),
                ));
            }
        }
        Ok(())
    }

    pub fn duration(&self) -> Duration {
        Duration::minutes(i64::from(self.interview_duration))
    }

    /// The lunch window, when one is configured
    pub fn lunch_window(&self) -> Option<(NaiveTime, NaiveTime)> {
        self.include_lunch_break
            .then_some((self.lunch_start_time, self.lunch_end_time))
    }
}

/// One interview: a candidate, an interviewer and a fixed-length time window.
///
/// The end time is always derived from the start time and the configured
/// duration, so there is no way to set it directly and the type is not
/// deserializable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewSlot {
    candidate: ApplicationId,
    interviewer: InterviewerId,
    start_time: NaiveDateTime,
    end_time: NaiveDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    meeting_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    meeting_id: Option<String>,
}

impl InterviewSlot {
    pub fn new(
        candidate: ApplicationId,
        interviewer: InterviewerId,
        start_time: NaiveDateTime,
        duration: Duration,
    ) -> Self {
        Self {
            candidate,
            interviewer,
            start_time,
            end_time: start_time + duration,
            meeting_link: None,
            meeting_id: None,
        }
    }

    /// Attaches the meeting details issued when the schedule is confirmed
    pub fn with_meeting(mut self, link: impl Into<String>, id: impl Into<String>) -> Self {
        self.meeting_link = Some(link.into());
        self.meeting_id = Some(id.into());
        self
    }

    pub fn candidate(&self) -> &ApplicationId {
        &self.candidate
    }

    pub fn interviewer(&self) -> &InterviewerId {
        &self.interviewer
    }

    pub fn start_time(&self) -> NaiveDateTime {
        self.start_time
    }

    pub fn end_time(&self) -> NaiveDateTime {
        self.end_time
    }

    pub fn meeting_link(&self) -> Option<&str> {
        self.meeting_link.as_deref()
    }

    pub fn meeting_id(&self) -> Option<&str> {
        self.meeting_id.as_deref()
    }

    pub fn duration(&self) -> Duration {
        self.end_time - self.start_time
    }

    /// Half-open interval intersection with `[start, end)`
    pub fn intersects(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        self.start_time < end && start < self.end_time
    }

    pub fn overlaps(&self, other: &InterviewSlot) -> bool {
        self.intersects(other.start_time, other.end_time)
    }

    pub(crate) fn reassign(&mut self, update: SlotUpdate, duration: Duration) -> TalentResult<()> {
        let end_time = update.start_time.checked_add_signed(duration).ok_or_else(|| {
            TalentError::Validation(format!(
                "interview starting at {} ends outside the supported date range",
                update.start_time
            ))
        })?;

        self.candidate = update.candidate;
        self.interviewer = update.interviewer;
        self.start_time = update.start_time;
        self.end_time = end_time;
        Ok(())
    }
}

/// The editable fields of a slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotUpdate {
    pub candidate: ApplicationId,
    pub interviewer: InterviewerId,
    pub start_time: NaiveDateTime,
}

/// The interviews held on a single calendar date
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDay {
    pub date: NaiveDate,
    interviews: Vec<InterviewSlot>,
}

impl ScheduleDay {
    pub fn new(date: NaiveDate, interviews: Vec<InterviewSlot>) -> Self {
        Self { date, interviews }
    }

    pub fn interviews(&self) -> &[InterviewSlot] {
        &self.interviews
    }

    pub(crate) fn interviews_mut(&mut self) -> &mut [InterviewSlot] {
        &mut self.interviews
    }

    pub fn len(&self) -> usize {
        self.interviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interviews.is_empty()
    }

    /// Index pairs of slots whose time windows overlap
    pub fn overlaps(&self) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for (i, slot) in self.interviews.iter().enumerate() {
            for (j, other) in self.interviews.iter().enumerate().skip(i + 1) {
                if slot.overlaps(other) {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }
}

/// Result of a generation run: the schedule plus any candidates that did not fit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleOutcome {
    pub days: Vec<ScheduleDay>,
    pub unplaced: Vec<ApplicationId>,
}

impl ScheduleOutcome {
    pub fn slot_count(&self) -> usize {
        self.days.iter().map(ScheduleDay::len).sum()
    }

    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }

    /// The non-fatal capacity shortfall, if any candidate was left unplaced
    pub fn capacity_error(&self) -> Option<TalentError> {
        (!self.unplaced.is_empty()).then(|| TalentError::Capacity(self.unplaced.len()))
    }
}

/// State handed from the applications page to the scheduler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleHandoff {
    pub selected_applications: Vec<ApplicationId>,
    pub job_posting_id: String,
}

/// One entry of the `POST /interviews/schedule` request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledInterview {
    pub application_id: ApplicationId,
    pub job_posting_id: String,
    pub interviewer_id: InterviewerId,
    pub start_date_time: NaiveDateTime,
    pub end_date_time: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConfirmationRequest {
    pub schedules: Vec<ScheduledInterview>,
}

/// A slot as echoed back by the system of record after confirmation.
///
/// The backend is loose about which of the name/e-mail/link fields it fills, so
/// every field is optional and timestamps are kept as received.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfirmedSlot {
    pub candidate_name: Option<String>,
    pub candidate_email: Option<String>,
    pub email: Option<String>,
    pub job_title: Option<String>,
    pub interview_date: Option<String>,
    pub start_date_time: Option<String>,
    pub end_date_time: Option<String>,
    pub join_url: Option<String>,
    pub meeting_link: Option<String>,
    pub meeting_id: Option<String>,
}

/// Response body of `POST /interviews/schedule`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConfirmationResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub schedules: Vec<ConfirmedSlot>,
}
