//! # Schedule Generation
//!
//! Turns a set of interviewers, an ordered list of candidates and the scheduling
//! form's parameters into a day-partitioned interview schedule.
//!
//! ## Algorithm
//!
//! 1. Validate the inputs: at least one interviewer, parameters consistent
//! 2. Cut the working day `[dailyStart, dailyEnd)` into back-to-back windows of the
//!    interview duration, dropping any window that touches the lunch break
//! 3. Walk the calendar from start to end date, skipping weekends when asked
//! 4. Fill each day's windows with candidates in input order; each slot goes to the
//!    interviewer with the fewest interviews so far, earliest in input order on a tie
//! 5. Stop when every candidate is placed or the date range runs out; whoever is
//!    left over is reported as unplaced
//!
//! Interviewer load is counted across the whole date range, which makes the
//! assignment a plain round-robin for uniform rosters.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike, Weekday};
use tracing::{debug, warn};

use crate::errors::{TalentError, TalentResult};
use crate::models::schedule::{InterviewSlot, ScheduleDay, ScheduleOutcome, ScheduleParameters};
use crate::models::{ApplicationId, InterviewerId};

/// Generates an interview schedule.
///
/// # Errors
///
/// * `TalentError::Validation` - no interviewer selected or inconsistent parameters
///
/// Running out of slots is not an error here: the partial schedule is returned
/// and the leftover candidates are listed in [`ScheduleOutcome::unplaced`].
pub fn generate_schedule(
    interviewers: &[InterviewerId],
    candidates: &[ApplicationId],
    params: &ScheduleParameters,
) -> TalentResult<ScheduleOutcome> {
    let roster = dedup_in_order(interviewers);
    if roster.is_empty() {
        return Err(TalentError::Validation("no interviewer selected".to_string()));
    }
    params.validate()?;

    let windows = daily_windows(params);
    let duration = params.duration();
    debug!(
        windows_per_day = windows.len(),
        interviewers = roster.len(),
        candidates = candidates.len(),
        "generating interview schedule"
    );

    let mut load = vec![0usize; roster.len()];
    let mut pending = candidates.iter().peekable();
    let mut days = Vec::new();

    for date in working_dates(params) {
        if pending.peek().is_none() {
            break;
        }

        let mut interviews = Vec::with_capacity(windows.len());
        for start in &windows {
            let Some(candidate) = pending.next() else {
                break;
            };
            let index = least_loaded(&load);
            load[index] += 1;
            interviews.push(InterviewSlot::new(
                candidate.clone(),
                roster[index].clone(),
                date.and_time(*start),
                duration,
            ));
        }

        if !interviews.is_empty() {
            days.push(ScheduleDay::new(date, interviews));
        }
    }

    let unplaced: Vec<ApplicationId> = pending.cloned().collect();
    if !unplaced.is_empty() {
        warn!(
            unplaced = unplaced.len(),
            "not enough interview slots for all selected candidates"
        );
    }

    Ok(ScheduleOutcome { days, unplaced })
}

/// Start times of the interview windows for a single working day
pub fn daily_windows(params: &ScheduleParameters) -> Vec<NaiveTime> {
    let day_start = params.daily_start_time.num_seconds_from_midnight();
    let day_end = params.daily_end_time.num_seconds_from_midnight();
    let length = params.interview_duration.saturating_mul(60);
    if length == 0 {
        return Vec::new();
    }

    let lunch = params.lunch_window().map(|(start, end)| {
        (start.num_seconds_from_midnight(), end.num_seconds_from_midnight())
    });

    let mut windows = Vec::new();
    let mut start = day_start;
    while let Some(end) = start.checked_add(length).filter(|end| *end <= day_end) {
        let touches_lunch =
            lunch.is_some_and(|(lunch_start, lunch_end)| start < lunch_end && lunch_start < end);
        if !touches_lunch {
            if let Some(time) = NaiveTime::from_num_seconds_from_midnight_opt(start, 0) {
                windows.push(time);
            }
        }
        start = end;
    }
    windows
}

/// Calendar dates between start and end (inclusive) that interviews may use
pub fn working_dates(params: &ScheduleParameters) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut current = Some(params.start_date);
    while let Some(date) = current.filter(|date| *date <= params.end_date) {
        if !(params.skip_weekends && is_weekend(date)) {
            dates.push(date);
        }
        current = date.succ_opt();
    }
    dates
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// `min_by_key` keeps the first minimum, which gives the input-order tie-break
fn least_loaded(load: &[usize]) -> usize {
    load.iter()
        .enumerate()
        .min_by_key(|(_, assigned)| **assigned)
        .map(|(index, _)| index)
        .unwrap_or(0)
}

fn dedup_in_order(interviewers: &[InterviewerId]) -> Vec<InterviewerId> {
    let mut roster: Vec<InterviewerId> = Vec::with_capacity(interviewers.len());
    for interviewer in interviewers {
        if !roster.contains(interviewer) {
            roster.push(interviewer.clone());
        }
    }
    roster
}
