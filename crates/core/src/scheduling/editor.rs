use chrono::Duration;

use crate::errors::{TalentError, TalentResult};
use crate::models::schedule::{ScheduleDay, SlotUpdate};

/// Replaces one slot's candidate, interviewer and start time.
///
/// The end time is recomputed as `start + duration_minutes`. Every other slot and
/// day is carried over unchanged and the slot keeps its position in the day, even
/// if the new start time puts it out of order. Overlap with sibling slots is not
/// checked; see [`edit_slot_checked`].
///
/// # Errors
///
/// * `TalentError::Index` - `day_index` or `slot_index` does not exist
/// * `TalentError::Validation` - `duration_minutes` is zero, the new start time falls
///   on another date than the day being edited, or the end time cannot be represented
pub fn edit_slot(
    schedule: &[ScheduleDay],
    day_index: usize,
    slot_index: usize,
    update: SlotUpdate,
    duration_minutes: u32,
) -> TalentResult<Vec<ScheduleDay>> {
    if duration_minutes == 0 {
        return Err(TalentError::Validation(
            "interview duration must be greater than zero".to_string(),
        ));
    }

    let day_count = schedule.len();
    let mut edited = schedule.to_vec();
    let day = edited.get_mut(day_index).ok_or_else(|| {
        TalentError::Index(format!(
            "day {day_index} does not exist (schedule has {day_count} days)"
        ))
    })?;

    let date = day.date;
    let slot_count = day.len();
    let slot = day.interviews_mut().get_mut(slot_index).ok_or_else(|| {
        TalentError::Index(format!(
            "slot {slot_index} does not exist on day {day_index} ({slot_count} slots)"
        ))
    })?;

    if update.start_time.date() != date {
        return Err(TalentError::Validation(format!(
            "slot on {date} cannot start on {}",
            update.start_time.date()
        )));
    }

    slot.reassign(update, Duration::minutes(i64::from(duration_minutes)))?;
    Ok(edited)
}

/// Same as [`edit_slot`], but rejects edits that overlap another slot on the same day.
pub fn edit_slot_checked(
    schedule: &[ScheduleDay],
    day_index: usize,
    slot_index: usize,
    update: SlotUpdate,
    duration_minutes: u32,
) -> TalentResult<Vec<ScheduleDay>> {
    let edited = edit_slot(schedule, day_index, slot_index, update, duration_minutes)?;

    let day = &edited[day_index];
    let slot = &day.interviews()[slot_index];
    let clash = day
        .interviews()
        .iter()
        .enumerate()
        .find(|(index, other)| *index != slot_index && slot.overlaps(other));

    match clash {
        Some((index, other)) => Err(TalentError::Validation(format!(
            "slot overlaps slot {index} ({} - {})",
            other.start_time().format("%H:%M"),
            other.end_time().format("%H:%M"),
        ))),
        None => Ok(edited),
    }
}
