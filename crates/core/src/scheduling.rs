pub mod editor;
pub mod format;
pub mod generator;

pub use editor::{edit_slot, edit_slot_checked};
pub use format::{format_interview_notices, to_scheduled_interviews};
pub use generator::generate_schedule;
