//! Per-page workflow state. Each session is owned by one caller and mutated
//! serially; nothing is shared between sessions.

pub mod applications;
pub mod scheduler;

pub use applications::ApplicationsSession;
pub use scheduler::{ConfirmationOutcome, SchedulerSession};
