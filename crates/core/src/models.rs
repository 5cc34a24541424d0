pub mod application;
pub mod email;
pub mod ids;
pub mod interviewer;
pub mod schedule;

pub use ids::{ApplicationId, InterviewerId};
