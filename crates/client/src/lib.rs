//! # TalentSync Client
//!
//! Recruiter-side workflow on top of the portal backend: loading and filtering
//! applications, handing a selection to the scheduler, generating and editing
//! an interview schedule, confirming it and notifying candidates.
//!
//! Network access goes through the [`api::PortalApi`] trait so sessions can run
//! against [`api::HttpPortalApi`] or the mockall double in [`mock`].

pub mod api;
pub mod cancellation;
pub mod config;
pub mod dispatch;
pub mod mock;
pub mod sessions;

pub use api::{HttpPortalApi, PortalApi};
pub use cancellation::{CancellationToken, LoadOutcome};
pub use dispatch::EmailDispatcher;
