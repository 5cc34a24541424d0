//! # TalentSync Core
//!
//! Domain types and pure logic shared by the TalentSync server and portal client.
//!
//! - **Models**: applications, interviewers, schedules and e-mail envelopes as they
//!   travel over the portal's REST API
//! - **Scheduling**: interview schedule generation, slot editing and the formatting of
//!   confirmed slots for the API and for candidate notifications
//! - **Applications**: the filter and selection state behind the applications review page
//! - **Templates**: the named e-mail template catalog and `{{placeholder}}` rendering
//! - **Permissions**: explicit capability sets checked by every session action
//!
//! Nothing in this crate performs I/O.

/// Filtering and multi-select state for application lists
pub mod applications;
/// Error taxonomy shared across the workspace
pub mod errors;
/// Wire and domain models
pub mod models;
/// Capability sets and permission checks
pub mod permissions;
/// Schedule generation, editing and formatting
pub mod scheduling;
/// E-mail template catalog and placeholder rendering
pub mod templates;
