use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::errors::{TalentError, TalentResult};

/// Actions gated by the recruiter's role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    ViewApplications,
    ScheduleInterview,
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Permission::ViewApplications => "view_applications",
            Permission::ScheduleInterview => "schedule_interview",
        })
    }
}

/// The permissions granted to the current user.
///
/// Resolved by the caller (from a role, a token, ...) and passed explicitly into
/// every session action. An empty set denies everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    granted: HashSet<Permission>,
}

impl Capabilities {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        [Permission::ViewApplications, Permission::ScheduleInterview]
            .into_iter()
            .collect()
    }

    pub fn grant(mut self, permission: Permission) -> Self {
        self.granted.insert(permission);
        self
    }

    pub fn has(&self, permission: Permission) -> bool {
        self.granted.contains(&permission)
    }

    pub fn require(&self, permission: Permission) -> TalentResult<()> {
        if self.has(permission) {
            Ok(())
        } else {
            Err(TalentError::Authorization(format!(
                "missing permission '{permission}'"
            )))
        }
    }
}

impl FromIterator<Permission> for Capabilities {
    fn from_iter<I: IntoIterator<Item = Permission>>(iter: I) -> Self {
        Self {
            granted: iter.into_iter().collect(),
        }
    }
}
