//! Authorization decision type

use crate::types::RoleAssignment;
use serde::Serialize;

/// Outcome of an access check
///
/// Access is granted exactly when at least one role assignment matched.
/// Matched assignments are listed in evaluation order, i.e. the assignment
/// provider's order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationDecision {
    /// Whether the request is allowed
    granted: bool,

    /// Assignments that granted the permission
    matched_assignments: Vec<RoleAssignment>,
}

impl AuthorizationDecision {
    /// Access denied, no matching assignments
    pub const fn denied() -> Self {
        Self {
            granted: false,
            matched_assignments: Vec::new(),
        }
    }

    pub(crate) fn from_matches(matched_assignments: Vec<RoleAssignment>) -> Self {
        Self {
            granted: !matched_assignments.is_empty(),
            matched_assignments,
        }
    }

    pub fn is_granted(&self) -> bool {
        self.granted
    }

    pub fn matched_assignments(&self) -> &[RoleAssignment] {
        &self.matched_assignments
    }

    pub fn into_matched_assignments(self) -> Vec<RoleAssignment> {
        self.matched_assignments
    }
}
