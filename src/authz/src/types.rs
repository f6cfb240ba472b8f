//! Core RBAC types

use crate::error::{AuthzError, Result};
use crate::permission::segments_match;
use crate::scope::segments_prefix_match;
use crate::segment;
use crate::validation::{validate_permission_named, validate_role_definition_components, validate_scope_named};
use serde::{Deserialize, Serialize};

/// Unique role definition identifier (compared case-insensitively)
pub type RoleDefinitionId = String;

/// Unique role assignment identifier
pub type RoleAssignmentId = String;

/// Named set of permission patterns, assignable at a set of scopes
///
/// Instances are always valid: [`RoleDefinition::new`] and deserialization
/// both run the same checks, so an invalid definition never becomes visible.
///
/// # Examples
///
/// ```
/// use rbac_authz::RoleDefinition;
///
/// let child = RoleDefinition::new(
///     "child",
///     "Child",
///     ["/Daycare", "/Playground"],
///     ["Bubble/view", "Bubble/burst"],
/// ).unwrap();
///
/// assert!(child.grants("bubble/BURST").unwrap());
/// assert!(child.is_assignable_at("/Daycare/LittleBee").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RoleDefinitionRecord")]
pub struct RoleDefinition {
    /// Role definition identifier
    id: RoleDefinitionId,

    /// Human readable name, never interpreted
    display_name: String,

    /// Scopes at or under which the role may be assigned
    assignable_scopes: Vec<String>,

    /// Permission patterns granted by the role
    permissions: Vec<String>,
}

impl RoleDefinition {
    /// Create a validated role definition
    ///
    /// # Errors
    ///
    /// Returns an out-of-range error naming the offending field when `id` is
    /// empty, `permissions` is empty or holds an invalid pattern, or
    /// `assignable_scopes` is empty or holds an unrooted scope.
    pub fn new<S, P>(
        id: impl Into<String>,
        display_name: impl Into<String>,
        assignable_scopes: S,
        permissions: P,
    ) -> Result<Self>
    where
        S: IntoIterator,
        S::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        let id = id.into();
        let assignable_scopes: Vec<String> = assignable_scopes.into_iter().map(Into::into).collect();
        let permissions: Vec<String> = permissions.into_iter().map(Into::into).collect();

        validate_role_definition_components(&id, assignable_scopes.as_slice(), permissions.as_slice())?;

        Ok(Self {
            id,
            display_name: display_name.into(),
            assignable_scopes,
            permissions,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn assignable_scopes(&self) -> &[String] {
        &self.assignable_scopes
    }

    pub fn permissions(&self) -> &[String] {
        &self.permissions
    }

    /// Check whether any of the role's patterns matches `permission`
    pub fn grants(&self, permission: &str) -> Result<bool> {
        validate_permission_named(permission, "permission")?;
        Ok(self.grants_segments(&segment::split(permission)))
    }

    /// Check whether the role may be assigned at `scope`
    pub fn is_assignable_at(&self, scope: &str) -> Result<bool> {
        validate_scope_named(scope, "scope")?;
        Ok(self.is_assignable_at_segments(&segment::split(scope)))
    }

    pub(crate) fn grants_segments(&self, permission: &[&str]) -> bool {
        self.permissions
            .iter()
            .any(|pattern| segments_match(&segment::split(pattern), permission))
    }

    pub(crate) fn is_assignable_at_segments(&self, scope: &[&str]) -> bool {
        self.assignable_scopes
            .iter()
            .any(|parent| segments_prefix_match(&segment::split(parent), scope))
    }
}

/// Unvalidated wire shape of a [`RoleDefinition`]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RoleDefinitionRecord {
    id: String,
    #[serde(default)]
    display_name: String,
    #[serde(default)]
    assignable_scopes: Vec<String>,
    #[serde(default)]
    permissions: Vec<String>,
}

impl TryFrom<RoleDefinitionRecord> for RoleDefinition {
    type Error = AuthzError;

    fn try_from(record: RoleDefinitionRecord) -> Result<Self> {
        Self::new(
            record.id,
            record.display_name,
            record.assignable_scopes,
            record.permissions,
        )
    }
}

/// Grant of a role definition to a principal at a scope
///
/// Which principal an assignment belongs to is the assignment provider's
/// concern; the engine only consumes these three fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleAssignment {
    /// Assignment identifier
    pub id: RoleAssignmentId,

    /// Assigned role definition
    pub role_definition_id: RoleDefinitionId,

    /// Rooted scope the role is assigned at
    pub scope: String,
}

impl RoleAssignment {
    /// Create a new role assignment
    pub fn new(
        id: impl Into<String>,
        role_definition_id: impl Into<String>,
        scope: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            role_definition_id: role_definition_id.into(),
            scope: scope.into(),
        }
    }
}
