//! Input validation for permissions, patterns, scopes and role definitions
//!
//! Every public matcher and the engine run these checks before doing any work,
//! so a malformed value is reported instead of being silently treated as a
//! match or a non-match.

use crate::error::{AuthzError, Result};
use crate::permission::WILDCARD;
use crate::segment::DELIMITER;

/// Validates a concrete permission (e.g. `Bubble/burst`)
///
/// Rejects empty values, values containing the wildcard, and values starting
/// with a delimiter.
pub fn validate_permission(permission: &str) -> Result<()> {
    validate_permission_named(permission, "permission")
}

pub(crate) fn validate_permission_named(permission: &str, param: &'static str) -> Result<()> {
    if permission.is_empty() {
        return Err(AuthzError::Empty { param });
    }

    if permission.contains(WILDCARD) {
        return Err(AuthzError::WildcardInPermission {
            param,
            value: permission.to_string(),
        });
    }

    if permission.starts_with(DELIMITER) {
        return Err(AuthzError::LeadingDelimiter {
            param,
            value: permission.to_string(),
        });
    }

    Ok(())
}

/// Validates a permission pattern (e.g. `Teach/*`)
pub fn validate_permission_pattern(pattern: &str) -> Result<()> {
    validate_permission_pattern_named(pattern, "pattern")
}

pub(crate) fn validate_permission_pattern_named(pattern: &str, param: &'static str) -> Result<()> {
    if pattern.is_empty() {
        return Err(AuthzError::Empty { param });
    }

    if pattern.starts_with(DELIMITER) {
        return Err(AuthzError::LeadingDelimiter {
            param,
            value: pattern.to_string(),
        });
    }

    Ok(())
}

/// Validates a rooted scope (e.g. `/Daycare/LittleBee`)
pub fn validate_scope(scope: &str) -> Result<()> {
    validate_scope_named(scope, "scope")
}

pub(crate) fn validate_scope_named(scope: &str, param: &'static str) -> Result<()> {
    if scope.is_empty() {
        return Err(AuthzError::Empty { param });
    }

    if !scope.starts_with(DELIMITER) {
        return Err(AuthzError::UnrootedScope {
            param,
            value: scope.to_string(),
        });
    }

    Ok(())
}

/// Validates a non-empty collection of rooted scopes
pub fn validate_scopes<S: AsRef<str>>(scopes: &[S]) -> Result<()> {
    validate_scopes_named(scopes, "scopes")
}

pub(crate) fn validate_scopes_named<S: AsRef<str>>(scopes: &[S], param: &'static str) -> Result<()> {
    if scopes.is_empty() {
        return Err(AuthzError::EmptyCollection { param });
    }

    scopes
        .iter()
        .try_for_each(|scope| validate_scope_named(scope.as_ref(), param))
}

/// Validates the components of a role definition
///
/// `id` must be non-empty, `permissions` must hold at least one valid
/// pattern and `assignable_scopes` at least one rooted scope.
pub fn validate_role_definition_components<S, P>(
    id: &str,
    assignable_scopes: &[S],
    permissions: &[P],
) -> Result<()>
where
    S: AsRef<str>,
    P: AsRef<str>,
{
    if id.is_empty() {
        return Err(AuthzError::Empty { param: "id" });
    }

    if permissions.is_empty() {
        return Err(AuthzError::EmptyCollection { param: "permissions" });
    }
    for pattern in permissions {
        validate_permission_pattern_named(pattern.as_ref(), "permissions")?;
    }

    validate_scopes_named(assignable_scopes, "assignable_scopes")
}
