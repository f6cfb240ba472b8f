//! Authorization engine
//!
//! Orchestrates assignment lookup, scope filtering, role definition
//! resolution and permission matching into an [`AuthorizationDecision`].

pub mod decision;

pub use decision::AuthorizationDecision;

use crate::error::Result;
use crate::provider::{RoleAssignmentProvider, RoleDefinitionProvider};
use crate::scope::segments_prefix_match;
use crate::segment;
use crate::types::{RoleAssignment, RoleDefinition};
use crate::validation::{validate_permission_named, validate_scope_named};

use std::sync::Arc;
use tracing::{debug, info, trace};

/// Boolean access check
pub trait Authorizer<I: ?Sized> {
    /// Whether `identity` holds `permission` at `resource`
    fn is_authorized(&self, identity: &I, resource: &str, permission: &str) -> Result<bool>;
}

/// Default post-grant check: accept every candidate
fn accept_all<I: ?Sized>(_: &I, _: &RoleAssignment, _: &RoleDefinition) -> bool {
    true
}

/// RBAC authorization engine
///
/// # Pipeline
///
/// ```text
/// identity → RoleAssignmentProvider → scope filter → RoleDefinitionProvider
///          → assignable-scope check → permission patterns → callback → decision
/// ```
///
/// The engine is stateless apart from its two providers, which are fixed at
/// construction. It is `Send + Sync` and cheap to clone.
pub struct AuthorizationEngine<I: ?Sized> {
    /// Source of the identity's role assignments
    role_assignments: Arc<dyn RoleAssignmentProvider<I>>,

    /// Source of role definitions
    role_definitions: Arc<dyn RoleDefinitionProvider>,
}

impl<I: ?Sized> Clone for AuthorizationEngine<I> {
    fn clone(&self) -> Self {
        Self {
            role_assignments: Arc::clone(&self.role_assignments),
            role_definitions: Arc::clone(&self.role_definitions),
        }
    }
}

impl<I: ?Sized> AuthorizationEngine<I> {
    /// Create an engine over the given providers
    pub fn new(
        role_assignments: Arc<dyn RoleAssignmentProvider<I>>,
        role_definitions: Arc<dyn RoleDefinitionProvider>,
    ) -> Self {
        Self {
            role_assignments,
            role_definitions,
        }
    }

    pub fn role_assignment_provider(&self) -> &Arc<dyn RoleAssignmentProvider<I>> {
        &self.role_assignments
    }

    pub fn role_definition_provider(&self) -> &Arc<dyn RoleDefinitionProvider> {
        &self.role_definitions
    }

    /// Check access, evaluating every assignment
    ///
    /// # Arguments
    ///
    /// * `identity` - Requesting identity, handed to the assignment provider
    /// * `resource` - Rooted scope being accessed, e.g. `/Daycare/LittleBee`
    /// * `permission` - Concrete permission, e.g. `Bubble/burst`
    pub fn check_access(
        &self,
        identity: &I,
        resource: &str,
        permission: &str,
    ) -> Result<AuthorizationDecision> {
        self.check_access_with(identity, resource, permission, accept_all::<I>, true)
    }

    /// Check access with a post-grant callback, evaluating every assignment
    pub fn check_access_with_callback<F>(
        &self,
        identity: &I,
        resource: &str,
        permission: &str,
        check: F,
    ) -> Result<AuthorizationDecision>
    where
        F: Fn(&I, &RoleAssignment, &RoleDefinition) -> bool,
    {
        self.check_access_with(identity, resource, permission, check, true)
    }

    /// Check access
    ///
    /// Every assignment whose scope contains `resource`, whose role definition
    /// resolves, may be assigned at the assignment's scope and has a pattern
    /// matching `permission`, is passed to `check`. Those it accepts are
    /// recorded. With `evaluate_all == false` scanning stops at the first
    /// recorded assignment.
    ///
    /// # Errors
    ///
    /// `resource` and `permission` are validated before any provider is
    /// consulted. Provider errors and malformed assignment scopes propagate.
    pub fn check_access_with<F>(
        &self,
        identity: &I,
        resource: &str,
        permission: &str,
        check: F,
        evaluate_all: bool,
    ) -> Result<AuthorizationDecision>
    where
        F: Fn(&I, &RoleAssignment, &RoleDefinition) -> bool,
    {
        validate_scope_named(resource, "resource")?;
        validate_permission_named(permission, "permission")?;

        debug!(
            "Authorization request: resource={}, permission={}, evaluate_all={}",
            resource, permission, evaluate_all
        );

        let assignments = self.role_assignments.role_assignments(identity)?;
        if assignments.is_empty() {
            debug!("Identity holds no role assignments");
            return Ok(AuthorizationDecision::denied());
        }

        debug!("Evaluating {} role assignments", assignments.len());

        let resource_segments = segment::split(resource);
        let permission_segments = segment::split(permission);
        let mut matches = Vec::new();

        for assignment in assignments {
            validate_scope_named(&assignment.scope, "assignment.scope")?;
            let assignment_scope = segment::split(&assignment.scope);

            if !segments_prefix_match(&assignment_scope, &resource_segments) {
                trace!("Assignment '{}' at '{}' is out of scope", assignment.id, assignment.scope);
                continue;
            }

            let Some(definition) = self
                .role_definitions
                .role_definition(&assignment.role_definition_id)?
            else {
                debug!(
                    "Skipping assignment '{}': role definition '{}' not found",
                    assignment.id, assignment.role_definition_id
                );
                continue;
            };

            if !definition.is_assignable_at_segments(&assignment_scope) {
                debug!(
                    "Skipping assignment '{}': role '{}' is not assignable at '{}'",
                    assignment.id,
                    definition.id(),
                    assignment.scope
                );
                continue;
            }

            if !definition.grants_segments(&permission_segments) {
                trace!("Role '{}' does not grant '{}'", definition.id(), permission);
                continue;
            }

            if !check(identity, &assignment, definition.as_ref()) {
                debug!("Callback rejected assignment '{}'", assignment.id);
                continue;
            }

            debug!("Assignment '{}' (role '{}') grants access", assignment.id, definition.id());
            matches.push(assignment);

            if !evaluate_all {
                break;
            }
        }

        let decision = AuthorizationDecision::from_matches(matches);

        info!(
            "Decision: {} on '{}' for '{}' ({} matching assignments)",
            if decision.is_granted() { "ALLOW" } else { "DENY" },
            resource,
            permission,
            decision.matched_assignments().len()
        );

        Ok(decision)
    }
}

impl<I: ?Sized> Authorizer<I> for AuthorizationEngine<I> {
    fn is_authorized(&self, identity: &I, resource: &str, permission: &str) -> Result<bool> {
        self.check_access_with(identity, resource, permission, accept_all::<I>, false)
            .map(|decision| decision.is_granted())
    }
}
