//! Role assignment and role definition providers
//!
//! The engine consumes two read-only capabilities: "which assignments does
//! this identity hold" and "what is the definition with this id". Production
//! hosts back them with their own stores; [`memory`] holds the in-process
//! reference implementations.

pub mod memory;

pub use memory::{MemoryRoleAssignmentProvider, MemoryRoleDefinitionProvider};

use crate::error::Result;
use crate::types::{RoleAssignment, RoleDefinition};
use std::sync::Arc;

/// Resolves the role assignments held by an identity
///
/// Implementations decide which assignments apply to the identity; the
/// engine never filters by principal. Returned order is the evaluation order.
/// An empty vector means "no assignments" and is not an error.
pub trait RoleAssignmentProvider<I: ?Sized>: Send + Sync {
    /// Get the role assignments held by `identity`
    fn role_assignments(&self, identity: &I) -> Result<Vec<RoleAssignment>>;
}

/// Resolves role definitions by id
///
/// Lookups are case-insensitive on the id. An unknown id is `Ok(None)`.
pub trait RoleDefinitionProvider: Send + Sync {
    /// Get a role definition by id
    fn role_definition(&self, id: &str) -> Result<Option<Arc<RoleDefinition>>>;
}
