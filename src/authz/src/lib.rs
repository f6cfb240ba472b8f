//! # RBAC Authorization Engine
//!
//! Role-based access control in the style of hierarchical cloud resource
//! managers: an identity holds *role assignments*, each granting a *role
//! definition* at a *scope*; a role definition lists *permission patterns*
//! and the scopes it may be assigned at.
//!
//! ## Features
//!
//! - **Segment wildcard matching** for permissions (`Teach/*`, `A/*/B`)
//! - **Hierarchical scopes** (`/Daycare` contains `/Daycare/LittleBee`)
//! - **Pluggable providers** for assignments and definitions
//! - **Post-grant callbacks** for host-specific final checks
//! - **JSON documents** for loading in-memory configurations
//!
//! ## Example
//!
//! ```rust
//! use rbac_authz::{
//!     AuthorizationEngine, MemoryRoleAssignmentProvider, MemoryRoleDefinitionProvider,
//!     RoleAssignment, RoleDefinition,
//! };
//! use std::sync::Arc;
//!
//! # fn main() -> rbac_authz::Result<()> {
//! let definitions = MemoryRoleDefinitionProvider::new(vec![RoleDefinition::new(
//!     "child",
//!     "Child",
//!     ["/Daycare", "/Playground"],
//!     ["Bubble/view", "Bubble/burst"],
//! )?])?;
//!
//! let assignments = MemoryRoleAssignmentProvider::new()
//!     .with_assignment("alice", RoleAssignment::new("a-1", "child", "/Daycare/LittleBee"));
//!
//! let engine: AuthorizationEngine<str> =
//!     AuthorizationEngine::new(Arc::new(assignments), Arc::new(definitions));
//!
//! let decision = engine.check_access("alice", "/Daycare/LittleBee/Playground", "Bubble/burst")?;
//! assert!(decision.is_granted());
//! # Ok(())
//! # }
//! ```

pub mod document;
pub mod engine;
pub mod error;
pub mod permission;
pub mod provider;
pub mod scope;
pub mod types;
pub mod validation;

mod segment;

// Re-export commonly used types
pub use document::{PrincipalAssignment, RbacDocument};
pub use engine::{AuthorizationDecision, AuthorizationEngine, Authorizer};
pub use error::{AuthzError, ErrorKind, Result};
pub use provider::{
    MemoryRoleAssignmentProvider, MemoryRoleDefinitionProvider, RoleAssignmentProvider,
    RoleDefinitionProvider,
};
pub use types::{RoleAssignment, RoleAssignmentId, RoleDefinition, RoleDefinitionId};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
