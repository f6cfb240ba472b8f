//! JSON document holding role definitions and principal-bound assignments
//!
//! ```json
//! {
//!   "roleDefinitions": [
//!     { "id": "child", "displayName": "Child",
//!       "assignableScopes": ["/Daycare", "/Playground"],
//!       "permissions": ["Bubble/view", "Bubble/burst"] }
//!   ],
//!   "roleAssignments": [
//!     { "principalId": "alice", "id": "a-1",
//!       "roleDefinitionId": "child", "scope": "/Daycare/LittleBee" }
//!   ]
//! }
//! ```

use crate::engine::AuthorizationEngine;
use crate::error::Result;
use crate::provider::{MemoryRoleAssignmentProvider, MemoryRoleDefinitionProvider};
use crate::types::{RoleAssignment, RoleDefinition};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Role assignment together with the principal holding it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrincipalAssignment {
    /// Principal holding the assignment
    pub principal_id: String,

    #[serde(flatten)]
    pub assignment: RoleAssignment,
}

/// Serializable RBAC configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RbacDocument {
    /// Role definitions, validated while parsing
    #[serde(default)]
    pub role_definitions: Vec<RoleDefinition>,

    /// Assignments, in evaluation order
    #[serde(default)]
    pub role_assignments: Vec<PrincipalAssignment>,
}

impl RbacDocument {
    /// Parse a document from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a document from a reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Load a document from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let document = Self::from_reader(BufReader::new(File::open(path)?))?;

        info!(
            "Loaded {} role definitions and {} role assignments from {}",
            document.role_definitions.len(),
            document.role_assignments.len(),
            path.display()
        );

        Ok(document)
    }

    /// Build the in-memory providers
    ///
    /// Fails when two role definitions share an id.
    pub fn into_providers(self) -> Result<(MemoryRoleAssignmentProvider, MemoryRoleDefinitionProvider)> {
        let definitions = MemoryRoleDefinitionProvider::new(self.role_definitions)?;
        let assignments = self
            .role_assignments
            .into_iter()
            .map(|entry| (entry.principal_id, entry.assignment))
            .collect();

        Ok((assignments, definitions))
    }

    /// Build an engine keyed by principal id
    pub fn into_engine(self) -> Result<AuthorizationEngine<str>> {
        let (assignments, definitions) = self.into_providers()?;
        Ok(AuthorizationEngine::new(Arc::new(assignments), Arc::new(definitions)))
    }
}
