//! In-memory providers

use super::{RoleAssignmentProvider, RoleDefinitionProvider};
use crate::error::{AuthzError, Result};
use crate::segment;
use crate::types::{RoleAssignment, RoleDefinition};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, trace};

/// Role definitions indexed by case-insensitive id
///
/// The index is built once in [`MemoryRoleDefinitionProvider::new`] and never
/// mutated, so the provider can be shared across threads without locking.
#[derive(Debug, Clone, Default)]
pub struct MemoryRoleDefinitionProvider {
    /// Definitions in insertion order
    definitions: Vec<Arc<RoleDefinition>>,

    /// Folded id -> position in `definitions`
    index: HashMap<String, usize>,
}

impl MemoryRoleDefinitionProvider {
    /// Index role definitions by id
    ///
    /// # Errors
    ///
    /// Returns [`AuthzError::DuplicateRoleDefinition`] when two definitions
    /// share an id, ignoring case.
    pub fn new(definitions: impl IntoIterator<Item = RoleDefinition>) -> Result<Self> {
        let mut provider = Self::default();

        for definition in definitions {
            let key = segment::fold_case(definition.id());
            if provider.index.contains_key(&key) {
                return Err(AuthzError::DuplicateRoleDefinition(definition.id().to_string()));
            }

            provider.index.insert(key, provider.definitions.len());
            provider.definitions.push(Arc::new(definition));
        }

        debug!("Indexed {} role definitions", provider.definitions.len());

        Ok(provider)
    }

    /// Number of indexed definitions
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Iterate definitions in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &RoleDefinition> {
        self.definitions.iter().map(|d| d.as_ref())
    }

    /// Look up a definition without cloning the `Arc`
    pub fn get(&self, id: &str) -> Option<&RoleDefinition> {
        self.index
            .get(&segment::fold_case(id))
            .map(|&position| self.definitions[position].as_ref())
    }
}

impl RoleDefinitionProvider for MemoryRoleDefinitionProvider {
    fn role_definition(&self, id: &str) -> Result<Option<Arc<RoleDefinition>>> {
        let found = self
            .index
            .get(&segment::fold_case(id))
            .map(|&position| Arc::clone(&self.definitions[position]));

        trace!("Role definition lookup '{}': found={}", id, found.is_some());

        Ok(found)
    }
}

/// Role assignments bound to principal ids
///
/// Implements [`RoleAssignmentProvider<str>`]: the identity is a principal
/// id, compared case-insensitively. Assignments are returned in insertion
/// order.
#[derive(Debug, Clone, Default)]
pub struct MemoryRoleAssignmentProvider {
    assignments: Vec<(String, RoleAssignment)>,
}

impl MemoryRoleAssignmentProvider {
    /// Create an empty provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an assignment held by `principal_id`
    pub fn with_assignment(mut self, principal_id: impl Into<String>, assignment: RoleAssignment) -> Self {
        self.assignments.push((principal_id.into(), assignment));
        self
    }

    /// Number of assignments across all principals
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

impl<P: Into<String>> FromIterator<(P, RoleAssignment)> for MemoryRoleAssignmentProvider {
    fn from_iter<T: IntoIterator<Item = (P, RoleAssignment)>>(iter: T) -> Self {
        Self {
            assignments: iter
                .into_iter()
                .map(|(principal_id, assignment)| (principal_id.into(), assignment))
                .collect(),
        }
    }
}

impl RoleAssignmentProvider<str> for MemoryRoleAssignmentProvider {
    fn role_assignments(&self, identity: &str) -> Result<Vec<RoleAssignment>> {
        Ok(self
            .assignments
            .iter()
            .filter(|(principal_id, _)| segment::eq_ignore_case(principal_id, identity))
            .map(|(_, assignment)| assignment.clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn definitions() -> Vec<RoleDefinition> {
        vec![
            RoleDefinition::new("Director", "Director", ["/Daycare"], ["Teach/*", "Purchase/*"]).unwrap(),
            RoleDefinition::new("Child", "Child", ["/Daycare", "/Playground"], ["Bubble/view", "Bubble/burst"])
                .unwrap(),
        ]
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let provider = MemoryRoleDefinitionProvider::new(definitions()).unwrap();
        assert_eq!(provider.len(), 2);

        let director = provider.role_definition("DIRECTOR").unwrap().unwrap();
        assert_eq!(director.display_name(), "Director");

        let child = provider.role_definition("child").unwrap().unwrap();
        assert_eq!(child.id(), "Child");
        assert!(provider.get("cHiLd").is_some());
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let provider = MemoryRoleDefinitionProvider::new(definitions()).unwrap();
        assert!(provider.role_definition("Janitor").unwrap().is_none());
        assert!(provider.role_definition("").unwrap().is_none());
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let mut all = definitions();
        all.push(RoleDefinition::new("director", "Other", ["/"], ["*"]).unwrap());

        let err = MemoryRoleDefinitionProvider::new(all).unwrap_err();
        assert!(matches!(err, AuthzError::DuplicateRoleDefinition(ref id) if id == "director"));
        assert!(err.is_out_of_range());
    }

    #[test]
    fn test_empty_provider() {
        let provider = MemoryRoleDefinitionProvider::new(Vec::new()).unwrap();
        assert!(provider.is_empty());
        assert!(provider.role_definition("any").unwrap().is_none());
    }

    #[test]
    fn test_iteration_preserves_order() {
        let provider = MemoryRoleDefinitionProvider::new(definitions()).unwrap();
        let ids: Vec<&str> = provider.iter().map(|d| d.id()).collect();
        assert_eq!(ids, vec!["Director", "Child"]);
    }

    #[test]
    fn test_concurrent_lookups() {
        let provider = Arc::new(MemoryRoleDefinitionProvider::new(definitions()).unwrap());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let provider = Arc::clone(&provider);
                thread::spawn(move || {
                    let id = if i % 2 == 0 { "director" } else { "CHILD" };
                    for _ in 0..100 {
                        assert!(provider.role_definition(id).unwrap().is_some());
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
    }

    #[test]
    fn test_assignments_filtered_by_principal() {
        let provider = MemoryRoleAssignmentProvider::new()
            .with_assignment("alice", RoleAssignment::new("a-1", "Director", "/Daycare/AppleTree"))
            .with_assignment("bob", RoleAssignment::new("b-1", "Child", "/Daycare"))
            .with_assignment("Alice", RoleAssignment::new("a-2", "Child", "/Daycare/LittleBee"));

        let ids: Vec<String> = provider
            .role_assignments("ALICE")
            .unwrap()
            .into_iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(ids, vec!["a-1", "a-2"]);

        assert!(provider.role_assignments("carol").unwrap().is_empty());
        assert_eq!(provider.len(), 3);
    }

    #[test]
    fn test_assignment_provider_from_iter() {
        let provider: MemoryRoleAssignmentProvider = vec![
            ("alice", RoleAssignment::new("a-1", "Director", "/Daycare")),
        ]
        .into_iter()
        .collect();

        assert_eq!(provider.role_assignments("alice").unwrap().len(), 1);
    }
}
