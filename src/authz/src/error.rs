//! Error types for the authorization engine

use thiserror::Error;

/// Broad classification of an [`AuthzError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A supplied value is structurally invalid (empty, malformed, duplicated)
    OutOfRange,
    /// A role assignment or role definition provider failed
    Provider,
    /// Reading a document failed
    Io,
    /// A document could not be parsed
    Parse,
}

/// Authorization engine errors
#[derive(Debug, Error)]
pub enum AuthzError {
    /// Required string argument is empty
    #[error("{param} must not be empty")]
    Empty { param: &'static str },

    /// Permission contains the wildcard token
    #[error("{param}: permission cannot contain wildcards - '{value}'")]
    WildcardInPermission { param: &'static str, value: String },

    /// Permission or permission pattern starts with a delimiter
    #[error("{param}: '{value}' must not start with a delimiter (one of '/')")]
    LeadingDelimiter { param: &'static str, value: String },

    /// Scope is not rooted
    #[error("{param}: scope '{value}' must start with a delimiter (one of '/')")]
    UnrootedScope { param: &'static str, value: String },

    /// Collection must contain at least one entry
    #[error("{param} must contain at least one entry")]
    EmptyCollection { param: &'static str },

    /// Role definition id already indexed (case-insensitive)
    #[error("role definition with id '{0}' already exists")]
    DuplicateRoleDefinition(String),

    /// Role assignment or role definition provider failure
    #[error("Provider error: {0}")]
    Provider(String),

    /// Document could not be parsed
    #[error("Invalid document: {0}")]
    Parse(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AuthzError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Empty { .. }
            | Self::WildcardInPermission { .. }
            | Self::LeadingDelimiter { .. }
            | Self::UnrootedScope { .. }
            | Self::EmptyCollection { .. }
            | Self::DuplicateRoleDefinition(_) => ErrorKind::OutOfRange,
            Self::Provider(_) => ErrorKind::Provider,
            Self::Parse(_) => ErrorKind::Parse,
            Self::Io(_) => ErrorKind::Io,
        }
    }

    /// Whether this error reports an invalid argument
    pub fn is_out_of_range(&self) -> bool {
        self.kind() == ErrorKind::OutOfRange
    }

    /// Name of the offending argument or field, when known
    pub fn param(&self) -> Option<&'static str> {
        match self {
            Self::Empty { param }
            | Self::WildcardInPermission { param, .. }
            | Self::LeadingDelimiter { param, .. }
            | Self::UnrootedScope { param, .. }
            | Self::EmptyCollection { param } => Some(*param),
            _ => None,
        }
    }
}

/// Result type for authorization operations
pub type Result<T> = std::result::Result<T, AuthzError>;
