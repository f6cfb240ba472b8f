//! Permission pattern matching
//!
//! Permissions are `/`-delimited paths such as `Microsoft.Compute/virtualMachines/start/action`.
//! Role definitions grant permission *patterns*, where a segment consisting of
//! the wildcard token `*` stands for zero or more whole segments:
//!
//! - `Teach/*` matches `Teach`, `Teach/math` and `Teach/math/algebra`
//! - `A/*/B` matches `A/B`, `A/x/B` and `A/x/y/B`
//! - `*` matches every permission
//!
//! Segments compare ordinal case-insensitively. Partial-segment wildcards
//! (`Bub*`) are not supported: `*` only has meaning as a whole segment.
//!
//! # Examples
//!
//! ```
//! use rbac_authz::permission;
//!
//! assert!(permission::is_match("Bubble/*", "bubble/burst").unwrap());
//! assert!(!permission::is_match("Bubble/view", "Bubble/burst").unwrap());
//! assert!(permission::is_match("Bubble/*", "").is_err());
//! ```

mod matcher;


pub use matcher::{is_match, is_match_any};
pub(crate) use matcher::segments_match;

/// Wildcard segment matching zero or more permission segments
pub const WILDCARD: &str = "*";

/// Characters separating permission segments
pub const DELIMITERS: &[char] = &[crate::segment::DELIMITER];
