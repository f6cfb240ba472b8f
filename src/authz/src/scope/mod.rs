//! Scope prefix matching
//!
//! Scopes are rooted `/`-delimited paths naming a resource hierarchy, e.g.
//! `/Daycare/LittleBee/Playground`. A role assigned at a parent scope applies
//! to every scope nested beneath it:
//!
//! - `/Daycare` contains `/Daycare/LittleBee` and `/daycare/littlebee/Playground`
//! - `/` (or any delimiter-only scope) contains every scope
//! - there is no wildcard: parents are literal, case-insensitive prefixes
//!
//! # Examples
//!
//! ```
//! use rbac_authz::scope;
//!
//! assert!(scope::is_prefix_match("/Daycare", "/daycare/LittleBee").unwrap());
//! assert!(!scope::is_prefix_match("/Playground", "/Daycare").unwrap());
//! assert!(scope::is_prefix_match_any(&["/Playground", "/Daycare"], "/Daycare/LittleBee").unwrap());
//! ```

mod matcher;


pub use matcher::{is_prefix_match, is_prefix_match_any};
pub(crate) use matcher::segments_prefix_match;

/// Characters separating scope segments
pub const DELIMITERS: &[char] = &[crate::segment::DELIMITER];
