//! Literal prefix matching over scope segments

use crate::error::Result;
use crate::segment;
use crate::validation::{validate_scope_named, validate_scopes_named};

/// Checks whether `child` equals or is nested under `parent`
///
/// # Arguments
///
/// * `parent` - Rooted parent scope, e.g. `/Daycare`
/// * `child` - Rooted child scope, e.g. `/Daycare/LittleBee`
///
/// # Returns
///
/// Returns an error when either scope is empty or not rooted
pub fn is_prefix_match(parent: &str, child: &str) -> Result<bool> {
    validate_scope_named(parent, "parent")?;
    validate_scope_named(child, "child")?;

    Ok(segments_prefix_match(
        &segment::split(parent),
        &segment::split(child),
    ))
}

/// Checks whether `child` equals or is nested under any of `parents`
///
/// `parents` must hold at least one entry and every entry must be a rooted
/// scope. Evaluation stops at the first matching parent.
pub fn is_prefix_match_any<S: AsRef<str>>(parents: &[S], child: &str) -> Result<bool> {
    validate_scopes_named(parents, "parents")?;
    validate_scope_named(child, "child")?;

    let child = segment::split(child);
    Ok(parents
        .iter()
        .any(|parent| segments_prefix_match(&segment::split(parent.as_ref()), &child)))
}

/// Matches pre-split segments
///
/// An empty parent (`/`, `/////`) contains everything.
pub(crate) fn segments_prefix_match(parent: &[&str], child: &[&str]) -> bool {
    parent.len() <= child.len()
        && parent
            .iter()
            .zip(child)
            .all(|(p, c)| segment::eq_ignore_case(p, c))
}
