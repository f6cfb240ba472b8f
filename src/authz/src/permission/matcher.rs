//! Segment wildcard matcher with single-point backtracking

use super::WILDCARD;
use crate::error::Result;
use crate::segment;
use crate::validation::{validate_permission_named, validate_permission_pattern_named};

/// Checks whether `permission` matches the wildcard `pattern`
///
/// Both arguments are validated first: an empty or delimiter-leading pattern,
/// or an empty, delimiter-leading or wildcard-bearing permission, is an error
/// rather than a non-match.
///
/// # Arguments
///
/// * `pattern` - Permission pattern, e.g. `Microsoft.Compute/*/read`
/// * `permission` - Concrete permission, e.g. `Microsoft.Compute/disks/read`
pub fn is_match(pattern: &str, permission: &str) -> Result<bool> {
    validate_permission_pattern_named(pattern, "pattern")?;
    validate_permission_named(permission, "permission")?;

    Ok(segments_match(
        &segment::split(pattern),
        &segment::split(permission),
    ))
}

/// Checks whether `permission` matches at least one of `patterns`
///
/// Every pattern is validated, even after a match has been found.
pub fn is_match_any<S: AsRef<str>>(patterns: &[S], permission: &str) -> Result<bool> {
    for pattern in patterns {
        validate_permission_pattern_named(pattern.as_ref(), "patterns")?;
    }
    validate_permission_named(permission, "permission")?;

    let permission = segment::split(permission);
    Ok(patterns
        .iter()
        .any(|pattern| segments_match(&segment::split(pattern.as_ref()), &permission)))
}

/// Matches pre-split segments
///
/// Walks the permission left to right. A wildcard in the pattern records a
/// restart point just past itself; on a later mismatch the pattern cursor
/// rewinds to that point and the current permission segment is re-tested
/// there, so `A/*/B/C/D` still matches `A/s/B/C/XXX/B/C/D` after the false
/// start at the first `B/C`.
pub(crate) fn segments_match(pattern: &[&str], permission: &[&str]) -> bool {
    let mut pattern_index = 0;
    let mut permission_index = 0;
    let mut restart: Option<usize> = None;

    while permission_index < permission.len() {
        let current = permission[permission_index];

        match pattern.get(pattern_index) {
            Some(expected) if segment::eq_ignore_case(expected, current) => {
                pattern_index += 1;
                permission_index += 1;
            }
            Some(&expected) if expected == WILDCARD => {
                // Consecutive wildcards coalesce: the next pass re-tests the
                // following pattern segment against the same permission segment.
                pattern_index += 1;
                restart = Some(pattern_index);
            }
            _ => {
                let Some(restart_index) = restart else {
                    return false;
                };

                pattern_index = restart_index;
                match pattern.get(pattern_index) {
                    // Trailing wildcard swallows the rest of the permission
                    None => return true,
                    Some(expected) => {
                        if segment::eq_ignore_case(expected, current) {
                            pattern_index += 1;
                        }
                        permission_index += 1;
                    }
                }
            }
        }
    }

    // Permission consumed: whatever is left of the pattern must be wildcards
    pattern[pattern_index..].iter().all(|s| *s == WILDCARD)
}
