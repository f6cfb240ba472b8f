//! Path segment helpers shared by the permission and scope matchers

/// Segment delimiter for permissions, patterns and scopes
pub(crate) const DELIMITER: char = '/';

/// Splits a path on the delimiter, dropping empty segments
///
/// Leading, trailing and repeated delimiters are inert: `"/a//b/"` and
/// `"a/b"` both yield `["a", "b"]`.
pub(crate) fn split(path: &str) -> Vec<&str> {
    path.split(DELIMITER).filter(|s| !s.is_empty()).collect()
}

/// Ordinal case-insensitive segment comparison
///
/// Characters are folded one by one through their simple uppercase mapping,
/// never through locale rules.
pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }

    a.chars().map(fold).eq(b.chars().map(fold))
}

/// Folds a string for case-insensitive keying
///
/// `fold_case(a) == fold_case(b)` exactly when `eq_ignore_case(a, b)`.
pub(crate) fn fold_case(s: &str) -> String {
    s.chars().map(fold).collect()
}

fn fold(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        // Multi-char expansions (e.g. 'ß' -> "SS") have no simple mapping
        _ => c,
    }
}
