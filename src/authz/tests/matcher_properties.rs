//! Property-based tests for permission and scope matching

use proptest::prelude::*;
use rbac_authz::permission::{is_match, is_match_any};
use rbac_authz::scope::{is_prefix_match, is_prefix_match_any};

fn segment() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_.-]{1,8}"
}

fn segments() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(segment(), 1..6)
}

fn permission() -> impl Strategy<Value = String> {
    segments().prop_map(|s| s.join("/"))
}

fn scope() -> impl Strategy<Value = String> {
    prop::collection::vec(segment(), 0..6).prop_map(|s| format!("/{}", s.join("/")))
}

proptest! {
    #[test]
    fn wildcard_matches_any_permission(permission in permission()) {
        prop_assert!(is_match("*", &permission).unwrap());
    }

    #[test]
    fn permission_matches_itself(permission in permission()) {
        prop_assert!(is_match(&permission, &permission).unwrap());
    }

    #[test]
    fn permission_match_ignores_ascii_case(permission in permission()) {
        prop_assert!(is_match(&permission.to_uppercase(), &permission.to_lowercase()).unwrap());
    }

    #[test]
    fn repeated_delimiters_coalesce(parts in segments()) {
        let single = parts.join("/");
        let doubled = parts.join("//");
        prop_assert!(is_match(&single, &doubled).unwrap());
        let padded = format!("{}/", doubled);
        prop_assert!(is_match(&padded, &single).unwrap());
    }

    #[test]
    fn trailing_wildcard_matches_extensions(prefix in segments(), rest in segments()) {
        let pattern = format!("{}/*", prefix.join("/"));
        let permission = format!("{}/{}", prefix.join("/"), rest.join("/"));
        prop_assert!(is_match(&pattern, &permission).unwrap());
    }

    #[test]
    fn pattern_longer_than_permission_without_wildcards_fails(parts in segments(), extra in segment()) {
        let permission = parts.join("/");
        let pattern = format!("{}/{}", permission, extra);
        prop_assert!(!is_match(&pattern, &permission).unwrap());
    }

    #[test]
    fn match_any_is_logical_or(patterns in prop::collection::vec(permission(), 1..4), permission in permission()) {
        let expected = patterns.iter().any(|p| is_match(p, &permission).unwrap());
        prop_assert_eq!(is_match_any(patterns.as_slice(), &permission).unwrap(), expected);
    }

    #[test]
    fn root_scope_contains_everything(child in scope()) {
        prop_assert!(is_prefix_match("/", &child).unwrap());
        prop_assert!(is_prefix_match("/////", &child).unwrap());
    }

    #[test]
    fn scope_contains_its_descendants(parent in scope(), tail in prop::collection::vec(segment(), 0..4)) {
        let child = format!("{}/{}", parent, tail.join("/"));
        prop_assert!(is_prefix_match(&parent, &child).unwrap());
    }

    #[test]
    fn scope_match_ignores_ascii_case(parent in scope(), tail in prop::collection::vec(segment(), 0..4)) {
        let child = format!("{}/{}", parent.to_lowercase(), tail.join("/"));
        prop_assert!(is_prefix_match(&parent.to_uppercase(), &child).unwrap());
    }

    #[test]
    fn deeper_parent_never_contains_shallower_child(child in scope(), extra in segment()) {
        let parent = format!("{}/{}", child, extra);
        prop_assert!(!is_prefix_match(&parent, &child).unwrap());
    }

    #[test]
    fn prefix_match_any_is_logical_or(parents in prop::collection::vec(scope(), 1..4), child in scope()) {
        let expected = parents.iter().any(|p| is_prefix_match(p, &child).unwrap());
        prop_assert_eq!(is_prefix_match_any(parents.as_slice(), &child).unwrap(), expected);
    }
}
