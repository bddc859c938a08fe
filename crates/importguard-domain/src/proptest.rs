//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Literal, single-level and recursive pattern matching
//! - First-rule-wins resolution and deny/allow decisions
//! - Findings ordering determinism

use crate::decision::{Decision, decide};
use crate::engine::evaluate;
use crate::model::RuleSet;
use crate::pattern::match_one;
use crate::pattern_set::match_any;
use crate::resolve::resolve_index;
use crate::test_support::{config, rule, source_file, source_model};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn arb_segment() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_.-]{0,11}").unwrap()
}

/// Slash-separated paths with no glob metacharacters.
fn arb_path() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_segment(), 1..6).prop_map(|segments| segments.join("/"))
}

// ============================================================================
// Property tests: pattern matching
// ============================================================================

proptest! {
    /// A pattern without metacharacters matches exactly itself.
    #[test]
    fn literal_matches_exactly(a in arb_path(), b in arb_path()) {
        prop_assert!(match_one(&a, &a));
        prop_assert_eq!(match_one(&b, &a), a == b);
    }

    /// Any string, metacharacters included, matches itself.
    #[test]
    fn every_pattern_matches_its_own_text(s in "[a-z/*?\\[\\]]{0,16}") {
        prop_assert!(match_one(&s, &s));
    }

    #[test]
    fn empty_list_never_matches(candidate in ".*") {
        let empty: [&str; 0] = [];
        prop_assert!(!match_any(&candidate, &empty));
    }

    /// `*` covers exactly one segment.
    #[test]
    fn single_wildcard_does_not_cross_separator(
        prefix in arb_path(),
        seg in arb_segment(),
        extra in arb_segment(),
    ) {
        let pattern = format!("{prefix}/*");
        let child = format!("{prefix}/{seg}");
        let grandchild = format!("{prefix}/{seg}/{extra}");
        prop_assert!(match_one(&child, &pattern), "{} should match {}", child, pattern);
        prop_assert!(
            !match_one(&grandchild, &pattern),
            "{} should not match {}",
            grandchild,
            pattern
        );
    }

    /// `prefix/**` reaches any depth below the prefix.
    #[test]
    fn recursive_wildcard_reaches_nested_segments(
        prefix in arb_path(),
        rest in arb_path(),
    ) {
        let pattern = format!("{prefix}/**");
        let nested = format!("{prefix}/{rest}");
        prop_assert!(match_one(&nested, &pattern), "{} should match {}", nested, pattern);
    }

    /// Patterns with two `**` are inert, even against matching-looking input.
    #[test]
    fn double_recursive_never_matches(a in arb_segment(), b in arb_segment(), rest in arb_path()) {
        let pattern = format!("{a}/**/{b}/**");
        let candidate = format!("{a}/x/{b}/{rest}");
        prop_assert!(
            !match_one(&candidate, &pattern),
            "{} should never match {}",
            candidate,
            pattern
        );
    }

    /// With literal head and tail, a whole-string prefix and suffix hit is a match,
    /// even when head and tail overlap in the candidate.
    #[test]
    fn recursive_literal_parts_test_whole_candidate(
        candidate in "[a-z/.]{0,10}",
        head in "[a-z/]{0,3}",
        tail in "[a-z/.]{0,3}",
    ) {
        let pattern = format!("{head}**{tail}");
        let expected = candidate.starts_with(&head) && candidate.ends_with(&tail);
        prop_assert_eq!(match_one(&candidate, &pattern), expected);
    }

    /// `head/**/tail` governs direct children as well as deeper ones.
    #[test]
    fn recursive_suffix_reaches_direct_children(
        head in arb_segment(),
        middle in prop::collection::vec(arb_segment(), 0..3),
        tail in arb_segment(),
    ) {
        let pattern = format!("{head}/**/{tail}");
        let mut segments = vec![head.clone()];
        segments.extend(middle);
        segments.push(tail.clone());
        let candidate = segments.join("/");
        prop_assert!(match_one(&candidate, &pattern), "{} should match {}", candidate, pattern);
    }
}

// ============================================================================
// Property tests: resolution and decision
// ============================================================================

proptest! {
    /// When several rules govern a file, the earliest one is chosen.
    #[test]
    fn first_governing_rule_wins(file in arb_path(), filler in 0usize..4) {
        let mut rules = Vec::new();
        for i in 0..filler {
            let elsewhere = format!("NOMATCH{i}/**");
            rules.push(rule(&[elsewhere.as_str()], &[], &[]));
        }
        rules.push(rule(&[file.as_str()], &[], &[]));
        rules.push(rule(&["**"], &[], &[]));

        prop_assert_eq!(resolve_index(&rules, &file), Some(filler));
    }

    /// `allow` overrides `deny` for the same import.
    #[test]
    fn allow_overrides_deny(import in arb_path()) {
        let denied = rule(&["**"], &[import.as_str()], &[]);
        let allowed = rule(&["**"], &[import.as_str()], &[import.as_str()]);
        prop_assert_eq!(decide(Some(&denied), &import), Decision::Forbidden);
        prop_assert_eq!(decide(Some(&allowed), &import), Decision::Permitted);
    }

    #[test]
    fn no_rule_permits(import in ".*") {
        prop_assert_eq!(decide(None, &import), Decision::Permitted);
    }
}

// ============================================================================
// Property tests: findings ordering determinism
// ============================================================================

proptest! {
    /// Reordering the input files does not change the report.
    #[test]
    fn findings_are_independent_of_file_order(
        files in prop::collection::btree_map(arb_path(), prop::collection::vec((arb_path(), 1u32..50), 0..5), 0..6),
    ) {
        let cfg = config(RuleSet::new(vec![rule(&["**"], &["**"], &["a*"])]));
        let build = |reverse: bool| {
            let mut list: Vec<_> = files
                .iter()
                .map(|(path, imports)| {
                    let imports: Vec<(&str, u32)> =
                        imports.iter().map(|(i, l)| (i.as_str(), *l)).collect();
                    source_file(path, &imports)
                })
                .collect();
            if reverse {
                list.reverse();
            }
            source_model(list)
        };

        let forward = evaluate(&build(false), &cfg);
        let backward = evaluate(&build(true), &cfg);
        prop_assert_eq!(forward.findings, backward.findings);
        prop_assert_eq!(forward.verdict, backward.verdict);
    }
}
