use super::{import_policy, malformed_patterns};
use crate::model::RuleSet;
use crate::policy::CheckPolicy;
use crate::test_support::{config, rule, source_file, source_model};
use importguard_types::{Severity, ids};

#[test]
fn import_policy_reports_forbidden_imports_with_data() {
    let cfg = config(RuleSet::new(vec![rule(
        &["example/forbidden.go"],
        &["fmt", "github.com/forbidden/**"],
        &["os"],
    )]));
    let model = source_model(vec![source_file(
        "example/forbidden.go",
        &[("fmt", 4), ("os", 5), ("github.com/forbidden/sub/pkg", 6)],
    )]);

    let mut out = Vec::new();
    import_policy::run(&model, &cfg, &mut out);

    assert_eq!(out.len(), 2);
    let first = &out[0];
    assert_eq!(first.check_id, ids::CHECK_IMPORTS_POLICY);
    assert_eq!(first.code, ids::CODE_IMPORT_NOT_ALLOWED);
    assert_eq!(first.severity, Severity::Error);
    assert_eq!(
        first.message,
        "import \"fmt\" is not allowed in this file based on configuration"
    );
    assert_eq!(first.data["import"], "fmt");
    assert_eq!(first.data["file"], "example/forbidden.go");
    assert_eq!(first.data["rule_index"], 0);
    assert_eq!(first.data["denied_by"], "fmt");
    assert_eq!(
        first.fingerprint.as_deref(),
        Some("3a94d841a27a95d2933a0883f6dca10bae649c333e563cbfaa0b0a20e8b46dd0")
    );

    let second = &out[1];
    assert_eq!(second.data["denied_by"], "github.com/forbidden/**");
    assert_eq!(second.location.as_ref().and_then(|l| l.line), Some(6));
}

#[test]
fn import_policy_skips_files_without_rule() {
    let cfg = config(RuleSet::new(vec![rule(&["example/*.go"], &["fmt"], &[])]));
    let model = source_model(vec![source_file("cmd/main.go", &[("fmt", 3)])]);

    let mut out = Vec::new();
    import_policy::run(&model, &cfg, &mut out);
    assert!(out.is_empty());
}

#[test]
fn import_policy_uses_first_governing_rule_only() {
    let cfg = config(RuleSet::new(vec![
        rule(&["example/**"], &["os"], &[]),
        rule(&["example/*.go"], &["fmt"], &[]),
    ]));
    let model = source_model(vec![source_file("example/a.go", &[("fmt", 3), ("os", 4)])]);

    let mut out = Vec::new();
    import_policy::run(&model, &cfg, &mut out);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].data["import"], "os");
}

#[test]
fn import_policy_matches_logical_path_and_reports_repo_path() {
    let cfg = config(RuleSet::new(vec![rule(&["example/*.go"], &["fmt"], &[])]));
    let mut file = source_file("testdata/src/example/a.go", &[("fmt", 3)]);
    file.logical_path = "example/a.go".to_string();
    let model = source_model(vec![file]);

    let mut out = Vec::new();
    import_policy::run(&model, &cfg, &mut out);
    assert_eq!(out.len(), 1);
    let loc = out[0].location.as_ref().expect("location");
    assert_eq!(loc.path.as_str(), "testdata/src/example/a.go");
    assert_eq!(out[0].data["file"], "example/a.go");
}

#[test]
fn disabled_checks_emit_nothing() {
    let mut cfg = config(RuleSet::new(vec![rule(&["*.go"], &["fmt"], &["x/**/y/**"])]));
    cfg.checks
        .insert(ids::CHECK_IMPORTS_POLICY.to_string(), CheckPolicy::disabled());
    cfg.checks
        .insert(ids::CHECK_CONFIG_PATTERNS.to_string(), CheckPolicy::disabled());
    let model = source_model(vec![source_file("a.go", &[("fmt", 3)])]);

    let mut out = Vec::new();
    import_policy::run(&model, &cfg, &mut out);
    malformed_patterns::run(&cfg, &mut out);
    assert!(out.is_empty());
}

#[test]
fn malformed_patterns_are_reported_against_config_file() {
    let cfg = config(RuleSet::new(vec![
        rule(&["*.go"], &["fmt"], &[]),
        rule(&["a/**/b/**"], &["pkg/[abc"], &[]),
    ]));

    let mut out = Vec::new();
    malformed_patterns::run(&cfg, &mut out);

    assert_eq!(out.len(), 2);
    assert!(out.iter().all(|f| f.severity == Severity::Warning));
    assert!(out[0].message.starts_with("rules[1].path: "));
    assert!(out[0].message.ends_with("; it never matches"));
    assert_eq!(out[1].data["list"], "deny");
    assert_eq!(out[1].data["pattern"], "pkg/[abc");
    let loc = out[0].location.as_ref().expect("location");
    assert_eq!(loc.path.as_str(), "importguard.yaml");
    assert_eq!(loc.line, None);
}

#[test]
fn malformed_pattern_severity_follows_policy() {
    let mut cfg = config(RuleSet::new(vec![rule(&["a/**/b/**"], &[], &[])]));
    cfg.checks.insert(
        ids::CHECK_CONFIG_PATTERNS.to_string(),
        CheckPolicy::enabled(Severity::Error),
    );

    let mut out = Vec::new();
    malformed_patterns::run(&cfg, &mut out);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].severity, Severity::Error);
}
