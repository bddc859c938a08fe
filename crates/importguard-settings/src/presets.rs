use importguard_domain::model::RuleSet;
use importguard_domain::policy::{CheckPolicy, EffectiveConfig, FailOn};
use importguard_types::{Severity, ids};
use std::collections::BTreeMap;

pub const DEFAULT_PROFILE: &str = "strict";

/// Preset profiles are opinionated defaults. Rules always come from the repo config.
pub fn preset(profile: &str) -> Option<EffectiveConfig> {
    match profile {
        "strict" => Some(strict_profile()),
        "warn" => Some(warn_profile()),
        _ => None,
    }
}

fn strict_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "strict".to_string(),
        fail_on: FailOn::Error,
        max_findings: 200,
        checks: default_checks(Severity::Error),
        rules: RuleSet::default(),
        config_path: None,
    }
}

// Violations are reported but never fail the run.
fn warn_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "warn".to_string(),
        fail_on: FailOn::Error,
        max_findings: 200,
        checks: default_checks(Severity::Warning),
        rules: RuleSet::default(),
        config_path: None,
    }
}

fn default_checks(policy_severity: Severity) -> BTreeMap<String, CheckPolicy> {
    let mut m = BTreeMap::new();
    m.insert(
        ids::CHECK_IMPORTS_POLICY.to_string(),
        CheckPolicy::enabled(policy_severity),
    );
    m.insert(
        ids::CHECK_CONFIG_PATTERNS.to_string(),
        CheckPolicy::enabled(Severity::Warning),
    );
    m
}
