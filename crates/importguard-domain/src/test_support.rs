use crate::model::{ImportDecl, Rule, RuleSet, SourceFile, SourceModel};
use crate::pattern_set::PatternSet;
use crate::policy::{CheckPolicy, EffectiveConfig, FailOn};
use importguard_types::{Location, RepoPath, Severity, ids};
use std::collections::BTreeMap;

pub fn rule(applies_to: &[&str], deny: &[&str], allow: &[&str]) -> Rule {
    Rule::new(set(applies_to), set(deny), set(allow))
}

fn set(patterns: &[&str]) -> PatternSet {
    patterns.iter().copied().collect()
}

pub fn source_file(path: &str, imports: &[(&str, u32)]) -> SourceFile {
    SourceFile {
        path: RepoPath::new(path),
        logical_path: path.to_string(),
        imports: imports
            .iter()
            .map(|(import, line)| ImportDecl {
                path: import.to_string(),
                alias: None,
                location: Some(Location {
                    path: RepoPath::new(path),
                    line: Some(*line),
                    col: Some(2),
                }),
            })
            .collect(),
    }
}

pub fn source_model(files: Vec<SourceFile>) -> SourceModel {
    SourceModel {
        repo_root: RepoPath::new("."),
        files,
    }
}

pub fn config(rules: RuleSet) -> EffectiveConfig {
    let mut checks = BTreeMap::new();
    checks.insert(
        ids::CHECK_IMPORTS_POLICY.to_string(),
        CheckPolicy::enabled(Severity::Error),
    );
    checks.insert(
        ids::CHECK_CONFIG_PATTERNS.to_string(),
        CheckPolicy::enabled(Severity::Warning),
    );
    EffectiveConfig {
        profile: "test".to_string(),
        fail_on: FailOn::Error,
        max_findings: 200,
        checks,
        rules,
        config_path: Some(RepoPath::new("importguard.yaml")),
    }
}
