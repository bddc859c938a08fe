use crate::model::{FilesConfig, ImportguardConfigV1, RuleConfig, SourceRootConfig};
use crate::presets;
use anyhow::Context;
use globset::Glob;
use importguard_domain::model::{Rule, RuleSet, SourceRoot};
use importguard_domain::pattern_set::PatternSet;
use importguard_domain::policy::{CheckPolicy, EffectiveConfig, FailOn};
use importguard_types::Severity;

pub const DEFAULT_INCLUDE: &str = "**/*.go";

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub max_findings: Option<u32>,
    pub strict_patterns: Option<bool>,
}

/// Which files to scan and how to derive their logical paths.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilesPolicy {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub source_roots: Vec<SourceRoot>,
}

impl Default for FilesPolicy {
    fn default() -> Self {
        Self {
            include: vec![DEFAULT_INCLUDE.to_string()],
            exclude: Vec::new(),
            source_roots: SourceRoot::defaults(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
    pub files: FilesPolicy,
}

pub fn resolve_config(
    cfg: ImportguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| presets::DEFAULT_PROFILE.to_string());

    let mut effective = presets::preset(&profile)
        .with_context(|| format!("unknown profile: {profile} (expected 'strict' or 'warn')"))?;

    // max findings
    if let Some(mf) = overrides.max_findings.or(cfg.max_findings) {
        effective.max_findings = mf as usize;
    }

    // per-check overrides
    for (check_id, cc) in cfg.checks.iter() {
        let entry = effective
            .checks
            .entry(check_id.clone())
            .or_insert_with(CheckPolicy::disabled);

        if let Some(enabled) = cc.enabled {
            entry.enabled = enabled;
        }
        if let Some(sev) = cc.severity.as_deref() {
            entry.severity =
                parse_severity(sev).with_context(|| format!("invalid severity for {check_id}"))?;
        }
    }

    // fail_on override from config
    if let Some(fail_on_s) = cfg.fail_on.as_deref() {
        effective.fail_on = parse_fail_on(fail_on_s)?;
    }

    let strict_patterns = overrides
        .strict_patterns
        .or(cfg.strict_patterns)
        .unwrap_or(false);
    effective.rules = compile_rules(&cfg.rules, strict_patterns)?;

    let files = resolve_files(cfg.files)?;

    Ok(ResolvedConfig { effective, files })
}

fn compile_rules(rules: &[RuleConfig], strict_patterns: bool) -> anyhow::Result<RuleSet> {
    let compiled = RuleSet::new(
        rules
            .iter()
            .map(|r| {
                Rule::new(
                    compile_list(&r.path),
                    compile_list(&r.deny),
                    compile_list(&r.allow),
                )
            })
            .collect(),
    );

    for m in compiled.malformed_patterns() {
        if strict_patterns {
            anyhow::bail!(
                "rules[{}].{}: {} (strict_patterns is enabled)",
                m.rule_index,
                m.list.as_str(),
                m.error
            );
        }
        tracing::warn!(
            rule_index = m.rule_index,
            list = m.list.as_str(),
            pattern = %m.pattern,
            "malformed pattern never matches: {}",
            m.error
        );
    }

    Ok(compiled)
}

fn compile_list(patterns: &[String]) -> PatternSet {
    patterns.iter().cloned().collect()
}

fn resolve_files(files: FilesConfig) -> anyhow::Result<FilesPolicy> {
    let defaults = FilesPolicy::default();
    let policy = FilesPolicy {
        include: files.include.unwrap_or(defaults.include),
        exclude: files.exclude,
        source_roots: match files.source_roots {
            Some(roots) => roots.into_iter().map(source_root).collect(),
            None => defaults.source_roots,
        },
    };
    validate_globs("files.include", &policy.include)?;
    validate_globs("files.exclude", &policy.exclude)?;
    Ok(policy)
}

fn source_root(cfg: SourceRootConfig) -> SourceRoot {
    match cfg {
        SourceRootConfig::Marker(marker) => SourceRoot::strip(marker),
        SourceRootConfig::Mapped { marker, prefix } => SourceRoot::mapped(marker, prefix),
    }
}

fn validate_globs(key: &str, patterns: &[String]) -> anyhow::Result<()> {
    for pattern in patterns {
        Glob::new(pattern).with_context(|| format!("invalid glob in {key}: {pattern}"))?;
    }
    Ok(())
}

fn parse_severity(v: &str) -> anyhow::Result<Severity> {
    match v {
        "info" => Ok(Severity::Info),
        "warning" | "warn" => Ok(Severity::Warning),
        "error" => Ok(Severity::Error),
        other => anyhow::bail!("unknown severity: {other} (expected info|warning|error)"),
    }
}

fn parse_fail_on(v: &str) -> anyhow::Result<FailOn> {
    match v {
        "error" => Ok(FailOn::Error),
        "warning" | "warn" => Ok(FailOn::Warning),
        other => anyhow::bail!("unknown fail_on: {other} (expected error|warning)"),
    }
}
