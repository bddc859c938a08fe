//! The `check` use case: evaluate policy and produce a report.

use anyhow::Context;
use camino::Utf8Path;
use importguard_domain::model::SourceModel;
use importguard_repo::ScanOptions;
use importguard_settings::{ImportguardConfigV1, Overrides, ResolvedConfig};
use importguard_types::{ImportguardReport, RepoPath, SCHEMA_REPORT_V1, ToolMeta, Verdict};
use time::OffsetDateTime;

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Repository root path.
    pub repo_root: &'a Utf8Path,
    /// Config file contents; `None` when no config file exists.
    pub config_text: Option<&'a str>,
    /// Repo-relative path of the config file, used to locate config findings.
    pub config_path: RepoPath,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    /// The generated report.
    pub report: ImportguardReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the check use case: parse config, scan sources, evaluate policy, produce report.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    let cfg = match input.config_text {
        Some(text) => importguard_settings::parse_config_yaml(text).context("parse config")?,
        None => {
            tracing::info!(
                config = %input.config_path,
                "no config file found; no import policy is configured"
            );
            ImportguardConfigV1::default()
        }
    };

    let mut resolved = importguard_settings::resolve_config(cfg, input.overrides.clone())
        .context("resolve config")?;
    if input.config_text.is_some() {
        resolved.effective.config_path = Some(input.config_path.clone());
    }
    tracing::debug!(
        profile = %resolved.effective.profile,
        rules = resolved.effective.rules.len(),
        "resolved config"
    );

    // Without a config nothing is governed, so sources are not read at all.
    let model = if input.config_text.is_some() {
        let scan = ScanOptions {
            include: resolved.files.include.clone(),
            exclude: resolved.files.exclude.clone(),
            source_roots: resolved.files.source_roots.clone(),
        };
        importguard_repo::build_source_model(input.repo_root, &scan)
            .context("build source model")?
    } else {
        SourceModel {
            repo_root: RepoPath::from(input.repo_root),
            files: Vec::new(),
        }
    };

    let domain_report = importguard_domain::evaluate(&model, &resolved.effective);
    tracing::debug!(
        findings = domain_report.data.findings_total,
        errors = domain_report.counts.error,
        warnings = domain_report.counts.warning,
        "evaluated import policy"
    );

    let finished_at = OffsetDateTime::now_utc();

    let report = ImportguardReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "importguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        verdict: domain_report.verdict,
        findings: domain_report.findings,
        data: domain_report.data,
    };

    Ok(CheckOutput {
        report,
        resolved_config: resolved,
    })
}

/// Map verdict to exit code: 0 = pass/warn, 2 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Warn => 0,
        Verdict::Fail => 2,
    }
}
