//! Config parsing and profile/preset resolution.
//!
//! This crate is IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{CheckConfig, FilesConfig, ImportguardConfigV1, RuleConfig, SourceRootConfig};
pub use resolve::{FilesPolicy, Overrides, ResolvedConfig};

pub const SCHEMA_CONFIG_V1: &str = "importguard.config.v1";

/// Parse `importguard.yaml` into a typed model. Blank input yields the default config.
pub fn parse_config_yaml(input: &str) -> anyhow::Result<ImportguardConfigV1> {
    if input.trim().is_empty() {
        return Ok(ImportguardConfigV1::default());
    }
    let cfg: ImportguardConfigV1 = serde_yaml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config used by the engine (profile + overrides + rules).
pub fn resolve_config(
    cfg: ImportguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}

/// JSON Schema of the config file.
pub fn config_schema() -> anyhow::Result<serde_json::Value> {
    let schema = schemars::schema_for!(ImportguardConfigV1);
    Ok(serde_json::to_value(schema)?)
}
