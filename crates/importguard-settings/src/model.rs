use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `importguard.yaml` schema v1.
///
/// This is a *user-facing* config model: unknown top-level keys are ignored so
/// forward-compat is easy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ImportguardConfigV1 {
    /// Optional schema string for tooling (`importguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// `strict` (default) or `warn`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// When to fail the check: `error` (default) or `warning`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_on: Option<String>,

    /// How many findings to emit before truncating the list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_findings: Option<u32>,

    /// Reject the whole config when a rule pattern is malformed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strict_patterns: Option<bool>,

    #[serde(default)]
    pub files: FilesConfig,

    /// Map of check_id -> config.
    #[serde(default)]
    pub checks: BTreeMap<String, CheckConfig>,

    /// Ordered rules; the first rule whose `path` matches a file governs it.
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FilesConfig {
    /// Globs selecting source files. Defaults to `**/*.go`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,

    #[serde(default)]
    pub exclude: Vec<String>,

    /// Path markers deciding a file's logical path. The first marker a path contains
    /// wins. A plain string drops everything up to and including the marker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_roots: Option<Vec<SourceRootConfig>>,
}

/// One `files.source_roots` entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum SourceRootConfig {
    /// `"testdata/src/"`: the logical path is the text after the marker.
    Marker(String),
    /// `{ marker: "/src/", prefix: "src/" }`: the text after the marker, behind `prefix`.
    Mapped {
        marker: String,
        #[serde(default)]
        prefix: String,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CheckConfig {
    /// Override preset enable/disable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Override preset severity: `info`, `warning`, `error`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RuleConfig {
    /// Logical file paths this rule governs.
    #[serde(default, alias = "applies_to")]
    pub path: Vec<String>,

    /// Import paths forbidden in governed files.
    #[serde(default)]
    pub deny: Vec<String>,

    /// Exemptions from `deny`.
    #[serde(default)]
    pub allow: Vec<String>,
}
