//! Explain registry for checks and codes.
//!
//! Maps check IDs and codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a check or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check/code.
    pub title: &'static str,
    /// What the check does and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after examples.
    pub examples: ExamplePair,
}

/// Before and after examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Fence language for both snippets (`go`, `yaml`).
    pub language: &'static str,
    /// Input that would trigger a finding.
    pub before: &'static str,
    /// Input that passes the check.
    pub after: &'static str,
}

/// Look up an explanation by check_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        ids::CHECK_IMPORTS_POLICY => Some(explain_imports_policy()),
        ids::CHECK_CONFIG_PATTERNS => Some(explain_config_patterns()),

        ids::CODE_IMPORT_NOT_ALLOWED => Some(explain_import_not_allowed()),
        ids::CODE_MALFORMED_PATTERN => Some(explain_malformed_pattern()),

        _ => None,
    }
}

/// List all known check IDs.
pub fn all_check_ids() -> &'static [&'static str] {
    &[ids::CHECK_IMPORTS_POLICY, ids::CHECK_CONFIG_PATTERNS]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[ids::CODE_IMPORT_NOT_ALLOWED, ids::CODE_MALFORMED_PATTERN]
}

// --- Check-level explanations ---

fn explain_imports_policy() -> Explanation {
    Explanation {
        title: "Import Policy",
        description: "\
Checks every import statement against the rules in `importguard.yaml`.

Each rule selects files with its `path` patterns and lists `deny` and `allow`
import patterns. The first rule whose `path` matches a file governs that file;
later rules are never consulted for it.

An import is reported only when it matches a `deny` pattern and no `allow`
pattern. Imports that match neither list are permitted, and files that no rule
selects are not governed at all.",
        remediation: "\
Remove the import or move the code into a package that is allowed to depend on it.

If the dependency is intended, add an `allow` entry to the governing rule.
`allow` only overrides `deny`; it never restricts anything on its own.",
        examples: ExamplePair {
            language: "yaml",
            before: r#"rules:
  - path: ["internal/domain/**"]
    deny: ["net/http"]"#,
            after: r#"rules:
  - path: ["internal/domain/**"]
    deny: ["net/http", "github.com/acme/**"]
    allow: ["github.com/acme/errors"]"#,
        },
    }
}

fn explain_config_patterns() -> Explanation {
    Explanation {
        title: "Config Patterns",
        description: "\
Reports patterns in `importguard.yaml` that can never match.

A pattern may contain at most one `**`, and its single-level glob parts must be
well formed (for example, every `[` needs a closing `]`). A malformed pattern is
ignored during evaluation, so the rule enforces less than it appears to.

Set `strict_patterns: true` to turn these warnings into a configuration error.",
        remediation: "\
Rewrite the pattern with a single `**` or split it into several patterns.",
        examples: ExamplePair {
            language: "yaml",
            before: r#"deny: ["github.com/**/internal/**"]"#,
            after: r#"deny: ["github.com/acme/internal/**", "github.com/other/internal/**"]"#,
        },
    }
}

// --- Code-level explanations ---

fn explain_import_not_allowed() -> Explanation {
    Explanation {
        title: "Import Not Allowed",
        description: "\
The file imports a package matched by a `deny` pattern of the rule governing the
file, and no `allow` pattern of that rule exempts it.

Pattern forms:
- `fmt` matches exactly `fmt`
- `github.com/acme/*` matches one path segment (`github.com/acme/log`, not `github.com/acme/log/v2`)
- `github.com/acme/**` matches any depth below `github.com/acme/`",
        remediation: "\
Drop the import, or exempt it with an `allow` pattern in the same rule.",
        examples: ExamplePair {
            language: "go",
            before: r#"import (
	"fmt"
	"os"
)"#,
            after: r#"import (
	"os"
)"#,
        },
    }
}

fn explain_malformed_pattern() -> Explanation {
    Explanation {
        title: "Malformed Pattern",
        description: "\
A pattern could not be interpreted and never matches anything.",
        remediation: "\
Use at most one `**` per pattern and close every `[` character class.",
        examples: ExamplePair {
            language: "yaml",
            before: r#"path: ["src/**/gen/**/*.go"]"#,
            after: r#"path: ["src/gen/**", "src/api/gen/**"]"#,
        },
    }
}
