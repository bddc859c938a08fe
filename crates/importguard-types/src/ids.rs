//! Stable identifiers for checks and finding codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks
pub const CHECK_IMPORTS_POLICY: &str = "imports.policy";
pub const CHECK_CONFIG_PATTERNS: &str = "config.patterns";

// Codes: imports.policy
pub const CODE_IMPORT_NOT_ALLOWED: &str = "import_not_allowed";

// Codes: config.patterns
pub const CODE_MALFORMED_PATTERN: &str = "malformed_pattern";

// Tool-level
pub const CHECK_TOOL_RUNTIME: &str = "tool.runtime";
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";
