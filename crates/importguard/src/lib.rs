//! Import policy engine for Go source trees.
//!
//! This crate re-exports the pure evaluation API. Configuration loading, source
//! scanning and rendering live in the `importguard-settings`, `importguard-repo` and
//! `importguard-render` crates.
//!
//! ```
//! use importguard::{Decision, PatternSet, Rule, RuleSet};
//!
//! let rules = RuleSet::new(vec![Rule::new(
//!     ["internal/*.go"].into_iter().collect::<PatternSet>(),
//!     ["github.com/acme/**"].into_iter().collect(),
//!     ["github.com/acme/log"].into_iter().collect(),
//! )]);
//!
//! assert_eq!(rules.decide("internal/a.go", "github.com/acme/db"), Decision::Forbidden);
//! assert_eq!(rules.decide("internal/a.go", "github.com/acme/log"), Decision::Permitted);
//! assert_eq!(rules.decide("cmd/main.go", "github.com/acme/db"), Decision::Permitted);
//! ```

#![forbid(unsafe_code)]

pub use importguard_domain::model::{
    ImportDecl, MalformedPattern, PatternList, SourceFile, SourceModel,
};
pub use importguard_domain::policy::{CheckPolicy, EffectiveConfig, FailOn};
pub use importguard_domain::report::{DomainReport, SeverityCounts};
pub use importguard_domain::{
    Decision, Pattern, PatternError, PatternKind, PatternSet, Rule, RuleSet, decide, evaluate,
    match_any, match_one, resolve,
};
pub use importguard_types::{Finding, Location, RepoPath, Severity, Verdict};
