//! Pure import policy evaluation (no IO).
//!
//! Input: a source model (files and their imports) constructed elsewhere, plus a frozen
//! [`policy::EffectiveConfig`] holding the compiled rule set.
//! Output: findings + verdict + summary data.

#![forbid(unsafe_code)]

pub mod decision;
pub mod fingerprint;
pub mod model;
pub mod pattern;
pub mod pattern_set;
pub mod policy;
pub mod report;
pub mod resolve;

mod checks;
mod engine;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use decision::{Decision, decide};
pub use engine::evaluate;
pub use model::{Rule, RuleSet};
pub use pattern::{Pattern, PatternError, PatternKind, match_one};
pub use pattern_set::{PatternSet, match_any};
pub use resolve::resolve;
