use crate::model::Rule;

/// Index of the first rule whose `applies_to` patterns match `file_path`.
///
/// Linear scan in list order; rule sets are config-file sized.
pub fn resolve_index(rules: &[Rule], file_path: &str) -> Option<usize> {
    rules.iter().position(|rule| rule.governs(file_path))
}

/// The rule governing `file_path`, or `None` when no rule applies.
///
/// First match wins: later rules are never consulted, even if they also match.
pub fn resolve<'a>(rules: &'a [Rule], file_path: &str) -> Option<&'a Rule> {
    resolve_index(rules, file_path).map(|i| &rules[i])
}
