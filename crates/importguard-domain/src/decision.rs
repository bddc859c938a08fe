use crate::model::Rule;

/// Outcome of evaluating one import against the rule governing its file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Decision {
    Permitted,
    Forbidden,
}

impl Decision {
    pub fn is_forbidden(self) -> bool {
        self == Decision::Forbidden
    }
}

/// Evaluate `import` under `rule`.
///
/// `allow` overrides `deny`; it is not a permission list on its own. Imports that match
/// no `deny` pattern are permitted, and so is everything in files with no rule.
pub fn decide(rule: Option<&Rule>, import: &str) -> Decision {
    let Some(rule) = rule else {
        return Decision::Permitted;
    };

    if !rule.deny.matches_any(import) {
        return Decision::Permitted;
    }

    if rule.allow.matches_any(import) {
        Decision::Permitted
    } else {
        Decision::Forbidden
    }
}
