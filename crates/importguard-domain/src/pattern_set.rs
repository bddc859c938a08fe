use crate::pattern::Pattern;

/// An ordered list of patterns combined with logical OR.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PatternSet {
    patterns: Vec<Pattern>,
}

impl PatternSet {
    pub fn new(patterns: Vec<Pattern>) -> Self {
        Self { patterns }
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pattern> {
        self.patterns.iter()
    }

    /// The first pattern, in list order, that matches `candidate`.
    pub fn first_match(&self, candidate: &str) -> Option<&Pattern> {
        self.patterns.iter().find(|p| p.is_match(candidate))
    }

    /// True when any pattern matches. An empty set never matches.
    pub fn matches_any(&self, candidate: &str) -> bool {
        self.first_match(candidate).is_some()
    }
}

impl<S: Into<String>> FromIterator<S> for PatternSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Pattern::new).collect())
    }
}

impl<'a> IntoIterator for &'a PatternSet {
    type Item = &'a Pattern;
    type IntoIter = std::slice::Iter<'a, Pattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Decide whether `candidate` matches any of the raw `patterns`.
pub fn match_any<S: AsRef<str>>(candidate: &str, patterns: &[S]) -> bool {
    patterns
        .iter()
        .any(|p| crate::pattern::match_one(candidate, p.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_never_matches() {
        let empty: [&str; 0] = [];
        assert!(!match_any("anything", &empty));
        assert!(!match_any("", &empty));
        assert!(!PatternSet::default().matches_any("fmt"));
    }

    #[test]
    fn any_pattern_in_list_matches() {
        let patterns = ["github.com/other/*", "github.com/example/*"];
        assert!(match_any("github.com/example/pkg", &patterns));
        assert!(!match_any("github.com/third/pkg", &patterns));
    }

    #[test]
    fn first_match_follows_list_order() {
        let set: PatternSet = ["github.com/**", "github.com/acme/*"].into_iter().collect();
        let hit = set.first_match("github.com/acme/log").expect("match");
        assert_eq!(hit.as_str(), "github.com/**");
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn malformed_entries_do_not_hide_valid_ones() {
        let set: PatternSet = ["a/**/b/**", "a/*"].into_iter().collect();
        assert!(set.matches_any("a/x"));
        assert!(!set.matches_any("a/x/b/y"));
    }
}
