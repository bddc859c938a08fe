use crate::decision::{self, Decision};
use crate::pattern::PatternError;
use crate::pattern_set::PatternSet;
use crate::resolve;
use importguard_types::{Location, RepoPath};

/// Files and imports in scope, as discovered by the repo adapter.
#[derive(Clone, Debug, Default)]
pub struct SourceModel {
    pub repo_root: RepoPath,
    pub files: Vec<SourceFile>,
}

#[derive(Clone, Debug, Default)]
pub struct SourceFile {
    /// Repo-relative path, used for finding locations.
    pub path: RepoPath,
    /// Path in the convention used by rule `path` patterns.
    pub logical_path: String,
    pub imports: Vec<ImportDecl>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportDecl {
    /// Unquoted import path, e.g. `github.com/acme/log`.
    pub path: String,
    /// Local name (`log`, `.` or `_`) when the import is renamed.
    pub alias: Option<String>,
    pub location: Option<Location>,
}

/// Maps repo paths to the logical paths rule `path` patterns are written against.
///
/// A path containing `marker` becomes `prefix` followed by the text after the first
/// occurrence of `marker`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SourceRoot {
    pub marker: String,
    pub prefix: String,
}

impl SourceRoot {
    /// A root that drops everything up to and including `marker`.
    pub fn strip(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            prefix: String::new(),
        }
    }

    pub fn mapped(marker: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            prefix: prefix.into(),
        }
    }

    /// `testdata/src/` is stripped; a GOPATH-style `/src/` keeps its `src/` prefix.
    pub fn defaults() -> Vec<Self> {
        vec![Self::strip("testdata/src/"), Self::mapped("/src/", "src/")]
    }

    /// The logical path for `path`, or `None` when the marker does not occur.
    /// An empty marker never occurs.
    pub fn apply(&self, path: &str) -> Option<String> {
        if self.marker.is_empty() {
            return None;
        }
        let idx = path.find(self.marker.as_str())?;
        Some(format!("{}{}", self.prefix, &path[idx + self.marker.len()..]))
    }
}

impl SourceModel {
    pub fn import_count(&self) -> usize {
        self.files.iter().map(|f| f.imports.len()).sum()
    }
}

/// One policy unit: which files it governs, which imports it forbids, and which of
/// those it exempts again.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Rule {
    pub applies_to: PatternSet,
    pub deny: PatternSet,
    pub allow: PatternSet,
}

impl Rule {
    pub fn new(applies_to: PatternSet, deny: PatternSet, allow: PatternSet) -> Self {
        Self {
            applies_to,
            deny,
            allow,
        }
    }

    pub fn governs(&self, file_path: &str) -> bool {
        self.applies_to.matches_any(file_path)
    }

    pub fn decide(&self, import: &str) -> Decision {
        decision::decide(Some(self), import)
    }
}

/// Which list of a rule a pattern came from, named as in the config file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatternList {
    Path,
    Deny,
    Allow,
}

impl PatternList {
    pub fn as_str(self) -> &'static str {
        match self {
            PatternList::Path => "path",
            PatternList::Deny => "deny",
            PatternList::Allow => "allow",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MalformedPattern {
    pub rule_index: usize,
    pub list: PatternList,
    pub pattern: String,
    pub error: PatternError,
}

/// Ordered rules. The first rule whose `applies_to` matches a file governs it.
///
/// Built once per run and only borrowed afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn resolve(&self, file_path: &str) -> Option<&Rule> {
        resolve::resolve(&self.rules, file_path)
    }

    pub fn decide(&self, file_path: &str, import: &str) -> Decision {
        decision::decide(self.resolve(file_path), import)
    }

    /// Every pattern that never matches, in rule order then list order.
    pub fn malformed_patterns(&self) -> Vec<MalformedPattern> {
        let mut out = Vec::new();
        for (rule_index, rule) in self.rules.iter().enumerate() {
            let lists = [
                (PatternList::Path, &rule.applies_to),
                (PatternList::Deny, &rule.deny),
                (PatternList::Allow, &rule.allow),
            ];
            for (list, set) in lists {
                for pattern in set {
                    if let Some(error) = pattern.error() {
                        out.push(MalformedPattern {
                            rule_index,
                            list,
                            pattern: pattern.as_str().to_string(),
                            error: error.clone(),
                        });
                    }
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::rule;

    #[test]
    fn rule_set_decides_through_first_governing_rule() {
        let rules = RuleSet::new(vec![
            rule(&["example/forbidden.go"], &["fmt"], &["os"]),
            rule(&["example/*.go"], &["internal/**"], &[]),
        ]);
        assert_eq!(rules.decide("example/forbidden.go", "fmt"), Decision::Forbidden);
        assert_eq!(rules.decide("example/other.go", "fmt"), Decision::Permitted);
        assert_eq!(
            rules.decide("example/other.go", "internal/sub/pkg"),
            Decision::Forbidden
        );
        assert_eq!(rules.decide("cmd/main.go", "internal/x"), Decision::Permitted);
    }

    #[test]
    fn malformed_patterns_are_listed_with_origin() {
        let rules = RuleSet::new(vec![
            rule(&["src/**"], &["fmt"], &[]),
            rule(&["a/**/b/**"], &["ok", "bad/[x"], &["x/**/y/**"]),
        ]);
        let malformed = rules.malformed_patterns();
        let summary: Vec<(usize, &str, &str)> = malformed
            .iter()
            .map(|m| (m.rule_index, m.list.as_str(), m.pattern.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (1, "path", "a/**/b/**"),
                (1, "deny", "bad/[x"),
                (1, "allow", "x/**/y/**"),
            ]
        );
    }

    #[test]
    fn source_root_strips_or_maps_marker() {
        let testdata = SourceRoot::strip("testdata/src/");
        assert_eq!(
            testdata.apply("pkg/testdata/src/example/a.go").as_deref(),
            Some("example/a.go")
        );
        assert_eq!(testdata.apply("cmd/main.go"), None);

        let gopath = SourceRoot::mapped("/src/", "src/");
        assert_eq!(
            gopath.apply("go/src/github.com/acme/a.go").as_deref(),
            Some("src/github.com/acme/a.go")
        );
        assert_eq!(SourceRoot::strip("").apply("a.go"), None);
    }

    #[test]
    fn import_count_sums_all_files() {
        let model = SourceModel {
            repo_root: RepoPath::new("."),
            files: vec![
                crate::test_support::source_file("a.go", &[("fmt", 3), ("os", 4)]),
                SourceFile::default(),
            ],
        };
        assert_eq!(model.import_count(), 2);
    }
}
