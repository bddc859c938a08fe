//! Single-pattern matching for file paths and import paths.
//!
//! The pattern language is a narrow subset of shell globs tailored to package paths:
//!
//! - `fmt`: literal, matches only the identical string
//! - `github.com/acme/*`: `*`, `?` and `[...]` match within one `/`-separated segment
//! - `github.com/acme/**`: split at `**` into a head and a tail; the candidate must start
//!   with the head and end with the tail, both tested over the whole string
//!
//! The shape is decided once, when the pattern is compiled. A pattern that cannot be
//! interpreted compiles to an invalid pattern that never matches.

use globset::{GlobBuilder, GlobMatcher};
use std::fmt;

const RECURSIVE: &str = "**";

/// Why a pattern string could not be interpreted.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("pattern `{pattern}` contains more than one `**`")]
    MultipleRecursive { pattern: String },

    #[error("pattern `{pattern}` is not a valid glob: {reason}")]
    InvalidGlob { pattern: String, reason: String },
}

/// Structural shape of a compiled pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatternKind {
    Literal,
    Glob,
    Recursive,
    Invalid,
}

/// A compiled pattern. Cheap to match repeatedly, immutable once built.
#[derive(Clone, Debug)]
pub struct Pattern {
    source: String,
    shape: Shape,
}

#[derive(Clone, Debug)]
enum Shape {
    Literal,
    Glob(GlobMatcher),
    Recursive { head: Part, tail: Part },
    Invalid(PatternError),
}

/// One side of a recursive pattern.
#[derive(Clone, Debug)]
enum Part {
    Literal(String),
    Glob(GlobMatcher),
}

impl Pattern {
    /// Compile `source`. Malformed patterns are kept, but never match; see [`Pattern::error`].
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let shape = match classify(&source) {
            Ok(shape) => shape,
            Err(err) => Shape::Invalid(err),
        };
        Self { source, shape }
    }

    /// Compile `source`, rejecting malformed patterns.
    pub fn parse(source: impl Into<String>) -> Result<Self, PatternError> {
        let pattern = Self::new(source);
        match pattern.shape {
            Shape::Invalid(err) => Err(err),
            _ => Ok(pattern),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn kind(&self) -> PatternKind {
        match self.shape {
            Shape::Literal => PatternKind::Literal,
            Shape::Glob(_) => PatternKind::Glob,
            Shape::Recursive { .. } => PatternKind::Recursive,
            Shape::Invalid(_) => PatternKind::Invalid,
        }
    }

    /// The reason this pattern never matches, if it is malformed.
    pub fn error(&self) -> Option<&PatternError> {
        match &self.shape {
            Shape::Invalid(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_match(&self, candidate: &str) -> bool {
        // Exact equality is tried for every shape, so glob metacharacters used as plain
        // text still match themselves.
        if self.source == candidate {
            return true;
        }

        match &self.shape {
            Shape::Literal | Shape::Invalid(_) => false,
            Shape::Glob(glob) => glob.is_match(candidate),
            // Head and tail are tested against the whole candidate, so they may overlap.
            Shape::Recursive { head, tail } => {
                head.matches_start_of(candidate) && tail.matches_end_of(candidate)
            }
        }
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for Pattern {}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl Part {
    /// A part that is not a valid glob is taken as literal text.
    fn compile(pattern: &str, text: &str) -> Self {
        if has_glob_meta(text)
            && let Ok(glob) = single_level_glob(pattern, text)
        {
            return Part::Glob(glob);
        }
        Part::Literal(text.to_string())
    }

    fn matches_start_of(&self, candidate: &str) -> bool {
        match self {
            Part::Literal(prefix) => candidate.starts_with(prefix.as_str()),
            Part::Glob(glob) => boundaries(candidate).any(|i| glob.is_match(&candidate[..i])),
        }
    }

    fn matches_end_of(&self, candidate: &str) -> bool {
        match self {
            Part::Literal(suffix) => candidate.ends_with(suffix.as_str()),
            Part::Glob(glob) => boundaries(candidate).any(|i| glob.is_match(&candidate[i..])),
        }
    }
}

/// Decide whether `candidate` matches `pattern`.
///
/// Compiles the pattern on every call; hold a [`Pattern`] when matching repeatedly.
pub fn match_one(candidate: &str, pattern: &str) -> bool {
    Pattern::new(pattern).is_match(candidate)
}

fn classify(source: &str) -> Result<Shape, PatternError> {
    if let Some((head, tail)) = source.split_once(RECURSIVE) {
        if tail.contains(RECURSIVE) {
            return Err(PatternError::MultipleRecursive {
                pattern: source.to_string(),
            });
        }
        return Ok(Shape::Recursive {
            head: Part::compile(source, head),
            tail: Part::compile(source, tail),
        });
    }

    if has_glob_meta(source) {
        return Ok(Shape::Glob(single_level_glob(source, source)?));
    }

    Ok(Shape::Literal)
}

fn has_glob_meta(text: &str) -> bool {
    text.contains(['*', '?', '['])
}

fn single_level_glob(pattern: &str, text: &str) -> Result<GlobMatcher, PatternError> {
    GlobBuilder::new(text)
        .literal_separator(true)
        .backslash_escape(true)
        .build()
        .map(|glob| glob.compile_matcher())
        .map_err(|err| PatternError::InvalidGlob {
            pattern: pattern.to_string(),
            reason: err.kind().to_string(),
        })
}

/// Every char boundary of `s`, including `s.len()`.
fn boundaries(s: &str) -> impl Iterator<Item = usize> + '_ {
    s.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(s.len()))
}
