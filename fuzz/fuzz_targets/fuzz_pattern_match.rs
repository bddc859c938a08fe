//! Fuzz target for pattern matching.
//!
//! Goal: matching **never panics**, every pattern matches its own text, and the
//! compiled and one-shot APIs agree.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_pattern_match
//! ```

#![no_main]

use arbitrary::Arbitrary;
use importguard_domain::{Pattern, match_one};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct MatchInput {
    pattern: String,
    candidates: Vec<String>,
    source_roots: Vec<(String, String)>,
}

fuzz_target!(|input: MatchInput| {
    if input.pattern.len() > 256 || input.candidates.len() > 64 || input.source_roots.len() > 8 {
        return;
    }

    let compiled = Pattern::new(input.pattern.clone());
    assert!(compiled.is_match(&input.pattern));

    for candidate in input.candidates.iter().filter(|c| c.len() <= 512) {
        assert_eq!(
            compiled.is_match(candidate),
            match_one(candidate, &input.pattern)
        );
        let _ = importguard_repo::fuzz::logical_path(candidate, &input.source_roots);
    }
});
