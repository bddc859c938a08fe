//! Fuzz target for the Go import scanner.
//!
//! Goal: scanning **never panics** on any input. Malformed sources must come back
//! as errors.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_import_scanner
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = importguard_repo::fuzz::scan_imports(text);
    }
});
