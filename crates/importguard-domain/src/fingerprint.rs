use sha2::{Digest, Sha256};

/// Stable SHA-256 fingerprint over `|`-joined identity fields.
///
/// Import findings use `check_id|code|file|import`; pattern findings use
/// `check_id|code|config|pattern`. Line numbers are left out so that findings survive
/// unrelated edits.
pub fn fingerprint(parts: &[&str]) -> String {
    let canonical = parts.join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_hex_sha256_of_joined_parts() {
        assert_eq!(
            fingerprint(&["a", "b"]),
            "0eab8a0a3380abf4c7d1fb0b43b66aafbb64a4b953e4eb2dccca579461912d0c"
        );
    }

    #[test]
    fn fingerprint_changes_with_any_part() {
        let base = fingerprint(&["imports.policy", "import_not_allowed", "a.go", "fmt"]);
        let other = fingerprint(&["imports.policy", "import_not_allowed", "a.go", "os"]);
        assert_ne!(base, other);
        assert_eq!(base.len(), 64);
    }
}
