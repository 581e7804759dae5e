//! Checksum computation for migrations
//!
//! SHA256 over the migration SQL, recorded alongside each applied entry

use sha2::{Digest, Sha256};

/// Compute the SHA256 checksum of a string, hex-encoded
pub fn compute_checksum(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_shape_and_determinism() {
        let checksum = compute_checksum("CREATE TABLE t (id INTEGER)");
        assert_eq!(checksum.len(), 64);
        assert_eq!(checksum, compute_checksum("CREATE TABLE t (id INTEGER)"));
        assert_ne!(checksum, compute_checksum("CREATE TABLE u (id INTEGER)"));
    }
}
