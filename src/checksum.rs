//! Checksum calculation for seed and report provenance.

use sha2::{Digest, Sha256};

/// Calculate the SHA-256 digest of text content as a lowercase hex string.
///
/// Used to fingerprint seed catalogs at load time and rendered reports at
/// export time so downstream consumers can detect divergence.
pub fn sha256_hex(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}
