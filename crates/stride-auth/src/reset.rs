//! Password-reset secret generation and digesting.
//!
//! The raw secret leaves the process exactly once (toward the account
//! owner); only its SHA-256 digest is ever stored.

use rand::Rng;
use sha2::{Digest, Sha256};

/// A freshly generated reset secret and its storable digest.
#[derive(Debug, Clone)]
pub struct ResetToken {
    /// The raw secret handed to the account owner.
    pub raw: String,
    /// SHA-256 digest of the raw secret, hex-encoded.
    pub digest: String,
}

impl ResetToken {
    /// Generates a new 32-byte random secret.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let bytes: Vec<u8> = (0..32).map(|_| rng.r#gen()).collect();
        let raw = hex_encode(&bytes);
        let digest = digest_of(&raw);
        Self { raw, digest }
    }
}

/// Digests a raw secret the same way issuance does.
pub fn digest_of(raw: &str) -> String {
    let hash = Sha256::digest(raw.as_bytes());
    hex_encode(&hash)
}

/// Encode bytes to a lowercase hex string.
fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_deterministic_and_distinct() {
        let token = ResetToken::generate();
        assert_eq!(token.raw.len(), 64);
        assert_eq!(token.digest, digest_of(&token.raw));
        assert_ne!(token.digest, token.raw);
    }

    #[test]
    fn test_generate_is_unique() {
        assert_ne!(ResetToken::generate().raw, ResetToken::generate().raw);
    }
}
