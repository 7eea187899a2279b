//! Session token generation and fingerprinting
//!
//! Raw tokens travel only in the cookie; the store keeps a sha256
//! fingerprint.

use rand::RngCore;
use sha2::{Digest, Sha256};

const TOKEN_BYTES: usize = 32;

/// A freshly generated session token plus the hash to persist.
pub struct SessionToken {
    pub raw: String,
    pub hash: String,
}

impl SessionToken {
    pub fn generate() -> Self {
        let mut bytes = [0u8; TOKEN_BYTES];
        rand::rng().fill_bytes(&mut bytes);
        let raw = hex::encode(bytes);
        let hash = Self::fingerprint(&raw);
        Self { raw, hash }
    }

    /// Fingerprint a raw token the same way `generate` does, for lookup.
    pub fn fingerprint(raw: &str) -> String {
        let digest = Sha256::digest(raw.as_bytes());
        hex::encode(digest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_matches_generated_hash() {
        let token = SessionToken::generate();
        assert_eq!(token.raw.len(), TOKEN_BYTES * 2);
        assert_eq!(SessionToken::fingerprint(&token.raw), token.hash);
    }

    #[test]
    fn tokens_are_unique() {
        assert_ne!(SessionToken::generate().raw, SessionToken::generate().raw);
    }
}
