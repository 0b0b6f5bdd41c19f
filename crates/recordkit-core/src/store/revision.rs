//! Content digests of stored text.

use sha2::{Digest, Sha256};

/// SHA-256 digest of an encoded value, hex encoded.
///
/// Two stores holding equal values produce equal revisions, so a caller can
/// compare revisions to detect that another instance wrote the key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Revision(String);

impl Revision {
    /// Digest of stored text.
    pub fn of(text: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(text.as_bytes());
        Self(hex::encode(hasher.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Revision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revision_deterministic() {
        assert_eq!(Revision::of("[]"), Revision::of("[]"));
        assert_ne!(Revision::of("[]"), Revision::of("[ ]"));
        assert_eq!(Revision::of("[]").as_str().len(), 64);
    }
}
