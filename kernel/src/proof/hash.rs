//! Canonical hashing: SHA-256 over a domain prefix plus payload.
//!
//! Result format is `"sha256:<lowercase hex>"`.

use sha2::{Digest, Sha256};

use super::hash_domain::HashDomain;
use crate::carrier::state::RiverState;

/// A content-addressed hash with algorithm identifier.
///
/// Invariant: the inner string holds exactly one `:` with non-empty text on
/// both sides (enforced by [`ContentHash::parse`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    full: String,
    colon: usize,
}

impl ContentHash {
    /// Parse from `"algorithm:hex"` form.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let colon = s.find(':')?;
        if colon == 0 || colon + 1 == s.len() || s[colon + 1..].contains(':') {
            return None;
        }
        Some(Self {
            full: s.to_string(),
            colon,
        })
    }

    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.full[..self.colon]
    }

    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.full[self.colon + 1..]
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full)
    }
}

/// SHA-256 of `domain` prefix followed by `data`.
#[must_use]
pub fn canonical_hash(domain: HashDomain, data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain.as_bytes());
    hasher.update(data);
    let hex = hex::encode(hasher.finalize());
    ContentHash {
        colon: "sha256".len(),
        full: format!("sha256:{hex}"),
    }
}

/// Identity digest of a single state.
#[must_use]
pub fn state_digest(state: &RiverState) -> ContentHash {
    canonical_hash(HashDomain::StateIdentity, &state.identity_bytes())
}
