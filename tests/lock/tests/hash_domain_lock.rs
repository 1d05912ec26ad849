//! Hash domain governance lock tests.
//!
//! Proves:
//! 1. The domain set has the expected count (catches forgotten additions to ALL)
//! 2. All domain byte strings are unique and null-terminated
//! 3. All domains follow the `RIVERCROSS::*::V1\0` naming convention
//! 4. `canonical_hash` is SHA-256 over domain bytes followed by data
//! 5. No raw `RIVERCROSS::` literals in production source outside `hash_domain.rs`

use std::collections::BTreeSet;
use std::path::Path;

use rivercross_kernel::carrier::state::{Bank, RiverState};
use rivercross_kernel::proof::hash::{canonical_hash, state_digest};
use rivercross_kernel::proof::hash_domain::HashDomain;
use sha2::{Digest, Sha256};

#[test]
fn hash_domain_canonical_set_count() {
    assert_eq!(
        HashDomain::ALL.len(),
        3,
        "expected 3 domain variants; if you added a new domain, update this count"
    );
}

#[test]
fn hash_domain_all_unique_and_null_terminated() {
    let mut seen = BTreeSet::new();
    for domain in HashDomain::ALL {
        assert!(seen.insert(domain.as_bytes()), "duplicate domain bytes: {domain}");
        assert!(domain.as_bytes().ends_with(&[0]), "{domain} is not null-terminated");
    }
}

#[test]
fn hash_domain_naming_convention() {
    for domain in HashDomain::ALL {
        let bytes = domain.as_bytes();
        let text = std::str::from_utf8(&bytes[..bytes.len() - 1]).expect("domain is ASCII");
        assert!(text.starts_with("RIVERCROSS::"), "{text}");
        assert!(text.ends_with("::V1"), "{text}");
        assert_eq!(text.matches("::").count(), 2, "{text}");
    }
}

#[test]
fn canonical_hash_is_prefixed_sha256() {
    let data = b"{\"a\":1}";
    for domain in HashDomain::ALL {
        let mut hasher = Sha256::new();
        hasher.update(domain.as_bytes());
        hasher.update(data);
        let expected = format!("sha256:{}", hex::encode(hasher.finalize()));
        assert_eq!(canonical_hash(*domain, data).as_str(), expected);
    }
}

#[test]
fn state_digest_covers_identity_bytes() {
    let state = RiverState::new(2, 1, Bank::Right);
    let mut hasher = Sha256::new();
    hasher.update(HashDomain::StateIdentity.as_bytes());
    hasher.update(state.identity_bytes());
    assert_eq!(
        state_digest(&state).hex_digest(),
        hex::encode(hasher.finalize())
    );
    assert_ne!(state_digest(&state), state_digest(&RiverState::INITIAL));
}

fn rust_sources(dir: &Path, out: &mut Vec<std::path::PathBuf>) {
    for entry in std::fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            rust_sources(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            out.push(path);
        }
    }
}

#[test]
fn no_raw_domain_literals_outside_registry() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(Path::parent)
        .expect("workspace root exists");
    let mut files = Vec::new();
    for krate in ["kernel", "search", "harness"] {
        rust_sources(&root.join(krate).join("src"), &mut files);
    }
    assert!(!files.is_empty());

    let offenders: Vec<_> = files
        .iter()
        .filter(|p| p.file_name().is_some_and(|n| n != "hash_domain.rs"))
        .filter(|p| {
            std::fs::read_to_string(p)
                .unwrap()
                .contains(concat!("RIVERCROSS", "::"))
        })
        .collect();
    assert!(offenders.is_empty(), "raw domain literals in {offenders:?}");
}
