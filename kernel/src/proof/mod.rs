//! Proof module: canonical JSON bytes and domain-separated digests.
//!
//! Depends on `carrier`. Nothing depends on `proof` within the kernel.

pub mod canon;
pub mod hash;
pub mod hash_domain;
