//! Canonical JSON bytes for hashing search results and reports.
//!
//! Every digest in the workspace is computed over bytes produced here.
//!
//! # Rules
//!
//! - Object keys sorted in byte order, at every depth.
//! - Compact output, no whitespace between tokens.
//! - Numbers must be integers. Floats are rejected so digests never depend on
//!   float formatting.
//!
//! `serde_json` without the `preserve_order` feature stores objects in a
//! `BTreeMap`, so its compact writer already emits sorted keys. This module
//! adds the integer check and a typed error around it.

use serde_json::Value;

/// Error type for canonical JSON serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonError {
    /// A JSON number was not an integer. `path` is a JSON-pointer-ish locator.
    NonIntegerNumber { path: String, raw: String },
    /// The writer itself failed.
    Serialize { detail: String },
}

impl std::fmt::Display for CanonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonIntegerNumber { path, raw } => {
                write!(f, "non-integer number at {path}: {raw}")
            }
            Self::Serialize { detail } => write!(f, "canonical JSON write failed: {detail}"),
        }
    }
}

impl std::error::Error for CanonError {}

/// Produce canonical JSON bytes from a `serde_json::Value`.
///
/// # Errors
///
/// Returns [`CanonError::NonIntegerNumber`] if any number in `value` is not
/// representable as `i64` or `u64`.
pub fn canonical_json_bytes(value: &Value) -> Result<Vec<u8>, CanonError> {
    let mut path = String::new();
    check_integers(value, &mut path)?;
    serde_json::to_vec(value).map_err(|e| CanonError::Serialize {
        detail: e.to_string(),
    })
}

fn check_integers(value: &Value, path: &mut String) -> Result<(), CanonError> {
    match value {
        Value::Number(n) if !(n.is_i64() || n.is_u64()) => Err(CanonError::NonIntegerNumber {
            path: if path.is_empty() {
                "/".to_string()
            } else {
                path.clone()
            },
            raw: n.to_string(),
        }),
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                let len = path.len();
                path.push('/');
                path.push_str(&i.to_string());
                check_integers(item, path)?;
                path.truncate(len);
            }
            Ok(())
        }
        Value::Object(map) => {
            for (key, item) in map {
                let len = path.len();
                path.push('/');
                path.push_str(key);
                check_integers(item, path)?;
                path.truncate(len);
            }
            Ok(())
        }
        _ => Ok(()),
    }
}
