//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. Runtime outcomes
//! (goal reached, frontier exhausted, aborted between levels) are expressed
//! via [`crate::result::Termination`] and always come with a full tree.

/// Typed failure for pre-flight search validation and name parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The policy holds a value no strategy can run with.
    InvalidPolicy { detail: String },
    /// A strategy, heuristic or ordering name was not recognised.
    UnknownName { what: &'static str, name: String },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPolicy { detail } => write!(f, "invalid search policy: {detail}"),
            Self::UnknownName { what, name } => write!(f, "unknown {what}: {name:?}"),
        }
    }
}

impl std::error::Error for SearchError {}
