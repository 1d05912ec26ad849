//! Shared fixtures for the lock tests.

pub mod canonical_runs;
