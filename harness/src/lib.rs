//! Rivercross Harness: drives the search crate and presents its results.
//!
//! The harness does NOT implement search logic; it delegates to
//! `rivercross_search`. It owns the comparison driver, the canonical report
//! file, and console rendering used by the `rivercross` binary.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod console;
pub mod report;
pub mod runner;
