//! Rivercross Kernel: the fixed puzzle model shared by every search strategy.
//!
//! # API Surface
//!
//! - [`carrier::state::RiverState`] -- one river configuration with its
//!   validity and goal predicates
//! - [`operators::apply::successors`] -- the move generator, in fixed load order
//! - [`proof::hash::canonical_hash`] -- domain-separated SHA-256 digests
//!
//! # Module Dependency Direction
//!
//! `carrier` ← `operators` ← `proof`
//!
//! One-way only. `proof` is payload-agnostic and only sees bytes and JSON values.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod carrier;
pub mod operators;
pub mod proof;
