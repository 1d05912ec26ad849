//! Operators module: moving a boat load across the river.
//!
//! Depends on `carrier`. Does not import from `proof`.

pub mod apply;
