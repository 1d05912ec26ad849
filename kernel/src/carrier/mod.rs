//! Carrier module: the river state and the boat loads that change it.
//!
//! This is the foundational layer. No other kernel module is imported here.

pub mod load;
pub mod state;
