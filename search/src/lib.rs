//! Rivercross Search: the four strategies and the tree they build.
//!
//! This crate depends only on `rivercross_kernel`. It does NOT depend on
//! `rivercross_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! rivercross_kernel  ←  rivercross_search  ←  rivercross_harness
//! (state, moves)        (tree, strategies)     (driver, report, console)
//! ```
//!
//! # Key types
//!
//! - [`tree::SearchTree`]: arena of nodes addressed by [`node::NodeId`]
//! - [`strategy::StrategyKind`]: tag selecting BFS, DFS, greedy or A*
//! - [`strategy::bfs::BfsSearch`]: resumable level-by-level BFS
//! - [`result::SearchResult`]: tree, path, termination, stats, timing
//! - [`policy::SearchPolicy`]: heuristic and ordering knobs
//! - [`contract::LevelGate`]: caller decision between BFS levels

#![forbid(unsafe_code)]

pub mod audit;
pub mod contract;
pub mod error;
pub mod frontier;
pub mod heuristic;
pub mod node;
pub mod policy;
pub mod result;
pub mod search;
pub mod strategy;
pub mod tree;
