//! Caller contract for level-by-level strategies.

use crate::tree::SearchTree;

/// Snapshot handed to a [`LevelGate`] after each completed BFS level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelReport {
    /// Depth of the new frontier (1 after the root has been expanded).
    pub depth: u32,
    /// Nodes in the new frontier.
    pub frontier_len: usize,
    /// States marked visited so far.
    pub visited: usize,
    /// Nodes in the tree so far.
    pub generated: usize,
}

/// What the caller wants after a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelDecision {
    Continue,
    Abort,
}

/// Decides between levels whether a stepwise search keeps going.
///
/// The gate sees the tree built so far but cannot change it.
pub trait LevelGate {
    fn on_level(&mut self, tree: &SearchTree, report: &LevelReport) -> LevelDecision;
}

/// Never aborts.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysContinue;

impl LevelGate for AlwaysContinue {
    fn on_level(&mut self, _tree: &SearchTree, _report: &LevelReport) -> LevelDecision {
        LevelDecision::Continue
    }
}

/// Aborts once the given depth has been reached.
#[derive(Debug, Clone, Copy)]
pub struct AbortAfter(pub u32);

impl LevelGate for AbortAfter {
    fn on_level(&mut self, _tree: &SearchTree, report: &LevelReport) -> LevelDecision {
        if report.depth >= self.0 {
            LevelDecision::Abort
        } else {
            LevelDecision::Continue
        }
    }
}
