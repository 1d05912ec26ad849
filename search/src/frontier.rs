//! A* open list plus closed set.
//!
//! The open list does not deduplicate: a state may sit in it several times
//! with different nodes, and each copy is expanded when popped. The closed
//! set only stops closed states from being pushed again.
//!
//! Uses a `BTreeSet` closed set (not `HashSet`) for deterministic iteration.

use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeSet, BinaryHeap};

use rivercross_kernel::carrier::state::RiverState;

use crate::node::NodeId;
use crate::policy::AStarOrder;

/// Heap ordering key.
///
/// `BinaryHeap` is a max-heap: the largest `rank` pops first, and on equal
/// rank the smaller push sequence (older entry) wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OpenKey {
    rank: i64,
    seq: Reverse<u64>,
}

impl PartialOrd for OpenKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank).then(self.seq.cmp(&other.seq))
    }
}

#[derive(Debug)]
struct OpenEntry {
    key: OpenKey,
    node: NodeId,
    state: RiverState,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

/// Open list ordered by `f` in the configured direction, ties FIFO.
#[derive(Debug)]
pub struct AStarFrontier {
    order: AStarOrder,
    heap: BinaryHeap<OpenEntry>,
    closed: BTreeSet<RiverState>,
    next_seq: u64,
    high_water: usize,
}

impl AStarFrontier {
    #[must_use]
    pub fn new(order: AStarOrder) -> Self {
        Self {
            order,
            heap: BinaryHeap::new(),
            closed: BTreeSet::new(),
            next_seq: 0,
            high_water: 0,
        }
    }

    /// Push a node with its `f` value.
    pub fn push(&mut self, node: NodeId, state: RiverState, f: i64) {
        let rank = match self.order {
            AStarOrder::AscendingF => f.saturating_neg(),
            AStarOrder::DescendingF => f,
        };
        self.heap.push(OpenEntry {
            key: OpenKey {
                rank,
                seq: Reverse(self.next_seq),
            },
            node,
            state,
        });
        self.next_seq += 1;
        self.high_water = self.high_water.max(self.heap.len());
    }

    /// Pop the next node in priority order.
    pub fn pop(&mut self) -> Option<(NodeId, RiverState)> {
        self.heap.pop().map(|e| (e.node, e.state))
    }

    /// Mark a state closed. Returns `false` if it was already closed.
    pub fn close(&mut self, state: RiverState) -> bool {
        self.closed.insert(state)
    }

    #[must_use]
    pub fn is_closed(&self, state: &RiverState) -> bool {
        self.closed.contains(state)
    }

    /// Entries currently in the open list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[must_use]
    pub fn closed_len(&self) -> usize {
        self.closed.len()
    }

    /// Largest open-list size seen.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}
