//! Canonical JSON view of a search result, and its digest.
//!
//! The view covers everything a run decides (tree, path, termination,
//! statistics) and nothing it merely measures: elapsed time is left out so
//! that two runs of the same strategy produce byte-identical output.

use rivercross_kernel::proof::canon::{canonical_json_bytes, CanonError};
use rivercross_kernel::proof::hash::{canonical_hash, ContentHash};
use rivercross_kernel::proof::hash_domain::HashDomain;
use serde_json::{json, Value};

use crate::node::SearchNode;
use crate::result::{SearchResult, SearchStats, Termination};

impl SearchResult {
    /// Deterministic JSON value for this result.
    #[must_use]
    pub fn to_json_value(&self) -> Value {
        json!({
            "initial": self.tree.root().state().to_string(),
            "moves": self
                .path_nodes()
                .filter_map(|n| n.mv().map(|mv| mv.short_label()))
                .collect::<Vec<_>>(),
            "nodes": self.tree.iter().map(node_to_json).collect::<Vec<_>>(),
            "path": self.path.iter().map(|id| id.index()).collect::<Vec<_>>(),
            "stats": stats_to_json(&self.stats),
            "strategy": self.strategy.name(),
            "termination": termination_to_json(self.termination),
        })
    }

    /// Canonical bytes of [`to_json_value`](Self::to_json_value).
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Digest of the canonical bytes under [`HashDomain::SearchTree`].
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(HashDomain::SearchTree, &bytes))
    }
}

fn node_to_json(node: &SearchNode) -> Value {
    json!({
        "children": node.children().iter().map(|id| id.index()).collect::<Vec<_>>(),
        "f": node.f(),
        "g": node.g(),
        "h": node.h(),
        "id": node.id().index(),
        "move": node.mv().map(|mv| mv.short_label()),
        "parent": node.parent().map(|id| id.index()),
        "state": node.state().to_string(),
    })
}

fn stats_to_json(stats: &SearchStats) -> Value {
    json!({
        "closed": stats.closed,
        "explored": stats.explored,
        "frontier_high_water": stats.frontier_high_water,
        "generated": stats.generated,
        "open": stats.open,
    })
}

fn termination_to_json(termination: Termination) -> Value {
    match termination {
        Termination::GoalReached { node } => json!({
            "kind": termination.tag(),
            "node": node.index(),
        }),
        Termination::FrontierExhausted => json!({ "kind": termination.tag() }),
        Termination::Aborted { depth } => json!({
            "depth": depth,
            "kind": termination.tag(),
        }),
    }
}
