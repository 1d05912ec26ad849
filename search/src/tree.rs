//! `SearchTree`: arena of search nodes addressed by [`NodeId`].
//!
//! The arena owns every node a strategy created, in creation order. Parent
//! links are ids, child lists are ids in insertion order. Only strategies in
//! this crate can add nodes; consumers get a read-only view.

use std::ops::Index;

use rivercross_kernel::carrier::state::RiverState;
use rivercross_kernel::operators::apply::Transition;

use crate::node::{NodeId, SearchNode};

/// The complete tree built by one strategy run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTree {
    nodes: Vec<SearchNode>,
}

impl SearchTree {
    /// A tree holding only the root.
    pub(crate) fn with_root(state: RiverState, h: i64, f: i64) -> Self {
        Self {
            nodes: vec![SearchNode {
                id: NodeId::ROOT,
                parent: None,
                state,
                g: 0,
                h,
                f,
                mv: None,
                children: Vec::new(),
            }],
        }
    }

    /// Create a child of `parent` from a generated transition.
    ///
    /// `g` is the parent's depth plus one. The new id is appended to the
    /// parent's child list.
    pub(crate) fn attach(&mut self, parent: NodeId, transition: &Transition, h: i64, f: i64) -> NodeId {
        let id = NodeId(self.nodes.len());
        let g = self.nodes[parent.0].g + 1;
        self.nodes.push(SearchNode {
            id,
            parent: Some(parent),
            state: transition.state,
            g,
            h,
            f,
            mv: Some(transition.mv),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    #[must_use]
    pub fn root(&self) -> &SearchNode {
        &self.nodes[0]
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&SearchNode> {
        self.nodes.get(id.0)
    }

    /// Number of nodes, i.e. every node generated by the run.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a tree has at least its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in creation order.
    pub fn iter(&self) -> std::slice::Iter<'_, SearchNode> {
        self.nodes.iter()
    }

    /// Children of `id` in insertion order. Empty for an unknown id.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &SearchNode> + '_ {
        self.get(id)
            .map(SearchNode::children)
            .unwrap_or_default()
            .iter()
            .map(|child| &self.nodes[child.0])
    }

    /// Root-to-`target` ids, found by walking parent links and reversing.
    ///
    /// Empty for an unknown id.
    #[must_use]
    pub fn path_to(&self, target: NodeId) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut cursor = self.get(target).map(SearchNode::id);
        while let Some(id) = cursor {
            path.push(id);
            cursor = self.nodes[id.0].parent;
        }
        path.reverse();
        path
    }

    /// Depth-limited pre-order walk from `start`.
    ///
    /// Yields `(relative_depth, id)` pairs; `start` itself is at depth 0 and
    /// children appear in insertion order. `max_depth = None` walks the whole
    /// subtree.
    #[must_use]
    pub fn subtree(&self, start: NodeId, max_depth: Option<u32>) -> Vec<(u32, NodeId)> {
        let mut out = Vec::new();
        if self.get(start).is_none() {
            return out;
        }
        let mut stack = vec![(0u32, start)];
        while let Some((depth, id)) = stack.pop() {
            out.push((depth, id));
            if max_depth.is_some_and(|limit| depth >= limit) {
                continue;
            }
            for child in self.nodes[id.0].children.iter().rev() {
                stack.push((depth + 1, *child));
            }
        }
        out
    }

    /// Resolve a node by numeric id (`"27"`) or alphabetic label (`"AB"`).
    #[must_use]
    pub fn resolve(&self, key: &str) -> Option<NodeId> {
        let key = key.trim();
        let id = match key.parse::<usize>() {
            Ok(index) => NodeId(index),
            Err(_) => NodeId::from_alpha_label(key)?,
        };
        self.get(id).map(SearchNode::id)
    }

    /// Deepest `g` in the tree.
    #[must_use]
    pub fn max_depth(&self) -> u32 {
        self.nodes.iter().map(SearchNode::g).max().unwrap_or(0)
    }
}

impl Index<NodeId> for SearchTree {
    type Output = SearchNode;

    fn index(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }
}

impl<'a> IntoIterator for &'a SearchTree {
    type Item = &'a SearchNode;
    type IntoIter = std::slice::Iter<'a, SearchNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
