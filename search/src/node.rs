//! Search node and node identifier types.

use std::fmt;

use rivercross_kernel::carrier::state::RiverState;
use rivercross_kernel::operators::apply::Move;

/// Index of a node in its [`SearchTree`](crate::tree::SearchTree).
///
/// Ids are assigned in creation order, starting at 0 for the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The root of every tree.
    pub const ROOT: Self = Self(0);

    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }

    /// Spreadsheet-style label: `0 -> A`, `25 -> Z`, `26 -> AA`, `27 -> AB`.
    #[must_use]
    pub fn alpha_label(self) -> String {
        let mut n = self.0;
        let mut letters = Vec::new();
        loop {
            // n % 26 < 26, so the cast cannot truncate.
            #[allow(clippy::cast_possible_truncation)]
            letters.push(char::from(b'A' + (n % 26) as u8));
            if n < 26 {
                break;
            }
            n = n / 26 - 1;
        }
        letters.iter().rev().collect()
    }

    /// Inverse of [`alpha_label`](Self::alpha_label). Case-insensitive.
    #[must_use]
    pub fn from_alpha_label(label: &str) -> Option<Self> {
        if label.is_empty() {
            return None;
        }
        let mut acc: usize = 0;
        for ch in label.chars() {
            let upper = ch.to_ascii_uppercase();
            if !upper.is_ascii_uppercase() {
                return None;
            }
            let digit = usize::from(u8::try_from(upper).ok()? - b'A') + 1;
            acc = acc.checked_mul(26)?.checked_add(digit)?;
        }
        Some(Self(acc - 1))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One node of a search tree.
///
/// Fields are fixed at creation; only the child list grows, and only through
/// the owning tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode {
    pub(crate) id: NodeId,
    pub(crate) parent: Option<NodeId>,
    pub(crate) state: RiverState,
    pub(crate) g: u32,
    pub(crate) h: i64,
    pub(crate) f: i64,
    pub(crate) mv: Option<Move>,
    pub(crate) children: Vec<NodeId>,
}

impl SearchNode {
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[must_use]
    pub fn state(&self) -> &RiverState {
        &self.state
    }

    /// Depth: number of moves from the root.
    #[must_use]
    pub fn g(&self) -> u32 {
        self.g
    }

    #[must_use]
    pub fn h(&self) -> i64 {
        self.h
    }

    #[must_use]
    pub fn f(&self) -> i64 {
        self.f
    }

    /// The move that produced this node. `None` for the root.
    #[must_use]
    pub fn mv(&self) -> Option<Move> {
        self.mv
    }

    /// Children in insertion order.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Move label, or `Start` for the root.
    #[must_use]
    pub fn label(&self) -> String {
        self.mv.map_or_else(|| "Start".to_string(), |mv| mv.label())
    }

    #[must_use]
    pub fn alpha_label(&self) -> String {
        self.id.alpha_label()
    }
}
