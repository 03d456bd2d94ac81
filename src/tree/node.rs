// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Arena nodes of a prefix tree.

use super::Link;

/// Index of a node inside its [`PrefixTree`](super::PrefixTree) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// The root node of every tree.
    pub const ROOT: NodeId = NodeId(0);

    pub(crate) fn new(index: usize) -> Self {
        let index = u32::try_from(index).unwrap_or_else(|_| panic!("Prefix tree overflow: node {}", index));
        NodeId(index)
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// One prefix of the indexed lines.
///
/// The children are the one-symbol extensions of the prefix and are
/// allocated on first use. `data` lists the ids of all lines that end
/// exactly here; internal nodes may carry data too when the tree holds
/// lines of length zero.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) children: Option<Box<[Option<NodeId>]>>,
    pub(crate) parent: Option<NodeId>,
    /// Value of the last symbol of this prefix (0 for the root).
    pub(crate) branch: u8,
    pub(crate) data: Link,
}

impl Node {
    pub(crate) fn new(parent: Option<NodeId>, branch: u8) -> Self {
        Self {
            children: None,
            parent,
            branch,
            data: Link::empty(),
        }
    }

    pub(crate) fn child(&self, branch: usize) -> Option<NodeId> {
        self.children.as_ref()?.get(branch).copied().flatten()
    }
}
