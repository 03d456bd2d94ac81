// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Prefix trees over fixed-length lines.
//!
//! A [`PrefixTree`] indexes a bag of equal-length "lines" (rows or columns
//! of a matrix) whose symbols lie in `0..arity`. Every line carries an
//! external id. Equal lines are kept, not merged: the node where they end
//! holds a [`Link`] of all their ids, because callers need every original
//! row or column that shares a value.
//!
//! # Memory Model
//!
//! Nodes live in a `Vec` owned by the tree and refer to their parent and
//! children by [`NodeId`]. Ownership is strictly hierarchical, so nothing
//! outlives the tree and no reference counting is needed for the nodes.
//! A [`MatrixGenerator`](crate::engine::MatrixGenerator) walks the tree by
//! holding `NodeId`s, which makes its backtracking state plain data.
//!
//! # Example
//!
//! ```
//! use chu_calc::tree::PrefixTree;
//!
//! let mut tree = PrefixTree::new(2, 3);
//! assert!(tree.insert(&[0, 1, 1], 0).is_empty());
//! let previous = tree.insert(&[0, 1, 1], 4);
//! assert_eq!(previous.iter().collect::<Vec<_>>(), vec![0]);
//! assert_eq!(tree.find(&[0, 1, 1]).len(), 2);
//! assert!(tree.find(&[1, 1, 1]).is_empty());
//! ```

pub mod link;
pub mod node;

pub use link::{Link, LinkIter};
pub use node::NodeId;

use node::Node;

/// A trie over lines of `length` symbols drawn from `0..arity`.
#[derive(Debug, Clone)]
pub struct PrefixTree {
    arity: usize,
    length: usize,
    nodes: Vec<Node>,
    line_count: usize,
}

impl PrefixTree {
    /// Create an empty tree.
    pub fn new(arity: usize, length: usize) -> Self {
        Self {
            arity,
            length,
            nodes: vec![Node::new(None, 0)],
            line_count: 0,
        }
    }

    /// Number of symbols in the alphabet.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Length of every line in the tree.
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// The node for the prefix of `node` extended by `branch`, if any line
    /// has that prefix.
    pub fn child(&self, node: NodeId, branch: usize) -> Option<NodeId> {
        self.node(node).child(branch)
    }

    /// The node for the prefix of `node` minus its last symbol.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).parent
    }

    /// The last symbol of the prefix represented by `node`.
    pub fn branch(&self, node: NodeId) -> usize {
        self.node(node).branch as usize
    }

    /// Ids of the lines ending exactly at `node`.
    pub fn data(&self, node: NodeId) -> &Link {
        &self.node(node).data
    }

    /// Number of lines inserted so far, duplicates included.
    pub fn line_count(&self) -> usize {
        self.line_count
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Ids of all lines equal to `line`.
    ///
    /// Returns an empty list when `line` was never inserted or has the
    /// wrong length. Never modifies the tree.
    pub fn find(&self, line: &[u8]) -> Link {
        if line.len() != self.length {
            return Link::empty();
        }
        let mut current = self.root();
        for &symbol in line {
            match self.child(current, symbol as usize) {
                Some(next) => current = next,
                None => return Link::empty(),
            }
        }
        self.data(current).clone()
    }

    /// True if some line equal to `line` was inserted.
    pub fn contains(&self, line: &[u8]) -> bool {
        !self.find(line).is_empty()
    }

    /// Insert `line` under `id`.
    ///
    /// Returns the ids stored for this exact line *before* the insertion.
    /// A line of the wrong length is ignored and yields an empty list.
    ///
    /// # Panics
    ///
    /// Panics if a symbol of `line` is not below the tree's arity.
    pub fn insert(&mut self, line: &[u8], id: usize) -> Link {
        if line.len() != self.length {
            return Link::empty();
        }
        let mut current = self.root();
        for &symbol in line {
            current = self.grow(current, symbol);
        }
        let node = &mut self.nodes[current.index()];
        let previous = node.data.clone();
        node.data = previous.prepend(id);
        self.line_count += 1;
        previous
    }

    /// The child of `node` for `branch`, created if missing.
    fn grow(&mut self, node: NodeId, branch: u8) -> NodeId {
        assert!(
            (branch as usize) < self.arity,
            "Symbol {} out of range for prefix tree of arity {}",
            branch,
            self.arity
        );
        if let Some(existing) = self.child(node, branch as usize) {
            return existing;
        }
        let created = NodeId::new(self.nodes.len());
        self.nodes.push(Node::new(Some(node), branch));
        let arity = self.arity;
        let children = self.nodes[node.index()]
            .children
            .get_or_insert_with(|| vec![None; arity].into_boxed_slice());
        children[branch as usize] = Some(created);
        created
    }

    fn node(&self, node: NodeId) -> &Node {
        &self.nodes[node.index()]
    }
}
