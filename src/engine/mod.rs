// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Backtracking matrix generator.
//!
//! A [`MatrixGenerator`] enumerates every matrix whose rows are lines of one
//! prefix tree (the *row tree*) and whose columns are lines of another (the
//! *column tree*). This is the search at the heart of `query` and
//! `implication`.
//!
//! # Architecture
//!
//! The generator grows a region of overlapping partial rows and partial
//! columns, one cell at a time in [`herringbone`] order. Each partial row is
//! a node of the row tree and each partial column a node of the column tree:
//! - `row_nodes[r]` is the prefix of matrix row `r` filled so far
//! - `col_nodes[c]` is the prefix of matrix column `c` filled so far
//!
//! Filling cell `(r, c)` with symbol `b` succeeds only if both prefixes
//! extend by `b`, so every prefix in the region always matches at least one
//! line of its tree. Backtracking needs no trail: the previous state of a
//! cell is the parent of the node, and the symbol that was tried is the
//! node's branch.
//!
//! The search loop follows the usual try/retry shape:
//! 1. Try symbols `0..K` at the current cell in order
//! 2. If a symbol fits: advance to the next cell, starting again from 0
//! 3. If all K symbols fail: back up one cell and resume one past the
//!    symbol accepted there
//! 4. Backing up from (0,0) exhausts the search for good
//! 5. Moving past the last cell is a complete matrix: record it, back up
//!    one cell and return
//!
//! # Example
//!
//! ```
//! use chu_calc::engine::MatrixGenerator;
//! use chu_calc::tree::PrefixTree;
//!
//! // Rows must be 01 or 10, columns must be 01 or 10.
//! let mut rows = PrefixTree::new(2, 2);
//! rows.insert(&[0, 1], 0);
//! rows.insert(&[1, 0], 1);
//! let columns = rows.clone();
//!
//! let mut generator = MatrixGenerator::new(&rows, &columns);
//! let mut count = 0;
//! while generator.produce_next() {
//!     count += 1;
//! }
//! assert_eq!(count, 2);
//! assert!(generator.is_exhausted());
//! ```

pub mod herringbone;
pub mod statistics;

pub use herringbone::Cursor;
pub use statistics::{Counters, Statistics};

use crate::tree::{Link, NodeId, PrefixTree};
use std::iter::FusedIterator;
use tracing::trace;

/// One matrix found by the generator.
///
/// `rows[r]` lists the ids of every row-tree line equal to row `r` of the
/// matrix, and `cols[c]` the ids of every column-tree line equal to column
/// `c`. Any choice of one id per list is a concrete instance of the matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Morphism {
    pub rows: Vec<Link>,
    pub cols: Vec<Link>,
}

impl Morphism {
    /// Number of concrete instances: the product of all list lengths, or
    /// `None` if that does not fit in a `usize`.
    pub fn checked_multiplicity(&self) -> Option<usize> {
        self.rows
            .iter()
            .chain(self.cols.iter())
            .try_fold(1usize, |count, link| count.checked_mul(link.len()))
    }

    /// Number of concrete instances: the product of all list lengths.
    ///
    /// # Panics
    ///
    /// If the count overflows `usize`.
    pub fn multiplicity(&self) -> usize {
        self.checked_multiplicity().expect("transform count overflows usize")
    }
}

/// Pull-based enumeration of matrices over a pair of prefix trees.
///
/// The matrix has `col_tree.length()` rows and `row_tree.length()` columns.
/// Once [`produce_next`](Self::produce_next) has returned false it keeps
/// returning false; make a new generator to search again.
#[derive(Debug)]
pub struct MatrixGenerator<'a> {
    row_tree: &'a PrefixTree,
    col_tree: &'a PrefixTree,
    arity: usize,

    /// Node of the row tree for the filled prefix of each matrix row.
    row_nodes: Vec<NodeId>,
    /// Node of the column tree for the filled prefix of each matrix column.
    col_nodes: Vec<NodeId>,

    /// Cell we are trying to fill.
    cursor: Cursor,
    /// Symbol we are trying to fill it with.
    branch: usize,

    done: bool,

    row_links: Vec<Link>,
    col_links: Vec<Link>,

    statistics: Statistics,
}

impl<'a> MatrixGenerator<'a> {
    /// Create a generator over the given trees.
    ///
    /// # Panics
    ///
    /// Panics if the trees do not share one alphabet size.
    pub fn new(row_tree: &'a PrefixTree, col_tree: &'a PrefixTree) -> Self {
        assert_eq!(
            row_tree.arity(),
            col_tree.arity(),
            "Matrix generator trees must share one alphabet"
        );
        let nrows = col_tree.length();
        let ncols = row_tree.length();
        Self {
            row_tree,
            col_tree,
            arity: row_tree.arity(),
            row_nodes: vec![row_tree.root(); nrows],
            col_nodes: vec![col_tree.root(); ncols],
            cursor: Cursor::new(nrows, ncols),
            branch: 0,
            done: false,
            row_links: vec![Link::empty(); nrows],
            col_links: vec![Link::empty(); ncols],
            statistics: Statistics::new(),
        }
    }

    pub fn nrows(&self) -> usize {
        self.row_nodes.len()
    }

    pub fn ncols(&self) -> usize {
        self.col_nodes.len()
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Row matches of the last matrix produced.
    pub fn row_links(&self) -> &[Link] {
        &self.row_links
    }

    /// Column matches of the last matrix produced.
    pub fn col_links(&self) -> &[Link] {
        &self.col_links
    }

    /// True once the search space has been exhausted.
    pub fn is_exhausted(&self) -> bool {
        self.done
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Find the next matrix.
    ///
    /// On success the match lists are available from
    /// [`row_links`](Self::row_links) and [`col_links`](Self::col_links)
    /// and true is returned. Returns false when there are no more matrices.
    pub fn produce_next(&mut self) -> bool {
        if self.done {
            return false;
        }

        // Invariant: row and column prefixes cover the same cells, namely
        // those before the cursor in herringbone order, and agree on them.
        while self.cursor.in_bounds() {
            loop {
                while self.branch == self.arity {
                    if !self.backward() {
                        return false;
                    }
                }
                if self.forward() {
                    break;
                }
                self.branch += 1;
            }
        }

        // Out of bounds: every row and column is a complete line.
        for (link, &node) in self.row_links.iter_mut().zip(&self.row_nodes) {
            *link = self.row_tree.data(node).clone();
        }
        for (link, &node) in self.col_links.iter_mut().zip(&self.col_nodes) {
            *link = self.col_tree.data(node).clone();
        }
        self.statistics.increment_counter(Counters::Morphisms);
        trace!(
            morphism = self.statistics.get(Counters::Morphisms),
            "matrix generator found a morphism"
        );

        // Step past this matrix so that the next call resumes the search.
        self.backward();
        true
    }

    /// The last matrix produced, as an owned value.
    pub fn morphism(&self) -> Morphism {
        Morphism {
            rows: self.row_links.clone(),
            cols: self.col_links.clone(),
        }
    }

    /// Fill the current cell with the current branch, if both trees allow it.
    fn forward(&mut self) -> bool {
        let (row, col) = (self.cursor.row(), self.cursor.col());
        let Some(row_node) = self.row_tree.child(self.row_nodes[row], self.branch) else {
            return false;
        };
        let Some(col_node) = self.col_tree.child(self.col_nodes[col], self.branch) else {
            return false;
        };

        self.row_nodes[row] = row_node;
        self.col_nodes[col] = col_node;
        self.branch = 0;
        self.cursor.advance();
        self.statistics.increment_counter(Counters::Extensions);
        true
    }

    /// Empty the previous cell and resume one past the symbol it held.
    fn backward(&mut self) -> bool {
        if !self.cursor.retreat() {
            self.done = true;
            return false;
        }
        let (row, col) = (self.cursor.row(), self.cursor.col());
        let row_node = self.row_nodes[row];
        let col_node = self.col_nodes[col];

        self.branch = self.row_tree.branch(row_node) + 1;
        self.row_nodes[row] = self
            .row_tree
            .parent(row_node)
            .expect("filled row prefix has a parent");
        self.col_nodes[col] = self
            .col_tree
            .parent(col_node)
            .expect("filled column prefix has a parent");
        self.statistics.increment_counter(Counters::Backtracks);
        true
    }
}

impl Iterator for MatrixGenerator<'_> {
    type Item = Morphism;

    fn next(&mut self) -> Option<Morphism> {
        self.produce_next().then(|| self.morphism())
    }
}

impl FusedIterator for MatrixGenerator<'_> {}
