// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The `?` modality.
//!
//! The rows of `?A` are the closure of the rows of `A` under the diagonal
//! operation: lay out a square matrix whose rows are rows of the space and
//! read off its diagonal. Constant rows are always included.
//!
//! Over a two-letter alphabet the same closure is reached by closing under
//! union and intersection, which is much cheaper, so [`ChuSpace::query`]
//! dispatches to [`ChuSpace::query2`] there.

use super::{ChuSpace, Entry};
use crate::engine::MatrixGenerator;
use crate::tree::PrefixTree;
use tracing::debug;

impl ChuSpace {
    /// The `?` modality. Uses [`query2`](Self::query2) when K is 2 and
    /// [`query_diagonal`](Self::query_diagonal) otherwise.
    pub fn query(&self) -> ChuSpace {
        if self.k == 2 {
            self.query2()
        } else {
            self.query_diagonal()
        }
    }

    /// Close the rows under the diagonal operation, for any K.
    ///
    /// The result starts with the rows of the space, duplicates included,
    /// followed by the missing constant rows and then each new diagonal in
    /// the order it was found.
    pub fn query_diagonal(&self) -> ChuSpace {
        let mut rows: Vec<Vec<Entry>> = self.rows().map(<[Entry]>::to_vec).collect();
        let mut tree = self.row_tree();

        for symbol in 0..self.k {
            let constant = vec![symbol as Entry; self.ncols];
            if !tree.contains(&constant) {
                tree.insert(&constant, rows.len());
                rows.push(constant);
            }
        }

        let mut rounds = 0;
        loop {
            rounds += 1;
            let diagonals = diagonals(&tree, &rows, self.ncols);
            let before = rows.len();
            for diagonal in diagonals {
                if !tree.contains(&diagonal) {
                    tree.insert(&diagonal, rows.len());
                    rows.push(diagonal);
                }
            }
            if rows.len() == before {
                break;
            }
        }
        debug!(
            k = self.k,
            from_rows = self.nrows,
            rows = rows.len(),
            rounds,
            "diagonal closure"
        );
        self.with_rows(self.k, rows)
    }

    /// Close the rows under componentwise union and intersection.
    ///
    /// The all-zero and all-one rows are included as the intersection and
    /// union of no rows. The result is over K = 2 and has no repeated rows.
    /// Entries other than 0 and 1 count as 0.
    pub fn query2(&self) -> ChuSpace {
        let ncols = self.ncols;
        let mut rows: Vec<Vec<Entry>> = Vec::new();
        let mut tree = PrefixTree::new(2, ncols);

        let mut pending: Vec<Vec<Entry>> = self
            .rows()
            .map(|row| row.iter().map(|&e| Entry::from(e == 1)).collect())
            .collect();
        pending.push(vec![0; ncols]);
        pending.push(vec![1; ncols]);

        while let Some(row) = pending.pop() {
            if tree.contains(&row) {
                continue;
            }
            for old in &rows {
                pending.push(combine(&row, old, |a, b| a || b));
                pending.push(combine(&row, old, |a, b| a && b));
            }
            tree.insert(&row, rows.len());
            rows.push(row);
        }
        debug!(from_rows = self.nrows, rows = rows.len(), "union-intersection closure");
        self.with_rows(2, rows)
    }

    /// A space with this space's column count and the given rows.
    fn with_rows(&self, k: usize, rows: Vec<Vec<Entry>>) -> ChuSpace {
        let nrows = rows.len();
        ChuSpace::from_parts(k, nrows, self.ncols, rows.concat(), false)
    }
}

/// The diagonal of every square matrix whose rows and columns are lines of
/// `tree`. `rows[id]` is the row stored under `id`.
fn diagonals(tree: &PrefixTree, rows: &[Vec<Entry>], ncols: usize) -> Vec<Vec<Entry>> {
    let mut generator = MatrixGenerator::new(tree, tree);
    let mut found = Vec::new();
    while generator.produce_next() {
        let diagonal = generator
            .row_links()
            .iter()
            .enumerate()
            .map(|(i, link)| rows[link.datum().expect("complete row has a match")][i])
            .collect::<Vec<_>>();
        debug_assert_eq!(diagonal.len(), ncols);
        found.push(diagonal);
    }
    found
}

/// Componentwise boolean combination of two rows.
fn combine(a: &[Entry], b: &[Entry], op: impl Fn(bool, bool) -> bool) -> Vec<Entry> {
    a.iter()
        .zip(b)
        .map(|(&x, &y)| Entry::from(op(x == 1, y == 1)))
        .collect()
}
