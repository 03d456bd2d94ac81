// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Binary operators on Chu spaces.
//!
//! Every operator works over the larger of the two alphabets.

use super::{ChuSpace, ColumnClass, Entry};
use crate::engine::MatrixGenerator;
use tracing::debug;

impl ChuSpace {
    /// Block-diagonal sum: `a` top left, `b` bottom right, zeros elsewhere.
    pub fn choice(a: &ChuSpace, b: &ChuSpace) -> ChuSpace {
        let k = a.k.max(b.k);
        let nrows = a.nrows + b.nrows;
        let ncols = a.ncols + b.ncols;
        let mut matrix = Vec::with_capacity(nrows * ncols);
        for row in a.rows() {
            matrix.extend_from_slice(row);
            matrix.resize(matrix.len() + b.ncols, 0);
        }
        for row in b.rows() {
            matrix.resize(matrix.len() + a.ncols, 0);
            matrix.extend_from_slice(row);
        }
        ChuSpace::from_parts(k, nrows, ncols, matrix, false)
    }

    /// One row for each pair of rows, the row of `a` followed by the row of
    /// `b`. Pairs are taken with the row of `a` varying slowest.
    pub fn product(a: &ChuSpace, b: &ChuSpace) -> ChuSpace {
        let k = a.k.max(b.k);
        let nrows = a.nrows * b.nrows;
        let ncols = a.ncols + b.ncols;
        let mut matrix = Vec::with_capacity(nrows * ncols);
        for a_row in a.rows() {
            for b_row in b.rows() {
                matrix.extend_from_slice(a_row);
                matrix.extend_from_slice(b_row);
            }
        }
        ChuSpace::from_parts(k, nrows, ncols, matrix, false)
    }

    /// Sequential composition: `a` happens before `b`.
    ///
    /// The rows are those of `a` followed by those of `b`. Each column is a
    /// column of `a` stacked on a column of `b`, for every pair where the
    /// column of `a` could be a last state or the column of `b` a first
    /// one (see [`classify_columns`](Self::classify_columns)). Repeated
    /// columns of either operand are used once.
    pub fn sequence(a: &ChuSpace, b: &ChuSpace) -> ChuSpace {
        let k = a.k.max(b.k);
        let a_classes = a.classify_columns();
        let b_classes = b.classify_columns();

        let mut columns: Vec<(usize, usize)> = Vec::new();
        for (ac, a_class) in a_classes.iter().enumerate() {
            if *a_class == ColumnClass::Duplicate {
                continue;
            }
            for (bc, b_class) in b_classes.iter().enumerate() {
                if *b_class == ColumnClass::Duplicate {
                    continue;
                }
                if a_class.may_end() || b_class.may_start() {
                    columns.push((ac, bc));
                }
            }
        }

        let nrows = a.nrows + b.nrows;
        let ncols = columns.len();
        let mut matrix = Vec::with_capacity(nrows * ncols);
        for r in 0..a.nrows {
            matrix.extend(columns.iter().map(|&(ac, _)| a.entry(r, ac)));
        }
        for r in 0..b.nrows {
            matrix.extend(columns.iter().map(|&(_, bc)| b.entry(r, bc)));
        }
        debug!(
            a_cols = a.ncols,
            b_cols = b.ncols,
            cols = ncols,
            "sequence kept column pairs"
        );
        ChuSpace::from_parts(k, nrows, ncols, matrix, false)
    }

    /// Linear implication `a -o b`: the space of Chu transforms from `a`
    /// to `b`.
    ///
    /// A transform is a `a.nrows()`×`b.ncols()` matrix whose rows are rows
    /// of `b` and whose columns are columns of `a`. Each transform becomes
    /// one row of the result, flattened row by row, and appears once for
    /// every way of choosing those rows of `b` and columns of `a`.
    ///
    /// Panics if that number of ways overflows `usize`.
    pub fn implication(a: &ChuSpace, b: &ChuSpace) -> ChuSpace {
        let k = a.k.max(b.k);
        let row_tree = b.row_tree_with_arity(k);
        let col_tree = a.col_tree_with_arity(k);
        let size = a.nrows * b.ncols;

        let mut generator = MatrixGenerator::new(&row_tree, &col_tree);
        let mut matrix: Vec<Entry> = Vec::new();
        let mut nrows = 0;
        let mut transforms = 0;
        while generator.produce_next() {
            transforms += 1;
            let instances = generator.morphism().multiplicity();
            let mut transform = Vec::with_capacity(size);
            for link in generator.row_links() {
                let id = link.datum().expect("complete row matches a row of b");
                transform.extend_from_slice(b.row(id));
            }
            for _ in 0..instances {
                matrix.extend_from_slice(&transform);
            }
            nrows += instances;
        }
        debug!(
            transforms,
            rows = nrows,
            cols = size,
            "implication enumerated transforms"
        );
        ChuSpace::from_parts(k, nrows, size, matrix, false)
    }
}
