// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Standardization: removing repeated rows and columns.

use super::{ChuSpace, Standard};
use std::cmp::Ordering;

impl ChuSpace {
    pub(super) fn compute_standard(&self) -> Standard {
        let unique_rows = unique_sorted(self.nrows, |a, b| self.row(a).cmp(self.row(b)));
        let unique_cols = unique_sorted(self.ncols, |a, b| self.lex_compare_columns(a, b));

        if unique_rows.len() == self.nrows && unique_cols.len() == self.ncols {
            return Standard::Itself;
        }

        let mut matrix = Vec::with_capacity(unique_rows.len() * unique_cols.len());
        for &r in &unique_rows {
            matrix.extend(unique_cols.iter().map(|&c| self.entry(r, c)));
        }
        tracing::debug!(
            from_rows = self.nrows,
            from_cols = self.ncols,
            rows = unique_rows.len(),
            cols = unique_cols.len(),
            "standardized space"
        );
        Standard::Reduced(Box::new(ChuSpace::from_parts(
            self.k,
            unique_rows.len(),
            unique_cols.len(),
            matrix,
            true,
        )))
    }

    /// Lexicographic comparison of two columns, top row first.
    fn lex_compare_columns(&self, a: usize, b: usize) -> Ordering {
        (0..self.nrows)
            .map(|r| self.entry(r, a).cmp(&self.entry(r, b)))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

/// Indices `0..count` with repeats dropped, in sorted order.
///
/// Each index is placed by binary search among the indices kept so far;
/// the first of several equal indices is the one kept.
fn unique_sorted(count: usize, compare: impl Fn(usize, usize) -> Ordering) -> Vec<usize> {
    let mut unique: Vec<usize> = Vec::with_capacity(count);
    for candidate in 0..count {
        if let Err(position) = unique.binary_search_by(|&kept| compare(kept, candidate)) {
            unique.insert(position, candidate);
        }
    }
    unique
}
