// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use chu_calc::space::Entry;
use chu_calc::ChuSpace;
use proptest::collection::vec;
use proptest::prelude::*;

/// Parse a space with every header inferred.
pub fn space(text: &str) -> ChuSpace {
    text.parse()
        .unwrap_or_else(|err| panic!("bad test space {:?}: {}", text, err))
}

/// The distinct rows of a space, sorted.
pub fn row_set(space: &ChuSpace) -> Vec<Vec<Entry>> {
    let mut rows: Vec<_> = space.rows().map(<[Entry]>::to_vec).collect();
    rows.sort();
    rows.dedup();
    rows
}

/// The distinct columns of a space, sorted.
pub fn column_set(space: &ChuSpace) -> Vec<Vec<Entry>> {
    let mut columns: Vec<_> = (0..space.ncols()).map(|c| space.column(c)).collect();
    columns.sort();
    columns.dedup();
    columns
}

/// Spaces over exactly `k` symbols with up to `max_rows` rows and
/// `max_cols` columns.
pub fn arb_space_over(k: usize, max_rows: usize, max_cols: usize) -> impl Strategy<Value = ChuSpace> {
    (0..=max_rows, 0..=max_cols).prop_flat_map(move |(nrows, ncols)| {
        vec(0..k as Entry, nrows * ncols).prop_map(move |entries| {
            ChuSpace::new(k, nrows, ncols, entries).expect("entries are below k")
        })
    })
}

/// Spaces over 1 to `max_k` symbols.
pub fn arb_space(max_k: usize, max_rows: usize, max_cols: usize) -> impl Strategy<Value = ChuSpace> {
    (1..=max_k).prop_flat_map(move |k| arb_space_over(k, max_rows, max_cols))
}
