// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Property tests for the laws of the Chu space algebra.

mod common;

use chu_calc::ChuSpace;
use common::{arb_space, arb_space_over, column_set, row_set};
use proptest::prelude::*;
use std::collections::HashSet;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Transposing twice gives back the same matrix.
    #[test]
    fn dual_is_an_involution(a in arb_space(4, 5, 5)) {
        prop_assert_eq!(a.dual().dual(), a);
    }

    /// Standardizing a standard space changes nothing.
    #[test]
    fn standardize_is_idempotent(a in arb_space(3, 6, 6)) {
        let standard = a.standardize();
        prop_assert!(standard.is_standard());
        prop_assert!(std::ptr::eq(standard.standardize(), standard));
    }

    /// The standard form keeps one copy of every row and column value.
    #[test]
    fn standardize_removes_exactly_repeats(a in arb_space(3, 6, 6)) {
        let standard = a.standardize();
        prop_assert_eq!(standard.nrows(), row_set(standard).len());
        prop_assert_eq!(standard.ncols(), column_set(standard).len());
        prop_assert_eq!(row_set(standard).len(), row_set(&a).len());
        prop_assert_eq!(column_set(standard).len(), column_set(&a).len());
    }

    /// Standardizing commutes with taking the dual.
    #[test]
    fn standardize_commutes_with_dual(a in arb_space(3, 5, 5)) {
        let dual = a.dual();
        let expected = a.standardize().dual();
        prop_assert_eq!(dual.standardize(), &expected);
    }

    /// Parsing the text of a space gives back the space.
    #[test]
    fn text_round_trip(a in arb_space(10, 4, 4)) {
        let text = a.unparse().unwrap();
        let k = a.k().to_string();
        let rows = a.nrows().to_string();
        let cols = a.ncols().to_string();
        let parsed = ChuSpace::parse(Some(&k), Some(&rows), Some(&cols), &text).unwrap();
        prop_assert_eq!(parsed, a);
    }

    #[test]
    fn choice_shape(a in arb_space(3, 4, 4), b in arb_space(3, 4, 4)) {
        let sum = ChuSpace::choice(&a, &b);
        prop_assert_eq!(sum.nrows(), a.nrows() + b.nrows());
        prop_assert_eq!(sum.ncols(), a.ncols() + b.ncols());
        prop_assert_eq!(sum.k(), a.k().max(b.k()));
    }

    #[test]
    fn product_shape(a in arb_space(3, 4, 4), b in arb_space(3, 4, 4)) {
        let product = ChuSpace::product(&a, &b);
        prop_assert_eq!(product.nrows(), a.nrows() * b.nrows());
        prop_assert_eq!(product.ncols(), a.ncols() + b.ncols());
    }

    /// Sequence never produces the same join column twice, however many
    /// repeated columns its operands have.
    #[test]
    fn sequence_join_columns_are_distinct(a in arb_space(3, 3, 5), b in arb_space(3, 3, 5)) {
        let seq = ChuSpace::sequence(&a, &b);
        prop_assert_eq!(seq.nrows(), a.nrows() + b.nrows());
        let columns: HashSet<Vec<u8>> = (0..seq.ncols()).map(|c| seq.column(c)).collect();
        prop_assert_eq!(columns.len(), seq.ncols());
        prop_assert!(seq.ncols() <= column_set(&a).len() * column_set(&b).len());
    }

    /// Every row of `a -o b` is a Chu transform: composing it with a point
    /// of `a` gives a point of `b`, and with a state of `b` a state of `a`.
    #[test]
    fn implication_rows_are_transforms(a in arb_space_over(2, 3, 3), b in arb_space_over(2, 3, 3)) {
        let hom = ChuSpace::implication(&a, &b);
        prop_assert_eq!(hom.ncols(), a.nrows() * b.ncols());
        let b_rows = row_set(&b);
        let a_columns = column_set(&a);
        for transform in hom.rows() {
            for r in 0..a.nrows() {
                let row = transform[r * b.ncols()..(r + 1) * b.ncols()].to_vec();
                prop_assert!(b_rows.contains(&row));
            }
            for c in 0..b.ncols() {
                let column: Vec<u8> = (0..a.nrows()).map(|r| transform[r * b.ncols() + c]).collect();
                prop_assert!(a_columns.contains(&column));
            }
        }
    }

    /// At K = 2 the union-intersection closure and the diagonal closure
    /// agree.
    #[test]
    fn query_closures_agree_at_k2(a in arb_space_over(2, 3, 3)) {
        prop_assert_eq!(row_set(&a.query2()), row_set(&a.query_diagonal()));
    }

    /// The query closure contains the original rows and is closed.
    #[test]
    fn query_is_a_closure(a in arb_space(3, 3, 3)) {
        let closed = a.query();
        let closed_rows = row_set(&closed);
        for row in row_set(&a) {
            prop_assert!(closed_rows.contains(&row));
        }
        prop_assert_eq!(row_set(&closed.query()), closed_rows);
    }
}
