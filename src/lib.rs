// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Chu space calculator.
//!
//! A Chu space over an alphabet of size K is a matrix with entries in
//! `0..K`, whose rows are *points* and whose columns are *states*. Chu
//! spaces with the operators of linear logic (dual, tensor, par, with,
//! plus, the modalities and linear implication) form a model of that logic.
//! This crate computes them.
//!
//! # Architecture
//!
//! Leaves first:
//!
//! - [`tree`]: [`Link`], a shared list of line ids, and [`PrefixTree`], a
//!   trie over fixed-length lines that records which ids end where
//! - [`engine`]: [`MatrixGenerator`], a backtracking search enumerating
//!   every matrix whose rows come from one prefix tree and whose columns
//!   come from another
//! - [`space`]: [`ChuSpace`], the immutable matrix value, its textual
//!   encoding and its algebra. `query` and `implication` are driven by the
//!   matrix generator
//! - [`context`]: [`Calculator`], named spaces and operator tables read
//!   through a [`Context`]
//!
//! # Example
//!
//! ```
//! use chu_calc::ChuSpace;
//!
//! // Two points, two states, each point in exactly one state.
//! let sp2: ChuSpace = "01\n10".parse()?;
//! let transforms = ChuSpace::implication(&sp2, &sp2);
//! assert_eq!(transforms.to_string(), "0110\n1001\n");
//! # Ok::<(), chu_calc::ChuError>(())
//! ```
//!
//! # References
//!
//! - Pratt, V. R. (1995). "The Stone Gamut: A Coordinatization of
//!   Mathematics." Logic in Computer Science.

pub mod context;
pub mod engine;
pub mod error;
pub mod space;
pub mod tree;

// Re-export commonly used types
pub use context::{BinaryOperator, Calculator, Context, Executable, UnaryOperator};
pub use engine::{MatrixGenerator, Morphism};
pub use error::ChuError;
pub use space::{ChuSpace, ColumnClass};
pub use tree::{Link, PrefixTree};
