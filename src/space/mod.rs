// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Chu spaces and their algebra.
//!
//! A Chu space is a `nrows`×`ncols` matrix with entries in `0..K`. Rows
//! are *points*, columns are *states*. Spaces are immutable: every
//! operator builds a new space.
//!
//! # Operators
//!
//! - Unary: [`dual`](ChuSpace::dual), [`standardize`](ChuSpace::standardize),
//!   [`query`](ChuSpace::query)
//! - Binary: [`choice`](ChuSpace::choice), [`product`](ChuSpace::product),
//!   [`sequence`](ChuSpace::sequence), [`implication`](ChuSpace::implication)
//!
//! `query` and `implication` are built on the
//! [`MatrixGenerator`](crate::engine::MatrixGenerator).
//!
//! # Canonical Form
//!
//! The standardized form of a space is computed on first request and
//! cached inside the space. The cache is a `OnceLock`, so racing first
//! requests from several threads are safe and compute it once.
//!
//! # Example
//!
//! ```
//! use chu_calc::ChuSpace;
//!
//! let space: ChuSpace = "1100\n1010".parse()?;
//! assert_eq!(space.k(), 2);
//! assert_eq!((space.nrows(), space.ncols()), (2, 4));
//! assert_eq!(space.dual().dual(), space);
//! assert_eq!(space.standardize().ncols(), 4);
//! # Ok::<(), chu_calc::ChuError>(())
//! ```

pub mod binary;
pub mod classify;
pub mod encoding;
pub mod query;
pub mod standard;

pub use classify::ColumnClass;

use crate::error::ChuError;
use crate::tree::PrefixTree;
use std::fmt;
use std::sync::OnceLock;

/// One matrix entry.
pub type Entry = u8;

/// Largest alphabet whose symbols fit in an [`Entry`].
pub const MAX_ALPHABET: usize = Entry::MAX as usize + 1;

/// Cached canonical form of a space.
#[derive(Debug, Clone)]
enum Standard {
    /// The space is already canonical.
    Itself,
    Reduced(Box<ChuSpace>),
}

/// An immutable Chu space.
#[derive(Clone)]
pub struct ChuSpace {
    k: usize,
    nrows: usize,
    ncols: usize,
    /// Row-major, `nrows * ncols` entries.
    matrix: Vec<Entry>,
    standard: OnceLock<Standard>,
}

impl ChuSpace {
    /// Build a space from row-major entries.
    ///
    /// Fails with [`ChuError::Config`] if `k` exceeds [`MAX_ALPHABET`], if
    /// the number of entries is not `nrows * ncols`, or if an entry is not
    /// below `k`.
    pub fn new(k: usize, nrows: usize, ncols: usize, entries: Vec<Entry>) -> Result<Self, ChuError> {
        check_alphabet(k)?;
        let cells = nrows
            .checked_mul(ncols)
            .ok_or_else(|| ChuError::config(format!("{}x{} matrix is too large", nrows, ncols)))?;
        if entries.len() != cells {
            return Err(ChuError::config(format!(
                "{}x{} matrix needs {} entries, got {}",
                nrows,
                ncols,
                cells,
                entries.len()
            )));
        }
        if let Some(index) = entries.iter().position(|&e| e as usize >= k) {
            return Err(ChuError::config(format!(
                "Entry ({},{}) out of bounds: {} > K-1={}",
                index / ncols + 1,
                index % ncols + 1,
                entries[index],
                k as i64 - 1
            )));
        }
        Ok(Self::from_parts(k, nrows, ncols, entries, false))
    }

    /// Build a space from a list of equal-length rows.
    pub fn from_rows<R: AsRef<[Entry]>>(k: usize, rows: &[R]) -> Result<Self, ChuError> {
        let ncols = rows.first().map_or(0, |row| row.as_ref().len());
        let mut entries = Vec::with_capacity(rows.len() * ncols);
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != ncols {
                return Err(ChuError::config(format!(
                    "Row {} has {} entries, expected {}",
                    r + 1,
                    row.len(),
                    ncols
                )));
            }
            entries.extend_from_slice(row);
        }
        Self::new(k, rows.len(), ncols, entries)
    }

    /// The tensor unit over an alphabet of size `k`: one point whose
    /// states are `0, 1, …, k-1`.
    pub fn unit(k: usize) -> Result<Self, ChuError> {
        check_alphabet(k)?;
        let row = (0..k).map(|e| e as Entry).collect();
        Ok(Self::from_parts(k, 1, k, row, true))
    }

    /// Trusting constructor.
    pub(crate) fn from_parts(
        k: usize,
        nrows: usize,
        ncols: usize,
        matrix: Vec<Entry>,
        standardized: bool,
    ) -> Self {
        debug_assert_eq!(matrix.len(), nrows * ncols);
        debug_assert!(matrix.iter().all(|&e| (e as usize) < k));
        let standard = if standardized {
            OnceLock::from(Standard::Itself)
        } else {
            OnceLock::new()
        };
        Self {
            k,
            nrows,
            ncols,
            matrix,
            standard,
        }
    }

    /// Size of the alphabet.
    pub fn k(&self) -> usize {
        self.k
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    pub fn entry(&self, row: usize, col: usize) -> Entry {
        assert!(col < self.ncols, "Column {} out of range", col);
        self.matrix[row * self.ncols + col]
    }

    pub fn row(&self, row: usize) -> &[Entry] {
        &self.matrix[row * self.ncols..(row + 1) * self.ncols]
    }

    pub fn column(&self, col: usize) -> Vec<Entry> {
        (0..self.nrows).map(|row| self.entry(row, col)).collect()
    }

    /// Iterate over the rows, top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Entry]> + '_ {
        (0..self.nrows).map(move |row| self.row(row))
    }

    /// Prefix tree of the rows, each tagged with its row index.
    pub fn row_tree(&self) -> PrefixTree {
        self.row_tree_with_arity(self.k)
    }

    /// Prefix tree of the columns, each tagged with its column index.
    pub fn col_tree(&self) -> PrefixTree {
        self.col_tree_with_arity(self.k)
    }

    pub(crate) fn row_tree_with_arity(&self, arity: usize) -> PrefixTree {
        let mut tree = PrefixTree::new(arity, self.ncols);
        for (r, row) in self.rows().enumerate() {
            tree.insert(row, r);
        }
        tree
    }

    pub(crate) fn col_tree_with_arity(&self, arity: usize) -> PrefixTree {
        let mut tree = PrefixTree::new(arity, self.nrows);
        for c in 0..self.ncols {
            tree.insert(&self.column(c), c);
        }
        tree
    }

    /// The transpose. The dual of a space known to be canonical is canonical.
    pub fn dual(&self) -> ChuSpace {
        let mut matrix = Vec::with_capacity(self.matrix.len());
        for c in 0..self.ncols {
            matrix.extend((0..self.nrows).map(|r| self.entry(r, c)));
        }
        let standardized = matches!(self.standard.get(), Some(Standard::Itself));
        Self::from_parts(self.k, self.ncols, self.nrows, matrix, standardized)
    }

    /// The canonical form: repeated rows and repeated columns removed, the
    /// survivors in lexicographic order. A space with nothing repeated is
    /// its own canonical form and is returned as is.
    ///
    /// Computed on the first call and cached.
    pub fn standardize(&self) -> &ChuSpace {
        match self.standard.get_or_init(|| self.compute_standard()) {
            Standard::Itself => self,
            Standard::Reduced(space) => space,
        }
    }

    /// True if the space has no repeated rows and no repeated columns.
    pub fn is_standard(&self) -> bool {
        matches!(self.standard.get_or_init(|| self.compute_standard()), Standard::Itself)
    }
}

fn check_alphabet(k: usize) -> Result<(), ChuError> {
    if k > MAX_ALPHABET {
        return Err(ChuError::config(format!(
            "K={} is out of bounds. Use 0<=K<={}",
            k, MAX_ALPHABET
        )));
    }
    Ok(())
}

impl PartialEq for ChuSpace {
    fn eq(&self, other: &Self) -> bool {
        self.k == other.k
            && self.nrows == other.nrows
            && self.ncols == other.ncols
            && self.matrix == other.matrix
    }
}

impl Eq for ChuSpace {}

impl fmt::Debug for ChuSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChuSpace")
            .field("k", &self.k)
            .field("nrows", &self.nrows)
            .field("ncols", &self.ncols)
            .field("rows", &self.rows().collect::<Vec<_>>())
            .finish()
    }
}

impl fmt::Display for ChuSpace {
    /// One line per row. Entries are digits when K <= 10, otherwise
    /// space-separated numbers.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.k <= encoding::MAX_DIGIT_ALPHABET;
        for row in self.rows() {
            for (c, entry) in row.iter().enumerate() {
                if !digits && c > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", entry)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
