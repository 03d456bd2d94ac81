// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The herringbone visitation order of matrix cells.
//!
//! The generator fills cells so that the filled region is always an
//! initial segment of this order. For a 5×4 matrix the order is:
//!
//! ```text
//!  1  2  3  4
//!  5  9 10 11
//!  6 12 15 16
//!  7 13 17 19
//!  8 14 18 20
//! ```
//!
//! Row `i` is completed left to right from the diagonal, then column `i`
//! top to bottom below the diagonal. Every step therefore extends exactly
//! one partial row and one partial column by one symbol.

/// Position of the next cell to fill.
///
/// After the last cell the cursor moves out of bounds; [`Cursor::retreat`]
/// from there returns to the last cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    nrows: usize,
    ncols: usize,
    row: usize,
    col: usize,
}

impl Cursor {
    /// A cursor on cell (0,0) of an `nrows`×`ncols` matrix.
    pub fn new(nrows: usize, ncols: usize) -> Self {
        Self {
            nrows,
            ncols,
            row: 0,
            col: 0,
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// True while the cursor designates a cell; false once the matrix is full.
    pub fn in_bounds(&self) -> bool {
        self.row < self.nrows && self.col < self.ncols
    }

    pub fn at_origin(&self) -> bool {
        self.row == 0 && self.col == 0
    }

    /// Step to the next cell.
    pub fn advance(&mut self) {
        if self.row <= self.col {
            // Growing a row rightward.
            self.col += 1;
            if self.col == self.ncols {
                // Row full: start the column below the diagonal.
                self.col = self.row;
                self.row = self.col + 1;
            }
        } else {
            // Growing a column downward.
            self.row += 1;
            if self.row == self.nrows {
                // Column full: start the next row on the diagonal.
                self.row = self.col + 1;
                self.col = self.row;
            }
        }
    }

    /// Step back to the previous cell. Returns false at (0,0).
    pub fn retreat(&mut self) -> bool {
        if self.at_origin() {
            return false;
        }
        if self.row <= self.col {
            self.col -= 1;
            if self.row == self.col + 1 {
                // Row empty: back to the bottom of the previous column.
                self.row = self.nrows - 1;
            }
        } else {
            self.row -= 1;
            if self.row == self.col {
                // Column empty: back to the end of the previous row.
                self.col = self.ncols - 1;
            }
        }
        true
    }
}

/// All cells of an `nrows`×`ncols` matrix in herringbone order.
pub fn cells(nrows: usize, ncols: usize) -> impl Iterator<Item = (usize, usize)> {
    let mut cursor = Cursor::new(nrows, ncols);
    std::iter::from_fn(move || {
        if !cursor.in_bounds() {
            return None;
        }
        let cell = (cursor.row(), cursor.col());
        cursor.advance();
        Some(cell)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_5_by_4() {
        let expected = [
            [1, 2, 3, 4],
            [5, 9, 10, 11],
            [6, 12, 15, 16],
            [7, 13, 17, 19],
            [8, 14, 18, 20],
        ];
        let mut numbering = [[0; 4]; 5];
        for (i, (row, col)) in cells(5, 4).enumerate() {
            numbering[row][col] = i + 1;
        }
        assert_eq!(numbering, expected);
    }

    #[test]
    fn test_every_cell_once() {
        for nrows in 0..6 {
            for ncols in 0..6 {
                let mut visited: Vec<_> = cells(nrows, ncols).collect();
                assert_eq!(visited.len(), nrows * ncols);
                visited.sort();
                visited.dedup();
                assert_eq!(visited.len(), nrows * ncols);
            }
        }
    }

    #[test]
    fn test_retreat_reverses_advance() {
        for nrows in 1..6 {
            for ncols in 1..6 {
                let forward: Vec<_> = cells(nrows, ncols).collect();

                let mut cursor = Cursor::new(nrows, ncols);
                while cursor.in_bounds() {
                    cursor.advance();
                }
                let mut backward = Vec::new();
                while cursor.retreat() {
                    backward.push((cursor.row(), cursor.col()));
                }
                backward.reverse();
                assert_eq!(forward, backward, "shape {}x{}", nrows, ncols);
                assert!(cursor.at_origin());
            }
        }
    }

    #[test]
    fn test_empty_shapes_start_out_of_bounds() {
        assert!(!Cursor::new(0, 3).in_bounds());
        assert!(!Cursor::new(3, 0).in_bounds());
        let mut cursor = Cursor::new(0, 0);
        assert!(!cursor.retreat());
    }
}
