// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Textual encoding of Chu spaces.
//!
//! A space is written as newline-terminated rows of digits, one digit per
//! entry, so only alphabets of at most ten symbols can be written. Three
//! optional header fields give K, the number of rows and the number of
//! columns; whatever is missing is inferred from the text:
//!
//! - K is one more than the largest digit
//! - the row count is the number of non-blank lines
//! - the column count is the length of the first row
//!
//! Short rows are padded with zeros, long rows are cut to the column
//! count, and missing rows are all zeros. Spaces, tabs and carriage returns
//! inside a row are ignored.

use super::{ChuSpace, Entry};
use crate::error::{ChuError, Field, Position};
use std::str::FromStr;

/// Largest alphabet the digit encoding can represent.
pub const MAX_DIGIT_ALPHABET: usize = 10;

/// Largest number of rows, columns or cells a parsed matrix may have.
pub const MAX_CELLS: usize = 1 << 28;

impl ChuSpace {
    /// Parse a space from its header fields and matrix text.
    ///
    /// A header that is `None` or blank is inferred.
    ///
    /// # Example
    ///
    /// ```
    /// use chu_calc::ChuSpace;
    ///
    /// let space = ChuSpace::parse(Some("3"), Some("3"), None, "12\n2")?;
    /// assert_eq!(space.k(), 3);
    /// assert_eq!(space.unparse()?, "12\n20\n00\n");
    /// # Ok::<(), chu_calc::ChuError>(())
    /// ```
    pub fn parse(
        k_text: Option<&str>,
        rows_text: Option<&str>,
        cols_text: Option<&str>,
        text: &str,
    ) -> Result<ChuSpace, ChuError> {
        let explicit_k = match parse_header(k_text, Field::Alphabet)? {
            Some(k) if !(0..=MAX_DIGIT_ALPHABET as i64).contains(&k) => {
                return Err(ChuError::config(format!(
                    "K={} is out of bounds. Use 0<=K<={}",
                    k, MAX_DIGIT_ALPHABET
                )));
            }
            k => k.map(|k| k as usize),
        };
        let explicit_rows = parse_dimension(rows_text, Field::Rows)?;
        let explicit_cols = parse_dimension(cols_text, Field::Cols)?;

        let lines: Vec<&str> = text.trim().split('\n').filter(|line| !line.is_empty()).collect();
        let nrows = explicit_rows.unwrap_or(lines.len());
        let mut ncols = explicit_cols;
        check_shape(nrows, ncols.unwrap_or(0))?;
        let mut inferred_k = 0;
        let mut matrix: Vec<Entry> = Vec::new();

        for (r, line) in lines.iter().take(nrows).enumerate() {
            let mut entries: Vec<Entry> = Vec::new();
            for ch in line.chars() {
                if matches!(ch, ' ' | '\t' | '\r') {
                    continue;
                }
                let position = Position::Entry {
                    row: r + 1,
                    column: entries.len() + 1,
                };
                let Some(digit) = ch.to_digit(10) else {
                    return Err(ChuError::parse(position, format!("`{}' is not a digit", ch)));
                };
                match explicit_k {
                    Some(k) if digit as usize >= k => {
                        return Err(ChuError::parse(
                            position,
                            format!("out of bounds: {} > K-1={}", digit, k as i64 - 1),
                        ));
                    }
                    Some(_) => {}
                    None => inferred_k = inferred_k.max(digit as usize + 1),
                }
                entries.push(digit as Entry);
            }
            let ncols = *ncols.get_or_insert(entries.len());
            entries.resize(ncols, 0);
            matrix.extend_from_slice(&entries);
        }

        let ncols = ncols.unwrap_or(0);
        let cells = check_shape(nrows, ncols)?;
        matrix.resize(cells, 0);

        let k = match explicit_k {
            Some(0) if cells > 0 => {
                return Err(ChuError::config("K=0 admits no entries, but the matrix has cells"));
            }
            Some(k) => k,
            None if cells > 0 => inferred_k.max(1),
            None => inferred_k,
        };
        Ok(ChuSpace::from_parts(k, nrows, ncols, matrix, false))
    }

    /// Write the space as rows of digits, each row followed by a newline.
    ///
    /// Fails with [`ChuError::Config`] when K is too large for digits.
    pub fn unparse(&self) -> Result<String, ChuError> {
        if self.k > MAX_DIGIT_ALPHABET {
            return Err(ChuError::config(format!("K={} is out of bounds", self.k)));
        }
        let mut out = String::with_capacity(self.nrows * (self.ncols + 1));
        for row in self.rows() {
            out.extend(row.iter().map(|&entry| char::from(b'0' + entry)));
            out.push('\n');
        }
        Ok(out)
    }
}

impl FromStr for ChuSpace {
    type Err = ChuError;

    /// Parse with every header inferred.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        ChuSpace::parse(None, None, None, text)
    }
}

/// The cell count of an `nrows`×`ncols` matrix, if every dimension and the
/// count are within [`MAX_CELLS`].
fn check_shape(nrows: usize, ncols: usize) -> Result<usize, ChuError> {
    match nrows.checked_mul(ncols) {
        Some(cells) if nrows <= MAX_CELLS && ncols <= MAX_CELLS && cells <= MAX_CELLS => Ok(cells),
        _ => Err(ChuError::config(format!(
            "{}x{} matrix is too large. Use at most {} cells",
            nrows, ncols, MAX_CELLS
        ))),
    }
}

fn parse_header(text: Option<&str>, field: Field) -> Result<Option<i64>, ChuError> {
    let Some(text) = text.map(str::trim).filter(|text| !text.is_empty()) else {
        return Ok(None);
    };
    text.parse::<i64>().map(Some).map_err(|_| {
        ChuError::parse(
            Position::Header(field),
            format!("can't parse {}='{}'", field, text),
        )
    })
}

fn parse_dimension(text: Option<&str>, field: Field) -> Result<Option<usize>, ChuError> {
    match parse_header(text, field)? {
        Some(value) if value < 0 => Err(ChuError::config(format!(
            "{}={} is out of bounds. Use {}>=0",
            field, value, field
        ))),
        value => Ok(value.map(|value| value as usize)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infers_everything() {
        let space: ChuSpace = "1100\n1010".parse().unwrap();
        assert_eq!(space.k(), 2);
        assert_eq!((space.nrows(), space.ncols()), (2, 4));
        assert_eq!(space.row(1), &[1, 0, 1, 0]);
        assert_eq!(space.unparse().unwrap(), "1100\n1010\n");
    }

    #[test]
    fn test_explicit_headers() {
        let space = ChuSpace::parse(Some(" 4 "), Some("2"), Some("3"), "13\n").unwrap();
        assert_eq!(space.k(), 4);
        assert_eq!(space.unparse().unwrap(), "130\n000\n");
    }

    #[test]
    fn test_blank_headers_are_inferred() {
        let space = ChuSpace::parse(Some(""), Some("  "), None, "201").unwrap();
        assert_eq!(space.k(), 3);
        assert_eq!((space.nrows(), space.ncols()), (1, 3));
    }

    #[test]
    fn test_short_rows_padded_long_rows_cut() {
        let space: ChuSpace = "101\n1\n1111".parse().unwrap();
        assert_eq!(space.unparse().unwrap(), "101\n100\n111\n");
    }

    #[test]
    fn test_extra_rows_ignored() {
        let space = ChuSpace::parse(None, Some("1"), None, "01\n11\n").unwrap();
        assert_eq!(space.unparse().unwrap(), "01\n");
    }

    #[test]
    fn test_whitespace_and_blank_lines() {
        let space: ChuSpace = "\n 0 1\t1\r\n\n\n1 0 0\n\n".parse().unwrap();
        assert_eq!(space.unparse().unwrap(), "011\n100\n");
    }

    #[test]
    fn test_empty_text() {
        let space: ChuSpace = "".parse().unwrap();
        assert_eq!((space.k(), space.nrows(), space.ncols()), (0, 0, 0));
        assert_eq!(space.unparse().unwrap(), "");

        let space = ChuSpace::parse(Some("2"), Some("0"), Some("1"), "").unwrap();
        assert_eq!((space.nrows(), space.ncols()), (0, 1));
    }

    #[test]
    fn test_zero_filled_rows_get_an_alphabet() {
        let space = ChuSpace::parse(None, Some("2"), Some("2"), "").unwrap();
        assert_eq!(space.k(), 1);
        assert_eq!(space.unparse().unwrap(), "00\n00\n");

        let err = ChuSpace::parse(Some("0"), Some("2"), Some("2"), "").unwrap_err();
        assert!(matches!(err, ChuError::Config(_)));
    }

    #[test]
    fn test_not_a_digit() {
        let err: ChuError = "01\n0x1".parse::<ChuSpace>().unwrap_err();
        assert_eq!(
            err,
            ChuError::Parse {
                position: Position::Entry { row: 2, column: 2 },
                message: "`x' is not a digit".to_string(),
            }
        );
    }

    #[test]
    fn test_entry_out_of_bounds() {
        let err = ChuSpace::parse(Some("2"), None, None, "01\n12").unwrap_err();
        assert_eq!(err.to_string(), "entry (2,2): out of bounds: 2 > K-1=1");
    }

    #[test]
    fn test_bad_headers() {
        let err = ChuSpace::parse(Some("two"), None, None, "").unwrap_err();
        assert_eq!(err.to_string(), "K: can't parse K='two'");

        let err = ChuSpace::parse(Some("11"), None, None, "").unwrap_err();
        assert!(matches!(err, ChuError::Config(_)));

        let err = ChuSpace::parse(Some("-1"), None, None, "").unwrap_err();
        assert!(matches!(err, ChuError::Config(_)));

        let err = ChuSpace::parse(None, Some("-3"), None, "").unwrap_err();
        assert_eq!(err.to_string(), "#rows=-3 is out of bounds. Use #rows>=0");

        let err = ChuSpace::parse(None, None, Some("x"), "").unwrap_err();
        assert!(matches!(
            err,
            ChuError::Parse {
                position: Position::Header(Field::Cols),
                ..
            }
        ));
    }

    #[test]
    fn test_oversized_headers() {
        let err = ChuSpace::parse(Some("2"), Some("10000000000"), Some("1000000000"), "").unwrap_err();
        assert!(matches!(err, ChuError::Config(_)));
        assert!(err.to_string().contains("too large"));

        // Each dimension is bounded on its own, even with nothing to fill.
        let err = ChuSpace::parse(None, Some("0"), Some("1000000000000"), "").unwrap_err();
        assert!(matches!(err, ChuError::Config(_)));
        let err = ChuSpace::parse(None, Some("1000000000000"), None, "").unwrap_err();
        assert!(matches!(err, ChuError::Config(_)));

        assert_eq!(check_shape(2, MAX_CELLS / 2).unwrap(), MAX_CELLS);
        assert!(check_shape(2, MAX_CELLS / 2 + 1).is_err());
        assert_eq!(check_shape(0, MAX_CELLS).unwrap(), 0);
    }

    #[test]
    fn test_unparse_rejects_large_alphabet() {
        let space = ChuSpace::unit(11).unwrap();
        assert!(matches!(space.unparse(), Err(ChuError::Config(_))));
        assert_eq!(ChuSpace::unit(10).unwrap().unparse().unwrap(), "0123456789\n");
    }
}
