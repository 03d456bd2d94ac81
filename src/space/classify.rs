// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Order classification of columns, used by
//! [`sequence`](ChuSpace::sequence).
//!
//! Columns are compared componentwise. Scanning columns left to right, each
//! column is compared against the earlier columns that are still candidates
//! for being an extreme element, and its class records what it was found to
//! be below or above.

use super::ChuSpace;
use std::cmp::Ordering;
use strum_macros::{Display, EnumIter};

/// Where a column sits in the componentwise order of all columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum ColumnClass {
    /// Below nothing and above nothing found so far.
    Unknown,
    /// Below something, above nothing.
    Initial,
    /// Above something, below nothing.
    Final,
    /// Both below and above something.
    Middle,
    /// Equal to an earlier column.
    Duplicate,
}

impl ColumnClass {
    /// The class after finding something strictly above this column.
    fn below_something(self) -> Self {
        match self {
            ColumnClass::Unknown => ColumnClass::Initial,
            ColumnClass::Final => ColumnClass::Middle,
            other => other,
        }
    }

    /// The class after finding something strictly below this column.
    fn above_something(self) -> Self {
        match self {
            ColumnClass::Unknown => ColumnClass::Final,
            ColumnClass::Initial => ColumnClass::Middle,
            other => other,
        }
    }

    /// May this column of the first operand precede a column of the second
    /// in a sequence?
    pub(crate) fn may_end(self) -> bool {
        matches!(self, ColumnClass::Unknown | ColumnClass::Final)
    }

    /// May this column of the second operand follow a column of the first
    /// in a sequence?
    pub(crate) fn may_start(self) -> bool {
        matches!(self, ColumnClass::Unknown | ColumnClass::Initial)
    }
}

impl ChuSpace {
    /// Compare two columns componentwise.
    ///
    /// Returns `None` when the columns are incomparable, i.e. one is
    /// strictly smaller in some row and strictly larger in another.
    pub fn compare_columns(&self, a: usize, b: usize) -> Option<Ordering> {
        let mut result = Ordering::Equal;
        for row in self.rows() {
            match (row[a].cmp(&row[b]), result) {
                (Ordering::Equal, _) => {}
                (ord, Ordering::Equal) => result = ord,
                (ord, current) if ord != current => return None,
                _ => {}
            }
        }
        Some(result)
    }

    /// Classify every column.
    ///
    /// A column equal to any earlier one is [`ColumnClass::Duplicate`].
    /// Otherwise the order is only compared against earlier columns that
    /// are not yet known to be middle elements.
    pub fn classify_columns(&self) -> Vec<ColumnClass> {
        let mut classes: Vec<ColumnClass> = Vec::with_capacity(self.ncols);
        for c in 0..self.ncols {
            classes.push(ColumnClass::Unknown);
            for d in 0..c {
                if classes[d] == ColumnClass::Duplicate {
                    continue;
                }
                match self.compare_columns(c, d) {
                    None => {}
                    Some(Ordering::Equal) => {
                        classes[c] = ColumnClass::Duplicate;
                        break;
                    }
                    Some(_) if classes[d] == ColumnClass::Middle => {}
                    Some(Ordering::Less) => {
                        classes[c] = classes[c].below_something();
                        classes[d] = classes[d].above_something();
                    }
                    Some(Ordering::Greater) => {
                        classes[c] = classes[c].above_something();
                        classes[d] = classes[d].below_something();
                    }
                }
            }
        }
        classes
    }
}
