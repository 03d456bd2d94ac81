// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters kept by a [`MatrixGenerator`](super::MatrixGenerator) while it
//! searches, useful for judging how much of the search space was pruned.

use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(EnumCountMacro, Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Morphisms produced.
    Morphisms,
    /// Cells successfully filled.
    Extensions,
    /// Cells given back on backtracking.
    Backtracks,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Bump `counter` once.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Value of `counter` so far.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}
