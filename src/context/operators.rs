// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Operator and executable tables.
//!
//! Each table is a closed enum whose variants parse from, and display as,
//! the symbols used by the calculator. The derived linear-logic
//! connectives are compositions of the primitive operators on
//! [`ChuSpace`].

use crate::error::ChuError;
use crate::space::ChuSpace;
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum UnaryOperator {
    #[strum(to_string = "ID")]
    Identity,
    #[strum(to_string = "_|_")]
    Dual,
    /// Why not: [`ChuSpace::query`].
    #[strum(to_string = "?")]
    Query,
    /// Of course: the dual of the query of the dual.
    #[strum(to_string = "!")]
    OfCourse,
}

impl UnaryOperator {
    pub fn lookup(symbol: &str) -> Result<Self, ChuError> {
        Self::from_str(symbol)
            .map_err(|_| ChuError::lookup(format!("Unknown Unary Operation {}", symbol)))
    }

    pub fn apply(self, arg: &ChuSpace) -> ChuSpace {
        match self {
            UnaryOperator::Identity => arg.clone(),
            UnaryOperator::Dual => arg.dual(),
            UnaryOperator::Query => arg.query(),
            UnaryOperator::OfCourse => arg.dual().query().dual(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum BinaryOperator {
    /// Tensor: `(A -o B⊥)⊥`.
    #[strum(to_string = "*")]
    Tensor,
    /// Par: `A⊥ -o B`.
    #[strum(to_string = "#")]
    Par,
    #[strum(to_string = "-o")]
    Implication,
    /// Plus: `(A⊥ & B⊥)⊥`.
    #[strum(to_string = "+")]
    Plus,
    /// With: [`ChuSpace::product`].
    #[strum(to_string = "&")]
    With,
    /// Intuitionistic implication: `!A -o B`.
    #[strum(to_string = "=>")]
    Entails,
    #[strum(to_string = "U")]
    Choice,
    #[strum(to_string = ";")]
    Sequence,
}

impl BinaryOperator {
    pub fn lookup(symbol: &str) -> Result<Self, ChuError> {
        Self::from_str(symbol)
            .map_err(|_| ChuError::lookup(format!("Unknown Binary Operation {}", symbol)))
    }

    pub fn apply(self, left: &ChuSpace, right: &ChuSpace) -> ChuSpace {
        match self {
            BinaryOperator::Tensor => ChuSpace::implication(left, &right.dual()).dual(),
            BinaryOperator::Par => ChuSpace::implication(&left.dual(), right),
            BinaryOperator::Implication => ChuSpace::implication(left, right),
            BinaryOperator::Plus => ChuSpace::product(&left.dual(), &right.dual()).dual(),
            BinaryOperator::With => ChuSpace::product(left, right),
            BinaryOperator::Entails => {
                let of_course = UnaryOperator::OfCourse.apply(left);
                ChuSpace::implication(&of_course, right)
            }
            BinaryOperator::Choice => ChuSpace::choice(left, right),
            BinaryOperator::Sequence => ChuSpace::sequence(left, right),
        }
    }
}

/// Commands that change the calculator's context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum Executable {
    /// Standardize every result.
    #[strum(to_string = "Unique", serialize = "on")]
    Unique,
    /// Keep repeated rows and columns.
    #[strum(to_string = "Multi", serialize = "multi", serialize = "off")]
    Multi,
}

impl Executable {
    pub fn lookup(name: &str) -> Result<Self, ChuError> {
        Self::from_str(name).map_err(|_| ChuError::lookup(format!("Unknown Executable {}", name)))
    }

    /// The standardization setting this executable selects.
    pub fn standardization(self) -> bool {
        matches!(self, Executable::Unique)
    }
}
