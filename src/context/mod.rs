// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The calculator: named spaces, operator lookup and the evaluation context.
//!
//! A [`Calculator`] holds two binding tables:
//! - constants, fixed at construction, some of which depend on the
//!   current alphabet size (the tensor unit `1` and its dual `_|_`)
//! - variables, which can be rebound freely
//!
//! Every value handed out by the calculator is first *conformed* to the
//! [`Context`]: standardized when standardization is on, returned as is
//! otherwise.
//!
//! # Example
//!
//! ```
//! use chu_calc::Calculator;
//!
//! let mut calc = Calculator::new();
//! let sp2 = calc.evaluate("Sp2")?;
//! calc.bind_variable("p", Some(sp2))?;
//! let tensor = calc.evaluate_binary("p", "*", "Sp2")?;
//! assert_eq!(tensor.to_string(), "01\n10\n");
//!
//! calc.invoke("multi")?;
//! let tensor = calc.evaluate_binary("p", "*", "Sp2")?;
//! assert_eq!(tensor.nrows(), 4);
//! # Ok::<(), chu_calc::ChuError>(())
//! ```

pub mod operators;

pub use operators::{BinaryOperator, Executable, UnaryOperator};

use crate::error::ChuError;
use crate::space::{ChuSpace, MAX_ALPHABET};
use std::collections::BTreeMap;
use tracing::debug;

/// Settings every calculator result is filtered through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    /// Alphabet size for the constants `1` and `_|_`.
    pub k: usize,
    /// Whether results are standardized.
    pub standardize: bool,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            k: 2,
            standardize: true,
        }
    }
}

impl ChuSpace {
    /// The space as the context wants to see it.
    pub fn conform(&self, context: &Context) -> ChuSpace {
        if context.standardize {
            self.standardize().clone()
        } else {
            self.clone()
        }
    }
}

/// What an identifier is bound to.
#[derive(Debug, Clone)]
enum Binding {
    Undefined,
    /// The tensor unit of the current K.
    Unit,
    /// The dual of the tensor unit of the current K.
    Bottom,
    Space(ChuSpace),
}

impl Binding {
    fn is_defined(&self) -> bool {
        !matches!(self, Binding::Undefined)
    }

    fn conform(&self, context: &Context) -> Result<Option<ChuSpace>, ChuError> {
        Ok(match self {
            Binding::Undefined => None,
            Binding::Unit => Some(ChuSpace::unit(context.k)?.conform(context)),
            Binding::Bottom => Some(ChuSpace::unit(context.k)?.dual().conform(context)),
            Binding::Space(space) => Some(space.conform(context)),
        })
    }
}

/// Named Chu spaces plus the context they are read through.
#[derive(Debug, Clone)]
pub struct Calculator {
    context: Context,
    constants: BTreeMap<String, Binding>,
    variables: BTreeMap<String, Binding>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// A calculator with the standard constants and the undefined
    /// variables `p`, `q`, `u` and `v`.
    pub fn new() -> Self {
        let mut constants = BTreeMap::new();
        constants.insert("Undef".to_string(), Binding::Undefined);
        constants.insert("1".to_string(), Binding::Unit);
        constants.insert("_|_".to_string(), Binding::Bottom);
        for (name, rows, cols, text) in [
            ("0", "0", "1", ""),
            ("T", "1", "0", ""),
            ("Pt2", "2", "2", "00\n01\n"),
            ("Sp2", "2", "2", "01\n10\n"),
            ("GF2^2", "4", "4", "0000\n0101\n0011\n0110\n"),
        ] {
            let space = ChuSpace::parse(Some("2"), Some(rows), Some(cols), text)
                .expect("built-in constant parses");
            constants.insert(name.to_string(), Binding::Space(space));
        }

        let variables = ["p", "q", "u", "v"]
            .into_iter()
            .map(|name| (name.to_string(), Binding::Undefined))
            .collect();

        Self {
            context: Context::default(),
            constants,
            variables,
        }
    }

    /// A copy of the current context.
    pub fn context(&self) -> Context {
        self.context
    }

    pub fn set_k(&mut self, k: i64) -> Result<(), ChuError> {
        if k < 0 {
            return Err(ChuError::config("Cannot use negative values for K"));
        }
        if k as u64 > MAX_ALPHABET as u64 {
            return Err(ChuError::config(format!(
                "K={} is out of bounds. Use 0<=K<={}",
                k, MAX_ALPHABET
            )));
        }
        self.context.k = k as usize;
        Ok(())
    }

    pub fn set_standardization(&mut self, standardize: bool) {
        self.context.standardize = standardize;
    }

    /// Fails if `name` cannot be declared as a new variable.
    pub fn check_new_variable_name(&self, name: &str) -> Result<(), ChuError> {
        if name.is_empty() {
            return Err(ChuError::lookup(
                "The empty string is not a legal variable name",
            ));
        }
        if self.constants.contains_key(name) || self.variables.contains_key(name) {
            return Err(ChuError::lookup(format!("Identifier {} is in use", name)));
        }
        Ok(())
    }

    /// Bind (or declare) a variable. `None` leaves it undefined.
    pub fn bind_variable(&mut self, name: &str, value: Option<ChuSpace>) -> Result<(), ChuError> {
        if self.constants.contains_key(name) {
            return Err(ChuError::lookup(format!(
                "Can't change binding of constant {}",
                name
            )));
        }
        debug!(name, defined = value.is_some(), "binding variable");
        let binding = value.map_or(Binding::Undefined, Binding::Space);
        self.variables.insert(name.to_string(), binding);
        Ok(())
    }

    /// The value of a variable exactly as bound, without conforming it.
    pub fn lookup_variable(&self, name: &str) -> Result<Option<&ChuSpace>, ChuError> {
        match self.variables.get(name) {
            Some(Binding::Space(space)) => Ok(Some(space)),
            Some(_) => Ok(None),
            None => Err(ChuError::lookup(format!("Unknown Variable {}", name))),
        }
    }

    /// Identifiers that can be assigned to.
    pub fn lvalue_identifiers(&self) -> Vec<&str> {
        self.variables.keys().map(String::as_str).collect()
    }

    /// Identifiers that currently have a value.
    pub fn rvalue_identifiers(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .constants
            .iter()
            .chain(&self.variables)
            .filter(|(_, binding)| binding.is_defined())
            .map(|(name, _)| name.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    /// The conformed value of a constant or variable, `None` if undefined.
    pub fn lookup(&self, identifier: &str) -> Result<Option<ChuSpace>, ChuError> {
        let binding = self
            .constants
            .get(identifier)
            .or_else(|| self.variables.get(identifier))
            .ok_or_else(|| ChuError::lookup(format!("Unknown Chu Space {}", identifier)))?;
        binding.conform(&self.context)
    }

    /// The conformed value of a constant or variable.
    pub fn evaluate(&self, identifier: &str) -> Result<ChuSpace, ChuError> {
        self.lookup(identifier)?
            .ok_or_else(|| ChuError::lookup(format!("{} is undefined", identifier)))
    }

    pub fn apply_unary(&self, op: UnaryOperator, arg: &ChuSpace) -> ChuSpace {
        let result = op.apply(arg).conform(&self.context);
        debug!(%op, rows = result.nrows(), cols = result.ncols(), "applied unary operator");
        result
    }

    pub fn apply_binary(&self, op: BinaryOperator, left: &ChuSpace, right: &ChuSpace) -> ChuSpace {
        let result = op.apply(left, right).conform(&self.context);
        debug!(%op, rows = result.nrows(), cols = result.ncols(), "applied binary operator");
        result
    }

    /// Look up an operator and an identifier by name and apply one to the other.
    pub fn evaluate_unary(&self, op: &str, identifier: &str) -> Result<ChuSpace, ChuError> {
        let op = UnaryOperator::lookup(op)?;
        let arg = self.evaluate(identifier)?;
        Ok(self.apply_unary(op, &arg))
    }

    pub fn evaluate_binary(&self, left: &str, op: &str, right: &str) -> Result<ChuSpace, ChuError> {
        let op = BinaryOperator::lookup(op)?;
        let left = self.evaluate(left)?;
        let right = self.evaluate(right)?;
        Ok(self.apply_binary(op, &left, &right))
    }

    /// Run an executable by name.
    pub fn invoke(&mut self, name: &str) -> Result<(), ChuError> {
        let executable = Executable::lookup(name)?;
        self.set_standardization(executable.standardization());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn space(text: &str) -> ChuSpace {
        text.parse().unwrap()
    }

    #[test]
    fn test_default_context() {
        let calc = Calculator::new();
        assert_eq!(calc.context(), Context { k: 2, standardize: true });
    }

    #[test]
    fn test_constants() {
        let calc = Calculator::new();
        assert_eq!(calc.evaluate("1").unwrap().to_string(), "01\n");
        assert_eq!(calc.evaluate("_|_").unwrap().to_string(), "0\n1\n");
        let zero = calc.evaluate("0").unwrap();
        assert_eq!((zero.nrows(), zero.ncols()), (0, 1));
        let top = calc.evaluate("T").unwrap();
        assert_eq!((top.nrows(), top.ncols()), (1, 0));
        assert_eq!(calc.evaluate("GF2^2").unwrap().nrows(), 4);
    }

    #[test]
    fn test_every_constant_is_bound() {
        let calc = Calculator::new();
        for name in ["0", "T", "Pt2", "Sp2", "GF2^2"] {
            assert!(calc.evaluate(name).is_ok(), "{}", name);
        }
        assert_eq!(calc.evaluate("Sp2").unwrap().to_string(), "01\n10\n");
    }

    #[test]
    fn test_unit_follows_k() {
        let mut calc = Calculator::new();
        calc.set_k(4).unwrap();
        assert_eq!(calc.evaluate("1").unwrap().to_string(), "0123\n");
        assert_eq!(calc.evaluate("_|_").unwrap().nrows(), 4);
    }

    #[test]
    fn test_set_k_rejects_negative() {
        let mut calc = Calculator::new();
        let err = calc.set_k(-1).unwrap_err();
        assert_eq!(err, ChuError::Config("Cannot use negative values for K".into()));
        assert!(calc.set_k(MAX_ALPHABET as i64 + 1).is_err());
        assert_eq!(calc.context().k, 2);
    }

    #[test]
    fn test_undefined_and_unknown() {
        let calc = Calculator::new();
        assert_eq!(calc.evaluate("p").unwrap_err().to_string(), "p is undefined");
        assert_eq!(calc.evaluate("Undef").unwrap_err().to_string(), "Undef is undefined");
        assert_eq!(
            calc.evaluate("x").unwrap_err().to_string(),
            "Unknown Chu Space x"
        );
        assert_eq!(calc.lookup("q").unwrap(), None);
    }

    #[test]
    fn test_bind_variable() {
        let mut calc = Calculator::new();
        calc.bind_variable("p", Some(space("10\n01\n10"))).unwrap();
        assert_eq!(calc.lookup_variable("p").unwrap().map(ChuSpace::nrows), Some(3));
        // Reading through the context standardizes.
        assert_eq!(calc.evaluate("p").unwrap().to_string(), "10\n01\n");

        calc.bind_variable("p", None).unwrap();
        assert!(calc.lookup_variable("p").unwrap().is_none());
        assert!(calc.lookup_variable("Sp2").is_err());
    }

    #[test]
    fn test_constants_cannot_be_rebound() {
        let mut calc = Calculator::new();
        let err = calc.bind_variable("Sp2", None).unwrap_err();
        assert_eq!(err.to_string(), "Can't change binding of constant Sp2");
    }

    #[test]
    fn test_new_variable_names() {
        let mut calc = Calculator::new();
        assert!(calc.check_new_variable_name("w").is_ok());
        assert_eq!(
            calc.check_new_variable_name("").unwrap_err().to_string(),
            "The empty string is not a legal variable name"
        );
        assert_eq!(
            calc.check_new_variable_name("Pt2").unwrap_err().to_string(),
            "Identifier Pt2 is in use"
        );
        calc.bind_variable("w", None).unwrap();
        assert!(calc.check_new_variable_name("w").is_err());
    }

    #[test]
    fn test_identifier_lists() {
        let mut calc = Calculator::new();
        assert_eq!(calc.lvalue_identifiers(), vec!["p", "q", "u", "v"]);
        assert_eq!(
            calc.rvalue_identifiers(),
            vec!["0", "1", "GF2^2", "Pt2", "Sp2", "T", "_|_"]
        );
        calc.bind_variable("q", Some(space("1"))).unwrap();
        assert!(calc.rvalue_identifiers().contains(&"q"));
        assert!(!calc.rvalue_identifiers().contains(&"p"));
    }

    #[test]
    fn test_standardization_switch() {
        let mut calc = Calculator::new();
        assert_eq!(calc.evaluate_binary("Sp2", "*", "Sp2").unwrap().nrows(), 2);
        calc.invoke("off").unwrap();
        assert!(!calc.context().standardize);
        assert_eq!(calc.evaluate_binary("Sp2", "*", "Sp2").unwrap().nrows(), 4);
        calc.invoke("Unique").unwrap();
        assert!(calc.context().standardize);
        assert!(calc.invoke("reset").is_err());
    }

    #[test]
    fn test_evaluate_unary() {
        let calc = Calculator::new();
        let bottom = calc.evaluate_unary("_|_", "1").unwrap();
        assert_eq!(bottom, calc.evaluate("_|_").unwrap());
        assert_eq!(
            calc.evaluate_unary("?", "p").unwrap_err().to_string(),
            "p is undefined"
        );
        assert_eq!(
            calc.evaluate_unary("??", "Sp2").unwrap_err().to_string(),
            "Unknown Unary Operation ??"
        );
    }

    #[test]
    fn test_conform() {
        let s = space("1\n1");
        let multi = Context { k: 2, standardize: false };
        assert_eq!(s.conform(&multi), s);
        assert_eq!(s.conform(&Context::default()).nrows(), 1);
    }
}
