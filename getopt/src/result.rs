//! The outcome of a parse: option values plus free-standing operands.

use std::sync::Arc;

use crate::option::{Opt, OptionSet};

/// Content of one option's value cell.
///
/// Flags (and optional-argument options observed bare) accumulate an
/// occurrence count; options observed with a value hold the value string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Count(u32),
    Str(String),
}

impl Value {
    pub fn count(&self) -> Option<u32> {
        match self {
            Value::Count(n) => Some(*n),
            Value::Str(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Count(_) => None,
            Value::Str(s) => Some(s),
        }
    }
}

/// Immutable result of one parse call.
///
/// Lookups accept either identifier of an option; both resolve to the same
/// underlying cell, so a value stored through `-a` is visible as `--alpha`
/// and vice versa. Options never observed and without a default have no
/// cell and report as absent.
#[derive(Debug)]
pub struct ParseResult {
    pub(crate) set: Arc<OptionSet>,
    pub(crate) cells: Vec<Option<Value>>,
    pub(crate) operands: Vec<String>,
}

impl ParseResult {
    /// Look up an option by short or long name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        let index = self.set.resolve(name)?;
        self.cells[index].as_ref()
    }

    /// The option's value string, if it holds one.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    /// The option's occurrence count; 0 when absent or holding a value.
    pub fn count(&self, name: &str) -> u32 {
        self.get(name).and_then(Value::count).unwrap_or(0)
    }

    /// Whether the option has an entry in this result (observed in input,
    /// or carrying a configured default).
    pub fn is_present(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Materialized options with their values, in declaration order.
    pub fn options(&self) -> impl Iterator<Item = (&Opt, &Value)> {
        self.set
            .iter()
            .zip(self.cells.iter())
            .filter_map(|(opt, cell)| cell.as_ref().map(|value| (opt, value)))
    }

    /// Free-standing operands, in input order.
    pub fn operands(&self) -> &[String] {
        &self.operands
    }
}
