
use super::{Operator, OperatorSymbol};
use super::precedence::Precedence;
use super::associativity::Associativity;

use once_cell::sync::Lazy;

use std::collections::HashMap;

static COMMON_OPERATORS: Lazy<OperatorTable> = Lazy::new(|| {
  vec![
    Operator::new(OperatorSymbol::Power, Associativity::RIGHT, Precedence::new(4)),
    Operator::new(OperatorSymbol::Times, Associativity::LEFT, Precedence::new(3)),
    Operator::new(OperatorSymbol::Divide, Associativity::LEFT, Precedence::new(3)),
    Operator::new(OperatorSymbol::Plus, Associativity::LEFT, Precedence::new(2)),
    Operator::new(OperatorSymbol::Minus, Associativity::LEFT, Precedence::new(2)),
  ].into_iter().collect()
});

/// A table of operators, indexed by their symbol.
#[derive(Debug, Clone, Default)]
pub struct OperatorTable {
  by_symbol: HashMap<OperatorSymbol, Operator>,
}

impl OperatorTable {
  pub fn new() -> OperatorTable {
    OperatorTable::default()
  }

  pub fn with_capacity(capacity: usize) -> OperatorTable {
    OperatorTable {
      by_symbol: HashMap::with_capacity(capacity),
    }
  }

  pub fn get(&self, symbol: OperatorSymbol) -> Option<&Operator> {
    self.by_symbol.get(&symbol)
  }

  /// Inserts an operator, replacing (and returning) any previous
  /// definition for the same symbol.
  pub fn insert(&mut self, op: Operator) -> Option<Operator> {
    self.by_symbol.insert(op.symbol(), op)
  }

  /// The five arithmetic operators understood by the keypad. The table
  /// is built on first use and shared afterward.
  pub fn common_operators() -> &'static OperatorTable {
    &COMMON_OPERATORS
  }

  pub fn len(&self) -> usize {
    self.by_symbol.len()
  }

  pub fn is_empty(&self) -> bool {
    self.by_symbol.is_empty()
  }
}

impl FromIterator<Operator> for OperatorTable {
  fn from_iter<I>(iter: I) -> Self
  where I : IntoIterator<Item = Operator> {
    let iter = iter.into_iter();
    let (len_bound, _) = iter.size_hint();
    let mut table = OperatorTable::with_capacity(len_bound);
    for op in iter {
      table.insert(op);
    }
    table
  }
}
