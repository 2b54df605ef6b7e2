
mod precedence;
mod associativity;
mod table;

pub use precedence::Precedence;
pub use associativity::Associativity;
pub use table::OperatorTable;

use thiserror::Error;

use std::fmt::{self, Display, Formatter};

/// One of the binary operators available on the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorSymbol {
  Plus,
  Minus,
  Times,
  Divide,
  Power,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not an operator symbol")]
pub struct NotAnOperator(pub char);

/// An operator has a symbol, a precedence, and an associativity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operator {
  symbol: OperatorSymbol,
  assoc: Associativity,
  prec: Precedence,
}

impl OperatorSymbol {
  pub const ALL: [OperatorSymbol; 5] = [
    OperatorSymbol::Plus,
    OperatorSymbol::Minus,
    OperatorSymbol::Times,
    OperatorSymbol::Divide,
    OperatorSymbol::Power,
  ];

  pub fn as_char(self) -> char {
    match self {
      OperatorSymbol::Plus => '+',
      OperatorSymbol::Minus => '-',
      OperatorSymbol::Times => '*',
      OperatorSymbol::Divide => '/',
      OperatorSymbol::Power => '^',
    }
  }

  /// Applies the operator to two operands. `left` is the operand that
  /// was entered first.
  pub fn apply(self, left: f64, right: f64) -> f64 {
    match self {
      OperatorSymbol::Plus => left + right,
      OperatorSymbol::Minus => left - right,
      OperatorSymbol::Times => left * right,
      OperatorSymbol::Divide => left / right,
      OperatorSymbol::Power => left.powf(right),
    }
  }
}

impl TryFrom<char> for OperatorSymbol {
  type Error = NotAnOperator;

  fn try_from(c: char) -> Result<Self, Self::Error> {
    match c {
      '+' => Ok(OperatorSymbol::Plus),
      '-' => Ok(OperatorSymbol::Minus),
      '*' => Ok(OperatorSymbol::Times),
      '/' => Ok(OperatorSymbol::Divide),
      '^' => Ok(OperatorSymbol::Power),
      _ => Err(NotAnOperator(c)),
    }
  }
}

impl Display for OperatorSymbol {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_char())
  }
}

impl Operator {
  pub fn new(symbol: OperatorSymbol, assoc: Associativity, prec: Precedence) -> Operator {
    Operator { symbol, assoc, prec }
  }

  pub fn symbol(&self) -> OperatorSymbol {
    self.symbol
  }

  pub fn associativity(&self) -> Associativity {
    self.assoc
  }

  pub fn precedence(&self) -> Precedence {
    self.prec
  }

  /// Whether `other`, sitting on top of the operator stack, must be
  /// resolved before `self` is pushed.
  pub fn yields_to(&self, other: &Operator) -> bool {
    if self.assoc.is_left_assoc() {
      self.prec <= other.prec
    } else {
      self.prec < other.prec
    }
  }
}

impl Display for Operator {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    self.symbol.fmt(f)
  }
}
