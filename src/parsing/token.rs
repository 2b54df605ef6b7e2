
use super::operator::OperatorSymbol;

use std::fmt::{self, Display, Formatter};

/// A single unit of a keypad expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
  /// A numeric literal, kept as the text the user typed. The text is
  /// only parsed when the expression is evaluated.
  Number(String),
  /// An infix, binary operator.
  Operator(OperatorSymbol),
}

impl Token {
  pub fn number(text: impl Into<String>) -> Self {
    Token::Number(text.into())
  }

  pub fn operator(symbol: OperatorSymbol) -> Self {
    Token::Operator(symbol)
  }

  /// An empty numeric literal, which starts every fresh sequence.
  pub fn empty_number() -> Self {
    Token::Number(String::new())
  }

  pub fn is_number(&self) -> bool {
    matches!(self, Token::Number(_))
  }

  pub fn is_operator(&self) -> bool {
    matches!(self, Token::Operator(_))
  }

  pub fn as_number_text(&self) -> Option<&str> {
    match self {
      Token::Number(text) => Some(text),
      Token::Operator(_) => None,
    }
  }

  pub fn as_operator(&self) -> Option<OperatorSymbol> {
    match self {
      Token::Number(_) => None,
      Token::Operator(symbol) => Some(*symbol),
    }
  }
}

impl Display for Token {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Token::Number(text) => write!(f, "{}", text),
      Token::Operator(symbol) => write!(f, "{}", symbol),
    }
  }
}

impl From<OperatorSymbol> for Token {
  fn from(symbol: OperatorSymbol) -> Self {
    Token::Operator(symbol)
  }
}
