
//! The expression as typed so far.

use crate::parsing::Token;
use crate::parsing::operator::OperatorSymbol;

use thiserror::Error;
use tracing::trace;

use std::fmt::{self, Display, Formatter};

/// A single decimal digit, `0` through `9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digit(u8);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a decimal digit")]
pub struct NotADigit(pub char);

/// An ordered, never-empty sequence of tokens, edited one keystroke at
/// a time.
///
/// Every edit checks the last token before mutating anything. Edits
/// which would break the shape of the sequence (a second decimal
/// point, an operator without a left operand) are ignored rather than
/// reported; each edit method returns whether anything changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSequence {
  tokens: Vec<Token>,
}

/// Human-readable rendering of a [`TokenSequence`]. Produced lazily by
/// [`TokenSequence::display_text`].
#[derive(Debug, Clone, Copy)]
pub struct DisplayText<'a> {
  tokens: &'a [Token],
}

impl Digit {
  pub fn new(value: u8) -> Option<Digit> {
    (value <= 9).then_some(Digit(value))
  }

  pub fn value(self) -> u8 {
    self.0
  }

  pub fn as_char(self) -> char {
    char::from(b'0' + self.0)
  }
}

impl TryFrom<char> for Digit {
  type Error = NotADigit;

  fn try_from(c: char) -> Result<Self, Self::Error> {
    c.to_digit(10)
      .map(|d| Digit(d as u8))
      .ok_or(NotADigit(c))
  }
}

impl Display for Digit {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl TokenSequence {

  /// A sequence holding only an empty numeric literal.
  pub fn new() -> Self {
    Self::default()
  }

  /// A sequence holding a single numeric literal with the given text.
  pub fn single_number(text: impl Into<String>) -> Self {
    Self { tokens: vec![Token::number(text)] }
  }

  /// Builds a sequence directly from tokens, bypassing the keystroke
  /// rules. An empty vector yields the same state as [`TokenSequence::new`].
  pub fn from_tokens(tokens: Vec<Token>) -> Self {
    if tokens.is_empty() {
      Self::new()
    } else {
      Self { tokens }
    }
  }

  pub fn tokens(&self) -> &[Token] {
    &self.tokens
  }

  pub fn len(&self) -> usize {
    self.tokens.len()
  }

  /// Always false, as the sequence holds at least one token.
  pub fn is_empty(&self) -> bool {
    self.tokens.is_empty()
  }

  pub fn last(&self) -> &Token {
    // The sequence is never empty, but fall back to a static empty
    // literal rather than panicking.
    static EMPTY: Token = Token::Number(String::new());
    self.tokens.last().unwrap_or(&EMPTY)
  }

  fn last_number_mut(&mut self) -> Option<&mut String> {
    match self.tokens.last_mut() {
      Some(Token::Number(text)) => Some(text),
      _ => None,
    }
  }

  pub fn append_digit(&mut self, digit: Digit) -> bool {
    match self.last_number_mut() {
      Some(text) => text.push(digit.as_char()),
      None => self.tokens.push(Token::number(digit.as_char().to_string())),
    }
    true
  }

  pub fn append_decimal_point(&mut self) -> bool {
    let Some(text) = self.last_number_mut() else {
      trace!("ignoring decimal point after an operator");
      return false;
    };
    if text.contains('.') {
      trace!(literal = %text, "ignoring second decimal point");
      return false;
    }
    if text.is_empty() {
      text.push('0');
    }
    text.push('.');
    true
  }

  pub fn append_operator(&mut self, op: OperatorSymbol) -> bool {
    let has_left_operand = matches!(self.last(), Token::Number(text) if !text.is_empty());
    if !has_left_operand {
      trace!(operator = %op, "ignoring operator without a left operand");
      return false;
    }
    self.tokens.push(Token::operator(op));
    true
  }

  pub fn reset(&mut self) {
    self.tokens.clear();
    self.tokens.push(Token::empty_number());
  }

  /// Replaces the whole sequence with a single numeric literal, as
  /// done with the outcome of an evaluation.
  pub fn collapse(&mut self, text: impl Into<String>) {
    self.tokens.clear();
    self.tokens.push(Token::number(text));
  }

  /// Numbers verbatim and operators padded with one space on either
  /// side, e.g. `1.5 + 2`.
  pub fn display_text(&self) -> DisplayText<'_> {
    DisplayText { tokens: &self.tokens }
  }

}

impl Default for TokenSequence {
  fn default() -> Self {
    Self { tokens: vec![Token::empty_number()] }
  }
}

impl Display for DisplayText<'_> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    for token in self.tokens {
      match token {
        Token::Number(text) => write!(f, "{}", text)?,
        Token::Operator(symbol) => write!(f, " {} ", symbol)?,
      }
    }
    Ok(())
  }
}
