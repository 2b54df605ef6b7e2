
use crate::builder::Digit;
use crate::parsing::operator::OperatorSymbol;

use thiserror::Error;

/// A single key on the calculator keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
  Digit(Digit),
  DecimalPoint,
  Operator(OperatorSymbol),
  /// The `=` key.
  Solve,
  /// The `CE` key.
  Clear,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown key '{key}' at position {position}.")]
pub struct KeyError {
  pub key: char,
  pub position: usize,
}

impl Key {
  /// Maps a typed character to a key. Both `.` and `,` stand for the
  /// decimal point, and `c` (either case) clears.
  pub fn from_char(c: char) -> Option<Key> {
    if let Ok(digit) = Digit::try_from(c) {
      return Some(Key::Digit(digit));
    }
    if let Ok(symbol) = OperatorSymbol::try_from(c) {
      return Some(Key::Operator(symbol));
    }
    match c {
      '.' | ',' => Some(Key::DecimalPoint),
      '=' => Some(Key::Solve),
      'c' | 'C' => Some(Key::Clear),
      _ => None,
    }
  }

  /// Parses a string of keystrokes, skipping whitespace. The position
  /// in a [`KeyError`] counts characters, not bytes.
  pub fn parse_all(input: &str) -> Result<Vec<Key>, KeyError> {
    input.chars()
      .enumerate()
      .filter(|(_, c)| !c.is_whitespace())
      .map(|(position, c)| Key::from_char(c).ok_or(KeyError { key: c, position }))
      .collect()
  }
}
