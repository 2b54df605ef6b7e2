
//! Keypad session: the token sequence being typed, plus what happens
//! when `=` or `CE` is pressed.

mod key;

pub use key::{Key, KeyError};

use crate::builder::{DisplayText, TokenSequence};
use crate::config::Settings;
use crate::evaluator::{self, MalformedExpression};
use crate::format::format_number;
use crate::parsing::operator::OperatorTable;
use crate::parsing::shunting_yard::{to_postfix, PostfixDisplay};

use tracing::{debug, info};

#[derive(Debug, Clone, Default)]
pub struct Calculator {
  sequence: TokenSequence,
  settings: Settings,
}

impl Calculator {

  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_settings(settings: Settings) -> Self {
    Self { sequence: TokenSequence::new(), settings }
  }

  pub fn settings(&self) -> &Settings {
    &self.settings
  }

  pub fn sequence(&self) -> &TokenSequence {
    &self.sequence
  }

  /// Applies a single keypress. Returns the evaluation outcome when the
  /// key was [`Key::Solve`].
  pub fn press(&mut self, key: Key) -> Option<Result<f64, MalformedExpression>> {
    match key {
      Key::Digit(d) => { self.sequence.append_digit(d); }
      Key::DecimalPoint => { self.sequence.append_decimal_point(); }
      Key::Operator(op) => { self.sequence.append_operator(op); }
      Key::Clear => self.clear(),
      Key::Solve => return Some(self.solve()),
    }
    None
  }

  /// Evaluates the current sequence and replaces it with the result.
  /// On failure, the sequence is replaced with the configured error
  /// marker instead.
  pub fn solve(&mut self) -> Result<f64, MalformedExpression> {
    let result = evaluator::evaluate(&self.sequence);
    match &result {
      Ok(value) => {
        debug!(expression = %self.sequence.display_text(), value, "solved");
        self.sequence.collapse(format_number(*value));
      }
      Err(err) => {
        info!(expression = %self.sequence.display_text(), error = %err, "could not solve");
        self.sequence.collapse(self.settings.error_marker.clone());
      }
    }
    result
  }

  /// The postfix form of the current sequence, rendered as text. `None`
  /// if the sequence uses an operator the common table lacks.
  pub fn postfix_text(&self) -> Option<String> {
    let postfix = to_postfix(OperatorTable::common_operators(), self.sequence.tokens()).ok()?;
    Some(PostfixDisplay::new(&postfix).to_string())
  }

  pub fn clear(&mut self) {
    self.sequence.reset();
  }

  pub fn display_text(&self) -> DisplayText<'_> {
    self.sequence.display_text()
  }

}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::parsing::Token;

  fn press_all(calc: &mut Calculator, keys: &str) -> Vec<Result<f64, MalformedExpression>> {
    Key::parse_all(keys).unwrap()
      .into_iter()
      .filter_map(|key| calc.press(key))
      .collect()
  }

  #[test]
  fn test_solve_collapses_to_result() {
    let mut calc = Calculator::new();
    let results = press_all(&mut calc, "2*3+4=");
    assert_eq!(results, vec![Ok(10.0)]);
    assert_eq!(calc.sequence().tokens(), &[Token::number("10")]);
    assert_eq!(calc.display_text().to_string(), "10");
  }

  #[test]
  fn test_keep_typing_after_result() {
    let mut calc = Calculator::new();
    press_all(&mut calc, "1+2=");
    press_all(&mut calc, "*3");
    assert_eq!(calc.display_text().to_string(), "3 * 3");
    assert_eq!(press_all(&mut calc, "="), vec![Ok(9.0)]);
  }

  #[test]
  fn test_display_while_typing() {
    let mut calc = Calculator::new();
    press_all(&mut calc, ",5++2^");
    assert_eq!(calc.display_text().to_string(), "0.5 + 2 ^ ");
  }

  #[test]
  fn test_dangling_operator_shows_error_marker() {
    let mut calc = Calculator::new();
    let results = press_all(&mut calc, "1+=");
    assert_eq!(results.len(), 1);
    assert!(matches!(results[0], Err(MalformedExpression::NotEnoughOperands { .. })));
    assert_eq!(calc.display_text().to_string(), "ERROR");
  }

  #[test]
  fn test_custom_error_marker() {
    let settings = Settings { error_marker: String::from("E"), ..Settings::default() };
    let mut calc = Calculator::with_settings(settings);
    press_all(&mut calc, "9/=");
    assert_eq!(calc.display_text().to_string(), "E");
  }

  #[test]
  fn test_division_by_zero_is_a_result() {
    let mut calc = Calculator::new();
    assert_eq!(press_all(&mut calc, "5/0="), vec![Ok(f64::INFINITY)]);
    assert_eq!(calc.display_text().to_string(), "Infinity");
    // The spelled-out infinity keeps working as an operand.
    press_all(&mut calc, "-1=");
    assert_eq!(calc.display_text().to_string(), "Infinity");
  }

  #[test]
  fn test_decimal_point_after_infinity_keeps_infinity() {
    let mut calc = Calculator::new();
    press_all(&mut calc, "5/0=.");
    assert_eq!(calc.display_text().to_string(), "Infinity.");
    assert_eq!(press_all(&mut calc, "+1="), vec![Ok(f64::INFINITY)]);
    assert_eq!(calc.display_text().to_string(), "Infinity");
  }

  #[test]
  fn test_clear() {
    let mut calc = Calculator::new();
    press_all(&mut calc, "12.5*3c");
    assert_eq!(calc.sequence(), &TokenSequence::new());
    assert_eq!(calc.display_text().to_string(), "");
  }

  #[test]
  fn test_postfix_text() {
    let mut calc = Calculator::new();
    press_all(&mut calc, "1+2*3");
    assert_eq!(calc.postfix_text().as_deref(), Some("1 2 3 * +"));
  }
}
