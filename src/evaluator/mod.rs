
//! Evaluation of token sequences: reordering to postfix, then reducing
//! the postfix sequence on an operand stack.

mod error;

pub use error::MalformedExpression;

use crate::builder::TokenSequence;
use crate::format::parse_number;
use crate::parsing::Token;
use crate::parsing::operator::OperatorTable;
use crate::parsing::shunting_yard::{to_postfix, PostfixDisplay};
use crate::stack::{Stack, StackError};

use tracing::debug;

/// Evaluates the sequence with the common arithmetic operators. The
/// sequence itself is left untouched.
pub fn evaluate(sequence: &TokenSequence) -> Result<f64, MalformedExpression> {
  evaluate_tokens(sequence.tokens())
}

pub fn evaluate_tokens(tokens: &[Token]) -> Result<f64, MalformedExpression> {
  evaluate_with(OperatorTable::common_operators(), tokens)
}

/// Evaluates infix `tokens`, resolving precedence and associativity
/// through `table`.
pub fn evaluate_with(table: &OperatorTable, tokens: &[Token]) -> Result<f64, MalformedExpression> {
  let postfix = to_postfix(table, tokens)?;
  let result = reduce(&postfix);
  debug!(postfix = %PostfixDisplay::new(&postfix), ?result, "evaluated expression");
  result
}

/// Reduces a postfix sequence to a single value.
///
/// Numbers are parsed and pushed. Each operator pops its right operand
/// (the top of the stack) and then its left operand, and pushes the
/// result. Floating-point edge cases such as division by zero are not
/// errors; they produce infinities or NaN as usual.
pub fn reduce(postfix: &[Token]) -> Result<f64, MalformedExpression> {
  let mut stack: Stack<f64> = Stack::new();
  for token in postfix {
    match token {
      Token::Number(text) => {
        stack.push(parse_number(text));
      }
      Token::Operator(symbol) => {
        let (left, right) = stack.pop_pair().map_err(|err| match err {
          StackError::NotEnoughElements { expected, actual } =>
            MalformedExpression::NotEnoughOperands { operator: *symbol, expected, actual },
        })?;
        stack.push(symbol.apply(left, right));
      }
    }
  }
  stack.into_single().map_err(|count| match count {
    0 => MalformedExpression::Empty,
    count => MalformedExpression::LeftoverOperands { count },
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::parsing::operator::{Associativity, Operator, OperatorSymbol, Precedence};
  use crate::parsing::shunting_yard::ShuntingYardError;

  use approx::assert_abs_diff_eq;

  fn num(text: &str) -> Token {
    Token::number(text)
  }

  fn op(c: char) -> Token {
    Token::operator(OperatorSymbol::try_from(c).unwrap())
  }

  /// Builds infix tokens from a space-separated string, e.g. `"1 + 2"`.
  fn infix(expr: &str) -> Vec<Token> {
    expr.split_whitespace().map(|word| {
      match OperatorSymbol::try_from(word.chars().next().unwrap()) {
        Ok(symbol) if word.len() == 1 => Token::operator(symbol),
        _ => num(word),
      }
    }).collect()
  }

  #[test]
  fn test_reduce_basic() {
    assert_eq!(reduce(&[num("1"), num("2"), op('+')]), Ok(3.0));
    assert_eq!(reduce(&[num("4"), num("2"), op('/')]), Ok(2.0));
    assert_eq!(reduce(&[num("2"), num("3"), op('^')]), Ok(8.0));
  }

  #[test]
  fn test_reduce_operand_order() {
    assert_eq!(reduce(&[num("10"), num("4"), op('-')]), Ok(6.0));
    assert_eq!(reduce(&[num("3"), num("2"), op('^')]), Ok(9.0));
  }

  #[test]
  fn test_reduce_division_by_zero() {
    assert_eq!(reduce(&[num("5"), num("0"), op('/')]), Ok(f64::INFINITY));
    assert!(reduce(&[num("0"), num("0"), op('/')]).unwrap().is_nan());
  }

  #[test]
  fn test_reduce_not_enough_operands() {
    assert_eq!(
      reduce(&[num("1"), op('+')]),
      Err(MalformedExpression::NotEnoughOperands {
        operator: OperatorSymbol::Plus,
        expected: 2,
        actual: 1,
      }),
    );
    assert_eq!(
      reduce(&[op('*')]),
      Err(MalformedExpression::NotEnoughOperands {
        operator: OperatorSymbol::Times,
        expected: 2,
        actual: 0,
      }),
    );
  }

  #[test]
  fn test_reduce_leftover_operands() {
    assert_eq!(
      reduce(&[num("1"), num("2")]),
      Err(MalformedExpression::LeftoverOperands { count: 2 }),
    );
  }

  #[test]
  fn test_reduce_empty() {
    assert_eq!(reduce(&[]), Err(MalformedExpression::Empty));
  }

  #[test]
  fn test_evaluate_end_to_end() {
    assert_eq!(evaluate_tokens(&infix("1 + 2")), Ok(3.0));
    assert_eq!(evaluate_tokens(&infix("2 * 3 + 4")), Ok(10.0));
    assert_eq!(evaluate_tokens(&infix("2 + 3 * 4")), Ok(14.0));
    assert_eq!(evaluate_tokens(&infix("2 ^ 3 ^ 2")), Ok(512.0));
  }

  #[test]
  fn test_evaluate_left_assoc_chains() {
    assert_eq!(evaluate_tokens(&infix("1 - 2 - 3")), Ok(-4.0));
    assert_eq!(evaluate_tokens(&infix("64 / 4 / 2")), Ok(8.0));
    assert_eq!(evaluate_tokens(&infix("8 / 4 * 2")), Ok(4.0));
  }

  #[test]
  fn test_evaluate_decimals() {
    let result = evaluate_tokens(&infix("0.1 + 0.2")).unwrap();
    assert_abs_diff_eq!(result, 0.3, epsilon = 1e-12);
    let result = evaluate_tokens(&infix("2.5 * 4. - 0.5")).unwrap();
    assert_abs_diff_eq!(result, 9.5, epsilon = 1e-12);
  }

  #[test]
  fn test_evaluate_dangling_operator() {
    let seq = TokenSequence::from_tokens(vec![num("1"), op('+')]);
    assert_eq!(
      evaluate(&seq),
      Err(MalformedExpression::NotEnoughOperands {
        operator: OperatorSymbol::Plus,
        expected: 2,
        actual: 1,
      }),
    );
  }

  #[test]
  fn test_evaluate_does_not_mutate_input() {
    let seq = TokenSequence::from_tokens(infix("6 / 3"));
    let before = seq.clone();
    assert_eq!(evaluate(&seq), Ok(2.0));
    assert_eq!(seq, before);
  }

  #[test]
  fn test_evaluate_empty_literal_is_nan() {
    assert!(evaluate(&TokenSequence::new()).unwrap().is_nan());
  }

  #[test]
  fn test_evaluate_with_incomplete_table() {
    let mut table = OperatorTable::new();
    table.insert(Operator::new(OperatorSymbol::Plus, Associativity::LEFT, Precedence::new(2)));
    assert_eq!(
      evaluate_with(&table, &infix("1 ^ 2")),
      Err(MalformedExpression::Reorder(ShuntingYardError::UnknownOperator(OperatorSymbol::Power))),
    );
    assert_eq!(evaluate_with(&table, &infix("1 + 2")), Ok(3.0));
  }
}
