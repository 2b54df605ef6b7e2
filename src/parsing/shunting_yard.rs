
//! Reordering of infix token sequences into postfix (Reverse Polish)
//! order.

use super::Token;
use super::operator::{Operator, OperatorSymbol, OperatorTable};

use itertools::Itertools;
use thiserror::Error;

use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ShuntingYardError {
  #[error("Operator '{0}' is not defined in the operator table.")]
  UnknownOperator(OperatorSymbol),
}

/// Renders a postfix sequence as its tokens separated by single
/// spaces, e.g. `1 2 3 * +`.
#[derive(Debug, Clone, Copy)]
pub struct PostfixDisplay<'a> {
  tokens: &'a [Token],
}

/// Converts an infix token sequence into postfix order.
///
/// Numbers pass straight through to the output. An incoming operator
/// first pops every stacked operator it yields to (see
/// [`Operator::yields_to`]), then is pushed itself. Whatever remains on
/// the operator stack is flushed, top first, once the input runs out.
///
/// No validation of operand counts happens here. A sequence ending in
/// an operator reorders just fine and is rejected later, when the
/// postfix form is reduced.
pub fn to_postfix<'t, I>(
  table: &OperatorTable,
  input: I,
) -> Result<Vec<Token>, ShuntingYardError>
where I: IntoIterator<Item = &'t Token> {
  let input = input.into_iter();
  let mut output: Vec<Token> = Vec::with_capacity(input.size_hint().0);
  let mut operator_stack: Vec<&Operator> = Vec::new();
  for token in input {
    match token {
      Token::Number(_) => {
        output.push(token.clone());
      }
      Token::Operator(symbol) => {
        let op = table.get(*symbol).ok_or(ShuntingYardError::UnknownOperator(*symbol))?;
        // Pop operators until we hit one that binds more loosely.
        while let Some(top) = operator_stack.last() {
          if op.yields_to(top) {
            output.push(Token::Operator(top.symbol()));
            operator_stack.pop();
          } else {
            break;
          }
        }
        operator_stack.push(op);
      }
    }
  }
  output.extend(operator_stack.into_iter().rev().map(|op| Token::Operator(op.symbol())));
  Ok(output)
}

impl<'a> PostfixDisplay<'a> {
  pub fn new(tokens: &'a [Token]) -> Self {
    Self { tokens }
  }
}

impl Display for PostfixDisplay<'_> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.tokens.iter().format(" "))
  }
}
