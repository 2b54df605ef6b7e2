
use crate::parsing::operator::OperatorSymbol;
use crate::parsing::shunting_yard::ShuntingYardError;

use thiserror::Error;

/// Why a token sequence could not be evaluated: an operator unknown to
/// the operator table, an operator reached with fewer than two
/// operands, or a final stack holding other than exactly one value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MalformedExpression {
  #[error("Operator '{operator}' needs {expected} operands but only {actual} were available.")]
  NotEnoughOperands {
    operator: OperatorSymbol,
    expected: usize,
    actual: usize,
  },
  #[error("Expression left {count} values behind instead of one.")]
  LeftoverOperands {
    count: usize,
  },
  #[error("Expression produced no value.")]
  Empty,
  #[error(transparent)]
  Reorder(#[from] ShuntingYardError),
}
