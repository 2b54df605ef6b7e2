
//! Core of a keypad calculator: an editable sequence of infix tokens,
//! and an evaluator which reorders that sequence with the
//! shunting-yard algorithm before reducing it on an operand stack.

pub mod builder;
pub mod config;
pub mod evaluator;
pub mod format;
pub mod parsing;
pub mod session;
pub mod stack;

pub use builder::{Digit, TokenSequence};
pub use evaluator::{evaluate, MalformedExpression};
pub use parsing::Token;
pub use parsing::operator::OperatorSymbol;
pub use session::{Calculator, Key};
