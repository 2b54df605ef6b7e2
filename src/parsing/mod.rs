
//! Tokens, operators, and the shunting-yard reordering of infix
//! token sequences.

pub mod operator;
pub mod shunting_yard;
mod token;

pub use token::Token;
