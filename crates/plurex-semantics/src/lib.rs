//! Shared plurex expression semantics used by both runtime and macro validation.
//!
//! This crate owns the token model, the tokenizer and the shunting-yard
//! conversion to postfix order so that `plurex-macros` can reject malformed
//! expressions at compile time with exactly the rules `plurex` applies at
//! runtime.

mod error;
mod lexer;
mod postfix;
mod structure;
mod token;

pub use error::SyntaxError;
pub use lexer::tokenize;
pub use postfix::to_postfix;
pub use structure::check_structure;
pub use token::{GENDER_LITERALS, LITERALS, PLURAL_LITERALS, Token, TokenType};

/// Tokenize an expression and convert it to postfix order in one step.
pub fn parse_postfix(expression: &str) -> Result<Vec<Token>, SyntaxError> {
    let tokens = tokenize(expression)?;
    to_postfix(&tokens)
}
