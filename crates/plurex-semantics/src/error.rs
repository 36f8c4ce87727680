//! Syntax error types for plurex expressions.

use thiserror::Error;

/// An error that occurred while tokenizing or reordering an expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// An unrecognized character sequence in the source text.
    #[error("unrecognized input '{found}' at offset {position}")]
    Tokenization { position: usize, found: String },

    /// Mismatched parentheses.
    #[error("unbalanced group: unmatched '{symbol}'")]
    UnbalancedGroup { symbol: &'static str },

    /// Operators and operands do not combine into a single condition.
    ///
    /// Only produced by [`check_structure`](crate::check_structure); the
    /// runtime evaluator reports the same problems with its own errors.
    #[error("malformed expression: {message}")]
    Malformed { message: String },
}
