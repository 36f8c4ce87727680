//! Error and warning types for the plurex interpreter.

use plurex_semantics::SyntaxError;
use strsim::levenshtein;
use thiserror::Error;

use crate::interpreter::operand::OperandType;

/// An error that occurred while parsing or evaluating a condition.
///
/// Every error is final for the evaluation that raised it: there is no
/// partial result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// The expression could not be tokenized or has unbalanced parentheses.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    /// An operator was reached with fewer than two values on the stack.
    #[error("operator '{operator}' needs two operands, found {available}")]
    InsufficientOperands { operator: String, available: usize },

    /// A token that is neither operand nor operator reached the evaluator.
    #[error("unexpected symbol '{symbol}' in postfix expression")]
    UnexpectedSymbol { symbol: String },

    /// Evaluation did not reduce to exactly one condition.
    #[error("malformed expression: {remaining} value(s) left instead of one condition")]
    MalformedExpression { remaining: usize },

    /// The operator is not defined for this operand type (e.g. `<` on genders).
    #[error("operator '{operator}' is not supported for {operand_type} operands")]
    UnsupportedOperator {
        operator: String,
        operand_type: OperandType,
    },

    /// The two operand types have no defined comparison.
    #[error("cannot compare '{left}' ({left_type}) with '{right}' ({right_type})")]
    IncompatibleOperandTypes {
        left: String,
        left_type: OperandType,
        right: String,
        right_type: OperandType,
    },

    /// `&&` or `||` was applied to a raw value instead of a condition.
    #[error("operator '{operator}' combines conditions, found value '{symbol}'")]
    ExpectedBoolean { operator: String, symbol: String },

    /// A comparison was applied to an already evaluated condition.
    #[error("operator '{operator}' compares values, found a condition")]
    ExpectedOperand { operator: String },

    /// An operand could not be read as the requested type.
    #[error("'{symbol}' does not hold a {expected} value")]
    TypeExtraction {
        symbol: String,
        expected: OperandType,
    },

    /// No plural rules exist for the requested locale.
    #[error("no plural rules for locale '{locale}'")]
    UnsupportedLocale { locale: String },
}

/// A non-fatal diagnostic produced while evaluating a condition.
///
/// Unresolvable operands make a comparison false instead of failing; these
/// warnings make that visible to callers that want to know.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalWarning {
    /// A variable is not bound in the context.
    #[error("variable '{name}' is not bound{}", format_suggestions(.suggestions))]
    UnresolvedVariable {
        name: String,
        suggestions: Vec<String>,
    },

    /// A variable is bound to a value that cannot take part in comparisons.
    #[error("variable '{name}' holds a value that cannot be compared")]
    UncomparableValue { name: String },
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!("; did you mean: {}?", suggestions.join(", "))
    }
}

/// Find up to three names close to `key`, closest first.
///
/// Names of three characters or fewer allow one edit; longer names allow two.
pub fn compute_suggestions(key: &str, available: &[String]) -> Vec<String> {
    let max_distance = if key.len() <= 3 { 1 } else { 2 };
    let mut scored: Vec<(usize, &String)> = available
        .iter()
        .map(|candidate| (levenshtein(key, candidate), candidate))
        .filter(|(distance, _)| *distance <= max_distance && *distance > 0)
        .collect();
    scored.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)));
    scored
        .into_iter()
        .take(3)
        .map(|(_, name)| name.clone())
        .collect()
}
