//! Stack evaluation of postfix conditions.
//!
//! Operands are pushed as tokens; each operator pops its right then its left
//! side and pushes the boolean it produced. A well-formed expression leaves
//! exactly one boolean behind.

use plurex_semantics::{Token, TokenType};
use tracing::trace;

use crate::interpreter::operand::{
    OperandType, gender_value, number_value, operand_type, plural_value,
};
use crate::interpreter::plural::PluralResolver;
use crate::interpreter::{EvalContext, EvalError};

/// An entry on the value stack: an operand still to be compared, or the
/// result of an already evaluated sub-expression.
#[derive(Debug, Clone, Copy)]
enum StackEntry<'t> {
    Operand(&'t Token),
    Bool(bool),
}

/// Evaluate a postfix token sequence to a single boolean.
///
/// # Errors
///
/// Fails on operator arity problems, unexpected symbols, a residue other
/// than one boolean, and comparisons that are not defined for the operand
/// types involved. Operands that cannot be resolved are not errors: the
/// comparison they appear in is false.
pub fn eval_postfix(
    postfix: &[Token],
    ctx: &mut EvalContext<'_>,
    lang: &str,
    resolver: &dyn PluralResolver,
) -> Result<bool, EvalError> {
    let mut stack: Vec<StackEntry<'_>> = Vec::with_capacity(postfix.len());

    for token in postfix {
        let token_type = token.token_type();
        if token_type.is_operand() {
            stack.push(StackEntry::Operand(token));
            continue;
        }
        if !token_type.is_operator() {
            return Err(EvalError::UnexpectedSymbol {
                symbol: token.symbol().to_string(),
            });
        }
        let available = stack.len();
        let (Some(right), Some(left)) = (stack.pop(), stack.pop()) else {
            return Err(EvalError::InsufficientOperands {
                operator: token.symbol().to_string(),
                available,
            });
        };
        let result = eval_binary(token, left, right, ctx, lang, resolver)?;
        trace!(operator = token.symbol(), result, "evaluated operator");
        stack.push(StackEntry::Bool(result));
    }

    match stack.as_slice() {
        [StackEntry::Bool(result)] => Ok(*result),
        entries => Err(EvalError::MalformedExpression {
            remaining: entries.len(),
        }),
    }
}

fn eval_binary(
    operator: &Token,
    left: StackEntry<'_>,
    right: StackEntry<'_>,
    ctx: &mut EvalContext<'_>,
    lang: &str,
    resolver: &dyn PluralResolver,
) -> Result<bool, EvalError> {
    let op = operator.token_type();
    if op.is_boolean() {
        let left = expect_bool(operator, left)?;
        let right = expect_bool(operator, right)?;
        return Ok(match op {
            TokenType::And => left && right,
            _ => left || right,
        });
    }

    let (StackEntry::Operand(left), StackEntry::Operand(right)) = (left, right) else {
        return Err(EvalError::ExpectedOperand {
            operator: operator.symbol().to_string(),
        });
    };
    compare(operator, left, right, ctx, lang, resolver)
}

fn expect_bool(operator: &Token, entry: StackEntry<'_>) -> Result<bool, EvalError> {
    match entry {
        StackEntry::Bool(value) => Ok(value),
        StackEntry::Operand(token) => Err(EvalError::ExpectedBoolean {
            operator: operator.symbol().to_string(),
            symbol: token.symbol().to_string(),
        }),
    }
}

/// Apply a comparison operator to two operand tokens.
fn compare(
    operator: &Token,
    left: &Token,
    right: &Token,
    ctx: &mut EvalContext<'_>,
    lang: &str,
    resolver: &dyn PluralResolver,
) -> Result<bool, EvalError> {
    let op = operator.token_type();
    let left_type = operand_type(left, ctx);
    let right_type = operand_type(right, ctx);

    match (left_type, right_type) {
        (OperandType::Unknown, _) | (_, OperandType::Unknown) => Ok(false),
        (OperandType::Null, OperandType::Null) => match op {
            TokenType::EqualTo => Ok(true),
            TokenType::NotEqualTo => Ok(false),
            _ => Err(unsupported(operator, OperandType::Null)),
        },
        (OperandType::Null, _) | (_, OperandType::Null) => Ok(false),
        (OperandType::Number, OperandType::Number) => {
            let ordering = number_value(left, ctx)?.compare(number_value(right, ctx)?);
            Ok(match (op, ordering) {
                (TokenType::NotEqualTo, None) => true,
                (_, None) => false,
                (TokenType::LessThan, Some(o)) => o.is_lt(),
                (TokenType::LessThanOrEqualTo, Some(o)) => o.is_le(),
                (TokenType::GreaterThan, Some(o)) => o.is_gt(),
                (TokenType::GreaterThanOrEqualTo, Some(o)) => o.is_ge(),
                (TokenType::EqualTo, Some(o)) => o.is_eq(),
                (_, Some(o)) => o.is_ne(),
            })
        }
        (OperandType::Gender, OperandType::Gender) => {
            let negate = equality(operator, OperandType::Gender)?;
            Ok((gender_value(left, ctx)? == gender_value(right, ctx)?) != negate)
        }
        (
            OperandType::Plural | OperandType::Number,
            OperandType::Plural | OperandType::Number,
        ) => {
            let negate = equality(operator, OperandType::Plural)?;
            let left = plural_value(left, ctx, lang, resolver)?;
            let right = plural_value(right, ctx, lang, resolver)?;
            Ok((left == right) != negate)
        }
        _ => Err(EvalError::IncompatibleOperandTypes {
            left: left.symbol().to_string(),
            left_type,
            right: right.symbol().to_string(),
            right_type,
        }),
    }
}

/// Accept only `==` and `!=`; returns whether the result is negated.
fn equality(operator: &Token, operand_type: OperandType) -> Result<bool, EvalError> {
    match operator.token_type() {
        TokenType::EqualTo => Ok(false),
        TokenType::NotEqualTo => Ok(true),
        _ => Err(unsupported(operator, operand_type)),
    }
}

fn unsupported(operator: &Token, operand_type: OperandType) -> EvalError {
    EvalError::UnsupportedOperator {
        operator: operator.symbol().to_string(),
        operand_type,
    }
}
