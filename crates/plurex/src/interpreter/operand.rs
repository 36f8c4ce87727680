//! Operand classification and typed value extraction.
//!
//! An operand token is either a literal (number, plural category, gender) or
//! a variable looked up in the [`EvalContext`]. Variables are unwrapped one
//! level of `Optional` before classification.

use std::fmt;

use plurex_semantics::{Token, TokenType};
use tracing::debug;

use crate::interpreter::error::{EvalWarning, compute_suggestions};
use crate::interpreter::plural::PluralResolver;
use crate::interpreter::{EvalContext, EvalError};
use crate::types::{Gender, Number, PluralCategory, Value};

/// Semantic type of an operand, computed per evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperandType {
    Number,
    Gender,
    Plural,
    Null,
    Unknown,
}

impl fmt::Display for OperandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OperandType::Number => "NUMBER",
            OperandType::Gender => "GENDER",
            OperandType::Plural => "PLURAL",
            OperandType::Null => "NULL",
            OperandType::Unknown => "UNKNOWN",
        })
    }
}

/// Classify an operand token against the context.
///
/// Variables missing from the context are `Null`, like explicit nulls.
/// Strings and nested optionals are `Unknown`. Both record a warning so
/// callers can spot typos.
pub fn operand_type(token: &Token, ctx: &mut EvalContext<'_>) -> OperandType {
    let token_type = token.token_type();
    if token_type == TokenType::Number {
        return OperandType::Number;
    }
    if token_type.is_plural_literal() {
        return OperandType::Plural;
    }
    if token_type.is_gender_literal() {
        return OperandType::Gender;
    }
    if token_type != TokenType::Variable {
        return OperandType::Unknown;
    }

    let name = token.symbol();
    let Some(value) = ctx.get_param(name) else {
        let suggestions = compute_suggestions(name, &ctx.param_names());
        debug!(variable = name, ?suggestions, "unresolved variable");
        ctx.add_warning(EvalWarning::UnresolvedVariable {
            name: name.to_string(),
            suggestions,
        });
        return OperandType::Null;
    };
    match value.unwrap_optional() {
        None => OperandType::Null,
        Some(Value::Number(_) | Value::Float(_)) => OperandType::Number,
        Some(Value::Gender(_)) => OperandType::Gender,
        Some(Value::Plural(_)) => OperandType::Plural,
        Some(Value::String(_) | Value::Optional(_) | Value::Null) => {
            debug!(variable = name, "uncomparable value");
            ctx.add_warning(EvalWarning::UncomparableValue {
                name: name.to_string(),
            });
            OperandType::Unknown
        }
    }
}

/// Resolve a variable to its unwrapped value.
fn variable_value<'a>(token: &Token, ctx: &EvalContext<'a>) -> Option<&'a Value> {
    if token.token_type() != TokenType::Variable {
        return None;
    }
    ctx.get_param(token.symbol())
        .and_then(Value::unwrap_optional)
}

fn extraction_error(token: &Token, expected: OperandType) -> EvalError {
    EvalError::TypeExtraction {
        symbol: token.symbol().to_string(),
        expected,
    }
}

/// Read a numeric operand: a number literal or a numeric variable.
pub fn number_value(token: &Token, ctx: &EvalContext<'_>) -> Result<Number, EvalError> {
    let number = match token.token_type() {
        TokenType::Number => Number::parse(token.symbol()),
        TokenType::Variable => variable_value(token, ctx).and_then(Value::as_numeric),
        _ => None,
    };
    number.ok_or_else(|| extraction_error(token, OperandType::Number))
}

/// Read a gender operand: a gender literal or a gender-valued variable.
pub fn gender_value(token: &Token, ctx: &EvalContext<'_>) -> Result<Gender, EvalError> {
    let gender = match token.token_type() {
        TokenType::Variable => variable_value(token, ctx).and_then(Value::as_gender),
        other => Gender::from_token_type(other),
    };
    gender.ok_or_else(|| extraction_error(token, OperandType::Gender))
}

/// Read a plural operand.
///
/// Plural literals and plural-valued variables are used directly; number
/// literals and numeric variables are resolved through `resolver` in `lang`.
pub fn plural_value(
    token: &Token,
    ctx: &EvalContext<'_>,
    lang: &str,
    resolver: &dyn PluralResolver,
) -> Result<PluralCategory, EvalError> {
    match token.token_type() {
        TokenType::Number => {
            let number = number_value(token, ctx)?;
            resolver.plural_category(number, lang)
        }
        TokenType::Variable => match variable_value(token, ctx) {
            Some(Value::Plural(category)) => Ok(*category),
            Some(value) => match value.as_numeric() {
                Some(number) => resolver.plural_category(number, lang),
                None => Err(extraction_error(token, OperandType::Plural)),
            },
            None => Err(extraction_error(token, OperandType::Plural)),
        },
        other => PluralCategory::from_token_type(other)
            .ok_or_else(|| extraction_error(token, OperandType::Plural)),
    }
}
