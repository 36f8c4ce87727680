//! Parsed condition expressions.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use plurex_semantics::{Token, check_structure, parse_postfix};

use crate::interpreter::plural::{CldrPluralResolver, PluralResolver};
use crate::interpreter::rpn::eval_postfix;
use crate::interpreter::{EvalContext, EvalError, EvalWarning};
use crate::types::Value;

/// A condition converted to postfix order, ready to be evaluated any number
/// of times against different contexts and languages.
///
/// # Example
///
/// ```
/// use plurex::{Expression, context};
///
/// let expr: Expression = "n == ONE".parse().unwrap();
/// assert!(expr.evaluate(&context! { "n" => 1 }, "en").unwrap());
/// assert!(!expr.evaluate(&context! { "n" => 4 }, "en").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    source: String,
    postfix: Vec<Token>,
}

impl Expression {
    /// Tokenize and convert an expression.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::Syntax`] for unrecognized input or unbalanced
    /// parentheses. Operator arity is checked at evaluation time.
    pub fn parse(source: &str) -> Result<Self, EvalError> {
        Ok(Self {
            source: source.to_string(),
            postfix: parse_postfix(source)?,
        })
    }

    /// Build an expression from tokens already in postfix order.
    ///
    /// Used by the `expr!` macro, which converts at compile time.
    pub fn from_postfix(source: impl Into<String>, postfix: Vec<Token>) -> Self {
        Self {
            source: source.into(),
            postfix,
        }
    }

    /// The original source text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The postfix token sequence.
    pub fn postfix(&self) -> &[Token] {
        &self.postfix
    }

    /// Check operator arity and value/condition placement without a context.
    ///
    /// This is the check the `expr!` macro runs at compile time. An
    /// expression that passes it can still fail at evaluation time with a
    /// type error.
    pub fn check(&self) -> Result<(), EvalError> {
        check_structure(&self.postfix)?;
        Ok(())
    }

    /// Evaluate against `context` using CLDR cardinal plural rules for `lang`.
    pub fn evaluate(&self, context: &HashMap<String, Value>, lang: &str) -> Result<bool, EvalError> {
        self.evaluate_with(context, lang, &CldrPluralResolver::cardinal())
    }

    /// Evaluate with a custom plural resolver.
    pub fn evaluate_with(
        &self,
        context: &HashMap<String, Value>,
        lang: &str,
        resolver: &dyn PluralResolver,
    ) -> Result<bool, EvalError> {
        let mut ctx = EvalContext::new(context);
        self.evaluate_in(&mut ctx, lang, resolver)
    }

    /// Evaluate and also return the warnings collected along the way.
    pub fn evaluate_with_warnings(
        &self,
        context: &HashMap<String, Value>,
        lang: &str,
        resolver: &dyn PluralResolver,
    ) -> Result<(bool, Vec<EvalWarning>), EvalError> {
        let mut ctx = EvalContext::new(context);
        let result = self.evaluate_in(&mut ctx, lang, resolver)?;
        Ok((result, ctx.take_warnings()))
    }

    /// Evaluate inside an existing context, accumulating its warnings.
    pub fn evaluate_in(
        &self,
        ctx: &mut EvalContext<'_>,
        lang: &str,
        resolver: &dyn PluralResolver,
    ) -> Result<bool, EvalError> {
        eval_postfix(&self.postfix, ctx, lang, resolver)
    }
}

impl FromStr for Expression {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
