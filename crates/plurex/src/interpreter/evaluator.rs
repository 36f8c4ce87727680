//! User-facing evaluation entry points.
//!
//! [`evaluate`] is the one-shot form. [`Evaluator`] keeps a language, a
//! plural resolver and a cache of parsed expressions, and can pick the
//! first matching translation alternative.

use std::cell::RefCell;
use std::collections::HashMap;

use bon::Builder;
use tracing::debug;

use crate::interpreter::expression::Expression;
use crate::interpreter::plural::{CldrPluralResolver, PluralResolver};
use crate::interpreter::{EvalError, EvalWarning};
use crate::types::Value;

/// Evaluate a condition using CLDR cardinal plural rules.
///
/// # Example
///
/// ```
/// use plurex::{Gender, context, evaluate};
///
/// let ctx = context! { "a" => 2, "b" => 3, "c" => Gender::Masculine };
/// assert!(evaluate("(a > 1 && b < 5) || c == MASCULINE", &ctx, "en").unwrap());
/// assert!(!evaluate("x == 1", &context! {}, "en").unwrap());
/// ```
pub fn evaluate(
    expression: &str,
    context: &HashMap<String, Value>,
    lang: &str,
) -> Result<bool, EvalError> {
    evaluate_with(expression, context, lang, &CldrPluralResolver::cardinal())
}

/// Evaluate a condition with a custom plural resolver.
pub fn evaluate_with(
    expression: &str,
    context: &HashMap<String, Value>,
    lang: &str,
    resolver: &dyn PluralResolver,
) -> Result<bool, EvalError> {
    Expression::parse(expression)?.evaluate_with(context, lang, resolver)
}

/// What [`Evaluator::select`] does when an alternative fails to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Stop and return the error.
    #[default]
    Propagate,
    /// Log the error and try the next alternative.
    Skip,
}

/// Reusable evaluator bound to a language.
///
/// # Example
///
/// ```
/// use plurex::{Evaluator, context};
///
/// let evaluator = Evaluator::builder().language("ru").build();
/// let alternatives = [
///     ("n == ONE", "{n} книга"),
///     ("n == FEW", "{n} книги"),
///     ("n == MANY || n == OTHER", "{n} книг"),
/// ];
///
/// let chosen = evaluator.select(alternatives, &context! { "n" => 3 }).unwrap();
/// assert_eq!(chosen, Some("{n} книги"));
/// ```
#[derive(Builder)]
#[builder(on(String, into))]
pub struct Evaluator {
    /// Language tag handed to the plural resolver (e.g., "en", "ru", "pt-BR").
    #[builder(default = "en".to_string())]
    language: String,

    /// Plural rules used for number-to-category comparisons.
    #[builder(default = Box::new(CldrPluralResolver::cardinal()) as Box<dyn PluralResolver>)]
    resolver: Box<dyn PluralResolver>,

    /// Behavior of `select` on failing alternatives.
    #[builder(default)]
    on_error: ErrorPolicy,

    /// Parsed expressions keyed by their source text.
    ///
    /// Uses `RefCell` for interior mutability so evaluation can remain `&self`.
    /// Entries are never evicted; see [`Evaluator::clear_cache`].
    #[builder(skip)]
    cache: RefCell<HashMap<String, Expression>>,
}

impl Default for Evaluator {
    fn default() -> Self {
        Evaluator::builder().build()
    }
}

impl Evaluator {
    /// Create an evaluator with default settings (English, CLDR cardinals).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an evaluator for the specified language.
    pub fn with_language(language: impl Into<String>) -> Self {
        Evaluator::builder().language(language.into()).build()
    }

    /// Get the current language tag.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Change the current language. Cached expressions stay valid.
    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
    }

    pub fn on_error(&self) -> ErrorPolicy {
        self.on_error
    }

    /// Parse an expression, reusing a cached copy when available.
    pub fn compile(&self, source: &str) -> Result<Expression, EvalError> {
        if let Some(expr) = self.cache.borrow().get(source) {
            return Ok(expr.clone());
        }
        let expr = Expression::parse(source)?;
        self.cache
            .borrow_mut()
            .insert(source.to_string(), expr.clone());
        Ok(expr)
    }

    /// Number of distinct expressions parsed so far.
    pub fn cached_expressions(&self) -> usize {
        self.cache.borrow().len()
    }

    /// Drop every cached expression.
    ///
    /// The cache keeps one entry per distinct source string, so callers that
    /// evaluate generated or user-supplied text should clear it periodically.
    pub fn clear_cache(&self) {
        self.cache.borrow_mut().clear();
    }

    /// Evaluate a condition in the current language.
    pub fn evaluate(
        &self,
        expression: &str,
        context: &HashMap<String, Value>,
    ) -> Result<bool, EvalError> {
        self.compile(expression)?
            .evaluate_with(context, &self.language, self.resolver.as_ref())
    }

    /// Evaluate a condition and return the warnings it produced.
    pub fn evaluate_with_warnings(
        &self,
        expression: &str,
        context: &HashMap<String, Value>,
    ) -> Result<(bool, Vec<EvalWarning>), EvalError> {
        self.compile(expression)?
            .evaluate_with_warnings(context, &self.language, self.resolver.as_ref())
    }

    /// Pick the first alternative whose condition holds.
    ///
    /// Alternatives are tried in order. Returns `Ok(None)` when no condition
    /// holds. Failing conditions are handled per the configured
    /// [`ErrorPolicy`].
    pub fn select<S, T, I>(
        &self,
        alternatives: I,
        context: &HashMap<String, Value>,
    ) -> Result<Option<T>, EvalError>
    where
        I: IntoIterator<Item = (S, T)>,
        S: AsRef<str>,
    {
        for (index, (expression, value)) in alternatives.into_iter().enumerate() {
            let expression = expression.as_ref();
            match self.evaluate(expression, context) {
                Ok(true) => {
                    debug!(index, expression, "selected alternative");
                    return Ok(Some(value));
                }
                Ok(false) => {}
                Err(err) => match self.on_error {
                    ErrorPolicy::Propagate => return Err(err),
                    ErrorPolicy::Skip => {
                        debug!(index, expression, error = %err, "skipping alternative");
                    }
                },
            }
        }
        debug!(language = %self.language, "no alternative matched");
        Ok(None)
    }
}
