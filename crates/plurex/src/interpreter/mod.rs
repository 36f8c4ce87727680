//! plurex interpreter for evaluating condition expressions.
//!
//! This module provides the evaluation engine: it classifies operands
//! against a caller-supplied context, resolves numbers to plural categories
//! and reduces a postfix token sequence to a single boolean.

mod context;
mod error;
mod evaluator;
mod expression;
mod operand;
mod plural;
mod rpn;

pub use context::EvalContext;
pub use error::{EvalError, EvalWarning, compute_suggestions};
pub use evaluator::{ErrorPolicy, Evaluator, evaluate, evaluate_with};
pub use expression::Expression;
pub use operand::{OperandType, gender_value, number_value, operand_type, plural_value};
pub use plural::{CldrPluralResolver, PluralResolver};
pub use rpn::eval_postfix;
