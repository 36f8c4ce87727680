pub mod interpreter;
pub mod types;

pub use interpreter::{
    CldrPluralResolver, ErrorPolicy, EvalContext, EvalError, EvalWarning, Evaluator, Expression,
    OperandType, PluralResolver, compute_suggestions, evaluate, evaluate_with,
};
pub use plurex_semantics::{SyntaxError, Token, TokenType};
pub use types::{Gender, Number, PluralCategory, Value};

// Re-export the expr! macro
pub use plurex_macros::expr;

/// Creates a `HashMap<String, Value>` from key-value pairs.
///
/// Values are automatically converted via `Into<Value>`, so you can pass
/// integers, floats, genders, plural categories or options directly.
///
/// # Example
///
/// ```
/// use plurex::{Gender, context};
///
/// let ctx = context! { "count" => 3, "gender" => Gender::Feminine };
/// assert_eq!(ctx.len(), 2);
/// assert_eq!(ctx["count"].as_number(), Some(3));
/// assert_eq!(ctx["gender"].as_gender(), Some(Gender::Feminine));
/// ```
#[macro_export]
macro_rules! context {
    {} => {
        ::std::collections::HashMap::<String, $crate::Value>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::<String, $crate::Value>::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}
