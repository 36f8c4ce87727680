//! Parameter parsing and evaluator setup shared by the commands.

use std::collections::HashMap;

use owo_colors::{OwoColorize, Stream};
use plurex::{
    CldrPluralResolver, ErrorPolicy, EvalWarning, Evaluator, Gender, PluralCategory, Value,
};

/// Parse a key=value parameter string.
pub fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid parameter format '{}': expected name=value", s))?;
    let name = s[..pos].trim();
    if name.is_empty() {
        return Err(format!("invalid parameter format '{}': empty name", s));
    }
    Ok((name.to_string(), s[pos + 1..].to_string()))
}

/// Interpret a parameter value given on the command line.
///
/// Tried in order: `null`, integer, finite float, gender literal, plural
/// literal. Anything else is kept as a string, which never compares.
pub fn parse_value(text: &str) -> Value {
    if text == "null" {
        return Value::Null;
    }
    if let Ok(n) = text.parse::<i64>() {
        return Value::Number(n);
    }
    if let Some(f) = text.parse::<f64>().ok().filter(|f| f.is_finite()) {
        return Value::Float(f);
    }
    if let Some(gender) = Gender::by_name(text) {
        return Value::Gender(gender);
    }
    if let Some(category) = PluralCategory::by_name(text) {
        return Value::Plural(category);
    }
    Value::String(text.to_string())
}

/// Convert command-line parameters to an evaluation context.
pub fn build_context(params: Vec<(String, String)>) -> HashMap<String, Value> {
    params
        .into_iter()
        .map(|(name, text)| {
            let value = parse_value(&text);
            (name, value)
        })
        .collect()
}

/// Create an evaluator for the command-line language and rule set.
pub fn build_evaluator(lang: &str, ordinal: bool, on_error: ErrorPolicy) -> Evaluator {
    let resolver = if ordinal {
        CldrPluralResolver::ordinal()
    } else {
        CldrPluralResolver::cardinal()
    };
    Evaluator::builder()
        .language(lang)
        .resolver(Box::new(resolver))
        .on_error(on_error)
        .build()
}

/// Print evaluation warnings to stderr.
pub fn print_warnings(warnings: &[EvalWarning]) {
    for warning in warnings {
        eprintln!(
            "{} {}",
            "warning:".if_supports_color(Stream::Stderr, |t| t.yellow()),
            warning
        );
    }
}
