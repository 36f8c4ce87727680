//! Miette diagnostic wrapper for expression syntax errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use miette::{Diagnostic, NamedSource, SourceSpan};
use plurex::SyntaxError;
use thiserror::Error;

/// A miette-compatible diagnostic for expression syntax errors.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("syntax error: {message}")]
#[diagnostic(code(plurex::syntax))]
pub struct SyntaxDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("{label}")]
    span: SourceSpan,

    label: String,

    message: String,

    #[help]
    help: Option<String>,
}

impl SyntaxDiagnostic {
    /// Create a diagnostic pointing into the expression source.
    ///
    /// Tokenization errors carry a byte offset; the other syntax errors are
    /// reported against the whole expression.
    pub fn from_syntax_error(name: &str, source: &str, err: &SyntaxError) -> Self {
        let (offset, len, label) = match err {
            SyntaxError::Tokenization { position, found } => {
                (*position, found.len().max(1), "not a valid token")
            }
            SyntaxError::UnbalancedGroup { .. } | SyntaxError::Malformed { .. } => {
                (0, source.len(), "in this expression")
            }
        };

        // Clamp the span to the source to avoid a miette panic on out-of-bounds
        let offset = offset.min(source.len());
        let len = len.min(source.len() - offset);

        SyntaxDiagnostic {
            src: NamedSource::new(name, source.to_string()),
            span: (offset, len).into(),
            label: label.to_string(),
            message: err.to_string(),
            help: help_for(err),
        }
    }
}

/// Suggest the operator a stray character was probably meant to be.
fn help_for(err: &SyntaxError) -> Option<String> {
    let SyntaxError::Tokenization { found, .. } = err else {
        return None;
    };
    let suggestion = match found.chars().next()? {
        '=' => "use '==' to test equality",
        '!' => "use '!=' to test inequality",
        '&' => "use '&&' to combine conditions",
        '|' => "use '||' to combine conditions",
        '-' => "negative literals are not supported; bind the value to a variable",
        _ => return None,
    };
    Some(suggestion.to_string())
}
