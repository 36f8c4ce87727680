//! Expression tokenizer using winnow.
//!
//! Splits a condition such as `(a > 1 && b < 5) || c == MASCULINE` into
//! tokens. Fixed symbols are matched longest-first, so `<=` never lexes as
//! `<` followed by a stray `=`.

use winnow::ascii::digit1;
use winnow::combinator::{alt, opt};
use winnow::prelude::*;
use winnow::token::{one_of, take_while};

use crate::error::SyntaxError;
use crate::token::{Token, TokenType};

/// Tokenize an expression, preserving source order.
///
/// # Errors
///
/// Returns [`SyntaxError::Tokenization`] with the byte offset of the first
/// character that does not start any token.
pub fn tokenize(expression: &str) -> Result<Vec<Token>, SyntaxError> {
    let mut remaining = expression;
    let mut tokens = Vec::new();
    loop {
        remaining = remaining.trim_start_matches(|c: char| c.is_ascii_whitespace());
        if remaining.is_empty() {
            return Ok(tokens);
        }
        let start = remaining;
        match token(&mut remaining) {
            Ok(t) => tokens.push(t),
            Err(_) => {
                return Err(SyntaxError::Tokenization {
                    position: expression.len() - start.len(),
                    found: start.chars().next().map(String::from).unwrap_or_default(),
                });
            }
        }
    }
}

/// Parse a single token.
fn token(input: &mut &str) -> ModalResult<Token> {
    alt((operator, number, identifier)).parse_next(input)
}

/// Parse an operator or grouping symbol. Two-character symbols come first.
fn operator(input: &mut &str) -> ModalResult<Token> {
    alt((
        "&&".value(TokenType::And),
        "||".value(TokenType::Or),
        "<=".value(TokenType::LessThanOrEqualTo),
        ">=".value(TokenType::GreaterThanOrEqualTo),
        "==".value(TokenType::EqualTo),
        "!=".value(TokenType::NotEqualTo),
        '<'.value(TokenType::LessThan),
        '>'.value(TokenType::GreaterThan),
        '('.value(TokenType::GroupStart),
        ')'.value(TokenType::GroupEnd),
    ))
    .map(Token::fixed)
    .parse_next(input)
}

/// Parse an integer or decimal literal: `42`, `1.5`.
fn number(input: &mut &str) -> ModalResult<Token> {
    (digit1, opt(('.', digit1)))
        .take()
        .map(Token::number)
        .parse_next(input)
}

/// Parse an identifier, classifying literal names.
fn identifier(input: &mut &str) -> ModalResult<Token> {
    (one_of(is_ident_start), take_while(0.., is_ident_cont))
        .take()
        .map(|name: &str| match TokenType::from_literal_name(name) {
            Some(literal) => Token::fixed(literal),
            None => Token::variable(name),
        })
        .parse_next(input)
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_cont(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn types(expression: &str) -> Vec<TokenType> {
        tokenize(expression)
            .unwrap()
            .iter()
            .map(Token::token_type)
            .collect()
    }

    #[test]
    fn longest_match_wins() {
        assert_eq!(
            types("a<=1"),
            vec![
                TokenType::Variable,
                TokenType::LessThanOrEqualTo,
                TokenType::Number
            ]
        );
        // A spaced-out `< =` leaves a lone `=`, which is not a token.
        assert!(matches!(
            tokenize("a < = 1"),
            Err(SyntaxError::Tokenization { position: 4, .. })
        ));
    }

    #[test]
    fn whitespace_is_optional() {
        assert_eq!(types("n==ONE"), types("  n  ==  ONE  "));
    }

    #[test]
    fn number_keeps_literal_text() {
        let tokens = tokenize("x >= 10.25").unwrap();
        assert_eq!(tokens[2], Token::number("10.25"));
    }

    #[test]
    fn literal_names_are_case_sensitive() {
        assert_eq!(types("One"), vec![TokenType::Variable]);
        assert_eq!(types("ONE"), vec![TokenType::One]);
        assert_eq!(types("ONES"), vec![TokenType::Variable]);
    }

    #[test]
    fn trailing_dot_is_rejected() {
        let err = tokenize("n == 1.").unwrap_err();
        assert_eq!(
            err,
            SyntaxError::Tokenization {
                position: 6,
                found: ".".to_string()
            }
        );
    }
}
