//! Compile-time validation for the expr! macro.
//!
//! Performs, in order:
//! 1. Tokenization (unrecognized characters)
//! 2. Literal typo detection (`OHTER` where `OTHER` was meant)
//! 3. Group balancing during postfix conversion
//! 4. Structure check (operator arity, values vs. conditions)

use plurex_semantics::{LITERALS, Token, TokenType, check_structure, to_postfix, tokenize};
use strsim::osa_distance;

/// Validate an expression, returning its postfix tokens or an error message.
pub fn validate(source: &str) -> Result<Vec<Token>, String> {
    let tokens = tokenize(source).map_err(|e| e.to_string())?;
    check_literal_typos(&tokens)?;
    let postfix = to_postfix(&tokens).map_err(|e| e.to_string())?;
    check_structure(&postfix).map_err(|e| e.to_string())?;
    Ok(postfix)
}

/// Reject upper-case variables that look like a mistyped literal.
///
/// Only keyboard slips are flagged: two adjacent letters swapped (`OHTER`),
/// one letter dropped (`FEMINNE`) or one letter doubled (`ONNE`). Other
/// near misses such as `ONCE` or `FEE` are ordinary variables. Names shorter
/// than three characters are left alone.
fn check_literal_typos(tokens: &[Token]) -> Result<(), String> {
    for token in tokens {
        if token.token_type() != TokenType::Variable {
            continue;
        }
        let name = token.symbol();
        if name.len() < 3 || !is_upper_case(name) {
            continue;
        }
        let slip = LITERALS
            .iter()
            .filter_map(|literal| literal.symbol())
            .find(|literal| is_slip_of(name, literal));
        if let Some(literal) = slip {
            return Err(format!(
                "unknown literal '{name}', did you mean '{literal}'?"
            ));
        }
    }
    Ok(())
}

fn is_slip_of(name: &str, literal: &str) -> bool {
    if name.len() == literal.len() {
        is_transposition(name, literal)
    } else if name.len() + 1 == literal.len() {
        removes_one(literal, name, |_, _| true)
    } else if name.len() == literal.len() + 1 {
        removes_one(name, literal, |chars, i| {
            (i > 0 && chars[i - 1] == chars[i]) || chars.get(i + 1) == Some(&chars[i])
        })
    } else {
        false
    }
}

fn is_transposition(name: &str, literal: &str) -> bool {
    let mut a: Vec<char> = name.chars().collect();
    let mut b: Vec<char> = literal.chars().collect();
    a.sort_unstable();
    b.sort_unstable();
    a == b && osa_distance(name, literal) == 1
}

/// True when deleting one character of `longer`, accepted by `allowed`,
/// yields `shorter`.
fn removes_one(longer: &str, shorter: &str, allowed: impl Fn(&[char], usize) -> bool) -> bool {
    let chars: Vec<char> = longer.chars().collect();
    (0..chars.len()).any(|i| {
        allowed(&chars, i)
            && chars[..i]
                .iter()
                .chain(&chars[i + 1..])
                .copied()
                .eq(shorter.chars())
    })
}

fn is_upper_case(name: &str) -> bool {
    name.chars().any(|c| c.is_ascii_uppercase()) && !name.chars().any(|c| c.is_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_expression_returns_postfix() {
        let postfix = validate("n == ONE || n == ZERO").unwrap();
        let symbols: Vec<&str> = postfix.iter().map(Token::symbol).collect();
        assert_eq!(symbols, vec!["n", "ONE", "==", "n", "ZERO", "==", "||"]);
    }

    #[test]
    fn literal_typo_is_reported_with_suggestion() {
        assert_eq!(
            validate("n == OHTER"),
            Err("unknown literal 'OHTER', did you mean 'OTHER'?".to_string())
        );
        assert_eq!(
            validate("g == FEMINNE"),
            Err("unknown literal 'FEMINNE', did you mean 'FEMININE'?".to_string())
        );
        assert_eq!(
            validate("n == ONNE"),
            Err("unknown literal 'ONNE', did you mean 'ONE'?".to_string())
        );
    }

    #[test]
    fn ordinary_upper_case_variables_are_allowed() {
        assert!(validate("N == ONE").is_ok());
        assert!(validate("COUNT > 3").is_ok());
        assert!(validate("MAX_ITEMS >= 10").is_ok());
        assert!(validate("ONCE == 1").is_ok());
        assert!(validate("FEE > 0").is_ok());
        assert!(validate("NONE == 0").is_ok());
    }

    #[test]
    fn syntax_errors_use_semantics_messages() {
        assert_eq!(
            validate("(n == ONE"),
            Err("unbalanced group: unmatched '('".to_string())
        );
        assert_eq!(
            validate("n = ONE"),
            Err("unrecognized input '=' at offset 2".to_string())
        );
        assert_eq!(
            validate("n && m"),
            Err("malformed expression: '&&' combines conditions, not values".to_string())
        );
    }
}
