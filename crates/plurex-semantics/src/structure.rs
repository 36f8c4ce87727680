//! Static shape check for postfix token sequences.
//!
//! Simulates the evaluator's value stack with abstract entries, so a
//! sequence that passes is guaranteed to reach the evaluator's comparison
//! logic rather than failing on operator arity or operand placement.

use crate::error::SyntaxError;
use crate::token::Token;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Slot {
    Operand,
    Condition,
}

/// Check that a postfix sequence reduces to exactly one condition.
///
/// # Errors
///
/// Returns [`SyntaxError::Malformed`] describing the first problem found.
pub fn check_structure(postfix: &[Token]) -> Result<(), SyntaxError> {
    let mut stack: Vec<Slot> = Vec::new();
    for token in postfix {
        let token_type = token.token_type();
        if token_type.is_operand() {
            stack.push(Slot::Operand);
            continue;
        }
        if !token_type.is_operator() {
            return Err(malformed(format!("unexpected symbol '{token}'")));
        }
        let (Some(right), Some(left)) = (stack.pop(), stack.pop()) else {
            return Err(malformed(format!("'{token}' needs two operands")));
        };
        let expected = if token_type.is_comparison() {
            Slot::Operand
        } else {
            Slot::Condition
        };
        if left != expected || right != expected {
            let message = match expected {
                Slot::Operand => format!("'{token}' compares values, not conditions"),
                Slot::Condition => format!("'{token}' combines conditions, not values"),
            };
            return Err(malformed(message));
        }
        stack.push(Slot::Condition);
    }

    match stack.as_slice() {
        [Slot::Condition] => Ok(()),
        [] => Err(malformed("empty expression".to_string())),
        [Slot::Operand] => Err(malformed("a bare value is not a condition".to_string())),
        _ => Err(malformed(format!(
            "{} values left without an operator",
            stack.len()
        ))),
    }
}

fn malformed(message: String) -> SyntaxError {
    SyntaxError::Malformed { message }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_postfix;

    fn check(expression: &str) -> Result<(), SyntaxError> {
        check_structure(&parse_postfix(expression).unwrap())
    }

    #[test]
    fn well_formed_expressions_pass() {
        assert!(check("1 == 1").is_ok());
        assert!(check("(a > 1 && b < 5) || c == MASCULINE").is_ok());
        assert!(check("((n == ONE))").is_ok());
    }

    #[test]
    fn boolean_over_values_fails() {
        assert!(matches!(check("a && b"), Err(SyntaxError::Malformed { .. })));
    }

    #[test]
    fn comparison_over_conditions_fails() {
        assert!(matches!(
            check("(a == 1) == 1"),
            Err(SyntaxError::Malformed { .. })
        ));
    }

    #[test]
    fn arity_and_residue_fail() {
        assert!(check("== 1").is_err());
        assert!(check("").is_err());
        assert!(check("n").is_err());
        assert!(check("a == 1 b").is_err());
    }
}
