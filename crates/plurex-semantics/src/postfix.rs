//! Infix to postfix conversion (Dijkstra's shunting-yard).

use crate::error::SyntaxError;
use crate::token::{Token, TokenType};

/// Reorder an infix token sequence into postfix (reverse Polish) order.
///
/// Operators of equal precedence group left to right. Grouping tokens are
/// consumed and never appear in the output.
///
/// # Errors
///
/// Returns [`SyntaxError::UnbalancedGroup`] on mismatched parentheses.
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>, SyntaxError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<&Token> = Vec::new();

    for token in tokens {
        let token_type = token.token_type();
        if token_type.is_operand() {
            output.push(token.clone());
        } else if let Some(precedence) = token_type.precedence() {
            while let Some(top) = stack.last() {
                match top.token_type().precedence() {
                    Some(top_precedence) if precedence <= top_precedence => {
                        output.push((*top).clone());
                        stack.pop();
                    }
                    _ => break,
                }
            }
            stack.push(token);
        } else if token_type == TokenType::GroupStart {
            stack.push(token);
        } else {
            close_group(&mut stack, &mut output)?;
        }
    }

    while let Some(top) = stack.pop() {
        if matches!(top.token_type(), TokenType::GroupStart | TokenType::GroupEnd) {
            return Err(SyntaxError::UnbalancedGroup { symbol: "(" });
        }
        output.push(top.clone());
    }

    Ok(output)
}

/// Pop operators until the matching `(`, which is discarded.
fn close_group(stack: &mut Vec<&Token>, output: &mut Vec<Token>) -> Result<(), SyntaxError> {
    loop {
        match stack.pop() {
            Some(top) if top.token_type() == TokenType::GroupStart => return Ok(()),
            Some(top) => output.push(top.clone()),
            None => return Err(SyntaxError::UnbalancedGroup { symbol: ")" }),
        }
    }
}
