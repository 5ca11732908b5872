//! Infix to postfix reordering.
//!
//! Classic shunting yard over the token stream, restricted to what the
//! expression language needs: no functions, every operator left-associative.
//! Comments and the terminating `Eof` are dropped here, so the evaluator
//! only ever sees identifiers and operators.

use crate::Error;

use super::lexer::{Token, TokenKind};

/// Reorders `tokens` into reverse Polish notation.
///
/// An incoming operator pops stacked operators for as long as they bind at
/// least as tightly (all operators are left-associative, so equal precedence
/// pops too). Unbalanced parentheses fail with
/// [`Error::ParenthesisMismatch`], whether detected at a closing paren or
/// during the final drain.
pub fn shunt(tokens: &[Token]) -> Result<Vec<Token>, Error> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();

    for &token in tokens {
        match token.kind {
            TokenKind::Identifier => output.push(token),

            TokenKind::Star
            | TokenKind::Plus
            | TokenKind::Opt
            | TokenKind::Sel
            | TokenKind::Seq => {
                while let Some(&top) = stack.last() {
                    // A left paren on the stack has no precedence and stops the run.
                    let (Some(incoming), Some(stacked)) =
                        (token.kind.precedence(), top.kind.precedence())
                    else {
                        break;
                    };
                    let pops = (token.kind.is_left_associative() && incoming <= stacked)
                        || incoming < stacked;
                    if !pops {
                        break;
                    }
                    stack.pop();
                    output.push(top);
                }
                stack.push(token);
            }

            TokenKind::LeftParen => stack.push(token),

            TokenKind::RightParen => loop {
                match stack.pop() {
                    Some(top) if top.kind == TokenKind::LeftParen => break,
                    Some(top) => output.push(top),
                    None => return Err(Error::ParenthesisMismatch),
                }
            },

            TokenKind::Comment | TokenKind::Eof => {}
        }
    }

    while let Some(top) = stack.pop() {
        if top.kind == TokenKind::LeftParen {
            return Err(Error::ParenthesisMismatch);
        }
        output.push(top);
    }

    Ok(output)
}
