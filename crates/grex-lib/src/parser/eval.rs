//! Reverse-Polish evaluation of the postfix token stream.
//!
//! A work stack of grexes: identifiers push terminals, postfix operators
//! rewrite the top, binary operators fold the top two. At end of stream the
//! stack must hold exactly one grex.

use crate::Error;
use crate::factory::Factory;
use crate::grex::{self, Grex};

use super::lexer::{Token, TokenKind, token_text};

pub fn evaluate<F: Factory>(
    factory: &mut F,
    source: &str,
    postfix: &[Token],
) -> Result<Grex<F>, Error> {
    let mut stack: Vec<Grex<F>> = Vec::new();

    for token in postfix {
        match token.kind {
            TokenKind::Identifier => {
                stack.push(grex::terminal(factory, token_text(source, token)));
            }
            TokenKind::Star => {
                let operand = pop(&mut stack)?;
                stack.push(grex::star(factory, &operand));
            }
            TokenKind::Plus => {
                let operand = pop(&mut stack)?;
                stack.push(grex::plus(factory, &operand));
            }
            TokenKind::Opt => {
                let operand = pop(&mut stack)?;
                stack.push(grex::opt(factory, &operand));
            }
            TokenKind::Sel => {
                let rhs = pop(&mut stack)?;
                let lhs = pop(&mut stack)?;
                stack.push(grex::sel(factory, &lhs, &rhs));
            }
            TokenKind::Seq => {
                let rhs = pop(&mut stack)?;
                let lhs = pop(&mut stack)?;
                stack.push(grex::seq(factory, &lhs, &rhs));
            }
            // The shunting stage only ever emits the kinds above.
            _ => return Err(Error::InvalidToken(token_text(source, token).to_owned())),
        }
    }

    let result = pop(&mut stack)?;
    if !stack.is_empty() {
        return Err(Error::MalformedExpression);
    }
    Ok(result)
}

fn pop<F: Factory>(stack: &mut Vec<Grex<F>>) -> Result<Grex<F>, Error> {
    stack.pop().ok_or(Error::MalformedExpression)
}
