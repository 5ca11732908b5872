//! The expression parsing pipeline.
//!
//! ```text
//! source → lexer → [infix tokens] → shunting yard → [postfix tokens] → evaluator → Grex
//! ```
//!
//! The stages run as a pull-based chain over token vectors; the first error
//! aborts the whole parse. Observable behaviour is strictly sequential.

pub mod lexer;
pub mod shunting;

mod eval;


use crate::Result;
use crate::factory::Factory;
use crate::grex::Grex;

/// Compiles `expression` into a grex, minting all identities from `factory`.
///
/// The factory is borrowed exclusively for the duration of the call; the
/// returned grex is immutable and freely shareable afterwards.
pub fn parse<F: Factory>(factory: &mut F, expression: &str) -> Result<Grex<F>> {
    let tokens = lexer::lex(expression)?;
    let postfix = shunting::shunt(&tokens)?;
    eval::evaluate(factory, expression, &postfix)
}
