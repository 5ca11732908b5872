//! Compile regular expressions over named symbols into ε-free transition graphs.
//!
//! The expression language has the five classical operators — `,` (sequence),
//! `|` (alternation), `*`, `+`, `?` — over identifier leaves, grouped by
//! parentheses. The result is a directed multigraph with labelled edges, a
//! single input vertex, and a set of output vertices, suitable for driving
//! parsers, protocol state machines, schema validators, or visualisation.
//! The graph never contains ε-transitions.
//!
//! # Pipeline
//!
//! ```text
//! source → lexer → [infix tokens] → shunting yard → [postfix tokens] → evaluator → Grex
//! ```
//!
//! # Example
//!
//! ```
//! use grex_lib::{IdFactory, parse};
//!
//! let mut factory = IdFactory::new();
//! let grex = parse(&mut factory, "(a, b+)*, end").unwrap();
//!
//! let done = grex.vertex_by_path(&factory, "end");
//! assert!(grex.is_output(done));
//! ```

pub mod factory;
pub mod graph;
pub mod grex;
pub mod parser;

#[cfg(test)]
pub(crate) mod test_utils;

pub use factory::{EdgeId, Factory, IdFactory, VertexId};
pub use graph::{Bounds, DiGraph};
pub use grex::{Grex, opt, plus, sel, seq, star, terminal};
pub use parser::parse;

/// Errors produced while compiling an expression.
///
/// All of them are terminal for the current parse: the pipeline stops at the
/// first error and returns no partial result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Scanning failed: unknown character, invalid comment start, or an
    /// unterminated block comment. The message identifies the offence.
    #[error("{0}")]
    Lex(String),

    /// Unbalanced parentheses detected while reordering to postfix.
    #[error("parenthesis mismatch")]
    ParenthesisMismatch,

    /// The postfix stream did not reduce to exactly one graph: an operator
    /// was missing an operand, or the input left extra operands behind.
    #[error("malformed expression")]
    MalformedExpression,

    /// The evaluator received a token class it does not handle; this
    /// indicates a bug in an upstream stage.
    #[error("invalid token `{0}`")]
    InvalidToken(String),
}

/// Result type for parsing operations.
pub type Result<T> = std::result::Result<T, Error>;
