//! Lexer for the expression language.
//!
//! Produces span-based tokens without storing text — text is sliced from the
//! source only when needed via [`token_text`]. Whitespace never leaves the
//! scanner; comments are real tokens that the shunting stage drops.
//!
//! Scanning stops at the first unlexable input with a classified
//! [`Error::Lex`]: an unknown character, a `/` that opens neither `//` nor
//! `/*`, or a block comment that never closes.

use std::ops::Range;

use logos::Logos;

use crate::Error;

/// Token classes of the expression language.
///
/// `Eof` is synthesised at end of input; the scanner itself never yields it.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"\s+")]
pub enum TokenKind {
    #[token("*")]
    Star,

    #[token("+")]
    Plus,

    #[token("?")]
    Opt,

    #[token("|")]
    Sel,

    #[token(",")]
    Seq,

    #[token("(")]
    LeftParen,

    #[token(")")]
    RightParen,

    /// A symbol name: a letter followed by letters or digits.
    #[regex("[A-Za-z][A-Za-z0-9]*")]
    Identifier,

    /// Line or block comment. A block comment ends at the first `*/`.
    #[regex(r"//[^\n]*\n?", allow_greedy = true)]
    #[regex(r"/\*(?:[^*]|\*+[^*/])*\*+/")]
    Comment,

    Eof,
}

impl TokenKind {
    /// Operators take part in shunting; everything else is emitted, grouped,
    /// or dropped.
    pub fn is_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Star | TokenKind::Plus | TokenKind::Opt | TokenKind::Sel | TokenKind::Seq
        )
    }

    /// Binding strength: postfix repetition binds tightest, `|` next, `,`
    /// loosest. `None` for non-operators.
    pub fn precedence(self) -> Option<u8> {
        match self {
            TokenKind::Star | TokenKind::Plus | TokenKind::Opt => Some(20),
            TokenKind::Sel => Some(10),
            TokenKind::Seq => Some(0),
            _ => None,
        }
    }

    /// Every operator in the language associates to the left.
    pub fn is_left_associative(self) -> bool {
        true
    }
}

/// Byte span of a token in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    fn from_range(range: Range<usize>) -> Self {
        Self {
            start: range.start as u32,
            end: range.end as u32,
        }
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.start as usize..span.end as usize
    }
}

/// Zero-copy token: kind plus span, text retrieved via [`token_text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'src>(source: &'src str, token: &Token) -> &'src str {
    &source[Range::<usize>::from(token.span)]
}

/// Tokenizes the whole source, appending a terminating `Eof` token.
pub fn lex(source: &str) -> Result<Vec<Token>, Error> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);

    while let Some(result) = lexer.next() {
        let span = Span::from_range(lexer.span());
        match result {
            Ok(kind) => tokens.push(Token::new(kind, span)),
            Err(()) => return Err(classify_error(source, lexer.span().start)),
        }
    }

    tokens.push(Token::new(
        TokenKind::Eof,
        Span::from_range(source.len()..source.len()),
    ));
    Ok(tokens)
}

/// Names the way scanning failed, looking at the source from the offence
/// onward: `/` must open `//` or `/*`, and `/*` must close.
fn classify_error(source: &str, at: usize) -> Error {
    let rest = &source[at..];
    if rest.starts_with("/*") {
        Error::Lex("unterminated block comment".to_owned())
    } else if let Some(after_slash) = rest.strip_prefix('/') {
        match after_slash.chars().next() {
            Some(c) => Error::Lex(format!("invalid comment start /{c}")),
            None => Error::Lex("invalid comment start at end of input".to_owned()),
        }
    } else {
        let c = rest.chars().next().unwrap_or('\u{FFFD}');
        Error::Lex(format!("unknown character {c:?}"))
    }
}
