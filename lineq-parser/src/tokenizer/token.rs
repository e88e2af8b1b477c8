use logos::Logos;
use std::{fmt, ops::Range};

/// The kinds of token that can appear in an equation.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// Spaces, tabs, and line breaks. The parser skips these.
    #[regex(r"[ \t\r\n]+")]
    Space,

    #[token("=")]
    Equals,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("/")]
    Slash,

    #[token("(")]
    LeftParen,

    #[token(")")]
    RightParen,

    #[regex(r"[0-9]+")]
    Integer,

    #[regex(r"[0-9]+\.[0-9]+")]
    Decimal,

    /// A name, such as the unknown `x`.
    #[regex(r"[a-zA-Z_]+")]
    Name,

    /// Any character that is not part of the grammar. It is kept so that errors can point at it.
    #[regex(r".", priority = 0)]
    Stray,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = match self {
            Self::Space => "whitespace",
            Self::Equals => "`=`",
            Self::Plus => "`+`",
            Self::Minus => "`-`",
            Self::Star => "`*`",
            Self::Slash => "`/`",
            Self::LeftParen => "`(`",
            Self::RightParen => "`)`",
            Self::Integer => "an integer",
            Self::Decimal => "a decimal",
            Self::Name => "a name",
            Self::Stray => "an unknown character",
        };
        f.write_str(text)
    }
}

/// A token, along with where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source> {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The text of the token.
    pub lexeme: &'source str,
}

impl Token<'_> {
    /// Returns true if the parser should skip this token.
    pub fn is_space(&self) -> bool {
        self.kind == TokenKind::Space
    }
}
