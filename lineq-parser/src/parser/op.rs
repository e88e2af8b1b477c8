//! Unary and binary operators.

use crate::{
    parser::{error::{kind, Error}, Parse, Parser, Precedence},
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The unary operation that is being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnaryOpKind {
    Neg,
}

/// A unary operator, written before its operand.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnaryOp {
    pub kind: UnaryOpKind,
    pub span: Range<usize>,
}

impl UnaryOp {
    /// Returns the precedence of the unary operator. Its operand is everything that binds
    /// tighter than this.
    pub fn precedence(&self) -> Precedence {
        match self.kind {
            UnaryOpKind::Neg => Precedence::Neg,
        }
    }
}

impl Parse for UnaryOp {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.expect(&[TokenKind::Minus])?;
        Ok(Self { kind: UnaryOpKind::Neg, span: token.span })
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            UnaryOpKind::Neg => f.write_str("-"),
        }
    }
}

/// The binary operation that is being performed. Every binary operation is left-associative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinOpKind {
    Mul,
    Div,
    Add,
    Sub,
    Eq,
}

impl BinOpKind {
    /// The tokens that are binary operators.
    const TOKENS: &'static [TokenKind] = &[
        TokenKind::Star,
        TokenKind::Slash,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Equals,
    ];

    /// Returns the operation written with the given token, if any.
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        Some(match kind {
            TokenKind::Star => Self::Mul,
            TokenKind::Slash => Self::Div,
            TokenKind::Plus => Self::Add,
            TokenKind::Minus => Self::Sub,
            TokenKind::Equals => Self::Eq,
            _ => return None,
        })
    }

    /// Returns the precedence of the binary operation.
    pub fn precedence(self) -> Precedence {
        match self {
            Self::Mul | Self::Div => Precedence::Factor,
            Self::Add | Self::Sub => Precedence::Term,
            Self::Eq => Precedence::Equation,
        }
    }
}

/// A binary operator that takes two operands.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BinOp {
    /// The kind of binary operator.
    pub kind: BinOpKind,

    /// Whether the parser inserted this operator, as the multiplication in `3x`.
    pub implicit: bool,

    /// Where the operator was written. For an implicit operator, this is the gap between its
    /// operands.
    pub span: Range<usize>,
}

impl BinOp {
    /// Returns the precedence of the binary operation.
    pub fn precedence(&self) -> Precedence {
        self.kind.precedence()
    }
}

impl Parse for BinOp {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.next_token()?;
        match BinOpKind::from_token(token.kind) {
            Some(kind) => Ok(Self { kind, implicit: false, span: token.span }),
            None => Err(Error::new(vec![token.span], kind::UnexpectedToken {
                expected: BinOpKind::TOKENS,
                found: token.kind,
            })),
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = match (self.implicit, self.kind) {
            (true, _) => "",
            (false, BinOpKind::Mul) => " * ",
            (false, BinOpKind::Div) => "/",
            (false, BinOpKind::Add) => " + ",
            (false, BinOpKind::Sub) => " - ",
            (false, BinOpKind::Eq) => " = ",
        };
        f.write_str(text)
    }
}
