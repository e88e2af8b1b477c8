pub mod binary;
pub mod error;
pub mod expr;
pub mod fmt;
pub mod literal;
pub mod op;
pub mod paren;
pub mod unary;

use error::{kind, Error};
use lineq_error::ErrorKind;
use super::tokenizer::{tokenize_complete, Token, TokenKind};
use std::ops::Range;

/// A high-level parser for equations and expressions. This is the type to use to parse an
/// arbitrary piece of text into an abstract syntax tree.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: tokenize_complete(source),
            cursor: 0,
        }
    }

    /// Creates an error that points at the current token, or the end of the source code if the
    /// cursor is at the end of the stream.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the span of the current token, or the end of the source code if the cursor is at
    /// the end of the stream.
    pub fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Sets the cursor of this parser to the cursor of the given parser. Used after parsing ahead
    /// with a clone of this parser.
    pub fn set_cursor(&mut self, other: &Parser) {
        self.cursor = other.cursor;
    }

    /// Returns the current token. The cursor is not moved. Returns [`None`] if the cursor is at
    /// the end of the stream.
    pub fn current_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor)
    }

    /// Returns the next token to be parsed, then advances the cursor. Whitespace tokens are
    /// skipped.
    ///
    /// Returns an EOF error if there are no more tokens.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        while self.cursor < self.tokens.len() {
            let token = &self.tokens[self.cursor];
            self.cursor += 1;
            if !token.is_space() {
                return Ok(token.clone());
            }
        }

        Err(self.error(kind::UnexpectedEof))
    }

    /// Returns the next token if it is one of the `expected` kinds. The cursor is advanced
    /// either way.
    pub fn expect(&mut self, expected: &'static [TokenKind]) -> Result<Token<'source>, Error> {
        let token = self.next_token()?;
        if expected.contains(&token.kind) {
            Ok(token)
        } else {
            Err(Error::new(vec![token.span], kind::UnexpectedToken { expected, found: token.kind }))
        }
    }

    /// Speculatively parses a value from the given stream of tokens. This function can be used
    /// in the [`Parse::parse`] implementation of a type with the given [`Parser`], as it will
    /// automatically backtrack the cursor position if parsing fails.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse<T: Parse>(&mut self) -> Result<T, Error> {
        self.try_parse_with_fn(T::parse)
    }

    /// Speculatively parses a value from the given stream of tokens, using a custom parsing
    /// function to parse the value.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse_with_fn<T, F>(&mut self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Parser<'source>) -> Result<T, Error>,
    {
        let start = self.cursor;
        match f(self) {
            Ok(value) => Ok(value),
            err => {
                self.cursor = start;
                err
            },
        }
    }

    /// Speculatively parses a value from the given stream of tokens, with a validation predicate.
    /// The value must parse successfully, **and** the predicate must return [`Ok`] for this
    /// function to return successfully.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse_then<T: Parse, F>(&mut self, predicate: F) -> Result<T, Error>
    where
        F: FnOnce(&T, &Parser) -> Result<(), Error>,
    {
        let start = self.cursor;

        // closure workaround allows us to use `?` in the closure
        let compute = || {
            let value = T::parse(self)?;
            predicate(&value, self)?;
            Ok(value)
        };

        match compute() {
            Ok(value) => Ok(value),
            err => {
                self.cursor = start;
                err
            },
        }
    }

    /// Attempts to parse a value from the given stream of tokens. All the tokens must be consumed
    /// by the parser (trailing whitespace is allowed); if not, an error pointing at the leftover
    /// text is returned.
    pub fn try_parse_full<T: Parse>(&mut self) -> Result<T, Error> {
        let value = T::parse(self)?;

        let leftover = self.tokens[self.cursor..]
            .iter()
            .position(|token| !token.is_space());
        match leftover {
            None => {
                self.cursor = self.tokens.len();
                Ok(value)
            },
            Some(offset) => {
                self.cursor += offset;
                let start = self.span().start;
                Err(Error::new(vec![start..self.eof_span().end], kind::ExpectedEof))
            },
        }
    }
}

/// Any type that can be parsed from a source of tokens.
pub trait Parse: Sized {
    /// Parses a value from the given stream of tokens, advancing the stream past the consumed
    /// tokens if parsing is successful.
    ///
    /// This function should be used by consumers of the library.
    fn parse(input: &mut Parser) -> Result<Self, Error>;
}

/// The precedence of an operation, in order from lowest precedence (evaluated last) to highest
/// precedence (evaluated first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Any precedence.
    Any,

    /// Precedence of the equals sign (`=`), which separates the sides of an equation.
    Equation,

    /// Precedence of addition (`+`) and subtraction (`-`), which separate terms.
    Term,

    /// Precedence of multiplication (`*`) and division (`/`), which separate factors.
    Factor,

    /// Precedence of unary subtraction (`-`).
    Neg,
}

impl Precedence {
    /// Returns the next higher precedence. The right operand of a left-associative operator
    /// only takes operators that bind tighter than the operator itself.
    pub fn tighter(self) -> Self {
        match self {
            Self::Any => Self::Equation,
            Self::Equation => Self::Term,
            Self::Term => Self::Factor,
            Self::Factor | Self::Neg => Self::Neg,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use binary::Binary;
    use expr::Expr;
    use literal::{LitInt, LitSym, Literal};
    use paren::Paren;
    use op::{BinOp, BinOpKind, UnaryOp, UnaryOpKind};
    use unary::Unary;

    fn int(value: &str, span: Range<usize>) -> Expr {
        Expr::Literal(Literal::Int(LitInt { value: value.to_owned(), span }))
    }

    fn sym(name: &str, span: Range<usize>) -> Expr {
        Expr::Literal(Literal::Symbol(LitSym { name: name.to_owned(), span }))
    }

    #[test]
    fn literal_int() {
        let mut parser = Parser::new("16");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, int("16", 0..2));
    }

    #[test]
    fn implicit_coefficient() {
        let mut parser = Parser::new("3x");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Binary(Binary {
            lhs: Box::new(int("3", 0..1)),
            op: BinOp { kind: BinOpKind::Mul, implicit: true, span: 1..1 },
            rhs: Box::new(sym("x", 1..2)),
            span: 0..2,
        }));
    }

    #[test]
    fn negated_term() {
        let mut parser = Parser::new("-x + 4");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Binary(Binary {
            lhs: Box::new(Expr::Unary(Unary {
                operand: Box::new(sym("x", 1..2)),
                op: UnaryOp { kind: UnaryOpKind::Neg, span: 0..1 },
                span: 0..2,
            })),
            op: BinOp { kind: BinOpKind::Add, implicit: false, span: 3..4 },
            rhs: Box::new(int("4", 5..6)),
            span: 0..6,
        }));
    }

    #[test]
    fn coefficient_times_parenthesis() {
        let mut parser = Parser::new("2(x - 1)");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Binary(Binary {
            lhs: Box::new(int("2", 0..1)),
            op: BinOp { kind: BinOpKind::Mul, implicit: true, span: 1..1 },
            rhs: Box::new(Expr::Paren(Paren {
                expr: Box::new(Expr::Binary(Binary {
                    lhs: Box::new(sym("x", 2..3)),
                    op: BinOp { kind: BinOpKind::Sub, implicit: false, span: 4..5 },
                    rhs: Box::new(int("1", 6..7)),
                    span: 2..7,
                })),
                span: 1..8,
            })),
            span: 0..8,
        }));
    }

    #[test]
    fn factor_binds_tighter_than_term() {
        let mut parser = Parser::new("1 + 2 * 3 - 4 / 5");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr.to_string(), "1 + 2 * 3 - 4/5");
        let Expr::Binary(outer) = expr else {
            panic!("expected a binary expression");
        };
        assert_eq!(outer.op.kind, BinOpKind::Sub);
        let Expr::Binary(inner) = *outer.lhs else {
            panic!("expected a binary expression");
        };
        assert_eq!(inner.op.kind, BinOpKind::Add);
    }

    #[test]
    fn implicit_product_binds_like_a_factor() {
        let mut parser = Parser::new("2/3x + 1");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        let Expr::Binary(sum) = expr else {
            panic!("expected a binary expression");
        };
        let Expr::Binary(product) = *sum.lhs else {
            panic!("expected a binary expression");
        };
        assert_eq!(product.op, BinOp { kind: BinOpKind::Mul, implicit: true, span: 3..3 });
        assert_eq!(product.lhs.to_string(), "2/3");
        assert_eq!(*product.rhs, sym("x", 3..4));
    }

    #[test]
    fn negation_takes_one_factor() {
        let mut parser = Parser::new("-3x");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        let Expr::Binary(product) = expr else {
            panic!("expected a binary expression");
        };
        assert!(product.op.implicit);
        assert_eq!(product.lhs.to_string(), "-3");
    }

    #[test]
    fn operator_without_operand() {
        let mut parser = Parser::new("3 * *");
        let err = parser.try_parse_full::<Expr>().unwrap_err();

        let found = err.downcast_ref::<kind::UnexpectedToken>().unwrap().found;
        assert_eq!(found, TokenKind::Star);
        assert_eq!(err.spans, vec![4..5]);
    }

    #[test]
    fn equation_splits_sides() {
        let mut parser = Parser::new("(7/3)x + 2 = 9");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        let Expr::Binary(equation) = expr else {
            panic!("expected a binary expression");
        };
        assert_eq!(equation.op.kind, BinOpKind::Eq);
        assert_eq!(equation.lhs.to_string(), "(7/3)x + 2");
        assert_eq!(*equation.rhs, int("9", 13..14));
    }

    #[test]
    fn trailing_whitespace() {
        let mut parser = Parser::new("x + 1   \n");
        assert!(parser.try_parse_full::<Expr>().is_ok());
    }

    #[test]
    fn leftover_input() {
        let mut parser = Parser::new("x + 1 )");
        let err = parser.try_parse_full::<Expr>().unwrap_err();

        assert!(err.is::<kind::ExpectedEof>());
        assert_eq!(err.spans, vec![6..7]);
    }

    #[test]
    fn unexpected_eof() {
        let mut parser = Parser::new("3x +");
        let err = parser.try_parse_full::<Expr>().unwrap_err();

        assert!(err.is::<kind::UnexpectedEof>() || err.is::<kind::ExpectedEof>());
    }

    #[test]
    fn empty_parenthesis() {
        let mut parser = Parser::new("2()");
        let err = parser.try_parse_full::<Expr>().unwrap_err();

        assert!(err.is::<kind::EmptyParenthesis>() || err.is::<kind::ExpectedEof>());
    }

    #[test]
    fn chained_equation() {
        let mut parser = Parser::new("x = 2 = 3");
        let err = parser.try_parse_full::<Expr>().unwrap_err();

        assert!(err.is::<kind::ChainedEquation>());
        assert_eq!(err.spans, vec![6..7]);
    }
}
