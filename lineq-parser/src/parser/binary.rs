use std::{fmt, ops::Range};
use super::{
    error::{kind, Error},
    expr::{Expr, Primary},
    op::{BinOp, BinOpKind},
    unary::Unary,
    Parser,
    Precedence,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A binary expression, such as `1 + 2`, `3x`, or a whole equation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Binary {
    /// The left-hand side of the binary expression.
    pub lhs: Box<Expr>,

    /// The operator of the binary expression.
    pub op: BinOp,

    /// The right-hand side of the binary expression.
    pub rhs: Box<Expr>,

    /// The region of the source code that this binary expression was parsed from.
    pub span: Range<usize>,
}

impl Binary {
    /// Returns the span of the binary expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Joins two operands with an operator. An implicit operator gets the gap between the
    /// operands as its span.
    fn join(lhs: Expr, mut op: BinOp, rhs: Expr) -> Expr {
        let span = lhs.span().start..rhs.span().end;
        if op.implicit {
            op.span = lhs.span().end..rhs.span().start;
        }
        Expr::Binary(Binary { lhs: Box::new(lhs), op, rhs: Box::new(rhs), span })
    }

    /// Parses the operators and operands that follow `lhs`, as long as the operators bind at
    /// least as tightly as `min`.
    ///
    /// When no operator follows an operand but a [`Primary`] expression does, the two are
    /// multiplied. This implicit multiplication binds like `*` and `/`, so `2/3x` is `(2/3)x`.
    pub fn parse_expr(input: &mut Parser, mut lhs: Expr, min: Precedence) -> Result<Expr, Error> {
        loop {
            let mut ahead = input.clone();
            let op = match ahead.try_parse::<BinOp>() {
                Ok(op) if op.precedence() >= min => op,
                Ok(_) => break,
                Err(_) => {
                    if Precedence::Factor < min || ahead.try_parse::<Primary>().is_err() {
                        break;
                    }
                    BinOp { kind: BinOpKind::Mul, implicit: true, span: input.span() }
                },
            };

            let rhs = if op.implicit {
                input.try_parse::<Primary>()?.into()
            } else {
                if op.kind == BinOpKind::Eq && lhs.is_equation() {
                    return Err(Error::new(vec![op.span], kind::ChainedEquation));
                }
                input.set_cursor(&ahead);
                Unary::parse_or_lower(input)?
            };

            let rhs = Self::parse_expr(input, rhs, op.precedence().tighter())?;
            lhs = Self::join(lhs, op, rhs);
        }

        Ok(lhs)
    }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}{}", self.lhs, self.op, self.rhs)
    }
}
