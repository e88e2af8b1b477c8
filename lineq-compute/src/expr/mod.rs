//! A representation of mathematical expressions that is easier to manipulate than an AST.
//!
//! The [`Expr`](lineq_parser::parser::expr::Expr) type from `lineq_parser` is a recursive `enum`
//! that mirrors the source text: it keeps parentheses, spans, and the exact operator that was
//! written. That is convenient for parsing and reporting errors, but not for algebra.
//!
//! [`MathExpr`] is a tagged tree: every node is a number, a symbol, or an [`Operator`] applied to
//! an ordered list of operands. Trees come in two flavors:
//!
//! - **Structural** trees are a direct translation of the AST (see [`MathExpr::try_from`]). Every
//!   binary operator becomes a node with two operands, so `a - b` is a [`Operator::Subtract`]
//!   node.
//! - **Canonical** trees are produced by [`MathExpr::canonicalize`]. Chains of the same operator
//!   are flattened into a single n-ary [`Operator::Add`] or [`Operator::Multiply`] node, `a - b`
//!   becomes `a + (-b)`, negation is folded into numbers and numeric coefficients, and divisions
//!   of two numbers are folded into exact rationals.
//!
//! Rendering a canonical tree with [`Display`](std::fmt::Display) and parsing the text again
//! yields the same canonical tree.

mod fmt;

use crate::{
    error::InvalidNumber,
    primitive::{int_from_str, rational_from_decimal},
};
use lineq_error::Error;
use lineq_parser::parser::{
    expr::Expr as AstExpr,
    literal::Literal,
    op::{BinOpKind, UnaryOpKind},
};
use rug::Rational;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The operator of a compound [`MathExpr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operator {
    /// Sum of all operands.
    Add,

    /// First operand minus the second. Only found in structural trees.
    Subtract,

    /// Product of all operands.
    Multiply,

    /// First operand divided by the second.
    Divide,

    /// Negation of the single operand.
    Negate,

    /// An equation; the operands are the left-hand and right-hand sides.
    Equal,
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Operator::Add => "Add",
            Operator::Subtract => "Subtract",
            Operator::Multiply => "Multiply",
            Operator::Divide => "Divide",
            Operator::Negate => "Negate",
            Operator::Equal => "Equal",
        };
        write!(f, "{}", name)
    }
}

/// A mathematical expression: an exact number, a symbol, or an operator applied to operands.
///
/// Compound expressions always have at least one operand. An equation is an
/// [`Operator::Equal`] node with exactly two operands.
///
/// For more information about this type, see the [module-level documentation](self).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MathExpr {
    /// An exact rational number, such as `4` or `7/3`.
    Number(Rational),

    /// A symbol, such as the unknown `x`.
    Symbol(String),

    /// An operator applied to its operands.
    Op(Operator, Vec<MathExpr>),
}

impl MathExpr {
    /// Creates a number node.
    pub fn number<T>(n: T) -> Self
    where
        Rational: From<T>,
    {
        Self::Number(Rational::from(n))
    }

    /// Creates a symbol node.
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Symbol(name.into())
    }

    /// Creates the equation `lhs = rhs`.
    pub fn equal(lhs: MathExpr, rhs: MathExpr) -> Self {
        Self::Op(Operator::Equal, vec![lhs, rhs])
    }

    /// Creates a canonical sum of the given terms, flattening nested sums. An empty sum is `0`,
    /// and a sum of one term is that term.
    pub fn sum(terms: impl IntoIterator<Item = MathExpr>) -> Self {
        Self::flatten(Operator::Add, terms, Rational::from(0))
    }

    /// Creates a canonical product of the given factors, flattening nested products. An empty
    /// product is `1`, and a product of one factor is that factor.
    pub fn product(factors: impl IntoIterator<Item = MathExpr>) -> Self {
        Self::flatten(Operator::Multiply, factors, Rational::from(1))
    }

    fn flatten(op: Operator, operands: impl IntoIterator<Item = MathExpr>, identity: Rational) -> Self {
        let mut flat = Vec::new();
        for operand in operands {
            match operand {
                MathExpr::Op(inner, nested) if inner == op => flat.extend(nested),
                operand => flat.push(operand),
            }
        }

        match <[MathExpr; 1]>::try_from(flat) {
            Ok([single]) => single,
            Err(flat) if flat.is_empty() => MathExpr::Number(identity),
            Err(flat) => MathExpr::Op(op, flat),
        }
    }

    /// Returns the canonical negation of this expression.
    ///
    /// Numbers are negated directly, a product led by a number has that number negated, a
    /// negation is unwrapped, and anything else is wrapped in [`Operator::Negate`].
    pub fn negated(self) -> Self {
        match self {
            MathExpr::Number(n) => MathExpr::Number(-n),
            MathExpr::Op(Operator::Multiply, mut factors)
                if matches!(factors.first(), Some(MathExpr::Number(_))) =>
            {
                if let Some(MathExpr::Number(n)) = factors.first_mut() {
                    *n = -std::mem::take(n);
                }
                MathExpr::Op(Operator::Multiply, factors)
            },
            MathExpr::Op(Operator::Negate, operands) => match <[MathExpr; 1]>::try_from(operands) {
                Ok([inner]) => inner,
                Err(operands) => MathExpr::Op(Operator::Negate, vec![MathExpr::Op(Operator::Negate, operands)]),
            },
            expr => MathExpr::Op(Operator::Negate, vec![expr]),
        }
    }

    /// Converts this expression into its canonical form.
    ///
    /// See the [module-level documentation](self) for the rules.
    pub fn canonicalize(self) -> Self {
        let (op, operands) = match self {
            MathExpr::Op(op, operands) => (op, operands),
            atom => return atom,
        };

        let mut operands = operands.into_iter().map(Self::canonicalize);
        match op {
            Operator::Add => Self::sum(operands),
            Operator::Subtract => {
                let first = operands.next();
                Self::sum(first.into_iter().chain(operands.map(Self::negated)))
            },
            Operator::Multiply => Self::product(operands),
            Operator::Divide => {
                let operands = operands.collect::<Vec<_>>();
                let folded = match operands.as_slice() {
                    [MathExpr::Number(num), MathExpr::Number(den)] if *den != 0 => {
                        Some(Rational::from(num / den))
                    },
                    _ => None,
                };
                match folded {
                    Some(value) => MathExpr::Number(value),
                    None => MathExpr::Op(Operator::Divide, operands),
                }
            },
            Operator::Negate => match <[MathExpr; 1]>::try_from(operands.collect::<Vec<_>>()) {
                Ok([inner]) => inner.negated(),
                Err(operands) => MathExpr::Op(Operator::Negate, operands),
            },
            Operator::Equal => MathExpr::Op(Operator::Equal, operands.collect()),
        }
    }

    /// Returns the operator of this expression, if it is compound.
    pub fn operator(&self) -> Option<Operator> {
        match self {
            MathExpr::Op(op, _) => Some(*op),
            _ => None,
        }
    }

    /// Returns the operands of this expression. Atoms have no operands.
    pub fn operands(&self) -> &[MathExpr] {
        match self {
            MathExpr::Op(_, operands) => operands,
            _ => &[],
        }
    }

    /// Returns the value of this expression if it is a number.
    pub fn as_number(&self) -> Option<&Rational> {
        match self {
            MathExpr::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Returns true if this expression is exactly the symbol with the given name.
    pub fn is_symbol(&self, name: &str) -> bool {
        matches!(self, MathExpr::Symbol(sym) if sym == name)
    }

    /// Returns true if the symbol with the given name appears anywhere in this expression.
    pub fn contains_symbol(&self, name: &str) -> bool {
        match self {
            MathExpr::Number(_) => false,
            MathExpr::Symbol(sym) => sym == name,
            MathExpr::Op(_, operands) => operands.iter().any(|operand| operand.contains_symbol(name)),
        }
    }

    /// If this expression is an equation, returns its left-hand and right-hand sides.
    pub fn as_equation(&self) -> Option<(&MathExpr, &MathExpr)> {
        match self {
            MathExpr::Op(Operator::Equal, operands) => match operands.as_slice() {
                [lhs, rhs] => Some((lhs, rhs)),
                _ => None,
            },
            _ => None,
        }
    }

    /// If this expression is a single term in the unknown (`x`, `-x`, or `c·x` with a numeric
    /// coefficient `c`), returns the coefficient of the unknown.
    pub fn unknown_coefficient(&self, unknown: &str) -> Option<Rational> {
        match self {
            MathExpr::Symbol(sym) if sym == unknown => Some(Rational::from(1)),
            MathExpr::Op(Operator::Negate, operands) => match operands.as_slice() {
                [inner] if inner.is_symbol(unknown) => Some(Rational::from(-1)),
                _ => None,
            },
            MathExpr::Op(Operator::Multiply, factors) => match factors.as_slice() {
                [MathExpr::Number(c), sym] if sym.is_symbol(unknown) => Some(c.clone()),
                _ => None,
            },
            _ => None,
        }
    }

    /// Creates the canonical single term `c·x`. A coefficient of `1` is the bare unknown, `-1` is
    /// its negation, and `0` is the number zero.
    pub fn unknown_term(coefficient: Rational, unknown: &str) -> Self {
        if coefficient == 0 {
            MathExpr::Number(coefficient)
        } else if coefficient == 1 {
            MathExpr::symbol(unknown)
        } else if coefficient == -1 {
            MathExpr::symbol(unknown).negated()
        } else {
            MathExpr::Op(Operator::Multiply, vec![MathExpr::Number(coefficient), MathExpr::symbol(unknown)])
        }
    }
}

/// Converts the AST into a structural [`MathExpr`].
///
/// Parentheses are dropped (the tree structure already records grouping), and every number
/// literal is converted to an exact rational.
impl TryFrom<AstExpr> for MathExpr {
    type Error = Error;

    fn try_from(expr: AstExpr) -> Result<Self, Self::Error> {
        match expr {
            AstExpr::Literal(literal) => match literal {
                Literal::Int(int) => match int_from_str(&int.value) {
                    Some(value) => Ok(Self::Number(value)),
                    None => Err(Error::new(vec![int.span], InvalidNumber { literal: int.value })),
                },
                Literal::Float(float) => match rational_from_decimal(&float.value) {
                    Some(value) => Ok(Self::Number(value)),
                    None => Err(Error::new(vec![float.span], InvalidNumber { literal: float.value })),
                },
                Literal::Symbol(sym) => Ok(Self::Symbol(sym.name)),
            },
            AstExpr::Paren(paren) => Self::try_from(paren.into_innermost()),
            AstExpr::Unary(unary) => match unary.op.kind {
                UnaryOpKind::Neg => Ok(Self::Op(Operator::Negate, vec![Self::try_from(*unary.operand)?])),
            },
            AstExpr::Binary(bin) => {
                let op = match bin.op.kind {
                    BinOpKind::Add => Operator::Add,
                    BinOpKind::Sub => Operator::Subtract,
                    BinOpKind::Mul => Operator::Multiply,
                    BinOpKind::Div => Operator::Divide,
                    BinOpKind::Eq => Operator::Equal,
                };
                let lhs = Self::try_from(*bin.lhs)?;
                let rhs = Self::try_from(*bin.rhs)?;
                Ok(Self::Op(op, vec![lhs, rhs]))
            },
        }
    }
}
