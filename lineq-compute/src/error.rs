//! Errors that can occur while building, evaluating, or simplifying expressions.

use ariadne::Fmt;
use lineq_attrs::ErrorKind;
use lineq_error::EXPR;

/// A number literal could not be converted to an exact value.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid number `{}`", literal),
    labels = ["this number"],
)]
pub struct InvalidNumber {
    /// The literal, exactly as written.
    pub literal: String,
}

/// An expression divided by a value that is zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "division by zero",
    labels = ["this denominator evaluates to zero"],
    help = format!("the denominator `{}` is zero", denominator.fg(EXPR)),
)]
pub struct DivisionByZero {
    /// The text of the denominator.
    pub denominator: String,
}

/// The expression is not linear in the unknown, for example `x(x + 1)` or `4/x`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not linear in `{}`", expr, unknown),
    labels = [""],
    help = format!("only products of a constant and `{}` can be solved", unknown.fg(EXPR)),
)]
pub struct NonLinear {
    /// The text of the offending sub-expression.
    pub expr: String,

    /// The name of the unknown.
    pub unknown: String,
}

/// A symbol other than the unknown was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unexpected symbol `{}`", symbol),
    labels = [""],
    help = format!("equations can only use the unknown `{}`", unknown.fg(EXPR)),
)]
pub struct MultipleUnknowns {
    /// The symbol that is not the unknown.
    pub symbol: String,

    /// The name of the unknown.
    pub unknown: String,
}

/// A symbol had no value while evaluating an expression.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` has no value", symbol),
    labels = [""],
    help = "substitute a value for it before evaluating",
)]
pub struct UnboundSymbol {
    /// The name of the symbol.
    pub symbol: String,
}

/// An equation was found where a plain expression was expected.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected an expression, found an equation",
    labels = [""],
    help = format!("remove the `{}` sign", "=".fg(EXPR)),
)]
pub struct UnexpectedEquation;
