use ariadne::Fmt;
use lineq_attrs::ErrorKind;
use lineq_error::{ErrorKind, EXPR};
use crate::tokenizer::TokenKind;

/// An intentionally useless error. This should only be used for non-fatal errors, as it contains
/// no useful information.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "an internal non-fatal error occurred while parsing",
    labels = ["here"],
    help = "you should never see this error; please report this as a bug"
)]
pub struct NonFatal;

/// The end of the source code was reached unexpectedly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of file",
    labels = [format!("you might need to add another {} here", "expression".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// The end of the source code was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of file",
    labels = [format!("I could not understand the remaining {} here", "expression".fg(EXPR))],
)]
pub struct ExpectedEof;

/// An unexpected token was encountered.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected token",
    labels = [format!("expected one of: {}", expected.iter().map(ToString::to_string).collect::<Vec<_>>().join(", "))],
    help = format!("found {}", found),
)]
pub struct UnexpectedToken {
    /// The token(s) that were expected.
    pub expected: &'static [TokenKind],

    /// The token that was found.
    pub found: TokenKind,
}

/// A parenthesis was not closed, or a closing parenthesis appeared without a matching opening
/// one.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = [if *opening {
        "this parenthesis is never closed"
    } else {
        "this parenthesis has no matching opening parenthesis"
    }],
    help = if *opening {
        format!("add a closing parenthesis `{}` somewhere after this", ")".fg(EXPR))
    } else {
        format!("add an opening parenthesis `{}` somewhere before this", "(".fg(EXPR))
    },
)]
pub struct UnclosedParenthesis {
    /// Whether the parenthesis was an opening parenthesis `(`. Otherwise, it was a closing one.
    pub opening: bool,
}

/// Parentheses were opened and closed with nothing in between.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing expression inside parentheses",
    labels = ["these parentheses are empty"],
    help = format!("add an {} between the parentheses", "expression".fg(EXPR)),
)]
pub struct EmptyParenthesis;

/// Both sides of an equation are required.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "more than one `=` in the equation",
    labels = ["this is the second `=`"],
    help = "an equation has exactly one left-hand side and one right-hand side",
)]
pub struct ChainedEquation;
