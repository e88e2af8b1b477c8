//! Errors that can occur while generating or solving equations.

use ariadne::Fmt;
use lineq_attrs::ErrorKind;
use lineq_error::EXPR;

/// The solver was given something other than an equation with two sides.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "invalid equation format",
    labels = ["this is not an equation"],
    help = format!("write an equation such as `{}`", "3x + 4 = 19".fg(EXPR)),
)]
pub struct InvalidEquationFormat {
    /// The text of what was given instead.
    pub found: String,
}

/// Every step of the solution has already been taken.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(message = "no steps available")]
pub struct NoStepsAvailable;

/// The unknown could not be isolated on the left-hand side.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("could not isolate `{}`", unknown),
    labels = [""],
    help = format!("stopped at `{}`", equation.fg(EXPR)),
)]
pub struct CouldNotIsolate {
    /// The name of the unknown.
    pub unknown: String,

    /// The text of the equation when solving stopped.
    pub equation: String,
}

/// No usable equation was synthesized within the attempt limit.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("could not generate an equation after {} attempts", attempts),
    help = "try again, or lower the difficulty",
)]
pub struct GenerationFailed {
    /// The number of attempts that were made.
    pub attempts: u32,
}

/// Problems of this family cannot be generated or checked.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("{} equations are not implemented", family),
    help = "only linear equations are supported",
)]
pub struct UnsupportedFamily {
    /// The name of the family.
    pub family: &'static str,
}
