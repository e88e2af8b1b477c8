//! Text and LaTeX rendering of [`MathExpr`]s.
//!
//! The text form is designed to parse back into the same canonical tree, so it parenthesizes
//! negative and fractional coefficients (`(-2)`, `(7/3)x`) and uses juxtaposition for implicit
//! multiplication only where the parser reads it the same way.

use super::{MathExpr, Operator};
use crate::primitive::is_integer;
use lineq_parser::parser::fmt::{fmt_frac, fmt_paren, Latex};
use rug::Rational;
use std::fmt::{self, Display, Formatter};

impl MathExpr {
    /// Returns true if this expression must be wrapped in parentheses when it is an operand of a
    /// sum or product.
    fn is_sum_like(&self) -> bool {
        matches!(self.operator(), Some(Operator::Add | Operator::Subtract | Operator::Equal))
    }

    /// Returns true if this expression is a non-negative integer.
    fn is_plain_number(&self) -> bool {
        matches!(self, MathExpr::Number(n) if *n >= 0 && is_integer(n))
    }

    /// Returns true if this expression renders as a single token that never needs parentheses.
    fn is_atomic(&self) -> bool {
        matches!(self, MathExpr::Symbol(_)) || self.is_plain_number()
    }

    /// If this term of a sum is negative, returns its magnitude, so that it can be rendered as a
    /// subtraction.
    pub(crate) fn negative_magnitude(&self) -> Option<MathExpr> {
        match self {
            MathExpr::Number(n) if *n < 0 => Some(MathExpr::Number(Rational::from(-n))),
            MathExpr::Op(Operator::Multiply, factors) => match factors.first() {
                Some(MathExpr::Number(n)) if *n < 0 => Some(self.clone().negated()),
                _ => None,
            },
            MathExpr::Op(Operator::Negate, operands) => match operands.as_slice() {
                [inner] => Some(inner.clone()),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Writes `expr`, surrounded by parentheses if `wrap` is true.
fn fmt_wrapped(f: &mut Formatter, expr: &MathExpr, wrap: bool) -> fmt::Result {
    if wrap {
        write!(f, "({})", expr)
    } else {
        write!(f, "{}", expr)
    }
}

fn fmt_sum(f: &mut Formatter, terms: &[MathExpr]) -> fmt::Result {
    let mut iter = terms.iter();
    if let Some(first) = iter.next() {
        fmt_wrapped(f, first, first.is_sum_like())?;
    }

    for term in iter {
        match term.negative_magnitude() {
            Some(magnitude) => {
                write!(f, " - ")?;
                fmt_wrapped(f, &magnitude, magnitude.is_sum_like())?;
            },
            None => {
                write!(f, " + ")?;
                fmt_wrapped(f, term, term.is_sum_like())?;
            },
        }
    }

    Ok(())
}

fn fmt_difference(f: &mut Formatter, operands: &[MathExpr]) -> fmt::Result {
    let mut iter = operands.iter();
    if let Some(first) = iter.next() {
        fmt_wrapped(f, first, first.operator() == Some(Operator::Equal))?;
    }

    for operand in iter {
        write!(f, " - ")?;
        fmt_wrapped(f, operand, operand.is_sum_like() || operand.negative_magnitude().is_some())?;
    }

    Ok(())
}

/// Renders a single factor of a product. `first` is true for the leading factor, which may keep
/// its own minus sign.
fn render_factor(factor: &MathExpr, first: bool) -> String {
    let wrap = match factor {
        MathExpr::Number(n) => !is_integer(n) || (!first && *n < 0),
        MathExpr::Symbol(_) => false,
        MathExpr::Op(Operator::Negate, _) => !first,
        MathExpr::Op(..) => true,
    };

    if wrap {
        format!("({})", factor)
    } else {
        factor.to_string()
    }
}

fn fmt_product(f: &mut Formatter, factors: &[MathExpr]) -> fmt::Result {
    let mut prev: Option<String> = None;
    for (i, factor) in factors.iter().enumerate() {
        let current = render_factor(factor, i == 0);
        if let Some(prev) = &prev {
            let prev_ends_in_name = prev.ends_with(|c: char| c.is_ascii_alphabetic() || c == '_');
            let juxtapose = current.starts_with('(')
                || (current.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_') && !prev_ends_in_name);
            if !juxtapose {
                write!(f, " * ")?;
            }
        }
        write!(f, "{}", current)?;
        prev = Some(current);
    }

    Ok(())
}

fn fmt_quotient(f: &mut Formatter, operands: &[MathExpr]) -> fmt::Result {
    let mut iter = operands.iter();
    if let Some(numerator) = iter.next() {
        fmt_wrapped(f, numerator, numerator.is_sum_like())?;
    }

    for denominator in iter {
        write!(f, "/")?;
        fmt_wrapped(f, denominator, !denominator.is_atomic())?;
    }

    Ok(())
}

impl Display for MathExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MathExpr::Number(n) => write!(f, "{}", n),
            MathExpr::Symbol(sym) => write!(f, "{}", sym),
            MathExpr::Op(op, operands) => match op {
                Operator::Add => fmt_sum(f, operands),
                Operator::Subtract => fmt_difference(f, operands),
                Operator::Multiply => fmt_product(f, operands),
                Operator::Divide => fmt_quotient(f, operands),
                Operator::Negate => {
                    for operand in operands {
                        write!(f, "-")?;
                        fmt_wrapped(f, operand, !operand.is_atomic())?;
                    }
                    Ok(())
                },
                Operator::Equal => {
                    let mut iter = operands.iter();
                    if let Some(lhs) = iter.next() {
                        write!(f, "{}", lhs)?;
                    }
                    for rhs in iter {
                        write!(f, " = {}", rhs)?;
                    }
                    Ok(())
                },
            },
        }
    }
}

/// Writes `expr` as LaTeX, surrounded by parentheses if `wrap` is true.
fn fmt_latex_wrapped(f: &mut Formatter, expr: &MathExpr, wrap: bool) -> fmt::Result {
    if wrap {
        fmt_paren(f, expr)
    } else {
        expr.fmt_latex(f)
    }
}

/// Writes a rational number as LaTeX, using `\frac` if it is not an integer.
fn fmt_rational_latex(f: &mut Formatter, n: &Rational) -> fmt::Result {
    if is_integer(n) {
        write!(f, "{}", n)
    } else {
        if *n < 0 {
            write!(f, "-")?;
        }
        write!(f, "\\frac{{{}}}{{{}}}", n.numer().clone().abs(), n.denom())
    }
}

impl Latex for MathExpr {
    fn fmt_latex(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            MathExpr::Number(n) => fmt_rational_latex(f, n),
            MathExpr::Symbol(sym) => write!(f, "{}", sym),
            MathExpr::Op(Operator::Add, terms) => {
                for (i, term) in terms.iter().enumerate() {
                    match (i, term.negative_magnitude()) {
                        (0, _) => fmt_latex_wrapped(f, term, term.is_sum_like())?,
                        (_, Some(magnitude)) => {
                            write!(f, " - ")?;
                            fmt_latex_wrapped(f, &magnitude, magnitude.is_sum_like())?;
                        },
                        (_, None) => {
                            write!(f, " + ")?;
                            fmt_latex_wrapped(f, term, term.is_sum_like())?;
                        },
                    }
                }
                Ok(())
            },
            MathExpr::Op(Operator::Subtract, operands) => {
                for (i, operand) in operands.iter().enumerate() {
                    if i > 0 {
                        write!(f, " - ")?;
                    }
                    let wrap = i > 0 && (operand.is_sum_like() || operand.negative_magnitude().is_some());
                    fmt_latex_wrapped(f, operand, wrap)?;
                }
                Ok(())
            },
            MathExpr::Op(Operator::Multiply, factors) => {
                let mut prev: Option<String> = None;
                for (i, factor) in factors.iter().enumerate() {
                    let wrap = match factor {
                        MathExpr::Number(n) => i > 0 && *n < 0,
                        MathExpr::Op(Operator::Negate, _) => i > 0,
                        MathExpr::Op(Operator::Divide, _) | MathExpr::Symbol(_) => false,
                        MathExpr::Op(..) => true,
                    };
                    let current = if wrap {
                        format!("\\left({}\\right)", factor.as_display())
                    } else {
                        factor.as_display().to_string()
                    };

                    if let Some(prev) = &prev {
                        let juxtapose = current.starts_with("\\left(")
                            || (current.starts_with(|c: char| c.is_ascii_alphabetic())
                                && !prev.ends_with(|c: char| c.is_ascii_alphabetic()));
                        if !juxtapose {
                            write!(f, " \\cdot ")?;
                        }
                    }
                    write!(f, "{}", current)?;
                    prev = Some(current);
                }
                Ok(())
            },
            MathExpr::Op(Operator::Divide, operands) => match operands.as_slice() {
                [numerator, denominator] => fmt_frac(f, numerator, denominator),
                operands => {
                    for (i, operand) in operands.iter().enumerate() {
                        if i > 0 {
                            write!(f, " \\div ")?;
                        }
                        fmt_latex_wrapped(f, operand, !operand.is_atomic())?;
                    }
                    Ok(())
                },
            },
            MathExpr::Op(Operator::Negate, operands) => {
                for operand in operands {
                    write!(f, "-")?;
                    fmt_latex_wrapped(f, operand, operand.is_sum_like() || operand.negative_magnitude().is_some())?;
                }
                Ok(())
            },
            MathExpr::Op(Operator::Equal, operands) => {
                for (i, operand) in operands.iter().enumerate() {
                    if i > 0 {
                        write!(f, " = ")?;
                    }
                    operand.fmt_latex(f)?;
                }
                Ok(())
            },
        }
    }
}
