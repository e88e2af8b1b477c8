//! Reduction of expressions to the linear normal form `c·x + d`.

use crate::{
    error::{DivisionByZero, MultipleUnknowns, NonLinear, UnexpectedEquation},
    expr::{MathExpr, Operator},
};
use lineq_error::Error;
use rug::Rational;

/// An expression of the form `coefficient·x + constant`, where `x` is the unknown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearForm {
    /// The coefficient of the unknown.
    pub coefficient: Rational,

    /// The term that does not contain the unknown.
    pub constant: Rational,
}

impl LinearForm {
    /// Creates the linear form of a constant.
    pub fn constant(value: Rational) -> Self {
        Self { coefficient: Rational::new(), constant: value }
    }

    /// Returns true if the unknown does not appear in this form.
    pub fn is_constant(&self) -> bool {
        self.coefficient == 0
    }

    /// Computes the linear form of `expr` in the given unknown.
    ///
    /// Returns an error if the expression contains other symbols, is not linear in the unknown,
    /// divides by zero, or is an equation.
    pub fn of(expr: &MathExpr, unknown: &str) -> Result<Self, Error> {
        match expr {
            MathExpr::Number(n) => Ok(Self::constant(n.clone())),
            MathExpr::Symbol(sym) if sym == unknown => Ok(Self {
                coefficient: Rational::from(1),
                constant: Rational::new(),
            }),
            MathExpr::Symbol(sym) => Err(Error::spanless(MultipleUnknowns {
                symbol: sym.clone(),
                unknown: unknown.to_owned(),
            })),
            MathExpr::Op(op, operands) => {
                let mut forms = operands.iter().map(|operand| Self::of(operand, unknown));
                match op {
                    Operator::Add => forms.try_fold(Self::constant(Rational::new()), |acc, form| {
                        Ok(acc.add(form?))
                    }),
                    Operator::Subtract => {
                        let first = forms.next().transpose()?
                            .unwrap_or_else(|| Self::constant(Rational::new()));
                        forms.try_fold(first, |acc, form| Ok(acc.add(form?.neg())))
                    },
                    Operator::Negate => forms.try_fold(Self::constant(Rational::new()), |acc, form| {
                        Ok(acc.add(form?.neg()))
                    }),
                    Operator::Multiply => forms.try_fold(Self::constant(Rational::from(1)), |acc, form| {
                        acc.mul(form?).ok_or_else(|| non_linear(expr, unknown))
                    }),
                    Operator::Divide => {
                        let first = forms.next().transpose()?
                            .unwrap_or_else(|| Self::constant(Rational::from(1)));
                        operands.iter().skip(1).zip(forms).try_fold(first, |acc, (den, form)| {
                            let form = form?;
                            if !form.is_constant() {
                                return Err(non_linear(expr, unknown));
                            }
                            if form.constant == 0 {
                                return Err(Error::spanless(DivisionByZero {
                                    denominator: den.to_string(),
                                }));
                            }
                            Ok(acc.div(&form.constant))
                        })
                    },
                    Operator::Equal => Err(Error::spanless(UnexpectedEquation)),
                }
            },
        }
    }

    /// Converts this form back into a canonical expression: `c·x + d`, dropping whichever part is
    /// zero.
    pub fn into_expr(self, unknown: &str) -> MathExpr {
        if self.coefficient == 0 {
            return MathExpr::Number(self.constant);
        }

        let term = MathExpr::unknown_term(self.coefficient, unknown);
        if self.constant == 0 {
            term
        } else {
            MathExpr::sum([term, MathExpr::Number(self.constant)])
        }
    }

    fn add(self, other: Self) -> Self {
        Self {
            coefficient: self.coefficient + other.coefficient,
            constant: self.constant + other.constant,
        }
    }

    fn neg(self) -> Self {
        Self {
            coefficient: -self.coefficient,
            constant: -self.constant,
        }
    }

    /// Multiplies two forms. Returns [`None`] if both contain the unknown.
    fn mul(self, other: Self) -> Option<Self> {
        if !self.is_constant() && !other.is_constant() {
            return None;
        }

        let coefficient = Rational::from(&self.coefficient * &other.constant)
            + Rational::from(&self.constant * &other.coefficient);
        Some(Self {
            coefficient,
            constant: self.constant * other.constant,
        })
    }

    fn div(self, divisor: &Rational) -> Self {
        Self {
            coefficient: self.coefficient / divisor,
            constant: self.constant / divisor,
        }
    }
}

fn non_linear(expr: &MathExpr, unknown: &str) -> Error {
    Error::spanless(NonLinear {
        expr: expr.to_string(),
        unknown: unknown.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use crate::primitive::rational;
    use lineq_parser::parser::{expr::Expr, Parser};

    fn form(input: &str) -> Result<LinearForm, Error> {
        let ast = Parser::new(input).try_parse_full::<Expr>().unwrap();
        LinearForm::of(&MathExpr::try_from(ast).unwrap().canonicalize(), "x")
    }

    fn linear(coefficient: Rational, constant: Rational) -> LinearForm {
        LinearForm { coefficient, constant }
    }

    #[test]
    fn collect_terms() {
        assert_eq!(form("3x + 4 - x + 2").unwrap(), linear(rational(2), rational(6)));
    }

    #[test]
    fn distribute_product() {
        assert_eq!(form("2(4x - 1)").unwrap(), linear(rational(8), rational(-2)));
        assert_eq!(form("3x(2 + 5)").unwrap(), linear(rational(21), rational(0)));
    }

    #[test]
    fn divide_by_constant() {
        assert_eq!(form("(2x + 3)/4").unwrap(), linear(rational((1, 2)), rational((3, 4))));
    }

    #[test]
    fn reject_non_linear() {
        assert!(form("x(x + 1)").unwrap_err().is::<NonLinear>());
        assert!(form("4/x").unwrap_err().is::<NonLinear>());
    }

    #[test]
    fn reject_zero_denominator() {
        let err = form("(x + 1)/(3 - 3)").unwrap_err();
        let kind = err.downcast_ref::<DivisionByZero>().unwrap();
        assert_eq!(kind.denominator, "3 - 3");
    }

    #[test]
    fn reject_other_symbols() {
        assert!(form("x + y").unwrap_err().is::<MultipleUnknowns>());
    }

    #[test]
    fn back_to_expr() {
        assert_eq!(linear(rational(3), rational(-4)).into_expr("x").to_string(), "3x - 4");
        assert_eq!(linear(rational(0), rational(5)).into_expr("x").to_string(), "5");
        assert_eq!(linear(rational(-1), rational(0)).into_expr("x").to_string(), "-x");
    }
}
