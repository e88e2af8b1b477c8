//! Substitution of values for symbols, and exact numeric evaluation.

use crate::{
    error::{DivisionByZero, UnboundSymbol, UnexpectedEquation},
    expr::{MathExpr, Operator},
};
use lineq_error::Error;
use rug::Rational;

/// Replaces every occurrence of the symbol `name` in `expr` with `value`.
pub fn substitute(expr: &MathExpr, name: &str, value: &Rational) -> MathExpr {
    match expr {
        MathExpr::Symbol(sym) if sym == name => MathExpr::Number(value.clone()),
        MathExpr::Op(op, operands) => MathExpr::Op(
            *op,
            operands.iter().map(|operand| substitute(operand, name, value)).collect(),
        ),
        atom => atom.clone(),
    }
}

/// Evaluates `expr` to an exact number.
///
/// Every symbol must have been substituted beforehand.
pub fn evaluate(expr: &MathExpr) -> Result<Rational, Error> {
    match expr {
        MathExpr::Number(n) => Ok(n.clone()),
        MathExpr::Symbol(sym) => Err(Error::spanless(UnboundSymbol { symbol: sym.clone() })),
        MathExpr::Op(op, operands) => {
            let mut values = operands.iter().map(evaluate);
            match op {
                Operator::Add => values.try_fold(Rational::new(), |acc, value| Ok(acc + value?)),
                Operator::Subtract => {
                    let first = values.next().transpose()?.unwrap_or_default();
                    values.try_fold(first, |acc, value| Ok(acc - value?))
                },
                Operator::Multiply => values.try_fold(Rational::from(1), |acc, value| Ok(acc * value?)),
                Operator::Divide => {
                    let first = values.next().transpose()?.unwrap_or_else(|| Rational::from(1));
                    operands.iter().skip(1).zip(values).try_fold(first, |acc, (den, value)| {
                        let value = value?;
                        if value == 0 {
                            return Err(Error::spanless(DivisionByZero {
                                denominator: den.to_string(),
                            }));
                        }
                        Ok(acc / value)
                    })
                },
                Operator::Negate => values.try_fold(Rational::new(), |acc, value| Ok(acc - value?)),
                Operator::Equal => Err(Error::spanless(UnexpectedEquation)),
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use crate::primitive::rational;
    use lineq_parser::parser::{expr::Expr, Parser};

    fn parse(input: &str) -> MathExpr {
        let ast = Parser::new(input).try_parse_full::<Expr>().unwrap();
        MathExpr::try_from(ast).unwrap()
    }

    #[test]
    fn substitute_then_evaluate() {
        let expr = substitute(&parse("3x + 2(x - 1)"), "x", &rational(4));
        assert_eq!(evaluate(&expr).unwrap(), rational(18));
    }

    #[test]
    fn exact_fractions() {
        let expr = substitute(&parse("(7/3)x - 1/6"), "x", &rational(2));
        assert_eq!(evaluate(&expr).unwrap(), rational((9, 2)));
    }

    #[test]
    fn structural_and_canonical_agree() {
        let structural = substitute(&parse("(2(x - 5) + 4)/3 - x"), "x", &rational(7));
        assert_eq!(evaluate(&structural).unwrap(), evaluate(&structural.clone().canonicalize()).unwrap());
    }

    #[test]
    fn unbound_symbol() {
        let err = evaluate(&parse("x + 1")).unwrap_err();
        assert_eq!(err.downcast_ref::<UnboundSymbol>().unwrap().symbol, "x");
    }

    #[test]
    fn division_by_zero() {
        let expr = substitute(&parse("(x + 1)/(x - 2)"), "x", &rational(2));
        let err = evaluate(&expr).unwrap_err();
        assert_eq!(err.downcast_ref::<DivisionByZero>().unwrap().denominator, "2 - 2");
    }
}
