//! Isolation of the unknown on the left-hand side.

use crate::{
    error::CouldNotIsolate,
    options::MAX_ISOLATION_ITERATIONS,
    step::Step,
    step_collector::StepCollector,
};
use lineq_compute::{MathExpr, Operator};
use lineq_error::Error;
use log::trace;
use rug::Rational;

/// If `lhs` is the sum of a term containing the unknown and a number, returns both.
fn split_constant<'a>(lhs: &'a MathExpr, unknown: &str) -> Option<(&'a MathExpr, &'a Rational)> {
    let MathExpr::Op(Operator::Add, operands) = lhs else {
        return None;
    };

    match operands.as_slice() {
        [term, MathExpr::Number(n)] | [MathExpr::Number(n), term] if term.contains_symbol(unknown) => {
            Some((term, n))
        },
        _ => None,
    }
}

fn equation(lhs: &MathExpr, rhs: &Rational) -> MathExpr {
    MathExpr::equal(lhs.clone(), MathExpr::Number(rhs.clone()))
}

/// Undoes the operations applied to the unknown until it is alone on the left-hand side, then
/// records the final step `x = <value>`. Returns the value of the unknown.
///
/// The left-hand side must be the output of grouping: a term in the unknown, optionally plus a
/// number. A constant is moved to the right-hand side by subtracting it (or adding its
/// magnitude, if it is negative) on both sides. Dividing by the coefficient of the unknown is the
/// final step.
pub fn isolate<C: StepCollector>(
    mut lhs: MathExpr,
    mut rhs: Rational,
    unknown: &str,
    collector: &mut C,
) -> Result<Rational, Error> {
    for _ in 0..MAX_ISOLATION_ITERATIONS {
        trace!("isolating `{}`", equation(&lhs, &rhs));

        if let Some(coefficient) = lhs.unknown_coefficient(unknown) {
            if coefficient == 0 {
                break;
            }

            let value = Rational::from(&rhs / &coefficient);
            collector.record(|| Step::new(
                MathExpr::equal(MathExpr::symbol(unknown), MathExpr::Number(value.clone())).to_string(),
                equation(&lhs, &rhs),
                MathExpr::Number(value.clone()),
            ));
            return Ok(value);
        }

        let Some((term, constant)) = split_constant(&lhs, unknown) else {
            break;
        };

        let (description, new_rhs) = if *constant > 0 {
            (
                format!("Subtract {} from both sides", constant),
                Rational::from(&rhs - constant),
            )
        } else if *constant < 0 {
            let magnitude = Rational::from(-constant);
            (
                format!("Add {} to both sides", magnitude),
                Rational::from(&rhs + &magnitude),
            )
        } else {
            break;
        };

        collector.record(|| Step::new(description, equation(&lhs, &rhs), MathExpr::Number(new_rhs.clone())));
        lhs = term.clone();
        rhs = new_rhs;
    }

    Err(Error::spanless(CouldNotIsolate {
        unknown: unknown.to_owned(),
        equation: equation(&lhs, &rhs).to_string(),
    }))
}
