//! Flattening of the left-hand side into a list of terms, and grouping of like terms.

use crate::{step::Step, step_collector::StepCollector};
use lineq_compute::{ComputeEngine, MathExpr, Operator};
use lineq_error::Error;
use rug::Rational;

/// Returns true if `expr` is a number, or a single term in the unknown.
fn is_monomial(expr: &MathExpr, unknown: &str) -> bool {
    expr.as_number().is_some() || expr.unknown_coefficient(unknown).is_some()
}

fn collect(expr: &MathExpr, engine: &ComputeEngine, terms: &mut Vec<MathExpr>) -> Result<(), Error> {
    match expr {
        MathExpr::Op(Operator::Add, operands) => {
            for operand in operands {
                collect(operand, engine, terms)?;
            }
        },
        MathExpr::Number(n) if *n == 0 => (),
        expr if is_monomial(expr, engine.unknown()) => terms.push(expr.clone()),
        expr => collect(&engine.simplify(expr)?, engine, terms)?,
    }
    Ok(())
}

/// Flattens the left-hand side into its terms, in order. Terms that are not numbers or single
/// terms in the unknown are simplified first, and zero constants are dropped.
pub fn flatten(lhs: &MathExpr, engine: &ComputeEngine) -> Result<Vec<MathExpr>, Error> {
    let mut terms = Vec::new();
    collect(lhs, engine, &mut terms)?;
    Ok(terms)
}

/// Renders the equation whose left-hand side is the sum of `terms`.
pub fn snapshot(terms: &[MathExpr], rhs: &MathExpr) -> MathExpr {
    MathExpr::equal(MathExpr::sum(terms.iter().cloned()), rhs.clone())
}

/// Creates the term `c·x`. Unlike [`MathExpr::unknown_term`], a zero coefficient is kept as
/// `0x`, so the term still counts as a term in the unknown.
fn coefficient_term(coefficient: Rational, unknown: &str) -> MathExpr {
    if coefficient == 0 {
        MathExpr::Op(Operator::Multiply, vec![MathExpr::Number(coefficient), MathExpr::symbol(unknown)])
    } else {
        MathExpr::unknown_term(coefficient, unknown)
    }
}

/// Combines the terms in the unknown from left to right, two at a time, until one is left.
///
/// The first of each pair is replaced by their sum and the second is removed.
pub fn group_terms<C: StepCollector>(
    mut terms: Vec<MathExpr>,
    rhs: &MathExpr,
    unknown: &str,
    collector: &mut C,
) -> Vec<MathExpr> {
    loop {
        let pair = {
            let mut found = terms.iter()
                .enumerate()
                .filter_map(|(i, term)| term.unknown_coefficient(unknown).map(|c| (i, c)));
            (found.next(), found.next())
        };
        let (Some((i, first)), Some((j, second))) = pair else {
            break;
        };

        let combined = coefficient_term(first + second, unknown);
        collector.record(|| Step::new(
            format!("Add {}, {}", terms[i], terms[j]),
            snapshot(&terms, rhs),
            combined.clone(),
        ));
        terms[i] = combined;
        terms.remove(j);
    }

    terms
}

/// Combines the constants from left to right, two at a time, until at most one is left.
///
/// Both constants of each pair are removed, and their sum is appended to the end unless it is
/// zero.
pub fn group_constants<C: StepCollector>(
    mut terms: Vec<MathExpr>,
    rhs: &MathExpr,
    collector: &mut C,
) -> Vec<MathExpr> {
    loop {
        let pair = {
            let mut found = terms.iter()
                .enumerate()
                .filter_map(|(i, term)| term.as_number().map(|n| (i, n.clone())));
            (found.next(), found.next())
        };
        let (Some((i, first)), Some((j, second))) = pair else {
            break;
        };

        let sum = Rational::from(&first + &second);
        collector.record(|| Step::new(
            format!("Add {},{}", first, second),
            snapshot(&terms, rhs),
            MathExpr::Number(sum.clone()),
        ));
        terms.remove(j);
        terms.remove(i);
        if sum != 0 {
            terms.push(MathExpr::Number(sum));
        }
    }

    terms
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn terms(input: &str) -> Vec<MathExpr> {
        let engine = ComputeEngine::default();
        flatten(&engine.parse(input).unwrap(), &engine).unwrap()
    }

    fn text(terms: &[MathExpr]) -> String {
        MathExpr::sum(terms.iter().cloned()).to_string()
    }

    #[test]
    fn flatten_nested_sums() {
        let engine = ComputeEngine::default();
        let lhs = MathExpr::sum([
            engine.parse("2x + 3").unwrap(),
            engine.parse("-x").unwrap(),
        ]);
        let nested = MathExpr::Op(Operator::Add, vec![
            MathExpr::Op(Operator::Add, vec![engine.parse("8x - 2").unwrap(), MathExpr::number(0)]),
            lhs,
        ]);

        assert_eq!(text(&flatten(&nested, &engine).unwrap()), "8x - 2 + 2x + 3 - x");
    }

    #[test]
    fn flatten_simplifies_other_terms() {
        assert_eq!(text(&terms("(2x + 4)/2")), "x + 2");
        assert_eq!(text(&terms("5 - x(3 + 1)")), "5 - 4x");
    }

    #[test]
    fn group_unknown_terms() {
        let rhs = MathExpr::number(20);
        let mut steps = Vec::new();
        let grouped = group_terms(terms("2x + 3x"), &rhs, "x", &mut steps);

        assert_eq!(text(&grouped), "5x");
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].description, "Add 2x, 3x");
        assert_eq!(steps[0].current.to_string(), "2x + 3x = 20");
        assert_eq!(steps[0].result.to_string(), "5x");
    }

    #[test]
    fn group_left_to_right() {
        let rhs = MathExpr::number(9);
        let mut steps = Vec::new();
        let grouped = group_terms(terms("x + 4 - 2x + (1/2)x"), &rhs, "x", &mut steps);

        let descriptions = steps.iter().map(|step| step.description.as_str()).collect::<Vec<_>>();
        assert_eq!(descriptions, ["Add x, -2x", "Add -x, (1/2)x"]);
        assert_eq!(steps[1].current.to_string(), "-x + 4 + (1/2)x = 9");
        assert_eq!(text(&grouped), "(-1/2)x + 4");
    }

    #[test]
    fn cancelled_terms_stay_terms() {
        let rhs = MathExpr::number(6);
        let grouped = group_terms(terms("2x - 2x + 3x"), &rhs, "x", &mut ());

        assert_eq!(text(&grouped), "3x");
    }

    #[test]
    fn group_constants_in_order() {
        let rhs = MathExpr::number(2);
        let mut steps = Vec::new();
        let grouped = group_constants(terms("3 + x - 5 + 7/2"), &rhs, &mut steps);

        let descriptions = steps.iter().map(|step| step.description.as_str()).collect::<Vec<_>>();
        assert_eq!(descriptions, ["Add 3,-5", "Add 7/2,-2"]);
        assert_eq!(steps[1].current.to_string(), "x + 7/2 - 2 = 2");
        assert_eq!(text(&grouped), "x + 3/2");
    }

    #[test]
    fn zero_sum_is_dropped() {
        let rhs = MathExpr::number(2);
        let grouped = group_constants(terms("4x + 3 - 3"), &rhs, &mut ());

        assert_eq!(text(&grouped), "4x");
    }
}
