//! Stepwise solver for linear equations.
//!
//! The solver narrates how a student would isolate the unknown, one move at a time. It runs in
//! phases, each producing a new equation from the previous one:
//!
//! 1. **Decomposition**: nested sub-expressions of the left-hand side, such as `2(4x - 1)` or
//!    `3 + 5`, are simplified from the inside out. See [`decompose`].
//! 2. **Flattening**: the left-hand side becomes a flat list of terms.
//! 3. **Grouping**: terms in the unknown are combined pairwise from left to right, then
//!    constants are. See [`group`].
//! 4. **Isolation**: the remaining constant is moved to the right-hand side, and the last move
//!    divides by the coefficient of the unknown. See [`isolate`].
//!
//! ```
//! use lineq_compute::ComputeEngine;
//! use lineq_solver::solver::EquationSolver;
//!
//! let engine = ComputeEngine::default();
//! let equation = engine.parse("3x + 4 = 19").unwrap();
//! let mut solver = EquationSolver::new(&equation, &engine).unwrap();
//!
//! assert_eq!(solver.steps_count(), 2);
//! assert_eq!(solver.step().unwrap().description, "Subtract 4 from both sides");
//! assert_eq!(solver.step().unwrap().description, "x = 5");
//! assert!(solver.step().is_err());
//! ```

pub mod decompose;
pub mod group;
pub mod isolate;

use crate::{
    equation::Equation,
    error::NoStepsAvailable,
    step::Step,
    step_collector::StepCollector,
};
use lineq_compute::{ComputeEngine, MathExpr};
use lineq_error::Error;
use log::debug;
use rug::Rational;

/// Solves the equation, passing every step to the collector in solve order. Returns the value of
/// the unknown.
pub fn solve<C: StepCollector>(
    equation: &Equation,
    engine: &ComputeEngine,
    collector: &mut C,
) -> Result<Rational, Error> {
    let unknown = engine.unknown();
    let rhs = engine.evaluate(equation.rhs())?;
    let equation = Equation::new(equation.lhs().clone(), MathExpr::Number(rhs.clone()));

    let lhs = decompose::decompose(&equation, engine, collector)?;
    debug!("decomposed: {}", equation.with_lhs(lhs.clone()));

    let terms = group::flatten(&lhs, engine)?;
    let terms = group::group_terms(terms, equation.rhs(), unknown, collector);
    let terms = group::group_constants(terms, equation.rhs(), collector);
    let lhs = MathExpr::sum(terms);
    debug!("grouped: {}", equation.with_lhs(lhs.clone()));

    isolate::isolate(lhs, rhs, unknown, collector)
}

/// Derives every step of the solution of an equation up front, then hands them out one at a
/// time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquationSolver {
    /// The remaining steps, in reverse order, so that the next step is at the end.
    steps: Vec<Step>,

    /// The value of the unknown.
    solution: Rational,
}

impl EquationSolver {
    /// Solves the given equation. The expression must be an
    /// [`Operator::Equal`](lineq_compute::Operator::Equal) with two operands.
    pub fn new(equation: &MathExpr, engine: &ComputeEngine) -> Result<Self, Error> {
        let equation = Equation::try_from(equation)?;
        let mut steps = Vec::new();
        let solution = solve(&equation, engine, &mut steps)?;
        debug!("solved `{}` in {} steps", equation, steps.len());

        steps.reverse();
        Ok(Self { steps, solution })
    }

    /// Returns the next step. Returns an error if every step has been taken.
    pub fn step(&mut self) -> Result<Step, Error> {
        self.steps.pop().ok_or_else(|| Error::spanless(NoStepsAvailable))
    }

    /// Returns the number of steps that have not been taken yet.
    pub fn steps_count(&self) -> usize {
        self.steps.len()
    }

    /// Returns the steps that have not been taken yet, in solve order.
    pub fn steps(&self) -> impl Iterator<Item = &Step> + '_ {
        self.steps.iter().rev()
    }

    /// Returns the value of the unknown.
    pub fn solution(&self) -> &Rational {
        &self.solution
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use crate::{
        equation::LinearEquation,
        error::InvalidEquationFormat,
        options::GenerationOptionsBuilder,
    };
    use rand::{rngs::StdRng, SeedableRng};

    fn solver(input: &str) -> EquationSolver {
        let engine = ComputeEngine::default();
        EquationSolver::new(&engine.parse(input).unwrap(), &engine).unwrap()
    }

    fn descriptions(solver: &EquationSolver) -> Vec<&str> {
        solver.steps().map(|step| step.description.as_str()).collect()
    }

    #[test]
    fn single_term_is_one_step() {
        let engine = ComputeEngine::default();
        let equation = LinearEquation::from_source("5*x", 7, &engine).unwrap();
        let mut solver = EquationSolver::new(&equation.equation(), &engine).unwrap();

        assert_eq!(solver.steps_count(), 1);
        let step = solver.step().unwrap();
        assert_eq!(step.description, "x = 7");
        assert_eq!(step.result, MathExpr::number(7));
        assert_eq!(step.step_number, 1);
    }

    #[test]
    fn constant_then_division() {
        let mut solver = solver("3x + 4 = 19");

        let first = solver.step().unwrap();
        assert_eq!(first.description, "Subtract 4 from both sides");
        assert_eq!(first.result, MathExpr::number(15));

        let second = solver.step().unwrap();
        assert_eq!(second.description, "x = 5");
        assert_eq!(second.current.to_string(), "3x = 15");
        assert_eq!(second.result, MathExpr::number(5));
        assert_eq!(solver.steps_count(), 0);
    }

    #[test]
    fn like_terms_are_grouped_first() {
        let solver = solver("2x + 3x = 20");

        assert!(solver.steps_count() >= 2);
        assert_eq!(descriptions(&solver), ["Add 2x, 3x", "x = 4"]);
    }

    #[test]
    fn exhausted_steps() {
        let mut solver = solver("x = 3");

        assert!(solver.step().is_ok());
        let err = solver.step().unwrap_err();
        assert!(err.is::<NoStepsAvailable>());
        assert!(solver.step().unwrap_err().is::<NoStepsAvailable>());
    }

    #[test]
    fn not_an_equation() {
        let engine = ComputeEngine::default();
        let err = EquationSolver::new(&engine.parse("3x + 4").unwrap(), &engine).unwrap_err();

        assert!(err.is::<InvalidEquationFormat>());
    }

    #[test]
    fn every_phase() {
        let solver = solver("2(x + 3) - 4 + 3x(5 - 3) = 12 + 3");

        assert_eq!(descriptions(&solver), [
            "Multiply 2(x + 3)",
            "Add 5 - 3",
            "Multiply 3x * 2",
            "Add 2x, 6x",
            "Add 6,-4",
            "Subtract 2 from both sides",
            "x = 13/8",
        ]);
        assert_eq!(solver.steps().next().map(|step| step.current.to_string()).unwrap(), "2(x + 3) - 4 + 3x(5 - 3) = 15");
        assert_eq!(*solver.solution(), Rational::from((13, 8)));
    }

    #[test]
    fn peeking_does_not_change_steps() {
        let mut solver = solver("x + 1 - 2x + 4 = 9");
        let expected = solver.steps().cloned().collect::<Vec<_>>();

        for _ in 0..5 {
            assert_eq!(solver.steps_count(), expected.len());
        }
        let popped = std::iter::from_fn(|| solver.step().ok()).collect::<Vec<_>>();
        assert_eq!(popped, expected);
    }

    #[test]
    fn generated_equations_solve_to_target() {
        let engine = ComputeEngine::default();
        let mut rng = StdRng::seed_from_u64(99);
        for difficulty in 1..=7 {
            let options = GenerationOptionsBuilder::new().difficulty(difficulty).build();
            for _ in 0..40 {
                let equation = LinearEquation::new(&options, &engine, &mut rng).unwrap();
                let mut solver = EquationSolver::new(&equation.equation(), &engine).unwrap();
                let total = solver.steps_count();
                assert!(total >= 1);

                let mut last = None;
                for expected_number in 1..=total {
                    let step = solver.step().unwrap();
                    assert_eq!(step.step_number, expected_number);

                    let reparsed = engine.parse(&step.current.to_string()).unwrap();
                    assert_eq!(reparsed, step.current.clone().canonicalize(), "{}", equation.source());
                    last = Some(step);
                }

                let last = last.unwrap();
                assert_eq!(last.description, format!("x = {}", equation.target()));
                assert_eq!(last.result, MathExpr::number(equation.target()));
                assert!(solver.step().unwrap_err().is::<NoStepsAvailable>());
            }
        }
    }
}
