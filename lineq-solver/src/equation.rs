//! Equations, and the random linear equations given to players.

use crate::{
    error::{CouldNotIsolate, GenerationFailed, InvalidEquationFormat},
    options::GenerationOptions,
    random,
    solver,
    synth::TermSynthesizer,
};
use lineq_compute::{ComputeEngine, MathExpr};
use lineq_error::Error;
use lineq_parser::parser::fmt::Latex;
use log::{debug, warn};
use rand::Rng;
use rug::Rational;
use std::fmt;

/// An equation `lhs = rhs`.
///
/// Equations are values: every phase of the solver produces a new equation rather than changing
/// an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equation {
    lhs: MathExpr,
    rhs: MathExpr,
}

impl Equation {
    /// Creates the equation `lhs = rhs`.
    pub fn new(lhs: MathExpr, rhs: MathExpr) -> Self {
        Self { lhs, rhs }
    }

    /// Returns the left-hand side.
    pub fn lhs(&self) -> &MathExpr {
        &self.lhs
    }

    /// Returns the right-hand side.
    pub fn rhs(&self) -> &MathExpr {
        &self.rhs
    }

    /// Returns a copy of this equation with a different left-hand side.
    pub fn with_lhs(&self, lhs: MathExpr) -> Self {
        Self::new(lhs, self.rhs.clone())
    }

    /// Returns the equation as an [`Operator::Equal`](lineq_compute::Operator::Equal) expression.
    pub fn to_expr(&self) -> MathExpr {
        MathExpr::equal(self.lhs.clone(), self.rhs.clone())
    }
}

impl TryFrom<&MathExpr> for Equation {
    type Error = Error;

    fn try_from(expr: &MathExpr) -> Result<Self, Self::Error> {
        match expr.as_equation() {
            Some((lhs, rhs)) => Ok(Self::new(lhs.clone(), rhs.clone())),
            None => Err(Error::spanless(InvalidEquationFormat { found: expr.to_string() })),
        }
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} = {}", self.lhs, self.rhs)
    }
}

impl Latex for Equation {
    fn fmt_latex(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.lhs.fmt_latex(f)?;
        write!(f, " = ")?;
        self.rhs.fmt_latex(f)
    }
}

/// A random linear equation whose solution is a known integer.
///
/// The left-hand side is synthesized by a [`TermSynthesizer`]; the right-hand side is the value
/// of the left-hand side at the target. Synthesized text that cannot be used (it does not parse,
/// divides by zero, is not linear, or the unknown cancels out) is discarded and synthesized
/// again, up to [`GenerationOptions::max_attempts`] times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearEquation {
    source: String,
    target: i32,
    rhs: Rational,
    equation: Equation,
}

impl LinearEquation {
    /// Generates a random linear equation.
    pub fn new(
        options: &GenerationOptions,
        engine: &ComputeEngine,
        rng: &mut impl Rng,
    ) -> Result<Self, Error> {
        let target = random::int(1, 20, rng);
        let synth = TermSynthesizer::new(engine.unknown());

        for attempt in 1..=options.max_attempts {
            let source = synth.synthesize(options.difficulty, rng);
            match Self::from_source(source.clone(), target, engine) {
                Ok(equation) => {
                    debug!("generated `{}` ({} = {})", equation.equation, engine.unknown(), target);
                    return Ok(equation);
                },
                Err(err) => warn!(
                    "discarding `{}` (attempt {} of {}): {:?}",
                    source,
                    attempt,
                    options.max_attempts,
                    err.kind,
                ),
            }
        }

        Err(Error::spanless(GenerationFailed { attempts: options.max_attempts }))
    }

    /// Builds the equation whose left-hand side is `source` and whose solution is `target`.
    ///
    /// Returns an error if the left-hand side cannot be parsed or evaluated, is not linear in the
    /// unknown, or does not depend on the unknown.
    pub fn from_source(
        source: impl Into<String>,
        target: i32,
        engine: &ComputeEngine,
    ) -> Result<Self, Error> {
        let source = source.into();
        let lhs = engine.parse(&source)?;

        if engine.linear_form(&lhs)?.is_constant() {
            return Err(Error::spanless(CouldNotIsolate {
                unknown: engine.unknown().to_owned(),
                equation: lhs.to_string(),
            }));
        }

        let rhs = engine.evaluate(&engine.substitute(&lhs, &Rational::from(target)))?;
        let equation = Equation::new(lhs, MathExpr::Number(rhs.clone()));

        // the stepwise solver must also reach the target
        solver::solve(&equation, engine, &mut ())?;

        Ok(Self { source, target, rhs, equation })
    }

    /// Returns the equation as an [`Operator::Equal`](lineq_compute::Operator::Equal) expression.
    pub fn equation(&self) -> MathExpr {
        self.equation.to_expr()
    }

    /// Returns the two sides of the equation.
    pub fn sides(&self) -> &Equation {
        &self.equation
    }

    /// Returns the equation as LaTeX.
    pub fn equation_latex(&self) -> String {
        self.equation.as_display().to_string()
    }

    /// Returns the solution of the equation.
    pub fn target(&self) -> i32 {
        self.target
    }

    /// Returns the right-hand side of the equation.
    pub fn rhs(&self) -> &Rational {
        &self.rhs
    }

    /// Returns the synthesized text of the left-hand side.
    pub fn source(&self) -> &str {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use crate::options::{GenerationOptionsBuilder, DEFAULT_MAX_ATTEMPTS};
    use lineq_compute::error::NonLinear;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn single_term() {
        let engine = ComputeEngine::default();
        let equation = LinearEquation::from_source("5*x", 4, &engine).unwrap();

        assert_eq!(equation.equation(), engine.parse("5x = 20").unwrap());
        assert_eq!(equation.equation_latex(), "5x = 20");
        assert_eq!(*equation.rhs(), 20);
    }

    #[test]
    fn fractional_rhs() {
        let engine = ComputeEngine::default();
        let equation = LinearEquation::from_source("(2/3)x + 1", 2, &engine).unwrap();

        assert_eq!(*equation.rhs(), Rational::from((7, 3)));
        assert_eq!(equation.sides().to_string(), "(2/3)x + 1 = 7/3");
    }

    #[test]
    fn reject_cancelled_unknown() {
        let engine = ComputeEngine::default();
        let err = LinearEquation::from_source("3*x - 3*x", 4, &engine).unwrap_err();

        assert!(err.is::<CouldNotIsolate>());
    }

    #[test]
    fn reject_non_linear() {
        let engine = ComputeEngine::default();
        let err = LinearEquation::from_source("x(x + 1)", 4, &engine).unwrap_err();

        assert!(err.is::<NonLinear>());
    }

    #[test]
    fn invalid_format() {
        let engine = ComputeEngine::default();
        let err = Equation::try_from(&engine.parse("3x + 4").unwrap()).unwrap_err();

        assert_eq!(err.downcast_ref::<InvalidEquationFormat>().unwrap().found, "3x + 4");
    }

    #[test]
    fn regeneration_is_capped() {
        let engine = ComputeEngine::default();
        let single = GenerationOptionsBuilder::new().difficulty(2).max_attempts(1).build();
        let default = GenerationOptionsBuilder::new().difficulty(2).build();
        assert_eq!(default.max_attempts, DEFAULT_MAX_ATTEMPTS);

        let mut failures = 0;
        for seed in 0..400 {
            let mut rng = StdRng::seed_from_u64(seed);
            if let Err(err) = LinearEquation::new(&single, &engine, &mut rng) {
                assert_eq!(err.downcast_ref::<GenerationFailed>(), Some(&GenerationFailed { attempts: 1 }));
                failures += 1;

                // with more attempts, the same draw is discarded and synthesized again
                let mut rng = StdRng::seed_from_u64(seed);
                assert!(LinearEquation::new(&default, &engine, &mut rng).is_ok());
            }
        }

        // `ax - ax` is reachable at difficulty 2
        assert!(failures > 0);
    }

    #[test]
    fn generated_equations_hold_at_target() {
        let engine = ComputeEngine::default();
        let mut rng = StdRng::seed_from_u64(2024);
        for difficulty in 1..=7 {
            let options = GenerationOptionsBuilder::new().difficulty(difficulty).build();
            for _ in 0..40 {
                let equation = LinearEquation::new(&options, &engine, &mut rng).unwrap();
                let (lhs, rhs) = (equation.sides().lhs(), equation.sides().rhs());

                assert!((1..=20).contains(&equation.target()));
                let value = engine.evaluate(&engine.substitute(lhs, &Rational::from(equation.target())));
                assert_eq!(value.unwrap(), *equation.rhs());
                assert_eq!(rhs, &MathExpr::Number(equation.rhs().clone()));
            }
        }
    }
}
