use crate::{
    eval,
    expr::MathExpr,
    linear::LinearForm,
};
use lineq_error::Error;
use lineq_parser::parser::{expr::Expr, fmt::Latex, Parser};
use log::trace;
use rug::Rational;

/// The algebra engine used by the equation generator and solver.
///
/// The engine works with expressions in a single unknown, `x` by default. All operations are
/// pure functions of their arguments; the engine only stores the name of the unknown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComputeEngine {
    unknown: String,
}

impl Default for ComputeEngine {
    fn default() -> Self {
        Self::new("x")
    }
}

impl ComputeEngine {
    /// Creates an engine that solves for the given unknown.
    pub fn new(unknown: impl Into<String>) -> Self {
        Self { unknown: unknown.into() }
    }

    /// Returns the name of the unknown.
    pub fn unknown(&self) -> &str {
        &self.unknown
    }

    /// Parses the given text into a structural expression, keeping subtractions and divisions as
    /// they are written.
    pub fn parse_structural(&self, text: &str) -> Result<MathExpr, Error> {
        let mut parser = Parser::new(text);
        let ast = parser.try_parse_full::<Expr>()?;
        MathExpr::try_from(ast)
    }

    /// Parses the given text into a canonical expression.
    pub fn parse(&self, text: &str) -> Result<MathExpr, Error> {
        let expr = self.parse_structural(text)?.canonicalize();
        trace!("parsed `{}` as `{}`", text, expr);
        Ok(expr)
    }

    /// Converts the expression into its canonical form.
    pub fn canonicalize(&self, expr: MathExpr) -> MathExpr {
        expr.canonicalize()
    }

    /// Replaces the unknown with `value`.
    pub fn substitute(&self, expr: &MathExpr, value: &Rational) -> MathExpr {
        eval::substitute(expr, &self.unknown, value)
    }

    /// Evaluates the expression to an exact number.
    pub fn evaluate(&self, expr: &MathExpr) -> Result<Rational, Error> {
        eval::evaluate(expr)
    }

    /// Computes the linear form `c·x + d` of the expression.
    pub fn linear_form(&self, expr: &MathExpr) -> Result<LinearForm, Error> {
        LinearForm::of(expr, &self.unknown)
    }

    /// Simplifies the expression to its linear normal form. Both sides of an equation are
    /// simplified separately.
    pub fn simplify(&self, expr: &MathExpr) -> Result<MathExpr, Error> {
        if let Some((lhs, rhs)) = expr.as_equation() {
            return Ok(MathExpr::equal(self.simplify(lhs)?, self.simplify(rhs)?));
        }

        Ok(self.linear_form(expr)?.into_expr(&self.unknown))
    }

    /// Renders the expression as text that parses back into the same canonical expression.
    pub fn to_text(&self, expr: &MathExpr) -> String {
        expr.to_string()
    }

    /// Renders the expression as LaTeX.
    pub fn to_latex(&self, expr: &MathExpr) -> String {
        expr.as_display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use crate::{error::DivisionByZero, primitive::rational};
    use lineq_parser::parser::error::kind::UnexpectedEof;

    #[test]
    fn parse_generated_text() {
        let engine = ComputeEngine::default();
        let expr = engine.parse("3*x + 2(4x - 1) - (5/2)x + 7").unwrap();

        assert_eq!(engine.to_text(&expr), "3x + 2(4x - 1) - (5/2)x + 7");
    }

    #[test]
    fn parse_error_has_span() {
        let engine = ComputeEngine::default();
        let err = engine.parse("3x +").unwrap_err();

        assert!(err.is::<UnexpectedEof>());
        assert_eq!(err.spans, vec![4..4]);
    }

    #[test]
    fn simplify_to_normal_form() {
        let engine = ComputeEngine::default();
        let expr = engine.parse("(2(3x + 1) + 4)/4 - x").unwrap();

        assert_eq!(engine.to_text(&engine.simplify(&expr).unwrap()), "(1/2)x + 3/2");
    }

    #[test]
    fn simplify_equation() {
        let engine = ComputeEngine::default();
        let expr = engine.parse("2x + 3x = 10 + 10").unwrap();

        assert_eq!(engine.simplify(&expr).unwrap(), engine.parse("5x = 20").unwrap());
    }

    #[test]
    fn evaluate_at_target() {
        let engine = ComputeEngine::default();
        let expr = engine.parse("(7/3)x + 2(x - 1)").unwrap();

        assert_eq!(engine.evaluate(&engine.substitute(&expr, &rational(3))).unwrap(), rational(11));
    }

    #[test]
    fn undefined_evaluation() {
        let engine = ComputeEngine::default();
        let expr = engine.parse("x/(x - 4)").unwrap();

        let err = engine.evaluate(&engine.substitute(&expr, &rational(4))).unwrap_err();
        assert!(err.is::<DivisionByZero>());
    }

    #[test]
    fn latex_rendering() {
        let engine = ComputeEngine::default();
        let expr = engine.parse("(7/3)x - 2 = 5").unwrap();

        assert_eq!(engine.to_latex(&expr), "\\frac{7}{3}x - 2 = 5");
    }

    #[test]
    fn custom_unknown() {
        let engine = ComputeEngine::new("y");
        let expr = engine.parse("3y + 3y").unwrap();

        assert_eq!(engine.to_text(&engine.simplify(&expr).unwrap()), "6y");
    }
}
