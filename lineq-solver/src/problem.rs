//! Multiple-choice problems built from the steps of a solution.

use crate::{
    equation::LinearEquation,
    error::UnsupportedFamily,
    options::GenerationOptions,
    random::int,
    solver::EquationSolver,
    step::Step,
};
use lineq_compute::{ComputeEngine, MathExpr};
use lineq_error::Error;
use lineq_parser::parser::fmt::Latex;
use rand::{seq::SliceRandom, Rng};
use rug::Rational;
use std::fmt;

/// The families of equations in the game. Only linear equations can be generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquationFamily {
    /// Equations such as `3x + 4 = 19`.
    Linear,

    /// Equations such as `x^2 - 5x + 6 = 0`.
    Quadratic,

    /// Equations such as `|2x - 3| = 7`.
    AbsoluteValue,
}

impl EquationFamily {
    /// Returns true if problems of this family can be generated.
    pub fn is_supported(self) -> bool {
        self == Self::Linear
    }

    /// Returns the name of the family.
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Quadratic => "quadratic",
            Self::AbsoluteValue => "absolute value",
        }
    }
}

impl fmt::Display for EquationFamily {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One of the answers offered for a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// The description of the move.
    pub text: String,

    /// Whether this is the move the solver made.
    pub correct: bool,
}

impl Choice {
    fn new(text: String, correct: bool) -> Self {
        Self { text, correct }
    }
}

/// Shapes of moves that look plausible but are not the next move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Distractor {
    AddTerms,
    AddConstants,
    SubtractBothSides,
    AddBothSides,
    MultiplyBothSides,
    DivideBothSides,
}

impl Distractor {
    const ALL: [Distractor; 6] = [
        Self::AddTerms,
        Self::AddConstants,
        Self::SubtractBothSides,
        Self::AddBothSides,
        Self::MultiplyBothSides,
        Self::DivideBothSides,
    ];

    /// Writes a random move of this shape. Moves of different shapes are always different.
    fn render(self, unknown: &str, rng: &mut impl Rng) -> String {
        let a = int(1, 10, rng);
        match self {
            Self::AddTerms => format!("Add {}{}, {}{}", a, unknown, int(1, 10, rng), unknown),
            Self::AddConstants => format!("Add {},{}", a, int(-10, 10, rng)),
            Self::SubtractBothSides => format!("Subtract {} from both sides", a),
            Self::AddBothSides => format!("Add {} to both sides", a),
            Self::MultiplyBothSides => format!("Multiply both sides by {}", int(2, 10, rng)),
            Self::DivideBothSides => format!("Divide both sides by {}", int(2, 10, rng)),
        }
    }
}

/// A problem in the maze game: a random linear equation, solved one move at a time.
///
/// For each move, the player sees the equation as it is before the move and picks the move from
/// three shuffled [`Choice`]s. Only one of them is correct.
#[derive(Debug, Clone)]
pub struct Problem {
    engine: ComputeEngine,
    equation: LinearEquation,
    solver: EquationSolver,
    step: Option<Step>,
    statement: MathExpr,
    choices: Vec<Choice>,
}

impl Problem {
    /// Generates a linear problem and makes its first move.
    pub fn new(
        options: &GenerationOptions,
        engine: &ComputeEngine,
        rng: &mut impl Rng,
    ) -> Result<Self, Error> {
        let equation = LinearEquation::new(options, engine, rng)?;
        Self::from_equation(equation, engine, rng)
    }

    /// Generates a problem of the given family. Only [`EquationFamily::Linear`] is supported;
    /// other families return an [`UnsupportedFamily`] error.
    pub fn with_family(
        family: EquationFamily,
        options: &GenerationOptions,
        engine: &ComputeEngine,
        rng: &mut impl Rng,
    ) -> Result<Self, Error> {
        if !family.is_supported() {
            return Err(Error::spanless(UnsupportedFamily { family: family.name() }));
        }
        Self::new(options, engine, rng)
    }

    /// Creates a problem from an existing equation and makes its first move.
    pub fn from_equation(
        equation: LinearEquation,
        engine: &ComputeEngine,
        rng: &mut impl Rng,
    ) -> Result<Self, Error> {
        let solver = EquationSolver::new(&equation.equation(), engine)?;
        let mut problem = Self {
            engine: engine.clone(),
            statement: equation.equation(),
            equation,
            solver,
            step: None,
            choices: Vec::new(),
        };
        problem.next_move(rng);
        Ok(problem)
    }

    /// Advances to the next move. Returns false, and changes nothing, if every move has been
    /// made.
    pub fn next_move(&mut self, rng: &mut impl Rng) -> bool {
        let Ok(step) = self.solver.step() else {
            return false;
        };

        let is_last = self.solver.steps_count() == 0;
        let distractors = if is_last {
            self.wrong_values(&step, rng)
        } else {
            self.wrong_moves(&step, rng)
        };

        let mut choices = vec![Choice::new(step.description.clone(), true)];
        choices.extend(distractors.into_iter().map(|text| Choice::new(text, false)));
        choices.shuffle(rng);

        self.statement = step.current.clone();
        self.choices = choices;
        self.step = Some(step);
        true
    }

    /// Two distinct moves that differ from the step's move.
    fn wrong_moves(&self, step: &Step, rng: &mut impl Rng) -> Vec<String> {
        let mut shapes = Distractor::ALL;
        shapes.shuffle(rng);
        shapes.into_iter()
            .map(|shape| shape.render(self.engine.unknown(), rng))
            .filter(|text| *text != step.description)
            .take(2)
            .collect()
    }

    /// Two distinct wrong solutions near the step's solution.
    fn wrong_values(&self, step: &Step, rng: &mut impl Rng) -> Vec<String> {
        let value = step.result.as_number().cloned().unwrap_or_default();
        let mut offsets = (-5..=5).filter(|k| *k != 0).collect::<Vec<i32>>();
        offsets.shuffle(rng);
        offsets.into_iter()
            .take(2)
            .map(|k| {
                let wrong = MathExpr::Number(Rational::from(&value + k));
                MathExpr::equal(MathExpr::symbol(self.engine.unknown()), wrong).to_string()
            })
            .collect()
    }

    /// Checks the choice at the given index. Returns [`None`] if there is no such choice.
    pub fn answer(&self, index: usize) -> Option<bool> {
        self.choices.get(index).map(|choice| choice.correct)
    }

    /// Returns true if the current move is the last one.
    pub fn is_last_step(&self) -> bool {
        self.solver.steps_count() == 0
    }

    /// Returns the equation as it is before the current move.
    pub fn statement(&self) -> &MathExpr {
        &self.statement
    }

    /// Returns [`Problem::statement`] as LaTeX.
    pub fn statement_latex(&self) -> String {
        self.statement.as_display().to_string()
    }

    /// Returns the choices for the current move.
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// Returns the current move.
    pub fn current_step(&self) -> Option<&Step> {
        self.step.as_ref()
    }

    /// Returns the number of moves after the current one.
    pub fn steps_remaining(&self) -> usize {
        self.solver.steps_count()
    }

    /// Returns the equation of this problem.
    pub fn equation(&self) -> &LinearEquation {
        &self.equation
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use crate::options::GenerationOptionsBuilder;
    use rand::{rngs::StdRng, SeedableRng};

    fn problem(source: &str, target: i32, rng: &mut StdRng) -> Problem {
        let engine = ComputeEngine::default();
        let equation = LinearEquation::from_source(source, target, &engine).unwrap();
        Problem::from_equation(equation, &engine, rng).unwrap()
    }

    fn correct_text(problem: &Problem) -> &str {
        &problem.choices().iter().find(|choice| choice.correct).unwrap().text
    }

    #[test]
    fn first_move_is_made() {
        let mut rng = StdRng::seed_from_u64(8);
        let problem = problem("3*x + 4", 5, &mut rng);

        assert_eq!(problem.statement().to_string(), "3x + 4 = 19");
        assert_eq!(problem.statement_latex(), "3x + 4 = 19");
        assert_eq!(correct_text(&problem), "Subtract 4 from both sides");
        assert_eq!(problem.steps_remaining(), 1);
        assert!(!problem.is_last_step());
    }

    #[test]
    fn choices_are_distinct_with_one_correct() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut problem = problem("2*x + 3*x + 6 - 1", 4, &mut rng);

        loop {
            let choices = problem.choices();
            assert_eq!(choices.len(), 3);
            assert_eq!(choices.iter().filter(|choice| choice.correct).count(), 1);
            assert_ne!(choices[0].text, choices[1].text);
            assert_ne!(choices[1].text, choices[2].text);
            assert_ne!(choices[0].text, choices[2].text);

            if !problem.next_move(&mut rng) {
                break;
            }
        }
    }

    #[test]
    fn final_move_offers_values() {
        let mut rng = StdRng::seed_from_u64(4);
        let problem = problem("5*x", 3, &mut rng);

        assert!(problem.is_last_step());
        assert_eq!(correct_text(&problem), "x = 3");
        for choice in problem.choices() {
            assert!(choice.text.starts_with("x = "));
        }
    }

    #[test]
    fn answer_checks_index() {
        let mut rng = StdRng::seed_from_u64(13);
        let problem = problem("x + 9", 2, &mut rng);

        let correct = problem.choices().iter().position(|choice| choice.correct).unwrap();
        assert_eq!(problem.answer(correct), Some(true));
        assert_eq!(problem.answer((correct + 1) % 3), Some(false));
        assert_eq!(problem.answer(3), None);
    }

    #[test]
    fn no_moves_left() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut problem = problem("2*x", 6, &mut rng);

        let statement = problem.statement().clone();
        assert!(!problem.next_move(&mut rng));
        assert_eq!(problem.statement(), &statement);
        assert_eq!(problem.current_step().unwrap().description, "x = 6");
    }

    #[test]
    fn unsupported_families() {
        let engine = ComputeEngine::default();
        let options = GenerationOptions::default();
        let mut rng = StdRng::seed_from_u64(0);

        for family in [EquationFamily::Quadratic, EquationFamily::AbsoluteValue] {
            let err = Problem::with_family(family, &options, &engine, &mut rng).unwrap_err();
            assert_eq!(err.downcast_ref::<UnsupportedFamily>().unwrap().family, family.name());
        }
        assert!(Problem::with_family(EquationFamily::Linear, &options, &engine, &mut rng).is_ok());
    }

    #[test]
    fn generated_problems_play_through() {
        let engine = ComputeEngine::default();
        let options = GenerationOptionsBuilder::new().difficulty(5).build();
        let mut rng = StdRng::seed_from_u64(77);

        for _ in 0..20 {
            let mut problem = Problem::new(&options, &engine, &mut rng).unwrap();
            let mut moves = 1;
            while problem.next_move(&mut rng) {
                moves += 1;
            }
            assert!(problem.is_last_step());
            assert_eq!(moves, problem.current_step().unwrap().step_number);
        }
    }
}
