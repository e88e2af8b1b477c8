//! State of an interactive session of the maze game.

use crate::error::Error;
use lineq_compute::ComputeEngine;
use lineq_solver::{options::GenerationOptions, EquationSolver, Problem};
use log::{info, warn};
use rand::rngs::StdRng;

/// How many times to try generating a problem before giving up.
const GENERATION_RETRIES: usize = 3;

/// A line typed by the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    /// Pick the choice at the given index, counting from zero.
    Answer(usize),

    /// Solve an equation typed by the player and print every step.
    Solve(&'a str),

    /// Drop the current problem and start a new one.
    Skip,

    /// Print the available commands.
    Help,

    /// Leave the game.
    Quit,

    /// Anything else.
    Unknown(&'a str),
}

impl<'a> Command<'a> {
    /// Parses a line of input. The line must not be empty.
    pub fn parse(line: &'a str) -> Self {
        let line = line.trim();
        if let Some(equation) = line.strip_prefix("solve ") {
            return Self::Solve(equation.trim());
        }

        match line {
            "skip" | "s" => Self::Skip,
            "help" | "h" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            _ => match line.parse::<usize>() {
                Ok(n) if n >= 1 => Self::Answer(n - 1),
                _ => Self::Unknown(line),
            },
        }
    }
}

/// What happened after the player picked a choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The move was correct, and there are more moves to make.
    Advanced,

    /// The move was correct, and it was the last one.
    Solved,

    /// The move was wrong. The problem is discarded.
    Wrong,

    /// There is no choice with that number.
    NoSuchChoice,
}

/// Parses and solves an equation typed by the player.
pub fn solve_text(engine: &ComputeEngine, input: &str) -> Result<EquationSolver, Error> {
    let equation = engine.parse(input)?;
    Ok(EquationSolver::new(&equation, engine)?)
}

/// Prints every step of the solution of `input`, or reports why it could not be solved.
pub fn print_solution(engine: &ComputeEngine, input: &str) {
    match solve_text(engine, input) {
        Ok(solver) => {
            for step in solver.steps() {
                println!("{}", step);
            }
            println!("{} = {}", engine.unknown(), solver.solution());
        },
        Err(err) => err.report_to_stderr(input),
    }
}

/// The game: the current problem, and how well the player is doing.
pub struct Game {
    engine: ComputeEngine,
    options: GenerationOptions,
    rng: StdRng,
    problem: Option<Problem>,

    /// The number of correct moves.
    score: u32,

    /// The number of problems played through to the end.
    solved: u32,
}

impl Game {
    /// Creates a game. No problem is generated until [`Game::problem`] is called.
    pub fn new(engine: ComputeEngine, options: GenerationOptions, rng: StdRng) -> Self {
        Self { engine, options, rng, problem: None, score: 0, solved: 0 }
    }

    /// Returns the engine of the game.
    pub fn engine(&self) -> &ComputeEngine {
        &self.engine
    }

    /// Returns the current problem, generating a new one if there is none.
    pub fn problem(&mut self) -> Result<&Problem, Error> {
        let problem = match self.problem.take() {
            Some(problem) => problem,
            None => self.generate()?,
        };
        Ok(self.problem.insert(problem))
    }

    fn generate(&mut self) -> Result<Problem, Error> {
        let mut attempt = 1;
        loop {
            match Problem::new(&self.options, &self.engine, &mut self.rng) {
                Ok(problem) => {
                    info!("new problem: {}", problem.equation().source());
                    return Ok(problem);
                },
                Err(err) if attempt < GENERATION_RETRIES => {
                    warn!("could not generate a problem: {:?}", err.kind);
                    attempt += 1;
                },
                Err(err) => return Err(err.into()),
            }
        }
    }

    /// Picks the choice at `index` for the current move.
    pub fn answer(&mut self, index: usize) -> Outcome {
        let Some(problem) = self.problem.as_mut() else {
            return Outcome::NoSuchChoice;
        };

        match problem.answer(index) {
            None => Outcome::NoSuchChoice,
            Some(false) => {
                self.problem = None;
                Outcome::Wrong
            },
            Some(true) => {
                self.score += 1;
                if problem.next_move(&mut self.rng) {
                    Outcome::Advanced
                } else {
                    self.solved += 1;
                    self.problem = None;
                    Outcome::Solved
                }
            },
        }
    }

    /// Drops the current problem.
    pub fn skip(&mut self) {
        self.problem = None;
    }

    /// Returns the number of correct moves.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Returns the number of solved problems.
    pub fn solved(&self) -> u32 {
        self.solved
    }
}
