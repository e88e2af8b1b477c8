//! Generates random solvable linear equations, and explains their solutions step by step.
//!
//! The pieces fit together in this order:
//!
//! - [`synth::TermSynthesizer`] writes the text of a random left-hand side, using the bounded
//!   draws in [`random`]. The [`options::GenerationOptions::difficulty`] decides how many
//!   fragments it writes and which kinds.
//! - [`equation::LinearEquation`] picks the solution, parses the text with the
//!   [`ComputeEngine`](lineq_compute::ComputeEngine), and computes the right-hand side.
//! - [`solver::EquationSolver`] derives the list of [`step::Step`]s that isolate the unknown.
//! - [`problem::Problem`] turns each step into a multiple-choice question.
//!
//! ```
//! use lineq_compute::ComputeEngine;
//! use lineq_solver::{options::GenerationOptionsBuilder, problem::Problem};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let engine = ComputeEngine::default();
//! let options = GenerationOptionsBuilder::new().difficulty(3).build();
//! let mut rng = StdRng::seed_from_u64(1);
//!
//! let mut problem = Problem::new(&options, &engine, &mut rng).unwrap();
//! loop {
//!     assert_eq!(problem.choices().len(), 3);
//!     if !problem.next_move(&mut rng) {
//!         break;
//!     }
//! }
//! ```

pub mod equation;
pub mod error;
pub mod options;
pub mod problem;
pub mod random;
pub mod solver;
pub mod step;
pub mod step_collector;
pub mod synth;

pub use equation::{Equation, LinearEquation};
pub use problem::{Choice, EquationFamily, Problem};
pub use solver::EquationSolver;
pub use step::Step;
