//! Exact symbolic arithmetic for linear expressions in a single unknown.
//!
//! This crate turns text parsed by [`lineq_parser`] into [`MathExpr`] trees and provides the
//! operations needed to generate and solve linear equations: canonicalization, substitution,
//! exact evaluation with [`rug::Rational`], reduction to the linear normal form `c·x + d`, and
//! rendering as text or LaTeX. Most callers only need the [`ComputeEngine`]:
//!
//! ```
//! use lineq_compute::ComputeEngine;
//! use rug::Rational;
//!
//! let engine = ComputeEngine::default();
//! let expr = engine.parse("3x + 2(x - 1)").unwrap();
//! let value = engine.evaluate(&engine.substitute(&expr, &Rational::from(4))).unwrap();
//! assert_eq!(value, 18);
//!
//! let simplified = engine.simplify(&expr).unwrap();
//! assert_eq!(engine.to_text(&simplified), "5x - 2");
//! ```

mod engine;
pub mod error;
pub mod eval;
pub mod expr;
pub mod linear;
pub mod primitive;

pub use engine::ComputeEngine;
pub use expr::{MathExpr, Operator};
pub use linear::LinearForm;
