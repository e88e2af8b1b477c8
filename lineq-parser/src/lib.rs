//! Tokenizer and parser for the small arithmetic language used to write linear equations, such
//! as `2(3x + 1) - (7/3)x = 12`.
//!
//! The grammar covers integers, decimals, names, `+ - * /`, unary minus, parentheses, implicit
//! multiplication (`3x`, `2(x + 1)`, `x(4 - 6)`), and a single `=` joining the two sides of an
//! equation.

pub mod parser;
pub mod tokenizer;
