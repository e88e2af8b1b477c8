//! Bounded random draws used to synthesize equations.
//!
//! These functions hold no state of their own; the caller supplies the random number generator,
//! so a seeded [`StdRng`](rand::rngs::StdRng) makes every draw reproducible.

use rand::Rng;

/// The binary operators that can be drawn with [`op`], in order.
pub const OPERATORS: [char; 4] = ['+', '-', '*', '/'];

/// Draws an integer in `min..=max`.
pub fn int(min: i32, max: i32, rng: &mut impl Rng) -> i32 {
    rng.gen_range(min..=max)
}

/// Draws one of the operators in `OPERATORS[min..=max]`, with equal weight.
///
/// For example, `op(0, 1, rng)` draws `+` or `-`, and `op(2, 3, rng)` draws `*` or `/`.
pub fn op(min: usize, max: usize, rng: &mut impl Rng) -> char {
    OPERATORS[rng.gen_range(min..=max)]
}

/// Returns true with probability `p`.
pub fn yes_no(p: f64, rng: &mut impl Rng) -> bool {
    rng.gen_bool(p.clamp(0.0, 1.0))
}
