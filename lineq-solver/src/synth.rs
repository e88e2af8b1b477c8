//! Synthesis of random left-hand sides for linear equations.
//!
//! The synthesizer writes text, not trees: the result is parsed by the
//! [`ComputeEngine`](lineq_compute::ComputeEngine) like any equation typed by a user. Higher
//! difficulties use more fragments and admit more kinds of fragments.

use crate::random::{int, op, yes_no};
use rand::Rng;

/// The kinds of fragments that can appear before the final term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment {
    /// `a*x`.
    SimpleTerm,

    /// An integer constant.
    Constant,

    /// `b(ax ± c)` or `ax(b ± c)`, possibly wrapped in a product or quotient.
    ComplexParenthesis,

    /// `(a/b)x`.
    DivisionTerm,

    /// `(a/b)`.
    ConstantDivision,
}

impl Fragment {
    /// Picks the kind of fragment for the given roll of `1..=difficulty`.
    pub fn from_roll(roll: i32) -> Self {
        match roll {
            2 => Self::Constant,
            3 => Self::ComplexParenthesis,
            4 => Self::DivisionTerm,
            5 => Self::ConstantDivision,
            _ => Self::SimpleTerm,
        }
    }
}

/// Composes random fragments into the text of a linear expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermSynthesizer {
    unknown: String,
}

impl Default for TermSynthesizer {
    fn default() -> Self {
        Self::new("x")
    }
}

impl TermSynthesizer {
    /// Creates a synthesizer that writes the given unknown.
    pub fn new(unknown: impl Into<String>) -> Self {
        Self { unknown: unknown.into() }
    }

    /// Writes `a` times the unknown, omitting a coefficient of `1` or less.
    fn scaled_unknown(&self, a: i32) -> String {
        if a <= 1 {
            self.unknown.clone()
        } else {
            format!("{}{}", a, self.unknown)
        }
    }

    /// `a*x`, with `a` in `1..=10`.
    pub fn simple_term(&self, rng: &mut impl Rng) -> String {
        let a = int(1, 10, rng);
        if a <= 1 {
            self.unknown.clone()
        } else {
            format!("{}*{}", a, self.unknown)
        }
    }

    /// An integer in `1..=10`.
    pub fn constant(&self, rng: &mut impl Rng) -> String {
        int(1, 10, rng).to_string()
    }

    /// `b(ax ± c)` or `ax(b ± c)`, sometimes followed by `+ d`.
    pub fn parenthesis(&self, rng: &mut impl Rng) -> String {
        let a = int(0, 5, rng);
        let b = int(1, 10, rng);
        let c = int(1, 10, rng);
        let op = op(0, 1, rng);

        let mut text = if yes_no(0.5, rng) {
            let prefix = if b == 1 { String::new() } else { b.to_string() };
            format!("{}({} {} {})", prefix, self.scaled_unknown(a), op, c)
        } else {
            format!("{}({} {} {})", self.scaled_unknown(a), b, op, c)
        };

        if yes_no(0.3, rng) {
            text.push_str(&format!(" + {}", int(1, 5, rng)));
        }
        text
    }

    /// A [`parenthesis`](Self::parenthesis) fragment. Above difficulty 4, it is sometimes
    /// multiplied or divided by an integer in `1..=5`.
    pub fn complex_parenthesis(&self, difficulty: u32, rng: &mut impl Rng) -> String {
        let text = self.parenthesis(rng);
        if yes_no(0.35, rng) && difficulty > 4 {
            format!("({}{}{})", text, op(2, 3, rng), int(1, 5, rng))
        } else {
            text
        }
    }

    /// `(a/b)x`, with `a` and `b` in `1..=10`.
    pub fn division_term(&self, rng: &mut impl Rng) -> String {
        format!("({}/{}){}", int(1, 10, rng), int(1, 10, rng), self.unknown)
    }

    /// `(a/b)`, with `a` and `b` in `1..=10`.
    pub fn constant_division(&self, rng: &mut impl Rng) -> String {
        format!("({}/{})", int(1, 10, rng), int(1, 10, rng))
    }

    /// Draws one filler fragment for the given difficulty.
    pub fn fragment(&self, difficulty: u32, rng: &mut impl Rng) -> String {
        let highest = i32::try_from(difficulty).unwrap_or(i32::MAX);
        let roll = int(1, highest.max(1), rng);
        match Fragment::from_roll(roll) {
            Fragment::SimpleTerm => self.simple_term(rng),
            Fragment::Constant => self.constant(rng),
            Fragment::ComplexParenthesis => self.complex_parenthesis(difficulty, rng),
            Fragment::DivisionTerm => self.division_term(rng),
            Fragment::ConstantDivision => self.constant_division(rng),
        }
    }

    /// Writes a random linear expression.
    ///
    /// The expression is `difficulty - 1` filler fragments joined by `+` or `-`, followed by a
    /// [`simple_term`](Self::simple_term), so the unknown always appears. Above difficulty 3, the
    /// whole expression is divided by an integer in `2..=10` 40% of the time.
    pub fn synthesize(&self, difficulty: u32, rng: &mut impl Rng) -> String {
        let mut text = String::new();
        for _ in 1..difficulty {
            text.push_str(&self.fragment(difficulty, rng));
            text.push_str(&format!(" {} ", op(0, 1, rng)));
        }
        text.push_str(&self.simple_term(rng));

        if yes_no(0.4, rng) && difficulty > 3 {
            text = format!("({})/{}", text, int(2, 10, rng));
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lineq_compute::ComputeEngine;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn difficulty_one_is_a_single_term() {
        let synth = TermSynthesizer::default();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let text = synth.synthesize(1, &mut rng);
            assert!(text == "x" || text.ends_with("*x"), "{}", text);
            assert!(!text.contains(' '));
        }
    }

    #[test]
    fn fragment_roll_table() {
        assert_eq!(Fragment::from_roll(1), Fragment::SimpleTerm);
        assert_eq!(Fragment::from_roll(2), Fragment::Constant);
        assert_eq!(Fragment::from_roll(3), Fragment::ComplexParenthesis);
        assert_eq!(Fragment::from_roll(4), Fragment::DivisionTerm);
        assert_eq!(Fragment::from_roll(5), Fragment::ConstantDivision);
        assert_eq!(Fragment::from_roll(9), Fragment::SimpleTerm);
    }

    #[test]
    fn fragment_at_huge_difficulty() {
        let synth = TermSynthesizer::default();
        let engine = ComputeEngine::default();
        let mut rng = StdRng::seed_from_u64(17);
        for difficulty in [u32::MAX, 3_000_000_000, i32::MAX as u32 + 1] {
            let text = synth.fragment(difficulty, &mut rng);
            assert!(engine.parse(&text).is_ok(), "{}", text);
        }
    }

    #[test]
    fn parenthesis_shapes() {
        let synth = TermSynthesizer::default();
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..100 {
            let text = synth.parenthesis(&mut rng);
            assert!(text.contains('x') && text.contains('(') && text.contains(')'), "{}", text);
            assert!(!text.starts_with("1("), "{}", text);
            assert!(!text.contains("1x") || text.contains("10x"), "{}", text);
        }
    }

    #[test]
    fn always_parses_and_contains_unknown() {
        let synth = TermSynthesizer::default();
        let engine = ComputeEngine::default();
        let mut rng = StdRng::seed_from_u64(42);
        for difficulty in 1..=8 {
            for _ in 0..50 {
                let text = synth.synthesize(difficulty, &mut rng);
                let expr = engine.parse(&text).unwrap();
                assert!(expr.contains_symbol("x"), "{}", text);
            }
        }
    }
}
