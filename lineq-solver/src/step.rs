use lineq_compute::MathExpr;
use std::fmt;

/// One move in the solution of an equation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// What the move does, such as `Add 2x, 3x` or `Subtract 4 from both sides`.
    pub description: String,

    /// The equation right before this move.
    pub current: MathExpr,

    /// The position of this move in the solution, starting at `1`.
    pub step_number: usize,

    /// The value produced by this move.
    pub result: MathExpr,
}

impl Step {
    /// Creates a step that has not been numbered yet. The [`StepCollector`] that receives it
    /// assigns its number.
    ///
    /// [`StepCollector`]: crate::step_collector::StepCollector
    pub(crate) fn new(description: String, current: MathExpr, result: MathExpr) -> Self {
        Self { description, current, step_number: 0, result }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}. {}    ({})", self.step_number, self.description, self.current)
    }
}
