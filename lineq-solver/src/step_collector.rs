use crate::step::Step;

/// Receives the steps found by the solver, in solve order.
///
/// Building a step renders the equation snapshot, so steps are passed as closures that are only
/// called by collectors that keep them. The unit type `()` discards every step; use it when only
/// the solution matters, such as when checking that a generated equation can be solved at all.
pub trait StepCollector {
    /// Records the next step.
    fn record(&mut self, step: impl FnOnce() -> Step);
}

impl StepCollector for () {
    #[inline]
    fn record(&mut self, _: impl FnOnce() -> Step) {}
}

/// Numbers each step by its position, starting at `1`.
impl StepCollector for Vec<Step> {
    fn record(&mut self, step: impl FnOnce() -> Step) {
        let mut step = step();
        step.step_number = self.len() + 1;
        self.push(step);
    }
}
