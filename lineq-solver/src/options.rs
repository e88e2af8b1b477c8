/// The number of times [`LinearEquation::new`](crate::equation::LinearEquation::new) synthesizes
/// a new left-hand side before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// The highest difficulty the builder accepts. Past this point, equations only get longer.
pub const MAX_DIFFICULTY: u32 = 20;

/// The maximum number of operations the solver undoes while isolating the unknown.
///
/// A left-hand side produced by grouping is at most a term and a constant, so two iterations
/// are enough for every well-formed equation.
pub const MAX_ISOLATION_ITERATIONS: usize = 8;

/// Options that control how equations are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationOptions {
    /// The difficulty of generated equations. This is the number of fragments in the left-hand
    /// side, and the highest kind of fragment that can be drawn.
    ///
    /// The default difficulty is `1`, which produces equations like `5x = 25`.
    pub difficulty: u32,

    /// How many times a broken equation is regenerated before generation fails. See
    /// [`DEFAULT_MAX_ATTEMPTS`].
    pub max_attempts: u32,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            difficulty: 1,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl GenerationOptions {
    /// Wraps the given [`GenerationOptions`] into a builder for further customization.
    pub fn into_builder(self) -> GenerationOptionsBuilder {
        GenerationOptionsBuilder(self)
    }
}

/// Helper struct to build a [`GenerationOptions`] struct.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GenerationOptionsBuilder(GenerationOptions);

impl GenerationOptionsBuilder {
    /// Creates a new builder with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the difficulty, clamped to `1..=`[`MAX_DIFFICULTY`].
    pub fn difficulty(mut self, difficulty: u32) -> Self {
        self.0.difficulty = difficulty.clamp(1, MAX_DIFFICULTY);
        self
    }

    /// Sets the number of attempts. Values below `1` are raised to `1`.
    pub fn max_attempts(mut self, max_attempts: u32) -> Self {
        self.0.max_attempts = max_attempts.max(1);
        self
    }

    /// Builds the [`GenerationOptions`] struct.
    pub fn build(self) -> GenerationOptions {
        self.0
    }
}
