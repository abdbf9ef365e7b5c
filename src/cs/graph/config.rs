use crate::cs::error::{Error, Result};

/// Attempt cap used when none is configured.
///
/// The expected number of attempts is roughly `1 / P(connected)`, which is
/// small for any reasonable `p`; the cap exists for `p` near zero.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// Parameters for random graph generation.
///
/// Example:
/// ```rust
/// use mst_lab::cs::graph::GeneratorConfig;
///
/// let config = GeneratorConfig::new(8, 42, 0.5).with_max_attempts(100);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Number of vertices, at least 2.
    pub vertices: usize,
    /// Master seed. The edge stream uses `seed`, the weight stream `2 * seed`.
    pub seed: u64,
    /// Probability in `[0, 1]` that any given pair of vertices is joined.
    pub probability: f64,
    /// Maximum number of rejection-sampling attempts, at least 1.
    pub max_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            vertices: 10,
            seed: 0,
            probability: 0.5,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl GeneratorConfig {
    /// Creates a config with the default attempt budget.
    pub fn new(vertices: usize, seed: u64, probability: f64) -> Self {
        Self {
            vertices,
            seed,
            probability,
            ..Self::default()
        }
    }

    /// Overrides the rejection-sampling attempt budget.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Checks the parameter contract. Out-of-range values are reported, never clamped.
    pub fn validate(&self) -> Result<()> {
        if self.vertices < 2 {
            return Err(Error::invalid_parameter(format!(
                "vertex count must be at least 2, got {}",
                self.vertices
            )));
        }
        if u32::try_from(self.vertices).is_err() {
            return Err(Error::invalid_parameter(format!(
                "vertex count {} does not fit an edge weight",
                self.vertices
            )));
        }
        if !(0.0..=1.0).contains(&self.probability) {
            return Err(Error::invalid_parameter(format!(
                "probability must be in [0, 1], got {}",
                self.probability
            )));
        }
        if self.max_attempts == 0 {
            return Err(Error::invalid_parameter(
                "attempt budget must be at least 1",
            ));
        }
        Ok(())
    }
}
