use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The two deterministic sequences that drive graph generation.
///
/// `edge_stream` is seeded with `seed` and decides whether a vertex pair is
/// joined; `weight_stream` is seeded with `2 * seed` (wrapping) and supplies
/// edge weights. Both are ChaCha8 generators, so a given seed reproduces the
/// same draws on every platform.
#[derive(Debug, Clone)]
pub struct RandomStreams {
    edge_stream: ChaCha8Rng,
    weight_stream: ChaCha8Rng,
}

impl RandomStreams {
    /// Seeds both streams from one master seed.
    pub fn new(seed: u64) -> Self {
        Self {
            edge_stream: ChaCha8Rng::seed_from_u64(seed),
            weight_stream: ChaCha8Rng::seed_from_u64(seed.wrapping_mul(2)),
        }
    }

    /// Next edge-existence value, uniform in `[0, 1)`.
    pub fn edge_draw(&mut self) -> f64 {
        self.edge_stream.gen::<f64>()
    }

    /// Next edge weight, uniform in `[1, max]`.
    ///
    /// # Panics
    /// - if `max == 0`.
    pub fn weight_draw(&mut self, max: u32) -> u32 {
        self.weight_stream.gen_range(1..=max)
    }
}
