use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Deterministic stream of sub-seeds derived from the experiment seed.
///
/// Every environment and stochastic agent owns its own `SmallRng`; the harness
/// draws one sub-seed per constructed instance so that the whole run is
/// reproducible without any process-wide random state.
pub struct SeedSequence {
    rng: SmallRng,
}

impl SeedSequence {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn next_seed(&mut self) -> u64 {
        self.rng.random()
    }
}
