use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::Agent;
use crate::envs::Action;

/// Baseline policy: picks arms uniformly at random and learns nothing.
pub struct RandomAgent {
    n_arms: usize,
    rng: SmallRng,
}

impl RandomAgent {
    pub fn new(n_arms: usize, seed: u64) -> Self {
        Self {
            n_arms,
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn act(&mut self) -> Action {
        self.rng.random_range(0..self.n_arms)
    }

    fn update_state(&mut self, _action: Action, _reward: f64) {}

    fn reset(&mut self) {}

    fn description(&self) -> String {
        "RandomAgent".to_string()
    }
}
