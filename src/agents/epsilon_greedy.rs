use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::{Agent, STABILIZER};
use crate::envs::Action;
use crate::errors::SpecError;
use crate::utils::argmax;

/// Epsilon-greedy policy over empirical mean rewards.
pub struct ExploreAndGreed {
    exploration_prob: f64,
    arm_count: Vec<f64>,
    arm_reward: Vec<f64>,
    rng: SmallRng,
}

impl ExploreAndGreed {
    pub fn new(n_arms: usize, exploration_prob: f64, seed: u64) -> Result<Self, SpecError> {
        if !(0.0..=1.0).contains(&exploration_prob) {
            return Err(SpecError::ExplorationProb(exploration_prob));
        }
        if n_arms == 0 {
            return Err(SpecError::NoArms);
        }

        Ok(Self {
            exploration_prob,
            arm_count: vec![0.0; n_arms],
            arm_reward: vec![0.0; n_arms],
            rng: SmallRng::seed_from_u64(seed),
        })
    }

    fn empirical_means(&self) -> impl Iterator<Item = f64> + '_ {
        self.arm_reward
            .iter()
            .zip(&self.arm_count)
            .map(|(&reward, &count)| reward / (count + STABILIZER))
    }
}

impl Agent for ExploreAndGreed {
    fn act(&mut self) -> Action {
        if self.rng.random::<f64>() > self.exploration_prob {
            argmax(self.empirical_means()).expect("validated to have at least one arm")
        } else {
            self.rng.random_range(0..self.arm_count.len())
        }
    }

    fn update_state(&mut self, action: Action, reward: f64) {
        self.arm_count[action] += 1.0;
        self.arm_reward[action] += reward;
    }

    fn reset(&mut self) {
        self.arm_count.fill(0.0);
        self.arm_reward.fill(0.0);
    }

    fn description(&self) -> String {
        format!(
            "ExploreAndGreed(exploration_prob={})",
            self.exploration_prob
        )
    }
}
