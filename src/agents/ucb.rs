use super::{Agent, STABILIZER};
use crate::envs::Action;
use crate::errors::SpecError;
use crate::utils::argmax;

/// UCB1 policy: empirical mean plus a confidence bonus that shrinks as an arm
/// accumulates pulls.
///
/// Counts start at 1 so the confidence term is defined from the first draw.
/// `exploration_prob` does not enter the selection rule; it is accepted and
/// validated for config parity with [`ExploreAndGreed`](super::ExploreAndGreed).
pub struct Ucb1 {
    exploration_prob: f64,
    arm_count: Vec<f64>,
    arm_reward: Vec<f64>,
}

impl Ucb1 {
    pub fn new(n_arms: usize, exploration_prob: f64) -> Result<Self, SpecError> {
        if !(0.0..=1.0).contains(&exploration_prob) {
            return Err(SpecError::ExplorationProb(exploration_prob));
        }
        if n_arms == 0 {
            return Err(SpecError::NoArms);
        }

        Ok(Self {
            exploration_prob,
            arm_count: vec![1.0; n_arms],
            arm_reward: vec![0.0; n_arms],
        })
    }
}

impl Agent for Ucb1 {
    fn act(&mut self) -> Action {
        let total_pulls: f64 = self.arm_count.iter().sum();
        let scores = self
            .arm_reward
            .iter()
            .zip(&self.arm_count)
            .map(|(&reward, &count)| {
                reward / (count + STABILIZER)
                    + (2.0 * total_pulls.ln() / (count + STABILIZER)).sqrt()
            });
        argmax(scores).expect("validated to have at least one arm")
    }

    fn update_state(&mut self, action: Action, reward: f64) {
        self.arm_count[action] += 1.0;
        self.arm_reward[action] += reward;
    }

    fn reset(&mut self) {
        self.arm_count.fill(1.0);
        self.arm_reward.fill(0.0);
    }

    fn description(&self) -> String {
        format!("UCB1(exploration_prob={})", self.exploration_prob)
    }
}
