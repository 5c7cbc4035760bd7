use rand::rngs::SmallRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

use super::{Action, Environment, Observation, Step, PLACEHOLDER_OBSERVATION};
use crate::errors::{EnvError, SpecError};
use crate::utils::argmax;

/// Multi-armed bandit with normally distributed arm rewards.
///
/// The configured per-arm `variances` are interpreted as standard deviations,
/// matching the original config format. Rewards can be negative.
pub struct GaussianBandit {
    arms: Vec<Normal<f64>>,
    optimal_action: Action,
    max_steps: u64,
    curr_step: u64,
    rng: SmallRng,
}

impl GaussianBandit {
    pub fn new(
        means: Vec<f64>,
        variances: Vec<f64>,
        max_steps: u64,
        seed: u64,
    ) -> Result<Self, SpecError> {
        if means.len() != variances.len() {
            return Err(SpecError::ArmLengthMismatch {
                means: means.len(),
                variances: variances.len(),
            });
        }

        let arms = means
            .iter()
            .zip(&variances)
            .map(|(&mu, &sigma)| Normal::new(mu, sigma).map_err(|_| SpecError::ArmVariance(sigma)))
            .collect::<Result<Vec<_>, _>>()?;
        let optimal_action = argmax(means.iter().copied()).ok_or(SpecError::NoArms)?;

        Ok(Self {
            arms,
            optimal_action,
            max_steps,
            curr_step: 0,
            rng: SmallRng::seed_from_u64(seed),
        })
    }
}

impl Environment for GaussianBandit {
    fn n_arms(&self) -> usize {
        self.arms.len()
    }

    fn reset(&mut self) -> Observation {
        self.curr_step = 0;
        PLACEHOLDER_OBSERVATION
    }

    fn step(&mut self, action: Action) -> Result<Step, EnvError> {
        if action >= self.arms.len() {
            return Err(EnvError::InvalidAction {
                action,
                n_arms: self.arms.len(),
            });
        }

        self.curr_step += 1;
        let reward = self.arms[action].sample(&mut self.rng);
        let done = self.curr_step > self.max_steps;

        Ok(Step {
            observation: PLACEHOLDER_OBSERVATION,
            reward,
            done,
        })
    }

    fn optimal_action(&self) -> Action {
        self.optimal_action
    }
}
