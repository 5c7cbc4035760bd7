use rand::rngs::SmallRng;
use rand::SeedableRng;
use rand_distr::{Bernoulli, Distribution};

use super::{Action, Environment, Observation, Step, PLACEHOLDER_OBSERVATION};
use crate::errors::{EnvError, SpecError};
use crate::utils::argmax;

/// Multi-armed bandit where each arm pays 1 with its success probability, else 0.
pub struct BernoulliBandit {
    arms: Vec<Bernoulli>,
    optimal_action: Action,
    max_steps: u64,
    curr_step: u64,
    rng: SmallRng,
}

impl BernoulliBandit {
    pub fn new(probabilities: Vec<f64>, max_steps: u64, seed: u64) -> Result<Self, SpecError> {
        let arms = probabilities
            .iter()
            .map(|&p| Bernoulli::new(p).map_err(|_| SpecError::ArmProbability(p)))
            .collect::<Result<Vec<_>, _>>()?;
        let optimal_action = argmax(probabilities.iter().copied()).ok_or(SpecError::NoArms)?;

        Ok(Self {
            arms,
            optimal_action,
            max_steps,
            curr_step: 0,
            rng: SmallRng::seed_from_u64(seed),
        })
    }
}

impl Environment for BernoulliBandit {
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
        let reward = self.arms[action].sample(&mut self.rng) as u8 as f64;
        // `done` flips only once the counter exceeds the budget, so a budget
        // of n yields n + 1 steps.
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
