mod epsilon_greedy;
mod random;
mod ucb;

pub use epsilon_greedy::ExploreAndGreed;
pub use random::RandomAgent;
pub use ucb::Ucb1;

use serde::Deserialize;

use crate::envs::Action;
use crate::errors::SpecError;

/// Additive constant keeping empirical means finite for arms with zero pulls.
pub(crate) const STABILIZER: f64 = 1e-5;

/// A bandit policy: picks arms and learns from observed rewards.
pub trait Agent {
    /// Selects an action from the policy's current per-arm statistics.
    fn act(&mut self) -> Action;

    /// Folds an observed reward into the per-arm statistics.
    fn update_state(&mut self, action: Action, reward: f64);

    /// Restores the statistics to their initial values so the same instance
    /// can be reused across trials.
    fn reset(&mut self);

    /// Stable identifier for this configuration; trials sharing it are
    /// averaged together downstream.
    fn description(&self) -> String;
}

fn default_exploration_prob() -> f64 {
    0.1
}

/// Declarative agent configuration, dispatched on the `class` key.
#[derive(Debug, Deserialize)]
#[serde(tag = "class")]
pub enum AgentSpec {
    RandomAgent {
        #[serde(default)]
        seed: Option<u64>,
    },
    ExploreAndGreed {
        #[serde(default = "default_exploration_prob")]
        exploration_prob: f64,
        #[serde(default)]
        seed: Option<u64>,
    },
    UCB1 {
        #[serde(default = "default_exploration_prob")]
        exploration_prob: f64,
    },
}

impl AgentSpec {
    pub fn build(&self, n_arms: usize, fallback_seed: u64) -> Result<Box<dyn Agent>, SpecError> {
        match *self {
            AgentSpec::RandomAgent { seed } => Ok(Box::new(RandomAgent::new(
                n_arms,
                seed.unwrap_or(fallback_seed),
            ))),
            AgentSpec::ExploreAndGreed {
                exploration_prob,
                seed,
            } => Ok(Box::new(ExploreAndGreed::new(
                n_arms,
                exploration_prob,
                seed.unwrap_or(fallback_seed),
            )?)),
            AgentSpec::UCB1 { exploration_prob } => {
                Ok(Box::new(Ucb1::new(n_arms, exploration_prob)?))
            }
        }
    }
}
