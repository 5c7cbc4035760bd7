mod bernoulli;
mod gaussian;

pub use bernoulli::BernoulliBandit;
pub use gaussian::GaussianBandit;

use serde::Deserialize;

use crate::errors::{EnvError, SpecError};

pub type Action = usize;

/// Bandits carry no real state; observations are a constant placeholder.
pub type Observation = usize;

pub const PLACEHOLDER_OBSERVATION: Observation = 0;

#[derive(Debug)]
pub struct Step {
    pub observation: Observation,
    pub reward: f64,
    pub done: bool,
}

/// A multi-armed bandit environment with a fixed, finite action space.
pub trait Environment {
    fn n_arms(&self) -> usize;

    /// Resets the step counter without touching the arm distributions.
    fn reset(&mut self) -> Observation;

    /// Draws one reward sample from the chosen arm and advances the step
    /// counter. Out-of-range actions are an error, never clamped.
    fn step(&mut self, action: Action) -> Result<Step, EnvError>;

    /// The arm with the highest expected reward, fixed at construction.
    fn optimal_action(&self) -> Action;
}

fn default_max_steps() -> u64 {
    10_000
}

fn default_repeat() -> u32 {
    1
}

/// Declarative environment configuration, dispatched on the `class` key.
///
/// `repeat` controls how many fresh instances of the environment are built for
/// repeated trials. An explicit `seed` overrides the one derived by the
/// harness.
#[derive(Debug, Deserialize)]
#[serde(tag = "class")]
pub enum EnvSpec {
    Bernoulli {
        probabilities: Vec<f64>,
        #[serde(default = "default_max_steps")]
        max_steps: u64,
        #[serde(default = "default_repeat")]
        repeat: u32,
        #[serde(default)]
        seed: Option<u64>,
    },
    Gaussian {
        means: Vec<f64>,
        variances: Vec<f64>,
        #[serde(default = "default_max_steps")]
        max_steps: u64,
        #[serde(default = "default_repeat")]
        repeat: u32,
        #[serde(default)]
        seed: Option<u64>,
    },
}

impl EnvSpec {
    pub fn repeat(&self) -> u32 {
        match self {
            EnvSpec::Bernoulli { repeat, .. } | EnvSpec::Gaussian { repeat, .. } => *repeat,
        }
    }

    pub fn build(&self, fallback_seed: u64) -> Result<Box<dyn Environment>, SpecError> {
        match self {
            EnvSpec::Bernoulli {
                probabilities,
                max_steps,
                seed,
                ..
            } => Ok(Box::new(BernoulliBandit::new(
                probabilities.clone(),
                *max_steps,
                seed.unwrap_or(fallback_seed),
            )?)),
            EnvSpec::Gaussian {
                means,
                variances,
                max_steps,
                seed,
                ..
            } => Ok(Box::new(GaussianBandit::new(
                means.clone(),
                variances.clone(),
                *max_steps,
                seed.unwrap_or(fallback_seed),
            )?)),
        }
    }
}
