use config::{Config, ConfigError, File};
use serde::Deserialize;
use std::path::Path;

use crate::agents::AgentSpec;
use crate::envs::EnvSpec;

fn default_seed() -> u64 {
    42
}

/// Full declarative description of an experiment: which environments to build,
/// which agents to run against them, and the master seed every per-instance
/// random stream derives from.
#[derive(Debug, Deserialize)]
pub struct ExperimentConfig {
    #[serde(default = "default_seed")]
    pub seed: u64,
    pub envs: Vec<EnvSpec>,
    pub agents: Vec<AgentSpec>,
}

impl ExperimentConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let builder = Config::builder().add_source(File::from(path)).build()?;

        builder.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::AgentSpec;
    use crate::envs::EnvSpec;
    use config::FileFormat;

    fn parse(raw: &str) -> Result<ExperimentConfig, ConfigError> {
        Config::builder()
            .add_source(File::from_str(raw, FileFormat::Json))
            .build()?
            .try_deserialize()
    }

    #[test]
    fn full_config_parses() {
        let config = parse(
            r#"{
                "seed": 7,
                "envs": [
                    {
                        "class": "Bernoulli",
                        "probabilities": [0.3, 0.5, 0.8],
                        "max_steps": 100,
                        "repeat": 10
                    },
                    {
                        "class": "Gaussian",
                        "means": [0.0, 1.0],
                        "variances": [1.0, 2.0]
                    }
                ],
                "agents": [
                    { "class": "RandomAgent" },
                    { "class": "ExploreAndGreed", "exploration_prob": 0.05 },
                    { "class": "UCB1" }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(config.seed, 7);
        assert_eq!(config.envs.len(), 2);
        assert_eq!(config.agents.len(), 3);
        assert!(matches!(
            config.envs[0],
            EnvSpec::Bernoulli {
                max_steps: 100,
                repeat: 10,
                ..
            }
        ));
    }

    #[test]
    fn defaults_are_applied() {
        let config = parse(
            r#"{
                "envs": [{ "class": "Bernoulli", "probabilities": [0.5] }],
                "agents": [{ "class": "ExploreAndGreed" }, { "class": "UCB1" }]
            }"#,
        )
        .unwrap();

        assert_eq!(config.seed, 42);
        assert!(matches!(
            config.envs[0],
            EnvSpec::Bernoulli {
                max_steps: 10_000,
                repeat: 1,
                seed: None,
                ..
            }
        ));
        assert!(matches!(
            config.agents[0],
            AgentSpec::ExploreAndGreed {
                exploration_prob, ..
            } if exploration_prob == 0.1
        ));
        assert!(matches!(
            config.agents[1],
            AgentSpec::UCB1 { exploration_prob } if exploration_prob == 0.1
        ));
    }

    #[test]
    fn unknown_env_class_is_rejected() {
        let result = parse(
            r#"{
                "envs": [{ "class": "Poisson", "probabilities": [0.5] }],
                "agents": [{ "class": "RandomAgent" }]
            }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn unknown_agent_class_is_rejected() {
        let result = parse(
            r#"{
                "envs": [{ "class": "Bernoulli", "probabilities": [0.5] }],
                "agents": [{ "class": "ThompsonSampling" }]
            }"#,
        );
        assert!(result.is_err());
    }
}
