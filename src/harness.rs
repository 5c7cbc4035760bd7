use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::aggregate::average_results;
use crate::config::ExperimentConfig;
use crate::errors::HarnessError;
use crate::report::Report;
use crate::rng::SeedSequence;
use crate::runner::run_experiment;

/// Runs every configured agent against every environment instance and averages
/// the per-trial recordings into one curve per agent description.
pub fn run(config: &ExperimentConfig) -> Result<Report, HarnessError> {
    let mut seeds = SeedSequence::new(config.seed);
    let mut reward_groups: BTreeMap<String, Vec<Vec<f64>>> = BTreeMap::new();
    let mut optimal_groups: BTreeMap<String, Vec<Vec<f64>>> = BTreeMap::new();

    for env_spec in &config.envs {
        for _ in 0..env_spec.repeat() {
            let mut env = env_spec.build(seeds.next_seed())?;
            for agent_spec in &config.agents {
                let mut agent = agent_spec.build(env.n_arms(), seeds.next_seed())?;
                let recording = run_experiment(env.as_mut(), agent.as_mut())?;
                let description = agent.description();
                debug!(
                    agent = %description,
                    steps = recording.rewards.len(),
                    "Completed trial"
                );
                reward_groups
                    .entry(description.clone())
                    .or_default()
                    .push(recording.rewards);
                optimal_groups
                    .entry(description)
                    .or_default()
                    .push(recording.optimal_actions);
            }
        }
    }

    let mut report = Report::default();
    for (description, group) in &reward_groups {
        report
            .rewards
            .insert(description.clone(), average_results(group)?);
    }
    for (description, group) in &optimal_groups {
        report
            .optimal_action_rate
            .insert(description.clone(), average_results(group)?);
    }
    info!(agents = report.rewards.len(), "Averaged trial recordings");

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::AgentSpec;
    use crate::envs::EnvSpec;

    fn two_arm_config(repeat: u32) -> ExperimentConfig {
        ExperimentConfig {
            seed: 42,
            envs: vec![EnvSpec::Bernoulli {
                probabilities: vec![1.0, 0.0],
                max_steps: 4,
                repeat,
                seed: None,
            }],
            agents: vec![AgentSpec::ExploreAndGreed {
                exploration_prob: 0.0,
                seed: None,
            }],
        }
    }

    #[test]
    fn greedy_curves_over_repeats() {
        let report = run(&two_arm_config(3)).unwrap();
        assert_eq!(report.rewards.len(), 1);

        let description = "ExploreAndGreed(exploration_prob=0)";
        // Arm 0 always pays out and the greedy tie-break starts there, so
        // every repeat produces the same deterministic curve.
        assert_eq!(
            report.rewards[description],
            vec![1.0, 2.0, 3.0, 4.0, 5.0]
        );
        assert_eq!(report.optimal_action_rate[description], vec![1.0; 5]);
    }

    #[test]
    fn identical_configurations_share_one_group() {
        let mut config = two_arm_config(2);
        config.agents.push(AgentSpec::ExploreAndGreed {
            exploration_prob: 0.0,
            seed: None,
        });
        let report = run(&config).unwrap();
        // Two identical agent specs collapse into a single averaged curve.
        assert_eq!(report.rewards.len(), 1);
    }

    #[test]
    fn distinct_configurations_get_distinct_curves() {
        let mut config = two_arm_config(1);
        config.agents.push(AgentSpec::RandomAgent { seed: None });
        config.agents.push(AgentSpec::UCB1 {
            exploration_prob: 0.1,
        });
        let report = run(&config).unwrap();
        assert_eq!(report.rewards.len(), 3);
        assert!(report.rewards.contains_key("RandomAgent"));
        assert!(report.rewards.contains_key("UCB1(exploration_prob=0.1)"));
    }

    #[test]
    fn same_seed_reproduces_the_report() {
        let mut config = two_arm_config(2);
        config.agents.push(AgentSpec::RandomAgent { seed: None });
        let first = run(&config).unwrap();
        let second = run(&config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn invalid_agent_spec_aborts_the_run() {
        let mut config = two_arm_config(1);
        config.agents = vec![AgentSpec::ExploreAndGreed {
            exploration_prob: 2.0,
            seed: None,
        }];
        assert!(run(&config).is_err());
    }
}
