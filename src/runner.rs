use crate::agents::Agent;
use crate::envs::Environment;
use crate::errors::EnvError;

/// Per-step traces from a single (environment, agent) trial.
#[derive(Debug)]
pub struct TrialRecording {
    /// Cumulative reward after each step.
    pub rewards: Vec<f64>,
    /// 1.0 when the step's action matched the environment's optimal arm.
    pub optimal_actions: Vec<f64>,
}

/// Drives one agent through one environment until the environment signals
/// termination. Both output sequences get one entry per step taken.
pub fn run_experiment(
    env: &mut dyn Environment,
    agent: &mut dyn Agent,
) -> Result<TrialRecording, EnvError> {
    env.reset();
    agent.reset();

    let mut rewards = Vec::new();
    let mut optimal_actions = Vec::new();
    let mut total_reward = 0.0;

    loop {
        let optimal_action = env.optimal_action();
        let action = agent.act();
        let step = env.step(action)?;
        agent.update_state(action, step.reward);

        total_reward += step.reward;
        rewards.push(total_reward);
        optimal_actions.push(f64::from(u8::from(action == optimal_action)));

        if step.done {
            break;
        }
    }

    Ok(TrialRecording {
        rewards,
        optimal_actions,
    })
}
