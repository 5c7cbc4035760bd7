use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpecError {
    #[error("Arm probability {0} is not in [0, 1]")]
    ArmProbability(f64),
    #[error("Arm variance {0} is not a valid spread")]
    ArmVariance(f64),
    #[error("means and variances have different sizes - {means} and {variances}")]
    ArmLengthMismatch { means: usize, variances: usize },
    #[error("Environment must have at least one arm")]
    NoArms,
    #[error("exploration_prob {0} is not in [0, 1]")]
    ExplorationProb(f64),
}

#[derive(Debug, Error)]
pub enum EnvError {
    #[error("Action {action} is outside the action space of {n_arms} arms")]
    InvalidAction { action: usize, n_arms: usize },
}

#[derive(Debug, Error)]
pub enum AggregateError {
    #[error("No recordings to average")]
    Empty,
    #[error("Recording of length {found} does not match expected length {expected}")]
    LengthMismatch { expected: usize, found: usize },
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error while writing report: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize report to JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("Cannot read config: {0}")]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Spec(#[from] SpecError),
    #[error(transparent)]
    Env(#[from] EnvError),
    #[error(transparent)]
    Aggregate(#[from] AggregateError),
    #[error(transparent)]
    Report(#[from] ReportError),
}
