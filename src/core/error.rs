//! Input loading and validation errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("stage #{index} has an empty name")]
    EmptyStageName { index: usize },

    #[error("stage '{stage}' has a job with an empty name")]
    EmptyJobName { stage: String },

    #[error("duplicate stage: {0}")]
    DuplicateStage(String),

    #[error("duplicate job '{job}' in stage '{stage}'")]
    DuplicateJob { stage: String, job: String },
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
