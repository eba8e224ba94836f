use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("invalid scenario {0:?}")]
    InvalidScenario(String),

    #[error("invalid impact profile: {0}")]
    InvalidProfile(String),
}

pub type ScenarioResult<T> = Result<T, ScenarioError>;
