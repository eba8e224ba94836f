use ops_core::OpsError;
use ops_scenario::ScenarioError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session configuration error: {0}")]
    Config(#[from] OpsError),

    #[error(transparent)]
    Scenario(#[from] ScenarioError),
}

pub type SessionResult<T> = Result<T, SessionError>;
