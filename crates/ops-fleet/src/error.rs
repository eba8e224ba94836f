use ops_core::TrainId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FleetError {
    #[error("duplicate train id {0}")]
    DuplicateTrain(TrainId),

    #[error("fleet parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type FleetResult<T> = Result<T, FleetError>;
