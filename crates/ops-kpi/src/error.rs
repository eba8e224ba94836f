use ops_core::OpsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KpiError {
    #[error("unknown time range {0:?} (expected today, week or month)")]
    UnknownTimeRange(String),

    #[error(transparent)]
    Config(#[from] OpsError),
}

pub type KpiResult<T> = Result<T, KpiError>;
