//! Core error type.
//!
//! Sub-crates define their own error enums and convert `OpsError` into them
//! via `From` impls where a core failure can surface.

use thiserror::Error;

/// The top-level error type for `ops-core`.
#[derive(Debug, Error)]
pub enum OpsError {
    #[error("unknown train category {0:?}")]
    UnknownCategory(String),

    #[error("invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: i64, max: i64 },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `ops-core`.
pub type OpsResult<T> = Result<T, OpsError>;
