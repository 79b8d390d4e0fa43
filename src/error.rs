//! Error type shared by the engine, the input parser and the scenario loader

use std::num::ParseFloatError;

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, SimError>;

#[derive(Debug, Error)]
pub enum SimError {
    /// A value was read fine but is outside what the simulation accepts
    #[error("invalid input for `{field}`: {reason}")]
    InvalidInput { field: String, reason: String },

    /// A numeric field could not be read at all
    #[error("cannot parse `{field}` from {value:?}")]
    Parse {
        field: String,
        value: String,
        #[source]
        source: Option<ParseFloatError>,
    },

    #[error("malformed scenario: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SimError {
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        SimError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
