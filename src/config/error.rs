use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

#[derive(Debug, Error)]
/// Errors raised while loading or validating configuration.
pub enum ConfigError {
    /// An integer-valued variable did not parse.
    #[error("invalid integer in {var}: {value:?}")]
    IntParseError {
        /// Environment variable name.
        var: &'static str,
        /// Raw value that failed to parse.
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// A float-valued variable did not parse.
    #[error("invalid float in {var}: {value:?}")]
    FloatParseError {
        /// Environment variable name.
        var: &'static str,
        /// Raw value that failed to parse.
        value: String,
        #[source]
        source: ParseFloatError,
    },

    /// The embedding dimension must be at least 1.
    #[error("embedding dimension cannot be zero")]
    ZeroDimension,

    /// `top_k` must be at least 1.
    #[error("top_k cannot be zero")]
    ZeroTopK,

    /// The similarity floor must sit inside the unit interval.
    #[error("similarity floor must be within [0, 1], got {value}")]
    FloorOutOfRange {
        /// Configured value.
        value: f64,
    },
}
