//! Error types for curve sampling.
//!
//! This module defines structured error types for configuration validation
//! and runtime errors in the one-step sampler.

use lmm_core::CurveError;
use thiserror::Error;

/// Configuration error for the curve sampler.
///
/// These errors occur during construction when invalid parameters are provided.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Path count outside valid range [1, 10_000_000].
    #[error("Invalid path count {0}: must be in range [1, 10_000_000]")]
    InvalidPathCount(usize),

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

/// Errors raised while sampling evolved curves.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum SimulationError {
    /// Invalid sampler configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Curve precondition violated.
    #[error("Curve error: {0}")]
    Curve(#[from] CurveError),
}
