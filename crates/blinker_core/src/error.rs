//! Blinker error types

use thiserror::Error;

/// Errors raised while validating blinker configuration
///
/// None of these are produced on the draw path. Layout problems degrade to
/// a stretched layout instead of failing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BlinkerError {
    /// Blink interval must be a positive number of milliseconds
    #[error("Invalid blink interval: {0} ms (must be positive)")]
    InvalidInterval(i64),

    /// Scale mode value outside of the known set
    #[error("Unknown scale mode: {0}")]
    UnknownScaleMode(String),

    /// Configuration document could not be read
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for blinker operations
pub type Result<T> = std::result::Result<T, BlinkerError>;
