//! Error types for the telemetry session

use thiserror::Error;

/// Error type for session configuration and channel lookup
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TelemetryError {
    /// Simulated time step must be finite and positive
    #[error("Invalid time step: {0} (must be finite and > 0)")]
    InvalidTimeStep(f64),

    /// Chart window width must be finite and positive
    #[error("Invalid chart window: {0}s (must be finite and > 0)")]
    InvalidWindow(f64),

    /// Value axis range must be finite with min < max
    #[error("Invalid value range: [{min}, {max}]")]
    InvalidValueRange { min: f64, max: f64 },

    /// Bounded history needs room for at least one tick
    #[error("History limit must hold at least one sample")]
    InvalidCapacity,

    /// Channel name did not match any tracked channel
    #[error("Unknown channel: {0}")]
    UnknownChannel(String),
}

/// Result type for telemetry operations
pub type Result<T> = std::result::Result<T, TelemetryError>;
