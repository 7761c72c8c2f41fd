use thiserror::Error;

/// Top-level error type used across the entire application.
#[derive(Debug, Error)]
pub enum AquaError {
    #[error("config error: {0}")]
    Config(String),

    #[error("system error: {0}")]
    System(String),

    #[error("sensor error: {0}")]
    Sensor(String),

    #[error("window error: {0}")]
    Window(String),
}

pub type Result<T, E = AquaError> = std::result::Result<T, E>;
