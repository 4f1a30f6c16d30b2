//! Error types for the configuration surface.
//!
//! The core itself defines no errors (precondition failures are silent
//! no-ops); only loading and saving the hotkey binding can fail.

/// Errors surfaced while reading or writing the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config I/O failed: {0}")]
    Io(std::io::Error),

    #[error("config serialization failed: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
