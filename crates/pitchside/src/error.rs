#![forbid(unsafe_code)]

//! Unified error type for the facade.

use std::fmt;

use pitchside_widgets::ValidationError;

use crate::config::ConfigError;

/// Top-level error for Pitchside hosts.
#[derive(Debug)]
pub enum Error {
    /// Caller-supplied data failed validation.
    Validation(ValidationError),
    /// Configuration could not be loaded or is out of range.
    Config(ConfigError),
    /// Formation or partner JSON could not be decoded.
    #[cfg(feature = "config")]
    Data(serde_json::Error),
    /// I/O failure reading an input file.
    Io(std::io::Error),
}

impl Error {
    /// Stable, machine-readable category label.
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::Config(_) => "config",
            #[cfg(feature = "config")]
            Self::Data(_) => "data",
            Self::Io(_) => "io",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "invalid data: {err}"),
            Self::Config(err) => write!(f, "config: {err}"),
            #[cfg(feature = "config")]
            Self::Data(err) => write!(f, "data decode error: {err}"),
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Config(err) => Some(err),
            #[cfg(feature = "config")]
            Self::Data(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

#[cfg(feature = "config")]
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Data(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Standard result type for Pitchside APIs.
pub type Result<T> = std::result::Result<T, Error>;
