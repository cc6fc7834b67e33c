//! Error types and handling for `TravelRec`

use thiserror::Error;

/// Main error type for the `TravelRec` application
#[derive(Error, Debug)]
pub enum TravelRecError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// External catalog source errors
    #[error("Data source error: {message}")]
    DataSource { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Unknown timezone identifier
    #[error("Unknown time zone: {zone}")]
    TimeZone { zone: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl TravelRecError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new data source error
    pub fn data_source<S: Into<String>>(message: S) -> Self {
        Self::DataSource {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new unknown-timezone error
    pub fn time_zone<S: Into<String>>(zone: S) -> Self {
        Self::TimeZone { zone: zone.into() }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TravelRecError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            TravelRecError::DataSource { .. } => {
                "Unable to load travel data. Using the built-in catalog.".to_string()
            }
            TravelRecError::Validation { message } => message.clone(),
            TravelRecError::TimeZone { .. } => crate::time::TIME_NOT_AVAILABLE.to_string(),
            TravelRecError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}

impl From<serde_json::Error> for TravelRecError {
    fn from(err: serde_json::Error) -> Self {
        TravelRecError::data_source(format!("invalid catalog document: {err}"))
    }
}

impl From<reqwest::Error> for TravelRecError {
    fn from(err: reqwest::Error) -> Self {
        TravelRecError::data_source(err.to_string())
    }
}
