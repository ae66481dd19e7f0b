//! Error types for the football-data CLI

use thiserror::Error;

use crate::cli::types::ReportKind;


pub type Result<T> = std::result::Result<T, FootyError>;

#[derive(Error, Debug)]
pub enum FootyError {
    #[error("Unable to connect to the server. Please check your internet connection and try again. ({0})")]
    ConnectionFailed(#[source] reqwest::Error),

    #[error("HTTP error occurred: status {0}. Please check your request and try again.")]
    HttpStatus(u16),

    #[error("Unexpected {kind} payload: {reason}")]
    MalformedPayload { kind: ReportKind, reason: String },

    #[error("API key not provided and {env_var} environment variable not set")]
    MissingApiKey { env_var: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FootyError {
    pub(crate) fn malformed(kind: ReportKind, reason: impl std::fmt::Display) -> Self {
        FootyError::MalformedPayload {
            kind,
            reason: reason.to_string(),
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

impl From<toml::de::Error> for FootyError {
    fn from(err: toml::de::Error) -> Self {
        FootyError::Config {
            message: err.to_string(),
        }
    }
}
