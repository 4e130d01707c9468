//! Error types for schema loading, response generation and submission

use std::path::PathBuf;
use thiserror::Error;

/// Errors that prevent the survey definition from being loaded.
///
/// Any of these aborts the run before a single record is generated.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Schema file does not exist
    #[error("Survey schema not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Schema file exists but could not be read
    #[error("Failed to read survey schema {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Schema file is not a valid survey definition
    #[error("Invalid survey schema {}: {reason}", path.display())]
    Invalid { path: PathBuf, reason: String },
}

/// Errors raised while generating a single response record.
///
/// These only happen for schemas that declare an empty answer domain; the
/// record is dropped rather than filled with an invented value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// Single-choice question without choices
    #[error("Question '{question}' has no choices to pick from")]
    EmptyChoices { question: String },

    /// Matrix question without rows
    #[error("Matrix question '{question}' has no rows")]
    EmptyMatrixRows { question: String },

    /// Matrix question without columns
    #[error("Matrix question '{question}' has no columns")]
    EmptyMatrixColumns { question: String },
}

/// Errors that can occur while posting a record to the intake endpoint
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// Could not connect to the endpoint
    #[error("Connection error: {0}")]
    Connection(String),

    /// Request timed out
    #[error("Request timed out")]
    Timeout,

    /// Endpoint answered with a non-success status
    #[error("Endpoint returned {status}: {message}")]
    Status { status: u16, message: String },

    /// Record could not be encoded as JSON
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Any other transport failure
    #[error("Transport error: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for SubmissionError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SubmissionError::Timeout
        } else if err.is_connect() {
            SubmissionError::Connection(err.to_string())
        } else if let Some(status) = err.status() {
            SubmissionError::Status {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            SubmissionError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for SubmissionError {
    fn from(err: serde_json::Error) -> Self {
        SubmissionError::Serialization(err.to_string())
    }
}

/// Result type alias for generation
pub type GenerationResult<T> = Result<T, GenerationError>;
