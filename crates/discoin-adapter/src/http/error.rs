/*
[INPUT]:  Error sources (HTTP status codes, transport, serialization, config)
[OUTPUT]: Structured error types for every client operation
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

use crate::types::Status;

/// Main error type for the Discoin adapter
#[derive(Error, Debug)]
pub enum DiscoinError {
    /// 401: token missing or wrong
    #[error("Unauthorized: the token is either incorrect or missing")]
    Unauthorized,

    /// 404: unknown receipt or transaction id
    #[error("Transaction not found: the id is mistyped or the transaction does not exist")]
    NotFound,

    /// 403: the API declined the request
    #[error("Rejected ({}): {}", .0.status, .0.reason)]
    Rejected(Status),

    /// 400: the request was malformed
    #[error("Discoin error ({}): {}", .0.status, .0.reason)]
    DomainError(Status),

    /// Status code outside the operation's table
    #[error("Unknown Discoin API error ({code}: {message})")]
    Unknown { code: u16, message: String },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DiscoinError {
    /// Check if error indicates authentication failure
    pub fn is_auth_error(&self) -> bool {
        matches!(self, DiscoinError::Unauthorized)
    }

    /// HTTP status code behind a status-code error
    pub fn status_code(&self) -> Option<u16> {
        match self {
            DiscoinError::Unauthorized => Some(401),
            DiscoinError::NotFound => Some(404),
            DiscoinError::Rejected(_) => Some(403),
            DiscoinError::DomainError(_) => Some(400),
            DiscoinError::Unknown { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Status payload carried by rejections and domain errors
    pub fn status(&self) -> Option<&Status> {
        match self {
            DiscoinError::Rejected(status) | DiscoinError::DomainError(status) => Some(status),
            _ => None,
        }
    }

    /// Create an unknown error from a status code and message
    pub fn unknown(status: StatusCode, message: impl Into<String>) -> Self {
        DiscoinError::Unknown {
            code: status.as_u16(),
            message: message.into(),
        }
    }
}

/// Result type alias for Discoin operations
pub type Result<T> = std::result::Result<T, DiscoinError>;
