//! Error type for calls to the recipe backend.

use thiserror::Error;

/// Why a backend call failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a usable response: the server was
    /// unreachable or its body could not be read as the expected JSON.
    #[error("connection error: {0}")]
    Connection(String),

    /// The server answered with a non-success status. `message` carries the
    /// body's `erro` field when there was one.
    #[error("server responded with status {status}")]
    Server { status: u16, message: Option<String> },
}

impl ApiError {
    /// The server-provided error message, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Server { message, .. } => message.as_deref(),
            ApiError::Connection(_) => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            ApiError::Connection(_) => None,
        }
    }

    pub fn is_connection(&self) -> bool {
        matches!(self, ApiError::Connection(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Connection(e.to_string())
    }
}
