// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for the remora REST client
//!
//! I/O failures from body sources are surfaced unmodified; nothing is
//! retried or translated on the way up.

use thiserror::Error;

/// Result type alias for remora operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the remora client
#[derive(Error, Debug)]
pub enum Error {
    /// Caller passed something malformed (odd header pair list,
    /// invalid method token, bad header name/value)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// I/O error while reading a body source or writing to a sink
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP transport failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Client configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}

impl Error {
    /// Create an invalid-argument error
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    /// Check if this is an I/O error
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io(_))
    }

    /// Check if this error came from the transport layer
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Http(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = Error::invalid_argument("odd number of header values");
        assert_eq!(
            err.to_string(),
            "Invalid argument: odd number of header values"
        );
    }

    #[test]
    fn test_io_passthrough() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(err.is_io());
        assert!(!err.is_transport());
    }
}
