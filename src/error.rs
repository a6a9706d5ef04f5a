//! Error handling and custom error types
//!
//! Provides unified error handling across the client using thiserror.

use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing cloudinary:// scheme in URI")]
    MissingScheme,

    #[error("No API secret provided in URI")]
    MissingSecret,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to walk {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Structured error returned by the remote API. Displays the remote
    /// message verbatim.
    #[error("{message}")]
    Api { status: StatusCode, message: String },

    #[error("Request error: {0}")]
    Status(StatusCode),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl Error {
    /// True for errors raised while parsing the connection URI.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Error::MissingScheme | Error::MissingSecret | Error::Config(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_displays_remote_message() {
        let err = Error::Api {
            status: StatusCode::BAD_REQUEST,
            message: "Missing required parameter - public_id".to_string(),
        };
        assert_eq!(err.to_string(), "Missing required parameter - public_id");
        assert!(!err.is_config());
    }

    #[test]
    fn test_status_error_displays_status_line() {
        let err = Error::Status(StatusCode::BAD_GATEWAY);
        assert_eq!(err.to_string(), "Request error: 502 Bad Gateway");
    }

    #[test]
    fn test_config_errors_are_flagged() {
        assert!(Error::MissingScheme.is_config());
        assert!(Error::MissingSecret.is_config());
        assert!(Error::Config("bad".to_string()).is_config());
    }
}
