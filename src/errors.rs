//! Error types for rawpulse
//!
//! Only two failures are fatal to an analysis: an empty transcript and a
//! request line that does not split into method, target and version.
//! Body decoding problems never show up here; see [`crate::params::BodyParams`].

use thiserror::Error;

/// Main error type for rawpulse
#[derive(Error, Debug)]
pub enum RawpulseError {
    #[error("Empty input: paste a raw HTTP request transcript")]
    EmptyInput,

    #[error("Malformed request line '{line}': expected METHOD TARGET VERSION, found {tokens} token(s)")]
    MalformedRequestLine {
        line: String,
        tokens: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Unexpected failure while analyzing request: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, RawpulseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_request_line_message() {
        let err = RawpulseError::MalformedRequestLine {
            line: "GET".to_string(),
            tokens: 1,
        };
        let msg = err.to_string();
        assert!(msg.contains("'GET'"));
        assert!(msg.contains("1 token"));
    }

    #[test]
    fn test_io_error_message() {
        let err = RawpulseError::from(std::io::Error::other("boom"));
        assert!(err.to_string().starts_with("IO error"));
    }
}
