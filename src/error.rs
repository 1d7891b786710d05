//! Error types for the fetch pipeline.
//!
//! None of these escape `ProxySource::fetch`; they exist so each stage can
//! report what went wrong before the adapter falls back to an empty list.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response has no top-level \"data\" key")]
    MissingData,

    #[error("\"data\" is not a list")]
    UnexpectedShape,
}

impl SourceError {
    /// True for failures raised before a body was available.
    pub fn is_transport(&self) -> bool {
        matches!(self, SourceError::Http(_) | SourceError::Status(_))
    }
}

/// Why a single raw listing was dropped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("listing has no usable ip")]
    MissingIp,

    #[error("listing has no port")]
    MissingPort,

    #[error("listing has invalid port {0}")]
    InvalidPort(String),
}

pub type Result<T> = std::result::Result<T, SourceError>;
