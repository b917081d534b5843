// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for reqpad
//!
//! Every failure is scoped to a single submission. [`Error::failure_kind`]
//! folds the detailed variants into the small set of classes shown to the
//! user in the response panel.

use std::fmt;

use thiserror::Error;

/// Result type alias for reqpad operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for reqpad
#[derive(Error, Debug)]
pub enum Error {
    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Method string is not a valid HTTP token
    #[error("Invalid HTTP method: {0:?}")]
    InvalidMethod(String),

    /// Header value cannot be sent
    #[error("Invalid value for header {name}")]
    InvalidHeader { name: String },

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Transport failure outside of reqwest
    #[error("Network error: {0}")]
    Network(String),

    /// Response body was empty or not JSON
    #[error("Response is not JSON (status {}): {reason}", status_label(.status))]
    NonJsonResponse { status: Option<u16>, reason: String },

    /// Highlighting failed
    #[error("Highlighting failed: {0}")]
    Highlighting(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

fn status_label(status: &Option<u16>) -> String {
    status.map_or_else(|| "unknown".to_string(), |s| s.to_string())
}

/// User-facing failure classes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    NetworkFailure,
    NonJsonResponse,
    HighlightingFailure,
    Other,
}

impl FailureKind {
    /// Short label used in the response panel
    pub fn label(&self) -> &'static str {
        match self {
            FailureKind::InvalidUrl => "Invalid URL",
            FailureKind::NetworkFailure => "Network failure",
            FailureKind::NonJsonResponse => "Response is not JSON",
            FailureKind::HighlightingFailure => "Highlighting failed",
            FailureKind::Other => "Request failed",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Error {
    /// Create a new network error
    pub fn network<S: Into<String>>(msg: S) -> Self {
        Error::Network(msg.into())
    }

    /// Create a non-JSON response error
    pub fn non_json(status: Option<u16>, reason: impl Into<String>) -> Self {
        Error::NonJsonResponse {
            status,
            reason: reason.into(),
        }
    }

    /// Create a highlighting error
    pub fn highlighting<S: Into<String>>(msg: S) -> Self {
        Error::Highlighting(msg.into())
    }

    /// Check if this is a network error
    pub fn is_network(&self) -> bool {
        matches!(self, Error::Network(_) | Error::Http(_))
    }

    /// Check if this is a URL parse error
    pub fn is_invalid_url(&self) -> bool {
        matches!(self, Error::InvalidUrl(_))
    }

    /// Map onto the class shown to the user
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            Error::InvalidUrl(_) => FailureKind::InvalidUrl,
            Error::Http(_) | Error::Network(_) => FailureKind::NetworkFailure,
            Error::NonJsonResponse { .. } => FailureKind::NonJsonResponse,
            Error::Highlighting(_) => FailureKind::HighlightingFailure,
            _ => FailureKind::Other,
        }
    }

    /// Get HTTP status code if available
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::NonJsonResponse { status, .. } => *status,
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
