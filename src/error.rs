// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error taxonomy shared by the parser, fetchers and pipelines.

use serde::Serialize;

/// Scout error type.
#[derive(Debug, thiserror::Error)]
pub enum ScoutError {
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Unexpected response shape: {0}")]
    SchemaMismatch(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Serializable discriminant of [`ScoutError`], used in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    MalformedInput,
    UpstreamUnavailable,
    Transport,
    SchemaMismatch,
    NotFound,
    Internal,
}

impl ScoutError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScoutError::MalformedInput(_) => ErrorKind::MalformedInput,
            ScoutError::UpstreamUnavailable(_) => ErrorKind::UpstreamUnavailable,
            ScoutError::Transport(_) => ErrorKind::Transport,
            ScoutError::SchemaMismatch(_) => ErrorKind::SchemaMismatch,
            ScoutError::NotFound(_) => ErrorKind::NotFound,
            ScoutError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Whether this error ends the whole run rather than a single pipeline.
    ///
    /// Only input parsing and session resolution produce these.
    pub fn is_fatal_to_run(&self) -> bool {
        matches!(
            self,
            ScoutError::MalformedInput(_) | ScoutError::UpstreamUnavailable(_)
        )
    }

    /// Shorthand for a schema error naming the field that failed validation.
    pub fn schema(context: impl std::fmt::Display) -> Self {
        ScoutError::SchemaMismatch(context.to_string())
    }
}

impl From<reqwest::Error> for ScoutError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ScoutError::Transport(format!("request timed out: {}", err))
        } else if err.is_decode() {
            ScoutError::SchemaMismatch(format!("body decode failed: {}", err))
        } else {
            ScoutError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ScoutError {
    fn from(err: serde_json::Error) -> Self {
        ScoutError::SchemaMismatch(format!("JSON parse error: {}", err))
    }
}

/// Result type alias for scout operations
pub type Result<T> = std::result::Result<T, ScoutError>;
