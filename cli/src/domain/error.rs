//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs` or `std::process`.
//! Errors convert to `anyhow::Error` via `?` and are recovered with
//! `downcast_ref` where the classification matters.

use std::path::PathBuf;

use thiserror::Error;

/// Failure classes of a udclient task run.
#[derive(Debug, Error)]
pub enum TaskError {
    /// A required input is missing or malformed. No step has run.
    #[error("{0}")]
    Configuration(String),

    /// udclient, its packaged artifact, or the java runtime cannot be located.
    #[error("{message}")]
    ToolNotFound {
        message: String,
        path: Option<PathBuf>,
    },

    /// A supplied path or argument is unusable.
    #[error("{0}")]
    InvalidInput(String),

    /// The udclient process reported failure.
    #[error("{step} failed: {message}")]
    ExternalProcess { step: String, message: String },
}

impl TaskError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn tool_not_found(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::ToolNotFound {
            message: message.into(),
            path,
        }
    }

    /// Short class name used in pipeline issue messages.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "configuration error",
            Self::ToolNotFound { .. } => "tool not found",
            Self::InvalidInput(_) => "invalid input",
            Self::ExternalProcess { .. } => "udclient failure",
        }
    }
}
