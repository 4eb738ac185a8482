//! Unified application error type.
//! The core never fails; every variant here originates in configuration
//! loading or in one of the remote collaborators (OAuth, Sheets, Slack).

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration file not found: {0}")]
    ConfigMissing(String),

    // ---------------------------
    // Collaborator errors (annotated with the failing operation)
    // ---------------------------
    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Google Sheets error: {0}")]
    Sheets(String),

    #[error("Slack error: {0}")]
    Slack(String),
}

impl AppError {
    /// Build a Sheets error tagged with the operation that failed.
    pub fn sheets(op: &str, detail: impl std::fmt::Display) -> Self {
        AppError::Sheets(format!("{op}: {detail}"))
    }

    /// Build a Slack error tagged with the operation that failed.
    pub fn slack(op: &str, detail: impl std::fmt::Display) -> Self {
        AppError::Slack(format!("{op}: {detail}"))
    }

    pub fn auth(op: &str, detail: impl std::fmt::Display) -> Self {
        AppError::Auth(format!("{op}: {detail}"))
    }
}

pub type AppResult<T> = Result<T, AppError>;
