//! Unified error types for trellorss
//!
//! This module defines error types for each layer:
//! - `ConfigError`: Missing or malformed configuration (fatal, pre-flight)
//! - `TrelloError`: Trello API client errors
//! - `ClassifyError`: Action records that break the API contract
//! - `AppError`: Top-level error for a feed generation run

use thiserror::Error;

/// Configuration errors, raised before any network call
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    MissingVar(&'static str),

    #[error("A Trello token is required unless reading a single public board")]
    MissingToken,

    #[error("Invalid kind table entry: {0}")]
    InvalidKindTable(String),
}

/// Trello API client errors
#[derive(Debug, Error)]
pub enum TrelloError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Board not found: {0}")]
    BoardNotFound(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Unauthorized - invalid key or token")]
    Unauthorized,

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Errors raised while turning an action record into a feed item
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("Malformed timestamp: {date}")]
    MalformedTimestamp { date: String },

    #[error("{action_type} action is missing {field}")]
    MissingField {
        action_type: String,
        field: &'static str,
    },
}

/// Top-level error for one feed generation run
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0} is not a supported item kind")]
    UnsupportedKind(String),

    #[error("Trello error: {0}")]
    Trello(#[from] TrelloError),

    #[error("Invalid action: {0}")]
    Classify(#[from] ClassifyError),

    #[error("Failed to render feed: {0}")]
    Render(String),
}

impl From<rss::Error> for AppError {
    fn from(e: rss::Error) -> Self {
        AppError::Render(e.to_string())
    }
}
