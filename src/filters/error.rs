//! Error types for parsing filter and sort identifiers
//!
//! Filtering itself never fails. These errors only arise when textual
//! identifiers (from configuration files or command-line arguments) are
//! turned into typed selections.

use thiserror::Error;

/// Errors produced while parsing a filter, sort or view identifier
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Unknown sort option identifier
    #[error("Unknown sort option: {0}")]
    UnknownSortOption(String),

    /// Unknown size bucket identifier
    #[error("Invalid size bucket: {0}")]
    InvalidSizeBucket(String),

    /// Unknown visibility identifier
    #[error("Invalid visibility: {0}")]
    InvalidVisibility(String),

    /// Malformed content-type identifier
    #[error("Invalid content type: {0}")]
    InvalidContentType(String),

    /// Unknown list view identifier
    #[error("Unknown view: {0}")]
    UnknownView(String),

    /// Any other malformed value
    #[error("Invalid value: {0}")]
    InvalidValue(String),
}
