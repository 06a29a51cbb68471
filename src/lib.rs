//! Facetr - faceted exploration of model, image and gallery records
//!
//! This library turns an unfiltered record collection plus user input
//! (search text, facet selections, tag chips, sort choice, "load more")
//! into a filtered, sorted and paged view, together with the facet menus
//! and active filter chips a list view renders.
//!
//! The entry point is [`browse::Explorer`]; the lower layers (`search`,
//! `filters`, `sort`, `sampler`) are plain functions over records and can be
//! used on their own.

use thiserror::Error;

pub mod browse;
pub mod cli;
pub mod config;
pub mod filters;
pub mod output;
pub mod records;
pub mod sampler;
pub mod search;
pub mod sort;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum FacetrError {
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Record data could not be decoded
    #[error("Invalid record data: {0}")]
    Json(#[from] serde_json::Error),
    /// A filter, sort or view identifier could not be parsed
    #[error("Parse error: {0}")]
    Parse(#[from] filters::ParseError),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
