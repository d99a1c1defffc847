// src/error.rs
//! Error taxonomy for the scrape → chart pipeline.
//!
//! Every stage returns the first failure it meets; nothing is retried and no
//! default value is substituted for a missing or malformed field.

use std::path::PathBuf;

use thiserror::Error;

use crate::record::Field;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ScrapeError {
    /// Source could not be opened, connected to, or read
    #[error("Could not retrieve {locator}: {reason}")]
    Retrieval { locator: String, reason: String },

    /// Content could not be turned into a document tree
    #[error("Could not parse {locator}: {reason}")]
    Parse { locator: String, reason: String },

    /// An expected container element is missing
    #[error("Unexpected page structure: {0}")]
    Structure(String),

    /// A row is missing one of its seven cells (row index is 0-based)
    #[error("Row {row}: could not locate the {field} cell")]
    FieldExtraction { row: usize, field: Field },

    /// A cleaned value did not parse as a finite decimal number
    #[error("Row {row}: {field} value {raw:?} is not a number")]
    Normalization { row: usize, field: Field, raw: String },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not serialize artifact {}: {reason}", path.display())]
    Serialize { path: PathBuf, reason: String },

    #[error("Could not deserialize artifact {}: {reason}", path.display())]
    Deserialize { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, ScrapeError>;

impl ScrapeError {
    pub(crate) fn retrieval(locator: &str, reason: impl ToString) -> Self {
        ScrapeError::Retrieval { locator: s!(locator), reason: reason.to_string() }
    }

    pub(crate) fn parse(locator: &str, reason: impl ToString) -> Self {
        ScrapeError::Parse { locator: s!(locator), reason: reason.to_string() }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScrapeError::Io { path: path.into(), source }
    }
}
