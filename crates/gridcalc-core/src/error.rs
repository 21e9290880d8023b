//! Error types for Gridcalc core.

use thiserror::Error;

use gridcalc_engine::engine::GridError;

/// Errors that can occur while working with a document
#[derive(Error, Debug)]
pub enum GridcalcError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("No file chosen. Use saveas")]
    NoFilePath,

    #[error("The document is empty")]
    EmptyDocument,
}

pub type Result<T> = std::result::Result<T, GridcalcError>;
