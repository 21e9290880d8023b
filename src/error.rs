//! Error types for the Gridcalc shell

use gridcalc_core::GridcalcError;
use thiserror::Error;

/// Errors reported to the user by the command shell
#[derive(Error, Debug)]
pub enum AppError {
    #[error(
        "Error: no document is currently opened\nHint: open an existing file, or create a new document first."
    )]
    NoDocument,

    #[error("ERROR: Cannot close unexisting document")]
    NothingToClose,

    #[error("Invalid command!")]
    InvalidCommand,

    #[error("Invalid cell!")]
    InvalidCell,

    #[error("Error loading {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: GridcalcError,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] GridcalcError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
