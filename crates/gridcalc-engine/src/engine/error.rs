//! Error types for the engine.

use thiserror::Error;

use super::CellRef;

/// Failures raised while evaluating a formula or an arithmetic expression.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("Circular reference: {}", format_path(.path))]
    CircularReference { path: Vec<CellRef> },

    #[error("Division by 0 is forbidden")]
    DivisionByZero,

    #[error("Malformed expression: {0}")]
    MalformedExpression(String),
}

/// Failures raised when raw text cannot become a cell.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CellValueError {
    #[error("{0} is unknown data type")]
    InvalidValue(String),

    #[error("Number too big: {0}")]
    NumberOutOfRange(String),
}

/// Failures raised by grid mutations. Row and column are 1-based.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Error: row {row}, col {col}, {text} is unknown data type")]
    InvalidCellValue { row: usize, col: usize, text: String },

    #[error("Error: row {row}, col {col}, number too big: {text}")]
    NumberOutOfRange { row: usize, col: usize, text: String },

    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),
}

impl GridError {
    pub(crate) fn from_cell_value(err: CellValueError, row: usize, col: usize) -> GridError {
        match err {
            CellValueError::InvalidValue(text) => GridError::InvalidCellValue { row, col, text },
            CellValueError::NumberOutOfRange(text) => GridError::NumberOutOfRange { row, col, text },
        }
    }
}

fn format_path(path: &[CellRef]) -> String {
    path.iter()
        .map(|cell_ref| cell_ref.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}
