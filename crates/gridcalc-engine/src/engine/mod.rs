//! Spreadsheet engine API.
//!
//! This module provides the core computation engine for the spreadsheet:
//!
//! - [`Cell`], [`CellType`], [`Grid`] - Data structures for cell storage
//! - [`CellRef`] - Cell reference parsing (A1 notation ↔ row/col indices)
//! - [`classify`] - Decide what kind of cell a piece of raw text describes
//! - [`evaluate`] - Shunting-yard evaluation of plain arithmetic
//! - [`Formula`] - Reference substitution and formula evaluation
//! - [`detect_cycle`] - Circular dependency detection
//! - [`format_number`] - Format values for display

mod cell;
mod cell_ref;
mod classify;
mod cycle;
mod error;
mod eval;
mod format;
mod formula;
mod grid;

pub use cell::{Cell, CellType};
pub use cell_ref::{CellRef, MAX_COLUMNS};
pub use classify::{ValueKind, classify, is_operator, normalize_formula};
pub use cycle::detect_cycle;
pub use error::{CellValueError, EvalError, GridError};
pub use eval::{Operator, Token, evaluate, evaluate_postfix, to_postfix, tokenize};
pub use format::{format_fixed, format_number};
pub use formula::{ERROR_MARKER, Formula};
pub use grid::Grid;
