//! Cell data structures for the spreadsheet grid.
//!
//! This module provides the core data types for representing cells:
//! - [`CellType`] - The kind of content in a cell
//! - [`Cell`] - A closed set of variants sharing one read contract
//!
//! Cells never change after construction. Editing an address replaces the
//! cell stored there.

use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

use super::classify::{ValueKind, classify};
use super::format::format_number;
use super::formula::Formula;
use super::{CellValueError, EvalError, Grid};

/// The type of content stored in a cell.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CellType {
    Integer,
    Decimal,
    Text,
    Empty,
    Formula,
}

/// A cell in the spreadsheet grid.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Integer(i64),
    Decimal {
        value: f64,
        /// Display form, computed once at construction.
        display: String,
    },
    Text {
        /// Quoted and escaped, as written in a file.
        raw: String,
        /// Unescaped content.
        text: String,
    },
    Empty,
    Formula(Formula),
}

impl Cell {
    pub fn new_empty() -> Cell {
        Cell::Empty
    }

    pub fn new_integer(n: i64) -> Cell {
        Cell::Integer(n)
    }

    pub fn new_decimal(value: f64) -> Cell {
        Cell::Decimal {
            value,
            display: format_number(value),
        }
    }

    /// Create a text cell from its quoted form (`"Hello \"World\""`).
    /// The caller is responsible for the quoting being well formed.
    pub fn new_text(raw: &str) -> Cell {
        Cell::Text {
            raw: raw.to_string(),
            text: unescape_quoted(raw),
        }
    }

    /// Create a formula cell. The source is stored normalized; references are
    /// not checked until the formula is evaluated.
    pub fn new_formula(source: &str) -> Cell {
        Cell::Formula(Formula::new(source))
    }

    /// Classify raw text and build the matching cell.
    pub fn from_input(input: &str) -> Result<Cell, CellValueError> {
        match classify(input) {
            ValueKind::Empty => Ok(Cell::new_empty()),
            ValueKind::Text => Ok(Cell::new_text(input)),
            ValueKind::Formula => Ok(Cell::new_formula(input)),
            ValueKind::Integer => input
                .parse::<i64>()
                .map(Cell::new_integer)
                .map_err(|_| CellValueError::NumberOutOfRange(input.to_string())),
            ValueKind::Decimal => match input.parse::<f64>() {
                Ok(value) if value.is_finite() => Ok(Cell::new_decimal(value)),
                _ => Err(CellValueError::NumberOutOfRange(input.to_string())),
            },
            ValueKind::Invalid => Err(CellValueError::InvalidValue(input.to_string())),
        }
    }

    pub fn cell_type(&self) -> CellType {
        match self {
            Cell::Integer(_) => CellType::Integer,
            Cell::Decimal { .. } => CellType::Decimal,
            Cell::Text { .. } => CellType::Text,
            Cell::Empty => CellType::Empty,
            Cell::Formula(_) => CellType::Formula,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Numeric value of the cell. Text that does not start with a number and
    /// empty cells are 0; formulas are evaluated against `grid`.
    pub fn numeric_value(&self, grid: &Grid) -> Result<f64, EvalError> {
        match self {
            Cell::Integer(n) => Ok(*n as f64),
            Cell::Decimal { value, .. } => Ok(*value),
            Cell::Text { text, .. } => Ok(leading_number(text).unwrap_or(0.0)),
            Cell::Empty => Ok(0.0),
            Cell::Formula(formula) => formula.numeric_value(grid),
        }
    }

    /// The form written to files: formulas keep their source and text keeps
    /// its quotes. Decimals always keep a decimal point so they reload as
    /// decimals.
    pub fn raw_text(&self) -> Cow<'_, str> {
        match self {
            Cell::Integer(n) => Cow::Owned(n.to_string()),
            Cell::Decimal { display, .. } if !display.contains('.') => {
                Cow::Owned(format!("{}.0", display))
            }
            Cell::Decimal { display, .. } => Cow::Borrowed(display),
            Cell::Text { raw, .. } => Cow::Borrowed(raw),
            Cell::Empty => Cow::Borrowed(""),
            Cell::Formula(formula) => Cow::Borrowed(formula.source()),
        }
    }

    /// The form shown in a printed table.
    pub fn display_text(&self, grid: &Grid) -> String {
        match self {
            Cell::Integer(n) => n.to_string(),
            Cell::Decimal { display, .. } => display.clone(),
            Cell::Text { text, .. } => text.clone(),
            Cell::Empty => String::new(),
            Cell::Formula(formula) => formula.display_text(grid),
        }
    }

    /// Width of [`Cell::display_text`] in characters.
    pub fn display_width(&self, grid: &Grid) -> usize {
        match self {
            Cell::Decimal { display, .. } => display.chars().count(),
            Cell::Text { text, .. } => text.chars().count(),
            Cell::Empty => 0,
            _ => self.display_text(grid).chars().count(),
        }
    }
}

/// Remove the surrounding quotes and resolve `\"` and `\\`.
fn unescape_quoted(raw: &str) -> String {
    let inner = raw
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(raw);

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(ch);
        }
    }
    out
}

fn leading_number_re() -> &'static Regex {
    static NUMBER_RE: OnceLock<Regex> = OnceLock::new();
    NUMBER_RE.get_or_init(|| {
        Regex::new(r"^\s*[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?")
            .expect("leading number regex must compile")
    })
}

/// Parse the longest numeric prefix of `text` ("12abc" -> 12).
fn leading_number(text: &str) -> Option<f64> {
    let m = leading_number_re().find(text)?;
    m.as_str().trim_start().parse::<f64>().ok()
}
