//! Formula cells: reference extraction, substitution and evaluation.
//!
//! A formula is stored as its normalized source (`=A1+B2*5`). Nothing about
//! it is cached: every evaluation re-reads the referenced cells from the
//! grid, so edits elsewhere are always seen.
//!
//! Evaluation steps:
//! - collect the live references (addresses that currently hold a cell)
//! - reject the formula if those references lead back into a cycle
//! - substitute each reference with its numeric value (`12` -> `12.000000`,
//!   absent cells -> `0`), recursing into referenced formulas
//! - hand the resulting arithmetic string to [`evaluate`]

use log::debug;
use regex::Regex;
use std::sync::OnceLock;

use super::classify::normalize_formula;
use super::cycle::detect_cycle;
use super::eval::evaluate;
use super::format::{format_fixed, format_number};
use super::{CellRef, EvalError, Grid};

/// Shown in place of a formula result that cannot be computed.
pub const ERROR_MARKER: &str = "#ERROR";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Formula {
    source: String,
}

impl Formula {
    /// Create a formula from source text such as `"= a1 + 2"`.
    /// Whitespace is removed and letters are uppercased.
    pub fn new(source: &str) -> Formula {
        Formula {
            source: normalize_formula(source),
        }
    }

    /// The normalized source, including the leading `=`.
    pub fn source(&self) -> &str {
        &self.source
    }

    fn body(&self) -> &str {
        self.source.strip_prefix('=').unwrap_or(&self.source)
    }

    /// Every address written in the formula, in order of appearance.
    pub fn references(&self) -> Vec<CellRef> {
        reference_re()
            .find_iter(self.body())
            .filter_map(|m| CellRef::parse(m.as_str()))
            .collect()
    }

    /// References that currently resolve to a cell in `grid`.
    pub fn live_references(&self, grid: &Grid) -> Vec<CellRef> {
        self.references()
            .into_iter()
            .filter(|cell_ref| grid.get_cell(cell_ref).is_some())
            .collect()
    }

    /// Build the pure arithmetic string for this formula by substituting
    /// every reference with the referenced cell's numeric value.
    pub fn calculation_expression(&self, grid: &Grid) -> Result<String, EvalError> {
        let body = self.body();
        let mut expr = String::with_capacity(body.len() * 2);
        let mut last = 0usize;

        for m in reference_re().find_iter(body) {
            expr.push_str(&body[last..m.start()]);
            let cell = CellRef::parse(m.as_str()).and_then(|cell_ref| grid.get_cell(&cell_ref));
            match cell {
                Some(cell) => expr.push_str(&format_fixed(cell.numeric_value(grid)?)),
                None => expr.push('0'),
            }
            last = m.end();
        }
        expr.push_str(&body[last..]);

        Ok(expr)
    }

    /// Evaluate the formula against `grid`.
    pub fn numeric_value(&self, grid: &Grid) -> Result<f64, EvalError> {
        if let Some(path) = detect_cycle(self, grid) {
            return Err(EvalError::CircularReference { path });
        }
        let expr = self.calculation_expression(grid)?;
        evaluate(&expr)
    }

    /// The evaluated result formatted for display, or [`ERROR_MARKER`].
    pub fn display_text(&self, grid: &Grid) -> String {
        match self.numeric_value(grid) {
            Ok(value) => format_number(value),
            Err(err) => {
                debug!("{} evaluates to an error: {}", self.source, err);
                ERROR_MARKER.to_string()
            }
        }
    }
}

fn reference_re() -> &'static Regex {
    static REFERENCE_RE: OnceLock<Regex> = OnceLock::new();
    REFERENCE_RE.get_or_init(|| {
        Regex::new(r"[A-Z][0-9]+").expect("formula reference regex must compile")
    })
}
