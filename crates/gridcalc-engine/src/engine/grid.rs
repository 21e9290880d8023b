//! Row-major cell storage.
//!
//! Rows are kept as `Vec<Vec<Cell>>` and may have different lengths until
//! [`Grid::align`] pads them. The grid only grows: editing an address
//! beyond the current extent appends empty rows and empty cells.

use log::{debug, warn};

use super::cell_ref::MAX_COLUMNS;
use super::{Cell, CellRef, EvalError, GridError};

#[derive(Clone, Debug, Default)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
    /// Length of the longest row.
    longest_row: usize,
    /// Per-column display width, computed by `align`.
    widths: Vec<usize>,
}

impl Grid {
    pub fn new() -> Grid {
        Grid::default()
    }

    /// Build a grid by adding each line as a row.
    pub fn from_lines<I, S>(lines: I) -> Result<Grid, GridError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut grid = Grid::new();
        for line in lines {
            grid.add_row(line.as_ref())?;
        }
        Ok(grid)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns, i.e. the length of the longest row.
    pub fn column_count(&self) -> usize {
        self.longest_row
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Parse a comma separated line and append it as a new row.
    ///
    /// The row is rejected as a whole if any value is invalid; the grid is
    /// left untouched in that case.
    pub fn add_row(&mut self, line: &str) -> Result<(), GridError> {
        let row_number = self.rows.len() + 1;
        let mut row = Vec::new();

        if !line.is_empty() {
            for (idx, token) in line.split(',').enumerate() {
                let cell = Cell::from_input(token.trim()).map_err(|err| {
                    warn!("rejecting row {}: {}", row_number, err);
                    GridError::from_cell_value(err, row_number, idx + 1)
                })?;
                row.push(cell);
            }
        }

        if row.len() > MAX_COLUMNS {
            return Err(GridError::InvalidAddress(format!(
                "row {} has {} columns, at most {} are supported",
                row_number,
                row.len(),
                MAX_COLUMNS
            )));
        }

        self.longest_row = self.longest_row.max(row.len());
        self.rows.push(row);
        Ok(())
    }

    /// Replace the cell at `cell_ref` with a cell built from `text`,
    /// growing the grid as needed.
    pub fn set_value(&mut self, cell_ref: &CellRef, text: &str) -> Result<(), GridError> {
        if cell_ref.col >= MAX_COLUMNS {
            return Err(GridError::InvalidAddress(format!(
                "column {} is out of range",
                cell_ref.col + 1
            )));
        }

        let cell = Cell::from_input(text).map_err(|err| {
            GridError::from_cell_value(err, cell_ref.row_number(), cell_ref.col + 1)
        })?;

        while self.rows.len() <= cell_ref.row {
            self.rows.push(Vec::new());
        }
        let row = &mut self.rows[cell_ref.row];
        while row.len() <= cell_ref.col {
            row.push(Cell::new_empty());
        }
        row[cell_ref.col] = cell;
        self.longest_row = self.longest_row.max(cell_ref.col + 1);

        debug!("set {} to {:?}", cell_ref, text);
        Ok(())
    }

    /// Look up a cell. `None` means the address is outside the current
    /// extent, which is different from an in-range empty cell.
    pub fn get_cell(&self, cell_ref: &CellRef) -> Option<&Cell> {
        self.rows.get(cell_ref.row)?.get(cell_ref.col)
    }

    /// Numeric value at an address; absent cells are 0.
    pub fn numeric_value(&self, cell_ref: &CellRef) -> Result<f64, EvalError> {
        match self.get_cell(cell_ref) {
            Some(cell) => cell.numeric_value(self),
            None => Ok(0.0),
        }
    }

    /// Display text at an address; absent cells are blank.
    pub fn display_text(&self, cell_ref: &CellRef) -> String {
        self.get_cell(cell_ref)
            .map(|cell| cell.display_text(self))
            .unwrap_or_default()
    }

    /// Pad every row to the same length and recompute column widths.
    pub fn align(&mut self) {
        for row in &mut self.rows {
            row.resize(self.longest_row, Cell::new_empty());
        }

        let widths = (0..self.longest_row)
            .map(|col| {
                self.rows
                    .iter()
                    .map(|row| row[col].display_width(self))
                    .max()
                    .unwrap_or(0)
            })
            .collect();
        self.widths = widths;
    }

    /// Column widths computed by the last [`Grid::align`].
    pub fn column_widths(&self) -> &[usize] {
        &self.widths
    }

    /// Display text and width of every cell, row by row.
    pub fn display_rows(&self) -> Vec<Vec<(String, usize)>> {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| {
                        let text = cell.display_text(self);
                        let width = text.chars().count();
                        (text, width)
                    })
                    .collect()
            })
            .collect()
    }

    /// One line per row with the raw text of each cell joined by `,`.
    pub fn serialize(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.raw_text())
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .collect()
    }
}
