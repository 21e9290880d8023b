use super::Document;
use crate::error::{GridcalcError, Result};
use crate::storage::render_table;
use gridcalc_engine::engine::{Cell, CellRef, CellType, EvalError};

/// What a cell address holds, as reported to a user.
#[derive(Clone, Debug, PartialEq)]
pub enum CellLookup {
    /// Outside the grid; reads as 0.
    Absent,
    /// Inside the grid but empty.
    Empty,
    Value {
        /// Stored form (formula source, quoted text).
        raw: String,
        /// Displayed form (`#ERROR` for a failing formula).
        display: String,
        cell_type: CellType,
        /// Why a formula could not be evaluated.
        error: Option<EvalError>,
    },
}

impl Document {
    /// Look up a cell for display.
    pub fn get(&self, cell_ref: &CellRef) -> CellLookup {
        let Some(cell) = self.grid.get_cell(cell_ref) else {
            return CellLookup::Absent;
        };
        if cell.is_empty() {
            return CellLookup::Empty;
        }

        let error = match cell {
            Cell::Formula(formula) => formula.numeric_value(&self.grid).err(),
            _ => None,
        };
        CellLookup::Value {
            raw: cell.raw_text().into_owned(),
            display: cell.display_text(&self.grid),
            cell_type: cell.cell_type(),
            error,
        }
    }

    /// Set a cell from user input and mark the document modified.
    pub fn edit(&mut self, cell_ref: &CellRef, value: &str) -> Result<()> {
        self.grid.set_value(cell_ref, value)?;
        self.modified = true;
        Ok(())
    }

    /// Render the document as an aligned table.
    pub fn render(&mut self) -> Result<String> {
        if self.grid.is_empty() {
            return Err(GridcalcError::EmptyDocument);
        }
        Ok(render_table(&mut self.grid))
    }
}
