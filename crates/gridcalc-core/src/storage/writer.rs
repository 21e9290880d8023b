//! Writer for the comma separated row file format

use crate::error::Result;
use gridcalc_engine::engine::Grid;
use log::debug;
use std::fs;
use std::path::Path;

/// Write a Grid to a row file
pub fn write_rows(path: &Path, grid: &mut Grid) -> Result<()> {
    let content = write_rows_content(grid);
    fs::write(path, &content)?;
    debug!("wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

/// Align the grid and write it as row file content.
///
/// Every row, the last one included, ends with `\n`, so trailing empty rows
/// survive a reload. An empty grid writes nothing.
pub fn write_rows_content(grid: &mut Grid) -> String {
    grid.align();
    grid.serialize()
        .into_iter()
        .map(|line| line + "\n")
        .collect()
}
