//! Parser for the comma separated row file format

use crate::error::{GridcalcError, Result};
use gridcalc_engine::engine::{Grid, GridError};
use log::debug;
use std::fs;
use std::path::Path;

/// Parse a row file and return a Grid
pub fn parse_rows(path: &Path) -> Result<Grid> {
    let content = fs::read_to_string(path)?;
    debug!("read {} bytes from {}", content.len(), path.display());
    parse_rows_content(&content)
}

/// Parse row file content from a string.
///
/// Every line is one row, including blank ones. A final line break does not
/// start another row.
pub fn parse_rows_content(content: &str) -> Result<Grid> {
    let mut grid = Grid::new();

    for (line_num, line) in content.lines().enumerate() {
        grid.add_row(line).map_err(|err| match err {
            GridError::InvalidAddress(message) => GridcalcError::Parse {
                line: line_num + 1,
                message,
            },
            other => GridcalcError::Grid(other),
        })?;
    }

    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridcalc_engine::engine::{CellRef, CellType};

    #[test]
    fn test_parse_rows() {
        let grid = parse_rows_content("=B1*C2, 0.8, 123\n,220,\"100\"").unwrap();
        assert_eq!(grid.row_count(), 2);
        assert_eq!(grid.column_count(), 3);
        let cell = grid.get_cell(&CellRef::new(0, 0)).unwrap();
        assert_eq!(cell.cell_type(), CellType::Formula);
    }

    #[test]
    fn test_parse_text_escaped_quotes() {
        let grid = parse_rows_content(r#""He said \"hi\"""#).unwrap();
        assert_eq!(grid.display_text(&CellRef::new(0, 0)), "He said \"hi\"");
    }

    #[test]
    fn test_empty_content_is_empty_grid() {
        let grid = parse_rows_content("").unwrap();
        assert!(grid.is_empty());
    }

    #[test]
    fn test_trailing_newline_and_crlf() {
        let grid = parse_rows_content("1,2\r\n3,4\r\n").unwrap();
        assert_eq!(grid.row_count(), 2);
        assert_eq!(grid.display_text(&CellRef::new(1, 1)), "4");
    }

    #[test]
    fn test_blank_line_is_empty_row() {
        let grid = parse_rows_content("1\n\n3").unwrap();
        assert_eq!(grid.row_count(), 3);
        assert!(grid.get_cell(&CellRef::new(0, 1)).is_none());
    }

    #[test]
    fn test_bad_value_reports_row_and_column() {
        let err = parse_rows_content("1,2\n3,\"open").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Error: row 2, col 2, \"open is unknown data type"
        );
    }

    #[test]
    fn test_too_many_columns() {
        let line = vec!["1"; 27].join(",");
        let err = parse_rows_content(&line).unwrap_err();
        assert!(matches!(err, GridcalcError::Parse { line: 1, .. }));
    }
}
