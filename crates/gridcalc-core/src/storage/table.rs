//! Plain-text table rendering.

use gridcalc_engine::engine::{CellRef, Grid};

/// Align the grid and render it as a table with column letters and row
/// numbers. Cells are right-aligned; a column whose cells are all empty is
/// one character wide.
pub fn render_table(grid: &mut Grid) -> String {
    grid.align();
    let widths = grid.column_widths();
    let number_width = grid.row_count().to_string().len();
    let mut out = String::new();

    out.push(' ');
    out.push_str(&" ".repeat(number_width));
    out.push_str(" | ");
    for (col, width) in widths.iter().enumerate() {
        out.push(CellRef::col_to_letter(col));
        out.push_str(&" ".repeat(width.saturating_sub(1)));
        out.push_str(" | ");
    }
    out.push('\n');

    for (row, cells) in grid.display_rows().into_iter().enumerate() {
        out.push_str(&format!(" {:>width$} | ", row + 1, width = number_width));
        for ((text, cell_width), width) in cells.into_iter().zip(widths) {
            let pad = if *width == 0 { 1 } else { width.saturating_sub(cell_width) };
            out.push_str(&" ".repeat(pad));
            out.push_str(&text);
            out.push_str(" | ");
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_right_aligns_cells() {
        let mut grid = Grid::from_lines(["10, 0.5", "\"x\""]).unwrap();
        assert_eq!(
            render_table(&mut grid),
            "   | A  | B   | \n 1 | 10 | 0.5 | \n 2 |  x |     | \n"
        );
    }

    #[test]
    fn test_render_empty_column() {
        let mut grid = Grid::from_lines([",1"]).unwrap();
        assert_eq!(render_table(&mut grid), "   | A | B | \n 1 |   | 1 | \n");
    }

    #[test]
    fn test_render_pads_row_numbers() {
        let lines: Vec<String> = (1..=10).map(|n| n.to_string()).collect();
        let mut grid = Grid::from_lines(&lines).unwrap();
        let table = render_table(&mut grid);
        let rows: Vec<&str> = table.lines().collect();
        assert_eq!(rows[0], "    | A  | ");
        assert_eq!(rows[1], "  1 |  1 | ");
        assert_eq!(rows[10], " 10 | 10 | ");
    }

    #[test]
    fn test_render_shows_errors() {
        let mut grid = Grid::from_lines(["=1/0, 2"]).unwrap();
        assert_eq!(
            render_table(&mut grid),
            "   | A      | B | \n 1 | #ERROR | 2 | \n"
        );
    }
}
