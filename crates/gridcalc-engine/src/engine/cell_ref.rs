//! Cell reference parsing and formatting.
//!
//! Provides bidirectional conversion between spreadsheet-style cell addresses
//! (e.g., "A1", "b2", "Z0100") and zero-indexed column/row coordinates.
//! Columns are a single letter, so the grid is at most 26 columns wide.
//!
//! # Examples
//!
//! ```
//! use gridcalc_engine::engine::CellRef;
//!
//! let cell = CellRef::parse("B3").unwrap();
//! assert_eq!(cell.col, 1); // 0-indexed
//! assert_eq!(cell.row, 2);
//! assert_eq!(cell.to_string(), "B3");
//! ```

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Number of addressable columns (`A` through `Z`).
pub const MAX_COLUMNS: usize = 26;

/// A reference to a cell by column and row indices (0-indexed).
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

impl CellRef {
    pub fn new(col: usize, row: usize) -> CellRef {
        CellRef { row, col }
    }

    /// Parse an address from spreadsheet notation (e.g., "A1", "c12", "A0001").
    /// Returns None if the input is not a single letter followed by a row >= 1.
    pub fn parse(name: &str) -> Option<CellRef> {
        let caps = address_re().captures(name)?;
        let letter = caps["letter"].as_bytes()[0].to_ascii_uppercase();
        let row = caps["digits"].parse::<usize>().ok()?.checked_sub(1)?;
        Some(CellRef::new((letter - b'A') as usize, row))
    }

    /// Column letter for a 0-based column index (0 -> A, 25 -> Z).
    pub fn col_to_letter(col: usize) -> char {
        debug_assert!(col < MAX_COLUMNS);
        (b'A' + (col % MAX_COLUMNS) as u8) as char
    }

    /// 1-based row number as shown to users.
    pub fn row_number(&self) -> usize {
        self.row + 1
    }
}

fn address_re() -> &'static Regex {
    static ADDRESS_RE: OnceLock<Regex> = OnceLock::new();
    ADDRESS_RE.get_or_init(|| {
        Regex::new(r"^(?<letter>[A-Za-z])(?<digits>[0-9]+)$")
            .expect("cell address regex must compile")
    })
}

impl std::str::FromStr for CellRef {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid cell reference: {}", s))
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", CellRef::col_to_letter(self.col), self.row + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::CellRef;

    #[test]
    fn test_parse_leading_zeros() {
        assert_eq!(CellRef::parse("A0001"), Some(CellRef::new(0, 0)));
    }

    #[test]
    fn test_parse_row_overflow_returns_none() {
        let huge = format!("A{}", "9".repeat(40));
        assert!(CellRef::parse(&huge).is_none());
    }
}
