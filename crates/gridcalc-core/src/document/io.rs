use super::Document;
use crate::error::{GridcalcError, Result};
use crate::storage::{parse_rows, write_rows};
use log::debug;
use std::path::{Path, PathBuf};

impl Document {
    /// Load a document from a row file.
    ///
    /// The first value that cannot be classified aborts the load; nothing is
    /// returned for a partially read file.
    pub fn open(path: &Path) -> Result<Self> {
        let grid = parse_rows(path)?;
        debug!(
            "opened {} ({} rows, {} columns)",
            path.display(),
            grid.row_count(),
            grid.column_count()
        );
        Ok(Document {
            grid,
            file_path: Some(path.to_path_buf()),
            modified: false,
        })
    }

    /// Save to current file path.
    /// Returns the path saved to.
    pub fn save(&mut self) -> Result<PathBuf> {
        let Some(path) = self.file_path.clone() else {
            return Err(GridcalcError::NoFilePath);
        };

        write_rows(&path, &mut self.grid)?;
        self.modified = false;
        Ok(path)
    }

    /// Save to `path` and make it the document's path.
    pub fn save_as(&mut self, path: &Path) -> Result<PathBuf> {
        write_rows(path, &mut self.grid)?;
        self.file_path = Some(path.to_path_buf());
        self.modified = false;
        Ok(path.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridcalc_engine::engine::{CellRef, GridError};

    #[test]
    fn test_open_reads_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sheet.txt");
        std::fs::write(&path, "=B1*C2, 0.8, 123\n,220,\"100\"\n").unwrap();

        let doc = Document::open(&path).unwrap();
        assert_eq!(doc.file_path.as_deref(), Some(path.as_path()));
        assert!(!doc.modified);
        assert_eq!(doc.grid.row_count(), 2);
        assert_eq!(doc.grid.display_text(&CellRef::new(0, 0)), "80");
    }

    #[test]
    fn test_open_reports_bad_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        std::fs::write(&path, "1, 2\n3, oops, 4\n").unwrap();

        let err = Document::open(&path).unwrap_err();
        match err {
            GridcalcError::Grid(GridError::InvalidCellValue { row, col, text }) => {
                assert_eq!((row, col), (2, 2));
                assert_eq!(text, "oops");
            }
            other => panic!("expected invalid cell value, got {other:?}"),
        }
        assert_eq!(
            Document::open(&path).unwrap_err().to_string(),
            "Error: row 2, col 2, oops is unknown data type"
        );
    }

    #[test]
    fn test_open_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Document::open(&dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, GridcalcError::Io(_)));
    }

    #[test]
    fn test_save_untitled_needs_path() {
        let mut doc = Document::new();
        doc.edit(&CellRef::new(0, 0), "1").unwrap();
        assert!(matches!(doc.save(), Err(GridcalcError::NoFilePath)));
        assert!(doc.modified);
    }

    #[test]
    fn test_save_as_then_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        let mut doc = Document::new();
        doc.edit(&CellRef::new(0, 0), "12").unwrap();
        doc.edit(&CellRef::new(2, 1), "=A1/4").unwrap();

        let saved = doc.save_as(&path).unwrap();
        assert_eq!(saved, path);
        assert!(!doc.modified);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "12,,\n,,=A1/4\n");

        doc.edit(&CellRef::new(1, 0), "\"mid\"").unwrap();
        assert!(doc.modified);
        doc.save().unwrap();
        assert!(!doc.modified);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "12,\"mid\",\n,,=A1/4\n"
        );

        let reopened = Document::open(&path).unwrap();
        assert_eq!(reopened.grid.display_text(&CellRef::new(2, 1)), "3");
    }
}
