use gridcalc_engine::engine::Grid;
use std::path::PathBuf;

/// UI-agnostic document state for the spreadsheet.
#[derive(Debug, Default)]
pub struct Document {
    /// The spreadsheet grid
    pub grid: Grid,
    /// Current file path, `None` until the document is saved somewhere
    pub file_path: Option<PathBuf>,
    /// Whether the grid has been modified since it was loaded or saved
    pub modified: bool,
}

impl Document {
    /// Create a new untitled document.
    ///
    /// This constructor is side-effect free: it does not touch the filesystem.
    pub fn new() -> Self {
        Document::default()
    }

    /// Name shown to users: the file path, or "New Document" when untitled.
    pub fn title(&self) -> String {
        match &self.file_path {
            Some(path) => path.display().to_string(),
            None => "New Document".to_string(),
        }
    }

    pub fn is_untitled(&self) -> bool {
        self.file_path.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_is_untitled_and_clean() {
        let doc = Document::new();
        assert!(doc.is_untitled());
        assert!(!doc.modified);
        assert!(doc.grid.is_empty());
        assert_eq!(doc.title(), "New Document");
    }

    #[test]
    fn test_title_uses_path() {
        let doc = Document {
            file_path: Some(PathBuf::from("sheet.txt")),
            ..Document::default()
        };
        assert_eq!(doc.title(), "sheet.txt");
    }
}
