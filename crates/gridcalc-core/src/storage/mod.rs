//! Storage and rendering for documents.

pub mod parser;
pub mod table;
pub mod writer;

pub use parser::{parse_rows, parse_rows_content};
pub use table::render_table;
pub use writer::{write_rows, write_rows_content};
