//! Command line grammar for the shell.
//!
//! A line is split into at most three parts: the command name and up to two
//! arguments. A part that starts with `=` or `"` runs to the end of the line,
//! so formulas and quoted text may contain spaces. Anything left over after
//! the third part makes the line invalid.

use crate::error::{AppError, Result};
use gridcalc_engine::engine::CellRef;

const MAX_PARTS: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    New,
    Open(String),
    Close,
    Save,
    SaveAs(String),
    Get(CellRef),
    Edit(CellRef, String),
    Print,
    Help,
    Exit,
}

/// Parse one line of user input.
pub fn parse(line: &str) -> Result<Command> {
    let parts = split_parts(line)?;
    let name = parts.first().map(|s| s.to_ascii_lowercase()).unwrap_or_default();
    let args = parts.get(1..).unwrap_or_default();

    let command = match (name.as_str(), args) {
        ("new", []) => Command::New,
        ("open", [path]) => Command::Open(strip_quotes(path).to_string()),
        ("close", []) => Command::Close,
        ("save", []) => Command::Save,
        ("saveas", [path]) => Command::SaveAs(strip_quotes(path).to_string()),
        ("get", [address]) => Command::Get(parse_address(address)?),
        ("edit", [address, value]) => Command::Edit(parse_address(address)?, value.to_string()),
        ("print", []) => Command::Print,
        ("help", []) => Command::Help,
        ("exit", []) => Command::Exit,
        _ => return Err(AppError::InvalidCommand),
    };
    Ok(command)
}

fn split_parts(line: &str) -> Result<Vec<&str>> {
    let mut parts = Vec::with_capacity(MAX_PARTS);
    let mut rest = line;

    while parts.len() < MAX_PARTS {
        let trimmed = rest.trim_start();
        if trimmed.is_empty() {
            rest = trimmed;
            break;
        }
        if trimmed.starts_with(['=', '"']) {
            parts.push(trimmed.trim_end());
            rest = "";
            break;
        }
        let end = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
        parts.push(&trimmed[..end]);
        rest = &trimmed[end..];
    }

    if !rest.trim().is_empty() {
        return Err(AppError::InvalidCommand);
    }
    Ok(parts)
}

/// Remove one pair of surrounding double quotes.
fn strip_quotes(path: &str) -> &str {
    path.strip_prefix('"')
        .and_then(|p| p.strip_suffix('"'))
        .unwrap_or(path)
}

fn parse_address(address: &str) -> Result<CellRef> {
    CellRef::parse(address).ok_or(AppError::InvalidCell)
}

/// Text printed by the `help` command.
pub const HELP: &str = "\
Commands (names are case-insensitive):
  new                   create a new empty document
  open <file>           open a document, quotes around the path are allowed
  close                 close the current document
  save                  save the current document to its file
  saveas <file>         save the current document to another file
  get <cell>            show the value of a cell, e.g. get B3
  edit <cell> <value>   set a cell to an integer, decimal, \"text\" or =formula
  print                 print the document as a table
  help                  show this list
  exit                  close the document and quit";

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(name: &str) -> CellRef {
        CellRef::parse(name).unwrap()
    }

    #[test]
    fn parse_simple_commands() {
        assert_eq!(parse("new").unwrap(), Command::New);
        assert_eq!(parse("  Print  ").unwrap(), Command::Print);
        assert_eq!(parse("SAVE").unwrap(), Command::Save);
        assert_eq!(parse("Exit").unwrap(), Command::Exit);
        assert_eq!(parse("help").unwrap(), Command::Help);
        assert_eq!(parse("close").unwrap(), Command::Close);
    }

    #[test]
    fn parse_paths() {
        assert_eq!(
            parse("open sheet.txt").unwrap(),
            Command::Open("sheet.txt".to_string())
        );
        assert_eq!(
            parse("open \"my sheet.txt\"").unwrap(),
            Command::Open("my sheet.txt".to_string())
        );
        assert_eq!(
            parse("SaveAs out.txt").unwrap(),
            Command::SaveAs("out.txt".to_string())
        );
    }

    #[test]
    fn parse_get_and_edit() {
        assert_eq!(parse("get b3").unwrap(), Command::Get(cell("B3")));
        assert_eq!(
            parse("edit A1 = B1 * 2").unwrap(),
            Command::Edit(cell("A1"), "= B1 * 2".to_string())
        );
        assert_eq!(
            parse("edit c2 \"Hello world\"").unwrap(),
            Command::Edit(cell("C2"), "\"Hello world\"".to_string())
        );
        assert_eq!(
            parse("edit A1 12.5").unwrap(),
            Command::Edit(cell("A1"), "12.5".to_string())
        );
    }

    #[test]
    fn parse_rejects_wrong_arity() {
        assert!(matches!(parse(""), Err(AppError::InvalidCommand)));
        assert!(matches!(parse("new doc"), Err(AppError::InvalidCommand)));
        assert!(matches!(parse("open"), Err(AppError::InvalidCommand)));
        assert!(matches!(parse("open a b"), Err(AppError::InvalidCommand)));
        assert!(matches!(parse("edit A1"), Err(AppError::InvalidCommand)));
        assert!(matches!(parse("edit A1 1 2"), Err(AppError::InvalidCommand)));
        assert!(matches!(parse("frobnicate"), Err(AppError::InvalidCommand)));
    }

    #[test]
    fn parse_rejects_bad_addresses() {
        assert!(matches!(parse("get A0"), Err(AppError::InvalidCell)));
        assert!(matches!(parse("get 1A"), Err(AppError::InvalidCell)));
        assert!(matches!(parse("get AA1"), Err(AppError::InvalidCell)));
        assert!(matches!(parse("edit A1X 5"), Err(AppError::InvalidCell)));
    }
}
