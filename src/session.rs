//! Command dispatch against the open document.

use crate::command::{self, Command};
use crate::config::Config;
use crate::error::{AppError, Result};
use gridcalc_core::{CellLookup, Document};
use gridcalc_engine::engine::{CellRef, CellType};
use log::debug;
use std::io::Write;
use std::path::Path;

/// Answers yes/no questions asked while running a command.
pub trait Confirm {
    fn confirm(&mut self, question: &str) -> Result<bool>;
}

/// Gives the same answer to every question.
pub struct FixedAnswer(pub bool);

impl Confirm for FixedAnswer {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        debug!("answering {:?} with {}", question, self.0);
        Ok(self.0)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Flow {
    Continue,
    Exit,
}

/// The shell state: at most one open document.
pub struct Session<W> {
    document: Option<Document>,
    confirm_overwrite: bool,
    confirm_unsaved: bool,
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(config: &Config, out: W) -> Self {
        Session {
            document: None,
            confirm_overwrite: config.confirm_overwrite,
            confirm_unsaved: config.confirm_unsaved,
            out,
        }
    }

    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    pub fn set_document(&mut self, document: Document) {
        self.document = Some(document);
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.out
    }

    /// Parse and run one line of input.
    pub fn execute(&mut self, line: &str, confirm: &mut dyn Confirm) -> Result<Flow> {
        let command = command::parse(line)?;
        debug!("running {:?}", command);
        self.run(command, confirm)
    }

    pub fn run(&mut self, command: Command, confirm: &mut dyn Confirm) -> Result<Flow> {
        match command {
            Command::New => {
                self.close_current(confirm)?;
                self.document = Some(Document::new());
                writeln!(self.out, "New document created successfully!")?;
            }
            Command::Open(path) => {
                self.close_current(confirm)?;
                let document = Document::open(Path::new(&path))
                    .map_err(|source| AppError::Open { path: path.clone(), source })?;
                self.document = Some(document);
                writeln!(self.out, "Successfully opened {}", path)?;
            }
            Command::Close => {
                let Some(title) = self.close_current(confirm)? else {
                    return Err(AppError::NothingToClose);
                };
                writeln!(self.out, "Successfully closed {}", title)?;
            }
            Command::Save => {
                let path = self.current()?.save()?;
                writeln!(self.out, "Successfully saved to {}", path.display())?;
            }
            Command::SaveAs(path) => self.save_as(Path::new(&path), confirm)?,
            Command::Get(cell_ref) => {
                let lookup = self.current()?.get(&cell_ref);
                writeln!(self.out, "{}", describe(&cell_ref, &lookup))?;
            }
            Command::Edit(cell_ref, value) => {
                self.current()?.edit(&cell_ref, &value)?;
                writeln!(self.out, "{} successfully set to {}", cell_ref, value)?;
            }
            Command::Print => {
                let table = self.current()?.render()?;
                write!(self.out, "{}", table)?;
            }
            Command::Help => writeln!(self.out, "{}", command::HELP)?,
            Command::Exit => {
                self.close_current(confirm)?;
                writeln!(self.out, "Exiting the program...")?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    fn current(&mut self) -> Result<&mut Document> {
        self.document.as_mut().ok_or(AppError::NoDocument)
    }

    /// Close the open document, offering to save unsaved changes.
    /// Returns the closed document's title, or `None` if nothing was open.
    /// If saving fails the document stays open.
    fn close_current(&mut self, confirm: &mut dyn Confirm) -> Result<Option<String>> {
        let Some(document) = self.document.as_mut() else {
            return Ok(None);
        };

        if document.modified
            && self.confirm_unsaved
            && confirm.confirm("File not saved! Do you want to save it before closing?")?
        {
            let path = document.save()?;
            writeln!(self.out, "Successfully saved to {}", path.display())?;
        }

        Ok(self.document.take().map(|document| document.title()))
    }

    fn save_as(&mut self, path: &Path, confirm: &mut dyn Confirm) -> Result<()> {
        if self.document.is_none() {
            return Err(AppError::NoDocument);
        }

        if path.exists()
            && self.confirm_overwrite
            && !confirm.confirm("You have chosen an existing file. Do you want to overwrite it?")?
        {
            writeln!(self.out, "Operation canceled!")?;
            return Ok(());
        }

        let saved = self.current()?.save_as(path)?;
        writeln!(self.out, "Successfully saved to {}", saved.display())?;
        Ok(())
    }
}

/// One-line report for the `get` command.
fn describe(cell_ref: &CellRef, lookup: &CellLookup) -> String {
    match lookup {
        CellLookup::Absent => format!("{} has a value of 0", cell_ref),
        CellLookup::Empty => format!("{} is an empty cell", cell_ref),
        CellLookup::Value {
            raw,
            display,
            cell_type: CellType::Formula,
            error,
        } => match error {
            Some(err) => format!("{} has a value of {} -> {} ({})", cell_ref, raw, display, err),
            None => format!("{} has a value of {} -> {}", cell_ref, raw, display),
        },
        CellLookup::Value { raw, .. } => format!("{} has a value of {}", cell_ref, raw),
    }
}
