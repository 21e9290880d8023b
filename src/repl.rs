//! Interactive read-eval-print loop.

use crate::error::Result;
use crate::session::{Confirm, Flow, Session};
use std::io::{BufRead, Write};

/// Reads command lines and confirmation answers from one input.
pub struct Repl<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Repl { input, output }
    }

    /// Run commands until `exit` or end of input.
    ///
    /// Errors are printed to stderr and do not stop the loop.
    pub fn run<S: Write>(&mut self, session: &mut Session<S>, prompt: &str) -> Result<()> {
        loop {
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                return Ok(());
            };
            if line.trim().is_empty() {
                continue;
            }

            match session.execute(&line, self) {
                Ok(Flow::Exit) => return Ok(()),
                Ok(Flow::Continue) => {}
                Err(err) => eprintln!("{}", err),
            }
            writeln!(self.output)?;
        }
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Asks on the output and repeats until the answer is `Y` or `N`.
/// End of input counts as no.
impl<R: BufRead, W: Write> Confirm for Repl<R, W> {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        writeln!(self.output, "{} (Y/N)", question)?;
        self.output.flush()?;
        while let Some(answer) = self.read_line()? {
            match answer.trim() {
                "Y" | "y" => return Ok(true),
                "N" | "n" => return Ok(false),
                _ => {}
            }
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::io::Cursor;

    fn run_script(script: &str) -> (String, Session<Vec<u8>>) {
        let mut session = Session::new(&Config::default(), Vec::new());
        let mut prompts = Vec::new();
        Repl::new(Cursor::new(script), &mut prompts)
            .run(&mut session, ">")
            .unwrap();
        (String::from_utf8(prompts).unwrap(), session)
    }

    #[test]
    fn confirm_repeats_until_valid() {
        let mut out = Vec::new();
        let mut repl = Repl::new(Cursor::new("maybe\n\ny\n"), &mut out);
        assert!(repl.confirm("Save?").unwrap());
        assert_eq!(String::from_utf8(out).unwrap(), "Save? (Y/N)\n");

        let mut repl = Repl::new(Cursor::new("N\r\n"), Vec::new());
        assert!(!repl.confirm("Save?").unwrap());

        let mut repl = Repl::new(Cursor::new(""), Vec::new());
        assert!(!repl.confirm("Save?").unwrap());
    }

    #[test]
    fn runs_until_exit() {
        let (prompts, session) = run_script("new\nedit A1 5\n\nbogus\nexit\nN\nget A1\n");
        assert_eq!(prompts, ">\n>\n>>\n>File not saved! Do you want to save it before closing? (Y/N)\n");
        assert!(session.document().is_none());
        let out = String::from_utf8(session.into_output()).unwrap();
        assert!(out.ends_with("Exiting the program...\n"));
        assert!(!out.contains("has a value"));
    }

    #[test]
    fn stops_at_end_of_input() {
        let (prompts, session) = run_script("new\nedit A1 5");
        assert_eq!(prompts, ">\n>\n>\n");
        assert!(session.document().unwrap().modified);
    }
}
