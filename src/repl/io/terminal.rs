//! # Terminal I/O Implementations
//!
//! Production implementations of the I/O traits: a rustyline-backed line
//! source (which doubles as the native-history integration) and a stdout
//! console.

use super::{Console, LineSource};
use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::Write;

/// Line source backed by a rustyline editor
///
/// Ctrl-D and Ctrl-C both end the input stream. Lines stored by the
/// session are mirrored into rustyline's own history so arrow-key recall
/// works alongside `!`-expansion.
pub struct ReadlineSource {
    editor: DefaultEditor,
}

impl ReadlineSource {
    pub fn new() -> Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineSource for ReadlineSource {
    fn read_line(&mut self) -> Result<Option<String>> {
        // The session renders the prompt itself through the Console
        match self.editor.readline("") {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn append_history(&mut self, line: &str) {
        if let Err(e) = self.editor.add_history_entry(line) {
            tracing::debug!("native history append ignored: {e}");
        }
    }
}

/// Console writing prompts and lines to standard output
pub struct StdoutConsole {
    out: std::io::Stdout,
}

impl StdoutConsole {
    pub fn new() -> Self {
        Self {
            out: std::io::stdout(),
        }
    }
}

impl Default for StdoutConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdoutConsole {
    fn render_prompt(&mut self, text: &str) -> Result<()> {
        write!(self.out, "{text}")?;
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{text}")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}
