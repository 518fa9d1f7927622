//! # Mock I/O Implementations for Testing
//!
//! Provides mock implementations of the LineSource and Console traits for
//! testing session behavior without terminal dependencies.

use super::{Console, LineSource};
use anyhow::Result;
use std::collections::VecDeque;

/// Mock line source for testing
///
/// Provides pre-programmed lines that are consumed one per read; the end
/// of the script behaves like end of input. Also records every line
/// offered to the native history for verification.
pub struct MockLineSource {
    lines: VecDeque<String>,
    native_history: Vec<String>,
}

impl MockLineSource {
    /// Create a mock source with pre-programmed lines
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            native_history: Vec::new(),
        }
    }

    /// Create a source that immediately reports end of input
    pub fn empty() -> Self {
        Self::new(Vec::<String>::new())
    }

    /// Queue one more line
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push_back(line.into());
    }

    /// Lines offered to the native line-editor history so far
    pub fn native_history(&self) -> &[String] {
        &self.native_history
    }
}

impl LineSource for MockLineSource {
    fn read_line(&mut self) -> Result<Option<String>> {
        Ok(self.lines.pop_front())
    }

    fn append_history(&mut self, line: &str) {
        self.native_history.push(line.to_string());
    }
}

/// Recorded console command for verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Prompt(String),
    Line(String),
    Flush,
}

/// Mock console for testing
///
/// Records all display commands for verification in tests.
#[derive(Default)]
pub struct MockConsole {
    commands: Vec<ConsoleCommand>,
}

impl MockConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded commands in order
    pub fn commands(&self) -> &[ConsoleCommand] {
        &self.commands
    }

    /// Only the rendered prompts, in order
    pub fn prompts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                ConsoleCommand::Prompt(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Only the written lines, in order
    pub fn lines(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                ConsoleCommand::Line(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Console for MockConsole {
    fn render_prompt(&mut self, text: &str) -> Result<()> {
        self.commands.push(ConsoleCommand::Prompt(text.to_string()));
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> Result<()> {
        self.commands.push(ConsoleCommand::Line(text.to_string()));
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.commands.push(ConsoleCommand::Flush);
        Ok(())
    }
}
