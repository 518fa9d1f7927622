//! # I/O Abstraction Layer
//!
//! Provides trait abstractions for the raw-line source and the display
//! layer to enable dependency injection without polluting production code.
//!
//! ## Design Principles
//!
//! - **LineSource**: Abstracts blocking acquisition of one raw input line
//! - **Console**: Abstracts prompt rendering and line output
//! - **Clean Separation**: All terminal-specific code isolated to implementations
//! - **Dependency Injection**: Enables testing without terminal dependencies
//!
//! ## Architecture
//!
//! ```text
//! Production:  Session ──▶ ReadlineSource ──▶ rustyline::DefaultEditor
//!                      ──▶ StdoutConsole  ──▶ std::io::stdout()
//!
//! Testing:     Session ──▶ MockLineSource ──▶ VecDeque<String>
//!                      ──▶ MockConsole    ──▶ Vec<ConsoleCommand>
//! ```

use anyhow::Result;

pub mod mock;
pub mod terminal;

// Re-export terminal implementations for convenience
pub use terminal::{ReadlineSource, StdoutConsole};

// Re-export mock implementations for testing
pub use mock::{ConsoleCommand, MockConsole, MockLineSource};

/// Blocking source of raw input lines
///
/// Production implementations read from a terminal line editor. Test
/// implementations can provide pre-programmed line sequences.
pub trait LineSource {
    /// Acquire one raw line of input
    ///
    /// Returns `Ok(None)` on end of input. This is the only blocking call
    /// in the session loop.
    fn read_line(&mut self) -> Result<Option<String>>;

    /// Offer a stored line to the native line-editor history, best-effort
    ///
    /// Failures are swallowed by implementations; the event store is the
    /// authoritative history.
    fn append_history(&mut self, _line: &str) {}
}

/// Display layer for prompts and output lines
pub trait Console {
    /// Render the prompt text without a trailing newline
    fn render_prompt(&mut self, text: &str) -> Result<()>;

    /// Write one line of output
    fn write_line(&mut self, text: &str) -> Result<()>;

    /// Flush pending output, making the prompt visible before reading
    fn flush(&mut self) -> Result<()>;
}
