//! # Session Controller
//!
//! Orchestrates one prompt cycle: render the prompt, acquire a raw line,
//! dispatch it (history listing, help, or expand-store-and-parse), and
//! loop until the downstream term reader produces a term. Expansion errors
//! are reported on the console and the offending line is discarded; the
//! loop is resilient by construction and only ends on a produced term or
//! on end of input.

use super::error::HistoryError;
use super::expand::expand;
use super::io::{Console, LineSource};
use super::store::EventStore;
use super::term::{Parsed, TermReader};
use crate::config;
use anyhow::{bail, Result};
use std::collections::HashSet;

/// Fixed help block printed for the configured help command
const HELP_TEXT: &str = "\
History commands:
!!              recall the last line
!n              recall line number n
!str            recall the most recent line starting with str
!?str           recall the most recent line containing str
^old^new        replace old with new in the last line
!ref^old^new    replace old with new in the recalled line";

/// Caller-supplied knobs for one `read_history` call
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Raw line that lists the retained events instead of being parsed
    pub history_command: String,
    /// Raw line that prints the help block instead of being parsed
    pub help_command: String,
    /// Expanded lines that must not be recorded as events
    pub dont_store: HashSet<String>,
    /// Prompt template; a literal `%!` is replaced with the next event number
    pub prompt_template: String,
}

impl SessionOptions {
    pub fn new(
        history_command: impl Into<String>,
        help_command: impl Into<String>,
        dont_store: HashSet<String>,
        prompt_template: impl Into<String>,
    ) -> Self {
        Self {
            history_command: history_command.into(),
            help_command: help_command.into(),
            dont_store,
            prompt_template: prompt_template.into(),
        }
    }
}

/// Render a prompt template, substituting the next event number for `%!`
fn render_prompt(template: &str, next_event: u64) -> String {
    template.replace(config::PROMPT_EVENT_TOKEN, &next_event.to_string())
}

/// One interactive history session
///
/// Owns the event store and the injected I/O endpoints; single-threaded,
/// one line at a time.
pub struct Session<L: LineSource, C: Console> {
    store: EventStore,
    input: L,
    console: C,
}

impl<L: LineSource, C: Console> Session<L, C> {
    /// Create a session with a fresh store at the default depth
    pub fn new(input: L, console: C) -> Self {
        Self::with_store(input, console, EventStore::new())
    }

    /// Create a session around an existing store (e.g. custom depth)
    pub fn with_store(input: L, console: C, store: EventStore) -> Self {
        Self {
            store,
            input,
            console,
        }
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut EventStore {
        &mut self.store
    }

    pub fn line_source(&self) -> &L {
        &self.input
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    /// Read raw lines until the downstream reader produces a term
    ///
    /// Each accepted line is history-expanded, recorded (unless it is in
    /// the don't-store set), echoed with a trailing `.` when expansion
    /// changed it, and handed to `reader`. A [`Parsed::Silent`] outcome
    /// makes the controller read one more raw line without re-prompting
    /// and without storing it. Ends with an error only on end of input or
    /// a downstream parse error, which is forwarded unmodified.
    pub fn read_history<R: TermReader>(
        &mut self,
        reader: &mut R,
        opts: &SessionOptions,
    ) -> Result<(R::Term, R::Bindings)> {
        let mut prompt = true;
        let mut store_line = true;

        loop {
            if prompt {
                let rendered =
                    render_prompt(&opts.prompt_template, self.store.last_event_number() + 1);
                self.console.render_prompt(&rendered)?;
                self.console.flush()?;
            }

            let Some(raw) = self.input.read_line()? else {
                bail!("input ended before a term was read");
            };

            if raw == opts.history_command {
                self.list_events()?;
                (prompt, store_line) = (true, true);
                continue;
            }
            if raw == opts.help_command {
                self.console.write_line(HELP_TEXT)?;
                (prompt, store_line) = (true, true);
                continue;
            }

            let expansion = match expand(&self.store, &raw) {
                Ok(expansion) => expansion,
                Err(e) => {
                    self.report(e)?;
                    (prompt, store_line) = (true, true);
                    continue;
                }
            };

            if store_line && !opts.dont_store.contains(&expansion.text) {
                let number = self.store.append(&expansion.text);
                self.input.append_history(&expansion.text);
                tracing::debug!("recorded event {number}: {}", expansion.text);
            }
            if expansion.changed {
                tracing::debug!("expanded '{raw}' to '{}'", expansion.text);
                self.console.write_line(&format!("{}.", expansion.text))?;
            }

            match reader.parse(&expansion.text)? {
                Parsed::Term(term, bindings) => return Ok((term, bindings)),
                Parsed::Silent => {
                    tracing::debug!("silent command, reading again");
                    (prompt, store_line) = (false, false);
                }
            }
        }
    }

    /// Print the retained events, right-aligned number first
    fn list_events(&mut self) -> Result<()> {
        let listing: Vec<String> = self
            .store
            .list()
            .map(|event| format!("{:>4}   {}", event.number(), event.text()))
            .collect();
        for line in listing {
            self.console.write_line(&line)?;
        }
        Ok(())
    }

    /// Report an expansion failure on the display layer
    fn report(&mut self, error: HistoryError) -> Result<()> {
        tracing::debug!("expansion failed: {error}");
        self.console.write_line(&format!("! {error}"))
    }
}
