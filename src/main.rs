//! # Bangline Demo REPL
//!
//! A minimal read loop around the history session: each accepted line is
//! history-expanded, recorded, and echoed back as the "term". Lines that
//! are empty or start with `%` are treated as silent commands.

use anyhow::Result;
use bangline::cmd_args::CommandLineArgs;
use bangline::config;
use bangline::repl::{
    EventStore, Parsed, ReadlineSource, Session, SessionOptions, StdoutConsole, TermReader,
};
use std::collections::HashSet;
use tracing_subscriber::EnvFilter;

/// Demo term reader: the expanded line itself is the term
struct EchoReader;

impl TermReader for EchoReader {
    type Term = String;
    type Bindings = ();

    fn parse(&mut self, line: &str) -> Result<Parsed<String, ()>> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('%') {
            return Ok(Parsed::Silent);
        }
        Ok(Parsed::Term(line.to_string(), ()))
    }
}

fn main() -> Result<()> {
    let args = CommandLineArgs::parse();

    let default_level = if args.verbose() { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let depth = args.depth().unwrap_or_else(config::get_history_depth);
    let store = EventStore::with_depth(depth);
    let mut session = Session::with_store(ReadlineSource::new()?, StdoutConsole::new(), store);

    let opts = SessionOptions::new("history", "help", HashSet::new(), args.prompt().clone());
    let mut reader = EchoReader;

    println!("bangline demo - type 'help' for history syntax, 'history' to list, Ctrl-D to quit");
    loop {
        match session.read_history(&mut reader, &opts) {
            Ok((term, ())) => println!("term: {term}"),
            Err(_) => break, // end of input
        }
    }
    println!("bye");
    Ok(())
}
