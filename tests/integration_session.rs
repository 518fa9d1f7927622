//! Integration tests driving full history sessions through mock I/O.

use anyhow::Result;
use bangline::repl::{
    EventStore, MockConsole, MockLineSource, Parsed, Session, SessionOptions, TermReader,
};
use std::collections::HashSet;

/// Reader that accepts every line as a term with no bindings
struct AcceptAll;

impl TermReader for AcceptAll {
    type Term = String;
    type Bindings = ();

    fn parse(&mut self, line: &str) -> Result<Parsed<String, ()>> {
        Ok(Parsed::Term(line.to_string(), ()))
    }
}

fn options() -> SessionOptions {
    SessionOptions::new("history", "help", HashSet::new(), "?- %! ")
}

/// Run one session over `lines`, collecting the terms produced until EOF
fn run_session(
    lines: &[&str],
    opts: &SessionOptions,
) -> (Vec<String>, Session<MockLineSource, MockConsole>) {
    let mut session = Session::new(MockLineSource::new(lines.to_vec()), MockConsole::new());
    let mut terms = Vec::new();
    while let Ok((term, ())) = session.read_history(&mut AcceptAll, opts) {
        terms.push(term);
    }
    (terms, session)
}

#[test]
fn test_conversation_with_recall_and_substitution() {
    let (terms, session) = run_session(
        &[
            "likes(mary, wine)",
            "!!^mary^john",
            "!?wine",
            "!likes^wine^beer",
        ],
        &options(),
    );
    assert_eq!(
        terms,
        [
            "likes(mary, wine)",
            "likes(john, wine)",
            "likes(john, wine)",
            "likes(john, beer)",
        ]
    );
    // Every expanded form was echoed with a trailing dot
    assert_eq!(
        session.console().lines(),
        [
            "likes(john, wine).",
            "likes(john, wine).",
            "likes(john, beer).",
        ]
    );
}

#[test]
fn test_prompt_counts_up_with_events() {
    let (_, session) = run_session(&["a", "b", "c"], &options());
    assert_eq!(session.console().prompts(), ["?- 1 ", "?- 2 ", "?- 3 ", "?- 4 "]);
}

#[test]
fn test_expansion_failure_reprompts_without_storing() {
    let (terms, session) = run_session(&["!missing", "^x^y", "real"], &options());
    assert_eq!(terms, ["real"]);
    assert_eq!(
        session.console().lines(),
        ["! no such event", "! no such event"]
    );
    assert_eq!(session.store().last_event_number(), 1);
}

#[test]
fn test_bad_substitution_is_reported_once() {
    let (terms, session) = run_session(&["foo", "^zap^bar", "next"], &options());
    assert_eq!(terms, ["foo", "next"]);
    assert_eq!(session.console().lines(), ["! bad substitution"]);
}

#[test]
fn test_history_listing_is_right_aligned_and_windowed() {
    let store = EventStore::with_depth(2);
    let mut session = Session::with_store(
        MockLineSource::new(["one", "two", "three", "history", "done"]),
        MockConsole::new(),
        store,
    );
    let opts = options();
    let mut terms = Vec::new();
    while let Ok((term, ())) = session.read_history(&mut AcceptAll, &opts) {
        terms.push(term);
    }
    assert_eq!(terms, ["one", "two", "three", "done"]);
    // Depth 2 keeps only the two most recent events at listing time
    assert_eq!(session.console().lines(), ["   2   two", "   3   three"]);
}

#[test]
fn test_depth_eviction_breaks_old_references() {
    let store = EventStore::with_depth(2);
    let mut session = Session::with_store(
        MockLineSource::new(["one", "two", "three", "!1", "ok"]),
        MockConsole::new(),
        store,
    );
    let opts = options();
    let mut terms = Vec::new();
    while let Ok((term, ())) = session.read_history(&mut AcceptAll, &opts) {
        terms.push(term);
    }
    // Event 1 was evicted, so !1 fails and the line is discarded
    assert_eq!(terms, ["one", "two", "three", "ok"]);
    assert_eq!(session.console().lines(), ["! no such event"]);
}

#[test]
fn test_dont_store_lines_leave_no_trace() {
    let mut opts = options();
    opts.dont_store.insert("end_of_file".to_string());
    let (terms, session) = run_session(&["goal", "end_of_file"], &opts);
    assert_eq!(terms, ["goal", "end_of_file"]);
    assert_eq!(session.store().last_event_number(), 1);
    assert_eq!(session.line_source().native_history(), ["goal".to_string()]);
}

#[test]
fn test_stored_lines_mirrored_to_native_history() {
    let (_, session) = run_session(&["alpha", "!!"], &options());
    assert_eq!(
        session.line_source().native_history(),
        ["alpha".to_string(), "alpha".to_string()]
    );
}

#[test]
fn test_silent_command_protocol() {
    /// Reader that executes `show(_)` lines silently
    struct ShowIsSilent {
        shown: Vec<String>,
    }

    impl TermReader for ShowIsSilent {
        type Term = String;
        type Bindings = ();

        fn parse(&mut self, line: &str) -> Result<Parsed<String, ()>> {
            if let Some(arg) = line.strip_prefix("show(").and_then(|r| r.strip_suffix(')')) {
                self.shown.push(arg.to_string());
                return Ok(Parsed::Silent);
            }
            Ok(Parsed::Term(line.to_string(), ()))
        }
    }

    let mut reader = ShowIsSilent { shown: Vec::new() };
    let mut session = Session::new(
        MockLineSource::new(["show(flags)", "goal"]),
        MockConsole::new(),
    );
    let (term, ()) = session.read_history(&mut reader, &options()).unwrap();
    assert_eq!(term, "goal");
    assert_eq!(reader.shown, ["flags"]);
    // The silent command was stored; the continuation line was not
    assert_eq!(session.store().last_event_number(), 1);
    assert_eq!(session.console().prompts(), ["?- 1 "]);
}

#[test]
fn test_downstream_parse_error_is_forwarded() {
    /// Reader that rejects everything
    struct RejectAll;

    impl TermReader for RejectAll {
        type Term = String;
        type Bindings = ();

        fn parse(&mut self, line: &str) -> Result<Parsed<String, ()>> {
            anyhow::bail!("syntax error in '{line}'")
        }
    }

    let mut session = Session::new(MockLineSource::new(["bad term"]), MockConsole::new());
    let err = session
        .read_history(&mut RejectAll, &options())
        .unwrap_err();
    assert!(err.to_string().contains("syntax error in 'bad term'"));
}
