//! # Downstream Term Reader
//!
//! The history subsystem hands each fully expanded line to a downstream
//! parser that turns it into a structured term plus variable bindings.
//! That parser is external; this module only defines the seam. A parser
//! may instead report that the line was a silent command: a side effect
//! already executed, so the session should read one more raw line without
//! re-prompting and without storing it.

use anyhow::Result;

/// Outcome of parsing one expanded line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed<T, B> {
    /// A structured term and its variable bindings
    Term(T, B),
    /// The line was a side-effecting command; read another line silently
    Silent,
}

/// Downstream parser turning an expanded line into a term
///
/// Parse errors are propagated to the caller unmodified; the history loop
/// does not interpret them.
pub trait TermReader {
    type Term;
    type Bindings;

    fn parse(&mut self, line: &str) -> Result<Parsed<Self::Term, Self::Bindings>>;
}
