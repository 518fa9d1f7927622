//! # Expansion Error Types
//!
//! Failure classes for history expansion. Each class carries exactly one
//! user-facing message; the session controller prints it and discards the
//! offending input line.

use thiserror::Error;

/// Errors raised while expanding a `!`-reference or `^`-substitution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HistoryError {
    /// The referenced event number or pattern matched nothing in the store
    #[error("no such event")]
    NoSuchEvent,

    /// The `old` text of a substitution does not occur in the recalled event
    #[error("bad substitution")]
    BadSubstitution,
}
