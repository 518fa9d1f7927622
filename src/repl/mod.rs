//! # History Subsystem
//!
//! The components of the history engine, leaf-first: the bounded event
//! store, pure matchers over it, the single-replacement substitution
//! engine, the expansion parser that ties them together, and the session
//! controller that drives one prompt/read/dispatch cycle at a time.

pub mod controller;
pub mod error;
pub mod expand;
pub mod io;
pub mod matcher;
pub mod store;
pub mod substitute;
pub mod term;

// Re-export core types
pub use controller::{Session, SessionOptions};
pub use error::HistoryError;
pub use expand::{expand, EventRef, Expansion};
pub use io::{Console, LineSource, MockConsole, MockLineSource, ReadlineSource, StdoutConsole};
pub use store::{Event, EventStore};
pub use substitute::substitute;
pub use term::{Parsed, TermReader};
