//! # Bangline - csh-style History Expansion for Interactive REPLs
//!
//! A session-scoped history subsystem: it records lines entered at a
//! prompt, assigns each a monotonically increasing event number, expands
//! csh-style recall syntax (`!!`, `!n`, `!str`, `!?str`, `^old^new`), and
//! hands the expanded line to a downstream term reader.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐  raw line   ┌──────────────────┐  lookups   ┌────────────┐
//! │   Session   │────────────▶│ ExpansionParser  │───────────▶│ EventStore │
//! │ controller  │◀────────────│ (expand module)  │◀───────────│  + Matcher │
//! └─────────────┘  expanded   └──────────────────┘   events   └────────────┘
//!        │                             │
//!        │ Term + Bindings             │ old^new
//!        ▼                             ▼
//! ┌─────────────┐              ┌──────────────────┐
//! │ TermReader  │              │  Substitution    │
//! │ (injected)  │              │     Engine       │
//! └─────────────┘              └──────────────────┘
//! ```
//!
//! The raw-line source, the display layer, and the term reader are
//! collaborators injected through traits, so a session can be driven by a
//! real terminal or entirely by mocks in tests.

pub mod cmd_args;
pub mod config;
pub mod repl;

// Re-export main types for easy access
pub use repl::*;
