//! Configuration constants and utilities for bangline
//!
//! This module contains the tunables of the history subsystem: the default
//! retention depth and the prompt token that is replaced with the next
//! event number.

/// Default number of history events retained simultaneously
pub const DEFAULT_HISTORY_DEPTH: usize = 15;

/// Environment variable name for overriding the history depth
pub const HISTORY_DEPTH_ENV_VAR: &str = "BANGLINE_HISTORY_DEPTH";

/// Token inside a prompt template that is replaced with the next event number
pub const PROMPT_EVENT_TOKEN: &str = "%!";

/// Get the history depth, checking environment variable first, then falling back to default
pub fn get_history_depth() -> usize {
    std::env::var(HISTORY_DEPTH_ENV_VAR)
        .ok()
        .and_then(|val| val.parse().ok())
        .filter(|&depth| depth > 0)
        .unwrap_or(DEFAULT_HISTORY_DEPTH)
}
