//! # Event Store
//!
//! A capacity-bounded, numbered log of past input lines. Each accepted line
//! becomes an [`Event`] with a monotonically increasing number; once the log
//! would exceed its configured depth, the event numbered `new - depth` is
//! evicted. Eviction is by direct index arithmetic rather than
//! "oldest present", so gaps left by suppressed stores or a depth change
//! are tolerated and never back-filled.

use crate::config;
use std::collections::BTreeMap;

/// One historical input line with its assigned sequence number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    number: u64,
    text: String,
}

impl Event {
    /// Sequence number assigned when the line was recorded
    pub fn number(&self) -> u64 {
        self.number
    }

    /// The recorded line
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Capacity-bounded log of numbered input lines
///
/// One store exists per session and is injected into the controller and the
/// expansion parser; there is no process-wide singleton.
#[derive(Debug, Clone)]
pub struct EventStore {
    events: BTreeMap<u64, Event>,
    last_event_number: u64,
    depth: usize,
}

impl EventStore {
    /// Create an empty store with the default retention depth
    pub fn new() -> Self {
        Self::with_depth(config::DEFAULT_HISTORY_DEPTH)
    }

    /// Create an empty store retaining at most `depth` events
    pub fn with_depth(depth: usize) -> Self {
        Self {
            events: BTreeMap::new(),
            last_event_number: 0,
            depth: depth.max(1),
        }
    }

    /// Record a line, allocate its event number, and prune the store
    ///
    /// Returns the allocated number. Pruning removes exactly the event
    /// numbered `allocated - depth`, if present.
    pub fn append(&mut self, text: &str) -> u64 {
        let number = self.last_event_number + 1;
        self.last_event_number = number;
        self.events.insert(
            number,
            Event {
                number,
                text: text.to_string(),
            },
        );
        if let Some(evicted) = number.checked_sub(self.depth as u64) {
            if evicted > 0 {
                self.events.remove(&evicted);
            }
        }
        number
    }

    /// Look up an event by its exact number
    pub fn get(&self, number: u64) -> Option<&Event> {
        self.events.get(&number)
    }

    /// The event with the highest stored number, if any
    pub fn latest(&self) -> Option<&Event> {
        self.events.values().next_back()
    }

    /// First event satisfying `pred`, scanning newest-first
    ///
    /// Newest-first scan order gives prefix and substring recall the
    /// most-recent-match semantics users expect from a shell.
    pub fn find<P>(&self, pred: P) -> Option<&Event>
    where
        P: Fn(&Event) -> bool,
    {
        self.events.values().rev().find(|event| pred(event))
    }

    /// Retained events inside the current depth window, ascending by number
    ///
    /// Stale events below `last_event_number - depth + 1` (possible after a
    /// mid-session depth change) are excluded from the listing even though
    /// they remain in the store until evicted.
    pub fn list(&self) -> impl Iterator<Item = &Event> {
        let low = (self.last_event_number + 1)
            .saturating_sub(self.depth as u64)
            .max(1);
        self.events.range(low..).map(|(_, event)| event)
    }

    /// Empty the store and reset the event counter to zero
    pub fn clear(&mut self) {
        self.events.clear();
        self.last_event_number = 0;
    }

    /// Number assigned to the most recently appended event (0 if none yet)
    pub fn last_event_number(&self) -> u64 {
        self.last_event_number
    }

    /// Number of events currently retained
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the store currently retains no events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Maximum number of retained events
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Change the retention depth for subsequent appends
    ///
    /// Existing events are not re-pruned; a shrink leaves stale entries in
    /// place until direct-index eviction reaches them.
    pub fn set_depth(&mut self, depth: usize) {
        self.depth = depth.max(1);
    }
}

impl Default for EventStore {
    fn default() -> Self {
        Self::new()
    }
}
