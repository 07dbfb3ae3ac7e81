//! Trailing-edge debounced search input

use crate::timer::{Clock, TimerSet};
use std::time::Duration;

/// Receives committed search queries
pub type SearchCallback = Box<dyn FnMut(&str)>;

/// Delays used by [`DebouncedSearch`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchTimings {
    /// Quiet period before the raw input is committed
    pub debounce: Duration,
    /// How long the typing indicator stays on after a keystroke
    pub typing_indicator: Duration,
}

impl Default for SearchTimings {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(300),
            typing_indicator: Duration::from_millis(500),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SearchTimer {
    Commit,
    TypingIndicator,
}

/// Turns keystrokes into a rate-limited stream of search queries
///
/// The callback runs once per quiet period, with the input as it stood at
/// the last keystroke, and never twice in a row with the same value.
/// [`DebouncedSearch::clear`] bypasses the debounce.
pub struct DebouncedSearch<C: Clock> {
    clock: C,
    timings: SearchTimings,
    raw_input: String,
    committed_query: String,
    is_typing: bool,
    timers: TimerSet<SearchTimer>,
    on_search: SearchCallback,
}

impl<C: Clock> DebouncedSearch<C> {
    pub fn new(clock: C, timings: SearchTimings, on_search: SearchCallback) -> Self {
        Self {
            clock,
            timings,
            raw_input: String::new(),
            committed_query: String::new(),
            is_typing: false,
            timers: TimerSet::new(),
            on_search,
        }
    }

    pub fn on_input_change(&mut self, text: impl Into<String>) {
        let now = self.clock.now();
        self.raw_input = text.into();
        self.is_typing = true;
        self.timers
            .schedule(SearchTimer::TypingIndicator, now + self.timings.typing_indicator);
        self.timers
            .schedule(SearchTimer::Commit, now + self.timings.debounce);
    }

    pub fn clear(&mut self) {
        self.raw_input.clear();
        self.committed_query.clear();
        self.is_typing = false;
        self.timers.cancel_all();
        tracing::debug!("search cleared");
        (self.on_search)("");
    }

    /// Fire every timer that is due
    pub fn tick(&mut self) {
        let now = self.clock.now();
        while let Some((timer, _)) = self.timers.pop_due(now) {
            match timer {
                SearchTimer::Commit => self.commit(),
                SearchTimer::TypingIndicator => self.is_typing = false,
            }
        }
    }

    fn commit(&mut self) {
        if self.raw_input == self.committed_query {
            return;
        }
        self.committed_query = self.raw_input.clone();
        tracing::debug!(query = %self.committed_query, "search committed");
        (self.on_search)(&self.committed_query);
    }

    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    pub fn committed_query(&self) -> &str {
        &self.committed_query
    }

    pub fn is_typing(&self) -> bool {
        self.is_typing
    }

    pub fn has_pending_commit(&self) -> bool {
        self.timers.is_pending(SearchTimer::Commit)
    }

    pub fn next_deadline(&self) -> Option<std::time::Instant> {
        self.timers.next_deadline()
    }
}
