//! Bounded history of notable simulation events, newest first.
//!
//! The ecosystem records births, deaths, plant seeding and food drops here so
//! a HUD can show what just happened without parsing the `log` output.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

/// Events kept when no capacity is given.
pub const DEFAULT_CAPACITY: usize = 20;

/// What kind of thing happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// An offspring was born.
    Birth,
    /// An entity died.
    Death,
    /// A plant seeded itself.
    Growth,
    /// Food was dropped into the world.
    Food,
}

/// One entry of the event history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggedEvent {
    /// Tick during which the event happened.
    pub tick: u64,
    /// What happened, in words.
    pub description: String,
    /// Category, used for filtering and coloring.
    pub category: EventCategory,
}

impl fmt::Display for LoggedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.tick, self.description)
    }
}

/// Ring of the most recent events. Older entries fall off the back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventLog {
    entries: VecDeque<LoggedEvent>,
    capacity: usize,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl EventLog {
    /// Creates an empty log holding at most `capacity` events.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Records an event at the front, evicting the oldest one when full.
    pub fn log(&mut self, tick: u64, description: String, category: EventCategory) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_back();
        }
        self.entries.push_front(LoggedEvent {
            tick,
            description,
            category,
        });
    }

    /// Up to `n` of the most recent events, newest first.
    pub fn latest(&self, n: usize) -> impl Iterator<Item = &LoggedEvent> {
        self.entries.iter().take(n)
    }

    /// How many retained events fall in `category`.
    pub fn count(&self, category: EventCategory) -> usize {
        self.entries
            .iter()
            .filter(|event| event.category == category)
            .count()
    }

    /// Forgets every event.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
