//! Log sinks for user-facing export messages
//!
//! Export steps report problems in the user's project (conflicting sources,
//! ignored files) through a [`LogSink`] instead of calling `tracing` directly,
//! so callers decide where those messages go.

use std::cell::RefCell;

use tracing::Level;

/// Destination for leveled export messages
pub trait LogSink {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// Forwards messages to the global `tracing` subscriber
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn info(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!("{}", message);
    }
}

/// Keeps every message in memory, in the order received
#[derive(Debug, Default)]
pub struct MessageLog {
    messages: RefCell<Vec<(Level, String)>>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages, or only those at `level`
    pub fn messages(&self, level: Option<Level>) -> Vec<String> {
        self.messages
            .borrow()
            .iter()
            .filter(|(l, _)| level.map_or(true, |want| *l == want))
            .map(|(_, m)| m.clone())
            .collect()
    }

    /// Most recent message at `level`
    pub fn last(&self, level: Level) -> Option<String> {
        self.messages
            .borrow()
            .iter()
            .rev()
            .find(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
    }

    fn push(&self, level: Level, message: &str) {
        self.messages.borrow_mut().push((level, message.to_string()));
    }
}

impl LogSink for MessageLog {
    fn info(&self, message: &str) {
        self.push(Level::INFO, message);
    }

    fn warn(&self, message: &str) {
        self.push(Level::WARN, message);
    }

    fn error(&self, message: &str) {
        self.push(Level::ERROR, message);
    }
}
