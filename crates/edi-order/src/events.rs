//! Event sink capability
//!
//! Parser, generator and pipeline report milestones through an injected
//! [`EventSink`] instead of reaching for a process-wide logger. The
//! binary wires in [`TracingSink`]; tests use [`RecordingSink`].

use std::cell::RefCell;

/// Severity of an emitted event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Error,
}

/// Receiver of informational and error messages
pub trait EventSink {
    /// Report a milestone
    fn info(&self, message: &str);

    /// Report a failure
    fn error(&self, message: &str);
}

impl<T: EventSink + ?Sized> EventSink for &T {
    fn info(&self, message: &str) {
        (**self).info(message);
    }

    fn error(&self, message: &str) {
        (**self).error(message);
    }
}

impl<T: EventSink + ?Sized> EventSink for Box<T> {
    fn info(&self, message: &str) {
        (**self).info(message);
    }

    fn error(&self, message: &str) {
        (**self).error(message);
    }
}

/// Forwards events to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn info(&self, message: &str) {
        tracing::info!(target: "edi2xml", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "edi2xml", "{message}");
    }
}

/// Discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn info(&self, _message: &str) {}

    fn error(&self, _message: &str) {}
}

/// Keeps every event in memory, in emission order
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: RefCell<Vec<(Level, String)>>,
}

impl RecordingSink {
    /// Create an empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events
    #[must_use]
    pub fn messages(&self) -> Vec<(Level, String)> {
        self.events.borrow().clone()
    }

    /// Recorded informational messages
    #[must_use]
    pub fn infos(&self) -> Vec<String> {
        self.with_level(Level::Info)
    }

    /// Recorded error messages
    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        self.with_level(Level::Error)
    }

    /// Whether any recorded message contains `needle`
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.events.borrow().iter().any(|(_, m)| m.contains(needle))
    }

    fn with_level(&self, level: Level) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    fn record(&self, level: Level, message: &str) {
        self.events.borrow_mut().push((level, message.to_string()));
    }
}

impl EventSink for RecordingSink {
    fn info(&self, message: &str) {
        self.record(Level::Info, message);
    }

    fn error(&self, message: &str) {
        self.record(Level::Error, message);
    }
}
