//! Run logging.
//!
//! Progress and warnings go to stderr through the [`Logger`] trait; stdout
//! only carries the final output paths. Callers check [`Logger::enabled`]
//! before building per-line messages so quiet runs skip the formatting.

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

/// How much to log, from `-v` flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Always shown.
    Normal,
    /// `-v`: lookup warnings, input and output summaries.
    Verbose,
    /// `-vv`: every skipped flow log line.
    Debug,
}

impl Verbosity {
    pub fn from_count(count: u8) -> Self {
        match count {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    }
}

/// Sink for run messages.
pub trait Logger {
    /// Whether messages at `level` are kept.
    fn enabled(&self, level: Verbosity) -> bool;

    /// Emit a message. Only called for enabled levels.
    fn write(&self, level: Verbosity, message: &str);

    fn log(&self, level: Verbosity, message: &str) {
        if self.enabled(level) {
            self.write(level, message);
        }
    }

    fn info(&self, message: &str) {
        self.log(Verbosity::Normal, message);
    }

    fn verbose(&self, message: &str) {
        self.log(Verbosity::Verbose, message);
    }

    fn debug(&self, message: &str) {
        self.log(Verbosity::Debug, message);
    }

    /// Non-fatal input problem, shown with `-v`.
    fn warn(&self, message: &str) {
        if self.enabled(Verbosity::Verbose) {
            self.write(Verbosity::Verbose, &format!("warning: {}", message));
        }
    }
}

/// Writes enabled messages to stderr.
#[derive(Debug, Clone, Copy)]
pub struct StderrLogger {
    max_level: Verbosity,
}

impl StderrLogger {
    pub fn new(max_level: Verbosity) -> Self {
        Self { max_level }
    }
}

impl Logger for StderrLogger {
    fn enabled(&self, level: Verbosity) -> bool {
        level <= self.max_level
    }

    fn write(&self, _level: Verbosity, message: &str) {
        let _ = writeln!(std::io::stderr().lock(), "{}", message);
    }
}

/// A message kept by [`MockLogger`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: Verbosity,
    pub message: String,
}

/// Records messages in memory. Clones share the same buffer.
#[derive(Debug, Clone)]
pub struct MockLogger {
    max_level: Verbosity,
    entries: Rc<RefCell<Vec<LogEntry>>>,
}

impl Default for MockLogger {
    fn default() -> Self {
        Self::at_level(Verbosity::Debug)
    }
}

impl MockLogger {
    /// Logger that keeps every level.
    pub fn new() -> Self {
        Self::default()
    }

    /// Logger that keeps messages up to `max_level`, like [`StderrLogger`].
    pub fn at_level(max_level: Verbosity) -> Self {
        Self {
            max_level,
            entries: Rc::default(),
        }
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.borrow().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.entries.borrow().iter().map(|e| e.message.clone()).collect()
    }

    pub fn messages_at_level(&self, level: Verbosity) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .filter(|e| e.level == level)
            .map(|e| e.message.clone())
            .collect()
    }

    /// Whether any kept message contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.entries.borrow().iter().any(|e| e.message.contains(needle))
    }
}

impl Logger for MockLogger {
    fn enabled(&self, level: Verbosity) -> bool {
        level <= self.max_level
    }

    fn write(&self, level: Verbosity, message: &str) {
        self.entries.borrow_mut().push(LogEntry {
            level,
            message: message.to_string(),
        });
    }
}

/// Drops everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn enabled(&self, _level: Verbosity) -> bool {
        false
    }

    fn write(&self, _level: Verbosity, _message: &str) {}
}
