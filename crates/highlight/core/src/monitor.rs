//! Logging sink with once-only suppression.

use std::cell::RefCell;
use std::collections::HashSet;

use tracing::{debug, info, warn};

/// Message severity accepted by the sink.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
pub enum Severity {
    Debug,
    Info,
    Warn,
}

/// Log sink shared by registrations on the single query thread.
///
/// `log_once` suppresses repeats of the same message key, so a source that
/// keeps reporting the same invalid value produces exactly one line.
#[derive(Debug, Default)]
pub struct Monitor {
    seen: RefCell<HashSet<String>>,
}

impl Monitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Debug => debug!(target: "highlight::monitor", "{message}"),
            Severity::Info => info!(target: "highlight::monitor", "{message}"),
            Severity::Warn => warn!(target: "highlight::monitor", "{message}"),
        }
    }

    /// Logs the message unless an identical one was already emitted.
    ///
    /// Returns true if the message was actually logged.
    pub fn log_once(&self, severity: Severity, message: String) -> bool {
        if !self.seen.borrow_mut().insert(message.clone()) {
            return false;
        }
        self.log(severity, &message);
        true
    }

    /// Number of distinct messages emitted through `log_once`.
    pub fn once_count(&self) -> usize {
        self.seen.borrow().len()
    }
}
