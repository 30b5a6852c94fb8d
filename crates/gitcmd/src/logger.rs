//! Pluggable debug logging for executed commands.

use std::sync::{Mutex, PoisonError};

/// Sink for the debug trace emitted before every command runs.
pub trait Logger: Send + Sync + std::fmt::Debug {
    /// Record a debug-level message.
    fn debug(&self, message: &str);
}

/// Logger that discards everything. The default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn debug(&self, _message: &str) {}
}

/// Logger forwarding to `tracing` at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn debug(&self, message: &str) {
        tracing::debug!(target: "gitcmd", "{message}");
    }
}

/// Stub logger for testing that keeps every message.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    /// Messages received so far.
    pub messages: Mutex<Vec<String>>,
}

impl MemoryLogger {
    /// Copy of the messages received so far.
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Logger for MemoryLogger {
    fn debug(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_record_messages_in_memory_logger() {
        let logger = MemoryLogger::default();
        logger.debug("first");
        logger.debug("second");
        assert_eq!(logger.messages(), vec!["first", "second"]);
    }

    #[test]
    fn test_should_accept_messages_without_sink() {
        NullLogger.debug("dropped");
        TracingLogger.debug("forwarded");
    }
}
