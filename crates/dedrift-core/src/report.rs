//! Convergence narration sinks.

use std::sync::Mutex;

/// Sink for human-readable convergence narration.
///
/// Narration has no effect on control flow; engines report what they did
/// (or, in dry-run, what they would have done) and no more.
pub trait Reporter: Send + Sync {
    /// An action was taken or would be taken.
    fn info(&self, msg: &str);

    /// Nothing to do, or supporting detail.
    fn debug(&self, msg: &str);
}

// Allows one reporter to be shared between an engine and its observer.
impl<R: Reporter + ?Sized> Reporter for std::sync::Arc<R> {
    fn info(&self, msg: &str) {
        (**self).info(msg);
    }

    fn debug(&self, msg: &str) {
        (**self).debug(msg);
    }
}

/// Reporter forwarding narration to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }
}

/// Reporter that records narration in memory, for assertions in tests.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    lines: Mutex<Vec<(Level, String)>>,
}

/// Narration level recorded by [`MemoryReporter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Info,
    Debug,
}

impl MemoryReporter {
    /// Create an empty reporter.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded `info` lines, in order.
    pub fn info_lines(&self) -> Vec<String> {
        self.lines_at(Level::Info)
    }

    /// All recorded `debug` lines, in order.
    pub fn debug_lines(&self) -> Vec<String> {
        self.lines_at(Level::Debug)
    }

    fn lines_at(&self, level: Level) -> Vec<String> {
        self.lines
            .lock()
            .unwrap()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, msg)| msg.clone())
            .collect()
    }
}

impl Reporter for MemoryReporter {
    fn info(&self, msg: &str) {
        self.lines.lock().unwrap().push((Level::Info, msg.into()));
    }

    fn debug(&self, msg: &str) {
        self.lines.lock().unwrap().push((Level::Debug, msg.into()));
    }
}
