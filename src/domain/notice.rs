//! Transient user-facing status notices.

use std::time::{Duration, Instant};

/// How loud a notice should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Neutral progress information.
    Info,
    /// A state-changing operation completed.
    Success,
    /// Something degraded but the operation continued.
    Warning,
    /// An operation was rejected or failed.
    Error,
}

/// A status message with a fixed lifetime.
#[derive(Debug, Clone)]
pub struct Notice {
    /// The message text.
    pub message: String,
    /// Rendering severity.
    pub severity: Severity,
    /// When the notice was posted.
    pub posted_at: Instant,
}

impl Notice {
    /// Create a notice posted now.
    #[must_use]
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
            posted_at: Instant::now(),
        }
    }

    /// Whether the notice has outlived `ttl` as of `now`.
    #[must_use]
    pub fn expired(&self, ttl: Duration, now: Instant) -> bool {
        now.duration_since(self.posted_at) >= ttl
    }
}
