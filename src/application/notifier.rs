//! Transient status messages with auto-expiry.
//!
//! Holds at most one notice at a time. Each `notify` call supersedes the
//! previous notice and restarts the expiry clock, so a pending expiry never
//! clears a newer message.

use std::time::{Duration, Instant};

use crate::domain::{Notice, Severity};

/// Default notice lifetime.
pub const NOTICE_TTL: Duration = Duration::from_secs(4);

/// Single-slot notice holder.
#[derive(Debug)]
pub struct Notifier {
    ttl: Duration,
    current: Option<Notice>,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier {
    /// Create a notifier with the default lifetime.
    #[must_use]
    pub fn new() -> Self {
        Self::with_ttl(NOTICE_TTL)
    }

    /// Create a notifier with a custom lifetime, used by tests.
    #[must_use]
    pub const fn with_ttl(ttl: Duration) -> Self {
        Self { ttl, current: None }
    }

    /// Post a notice, replacing whatever was showing.
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) -> &Notice {
        self.current.insert(Notice::new(message, severity))
    }

    /// The active notice as of `now`, clearing it once expired.
    pub fn current(&mut self, now: Instant) -> Option<&Notice> {
        if let Some(notice) = &self.current {
            if notice.expired(self.ttl, now) {
                self.current = None;
            }
        }
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_visible_immediately() {
        let mut notifier = Notifier::new();
        notifier.notify("Quote added.", Severity::Success);

        let notice = notifier.current(Instant::now()).unwrap();
        assert_eq!(notice.message, "Quote added.");
        assert_eq!(notice.severity, Severity::Success);
    }

    #[test]
    fn test_notice_expires_after_ttl() {
        let mut notifier = Notifier::with_ttl(Duration::from_secs(4));
        notifier.notify("Syncing...", Severity::Info);

        let later = Instant::now() + Duration::from_secs(5);
        assert!(notifier.current(later).is_none());
        // Stays cleared afterwards
        assert!(notifier.current(later).is_none());
    }

    #[test]
    fn test_newer_notice_supersedes_pending_expiry() {
        let mut notifier = Notifier::with_ttl(Duration::from_secs(4));
        notifier.notify("first", Severity::Info);

        // Replace just before the first would expire
        std::thread::sleep(Duration::from_millis(10));
        notifier.notify("second", Severity::Success);
        let first_deadline = Instant::now() + Duration::from_millis(3995);

        let notice = notifier.current(first_deadline).unwrap();
        assert_eq!(notice.message, "second");
    }
}
