//! Assistive-technology announcements.
//!
//! Picker changes are announced through a polite live region: a short list
//! of messages, each visible for a fixed time-to-live and then dropped.

use std::time::{Duration, Instant};

/// How long an announcement stays in the live region by default.
pub const DEFAULT_ANNOUNCEMENT_TTL: Duration = Duration::from_millis(1000);

/// A posted message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    /// Text read to the user
    pub message: String,
    /// When the message was posted
    pub posted_at: Instant,
}

/// Buffer of live announcements.
#[derive(Debug, Clone)]
pub struct LiveRegion {
    ttl: Duration,
    entries: Vec<Announcement>,
}

impl LiveRegion {
    /// Create a region whose messages expire after `ttl`.
    #[must_use]
    pub const fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Vec::new(),
        }
    }

    /// Message time-to-live.
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Post a message now.
    pub fn announce(&mut self, message: impl Into<String>) {
        self.announce_at(message, Instant::now());
    }

    /// Post a message with an explicit timestamp.
    pub fn announce_at(&mut self, message: impl Into<String>, now: Instant) {
        let message = message.into();
        tracing::info!("{}", message);
        self.prune(now);
        self.entries.push(Announcement {
            message,
            posted_at: now,
        });
    }

    /// Messages still live at `now`, oldest first.
    pub fn active(&self, now: Instant) -> impl Iterator<Item = &Announcement> {
        self.entries
            .iter()
            .filter(move |entry| now.saturating_duration_since(entry.posted_at) < self.ttl)
    }

    /// Most recent message still live at `now`.
    pub fn latest(&self, now: Instant) -> Option<&Announcement> {
        self.active(now).last()
    }

    /// Most recent message regardless of expiry.
    pub fn last_message(&self) -> Option<&str> {
        self.entries.last().map(|entry| entry.message.as_str())
    }

    /// Drop messages expired at `now`.
    pub fn prune(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.entries
            .retain(|entry| now.saturating_duration_since(entry.posted_at) < ttl);
    }
}

impl Default for LiveRegion {
    fn default() -> Self {
        Self::new(DEFAULT_ANNOUNCEMENT_TTL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_announcement_expires_after_ttl() {
        let mut region = LiveRegion::new(Duration::from_secs(1));
        let start = Instant::now();

        region.announce_at("Dark mode enabled", start);
        assert_eq!(
            region.latest(start).map(|a| a.message.as_str()),
            Some("Dark mode enabled")
        );

        let later = start + Duration::from_millis(999);
        assert_eq!(region.active(later).count(), 1);

        let expired = start + Duration::from_secs(1);
        assert_eq!(region.active(expired).count(), 0);
        assert!(region.latest(expired).is_none());
    }

    #[test]
    fn test_posting_prunes_expired_entries() {
        let mut region = LiveRegion::new(Duration::from_millis(100));
        let start = Instant::now();

        region.announce_at("one", start);
        region.announce_at("two", start + Duration::from_millis(50));
        region.announce_at("three", start + Duration::from_millis(200));

        let now = start + Duration::from_millis(200);
        let live: Vec<_> = region.active(now).map(|a| a.message.clone()).collect();
        assert_eq!(live, vec!["three".to_string()]);
        assert_eq!(region.last_message(), Some("three"));
    }

    #[test]
    fn test_default_ttl() {
        assert_eq!(LiveRegion::default().ttl(), DEFAULT_ANNOUNCEMENT_TTL);
    }
}
