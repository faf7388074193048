//! Cache Entry Module
//!
//! Defines a single stored response body and the instant it was written.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// A raw response body stamped with its creation time.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored bytes
    pub value: Vec<u8>,
    /// When the entry was written (monotonic clock)
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current instant.
    pub fn new(value: Vec<u8>) -> Self {
        Self {
            value,
            created_at: Instant::now(),
        }
    }

    // == Age ==
    /// Returns how long ago the entry was written, as seen from `now`.
    ///
    /// Saturates to zero if `now` is earlier than the creation instant.
    pub fn age_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Expired ==
    /// Checks whether the entry has lived for at least `interval` at `now`.
    ///
    /// Boundary condition: an entry is expired once its age reaches the
    /// interval, so a sweep firing exactly one interval after a write removes
    /// it. Entries strictly younger than `interval` are never expired.
    pub fn is_expired_at(&self, now: Instant, interval: Duration) -> bool {
        self.age_at(now) >= interval
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_entry_creation() {
        let entry = CacheEntry::new(b"payload".to_vec());

        assert_eq!(entry.value, b"payload");
        assert_eq!(entry.age_at(Instant::now()), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_entry_age_advances_with_clock() {
        let entry = CacheEntry::new(Vec::new());

        tokio::time::advance(Duration::from_secs(3)).await;

        assert_eq!(entry.age_at(Instant::now()), Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_entry_not_expired_before_interval() {
        let entry = CacheEntry::new(Vec::new());

        tokio::time::advance(Duration::from_secs(4)).await;

        assert!(!entry.is_expired_at(Instant::now(), Duration::from_secs(5)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_expiration_boundary_condition() {
        let entry = CacheEntry::new(Vec::new());
        let interval = Duration::from_secs(5);

        // One millisecond short of the interval survives
        let boundary = entry.created_at + interval;
        let before = boundary - Duration::from_millis(1);
        assert!(!entry.is_expired_at(before, interval));

        // Exactly one interval old is expired
        assert!(entry.is_expired_at(boundary, interval));
    }

    #[tokio::test(start_paused = true)]
    async fn test_age_saturates_for_earlier_instant() {
        let before = Instant::now();
        tokio::time::advance(Duration::from_secs(1)).await;
        let entry = CacheEntry::new(Vec::new());

        assert_eq!(entry.age_at(before), Duration::ZERO);
    }
}
