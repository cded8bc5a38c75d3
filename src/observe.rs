//! How a handle observes the other side's cursor.
//!
//! The producer is blocked when its next position equals the consumer
//! cursor; the consumer is blocked when its own position equals the producer
//! cursor. Both checks share one shape, `probe == remote`, which is what an
//! [`Observe`] policy answers.

use crate::sync::{AtomicUsize, Ordering};

mod sealed {
    pub trait Sealed {}
}

/// Strategy for reading the remote cursor on the hot path.
///
/// Implemented by [`Cached`] and [`Uncached`] only.
pub trait Observe: sealed::Sealed + Default + Send + 'static {
    /// Returns `true` if `probe` equals the remote cursor, re-reading the
    /// remote cursor with `Acquire` before concluding so.
    fn blocked(&mut self, probe: usize, remote: &AtomicUsize) -> bool;

    /// Forgets any remembered remote position. Both cursors must be 0.
    fn reset(&mut self);
}

/// Remembers the last observed remote cursor and re-reads it only when the
/// remembered value would block.
///
/// The remembered value is owned by a single handle, so it is a plain
/// `usize`. A stale value can only be behind the real cursor, which makes the
/// check conservative: it triggers a fresh read, never a skipped one.
#[derive(Debug, Default)]
pub struct Cached {
    seen: usize,
}

impl sealed::Sealed for Cached {}

impl Observe for Cached {
    #[inline(always)]
    fn blocked(&mut self, probe: usize, remote: &AtomicUsize) -> bool {
        if probe != self.seen {
            return false;
        }
        self.seen = remote.load(Ordering::Acquire);
        probe == self.seen
    }

    #[inline]
    fn reset(&mut self) {
        self.seen = 0;
    }
}

/// Reads the remote cursor on every attempt.
///
/// Slower than [`Cached`] under contention, identical in behavior.
#[derive(Debug, Default)]
pub struct Uncached;

impl sealed::Sealed for Uncached {}

impl Observe for Uncached {
    #[inline(always)]
    fn blocked(&mut self, probe: usize, remote: &AtomicUsize) -> bool {
        probe == remote.load(Ordering::Acquire)
    }

    #[inline]
    fn reset(&mut self) {}
}

#[cfg(all(test, not(loom)))]
mod tests {
    use super::*;

    #[test]
    fn cached_skips_remote_when_slack_is_known() {
        let remote = AtomicUsize::new(5);
        let mut cache = Cached::default();
        // Cache says 0, probe 3 differs: no read, not blocked.
        assert!(!cache.blocked(3, &remote));
        assert_eq!(cache.seen, 0);
    }

    #[test]
    fn cached_refreshes_on_apparent_block() {
        let remote = AtomicUsize::new(5);
        let mut cache = Cached::default();
        assert!(!cache.blocked(0, &remote));
        assert_eq!(cache.seen, 5);
        assert!(cache.blocked(5, &remote));
    }

    #[test]
    fn uncached_always_reads() {
        let remote = AtomicUsize::new(2);
        let mut fresh = Uncached;
        assert!(fresh.blocked(2, &remote));
        remote.store(3, Ordering::Relaxed);
        assert!(!fresh.blocked(2, &remote));
    }

    #[test]
    fn reset_clears_memory() {
        let remote = AtomicUsize::new(7);
        let mut cache = Cached::default();
        cache.blocked(0, &remote);
        cache.reset();
        assert_eq!(cache.seen, 0);
    }
}
