use core::fmt;
use core::hint;

use crate::error::Full;
use crate::observe::{Cached, Observe};
use crate::ring::Ring;
use crate::sync::{Arc, Ordering};

/// The sending half of a split [`Queue`](crate::Queue).
///
/// Owns its memory of the consumer cursor, so the common non-full path
/// touches no cache line written by the consumer.
pub struct Producer<T, O: Observe = Cached> {
    pub(crate) ring: Arc<Ring<T>>,
    pub(crate) observed: O,
}

/// The receiving half of a split [`Queue`](crate::Queue).
pub struct Consumer<T, O: Observe = Cached> {
    pub(crate) ring: Arc<Ring<T>>,
    pub(crate) observed: O,
}

impl<T, O: Observe> Producer<T, O> {
    /// Attempts to enqueue `value` without waiting.
    ///
    /// Returns [`Full`] holding `value` if the consumer has not freed a slot.
    /// Nothing is written in that case.
    #[inline]
    pub fn offer(&mut self, value: T) -> Result<(), Full<T>> {
        let ring = &*self.ring;
        let pos = ring.producer.load(Ordering::Relaxed);
        let next = ring.index.advance(pos);

        if self.observed.blocked(next, &ring.consumer) {
            return Err(Full(value));
        }

        // SAFETY: `next != consumer`, so `pos` is outside `[consumer, producer)`
        // and the consumer will not touch it until the store below.
        unsafe { ring.write(pos, value) };
        ring.producer.store(next, Ordering::Release);
        Ok(())
    }

    /// Busy-spins on [`offer`](Self::offer) until `value` is enqueued.
    pub fn send(&mut self, mut value: T) {
        loop {
            match self.offer(value) {
                Ok(()) => return,
                Err(Full(rejected)) => {
                    value = rejected;
                    hint::spin_loop();
                }
            }
        }
    }

    /// Usable capacity.
    pub fn capacity(&self) -> usize {
        self.ring.index.capacity()
    }
}

impl<T, O: Observe> Consumer<T, O> {
    /// Attempts to dequeue the oldest element without waiting.
    ///
    /// Returns `None` if the producer has not published anything new.
    #[inline]
    pub fn poll(&mut self) -> Option<T> {
        let ring = &*self.ring;
        let pos = ring.consumer.load(Ordering::Relaxed);

        if self.observed.blocked(pos, &ring.producer) {
            return None;
        }

        // SAFETY: `pos != producer` after an acquire of the producer cursor,
        // so slot `pos` was initialized and its write is visible here.
        let value = unsafe { ring.read(pos) };
        ring.consumer.store(ring.index.advance(pos), Ordering::Release);
        Some(value)
    }

    /// Busy-spins on [`poll`](Self::poll) until an element arrives.
    pub fn recv(&mut self) -> T {
        loop {
            if let Some(value) = self.poll() {
                return value;
            }
            hint::spin_loop();
        }
    }

    /// Polls until the queue is observed empty.
    pub fn drain(&mut self) -> Drain<'_, T, O> {
        Drain { consumer: self }
    }

    /// Usable capacity.
    pub fn capacity(&self) -> usize {
        self.ring.index.capacity()
    }
}

/// Iterator returned by [`Consumer::drain`].
pub struct Drain<'a, T, O: Observe = Cached> {
    consumer: &'a mut Consumer<T, O>,
}

impl<T, O: Observe> Iterator for Drain<'_, T, O> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.consumer.poll()
    }
}

impl<T, O: Observe> fmt::Debug for Producer<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Producer")
            .field("capacity", &self.capacity())
            .finish_non_exhaustive()
    }
}

impl<T, O: Observe> fmt::Debug for Consumer<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Consumer")
            .field("capacity", &self.capacity())
            .finish_non_exhaustive()
    }
}
