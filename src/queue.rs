use core::fmt;

use crate::error::{CapacityError, Full, ReuniteError};
use crate::handle::{Consumer, Producer};
use crate::observe::{Cached, Observe, Uncached};
use crate::ring::Ring;
use crate::sync::Arc;

/// Bounded single-producer single-consumer queue.
///
/// A `Queue` owns both halves and can be used from one thread directly. Call
/// [`split`](Self::split) to hand the [`Producer`] and [`Consumer`] to two
/// threads; [`reunite`](Self::reunite) puts them back together.
///
/// Operations that look at both cursors at once (`len`, `clear`, ...) live
/// here and take `&mut self`, so they can never overlap a running `offer` or
/// `poll`.
///
/// # Example
///
/// ```
/// use turbo_spsc::Queue;
///
/// let mut queue = Queue::new(2)?;
/// assert!(queue.offer(1).is_ok());
/// assert!(queue.offer(2).is_ok());
/// assert!(queue.offer(3).is_err());
/// assert_eq!(queue.poll(), Some(1));
/// # Ok::<(), turbo_spsc::CapacityError>(())
/// ```
pub struct Queue<T, O: Observe = Cached> {
    producer: Producer<T, O>,
    consumer: Consumer<T, O>,
}

/// A [`Queue`] that re-reads the remote cursor on every attempt.
pub type UncachedQueue<T> = Queue<T, Uncached>;

impl<T> Queue<T> {
    /// Creates a queue holding up to `capacity` elements.
    ///
    /// `capacity` is unsigned, so a negative request never reaches this call.
    ///
    /// # Errors
    ///
    /// [`CapacityError::Zero`] for `capacity == 0`,
    /// [`CapacityError::TooLarge`] if `capacity + 1` slots cannot be allocated.
    pub fn new(capacity: usize) -> Result<Self, CapacityError> {
        Self::with_observer(capacity)
    }
}

impl<T, O: Observe> Queue<T, O> {
    /// Creates a queue with an explicit cursor observation policy.
    ///
    /// # Errors
    ///
    /// Same as [`Queue::new`].
    pub fn with_observer(capacity: usize) -> Result<Self, CapacityError> {
        let ring = match Ring::<T>::new(capacity) {
            Ok(ring) => Arc::new(ring),
            Err(err) => {
                tracing::warn!(capacity, %err, "rejected spsc queue");
                return Err(err);
            }
        };
        tracing::debug!(
            capacity,
            slots = ring.index.slots(),
            observer = core::any::type_name::<O>(),
            "created spsc queue"
        );

        Ok(Queue {
            producer: Producer {
                ring: ring.clone(),
                observed: O::default(),
            },
            consumer: Consumer {
                ring,
                observed: O::default(),
            },
        })
    }

    /// Attempts to enqueue `value`. See [`Producer::offer`].
    #[inline]
    pub fn offer(&mut self, value: T) -> Result<(), Full<T>> {
        self.producer.offer(value)
    }

    /// Attempts to dequeue the oldest element. See [`Consumer::poll`].
    #[inline]
    pub fn poll(&mut self) -> Option<T> {
        self.consumer.poll()
    }

    /// Separates the queue into halves that can move to different threads.
    pub fn split(self) -> (Producer<T, O>, Consumer<T, O>) {
        tracing::trace!(capacity = self.capacity(), "split spsc queue");
        (self.producer, self.consumer)
    }

    /// Rebuilds a queue from the halves produced by [`split`](Self::split).
    ///
    /// Queued elements and both cursor caches are kept.
    ///
    /// # Errors
    ///
    /// Returns both handles if they came from different queues.
    pub fn reunite(
        producer: Producer<T, O>,
        consumer: Consumer<T, O>,
    ) -> Result<Self, ReuniteError<Producer<T, O>, Consumer<T, O>>> {
        if !Arc::ptr_eq(&producer.ring, &consumer.ring) {
            return Err(ReuniteError { producer, consumer });
        }
        tracing::trace!(capacity = producer.capacity(), "reunited spsc queue");
        Ok(Queue { producer, consumer })
    }

    /// Usable capacity, excluding the sentinel slot.
    pub fn capacity(&self) -> usize {
        self.producer.capacity()
    }

    /// Number of queued elements.
    pub fn len(&self) -> usize {
        self.producer.ring.len()
    }

    /// `true` if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `true` if the next [`offer`](Self::offer) would be rejected.
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }

    /// Drops every queued element and rewinds both cursors.
    pub fn clear(&mut self) {
        let dropped = self.len();
        // SAFETY: both halves are owned by `self`, borrowed mutably.
        unsafe { self.producer.ring.reset() };
        self.producer.observed.reset();
        self.consumer.observed.reset();
        tracing::trace!(dropped, "cleared spsc queue");
    }
}

impl<T, O: Observe> fmt::Debug for Queue<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("capacity", &self.capacity())
            .field("len", &self.len())
            .finish()
    }
}
