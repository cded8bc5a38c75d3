use core::fmt;

use thiserror::Error;

/// Rejected queue construction.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CapacityError {
    /// A queue must hold at least one element.
    #[error("capacity must be greater than 0")]
    Zero,

    /// The slot array (`capacity + 1` slots) cannot be addressed or allocated.
    #[error("capacity {capacity} is too large to allocate")]
    TooLarge {
        /// The requested capacity.
        capacity: usize,
    },
}

/// The queue was full when [`offer`](crate::Producer::offer) ran.
///
/// Carries the rejected element back to the caller so it can be retried.
/// Fullness is a normal outcome, not a failure of the queue.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Full<T>(pub T);

impl<T> Full<T> {
    /// Returns the element that could not be enqueued.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Debug for Full<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Full(..)")
    }
}

impl<T> fmt::Display for Full<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "queue is full")
    }
}

impl<T> std::error::Error for Full<T> {}

/// [`Queue::reunite`](crate::Queue::reunite) was given halves of two different queues.
///
/// Both handles are returned untouched.
#[derive(Error)]
#[error("producer and consumer belong to different queues")]
pub struct ReuniteError<P, C> {
    /// The producer that was passed in.
    pub producer: P,
    /// The consumer that was passed in.
    pub consumer: C,
}

impl<P, C> fmt::Debug for ReuniteError<P, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReuniteError").finish_non_exhaustive()
    }
}
