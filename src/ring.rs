//! Slot array and the two cursors shared by a producer and a consumer.

use core::mem::MaybeUninit;

use crossbeam_utils::CachePadded;

use crate::error::CapacityError;
use crate::index::RingIndex;
use crate::sync::{AtomicUsize, Ordering, UnsafeCell};

/// Storage shared by one producer and one consumer.
///
/// Slots in the circular range `[consumer, producer)` are initialized and
/// owned by the consumer side; all other slots are vacant and owned by the
/// producer side. Each cursor is written by exactly one side.
pub(crate) struct Ring<T> {
    buffer: Box<[UnsafeCell<MaybeUninit<T>>]>,
    /// Next slot the producer writes. Released by the producer.
    pub(crate) producer: CachePadded<AtomicUsize>,
    /// Next slot the consumer reads. Released by the consumer.
    pub(crate) consumer: CachePadded<AtomicUsize>,
    pub(crate) index: RingIndex,
}

// SAFETY: a slot is touched by one side at a time, handed over through the
// release/acquire pair on the cursors. Elements move between threads, so
// `T: Send` is required and sufficient.
unsafe impl<T: Send> Send for Ring<T> {}
unsafe impl<T: Send> Sync for Ring<T> {}

impl<T> Ring<T> {
    pub(crate) fn new(capacity: usize) -> Result<Self, CapacityError> {
        let index = RingIndex::for_capacity(capacity, core::mem::size_of::<T>())?;
        let buffer = (0..index.slots())
            .map(|_| UnsafeCell::new(MaybeUninit::uninit()))
            .collect::<Vec<_>>()
            .into_boxed_slice();

        Ok(Ring {
            buffer,
            producer: CachePadded::new(AtomicUsize::new(0)),
            consumer: CachePadded::new(AtomicUsize::new(0)),
            index,
        })
    }

    /// Moves `value` into slot `pos`.
    ///
    /// # Safety
    ///
    /// Caller is the producer and `pos` is its vacant cursor slot.
    #[inline(always)]
    pub(crate) unsafe fn write(&self, pos: usize, value: T) {
        self.buffer.get_unchecked(pos).with_mut(|slot| {
            (*slot).write(value);
        });
    }

    /// Moves the element out of slot `pos`, leaving it vacant.
    ///
    /// # Safety
    ///
    /// Caller is the consumer and `pos` lies in `[consumer, producer)`.
    #[inline(always)]
    pub(crate) unsafe fn read(&self, pos: usize) -> T {
        self.buffer
            .get_unchecked(pos)
            .with(|slot| (*slot).assume_init_read())
    }

    /// Drops every live element and rewinds both cursors to 0.
    ///
    /// # Safety
    ///
    /// No `offer` or `poll` may run concurrently.
    pub(crate) unsafe fn reset(&self) {
        self.drop_live();
        self.producer.store(0, Ordering::Relaxed);
        self.consumer.store(0, Ordering::Relaxed);
    }

    /// Current occupancy. Exact only when neither side is running.
    pub(crate) fn len(&self) -> usize {
        let consumer = self.consumer.load(Ordering::Acquire);
        let producer = self.producer.load(Ordering::Acquire);
        self.index.occupied(consumer, producer)
    }

    unsafe fn drop_live(&self) {
        let producer = self.producer.load(Ordering::Relaxed);
        let mut pos = self.consumer.load(Ordering::Relaxed);
        while pos != producer {
            self.buffer
                .get_unchecked(pos)
                .with_mut(|slot| (*slot).assume_init_drop());
            pos = self.index.advance(pos);
        }
    }
}

impl<T> Drop for Ring<T> {
    fn drop(&mut self) {
        // SAFETY: `&mut self` means both handles are gone.
        unsafe { self.drop_live() }
    }
}
