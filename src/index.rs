//! Ring index arithmetic.
//!
//! The slot array holds `capacity + 1` slots. One slot is always left
//! vacant, so `producer == consumer` means empty and
//! `advance(producer) == consumer` means full without a separate counter.

use crate::error::CapacityError;

/// Wraparound arithmetic over a fixed number of slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RingIndex {
    slots: usize,
}

impl RingIndex {
    /// Validates `capacity` for elements of `elem_size` bytes.
    pub(crate) fn for_capacity(capacity: usize, elem_size: usize) -> Result<Self, CapacityError> {
        if capacity == 0 {
            return Err(CapacityError::Zero);
        }
        let slots = capacity
            .checked_add(1)
            .ok_or(CapacityError::TooLarge { capacity })?;
        match slots.checked_mul(elem_size) {
            Some(bytes) if bytes <= isize::MAX as usize => Ok(RingIndex { slots }),
            _ => Err(CapacityError::TooLarge { capacity }),
        }
    }

    /// Number of slots, sentinel included.
    #[inline]
    pub(crate) const fn slots(self) -> usize {
        self.slots
    }

    /// Usable capacity.
    #[inline]
    pub(crate) const fn capacity(self) -> usize {
        self.slots - 1
    }

    /// The position after `pos`, wrapping to 0 past the last slot.
    #[inline(always)]
    pub(crate) const fn advance(self, pos: usize) -> usize {
        let next = pos + 1;
        if next == self.slots {
            0
        } else {
            next
        }
    }

    /// Occupied slots in the circular range `[consumer, producer)`.
    #[inline]
    pub(crate) const fn occupied(self, consumer: usize, producer: usize) -> usize {
        if producer >= consumer {
            producer - consumer
        } else {
            self.slots - consumer + producer
        }
    }
}
