//! turbo_spsc - bounded lock-free single-producer single-consumer ring buffer
//!
//! One producer and one consumer hand elements over through a fixed slot
//! array of `capacity + 1` slots. Each side publishes its own cursor with
//! `Release` and reads the other's with `Acquire`; nothing else is shared.
//! Each handle also remembers the last remote cursor it saw, so the common
//! path (queue neither full nor empty) reads no memory written by the other
//! thread.
//!
//! `offer` and `poll` never wait. A full or empty queue is an ordinary
//! return value, and retry policy (busy-spin, backoff, give up) belongs to
//! the caller.
//!
//! ```
//! use std::thread;
//! use turbo_spsc::Queue;
//!
//! let (mut tx, mut rx) = Queue::new(16)?.split();
//!
//! let producer = thread::spawn(move || {
//!     for i in 0..100u32 {
//!         while tx.offer(i).is_err() {
//!             std::hint::spin_loop();
//!         }
//!     }
//! });
//!
//! for expected in 0..100u32 {
//!     assert_eq!(rx.recv(), expected);
//! }
//! producer.join().unwrap();
//! # Ok::<(), turbo_spsc::CapacityError>(())
//! ```
#![warn(missing_docs)]

mod error;
mod handle;
mod index;
mod observe;
mod queue;
mod ring;
mod sync;

pub use error::{CapacityError, Full, ReuniteError};
pub use handle::{Consumer, Drain, Producer};
pub use observe::{Cached, Observe, Uncached};
pub use queue::{Queue, UncachedQueue};
