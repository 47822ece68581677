//! Fixed-capacity single-producer/single-consumer byte FIFO over
//! caller-owned storage, designed for moving bytes between an interrupt
//! handler and a main context without locks, blocking or allocation.
//!
//! Capacity is always a power of two (bound from an exponent in `0..=16`),
//! so wraparound is a mask instead of a division. One slot is reserved to
//! tell an empty buffer from a full one, so a buffer of capacity `2^N`
//! holds at most `2^N - 1` bytes. Both cursors live in a single 32-bit
//! atomic word, so either side always observes the other's cursor together
//! with its own in one load, never torn.
//!
//! A rejected single-byte push records a sticky fault that stays set until
//! [`check_fault`](traits::Consumer::check_fault) is called, which is how a
//! receive interrupt reports data loss long after it happened. Bulk
//! transfers clamp to the available space instead and never fault.
//!
//! ```
//! use circbuf::{traits::*, StaticRing};
//!
//! let mut ring = StaticRing::<8>::default();
//! let (mut tx, mut rx) = ring.split_ref();
//!
//! assert_eq!(tx.push_slice(b"hello"), 5);
//! assert_eq!(tx.try_push(b'!'), Ok(()));
//!
//! let mut buf = [0; 8];
//! assert_eq!(rx.pop_slice(&mut buf), 6);
//! assert_eq!(&buf[..6], b"hello!");
//! ```

#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod alias;
pub mod consumer;
mod cursors;
pub mod halves;
pub mod producer;
pub mod raw;
pub mod ring;
pub mod storage;
mod utils;

#[cfg(test)]
mod tests;

pub use alias::*;
pub use cursors::Snapshot;
pub use halves::{Reader, Writer};
pub use ring::{RingBuffer, MAX_EXPONENT};

pub mod traits {
    //! Operation traits, for glob import.
    pub use crate::{consumer::Consumer, producer::Producer, raw::RawRing};
}
