use crate::{
    halves::{Reader, Writer},
    ring::RingBuffer,
};

#[cfg(all(feature = "alloc", not(feature = "portable-atomic")))]
use alloc::sync::Arc;
#[cfg(all(feature = "alloc", feature = "portable-atomic"))]
use portable_atomic_util::Arc;

/// Ring buffer over an owned byte array.
pub type StaticRing<const N: usize> = RingBuffer<[u8; N]>;

/// Writer half of [`StaticRing`].
pub type StaticWriter<'a, const N: usize> = Writer<&'a StaticRing<N>>;

/// Reader half of [`StaticRing`].
pub type StaticReader<'a, const N: usize> = Reader<&'a StaticRing<N>>;

/// Ring buffer borrowing a byte slice.
pub type SliceRing<'a> = RingBuffer<&'a mut [u8]>;

/// Heap-backed ring buffer.
#[cfg(feature = "alloc")]
pub type HeapRing = RingBuffer<alloc::boxed::Box<[u8]>>;

/// Writer half of [`HeapRing`].
#[cfg(feature = "alloc")]
pub type HeapWriter = Writer<Arc<HeapRing>>;

/// Reader half of [`HeapRing`].
#[cfg(feature = "alloc")]
pub type HeapReader = Reader<Arc<HeapRing>>;

#[cfg(feature = "alloc")]
impl HeapRing {
    /// Allocates zeroed storage for capacity `2^exponent`.
    ///
    /// # Panics
    ///
    /// If `exponent > 16`.
    pub fn alloc(exponent: u8) -> Self {
        let capacity = match exponent {
            0 => 0,
            n => 1usize << n,
        };
        Self::new(alloc::vec![0u8; capacity].into_boxed_slice(), exponent)
    }
}
