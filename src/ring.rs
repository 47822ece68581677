use crate::{
    consumer::Consumer,
    cursors::{CursorPair, Snapshot},
    halves::{Reader, Writer},
    producer::Producer,
    raw::RawRing,
    storage::{Container, Storage},
    utils::capacity_mask,
};
use core::sync::atomic::Ordering;

#[cfg(not(feature = "portable-atomic"))]
use core::sync::atomic::AtomicBool;
#[cfg(feature = "portable-atomic")]
use portable_atomic::AtomicBool;

#[cfg(all(feature = "alloc", not(feature = "portable-atomic")))]
use alloc::sync::Arc;
#[cfg(all(feature = "alloc", feature = "portable-atomic"))]
use portable_atomic_util::Arc;

/// Largest supported capacity exponent; cursors are 16-bit.
pub const MAX_EXPONENT: u8 = 16;

/// Fixed-capacity SPSC byte FIFO over caller-owned storage.
///
/// The buffer is bound to a container and a capacity exponent `N`: capacity
/// is `2^N` bytes of which `2^N - 1` are usable, `front`/`back` cursors are
/// masked on every advance. Exponent `0` gives a valid zero-capacity buffer
/// that rejects every push and never yields data, representing a transfer
/// direction that has not been started yet.
///
/// The owning buffer can be driven directly through `&mut self`, or split
/// into [`Writer`]/[`Reader`] halves that may run in two contexts at once —
/// e.g. an interrupt handler and the main loop:
///
/// ```
/// use circbuf::{traits::*, RingBuffer};
///
/// let mut storage = [0u8; 16];
/// let mut ring = RingBuffer::new(&mut storage[..], 4);
/// let (mut tx, mut rx) = ring.split_ref();
///
/// assert_eq!(tx.try_push(0x2a), Ok(()));
/// assert_eq!(rx.try_pop(), Some(0x2a));
/// assert_eq!(rx.try_pop(), None);
/// ```
pub struct RingBuffer<C: Container> {
    storage: Storage<C>,
    cursors: CursorPair,
    fault: AtomicBool,
    mask: u16,
}

impl<C: Container> RingBuffer<C> {
    /// Binds `container` as backing storage with capacity `2^exponent`.
    ///
    /// The container must hold at least `2^exponent` bytes; with exponent
    /// `0` it may be empty. The buffer owns the container exclusively until
    /// [`rebind`](Self::rebind) or [`into_inner`](Self::into_inner).
    ///
    /// # Panics
    ///
    /// If `exponent > 16` or the container is shorter than the capacity.
    /// Both are integration bugs, not runtime conditions.
    pub fn new(container: C, exponent: u8) -> Self {
        let mask = capacity_mask(container.as_ref().len(), exponent);
        Self {
            storage: Storage::new(container),
            cursors: CursorPair::new(),
            fault: AtomicBool::new(false),
            mask,
        }
    }

    /// Replaces the backing storage and capacity, returning the previous
    /// container. Cursors and the fault flag are fully reset; nothing of
    /// the prior state survives.
    ///
    /// # Panics
    ///
    /// Same contract as [`new`](Self::new).
    pub fn rebind(&mut self, container: C, exponent: u8) -> C {
        let mask = capacity_mask(container.as_ref().len(), exponent);
        let old = core::mem::replace(self.storage.get_mut(), container);
        self.mask = mask;
        self.cursors.reset();
        *self.fault.get_mut() = false;
        old
    }

    /// Re-arms the buffer over the storage it already holds, discarding all
    /// content and the fault flag.
    ///
    /// # Panics
    ///
    /// Same contract as [`new`](Self::new).
    pub fn reset(&mut self, exponent: u8) {
        self.mask = capacity_mask(self.storage.get_mut().as_ref().len(), exponent);
        self.cursors.reset();
        *self.fault.get_mut() = false;
    }

    /// Releases the backing storage to the caller.
    pub fn into_inner(self) -> C {
        self.storage.into_inner()
    }

    /// Splits into borrow-checked writer and reader halves.
    ///
    /// The halves may be handed to two different execution contexts; each
    /// is the sole owner of its cursor.
    pub fn split_ref(&mut self) -> (Writer<&Self>, Reader<&Self>) {
        let this = &*self;
        unsafe { (Writer::new(this), Reader::new(this)) }
    }

    /// Consuming variant of [`split_ref`](Self::split_ref): the halves
    /// share ownership of the buffer.
    #[cfg(feature = "alloc")]
    pub fn split(self) -> (Writer<Arc<Self>>, Reader<Arc<Self>>) {
        let rc = Arc::new(self);
        unsafe { (Writer::new(rc.clone()), Reader::new(rc)) }
    }
}

impl<C: Container> RawRing for RingBuffer<C> {
    #[inline]
    fn capacity(&self) -> usize {
        // Mask 0 can only mean exponent 0: every bound exponent yields a
        // mask of at least 1.
        match self.mask {
            0 => 0,
            mask => mask as usize + 1,
        }
    }

    #[inline]
    fn mask(&self) -> u16 {
        self.mask
    }

    #[inline]
    fn snapshot(&self) -> Snapshot {
        self.cursors.load()
    }

    #[inline]
    unsafe fn set_back(&self, value: u16) {
        self.cursors.store_back(value);
    }

    #[inline]
    unsafe fn set_front(&self, value: u16) {
        self.cursors.store_front(value);
    }

    #[inline]
    unsafe fn drop_unread(&self) {
        self.cursors.collapse();
    }

    #[inline]
    fn set_fault(&self) {
        self.fault.store(true, Ordering::Release);
    }

    #[inline]
    fn take_fault(&self) -> bool {
        self.fault.swap(false, Ordering::AcqRel)
    }

    unsafe fn unsafe_slices(&self, index: u16, len: usize) -> (&mut [u8], &mut [u8]) {
        let index = index as usize;
        let head = usize::min(len, self.capacity() - index);
        (self.storage.slice(index, head), self.storage.slice(0, len - head))
    }
}

impl<C: Container> Producer for RingBuffer<C> {}
impl<C: Container> Consumer for RingBuffer<C> {}

impl<const N: usize> Default for RingBuffer<[u8; N]> {
    /// Array-backed buffer using the whole array as capacity.
    ///
    /// `N` must be zero or a power of two not above 65536; note that `N = 1`
    /// maps to exponent 0, i.e. an unbound buffer.
    fn default() -> Self {
        Self::new([0; N], crate::utils::exponent_of(N))
    }
}
