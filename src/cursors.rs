use core::sync::atomic::Ordering;
use crossbeam_utils::CachePadded;

#[cfg(not(feature = "portable-atomic"))]
use core::sync::atomic::AtomicU32;
#[cfg(feature = "portable-atomic")]
use portable_atomic::AtomicU32;

const BACK_SHIFT: u32 = 16;
const FRONT_BITS: u32 = 0x0000_ffff;

/// Coherent view of both cursors, obtained from a single atomic load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Snapshot {
    /// Index of the next byte to be read.
    pub front: u16,
    /// Index of the next free slot to be written.
    pub back: u16,
}

impl Snapshot {
    /// Unread byte count for a buffer with the given capacity mask.
    #[inline]
    pub fn unread(&self, mask: u16) -> usize {
        (self.back as usize + mask as usize + 1 - self.front as usize) & mask as usize
    }
}

/// Both cursors packed into one 32-bit word: `front` in the low half,
/// `back` in the high half. A single load yields both cursors at once, so a
/// concurrent update of one half by the other role is either fully visible
/// or not visible at all, never torn. Each half is rewritten only by its
/// owning role.
pub(crate) struct CursorPair {
    word: CachePadded<AtomicU32>,
}

impl CursorPair {
    pub const fn new() -> Self {
        Self {
            word: CachePadded::new(AtomicU32::new(0)),
        }
    }

    #[inline]
    pub fn load(&self) -> Snapshot {
        let word = self.word.load(Ordering::Acquire);
        Snapshot {
            front: word as u16,
            back: (word >> BACK_SHIFT) as u16,
        }
    }

    /// Writer-side update. Preserves whatever `front` the reader has
    /// published meanwhile.
    #[inline]
    pub fn store_back(&self, value: u16) {
        self.rewrite(|word| (word & FRONT_BITS) | ((value as u32) << BACK_SHIFT));
    }

    /// Reader-side update. Preserves whatever `back` the writer has
    /// published meanwhile.
    #[inline]
    pub fn store_front(&self, value: u16) {
        self.rewrite(|word| (word & !FRONT_BITS) | value as u32);
    }

    /// Reader-side `front = back`, discarding all unread bytes in one step.
    #[inline]
    pub fn collapse(&self) {
        self.rewrite(|word| (word & !FRONT_BITS) | (word >> BACK_SHIFT));
    }

    pub fn reset(&mut self) {
        *self.word.get_mut() = 0;
    }

    /// CAS loop touching only the caller's half of the word. Release on
    /// success publishes the storage writes that precede a cursor advance.
    fn rewrite(&self, f: impl Fn(u32) -> u32) {
        let mut word = self.word.load(Ordering::Acquire);
        loop {
            match self
                .word
                .compare_exchange_weak(word, f(word), Ordering::AcqRel, Ordering::Acquire)
            {
                Ok(_) => return,
                Err(actual) => word = actual,
            }
        }
    }
}
