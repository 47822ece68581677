use crate::raw::RawRing;

/// Writer-role operations.
///
/// Implemented by the owning [`RingBuffer`](crate::RingBuffer) and by
/// [`Writer`](crate::Writer) halves. Methods take `&mut self` so a role
/// handle is driven from exactly one context at a time.
pub trait Producer: RawRing {
    /// Appends one byte.
    ///
    /// On a full (or unbound) buffer the byte is handed back and the sticky
    /// fault flag is raised: a rejected single-byte push counts as
    /// unexpected data loss, unlike [`push_slice`](Self::push_slice)
    /// back-pressure.
    fn try_push(&mut self, byte: u8) -> Result<(), u8> {
        let snapshot = self.snapshot();
        let mask = self.mask();
        if snapshot.unread(mask) < mask as usize {
            unsafe {
                let (head, _) = self.unsafe_slices(snapshot.back, 1);
                head[0] = byte;
                self.set_back(snapshot.back.wrapping_add(1) & mask);
            }
            Ok(())
        } else {
            self.set_fault();
            Err(byte)
        }
    }

    /// Appends bytes from `slice` until it is exhausted or the buffer is
    /// full, whichever comes first, copying in at most two runs around the
    /// wraparound boundary.
    ///
    /// Returns the number of bytes actually written. A short or zero write
    /// is ordinary back-pressure, not a fault; always consult the count.
    fn push_slice(&mut self, slice: &[u8]) -> usize {
        let snapshot = self.snapshot();
        let mask = self.mask() as usize;
        let count = usize::min(mask - snapshot.unread(self.mask()), slice.len());
        if count == 0 {
            return 0;
        }
        unsafe {
            let (head, tail) = self.unsafe_slices(snapshot.back, count);
            head.copy_from_slice(&slice[..head.len()]);
            tail.copy_from_slice(&slice[head.len()..count]);
            self.set_back(((snapshot.back as usize + count) & mask) as u16);
        }
        count
    }
}
