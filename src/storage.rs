use core::cell::UnsafeCell;

/// Abstract caller-owned byte container for the ring buffer.
pub trait Container: AsRef<[u8]> + AsMut<[u8]> {}
impl<C> Container for C where C: AsRef<[u8]> + AsMut<[u8]> {}

/// Byte storage shared between the writer and reader roles.
///
/// The ring buffer owns the container exclusively for the binding's
/// lifetime. Cursor discipline keeps the mutable regions handed out to the
/// two roles disjoint.
pub(crate) struct Storage<C: Container> {
    container: UnsafeCell<C>,
}

unsafe impl<C: Container + Send> Sync for Storage<C> {}

impl<C: Container> Storage<C> {
    pub fn new(container: C) -> Self {
        Self {
            container: UnsafeCell::new(container),
        }
    }

    pub fn get_mut(&mut self) -> &mut C {
        self.container.get_mut()
    }

    pub fn into_inner(self) -> C {
        self.container.into_inner()
    }

    /// # Safety
    ///
    /// The range must not overlap any other slice alive at the same time.
    #[allow(clippy::mut_from_ref)]
    pub unsafe fn slice(&self, start: usize, len: usize) -> &mut [u8] {
        &mut (&mut *self.container.get()).as_mut()[start..start + len]
    }
}
