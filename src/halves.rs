use crate::{
    consumer::Consumer,
    producer::Producer,
    raw::{delegate_raw_ring, RawRing},
};
use core::ops::Deref;

/// Writer half of a split ring buffer: the only handle allowed to advance
/// `back`.
pub struct Writer<R: Deref>
where
    R::Target: RawRing,
{
    base: R,
}

/// Reader half of a split ring buffer: the only handle allowed to advance
/// `front`.
pub struct Reader<R: Deref>
where
    R::Target: RawRing,
{
    base: R,
}

impl<R: Deref> Writer<R>
where
    R::Target: RawRing,
{
    /// # Safety
    ///
    /// At most one writer half may exist per ring buffer at a time.
    pub unsafe fn new(base: R) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &R {
        &self.base
    }

    pub fn into_base(self) -> R {
        self.base
    }
}

impl<R: Deref> Reader<R>
where
    R::Target: RawRing,
{
    /// # Safety
    ///
    /// At most one reader half may exist per ring buffer at a time.
    pub unsafe fn new(base: R) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &R {
        &self.base
    }

    pub fn into_base(self) -> R {
        self.base
    }
}

impl<R: Deref> RawRing for Writer<R>
where
    R::Target: RawRing,
{
    delegate_raw_ring!();
}

impl<R: Deref> RawRing for Reader<R>
where
    R::Target: RawRing,
{
    delegate_raw_ring!();
}

impl<R: Deref> Producer for Writer<R> where R::Target: RawRing {}
impl<R: Deref> Consumer for Reader<R> where R::Target: RawRing {}

impl<R: Deref> core::fmt::Write for Writer<R>
where
    R::Target: RawRing,
{
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        if self.push_slice(s.as_bytes()) != s.len() {
            Err(core::fmt::Error::default())
        } else {
            Ok(())
        }
    }
}

#[cfg(feature = "std")]
impl<R: Deref> std::io::Write for Writer<R>
where
    R::Target: RawRing,
{
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let n = self.push_slice(buf);
        if n == 0 && !buf.is_empty() {
            Err(std::io::ErrorKind::WouldBlock.into())
        } else {
            Ok(n)
        }
    }
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(feature = "std")]
impl<R: Deref> std::io::Read for Reader<R>
where
    R::Target: RawRing,
{
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let n = self.pop_slice(buf);
        if n == 0 && !buf.is_empty() {
            Err(std::io::ErrorKind::WouldBlock.into())
        } else {
            Ok(n)
        }
    }
}
