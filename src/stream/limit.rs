//! Reader that stops after a fixed byte budget.

use std::io::{self, Read};

/// Yields at most `limit` bytes from the underlying reader, then reports
/// end of stream.
///
/// The wrapper never closes the underlying reader. Wrap `&mut R` to keep
/// using the handle afterwards, or take it back with [`into_inner`].
///
/// [`into_inner`]: LimitedReadCloser::into_inner
#[derive(Debug)]
pub struct LimitedReadCloser<R> {
    inner: R,
    remaining: u64,
}

impl<R> LimitedReadCloser<R> {
    pub fn new(inner: R, limit: u64) -> Self {
        Self {
            inner,
            remaining: limit,
        }
    }

    /// Bytes that may still be read through this wrapper.
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Returns the underlying reader without closing it.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Read for LimitedReadCloser<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.remaining == 0 {
            return Ok(0);
        }
        let max = buf.len().min(usize::try_from(self.remaining).unwrap_or(usize::MAX));
        let n = self.inner.read(&mut buf[..max])?;
        self.remaining -= n as u64;
        Ok(n)
    }
}
