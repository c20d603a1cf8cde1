//! Reader that skips a prefix of the underlying stream.

use std::io::{self, Read};

/// Drops the first `discard` bytes of the underlying stream before
/// returning any data to the caller.
///
/// Used when a ranged response starts earlier than the caller asked for.
#[derive(Debug)]
pub struct DiscardReadCloser<R> {
    inner: R,
    discard: u64,
}

impl<R> DiscardReadCloser<R> {
    pub fn new(inner: R, discard: u64) -> Self {
        Self { inner, discard }
    }

    /// Bytes still to be skipped.
    pub fn pending_discard(&self) -> u64 {
        self.discard
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Closes the underlying stream by dropping it.
    pub fn close(self) {
        drop(self.inner);
    }
}

impl<R: Read> Read for DiscardReadCloser<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        loop {
            let n = self.inner.read(buf)?;
            if self.discard == 0 || n == 0 {
                return Ok(n);
            }
            if n as u64 <= self.discard {
                self.discard -= n as u64;
                continue;
            }
            let skip = self.discard as usize;
            buf.copy_within(skip..n, 0);
            self.discard = 0;
            return Ok(n - skip);
        }
    }
}
