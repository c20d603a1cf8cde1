//! Remaining-length queries for arbitrary readers.
//!
//! A reader either knows how many unread bytes it holds, can be seeked to
//! find out, or neither. The query tries them in that order and leaves the
//! reader exactly where it found it.

use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufReader, Chain, Cursor, Empty, Read, Repeat, Seek, SeekFrom, Take};
use std::net::TcpStream;
use std::process::ChildStdout;

use tokio::io::{AsyncSeek, AsyncSeekExt};
use tracing::debug;

use super::{DiscardReadCloser, LimitedReadCloser};
use crate::error::{ErrorCode, TransferError, TransferResult};

/// What a reader offers for determining its remaining length.
pub enum ReaderCapability<'a> {
    /// The reader knows its unread byte count.
    Length(u64),
    /// The reader can be seeked to its end and back.
    Seek(&'a mut dyn Seek),
    /// Neither.
    Unsupported,
}

/// Readers whose remaining length can be queried with [`reader_len`].
///
/// The default capability is [`ReaderCapability::Unsupported`], so
/// streams that cannot be measured only need an empty impl.
pub trait ContentLength {
    fn capability(&mut self) -> ReaderCapability<'_> {
        ReaderCapability::Unsupported
    }
}

/// Returns the number of bytes left to read from `reader`.
///
/// The reader's position is the same after the call as before it.
pub fn reader_len<R: ContentLength + ?Sized>(reader: &mut R) -> TransferResult<u64> {
    match reader.capability() {
        ReaderCapability::Length(len) => {
            debug!(len, "reader length from declared size");
            Ok(len)
        }
        ReaderCapability::Seek(stream) => seek_len(stream),
        ReaderCapability::Unsupported => {
            debug!("reader exposes no length or seek capability");
            Err(TransferError::new(ErrorCode::UnsupportedType))
        }
    }
}

/// Seeks back to `position` when dropped, unless already restored.
struct RestorePosition<'a, S: Seek + ?Sized> {
    stream: &'a mut S,
    position: u64,
    armed: bool,
}

impl<S: Seek + ?Sized> RestorePosition<'_, S> {
    fn restore(mut self) -> io::Result<()> {
        self.armed = false;
        self.stream.seek(SeekFrom::Start(self.position)).map(|_| ())
    }
}

impl<S: Seek + ?Sized> Drop for RestorePosition<'_, S> {
    fn drop(&mut self) {
        if self.armed {
            if let Err(e) = self.stream.seek(SeekFrom::Start(self.position)) {
                debug!(position = self.position, error = %e, "failed to restore stream position");
            }
        }
    }
}

fn remaining(position: u64, end: u64) -> TransferResult<u64> {
    end.checked_sub(position).ok_or_else(|| {
        debug!(position, end, "stream position is past its end");
        TransferError::new(ErrorCode::UnsupportedType)
    })
}

/// Remaining length of a seekable stream: current position, then end, then
/// back to the saved position.
///
/// Seek failures are returned as they are.
pub fn seek_len<S: Seek + ?Sized>(stream: &mut S) -> TransferResult<u64> {
    let position = stream.seek(SeekFrom::Current(0)).map_err(|e| {
        debug!(error = %e, "seek to current position failed");
        TransferError::from_io(e)
    })?;

    let mut guard = RestorePosition {
        stream,
        position,
        armed: true,
    };
    let end = guard.stream.seek(SeekFrom::End(0)).map_err(|e| {
        debug!(error = %e, "seek to end failed");
        TransferError::from_io(e)
    })?;
    guard.restore().map_err(|e| {
        debug!(position, error = %e, "seek back to saved position failed");
        TransferError::from_io(e)
    })?;

    debug!(position, end, "reader length from seek");
    remaining(position, end)
}

/// Async variant of [`seek_len`] for tokio streams.
pub async fn reader_len_async<S: AsyncSeek + Unpin + ?Sized>(stream: &mut S) -> TransferResult<u64> {
    let position = stream.seek(SeekFrom::Current(0)).await?;
    let end = match stream.seek(SeekFrom::End(0)).await {
        Ok(end) => end,
        Err(e) => {
            debug!(error = %e, "seek to end failed");
            if let Err(restore_err) = stream.seek(SeekFrom::Start(position)).await {
                debug!(position, error = %restore_err, "failed to restore stream position");
            }
            return Err(e.into());
        }
    };
    stream.seek(SeekFrom::Start(position)).await?;

    debug!(position, end, "reader length from seek");
    remaining(position, end)
}

/// Exposes any `Seek` value to [`reader_len`] through the seek path.
#[derive(Debug)]
pub struct SeekableReader<S>(pub S);

impl<S> SeekableReader<S> {
    pub fn into_inner(self) -> S {
        self.0
    }
}

impl<S: Read> Read for SeekableReader<S> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.0.read(buf)
    }
}

impl<S: Seek> Seek for SeekableReader<S> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.0.seek(pos)
    }
}

impl<S: Seek> ContentLength for SeekableReader<S> {
    fn capability(&mut self) -> ReaderCapability<'_> {
        ReaderCapability::Seek(&mut self.0)
    }
}

// Length-aware readers.

impl ContentLength for &[u8] {
    fn capability(&mut self) -> ReaderCapability<'_> {
        ReaderCapability::Length(self.len() as u64)
    }
}

impl<T: AsRef<[u8]>> ContentLength for Cursor<T> {
    fn capability(&mut self) -> ReaderCapability<'_> {
        let len = self.get_ref().as_ref().len() as u64;
        ReaderCapability::Length(len.saturating_sub(self.position()))
    }
}

impl ContentLength for VecDeque<u8> {
    fn capability(&mut self) -> ReaderCapability<'_> {
        ReaderCapability::Length(self.len() as u64)
    }
}

impl<B: bytes::Buf> ContentLength for bytes::buf::Reader<B> {
    fn capability(&mut self) -> ReaderCapability<'_> {
        ReaderCapability::Length(self.get_ref().remaining() as u64)
    }
}

impl<R> ContentLength for Take<R> {
    fn capability(&mut self) -> ReaderCapability<'_> {
        ReaderCapability::Length(self.limit())
    }
}

impl<R> ContentLength for LimitedReadCloser<R> {
    fn capability(&mut self) -> ReaderCapability<'_> {
        ReaderCapability::Length(self.remaining())
    }
}

impl ContentLength for Empty {
    fn capability(&mut self) -> ReaderCapability<'_> {
        ReaderCapability::Length(0)
    }
}

// Seekable readers.

impl ContentLength for File {
    fn capability(&mut self) -> ReaderCapability<'_> {
        ReaderCapability::Seek(self)
    }
}

impl ContentLength for &File {
    fn capability(&mut self) -> ReaderCapability<'_> {
        ReaderCapability::Seek(self)
    }
}

impl<R: Read + Seek> ContentLength for BufReader<R> {
    fn capability(&mut self) -> ReaderCapability<'_> {
        ReaderCapability::Seek(self)
    }
}

// Forwarding impls.

impl<T: ContentLength + ?Sized> ContentLength for &mut T {
    fn capability(&mut self) -> ReaderCapability<'_> {
        (**self).capability()
    }
}

impl<T: ContentLength + ?Sized> ContentLength for Box<T> {
    fn capability(&mut self) -> ReaderCapability<'_> {
        (**self).capability()
    }
}

impl<T: ContentLength> ContentLength for Option<T> {
    fn capability(&mut self) -> ReaderCapability<'_> {
        match self {
            Some(reader) => reader.capability(),
            None => ReaderCapability::Unsupported,
        }
    }
}

// Streams with no knowable length.

impl ContentLength for TcpStream {}
impl ContentLength for io::Stdin {}
impl ContentLength for io::StdinLock<'_> {}
impl ContentLength for ChildStdout {}
impl ContentLength for Repeat {}
impl<A, B> ContentLength for Chain<A, B> {}
impl<R> ContentLength for DiscardReadCloser<R> {}
