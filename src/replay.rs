//! Looking ahead into a stream without losing the bytes that were looked at.
//!
//! [`CaptureReader`] records every byte it hands out. Once the scan is done, the recording is
//! handed to a [`ReplayReader`] together with the original source, so a downstream decoder still
//! sees the stream from its very first byte.

use std::fmt::Debug;
use std::io::{self, Read};

use bytes::buf::Reader;
use bytes::{Buf, Bytes, BytesMut};

/// A reader that keeps a copy of everything read through it.
#[derive(Debug)]
pub(crate) struct CaptureReader<R> {
    inner: R,
    captured: BytesMut,
}

impl<R: Read> CaptureReader<R> {
    pub(crate) fn new(inner: R) -> Self {
        Self {
            inner,
            captured: BytesMut::new(),
        }
    }

    /// Stop capturing and return the recorded bytes.
    pub(crate) fn into_captured(self) -> Bytes {
        self.captured.freeze()
    }
}

impl<R: Read> Read for CaptureReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let read = self.inner.read(buf)?;
        self.captured.extend_from_slice(&buf[..read]);
        Ok(read)
    }
}

/// A reader that first serves a buffered prefix and then the rest of the source it was taken
/// from.
///
/// This is returned by [`scan_orientation`][crate::scan_orientation]. Read from the beginning, it
/// yields exactly the bytes the original source would have yielded had it never been scanned.
pub struct ReplayReader<R> {
    prefix: Reader<Bytes>,
    inner: R,
}

impl<R: Read> ReplayReader<R> {
    /// Create a reader serving `prefix` followed by `inner`.
    pub fn new(prefix: Bytes, inner: R) -> Self {
        Self {
            prefix: prefix.reader(),
            inner,
        }
    }

    /// The buffered bytes that have not been read yet.
    pub fn buffered(&self) -> &[u8] {
        self.prefix.get_ref().chunk()
    }

    /// Drop any unread buffered bytes and return the original source.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Read for ReplayReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.prefix.get_ref().has_remaining() {
            self.prefix.read(buf)
        } else {
            self.inner.read(buf)
        }
    }
}

impl<R> Debug for ReplayReader<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReplayReader")
            .field("buffered", &self.prefix.get_ref().remaining())
            .finish_non_exhaustive()
    }
}
