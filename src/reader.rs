//! Endianness-aware reads on top of [`std::io::Read`].

use std::io::{self, Read};

use byteorder::{BigEndian, LittleEndian, ReadBytesExt};

/// Endianness
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    /// Little Endian
    LittleEndian,
    /// Big Endian
    BigEndian,
}

/// A reader that decodes multi-byte integers in a fixed byte order.
///
/// JPEG segment framing is always big endian, while the EXIF tag directory declares its own byte
/// order, so the same underlying stream gets wrapped once per part of the scan.
pub(crate) struct EndianAwareReader<R> {
    reader: R,
    endianness: Endianness,
}

impl<R: Read> EndianAwareReader<R> {
    pub(crate) fn new(reader: R, endianness: Endianness) -> Self {
        Self { reader, endianness }
    }

    pub(crate) fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Read a u16, advancing the internal state by 2 bytes.
    pub(crate) fn read_u16(&mut self) -> io::Result<u16> {
        match self.endianness {
            Endianness::LittleEndian => self.reader.read_u16::<LittleEndian>(),
            Endianness::BigEndian => self.reader.read_u16::<BigEndian>(),
        }
    }

    /// Read a u32, advancing the internal state by 4 bytes.
    pub(crate) fn read_u32(&mut self) -> io::Result<u32> {
        match self.endianness {
            Endianness::LittleEndian => self.reader.read_u32::<LittleEndian>(),
            Endianness::BigEndian => self.reader.read_u32::<BigEndian>(),
        }
    }

    /// Discard exactly `amount` bytes.
    ///
    /// Returns [`io::ErrorKind::UnexpectedEof`] if the stream ends first.
    pub(crate) fn skip(&mut self, amount: u64) -> io::Result<()> {
        let skipped = io::copy(&mut (&mut self.reader).take(amount), &mut io::sink())?;
        if skipped != amount {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("expected to skip {amount} bytes, got {skipped}"),
            ));
        }
        Ok(())
    }

    pub(crate) fn into_inner(self) -> R {
        self.reader
    }
}
