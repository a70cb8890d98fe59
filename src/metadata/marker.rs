//! JPEG segment framing.

use std::io::{self, Read};

use log::debug;

use crate::reader::{EndianAwareReader, Endianness};

/// Start of image.
pub(crate) const MARKER_SOI: u16 = 0xffd8;
/// Application segment 1, which holds the EXIF data.
pub(crate) const MARKER_APP1: u16 = 0xffe1;

/// Walk the JPEG segments until the start of the first APP1 payload.
///
/// Returns `Ok(true)` with `reader` positioned right after the APP1 length field, or `Ok(false)`
/// if the stream is not a JPEG or its framing is broken. Running out of data is an `Err`.
///
/// Segment framing is big endian regardless of the byte order used inside the EXIF block.
pub(crate) fn find_app1<R: Read>(reader: R) -> io::Result<bool> {
    let mut cursor = EndianAwareReader::new(reader, Endianness::BigEndian);

    let soi = cursor.read_u16()?;
    if soi != MARKER_SOI {
        debug!("missing JPEG SOI marker, found {soi:#06x}");
        return Ok(false);
    }

    loop {
        let marker = cursor.read_u16()?;
        let size = cursor.read_u16()?;
        if marker >> 8 != 0xff {
            debug!("invalid JPEG marker {marker:#06x}");
            return Ok(false);
        }
        if marker == MARKER_APP1 {
            return Ok(true);
        }
        // The size includes its own two bytes
        if size < 2 {
            debug!("invalid size {size} for JPEG segment {marker:#06x}");
            return Ok(false);
        }
        cursor.skip(u64::from(size - 2))?;
    }
}
