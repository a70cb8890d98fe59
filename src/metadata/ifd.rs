//! The EXIF tag directory.

use std::io::{self, Read};

use log::debug;

use crate::orientation::Orientation;
use crate::reader::{EndianAwareReader, Endianness};

/// "Exif", followed by two padding bytes.
const EXIF_HEADER: u32 = 0x4578_6966;
/// "MM"
const BYTE_ORDER_BE: u16 = 0x4d4d;
/// "II"
const BYTE_ORDER_LE: u16 = 0x4949;
const ORIENTATION_TAG: u16 = 0x0112;

/// The first IFD offset counts from the byte order mark, and the TIFF header itself (byte order,
/// tag mark, offset) is 8 bytes long.
const TIFF_HEADER_SIZE: u32 = 8;

/// Read the orientation tag out of the 0th IFD of an APP1 payload.
///
/// `reader` must be positioned at the start of the payload, i.e. on the EXIF header. Returns
/// `Ok(None)` if the payload is not EXIF, declares an unknown byte order or a bogus IFD offset,
/// has no orientation tag, or carries an orientation outside `1..=8`.
pub(crate) fn read_orientation_tag<R: Read>(reader: R) -> io::Result<Option<Orientation>> {
    let mut cursor = EndianAwareReader::new(reader, Endianness::BigEndian);

    let header = cursor.read_u32()?;
    if header != EXIF_HEADER {
        debug!("missing EXIF header, found {header:#010x}");
        return Ok(None);
    }
    cursor.skip(2)?;

    let endianness = match cursor.read_u16()? {
        BYTE_ORDER_BE => Endianness::BigEndian,
        BYTE_ORDER_LE => Endianness::LittleEndian,
        byte_order => {
            debug!("invalid EXIF byte order {byte_order:#06x}");
            return Ok(None);
        }
    };
    let mut cursor = EndianAwareReader::new(cursor.into_inner(), endianness);
    // Tag mark, always 42
    cursor.skip(2)?;

    let offset = cursor.read_u32()?;
    if offset < TIFF_HEADER_SIZE {
        debug!("invalid IFD offset {offset}");
        return Ok(None);
    }
    cursor.skip(u64::from(offset - TIFF_HEADER_SIZE))?;

    read_ifd_orientation(&mut cursor)
}

/// Scan the entries of one IFD for the orientation tag.
fn read_ifd_orientation<R: Read>(
    cursor: &mut EndianAwareReader<R>,
) -> io::Result<Option<Orientation>> {
    // Tag   2 bytes
    // Type  2 bytes
    // Count 4 bytes
    // Value 4 bytes, a SHORT value is left-justified
    let tag_count = cursor.read_u16()?;
    for _ in 0..tag_count {
        let tag = cursor.read_u16()?;
        if tag != ORIENTATION_TAG {
            cursor.skip(10)?;
            continue;
        }
        cursor.skip(6)?;
        let value = cursor.read_u16()?;
        let orientation = Orientation::from_exif(value);
        if orientation.is_none() {
            debug!(
                "invalid orientation value {value} ({:?} IFD)",
                cursor.endianness()
            );
        }
        return Ok(orientation);
    }
    debug!("no orientation tag among {tag_count} IFD entries");
    Ok(None)
}
