//! Reading the EXIF orientation out of a JPEG stream.
//!
//! ### Scanning without losing the stream
//!
//! [`scan_orientation`] looks for the orientation and hands back a [`ReplayReader`] that yields
//! the complete original stream, so the same bytes can be passed to a full image decoder:
//!
//! ```
//! use std::io::{Cursor, Read};
//!
//! use jpeg_orient::metadata::scan_orientation;
//!
//! let data = b"not a jpeg at all".to_vec();
//! let (orientation, mut replay) = scan_orientation(Cursor::new(data.clone()));
//! assert_eq!(orientation, None);
//!
//! let mut replayed = vec![];
//! replay.read_to_end(&mut replayed).unwrap();
//! assert_eq!(replayed, data);
//! ```
//!
//! The EXIF block lives in the APP1 segment which, per the EXIF specification, directly follows
//! the start of image. The scan therefore never reads more than [`MAX_SCAN_LEN`] bytes (or the
//! limit given to [`scan_orientation_with_limit`]).
//!
//! ### Failure policy
//!
//! Missing or malformed metadata is the normal case for most images, so none of these functions
//! return errors: anything that prevents reading a valid orientation yields `None`.

mod ifd;
mod marker;

use std::io::Read;

use log::{debug, trace};

use crate::orientation::Orientation;
use crate::replay::{CaptureReader, ReplayReader};

/// The maximum number of bytes read while looking for the orientation.
pub const MAX_SCAN_LEN: u64 = 1 << 20;

/// Read the EXIF orientation from the start of a JPEG stream.
///
/// This consumes `reader` up to (and including) the orientation value, so it is only useful on
/// its own when the rest of the stream is not needed. See [`scan_orientation`] otherwise.
pub fn read_orientation<R: Read>(mut reader: R) -> Option<Orientation> {
    let result = marker::find_app1(&mut reader).and_then(|found| {
        if found {
            ifd::read_orientation_tag(&mut reader)
        } else {
            Ok(None)
        }
    });
    match result {
        Ok(orientation) => {
            trace!("EXIF orientation: {orientation:?}");
            orientation
        }
        Err(err) => {
            debug!("stopped looking for EXIF orientation: {err}");
            None
        }
    }
}

/// Read the EXIF orientation and return a reader replaying the whole stream.
///
/// Reads at most [`MAX_SCAN_LEN`] bytes from `reader`.
pub fn scan_orientation<R: Read>(reader: R) -> (Option<Orientation>, ReplayReader<R>) {
    scan_orientation_with_limit(reader, MAX_SCAN_LEN)
}

/// Same as [`scan_orientation`], reading at most `limit` bytes while scanning.
pub fn scan_orientation_with_limit<R: Read>(
    mut reader: R,
    limit: u64,
) -> (Option<Orientation>, ReplayReader<R>) {
    let mut capture = CaptureReader::new(Read::take(&mut reader, limit));
    let orientation = read_orientation(&mut capture);
    let prefix = capture.into_captured();
    (orientation, ReplayReader::new(prefix, reader))
}
