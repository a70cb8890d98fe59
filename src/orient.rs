//! The orientation-aware decoder.

use std::io::Read;

use log::trace;

use crate::decoder::{ImageDecoder, JpegDecoder};
use crate::error::{OrientError, OrientResult};
use crate::fix::FixOrientationRegistry;
use crate::image::{DecodedImage, ImageConfig};
use crate::metadata::{scan_orientation_with_limit, MAX_SCAN_LEN};
use crate::orientation::Orientation;

/// An image decoder that takes the EXIF orientation into account.
///
/// The stream is first scanned for the orientation and then replayed in full to the wrapped
/// [`ImageDecoder`], which never notices the scan. Images without a usable orientation tag are
/// decoded exactly as the wrapped decoder would decode them.
///
/// ```
/// use std::io::Cursor;
///
/// use jpeg_orient::OrientDecoder;
///
/// let decoder: OrientDecoder = OrientDecoder::default();
/// assert!(decoder.decode(Cursor::new(b"not a jpeg")).is_err());
/// ```
#[derive(Debug)]
pub struct OrientDecoder<D: ImageDecoder = JpegDecoder> {
    decoder: D,
    fixes: FixOrientationRegistry<D::Image>,
    scan_limit: u64,
}

impl<D: ImageDecoder> OrientDecoder<D> {
    /// Wrap `decoder`, fixing decoded images with the functions in `fixes`.
    ///
    /// `fixes` does not need to cover every orientation: a missing fix only surfaces as
    /// [`OrientError::MissingOrientationFix`] when an image with that orientation is decoded.
    pub fn new(decoder: D, fixes: FixOrientationRegistry<D::Image>) -> Self {
        Self {
            decoder,
            fixes,
            scan_limit: MAX_SCAN_LEN,
        }
    }

    /// Read at most `scan_limit` bytes while looking for the orientation.
    ///
    /// Defaults to [`MAX_SCAN_LEN`].
    pub fn with_scan_limit(mut self, scan_limit: u64) -> Self {
        self.scan_limit = scan_limit;
        self
    }

    /// The wrapped decoder.
    pub fn decoder(&self) -> &D {
        &self.decoder
    }

    /// The registered orientation fixes.
    pub fn fixes(&self) -> &FixOrientationRegistry<D::Image> {
        &self.fixes
    }

    /// Decode an image and turn it upright according to its EXIF orientation, if any.
    ///
    /// Errors from the wrapped decoder are returned unchanged. If the image has an orientation
    /// other than [`Orientation::Normal`] and no fix is registered for it, this fails with
    /// [`OrientError::MissingOrientationFix`].
    pub fn decode<R: Read>(&self, reader: R) -> OrientResult<(D::Image, String)> {
        let (orientation, mut reader) = scan_orientation_with_limit(reader, self.scan_limit);
        let (image, format) = self.decoder.decode(&mut reader)?;
        match orientation {
            Some(orientation) if orientation.needs_fix() => {
                Ok((self.fix_orientation(image, orientation)?, format))
            }
            _ => Ok((image, format)),
        }
    }

    /// Decode the dimensions and color type of an image, as they are after turning it upright.
    ///
    /// Width and height are swapped for the orientations that rotate the frame by 90 degrees.
    /// No fix is ever applied or required here.
    ///
    /// Note that the color type reported here is the one of the stored image; a custom fix used
    /// by [`decode`][Self::decode] may produce a different one.
    pub fn decode_config<R: Read>(&self, reader: R) -> OrientResult<(ImageConfig, String)> {
        let (orientation, mut reader) = scan_orientation_with_limit(reader, self.scan_limit);
        let (mut config, format) = self.decoder.decode_config(&mut reader)?;
        if orientation.is_some_and(Orientation::swaps_dimensions) {
            std::mem::swap(&mut config.width, &mut config.height);
        }
        Ok((config, format))
    }

    fn fix_orientation(&self, image: D::Image, orientation: Orientation) -> OrientResult<D::Image> {
        let fix = self
            .fixes
            .get(orientation)
            .ok_or(OrientError::MissingOrientationFix(orientation))?;
        trace!("fixing EXIF orientation {orientation}");
        fix.fix(image)
    }
}

impl Default for OrientDecoder<JpegDecoder> {
    fn default() -> Self {
        Self::new(JpegDecoder, FixOrientationRegistry::default())
    }
}

/// Decode a JPEG image and turn it upright, using [`JpegDecoder`] and the built-in fixes.
pub fn decode<R: Read>(reader: R) -> OrientResult<(DecodedImage, String)> {
    OrientDecoder::<JpegDecoder>::default().decode(reader)
}

/// Decode the upright dimensions of a JPEG image, using [`JpegDecoder`].
pub fn decode_config<R: Read>(reader: R) -> OrientResult<(ImageConfig, String)> {
    OrientDecoder::<JpegDecoder>::default().decode_config(reader)
}
