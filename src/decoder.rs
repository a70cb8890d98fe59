//! Image decoders that the orientation-aware decoder delegates to.

use std::fmt::Debug;
use std::io::Read;

use crate::error::{OrientError, OrientResult};
use crate::image::{ColorType, DecodedImage, ImageConfig};

/// A trait to decode an encoded image stream.
///
/// Implementations know nothing about EXIF orientation: they are handed the complete, unmodified
/// stream and decode it as they would without [`OrientDecoder`][crate::OrientDecoder].
///
/// Both methods return the decoded value together with the name of the image format, e.g.
/// `"jpeg"`. On failure only the error is returned, so the format name is not available to
/// callers then; put it in the error message if it matters.
pub trait ImageDecoder: Debug + Send + Sync {
    /// The decoded image type.
    type Image;

    /// Decode a full image.
    fn decode(&self, reader: &mut dyn Read) -> OrientResult<(Self::Image, String)>;

    /// Decode only the dimensions and color type of an image.
    fn decode_config(&self, reader: &mut dyn Read) -> OrientResult<(ImageConfig, String)>;
}

/// A decoder for baseline and progressive JPEG images.
#[derive(Debug, Clone, Default)]
pub struct JpegDecoder;

impl JpegDecoder {
    const FORMAT: &'static str = "jpeg";
}

impl ImageDecoder for JpegDecoder {
    type Image = DecodedImage;

    fn decode(&self, reader: &mut dyn Read) -> OrientResult<(DecodedImage, String)> {
        let mut decoder = jpeg::Decoder::new(reader);
        let data = decoder.decode()?;
        let info = decoder
            .info()
            .ok_or_else(|| OrientError::General("JPEG decoder returned no image info".into()))?;
        let image = DecodedImage::new(
            info.width.into(),
            info.height.into(),
            color_type(info.pixel_format)?,
            data,
        )?;
        Ok((image, Self::FORMAT.to_string()))
    }

    fn decode_config(&self, reader: &mut dyn Read) -> OrientResult<(ImageConfig, String)> {
        let mut decoder = jpeg::Decoder::new(reader);
        decoder.read_info()?;
        let info = decoder
            .info()
            .ok_or_else(|| OrientError::General("JPEG decoder returned no image info".into()))?;
        let config = ImageConfig {
            width: info.width.into(),
            height: info.height.into(),
            color_type: color_type(info.pixel_format)?,
        };
        Ok((config, Self::FORMAT.to_string()))
    }
}

#[allow(unreachable_patterns)]
fn color_type(pixel_format: jpeg::PixelFormat) -> OrientResult<ColorType> {
    match pixel_format {
        jpeg::PixelFormat::L8 => Ok(ColorType::L8),
        jpeg::PixelFormat::L16 => Ok(ColorType::L16),
        jpeg::PixelFormat::RGB24 => Ok(ColorType::Rgb8),
        jpeg::PixelFormat::CMYK32 => Ok(ColorType::Cmyk8),
        pixel_format => Err(OrientError::General(format!(
            "unsupported JPEG pixel format {pixel_format:?}"
        ))),
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_garbage_is_a_decoding_error() {
        let decoder = JpegDecoder;
        let err = decoder
            .decode(&mut Cursor::new(b"definitely not a jpeg"))
            .unwrap_err();
        assert!(matches!(err, OrientError::JPEGDecodingError(_)));
        let err = decoder
            .decode_config(&mut Cursor::new(b"definitely not a jpeg"))
            .unwrap_err();
        assert!(matches!(err, OrientError::JPEGDecodingError(_)));
    }
}
