//! Decoded images and their dimensions.

use crate::error::{OrientError, OrientResult};

/// The pixel layout of a decoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ColorType {
    /// 8 bit luminance
    L8,
    /// 16 bit luminance, stored as two bytes per pixel
    L16,
    /// 8 bit red, green and blue
    Rgb8,
    /// 8 bit cyan, magenta, yellow and black
    Cmyk8,
}

impl ColorType {
    /// The number of bytes used by one pixel.
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            ColorType::L8 => 1,
            ColorType::L16 => 2,
            ColorType::Rgb8 => 3,
            ColorType::Cmyk8 => 4,
        }
    }
}

/// The dimensions and color type of an image, without its pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageConfig {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel layout.
    pub color_type: ColorType,
}

/// A decoded image with interleaved pixels, stored row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    width: u32,
    height: u32,
    color_type: ColorType,
    data: Vec<u8>,
}

impl DecodedImage {
    /// Wrap a pixel buffer, checking that its length matches the given dimensions.
    pub fn new(width: u32, height: u32, color_type: ColorType, data: Vec<u8>) -> OrientResult<Self> {
        let expected = buffer_size(width, height, color_type)?;
        if data.len() != expected {
            return Err(OrientError::InvalidBufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            color_type,
            data,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel layout.
    pub fn color_type(&self) -> ColorType {
        self.color_type
    }

    /// Dimensions and color type of this image.
    pub fn config(&self) -> ImageConfig {
        ImageConfig {
            width: self.width,
            height: self.height,
            color_type: self.color_type,
        }
    }

    /// The raw pixel bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// The bytes of the pixel at column `x` and row `y`, if it lies within the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let bpp = self.color_type.bytes_per_pixel();
        let start = (y as usize * self.width as usize + x as usize) * bpp;
        Some(&self.data[start..start + bpp])
    }

    /// Consume the image, returning its pixel bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

fn buffer_size(width: u32, height: u32, color_type: ColorType) -> OrientResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|x| x.checked_mul(color_type.bytes_per_pixel()))
        .ok_or_else(|| OrientError::General(format!("image of {width}x{height} is too large")))
}
