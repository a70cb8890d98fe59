//! Fixes that turn a decoded image upright for a given orientation.

use std::collections::HashMap;
use std::fmt::{self, Debug};

use crate::error::OrientResult;
use crate::image::DecodedImage;
use crate::orientation::Orientation;

/// A registry of orientation fixes.
///
/// Lookups happen lazily, when an image with that orientation is actually decoded, so the
/// registry may leave out orientations the caller never expects to see.
/// [`Orientation::Normal`] is never looked up.
pub struct FixOrientationRegistry<I>(HashMap<Orientation, Box<dyn FixOrientation<I>>>);

impl<I> FixOrientationRegistry<I> {
    /// Create a new registry with no fixes registered
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Register `fix` for `orientation`, returning the fix it replaces, if any.
    pub fn insert(
        &mut self,
        orientation: Orientation,
        fix: impl FixOrientation<I> + 'static,
    ) -> Option<Box<dyn FixOrientation<I>>> {
        self.0.insert(orientation, Box::new(fix))
    }

    /// Builder-style [`insert`][Self::insert].
    pub fn with(mut self, orientation: Orientation, fix: impl FixOrientation<I> + 'static) -> Self {
        self.insert(orientation, fix);
        self
    }

    /// The fix registered for `orientation`.
    pub fn get(&self, orientation: Orientation) -> Option<&dyn FixOrientation<I>> {
        self.0.get(&orientation).map(|fix| fix.as_ref())
    }

    /// Returns `true` if a fix is registered for `orientation`.
    pub fn contains(&self, orientation: Orientation) -> bool {
        self.0.contains_key(&orientation)
    }
}

impl<I> AsRef<HashMap<Orientation, Box<dyn FixOrientation<I>>>> for FixOrientationRegistry<I> {
    fn as_ref(&self) -> &HashMap<Orientation, Box<dyn FixOrientation<I>>> {
        &self.0
    }
}

impl Default for FixOrientationRegistry<DecodedImage> {
    fn default() -> Self {
        let mut registry = Self(HashMap::with_capacity(7));
        registry.insert(Orientation::FlipHorizontal, FlipHorizontal);
        registry.insert(Orientation::Rotate180, Rotate180);
        registry.insert(Orientation::FlipVertical, FlipVertical);
        registry.insert(Orientation::Transpose, Transpose);
        registry.insert(Orientation::Rotate90, Rotate90);
        registry.insert(Orientation::Transverse, Transverse);
        registry.insert(Orientation::Rotate270, Rotate270);
        registry
    }
}

impl<I> Debug for FixOrientationRegistry<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut registered: Vec<u16> = self.0.keys().map(|o| o.code()).collect();
        registered.sort_unstable();
        f.debug_tuple("FixOrientationRegistry")
            .field(&registered)
            .finish()
    }
}

/// A trait to turn an image upright.
///
/// This is implemented for closures, so any `Fn(I) -> OrientResult<I>` can be registered.
pub trait FixOrientation<I>: Send + Sync {
    /// Return the corrected image.
    fn fix(&self, image: I) -> OrientResult<I>;
}

impl<I, F> FixOrientation<I> for F
where
    F: Fn(I) -> OrientResult<I> + Send + Sync,
{
    fn fix(&self, image: I) -> OrientResult<I> {
        self(image)
    }
}

/// Mirror along the vertical axis.
#[derive(Debug, Clone)]
pub struct FlipHorizontal;

impl FixOrientation<DecodedImage> for FlipHorizontal {
    fn fix(&self, image: DecodedImage) -> OrientResult<DecodedImage> {
        let w = image.width();
        remap(image, false, move |x, y| (w - 1 - x, y))
    }
}

/// Rotate by 180 degrees.
#[derive(Debug, Clone)]
pub struct Rotate180;

impl FixOrientation<DecodedImage> for Rotate180 {
    fn fix(&self, image: DecodedImage) -> OrientResult<DecodedImage> {
        let (w, h) = (image.width(), image.height());
        remap(image, false, move |x, y| (w - 1 - x, h - 1 - y))
    }
}

/// Mirror along the horizontal axis.
#[derive(Debug, Clone)]
pub struct FlipVertical;

impl FixOrientation<DecodedImage> for FlipVertical {
    fn fix(&self, image: DecodedImage) -> OrientResult<DecodedImage> {
        let h = image.height();
        remap(image, false, move |x, y| (x, h - 1 - y))
    }
}

/// Mirror along the top-left to bottom-right diagonal.
#[derive(Debug, Clone)]
pub struct Transpose;

impl FixOrientation<DecodedImage> for Transpose {
    fn fix(&self, image: DecodedImage) -> OrientResult<DecodedImage> {
        remap(image, true, |x, y| (y, x))
    }
}

/// Rotate by 90 degrees clockwise.
#[derive(Debug, Clone)]
pub struct Rotate90;

impl FixOrientation<DecodedImage> for Rotate90 {
    fn fix(&self, image: DecodedImage) -> OrientResult<DecodedImage> {
        let h = image.height();
        remap(image, true, move |x, y| (y, h - 1 - x))
    }
}

/// Mirror along the top-right to bottom-left diagonal.
#[derive(Debug, Clone)]
pub struct Transverse;

impl FixOrientation<DecodedImage> for Transverse {
    fn fix(&self, image: DecodedImage) -> OrientResult<DecodedImage> {
        let (w, h) = (image.width(), image.height());
        remap(image, true, move |x, y| (w - 1 - y, h - 1 - x))
    }
}

/// Rotate by 270 degrees clockwise.
#[derive(Debug, Clone)]
pub struct Rotate270;

impl FixOrientation<DecodedImage> for Rotate270 {
    fn fix(&self, image: DecodedImage) -> OrientResult<DecodedImage> {
        let w = image.width();
        remap(image, true, move |x, y| (w - 1 - y, x))
    }
}

/// Build a new image where the pixel at output `(x, y)` is the input pixel at `source(x, y)`.
///
/// `swap_dimensions` makes the output `height` wide and `width` tall.
fn remap<F>(image: DecodedImage, swap_dimensions: bool, source: F) -> OrientResult<DecodedImage>
where
    F: Fn(u32, u32) -> (u32, u32),
{
    let (width, height) = (image.width(), image.height());
    let (out_width, out_height) = if swap_dimensions {
        (height, width)
    } else {
        (width, height)
    };
    let bpp = image.color_type().bytes_per_pixel();
    let src = image.as_bytes();

    let mut data = Vec::with_capacity(src.len());
    for y in 0..out_height {
        for x in 0..out_width {
            let (src_x, src_y) = source(x, y);
            let start = (src_y as usize * width as usize + src_x as usize) * bpp;
            data.extend_from_slice(&src[start..start + bpp]);
        }
    }
    DecodedImage::new(out_width, out_height, image.color_type(), data)
}
