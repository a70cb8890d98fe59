//! The EXIF orientation tag.

use std::fmt;

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// An EXIF orientation code.
///
/// The variant names describe what has to be done to the stored pixels so that the image is
/// displayed upright. A missing or invalid tag (code `0`, or anything above `8`) is represented
/// as `None` wherever an `Option<Orientation>` is returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u16)]
pub enum Orientation {
    /// The image is stored upright.
    Normal = 1,
    /// Mirrored along the vertical axis.
    FlipHorizontal = 2,
    /// Upside down.
    Rotate180 = 3,
    /// Mirrored along the horizontal axis.
    FlipVertical = 4,
    /// Mirrored along the top-left to bottom-right diagonal.
    Transpose = 5,
    /// Needs a 90 degree clockwise rotation.
    Rotate90 = 6,
    /// Mirrored along the top-right to bottom-left diagonal.
    Transverse = 7,
    /// Needs a 270 degree clockwise rotation.
    Rotate270 = 8,
}

impl Orientation {
    /// All orientations, in code order.
    pub const ALL: [Orientation; 8] = [
        Orientation::Normal,
        Orientation::FlipHorizontal,
        Orientation::Rotate180,
        Orientation::FlipVertical,
        Orientation::Transpose,
        Orientation::Rotate90,
        Orientation::Transverse,
        Orientation::Rotate270,
    ];

    /// Converts from a raw EXIF value, returning `None` outside `1..=8`.
    pub fn from_exif(value: u16) -> Option<Self> {
        Self::try_from(value).ok()
    }

    /// The raw EXIF value.
    pub fn code(self) -> u16 {
        self.into()
    }

    /// Returns `true` if the pixels have to be changed to display the image upright.
    pub fn needs_fix(self) -> bool {
        self != Orientation::Normal
    }

    /// Returns `true` for the four orientations whose upright frame is rotated by 90 degrees,
    /// i.e. whose displayed width is the stored height.
    pub fn swaps_dimensions(self) -> bool {
        matches!(
            self,
            Orientation::Transpose
                | Orientation::Rotate90
                | Orientation::Transverse
                | Orientation::Rotate270
        )
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_exif() {
        assert_eq!(Orientation::from_exif(0), None);
        assert_eq!(Orientation::from_exif(9), None);
        assert_eq!(Orientation::from_exif(0xffff), None);
        for (i, orientation) in Orientation::ALL.iter().enumerate() {
            assert_eq!(Orientation::from_exif(i as u16 + 1), Some(*orientation));
            assert_eq!(orientation.code(), i as u16 + 1);
        }
    }

    #[test]
    fn test_swaps_dimensions() {
        let swapped: Vec<u16> = Orientation::ALL
            .iter()
            .filter(|o| o.swaps_dimensions())
            .map(|o| o.code())
            .collect();
        assert_eq!(swapped, vec![5, 6, 7, 8]);
        assert!(!Orientation::Normal.needs_fix());
        assert!(Orientation::FlipHorizontal.needs_fix());
    }

    #[test]
    fn test_display_is_code() {
        assert_eq!(Orientation::Rotate90.to_string(), "6");
    }
}
