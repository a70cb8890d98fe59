//! Error handling.

use thiserror::Error;

use crate::orientation::Orientation;

/// Enum with all errors in this crate.
///
/// Note that reading the EXIF orientation itself never fails: malformed or missing metadata is
/// reported as "no orientation". These errors come from decoding the image and from applying an
/// orientation fix.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum OrientError {
    /// General error.
    #[error("General error: {0}")]
    General(String),

    /// IO Error.
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    /// Error while decoding JPEG data.
    #[error(transparent)]
    JPEGDecodingError(#[from] jpeg::Error),

    /// The image carries an orientation for which no fix was registered.
    #[error("orientation {0} not found in orientation fix registry")]
    MissingOrientationFix(Orientation),

    /// A pixel buffer does not match the dimensions it was declared with.
    #[error("Invalid buffer size: expected {expected} bytes, got {actual}")]
    InvalidBufferSize {
        /// Number of bytes implied by width, height and color type.
        expected: usize,
        /// Number of bytes actually supplied.
        actual: usize,
    },

    /// External error
    #[error(transparent)]
    External(Box<dyn std::error::Error + Send + Sync>),
}

/// Crate-specific result type.
pub type OrientResult<T> = std::result::Result<T, OrientError>;
