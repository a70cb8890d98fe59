#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod decoder;
pub mod error;
pub mod fix;
mod image;
pub mod metadata;
mod orient;
mod orientation;
mod reader;
mod replay;

pub use decoder::{ImageDecoder, JpegDecoder};
pub use fix::{FixOrientation, FixOrientationRegistry};
pub use image::{ColorType, DecodedImage, ImageConfig};
pub use metadata::{read_orientation, scan_orientation, scan_orientation_with_limit};
pub use orient::{decode, decode_config, OrientDecoder};
pub use orientation::Orientation;
pub use replay::ReplayReader;
