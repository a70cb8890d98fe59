//! In-memory JPEG fixtures.
#![allow(dead_code)]

use jpeg_orient::error::{OrientError, OrientResult};
use jpeg_orient::{ColorType, ImageConfig, ImageDecoder};
use std::io::Read;

/// Width of the image produced by [`jpeg`].
pub const WIDTH: u32 = 16;
/// Height of the image produced by [`jpeg`].
pub const HEIGHT: u32 = 8;

#[derive(Debug, Clone, Copy)]
pub enum ByteOrder {
    Little,
    Big,
}

impl ByteOrder {
    fn u16(self, value: u16) -> [u8; 2] {
        match self {
            ByteOrder::Little => value.to_le_bytes(),
            ByteOrder::Big => value.to_be_bytes(),
        }
    }

    fn u32(self, value: u32) -> [u8; 4] {
        match self {
            ByteOrder::Little => value.to_le_bytes(),
            ByteOrder::Big => value.to_be_bytes(),
        }
    }
}

/// An APP1 payload with a 0th IFD holding an ImageWidth entry followed by `orientation`.
pub fn exif(orientation: u16, order: ByteOrder) -> Vec<u8> {
    let mut buf = b"Exif\0\0".to_vec();
    buf.extend_from_slice(match order {
        ByteOrder::Little => b"II",
        ByteOrder::Big => b"MM",
    });
    buf.extend_from_slice(&order.u16(42));
    buf.extend_from_slice(&order.u32(8));
    buf.extend_from_slice(&order.u16(2));
    // ImageWidth, LONG
    buf.extend_from_slice(&order.u16(0x0100));
    buf.extend_from_slice(&order.u16(4));
    buf.extend_from_slice(&order.u32(1));
    buf.extend_from_slice(&order.u32(WIDTH));
    // Orientation, SHORT, left-justified in the value field
    buf.extend_from_slice(&order.u16(0x0112));
    buf.extend_from_slice(&order.u16(3));
    buf.extend_from_slice(&order.u32(1));
    buf.extend_from_slice(&order.u16(orientation));
    buf.extend_from_slice(&[0, 0]);
    // no next IFD
    buf.extend_from_slice(&[0, 0, 0, 0]);
    buf
}

fn segment(buf: &mut Vec<u8>, marker: u8, payload: &[u8]) {
    buf.extend_from_slice(&[0xff, marker]);
    buf.extend_from_slice(&(payload.len() as u16 + 2).to_be_bytes());
    buf.extend_from_slice(payload);
}

/// A 16x8 grayscale baseline JPEG made of two 8x8 blocks: the left one mid-gray, the right one
/// brighter. `app1` is inserted as an APP1 segment right after SOI when given.
pub fn jpeg(app1: Option<&[u8]>) -> Vec<u8> {
    build(app1, true)
}

/// Same as [`jpeg`], with the APP1 segment placed after a JFIF APP0 segment.
pub fn jpeg_late_app1(app1: &[u8]) -> Vec<u8> {
    build(Some(app1), false)
}

#[rustfmt::skip]
fn build(app1: Option<&[u8]>, app1_first: bool) -> Vec<u8> {
    let mut buf = vec![0xff, 0xd8];
    if let (Some(app1), true) = (app1, app1_first) {
        segment(&mut buf, 0xe1, app1);
    }
    segment(&mut buf, 0xe0, &[b'J', b'F', b'I', b'F', 0, 1, 1, 0, 0, 1, 0, 1, 0, 0]);
    if let (Some(app1), false) = (app1, app1_first) {
        segment(&mut buf, 0xe1, app1);
    }

    let mut dqt = vec![0x00];
    dqt.extend_from_slice(&[1; 64]);
    segment(&mut buf, 0xdb, &dqt);

    // 8 bit, 8 rows, 16 columns, one component with 1x1 sampling and quantization table 0
    segment(&mut buf, 0xc0, &[8, 0, HEIGHT as u8, 0, WIDTH as u8, 1, 1, 0x11, 0]);

    // DC table 0: "00" -> category 0, "01" -> category 8
    let mut dc = vec![0x00, 0, 2];
    dc.extend_from_slice(&[0; 14]);
    dc.extend_from_slice(&[0x00, 0x08]);
    segment(&mut buf, 0xc4, &dc);

    // AC table 0: "0" -> end of block
    let mut ac = vec![0x10, 1];
    ac.extend_from_slice(&[0; 15]);
    ac.push(0x00);
    segment(&mut buf, 0xc4, &ac);

    segment(&mut buf, 0xda, &[1, 1, 0x00, 0, 63, 0]);
    // block 1: DC "00", EOB "0"
    // block 2: DC "01" + 200 as "11001000", EOB "0"
    // padded with ones
    buf.extend_from_slice(&[0b0000_1110, 0b0100_0011]);

    buf.extend_from_slice(&[0xff, 0xd9]);
    buf
}

/// Same as [`jpeg`], with at least `padding` bytes of APP2 segments between SOI and APP1.
pub fn jpeg_padded_app1(app1: &[u8], padding: usize) -> Vec<u8> {
    let image = jpeg(Some(app1));
    let mut buf = image[..2].to_vec();
    let mut remaining = padding;
    while remaining > 0 {
        let chunk = remaining.min(usize::from(u16::MAX) - 2);
        segment(&mut buf, 0xe2, &vec![0; chunk]);
        remaining -= chunk;
    }
    buf.extend_from_slice(&image[2..]);
    buf
}

/// A JPEG carrying `orientation` in an EXIF block of the given byte order.
pub fn jpeg_with_orientation(orientation: u16, order: ByteOrder) -> Vec<u8> {
    jpeg(Some(exif(orientation, order).as_slice()))
}

/// A decoder that does not decode anything: the "image" is the raw stream it was handed.
#[derive(Debug, Clone, Default)]
pub struct RawDecoder;

impl ImageDecoder for RawDecoder {
    type Image = Vec<u8>;

    fn decode(&self, reader: &mut dyn Read) -> OrientResult<(Vec<u8>, String)> {
        let mut data = vec![];
        reader.read_to_end(&mut data)?;
        Ok((data, "raw".to_string()))
    }

    fn decode_config(&self, reader: &mut dyn Read) -> OrientResult<(ImageConfig, String)> {
        let (data, format) = self.decode(reader)?;
        let config = ImageConfig {
            width: data.len() as u32,
            height: 1,
            color_type: ColorType::L8,
        };
        Ok((config, format))
    }
}

/// A decoder that always fails.
#[derive(Debug, Clone, Default)]
pub struct FailingDecoder;

impl ImageDecoder for FailingDecoder {
    type Image = Vec<u8>;

    fn decode(&self, _reader: &mut dyn Read) -> OrientResult<(Vec<u8>, String)> {
        Err(OrientError::General("unsupported format".into()))
    }

    fn decode_config(&self, _reader: &mut dyn Read) -> OrientResult<(ImageConfig, String)> {
        Err(OrientError::General("unsupported format".into()))
    }
}
