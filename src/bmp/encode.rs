//! BMP encoder: serializes headers and the pixel buffer back to bytes.

use crate::image::{FILE_HEADER_SIZE, INFO_HEADER_SIZE, Image};

/// Serialize `img` into a complete BMP byte stream.
///
/// `file_size` and `image_size` are recomputed from the live buffer so that
/// decode-then-modify-then-encode never carries stale values. The header
/// pair is re-packed at the canonical 54-byte layout (`size` 40,
/// `offset_data` 54); every pass-through field (reserved words, resolution,
/// palette counts) is written back exactly as decoded, and the pixel buffer
/// is appended verbatim, existing row padding included.
pub(crate) fn encode(img: &Image) -> Vec<u8> {
    let fh = img.file_header();
    let ih = img.info_header();
    let pixels = img.pixels();

    let offset_data = FILE_HEADER_SIZE + INFO_HEADER_SIZE;
    let file_size = offset_data as usize + pixels.len();

    let mut out = Vec::with_capacity(file_size);

    // File header (14 bytes)
    out.extend_from_slice(&fh.file_type.to_le_bytes());
    out.extend_from_slice(&(file_size as u32).to_le_bytes());
    out.extend_from_slice(&fh.reserved1.to_le_bytes());
    out.extend_from_slice(&fh.reserved2.to_le_bytes());
    out.extend_from_slice(&offset_data.to_le_bytes());

    // BITMAPINFOHEADER (40 bytes)
    out.extend_from_slice(&INFO_HEADER_SIZE.to_le_bytes());
    out.extend_from_slice(&ih.width.to_le_bytes());
    out.extend_from_slice(&ih.height.to_le_bytes());
    out.extend_from_slice(&ih.planes.to_le_bytes());
    out.extend_from_slice(&ih.bit_count.to_le_bytes());
    out.extend_from_slice(&ih.compression.to_le_bytes());
    out.extend_from_slice(&(pixels.len() as u32).to_le_bytes());
    out.extend_from_slice(&ih.x_pixels_per_meter.to_le_bytes());
    out.extend_from_slice(&ih.y_pixels_per_meter.to_le_bytes());
    out.extend_from_slice(&ih.colors_used.to_le_bytes());
    out.extend_from_slice(&ih.colors_important.to_le_bytes());

    out.extend_from_slice(pixels);
    out
}
