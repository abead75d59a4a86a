//! Uncompressed BMP codec (24/32-bit, bottom-up rows).

mod decode;
mod encode;

use std::fs;
use std::path::Path;

use crate::error::BmpError;
use crate::image::Image;

/// Decode a BMP byte stream.
pub fn decode(data: &[u8]) -> Result<Image, BmpError> {
    decode::decode(data)
}

/// Encode an image back into BMP bytes.
pub fn encode(img: &Image) -> Vec<u8> {
    encode::encode(img)
}

/// Read and decode a BMP file.
pub fn open(path: impl AsRef<Path>) -> Result<Image, BmpError> {
    let data = fs::read(path)?;
    decode(&data)
}

/// Encode `img` and write it to `path`.
///
/// The byte stream is built in full before a single write, so a failed
/// encode never leaves a partial file behind.
pub fn save(img: &Image, path: impl AsRef<Path>) -> Result<(), BmpError> {
    fs::write(path, encode(img))?;
    Ok(())
}
