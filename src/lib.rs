//! # bmpcross
//!
//! Uncompressed BMP (24/32-bit) two-tone converter with a diagonal cross
//! overlay and ASCII preview.
//!
//! Pipeline: [`bmp::decode`] → [`binarize::is_binary`] →
//! [`binarize::binarize`] (skipped for images that are already two-tone) →
//! [`raster::draw_cross`] → [`render::render`] and/or [`bmp::encode`].
//!
//! ## Supported input
//!
//! - BITMAPINFOHEADER files (40-byte info header; larger headers decode as
//!   long as the declared pixel-data offset is honest)
//! - 24-bit BGR and 32-bit BGRA, uncompressed, bottom-up row order
//!
//! The decoded [`Image`] keeps the on-disk buffer layout (bottom-up rows,
//! BGR(A) byte order, 4-byte row padding), so encoding it back preserves
//! the pixel data byte-for-byte.
//!
//! ## Non-Goals
//!
//! - Compressed (RLE/bitfields), indexed-palette, or sub-byte bit depths
//! - Top-down (negative-height) row order: rejected, not mis-rendered
//! - Color management beyond the fixed BT.709 luma threshold
//!
//! ## Usage
//!
//! ```no_run
//! use bmpcross::{binarize, bmp, raster, render};
//!
//! let mut img = bmp::open("photo.bmp")?;
//! if !binarize::is_binary(&img) {
//!     binarize::binarize(&mut img)?;
//! }
//! raster::draw_cross(&mut img);
//! render::render(&img, &mut std::io::stdout().lock())?;
//! bmp::save(&img, "crossed.bmp")?;
//! # Ok::<(), bmpcross::BmpError>(())
//! ```

#![forbid(unsafe_code)]

pub mod binarize;
pub mod bmp;
mod error;
mod image;
pub mod raster;
pub mod render;

// Re-exports
pub use error::BmpError;
pub use image::{FileHeader, Image, InfoHeader};
