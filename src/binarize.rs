//! Two-tone classification and parallel threshold conversion.

use std::ops::Range;
use std::thread;

use rayon::prelude::*;

use crate::error::BmpError;
use crate::image::Image;

/// Luma value separating black output pixels from white ones.
pub const LUMA_THRESHOLD: f64 = 128.0;

/// BT.709 luma of one pixel.
fn luma(r: u8, g: u8, b: u8) -> f64 {
    0.2126 * r as f64 + 0.7152 * g as f64 + 0.0722 * b as f64
}

/// Whether every pixel is already pure black or pure white.
///
/// Early-exits on the first pixel that is neither, so a typical
/// non-binary image answers after a handful of reads.
pub fn is_binary(img: &Image) -> bool {
    for y in 0..img.height() {
        for x in 0..img.width() {
            let (r, g, b) = img.rgb_at(x, y);
            let pure =
                (r == 255 && g == 255 && b == 255) || (r == 0 && g == 0 && b == 0);
            if !pure {
                return false;
            }
        }
    }
    true
}

/// Threshold every pixel to pure black or pure white, in parallel.
///
/// Rows are split into one contiguous band per available core. Each band
/// reads only the shared pre-conversion buffer and writes only its own
/// disjoint slice of a fresh output buffer, so the join is the only
/// synchronization. The fresh buffer starts as a copy of the source, which
/// carries row padding and any alpha bytes through untouched; only the
/// B,G,R bytes of each pixel are assigned. On success the output buffer
/// replaces the image's buffer wholesale.
pub fn binarize(img: &mut Image) -> Result<(), BmpError> {
    let width = img.width();
    let height = img.height();
    let stride = img.row_stride();
    let bytes_per_pixel = img.bytes_per_pixel();
    let src = img.pixels();

    let needed = stride * height;
    if src.len() < needed {
        return Err(BmpError::TruncatedPixelData {
            needed,
            actual: src.len(),
        });
    }

    let mut out = src.to_vec();

    let bands = row_bands(height, worker_count());
    let mut slices = Vec::with_capacity(bands.len());
    let mut rest = out.as_mut_slice();
    for band in &bands {
        let (head, tail) = std::mem::take(&mut rest).split_at_mut(band.len() * stride);
        slices.push(head);
        rest = tail;
    }

    bands
        .into_par_iter()
        .zip(slices)
        .try_for_each(|(rows, dst)| {
            for (i, dst_row) in dst.chunks_exact_mut(stride).enumerate() {
                let y = rows.start + i;
                let src_row = src.get(y * stride..(y + 1) * stride).ok_or(
                    BmpError::TruncatedPixelData {
                        needed: (y + 1) * stride,
                        actual: src.len(),
                    },
                )?;
                for x in 0..width {
                    let off = x * bytes_per_pixel;
                    let (b, g, r) = (src_row[off], src_row[off + 1], src_row[off + 2]);
                    let v = if luma(r, g, b) < LUMA_THRESHOLD { 0 } else { 255 };
                    dst_row[off] = v;
                    dst_row[off + 1] = v;
                    dst_row[off + 2] = v;
                }
            }
            Ok::<(), BmpError>(())
        })?;

    img.replace_pixels(out);
    Ok(())
}

fn worker_count() -> usize {
    thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
}

/// Split `[0, height)` into at most `workers` contiguous bands.
///
/// Floor division sizes every band but the last; the last absorbs the
/// remainder rows. The bands cover every row exactly once.
fn row_bands(height: usize, workers: usize) -> Vec<Range<usize>> {
    let workers = workers.clamp(1, height.max(1));
    let per_band = height / workers;
    (0..workers)
        .map(|i| {
            let start = i * per_band;
            let end = if i + 1 == workers { height } else { start + per_band };
            start..end
        })
        .collect()
}
