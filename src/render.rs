//! ASCII rendering of a two-tone image to a text sink.

use std::io::{self, Write};

use crate::image::Image;

/// Glyph emitted for a pure-white pixel.
pub const WHITE_GLYPH: u8 = b' ';
/// Glyph emitted for every other pixel.
pub const BLACK_GLYPH: u8 = b'#';

/// Write `img` as ASCII art: one glyph per pixel column, sampling every
/// second row.
///
/// Storage rows are bottom-up, so emission walks from the top storage row
/// downward to print the image the right way up.
pub fn render(img: &Image, out: &mut impl Write) -> io::Result<()> {
    let mut line = Vec::with_capacity(img.width() + 1);
    for y in (0..img.height()).rev().step_by(2) {
        line.clear();
        for x in 0..img.width() {
            let (r, g, b) = img.rgb_at(x, y);
            let white = r == 255 && g == 255 && b == 255;
            line.push(if white { WHITE_GLYPH } else { BLACK_GLYPH });
        }
        line.push(b'\n');
        out.write_all(&line)?;
    }
    Ok(())
}
