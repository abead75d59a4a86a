//! Integer line rasterization for the cross overlay.

use crate::image::Image;

/// Plot a straight segment from `(x1, y1)` to `(x2, y2)` in pure black.
///
/// Classic Bresenham stepping with independent sign steps, symmetric
/// across all eight octants. Both endpoints are plotted. Coordinates that
/// fall outside the image are skipped silently; running off the edge is
/// expected near corners and never aborts the draw.
pub fn draw_line(img: &mut Image, mut x1: i32, mut y1: i32, x2: i32, y2: i32) {
    let dx = (x2 - x1).abs();
    let dy = (y2 - y1).abs();
    let sx = if x1 < x2 { 1 } else { -1 };
    let sy = if y1 < y2 { 1 } else { -1 };
    let mut err = dx - dy;

    loop {
        img.set_black(x1, y1);

        if x1 == x2 && y1 == y2 {
            break;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x1 += sx;
        }
        if e2 < dx {
            err += dx;
            y1 += sy;
        }
    }
}

/// Overlay the two corner-to-corner diagonals.
pub fn draw_cross(img: &mut Image) {
    let w = img.width() as i32;
    let h = img.height() as i32;
    draw_line(img, 0, 0, w - 1, h - 1);
    draw_line(img, w - 1, 0, 0, h - 1);
}
