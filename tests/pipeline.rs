use bmpcross::{Image, binarize, bmp, raster, render};

const WHITE: (u8, u8, u8) = (255, 255, 255);
const BLACK: (u8, u8, u8) = (0, 0, 0);

/// Build a BMP byte stream; `rgb` is in storage order (row 0 = bottom).
fn build_bmp(width: usize, height: usize, bit_count: u16, rgb: &[(u8, u8, u8)]) -> Vec<u8> {
    assert_eq!(rgb.len(), width * height);
    let bpp = bit_count as usize / 8;
    let stride = (width * bpp + 3) & !3;
    let data_len = stride * height;

    let mut out = Vec::with_capacity(54 + data_len);
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&((54 + data_len) as u32).to_le_bytes());
    out.extend_from_slice(&[0u8; 4]);
    out.extend_from_slice(&54u32.to_le_bytes());
    out.extend_from_slice(&40u32.to_le_bytes());
    out.extend_from_slice(&(width as i32).to_le_bytes());
    out.extend_from_slice(&(height as i32).to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&bit_count.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&(data_len as u32).to_le_bytes());
    out.extend_from_slice(&[0u8; 16]);

    for y in 0..height {
        for x in 0..width {
            let (r, g, b) = rgb[y * width + x];
            out.push(b);
            out.push(g);
            out.push(r);
            if bpp == 4 {
                out.push(255);
            }
        }
        out.extend(std::iter::repeat_n(0u8, stride - width * bpp));
    }
    out
}

fn solid(width: usize, height: usize, color: (u8, u8, u8)) -> Image {
    let rgb = vec![color; width * height];
    bmp::decode(&build_bmp(width, height, 24, &rgb)).unwrap()
}

fn render_string(img: &Image) -> String {
    let mut out = Vec::new();
    render::render(img, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn black_pixels(img: &Image) -> Vec<(usize, usize)> {
    let mut hits = Vec::new();
    for y in 0..img.height() {
        for x in 0..img.width() {
            if img.rgb_at(x, y) == (0, 0, 0) {
                hits.push((x, y));
            }
        }
    }
    hits
}

// ── Classifier ──────────────────────────────────────────────────────

#[test]
fn checkerboard_is_binary_and_renders_unchanged() {
    // Top image row (storage row 1): white, black; bottom: black, white
    let rgb = [BLACK, WHITE, WHITE, BLACK];
    let img = bmp::decode(&build_bmp(2, 2, 24, &rgb)).unwrap();

    assert!(binarize::is_binary(&img));
    // height 2 samples one row: the top image row
    assert_eq!(render_string(&img), " #\n");
}

#[test]
fn single_off_pixel_is_not_binary() {
    for (i, color) in [(0, (254, 255, 255)), (2, (0, 0, 1)), (3, (128, 128, 128))] {
        let mut rgb = [WHITE, BLACK, BLACK, WHITE];
        rgb[i] = color;
        let img = bmp::decode(&build_bmp(2, 2, 24, &rgb)).unwrap();
        assert!(!binarize::is_binary(&img), "pixel {i} set to {color:?}");
    }
}

#[test]
fn mid_gray_binarizes_to_white() {
    // Luma of (128,128,128) is exactly 128.0, the white side of the threshold
    let mut img = solid(4, 4, (128, 128, 128));
    assert!(!binarize::is_binary(&img));

    binarize::binarize(&mut img).unwrap();
    for y in 0..4 {
        for x in 0..4 {
            assert_eq!(img.rgb_at(x, y), (255, 255, 255));
        }
    }
    assert!(binarize::is_binary(&img));
}

#[test]
fn dark_gray_binarizes_to_black() {
    let mut img = solid(3, 3, (127, 127, 127));
    binarize::binarize(&mut img).unwrap();
    for y in 0..3 {
        for x in 0..3 {
            assert_eq!(img.rgb_at(x, y), (0, 0, 0));
        }
    }
}

#[test]
fn binarize_follows_luma_not_average() {
    // Saturated green is bright (luma 182), saturated blue is dark (luma 18)
    let rgb = [(0, 255, 0), (0, 0, 255)];
    let mut img = bmp::decode(&build_bmp(2, 1, 24, &rgb)).unwrap();
    binarize::binarize(&mut img).unwrap();
    assert_eq!(img.rgb_at(0, 0), (255, 255, 255));
    assert_eq!(img.rgb_at(1, 0), (0, 0, 0));
}

#[test]
fn binarize_leaves_alpha_and_padding_untouched() {
    // 32-bit: give the single pixel a distinctive alpha byte
    let mut data = build_bmp(1, 1, 32, &[(90, 90, 90)]);
    data[54 + 3] = 0x7F;
    let mut img = bmp::decode(&data).unwrap();
    binarize::binarize(&mut img).unwrap();
    assert_eq!(img.rgb_at(0, 0), (0, 0, 0));
    assert_eq!(img.pixels()[3], 0x7F);

    // 24-bit: 1-wide rows carry one padding byte, marked here
    let mut data = build_bmp(1, 2, 24, &[(200, 200, 200); 2]);
    data[54 + 3] = 0xEE;
    let mut img = bmp::decode(&data).unwrap();
    binarize::binarize(&mut img).unwrap();
    assert_eq!(img.rgb_at(0, 0), (255, 255, 255));
    assert_eq!(img.pixels()[3], 0xEE);
}

#[test]
fn binarize_handles_heights_that_split_unevenly() {
    // Heights around and below typical core counts stress the row banding
    for height in [1, 2, 3, 5, 17] {
        let mut img = solid(3, height, (30, 200, 60));
        binarize::binarize(&mut img).unwrap();
        for y in 0..height {
            for x in 0..3 {
                let px = img.rgb_at(x, y);
                assert!(px == (0, 0, 0) || px == (255, 255, 255));
            }
        }
        assert!(binarize::is_binary(&img));
    }
}

// ── Rasterizer ──────────────────────────────────────────────────────

#[test]
fn line_plots_same_pixels_in_both_directions() {
    let endpoints = [
        ((0, 0), (6, 4)),
        ((6, 0), (0, 4)),
        ((1, 4), (5, 0)),
        ((0, 2), (6, 2)),
        ((3, 0), (3, 4)),
        ((2, 1), (2, 1)),
    ];
    for ((x1, y1), (x2, y2)) in endpoints {
        let mut forward = solid(7, 5, WHITE);
        let mut backward = solid(7, 5, WHITE);
        raster::draw_line(&mut forward, x1, y1, x2, y2);
        raster::draw_line(&mut backward, x2, y2, x1, y1);
        assert_eq!(
            black_pixels(&forward),
            black_pixels(&backward),
            "({x1},{y1})-({x2},{y2})"
        );
    }
}

#[test]
fn line_clips_out_of_bounds_plots_silently() {
    let mut img = solid(5, 5, WHITE);
    raster::draw_line(&mut img, -3, -2, 12, 9);
    for (x, y) in black_pixels(&img) {
        assert!(x < 5 && y < 5);
    }

    // A horizontal run straight off the right edge keeps only the in-bounds part
    let mut img = solid(5, 5, WHITE);
    raster::draw_line(&mut img, 0, 1, 20, 1);
    assert_eq!(
        black_pixels(&img),
        vec![(0, 1), (1, 1), (2, 1), (3, 1), (4, 1)]
    );
}

#[test]
fn cross_on_10x10_plots_both_diagonals() {
    let mut img = solid(10, 10, WHITE);
    raster::draw_cross(&mut img);

    let hits = black_pixels(&img);
    for i in 0..10 {
        assert!(hits.contains(&(i, i)), "main diagonal at {i}");
        assert!(hits.contains(&(9 - i, i)), "anti diagonal at {i}");
    }
    // all four corners, each plotted exactly once: 2 full diagonals, no overlap
    assert_eq!(hits.len(), 20);
}

#[test]
fn cross_on_single_pixel_image() {
    let mut img = solid(1, 1, WHITE);
    raster::draw_cross(&mut img);
    assert_eq!(black_pixels(&img), vec![(0, 0)]);
}

// ── Renderer ────────────────────────────────────────────────────────

#[test]
fn render_samples_every_second_row_top_down() {
    // Storage rows bottom-up: row 0 white, row 1 white, row 2 black.
    // Height 3 samples storage rows 2 and 0.
    let mut rgb = vec![WHITE; 12];
    for px in rgb.iter_mut().skip(8) {
        *px = BLACK;
    }
    let img = bmp::decode(&build_bmp(4, 3, 24, &rgb)).unwrap();
    assert_eq!(render_string(&img), "####\n    \n");
}

#[test]
fn render_marks_anything_but_pure_white_filled() {
    let rgb = [(255, 255, 255), (255, 255, 254), (1, 1, 1), (0, 0, 0)];
    let img = bmp::decode(&build_bmp(4, 1, 24, &rgb)).unwrap();
    assert_eq!(render_string(&img), " ###\n");
}

// ── End to end ──────────────────────────────────────────────────────

#[test]
fn full_pipeline_roundtrips_through_the_codec() {
    let mut img = solid(8, 6, (200, 160, 90));

    if !binarize::is_binary(&img) {
        binarize::binarize(&mut img).unwrap();
    }
    raster::draw_cross(&mut img);

    let encoded = bmp::encode(&img);
    let reloaded = bmp::decode(&encoded).unwrap();
    assert_eq!(reloaded.pixels(), img.pixels());
    assert_eq!(reloaded.info_header(), img.info_header());
    assert!(binarize::is_binary(&reloaded));
    assert_eq!(render_string(&reloaded), render_string(&img));
}
