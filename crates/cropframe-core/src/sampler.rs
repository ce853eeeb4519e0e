use image::RgbaImage;

use crate::consts::{BORDER_SAMPLE_WIDTH, DEFAULT_BACKGROUND_COLOR};

/// Average color of the image's outer ring, used as the letterbox fill.
///
/// Walks a `BORDER_SAMPLE_WIDTH`-pixel ring: full top and bottom bands, then
/// the left and right bands between them so corners are counted once. On
/// buffers thinner than the ring the bands overlap and some pixels are
/// counted twice. Alpha is ignored. An empty buffer yields white.
pub fn sample_border_color(pixels: &RgbaImage) -> [u8; 3] {
    let (w, h) = pixels.dimensions();
    if w == 0 || h == 0 {
        return DEFAULT_BACKGROUND_COLOR;
    }

    let band_h = BORDER_SAMPLE_WIDTH.min(h);
    let band_w = BORDER_SAMPLE_WIDTH.min(w);

    let mut sum = [0u64; 3];
    let mut count = 0u64;
    let mut add = |x: u32, y: u32| {
        let p = pixels.get_pixel(x, y).0;
        sum[0] += p[0] as u64;
        sum[1] += p[1] as u64;
        sum[2] += p[2] as u64;
        count += 1;
    };

    for y in (0..band_h).chain(h - band_h..h) {
        for x in 0..w {
            add(x, y);
        }
    }

    let side_rows = BORDER_SAMPLE_WIDTH..h.saturating_sub(BORDER_SAMPLE_WIDTH);
    for y in side_rows {
        for x in (0..band_w).chain(w - band_w..w) {
            add(x, y);
        }
    }

    let mean = |s: u64| (s as f64 / count as f64).round() as u8;
    [mean(sum[0]), mean(sum[1]), mean(sum[2])]
}
