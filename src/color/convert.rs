//! RGB color-space decompositions into per-component planes.
//!
//! HSB and YUV emit three grayscale planes; CMYK emits four planes where the
//! C/M/Y planes visualize ink coverage by dropping the complementary channel
//! and the key plane is grayscale `255 - max(R, G, B)`.

use crate::raster::{clamp_u8, RasterBuilder};
use crate::RasterImage;
use tracing::debug;

/// Hue, saturation and brightness of one pixel, in degrees / percent.
///
/// Hue is 0 for achromatic pixels (delta 0), matching the convention the
/// workbench has always displayed.
fn rgb_to_hsb_components(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    let max_u8 = r.max(g).max(b);

    let rf = r as f64 / 255.0;
    let gf = g as f64 / 255.0;
    let bf = b as f64 / 255.0;

    let max = rf.max(gf).max(bf);
    let min = rf.min(gf).min(bf);
    let delta = max - min;

    let brightness = max;
    if delta == 0.0 {
        return (0.0, 0.0, brightness * 100.0);
    }

    let saturation = delta / max;

    let delta_r = ((max - rf) / 6.0 + delta / 2.0) / delta;
    let delta_g = ((max - gf) / 6.0 + delta / 2.0) / delta;
    let delta_b = ((max - bf) / 6.0 + delta / 2.0) / delta;

    let mut hue = if r == max_u8 {
        delta_b - delta_g
    } else if g == max_u8 {
        1.0 / 3.0 + delta_r - delta_b
    } else {
        2.0 / 3.0 + delta_g - delta_r
    };

    if hue < 0.0 {
        hue += 1.0;
    }
    if hue > 1.0 {
        hue -= 1.0;
    }

    (hue * 360.0, saturation * 100.0, brightness * 100.0)
}

/// Decompose into hue, saturation and brightness planes.
///
/// Each plane is grayscale with its component rescaled to `[0, 255]`
/// (hue from `[0, 360)`, saturation and brightness from `[0, 100]`).
pub fn rgb_to_hsb(image: &RasterImage) -> [RasterImage; 3] {
    debug!(width = image.width(), height = image.height(), "RGB to HSB");

    let mut hue = RasterBuilder::new(image.width(), image.height());
    let mut saturation = RasterBuilder::new(image.width(), image.height());
    let mut brightness = RasterBuilder::new(image.width(), image.height());

    for y in 0..image.height() {
        for x in 0..image.width() {
            let [r, g, b] = image.rgb(x, y);
            let (h, s, v) = rgb_to_hsb_components(r, g, b);
            hue.put_gray(x, y, clamp_u8(h / 360.0 * 255.0));
            saturation.put_gray(x, y, clamp_u8(s / 100.0 * 255.0));
            brightness.put_gray(x, y, clamp_u8(v / 100.0 * 255.0));
        }
    }

    [hue.freeze(), saturation.freeze(), brightness.freeze()]
}

/// Decompose into Y, U and V planes (BT.601 luma, biased chroma).
///
/// U and V are offset by +128 so the zero-chroma point sits mid-gray;
/// out-of-range results clamp.
pub fn rgb_to_yuv(image: &RasterImage) -> [RasterImage; 3] {
    debug!(width = image.width(), height = image.height(), "RGB to YUV");

    let mut luma = RasterBuilder::new(image.width(), image.height());
    let mut u_plane = RasterBuilder::new(image.width(), image.height());
    let mut v_plane = RasterBuilder::new(image.width(), image.height());

    for y in 0..image.height() {
        for x in 0..image.width() {
            let [r, g, b] = image.rgb(x, y);
            let (rf, gf, bf) = (r as f64, g as f64, b as f64);

            let yy = 0.299 * rf + 0.587 * gf + 0.114 * bf;
            let u = -0.14713 * rf - 0.28886 * gf + 0.436 * bf + 128.0;
            let v = 0.615 * rf - 0.51498 * gf - 0.10001 * bf + 128.0;

            luma.put_gray(x, y, clamp_u8(yy));
            u_plane.put_gray(x, y, clamp_u8(u));
            v_plane.put_gray(x, y, clamp_u8(v));
        }
    }

    [luma.freeze(), u_plane.freeze(), v_plane.freeze()]
}

/// Decompose into cyan, magenta, yellow and key planes.
///
/// The chromatic planes visualize ink coverage by zeroing the complementary
/// channel (cyan drops R, magenta drops G, yellow drops B); the key plane is
/// grayscale `255 - max(R, G, B)`.
pub fn rgb_to_cmyk(image: &RasterImage) -> [RasterImage; 4] {
    debug!(width = image.width(), height = image.height(), "RGB to CMYK");

    let mut cyan = RasterBuilder::new(image.width(), image.height());
    let mut magenta = RasterBuilder::new(image.width(), image.height());
    let mut yellow = RasterBuilder::new(image.width(), image.height());
    let mut key = RasterBuilder::new(image.width(), image.height());

    for y in 0..image.height() {
        for x in 0..image.width() {
            let [r, g, b] = image.rgb(x, y);
            let k = 255 - r.max(g).max(b);

            cyan.put_rgb(x, y, [0, g, b]);
            magenta.put_rgb(x, y, [r, 0, b]);
            yellow.put_rgb(x, y, [r, g, 0]);
            key.put_gray(x, y, k);
        }
    }

    [cyan.freeze(), magenta.freeze(), yellow.freeze(), key.freeze()]
}
