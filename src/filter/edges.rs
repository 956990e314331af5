//! Edge detection: Roberts, Prewitt, Sobel and Kirsch operators.
//!
//! Directional operators (Gx/Gy) convolve each color channel and clamp, so
//! opposite-sign responses floor at black. The magnitude variants compute
//! `sqrt(gx^2 + gy^2)` on the mean-channel intensity and emit grayscale.
//! Roberts works on its native 2x2 window and shrinks one pixel at the
//! right and bottom only; all 3x3 operators shrink one pixel per side.

use crate::error::EngineError;
use crate::filter::{map_window, mask_at, Mask3};
use crate::raster::{clamp_u8, RasterBuilder};
use crate::RasterImage;
use tracing::debug;

const PREWITT_GX: Mask3 = [-1, 0, 1, -1, 0, 1, -1, 0, 1];
const PREWITT_GY: Mask3 = [-1, -1, -1, 0, 0, 0, 1, 1, 1];
const SOBEL_GX: Mask3 = [-1, 0, 1, -2, 0, 2, -1, 0, 1];
const SOBEL_GY: Mask3 = [-1, -2, -1, 0, 0, 0, 1, 2, 1];

const KIRSCH: [Mask3; 8] = [
    [5, 5, 5, -3, 0, -3, -3, -3, -3],
    [5, 5, -3, 5, 0, -3, -3, -3, -3],
    [5, -3, -3, 5, 0, -3, 5, -3, -3],
    [-3, -3, -3, 5, 0, -3, 5, 5, -3],
    [-3, -3, -3, -3, 0, -3, 5, 5, 5],
    [-3, -3, -3, -3, 0, 5, -3, 5, 5],
    [-3, -3, 5, -3, 0, 5, -3, -3, 5],
    [-3, 5, 5, -3, 0, 5, -3, -3, -3],
];

/// Available edge detectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeDetector {
    /// 2x2 `|gx + gy|` per channel.
    Roberts,
    /// 2x2 `sqrt(gx^2 + gy^2)` per channel.
    CrossedRoberts,
    PrewittGx,
    PrewittGy,
    /// Gradient magnitude of the Prewitt pair on intensity.
    PrewittMagnitude,
    SobelGx,
    SobelGy,
    /// Gradient magnitude of the Sobel pair on intensity.
    SobelMagnitude,
    /// Maximum response over the eight compass masks, per channel.
    Kirsch,
}

/// Run the selected edge detector.
pub fn detect(image: &RasterImage, detector: EdgeDetector) -> Result<RasterImage, EngineError> {
    debug!(?detector, "edge detection");
    match detector {
        EdgeDetector::Roberts => roberts(image, false),
        EdgeDetector::CrossedRoberts => roberts(image, true),
        EdgeDetector::PrewittGx => directional(image, &PREWITT_GX),
        EdgeDetector::PrewittGy => directional(image, &PREWITT_GY),
        EdgeDetector::PrewittMagnitude => magnitude(image, &PREWITT_GX, &PREWITT_GY),
        EdgeDetector::SobelGx => directional(image, &SOBEL_GX),
        EdgeDetector::SobelGy => directional(image, &SOBEL_GY),
        EdgeDetector::SobelMagnitude => magnitude(image, &SOBEL_GX, &SOBEL_GY),
        EdgeDetector::Kirsch => kirsch(image),
    }
}

fn roberts(image: &RasterImage, crossed: bool) -> Result<RasterImage, EngineError> {
    if image.width() < 2 || image.height() < 2 {
        return Err(EngineError::InvalidParameter(format!(
            "image {}x{} too small for a 2x2 window",
            image.width(),
            image.height()
        )));
    }

    let p = image.pixels();
    let mut builder = RasterBuilder::new(image.width() - 1, image.height() - 1);
    for y in 0..image.height() - 1 {
        for x in 0..image.width() - 1 {
            let mut rgb = [0u8; 3];
            for (channel, out) in rgb.iter_mut().enumerate() {
                let tl = p[image.offset(x, y) + channel] as f64;
                let tr = p[image.offset(x + 1, y) + channel] as f64;
                let bl = p[image.offset(x, y + 1) + channel] as f64;
                let br = p[image.offset(x + 1, y + 1) + channel] as f64;

                let gx = tl - br;
                let gy = tr - bl;
                let response = if crossed {
                    gx.hypot(gy)
                } else {
                    (gx + gy).abs()
                };
                *out = clamp_u8(response);
            }
            builder.put_rgb(x, y, rgb);
        }
    }
    Ok(builder.freeze())
}

fn directional(image: &RasterImage, mask: &Mask3) -> Result<RasterImage, EngineError> {
    map_window(image, 1, |cx, cy| {
        [
            clamp_u8(mask_at(image, cx, cy, mask, 0)),
            clamp_u8(mask_at(image, cx, cy, mask, 1)),
            clamp_u8(mask_at(image, cx, cy, mask, 2)),
        ]
    })
}

fn magnitude(image: &RasterImage, gx: &Mask3, gy: &Mask3) -> Result<RasterImage, EngineError> {
    map_window(image, 1, |cx, cy| {
        let mut gx_sum = 0.0;
        let mut gy_sum = 0.0;
        let mut k = 0;
        for dy in -1..=1i32 {
            for dx in -1..=1i32 {
                let x = (cx as i32 + dx) as u32;
                let y = (cy as i32 + dy) as u32;
                let v = image.intensity_at(x, y);
                gx_sum += gx[k] as f64 * v;
                gy_sum += gy[k] as f64 * v;
                k += 1;
            }
        }
        let v = clamp_u8(gx_sum.hypot(gy_sum));
        [v, v, v]
    })
}

fn kirsch(image: &RasterImage) -> Result<RasterImage, EngineError> {
    map_window(image, 1, |cx, cy| {
        let mut rgb = [0u8; 3];
        for (channel, out) in rgb.iter_mut().enumerate() {
            let strongest = KIRSCH
                .iter()
                .map(|mask| mask_at(image, cx, cy, mask, channel))
                .fold(f64::MIN, f64::max);
            *out = clamp_u8(strongest);
        }
        rgb
    })
}
