//! High-pass sharpening masks and high-boost filtering.

use crate::error::EngineError;
use crate::filter::{map_window, mask_at, Mask3};
use crate::raster::clamp_u8;
use crate::RasterImage;
use tracing::debug;

const H1: Mask3 = [0, -1, 0, -1, 4, -1, 0, -1, 0];
const H2: Mask3 = [-1, -1, -1, -1, 8, -1, -1, -1, -1];
const M1: Mask3 = [-1, -1, -1, -1, 9, -1, -1, -1, -1];
const M2: Mask3 = [1, -2, 1, -2, 5, -2, 1, -2, 1];
const M3: Mask3 = [0, -1, 0, -1, 5, -1, 0, -1, 0];

/// The workbench's five sharpening masks. H1/H2 are pure Laplacians (flat
/// areas go black); M1/M2/M3 add the original back in, keeping flat areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighPassMask {
    H1,
    H2,
    M1,
    M2,
    M3,
}

impl HighPassMask {
    fn mask(self) -> &'static Mask3 {
        match self {
            HighPassMask::H1 => &H1,
            HighPassMask::H2 => &H2,
            HighPassMask::M1 => &M1,
            HighPassMask::M2 => &M2,
            HighPassMask::M3 => &M3,
        }
    }
}

/// Convolve with one of the sharpening masks, channel by channel with
/// clamped store.
pub fn high_pass(image: &RasterImage, mask: HighPassMask) -> Result<RasterImage, EngineError> {
    debug!(?mask, "high-pass filter");
    let weights = mask.mask();
    map_window(image, 1, |cx, cy| {
        [
            clamp_u8(mask_at(image, cx, cy, weights, 0)),
            clamp_u8(mask_at(image, cx, cy, weights, 1)),
            clamp_u8(mask_at(image, cx, cy, weights, 2)),
        ]
    })
}

/// High-boost sharpening: a 3x3 mask of -1s with center `9 * factor - 1`,
/// equivalent to `(1 + a) * original - a * lowpass` with `a = factor - 1`.
///
/// `factor` must be finite and positive; 1.0 reduces to the H2 Laplacian
/// (center `9 * 1 - 1 = 8`).
pub fn high_boost(image: &RasterImage, factor: f64) -> Result<RasterImage, EngineError> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(EngineError::InvalidParameter(format!(
            "high-boost factor must be finite and positive, got {factor}"
        )));
    }
    debug!(factor, "high-boost filter");

    let center = 9.0 * factor - 1.0;
    map_window(image, 1, |cx, cy| {
        let mut rgb = [0u8; 3];
        for (channel, out) in rgb.iter_mut().enumerate() {
            let mut sum = 0.0;
            for dy in -1..=1i32 {
                for dx in -1..=1i32 {
                    let x = (cx as i32 + dx) as u32;
                    let y = (cy as i32 + dy) as u32;
                    let v = image.pixels()[image.offset(x, y) + channel] as f64;
                    sum += if dx == 0 && dy == 0 { center * v } else { -v };
                }
            }
            *out = clamp_u8(sum);
        }
        rgb
    })
}
