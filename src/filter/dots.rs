//! Isolated-point detection with an adjustable noise floor.

use crate::error::EngineError;
use crate::filter::{map_window, mask_at, Mask3};
use crate::raster::clamp_u8;
use crate::RasterImage;
use tracing::debug;

const DOT_MASK: Mask3 = [-1, -1, -1, -1, 8, -1, -1, -1, -1];

/// Laplacian point detector: convolve each channel with the 8-center mask
/// and zero responses below `factor * 10`, leaving only isolated bright
/// points.
///
/// `factor` must be finite and non-negative.
pub fn detect(image: &RasterImage, factor: f64) -> Result<RasterImage, EngineError> {
    if !factor.is_finite() || factor < 0.0 {
        return Err(EngineError::InvalidParameter(format!(
            "dot detection factor must be finite and non-negative, got {factor}"
        )));
    }

    let floor = factor * 10.0;
    debug!(factor, floor, "dot detection");

    map_window(image, 1, |cx, cy| {
        let mut rgb = [0u8; 3];
        for (channel, out) in rgb.iter_mut().enumerate() {
            let response = mask_at(image, cx, cy, &DOT_MASK, channel);
            *out = if response < floor { 0 } else { clamp_u8(response) };
        }
        rgb
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::RasterBuilder;

    fn dotted() -> RasterImage {
        let mut builder = RasterBuilder::new(3, 3);
        builder.fill([20, 20, 20, 255]);
        builder.put_gray(1, 1, 60);
        builder.freeze()
    }

    #[test]
    fn test_detects_an_isolated_dot() {
        let detected = detect(&dotted(), 1.0).unwrap();
        assert_eq!(detected.width(), 1);
        // 8 * 60 - 8 * 20 = 320, clamped.
        assert_eq!(detected.get(0, 0).unwrap(), [255, 255, 255, 255]);
    }

    #[test]
    fn test_noise_floor_suppresses_weak_responses() {
        // Response is 8 * (21 - 20) = 8; floors at factor 1 (8 < 10).
        let mut builder = RasterBuilder::new(3, 3);
        builder.fill([20, 20, 20, 255]);
        builder.put_gray(1, 1, 21);
        let image = builder.freeze();

        let suppressed = detect(&image, 1.0).unwrap();
        assert_eq!(suppressed.get(0, 0).unwrap(), [0, 0, 0, 255]);

        let kept = detect(&image, 0.0).unwrap();
        assert_eq!(kept.get(0, 0).unwrap(), [8, 8, 8, 255]);
    }

    #[test]
    fn test_flat_input_is_silent() {
        let image = RasterImage::solid(3, 3, [90, 90, 90, 255]);
        let detected = detect(&image, 0.0).unwrap();
        assert_eq!(detected.get(0, 0).unwrap(), [0, 0, 0, 255]);
    }

    #[test]
    fn test_rejects_bad_factor() {
        let image = RasterImage::solid(3, 3, [0, 0, 0, 255]);
        for factor in [-1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                detect(&image, factor),
                Err(EngineError::InvalidParameter(_))
            ));
        }
    }
}
