//! Point enhancement: interval highlighting, binarization, negation and the
//! gray-level mapping curves (log, square root, exponential, squared, gamma).
//!
//! The mapping curves collapse each pixel to its mean-channel intensity and
//! write the mapped value to all three channels; negation and gamma work per
//! channel and preserve color.

use crate::error::EngineError;
use crate::raster::{clamp_u8, luma601, RasterBuilder};
use crate::RasterImage;
use tracing::debug;

/// Multiplier applied to pixels selected by [`interval`].
const INTERVAL_STRETCH: f64 = 2.5;

/// Default decay constant for [`exponential`].
pub const DEFAULT_EXPONENTIAL_ALPHA: f64 = 0.1;

/// A closed gray-level sub-range selected for highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub min: u8,
    pub max: u8,
}

impl Interval {
    fn contains(&self, gray: f64) -> bool {
        gray >= self.min as f64 && gray <= self.max as f64
    }
}

/// Brighten the pixels whose BT.601 luma falls inside any of the given
/// intervals by a fixed contrast stretch; everything else passes through
/// unchanged.
///
/// An interval with `min > max` selects nothing meaningful and is rejected
/// as [`EngineError::InvalidParameter`].
pub fn interval(image: &RasterImage, intervals: &[Interval]) -> Result<RasterImage, EngineError> {
    for iv in intervals {
        if iv.min > iv.max {
            return Err(EngineError::InvalidParameter(format!(
                "interval min {} exceeds max {}",
                iv.min, iv.max
            )));
        }
    }

    debug!(count = intervals.len(), "interval enhancement");

    let mut builder = RasterBuilder::new(image.width(), image.height());
    for y in 0..image.height() {
        for x in 0..image.width() {
            let [r, g, b] = image.rgb(x, y);
            let gray = luma601(r, g, b);
            if intervals.iter().any(|iv| iv.contains(gray)) {
                builder.put_rgb(
                    x,
                    y,
                    [
                        clamp_u8(r as f64 * INTERVAL_STRETCH),
                        clamp_u8(g as f64 * INTERVAL_STRETCH),
                        clamp_u8(b as f64 * INTERVAL_STRETCH),
                    ],
                );
            } else {
                builder.put_rgb(x, y, [r, g, b]);
            }
        }
    }
    Ok(builder.freeze())
}

/// Binarize at the fixed midpoint: mean intensity below 128 goes black,
/// everything else white.
pub fn binary(image: &RasterImage) -> RasterImage {
    debug!(width = image.width(), height = image.height(), "binary");

    let mut builder = RasterBuilder::new(image.width(), image.height());
    for y in 0..image.height() {
        for x in 0..image.width() {
            let v = if image.intensity_at(x, y) < 128.0 { 0 } else { 255 };
            builder.put_gray(x, y, v);
        }
    }
    builder.freeze()
}

/// Photographic negative: `255 - c` per channel, alpha untouched.
/// Applying it twice restores the original exactly.
pub fn reverse(image: &RasterImage) -> RasterImage {
    debug!(width = image.width(), height = image.height(), "reverse");

    let mut builder = RasterBuilder::new(image.width(), image.height());
    for y in 0..image.height() {
        for x in 0..image.width() {
            let i = image.offset(x, y);
            let p = image.pixels();
            builder.put(x, y, [255 - p[i], 255 - p[i + 1], 255 - p[i + 2], p[i + 3]]);
        }
    }
    builder.freeze()
}

fn map_gray(image: &RasterImage, f: impl Fn(f64) -> f64) -> RasterImage {
    let mut builder = RasterBuilder::new(image.width(), image.height());
    for y in 0..image.height() {
        for x in 0..image.width() {
            builder.put_gray(x, y, clamp_u8(f(image.intensity_at(x, y))));
        }
    }
    builder.freeze()
}

/// Logarithmic curve `255 / ln(256) * ln(1 + gray)`; expands shadows.
pub fn log(image: &RasterImage) -> RasterImage {
    debug!("log enhancement");
    let factor = 255.0 / 256f64.ln();
    map_gray(image, |gray| factor * (1.0 + gray).ln())
}

/// Square-root curve `sqrt(gray) * 255 / sqrt(255)`; milder shadow boost.
pub fn square_root(image: &RasterImage) -> RasterImage {
    debug!("square-root enhancement");
    let factor = 255.0 / 255f64.sqrt();
    map_gray(image, |gray| gray.sqrt() * factor)
}

/// Exponential curve `255 * (1 - exp(-alpha * gray / 255))`.
///
/// `alpha` controls the decay; must be finite and positive. See
/// [`DEFAULT_EXPONENTIAL_ALPHA`] for the workbench default.
pub fn exponential(image: &RasterImage, alpha: f64) -> Result<RasterImage, EngineError> {
    if !alpha.is_finite() || alpha <= 0.0 {
        return Err(EngineError::InvalidParameter(format!(
            "exponential alpha must be finite and positive, got {alpha}"
        )));
    }
    debug!(alpha, "exponential enhancement");
    Ok(map_gray(image, |gray| {
        255.0 * (1.0 - (-alpha * gray / 255.0).exp())
    }))
}

/// Squared curve `gray^2 / 255`; compresses shadows, expands highlights.
pub fn squared(image: &RasterImage) -> RasterImage {
    debug!("squared enhancement");
    map_gray(image, |gray| gray * gray / 255.0)
}

/// Gamma correction `255 * (c / 255)^(1 / gamma)` per channel.
///
/// `gamma` must be finite and positive.
pub fn gamma(image: &RasterImage, gamma: f64) -> Result<RasterImage, EngineError> {
    if !gamma.is_finite() || gamma <= 0.0 {
        return Err(EngineError::InvalidParameter(format!(
            "gamma must be finite and positive, got {gamma}"
        )));
    }
    debug!(gamma, "gamma correction");

    let exponent = 1.0 / gamma;
    let mut builder = RasterBuilder::new(image.width(), image.height());
    for y in 0..image.height() {
        for x in 0..image.width() {
            let [r, g, b] = image.rgb(x, y);
            let correct = |c: u8| clamp_u8(255.0 * (c as f64 / 255.0).powf(exponent));
            builder.put_rgb(x, y, [correct(r), correct(g), correct(b)]);
        }
    }
    Ok(builder.freeze())
}
