//! Global and local (adaptive) thresholding.
//!
//! Every method emits a strictly black-or-white opaque image of the same
//! dimensions as its input. Local methods evaluate a square window around
//! each pixel; at the borders the window clamps to the pixels that exist,
//! so the statistic is taken over fewer samples instead of shrinking the
//! output.

use crate::enhance;
use crate::error::EngineError;
use crate::raster::RasterBuilder;
use crate::stats;
use crate::RasterImage;
use tracing::debug;

/// Global thresholding: binary enhancement against the fixed 128 midpoint.
pub fn global(image: &RasterImage) -> RasterImage {
    enhance::binary(image)
}

/// Local average thresholding.
///
/// Each pixel goes white when its intensity exceeds the mean intensity of
/// the surrounding `(2 * window + 1)` square.
pub fn local_average(image: &RasterImage, window: u32) -> Result<RasterImage, EngineError> {
    check_window(window)?;
    debug!(
        width = image.width(),
        height = image.height(),
        window,
        "local average thresholding"
    );

    local(image, window, |center, samples| {
        center > stats::average(samples)
    })
}

/// Local median thresholding.
///
/// Each pixel goes white when its intensity exceeds the median intensity of
/// the surrounding window.
pub fn local_median(image: &RasterImage, window: u32) -> Result<RasterImage, EngineError> {
    check_window(window)?;
    debug!(
        width = image.width(),
        height = image.height(),
        window,
        "local median thresholding"
    );

    local(image, window, |center, samples| {
        center > stats::median(samples)
    })
}

/// Local min-max thresholding.
///
/// Each pixel goes white when its intensity reaches the midpoint between
/// the smallest and largest intensities in the surrounding window.
pub fn local_min_max(image: &RasterImage, window: u32) -> Result<RasterImage, EngineError> {
    check_window(window)?;
    debug!(
        width = image.width(),
        height = image.height(),
        window,
        "local min-max thresholding"
    );

    local(image, window, |center, samples| {
        let midpoint = (stats::min_value(samples) + stats::max_value(samples)) / 2.0;
        center >= midpoint
    })
}

/// Niblack thresholding.
///
/// The per-pixel threshold is `mean + k * stddev` over the window, computed
/// on the red channel; a pixel below its threshold goes black. With `k = 0`
/// this degenerates to local-mean thresholding with an inclusive white side.
pub fn niblack(image: &RasterImage, window: u32, k: f64) -> Result<RasterImage, EngineError> {
    check_window(window)?;
    if !k.is_finite() {
        return Err(EngineError::InvalidParameter(format!(
            "Niblack weight must be finite, got {k}"
        )));
    }
    debug!(
        width = image.width(),
        height = image.height(),
        window,
        k,
        "Niblack thresholding"
    );

    let mut builder = RasterBuilder::new(image.width(), image.height());
    for y in 0..image.height() {
        for x in 0..image.width() {
            let samples = window_reds(image, x, y, window);
            let mean = stats::average(&samples);
            let stddev = stats::variance(&samples).sqrt();
            let threshold = mean + k * stddev;
            let red = image.get(x, y)?[0] as f64;
            builder.put_gray(x, y, if red < threshold { 0 } else { 255 });
        }
    }
    Ok(builder.freeze())
}

fn check_window(window: u32) -> Result<(), EngineError> {
    if window == 0 {
        return Err(EngineError::InvalidParameter(
            "window radius must be at least 1".into(),
        ));
    }
    Ok(())
}

/// Shared scan for the intensity-statistic methods: `decide` sees the center
/// intensity and the window's intensity samples and picks white or black.
fn local<F>(image: &RasterImage, window: u32, mut decide: F) -> Result<RasterImage, EngineError>
where
    F: FnMut(f64, &[f64]) -> bool,
{
    let mut builder = RasterBuilder::new(image.width(), image.height());
    for y in 0..image.height() {
        for x in 0..image.width() {
            let samples = window_intensities(image, x, y, window);
            let center = image.intensity_at(x, y);
            builder.put_gray(x, y, if decide(center, &samples) { 255 } else { 0 });
        }
    }
    Ok(builder.freeze())
}

fn window_intensities(image: &RasterImage, cx: u32, cy: u32, radius: u32) -> Vec<f64> {
    collect_window(image, cx, cy, radius, |x, y| image.intensity_at(x, y))
}

fn window_reds(image: &RasterImage, cx: u32, cy: u32, radius: u32) -> Vec<f64> {
    collect_window(image, cx, cy, radius, |x, y| image.rgb(x, y)[0] as f64)
}

fn collect_window<F>(image: &RasterImage, cx: u32, cy: u32, radius: u32, sample: F) -> Vec<f64>
where
    F: Fn(u32, u32) -> f64,
{
    let radius = radius as i64;
    let mut samples = Vec::with_capacity(((2 * radius + 1) * (2 * radius + 1)) as usize);
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            let x = cx as i64 + dx;
            let y = cy as i64 + dy;
            if x >= 0 && x < image.width() as i64 && y >= 0 && y < image.height() as i64 {
                samples.push(sample(x as u32, y as u32));
            }
        }
    }
    samples
}
