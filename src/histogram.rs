//! Gray-level histograms, histogram equalization and the bar-chart
//! rendering the workbench shows next to an image.
//!
//! Two histogram flavors exist on purpose: the displayed chart counts all
//! three color channels into shared brightness bins (total mass `3 * w * h`),
//! while equalization works on one rounded BT.601 luma bin per pixel.

use crate::raster::{clamp_u8, luma601, RasterBuilder};
use crate::RasterImage;
use tracing::debug;

/// Chart canvas width in pixels.
pub const CHART_WIDTH: u32 = 300;
/// Chart canvas height in pixels.
pub const CHART_HEIGHT: u32 = 180;
/// Height of the grayscale ramp guide along the chart bottom.
const GUIDE_HEIGHT: u32 = 8;
/// Bar color of the rendered histogram.
const BAR_COLOR: [u8; 3] = [3, 29, 68];

/// Brightness histogram over all three color channels: each of R, G and B
/// increments its own bin, so the bins sum to `3 * width * height`.
pub fn rgb_histogram(image: &RasterImage) -> [u64; 256] {
    let mut bins = [0u64; 256];
    for chunk in image.pixels().chunks_exact(4) {
        bins[chunk[0] as usize] += 1;
        bins[chunk[1] as usize] += 1;
        bins[chunk[2] as usize] += 1;
    }
    bins
}

/// Gray-level histogram over rounded BT.601 luma, one bin per pixel.
pub fn luma_histogram(image: &RasterImage) -> [u64; 256] {
    let mut bins = [0u64; 256];
    for chunk in image.pixels().chunks_exact(4) {
        let gray = luma601(chunk[0], chunk[1], chunk[2]).round() as usize;
        bins[gray.min(255)] += 1;
    }
    bins
}

/// Cumulative distribution of a 256-bin histogram.
pub fn cdf(histogram: &[u64; 256]) -> [u64; 256] {
    let mut out = [0u64; 256];
    let mut running = 0;
    for (i, &count) in histogram.iter().enumerate() {
        running += count;
        out[i] = running;
    }
    out
}

/// Equalize gray levels: remap each pixel's rounded luma through the
/// normalized CDF, `cdf[gray] / pixel_count * 255`, written to all three
/// channels with alpha preserved.
pub fn equalize(image: &RasterImage) -> RasterImage {
    debug!(width = image.width(), height = image.height(), "equalize");

    let histogram = luma_histogram(image);
    let distribution = cdf(&histogram);
    let total = image.width() as u64 * image.height() as u64;

    let mut builder = RasterBuilder::new(image.width(), image.height());
    for y in 0..image.height() {
        for x in 0..image.width() {
            let i = image.offset(x, y);
            let p = image.pixels();
            let gray = (luma601(p[i], p[i + 1], p[i + 2]).round() as usize).min(255);
            let v = clamp_u8(distribution[gray] as f64 / total as f64 * 255.0);
            builder.put(x, y, [v, v, v, p[i + 3]]);
        }
    }
    builder.freeze()
}

/// Render the RGB brightness histogram of an image as a bar chart.
///
/// White 300x180 canvas; one navy bar per brightness bin scaled so the
/// tallest bin spans the full plot height, and an 8-pixel grayscale ramp
/// along the bottom as a reading guide for the bin axis.
pub fn chart(image: &RasterImage) -> RasterImage {
    let bins = rgb_histogram(image);
    render_chart(&bins)
}

fn render_chart(bins: &[u64; 256]) -> RasterImage {
    let tallest = bins.iter().copied().max().unwrap_or(0).max(1);
    let plot_height = CHART_HEIGHT - GUIDE_HEIGHT;

    debug!(tallest, "rendering histogram chart");

    let mut builder = RasterBuilder::new(CHART_WIDTH, CHART_HEIGHT);
    builder.fill([255, 255, 255, 255]);

    for x in 0..CHART_WIDTH {
        let bin = (x as usize * 256) / CHART_WIDTH as usize;
        let bar = ((bins[bin] as f64 / tallest as f64) * plot_height as f64).round() as u32;

        for y in plot_height - bar..plot_height {
            builder.put_rgb(x, y, BAR_COLOR);
        }
        for y in plot_height..CHART_HEIGHT {
            builder.put_gray(x, y, bin as u8);
        }
    }
    builder.freeze()
}

/// The full equalization pipeline the workbench displays: the original
/// image's histogram chart, the equalized image and the equalized image's
/// histogram chart, in that order.
pub fn equalization(image: &RasterImage) -> [RasterImage; 3] {
    let before = chart(image);
    let equalized = equalize(image);
    let after = chart(&equalized);
    [before, equalized, after]
}
