//! Zoom in and out by pixel replication, bilinear interpolation, deletion
//! and block averaging.
//!
//! Zoom-in outputs are `round(w * factor) x round(h * factor)`; zoom-out
//! outputs are `ceil(w / factor) x ceil(h / factor)`, so replication by a
//! factor followed by deletion by the same factor restores the original
//! dimensions. Factors must be finite and positive.

use crate::error::EngineError;
use crate::raster::{clamp_u8, RasterBuilder, CHANNELS};
use crate::RasterImage;
use tracing::debug;

fn check_factor(factor: f64) -> Result<(), EngineError> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(EngineError::InvalidParameter(format!(
            "zoom factor must be finite and positive, got {factor}"
        )));
    }
    Ok(())
}

fn zoom_in_dims(image: &RasterImage, factor: f64) -> (u32, u32) {
    let w = ((image.width() as f64 * factor).round() as u32).max(1);
    let h = ((image.height() as f64 * factor).round() as u32).max(1);
    (w, h)
}

fn zoom_out_dims(image: &RasterImage, factor: f64) -> (u32, u32) {
    let w = ((image.width() as f64 / factor).ceil() as u32).max(1);
    let h = ((image.height() as f64 / factor).ceil() as u32).max(1);
    (w, h)
}

/// Zoom in by pixel replication: each output pixel copies the source pixel
/// at `floor(x / factor), floor(y / factor)`.
pub fn replication(image: &RasterImage, factor: f64) -> Result<RasterImage, EngineError> {
    check_factor(factor)?;
    let (out_width, out_height) = zoom_in_dims(image, factor);
    debug!(factor, out_width, out_height, "replication zoom");

    let mut builder = RasterBuilder::new(out_width, out_height);
    for y in 0..out_height {
        for x in 0..out_width {
            let src_x = ((x as f64 / factor) as u32).min(image.width() - 1);
            let src_y = ((y as f64 / factor) as u32).min(image.height() - 1);
            let i = image.offset(src_x, src_y);
            let p = image.pixels();
            builder.put(x, y, [p[i], p[i + 1], p[i + 2], p[i + 3]]);
        }
    }
    Ok(builder.freeze())
}

/// Zoom in by bilinear interpolation of the four neighbors around the
/// fractional source position; neighbors are clamped into range at the
/// right and bottom edges.
pub fn interpolation(image: &RasterImage, factor: f64) -> Result<RasterImage, EngineError> {
    check_factor(factor)?;
    let (out_width, out_height) = zoom_in_dims(image, factor);
    debug!(factor, out_width, out_height, "interpolation zoom");

    let p = image.pixels();
    let mut builder = RasterBuilder::new(out_width, out_height);
    for y in 0..out_height {
        for x in 0..out_width {
            let src_x = x as f64 / factor;
            let src_y = y as f64 / factor;

            let x1 = (src_x.floor() as u32).min(image.width() - 1);
            let y1 = (src_y.floor() as u32).min(image.height() - 1);
            let x2 = (src_x.ceil() as u32).min(image.width() - 1);
            let y2 = (src_y.ceil() as u32).min(image.height() - 1);

            let dx = src_x - x1 as f64;
            let dy = src_y - y1 as f64;

            let i1 = image.offset(x1, y1);
            let i2 = image.offset(x2, y1);
            let i3 = image.offset(x1, y2);
            let i4 = image.offset(x2, y2);

            let mut rgba = [0u8; CHANNELS];
            for (c, out) in rgba.iter_mut().enumerate() {
                let top = p[i1 + c] as f64 * (1.0 - dx) + p[i2 + c] as f64 * dx;
                let bottom = p[i3 + c] as f64 * (1.0 - dx) + p[i4 + c] as f64 * dx;
                *out = clamp_u8(top * (1.0 - dy) + bottom * dy);
            }
            builder.put(x, y, rgba);
        }
    }
    Ok(builder.freeze())
}

/// Zoom out by deletion: keep the source pixel at `floor(x * factor)` per
/// axis, discard the rest.
pub fn deletion(image: &RasterImage, factor: f64) -> Result<RasterImage, EngineError> {
    check_factor(factor)?;
    let (out_width, out_height) = zoom_out_dims(image, factor);
    debug!(factor, out_width, out_height, "deletion zoom");

    let mut builder = RasterBuilder::new(out_width, out_height);
    for y in 0..out_height {
        for x in 0..out_width {
            let src_x = ((x as f64 * factor).floor() as u32).min(image.width() - 1);
            let src_y = ((y as f64 * factor).floor() as u32).min(image.height() - 1);
            let i = image.offset(src_x, src_y);
            let p = image.pixels();
            builder.put(x, y, [p[i], p[i + 1], p[i + 2], p[i + 3]]);
        }
    }
    Ok(builder.freeze())
}

/// Zoom out by block averaging: each output pixel is the channel-wise mean
/// of the `ceil(factor)`-sided source block starting at `floor(x * factor)`;
/// taps past the image edge are skipped, the mean is over the taps actually
/// sampled.
pub fn mean_value(image: &RasterImage, factor: f64) -> Result<RasterImage, EngineError> {
    check_factor(factor)?;
    let (out_width, out_height) = zoom_out_dims(image, factor);
    let block = factor.ceil() as u32;
    debug!(factor, out_width, out_height, block, "mean-value zoom");

    let p = image.pixels();
    let mut builder = RasterBuilder::new(out_width, out_height);
    for y in 0..out_height {
        for x in 0..out_width {
            let src_x = (x as f64 * factor).floor() as u32;
            let src_y = (y as f64 * factor).floor() as u32;

            let mut sums = [0u64; CHANNELS];
            let mut taps = 0u64;
            for j in 0..block {
                for i in 0..block {
                    let sx = src_x + i;
                    let sy = src_y + j;
                    if sx < image.width() && sy < image.height() {
                        let o = image.offset(sx, sy);
                        for (c, sum) in sums.iter_mut().enumerate() {
                            *sum += p[o + c] as u64;
                        }
                        taps += 1;
                    }
                }
            }

            if taps > 0 {
                let rgba = [
                    (sums[0] / taps) as u8,
                    (sums[1] / taps) as u8,
                    (sums[2] / taps) as u8,
                    (sums[3] / taps) as u8,
                ];
                builder.put(x, y, rgba);
            }
        }
    }
    Ok(builder.freeze())
}
