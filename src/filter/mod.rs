//! Spatial filters over a sliding neighborhood window.
//!
//! Every filter in this tree uses a fixed kernel, so outputs shrink by the
//! kernel half-width on each side (a 3x3 filter loses one pixel per edge, a
//! 5x5 loses two) instead of inventing values past the border. Local
//! thresholding, whose window is a user parameter, clamps at the border and
//! keeps dimensions; it lives in [`crate::threshold`].

pub mod dots;
pub mod edges;
pub mod highpass;
pub mod lines;
pub mod lowpass;
pub mod smooth;

use crate::error::EngineError;
use crate::raster::RasterBuilder;
use crate::RasterImage;

/// A 3x3 integer weight mask, row-major.
pub(crate) type Mask3 = [i32; 9];

/// Output dimensions after shrinking `margin` pixels per side, or an error
/// when the image is too small to hold even one full window.
pub(crate) fn shrunk_dims(image: &RasterImage, margin: u32) -> Result<(u32, u32), EngineError> {
    let needed = 2 * margin + 1;
    if image.width() < needed || image.height() < needed {
        return Err(EngineError::InvalidParameter(format!(
            "image {}x{} too small for a {needed}x{needed} window",
            image.width(),
            image.height()
        )));
    }
    Ok((image.width() - 2 * margin, image.height() - 2 * margin))
}

/// Shrink-border driver: calls `f` with the source-centered coordinates of
/// every pixel that has a full window, collecting its RGB result.
pub(crate) fn map_window<F>(
    image: &RasterImage,
    margin: u32,
    mut f: F,
) -> Result<RasterImage, EngineError>
where
    F: FnMut(u32, u32) -> [u8; 3],
{
    let (out_width, out_height) = shrunk_dims(image, margin)?;
    let mut builder = RasterBuilder::new(out_width, out_height);
    for y in 0..out_height {
        for x in 0..out_width {
            builder.put_rgb(x, y, f(x + margin, y + margin));
        }
    }
    Ok(builder.freeze())
}

/// Row-major samples of one channel over the square window centered at
/// `(cx, cy)`. Callers must have validated the margin.
pub(crate) fn window_samples(
    image: &RasterImage,
    cx: u32,
    cy: u32,
    half: u32,
    channel: usize,
) -> Vec<f64> {
    let mut values = Vec::with_capacity(((2 * half + 1) * (2 * half + 1)) as usize);
    for dy in -(half as i32)..=half as i32 {
        for dx in -(half as i32)..=half as i32 {
            let x = (cx as i32 + dx) as u32;
            let y = (cy as i32 + dy) as u32;
            values.push(image.pixels()[image.offset(x, y) + channel] as f64);
        }
    }
    values
}

/// Apply a 3x3 mask to one channel at `(cx, cy)`.
pub(crate) fn mask_at(image: &RasterImage, cx: u32, cy: u32, mask: &Mask3, channel: usize) -> f64 {
    let mut sum = 0.0;
    let mut k = 0;
    for dy in -1..=1i32 {
        for dx in -1..=1i32 {
            let x = (cx as i32 + dx) as u32;
            let y = (cy as i32 + dy) as u32;
            sum += mask[k] as f64 * image.pixels()[image.offset(x, y) + channel] as f64;
            k += 1;
        }
    }
    sum
}
