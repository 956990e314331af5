//! Raster-order error diffusion.

use crate::halftone::kernel::DiffusionKernel;
use crate::raster::{clamp_u8, RasterBuilder, RasterImage, CHANNELS};
use tracing::debug;

/// Quantize each color channel to black or white at the 128 midpoint,
/// scanning in raster order, and push the quantization error onto the
/// unvisited neighbors named by `kernel`.
///
/// Error accumulates saturating into the working buffer, matching the
/// clamped-store behavior of the rest of the engine.
pub fn error_diffusion(image: &RasterImage, kernel: &DiffusionKernel) -> RasterImage {
    debug!(
        divisor = kernel.divisor,
        entries = kernel.entries.len(),
        "error diffusion"
    );

    let width = image.width() as i32;
    let height = image.height() as i32;
    let mut builder = RasterBuilder::from_image(image);
    let work = builder.pixels_mut();

    for y in 0..height {
        for x in 0..width {
            let i = (y * width + x) as usize * CHANNELS;
            for channel in 0..3 {
                let old = work[i + channel] as f64;
                let new = if old < 128.0 { 0.0 } else { 255.0 };
                work[i + channel] = new as u8;

                let error = old - new;
                for &(dx, dy, weight) in kernel.entries {
                    let nx = x + dx;
                    let ny = y + dy;
                    if nx >= 0 && nx < width && ny >= 0 && ny < height {
                        let n = (ny * width + nx) as usize * CHANNELS + channel;
                        let spread = error * weight as f64 / kernel.divisor as f64;
                        work[n] = clamp_u8(work[n] as f64 + spread);
                    }
                }
            }
            work[i + 3] = 255;
        }
    }

    builder.freeze()
}
