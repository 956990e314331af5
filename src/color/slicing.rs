//! Bit-plane slicing of the red channel.

use crate::error::EngineError;
use crate::raster::RasterBuilder;
use crate::RasterImage;
use tracing::debug;

/// Extract the lowest `count` bit planes of the red channel, least
/// significant first. Each plane renders bit `i` as black/white:
/// `((r >> i) & 1) * 255`.
///
/// `count` must be between 1 and 8.
pub fn bit_planes(image: &RasterImage, count: u32) -> Result<Vec<RasterImage>, EngineError> {
    if !(1..=8).contains(&count) {
        return Err(EngineError::InvalidParameter(format!(
            "bit plane count must be between 1 and 8, got {count}"
        )));
    }

    debug!(count, "bit-plane slicing");

    let mut planes = Vec::with_capacity(count as usize);
    for bit in 0..count {
        let mut builder = RasterBuilder::new(image.width(), image.height());
        for y in 0..image.height() {
            for x in 0..image.width() {
                let [r, _, _] = image.rgb(x, y);
                builder.put_gray(x, y, ((r >> bit) & 1) * 255);
            }
        }
        planes.push(builder.freeze());
    }
    Ok(planes)
}
