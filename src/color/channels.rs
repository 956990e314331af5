//! R/G/B channel isolation.

use crate::raster::RasterBuilder;
use crate::RasterImage;
use tracing::debug;

/// One of the three RGB color channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

/// Keep one channel, zero the other two; alpha is forced opaque.
pub fn isolate(image: &RasterImage, channel: Channel) -> RasterImage {
    debug!(?channel, "channel isolation");

    let mut builder = RasterBuilder::new(image.width(), image.height());
    for y in 0..image.height() {
        for x in 0..image.width() {
            let [r, g, b] = image.rgb(x, y);
            let rgb = match channel {
                Channel::Red => [r, 0, 0],
                Channel::Green => [0, g, 0],
                Channel::Blue => [0, 0, b],
            };
            builder.put_rgb(x, y, rgb);
        }
    }
    builder.freeze()
}
