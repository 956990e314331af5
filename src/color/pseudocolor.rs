//! Pseudocoloring: density slicing and channel redistribution.

use crate::raster::RasterBuilder;
use crate::RasterImage;
use tracing::debug;

/// Map intensity bands to flat colors: `< 85` red, `< 170` green, the rest
/// blue.
pub fn density_slicing(image: &RasterImage) -> RasterImage {
    debug!(width = image.width(), height = image.height(), "density slicing");

    let mut builder = RasterBuilder::new(image.width(), image.height());
    for y in 0..image.height() {
        for x in 0..image.width() {
            let intensity = image.intensity_at(x, y);
            let rgb = if intensity < 85.0 {
                [255, 0, 0]
            } else if intensity < 170.0 {
                [0, 255, 0]
            } else {
                [0, 0, 255]
            };
            builder.put_rgb(x, y, rgb);
        }
    }
    builder.freeze()
}

/// Swap each channel for the mean of the other two:
/// `(R, G, B) -> ((G+B)/2, (R+B)/2, (R+G)/2)`.
pub fn redistribution(image: &RasterImage) -> RasterImage {
    debug!(width = image.width(), height = image.height(), "redistribution");

    let mut builder = RasterBuilder::new(image.width(), image.height());
    for y in 0..image.height() {
        for x in 0..image.width() {
            let [r, g, b] = image.rgb(x, y);
            builder.put_rgb(
                x,
                y,
                [
                    ((g as u16 + b as u16) / 2) as u8,
                    ((r as u16 + b as u16) / 2) as u8,
                    ((r as u16 + g as u16) / 2) as u8,
                ],
            );
        }
    }
    builder.freeze()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_density_slicing_bands() {
        for (gray, expected) in [
            (0u8, [255, 0, 0, 255]),
            (84, [255, 0, 0, 255]),
            (85, [0, 255, 0, 255]),
            (169, [0, 255, 0, 255]),
            (170, [0, 0, 255, 255]),
            (255, [0, 0, 255, 255]),
        ] {
            let image = RasterImage::solid(1, 1, [gray, gray, gray, 255]);
            assert_eq!(
                density_slicing(&image).get(0, 0).unwrap(),
                expected,
                "Band for intensity {gray}"
            );
        }
    }

    #[test]
    fn test_density_slicing_white_goes_blue() {
        let image = RasterImage::solid(2, 2, [255, 255, 255, 255]);
        let sliced = density_slicing(&image);
        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(sliced.get(x, y).unwrap(), [0, 0, 255, 255]);
            }
        }
    }

    #[test]
    fn test_redistribution_mixes_complements() {
        let image = RasterImage::solid(1, 1, [200, 100, 50, 255]);
        let mixed = redistribution(&image);
        assert_eq!(mixed.get(0, 0).unwrap(), [75, 125, 150, 255]);
    }

    #[test]
    fn test_redistribution_fixes_gray() {
        let image = RasterImage::solid(1, 1, [90, 90, 90, 255]);
        assert_eq!(redistribution(&image).get(0, 0).unwrap(), [90, 90, 90, 255]);
    }
}
