//! Directional line detection.
//!
//! Four 3x3 masks respond to one-pixel-wide lines in the four principal
//! orientations. The clamped response is inverted before output, so
//! detected lines render dark on a light background.

use crate::error::EngineError;
use crate::filter::{map_window, mask_at, Mask3};
use crate::raster::clamp_u8;
use crate::RasterImage;
use tracing::debug;

const HORIZONTAL: Mask3 = [-1, -1, -1, 2, 2, 2, -1, -1, -1];
const VERTICAL: Mask3 = [-1, 2, -1, -1, 2, -1, -1, 2, -1];
const DEGREES_45: Mask3 = [-1, -1, 2, -1, 2, -1, 2, -1, -1];
const DEGREES_135: Mask3 = [2, -1, -1, -1, 2, -1, -1, -1, 2];

/// Line orientation to detect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOrientation {
    Horizontal,
    Vertical,
    Degrees45,
    Degrees135,
}

impl LineOrientation {
    fn mask(self) -> &'static Mask3 {
        match self {
            LineOrientation::Horizontal => &HORIZONTAL,
            LineOrientation::Vertical => &VERTICAL,
            LineOrientation::Degrees45 => &DEGREES_45,
            LineOrientation::Degrees135 => &DEGREES_135,
        }
    }
}

/// Detect lines of the given orientation; dark-on-light output.
pub fn detect(
    image: &RasterImage,
    orientation: LineOrientation,
) -> Result<RasterImage, EngineError> {
    debug!(?orientation, "line detection");
    let mask = orientation.mask();
    map_window(image, 1, |cx, cy| {
        [
            255 - clamp_u8(mask_at(image, cx, cy, mask, 0)),
            255 - clamp_u8(mask_at(image, cx, cy, mask, 1)),
            255 - clamp_u8(mask_at(image, cx, cy, mask, 2)),
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::RasterBuilder;

    /// Black canvas with one bright horizontal line on row 1.
    fn lined() -> RasterImage {
        let mut builder = RasterBuilder::new(5, 3);
        builder.fill([0, 0, 0, 255]);
        for x in 0..5 {
            builder.put_gray(x, 1, 100);
        }
        builder.freeze()
    }

    #[test]
    fn test_horizontal_mask_marks_the_line_dark() {
        let detected = detect(&lined(), LineOrientation::Horizontal).unwrap();
        assert_eq!(detected.width(), 3);
        assert_eq!(detected.height(), 1);
        // Response 2 * 3 * 100 clamps to 255; inverted to 0.
        for x in 0..3 {
            assert_eq!(
                detected.get(x, 0).unwrap(),
                [0, 0, 0, 255],
                "Line row renders black at x={x}"
            );
        }
    }

    #[test]
    fn test_vertical_mask_ignores_a_horizontal_line() {
        let detected = detect(&lined(), LineOrientation::Vertical).unwrap();
        // Vertical mask response on the line row: 2*100 - 2*100... each
        // column contributes 2 on its middle cell and -1 elsewhere; the sum
        // is 2*100 - 100 - 100 = 0, inverted to white.
        assert_eq!(detected.get(1, 0).unwrap(), [255, 255, 255, 255]);
    }

    #[test]
    fn test_flat_input_renders_white() {
        let image = RasterImage::solid(3, 3, [80, 80, 80, 255]);
        for orientation in [
            LineOrientation::Horizontal,
            LineOrientation::Vertical,
            LineOrientation::Degrees45,
            LineOrientation::Degrees135,
        ] {
            let detected = detect(&image, orientation).unwrap();
            assert_eq!(
                detected.get(0, 0).unwrap(),
                [255, 255, 255, 255],
                "{orientation:?} responds zero on flat input"
            );
        }
    }

    #[test]
    fn test_diagonal_mask_marks_a_diagonal() {
        let mut builder = RasterBuilder::new(3, 3);
        builder.fill([0, 0, 0, 255]);
        // 135-degree line: top-left to bottom-right.
        builder.put_gray(0, 0, 100);
        builder.put_gray(1, 1, 100);
        builder.put_gray(2, 2, 100);
        let image = builder.freeze();

        let detected = detect(&image, LineOrientation::Degrees135).unwrap();
        assert_eq!(detected.get(0, 0).unwrap(), [0, 0, 0, 255]);

        let wrong_way = detect(&image, LineOrientation::Degrees45).unwrap();
        assert_eq!(
            wrong_way.get(0, 0).unwrap(),
            [255, 255, 255, 255],
            "Anti-diagonal mask responds negative, clamped to zero, inverted"
        );
    }
}
