//! Ordered (dot-plot) dithering with tiled index matrices.

use crate::raster::RasterBuilder;
use crate::RasterImage;
use tracing::debug;

const MATRIX_2X2: &[&[u8]] = &[&[0, 2], &[3, 1]];
const MATRIX_2X3: &[&[u8]] = &[&[3, 0, 4], &[5, 2, 1]];
const MATRIX_3X3: &[&[u8]] = &[&[6, 8, 4], &[1, 0, 3], &[5, 2, 7]];

/// Available ordered-dither index matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderedMatrix {
    TwoByTwo,
    TwoByThree,
    ThreeByThree,
}

impl OrderedMatrix {
    fn rows(self) -> &'static [&'static [u8]] {
        match self {
            OrderedMatrix::TwoByTwo => MATRIX_2X2,
            OrderedMatrix::TwoByThree => MATRIX_2X3,
            OrderedMatrix::ThreeByThree => MATRIX_3X3,
        }
    }
}

/// Threshold each pixel's mean intensity against the tiled matrix:
/// cell `m` yields threshold `m * 255 / cell_count`, and intensities
/// strictly above it go white.
pub fn dither(image: &RasterImage, matrix: OrderedMatrix) -> RasterImage {
    debug!(?matrix, "ordered dithering");

    let rows = matrix.rows();
    let cell_count = (rows.len() * rows[0].len()) as f64;

    let mut builder = RasterBuilder::new(image.width(), image.height());
    for y in 0..image.height() {
        for x in 0..image.width() {
            let gray = image.intensity_at(x, y);
            let cell = rows[y as usize % rows.len()][x as usize % rows[0].len()];
            let threshold = cell as f64 * 255.0 / cell_count;
            builder.put_gray(x, y, if gray > threshold { 255 } else { 0 });
        }
    }
    builder.freeze()
}
