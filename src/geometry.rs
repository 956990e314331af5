//! Geometric transforms: rotation, translation, scaling, reflection, shear.
//!
//! Transforms that can push content off a same-sized canvas get a larger
//! output instead: rotation renders onto a square diagonal-sized canvas with
//! the source centered, and shears grow the sheared axis by the maximum
//! displacement. Translation intentionally keeps the canvas and drops pixels
//! pushed outside it.
//!
//! All resampling is inverse-mapped nearest-neighbor; destination pixels with
//! no source coverage stay transparent zero.

use crate::error::EngineError;
use crate::raster::RasterBuilder;
use crate::RasterImage;
use tracing::debug;

/// Mirror axis for [`reflection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReflectionAxis {
    /// Mirror left-right.
    Horizontal,
    /// Mirror top-bottom.
    Vertical,
}

/// Shear direction for [`shear`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShearAxis {
    X,
    Y,
}

/// Rotate by `angle_deg` degrees (positive = clockwise in screen
/// coordinates) about the canvas center.
///
/// The output is a square canvas whose side is the source diagonal rounded
/// up, with the source centered on it, so no corner is ever clipped at any
/// angle. Rotation by 0 reproduces the source centered on that canvas.
pub fn rotation(image: &RasterImage, angle_deg: f64) -> Result<RasterImage, EngineError> {
    if !angle_deg.is_finite() {
        return Err(EngineError::InvalidParameter(format!(
            "rotation angle must be finite, got {angle_deg}"
        )));
    }

    let w = image.width();
    let h = image.height();
    let side = ((w as f64).hypot(h as f64)).ceil() as u32;
    let offset_x = (side - w) / 2;
    let offset_y = (side - h) / 2;

    debug!(angle_deg, side, "rotation");

    let theta = angle_deg.to_radians();
    let (sin, cos) = theta.sin_cos();
    let center = side as f64 / 2.0;

    let mut builder = RasterBuilder::new(side, side);
    for y in 0..side {
        for x in 0..side {
            // Inverse rotation of the destination point about the center.
            let dx = x as f64 - center;
            let dy = y as f64 - center;
            let src_x = (cos * dx + sin * dy + center - offset_x as f64).round();
            let src_y = (-sin * dx + cos * dy + center - offset_y as f64).round();

            if src_x >= 0.0 && src_x < w as f64 && src_y >= 0.0 && src_y < h as f64 {
                let i = image.offset(src_x as u32, src_y as u32);
                let p = image.pixels();
                builder.put(x, y, [p[i], p[i + 1], p[i + 2], p[i + 3]]);
            }
        }
    }
    Ok(builder.freeze())
}

/// Shift the image by `(dx, dy)` pixels on a same-sized canvas.
///
/// Content pushed past an edge is dropped; the exposed area stays
/// transparent zero.
pub fn translation(image: &RasterImage, dx: i32, dy: i32) -> RasterImage {
    debug!(dx, dy, "translation");

    let mut builder = RasterBuilder::new(image.width(), image.height());
    for y in 0..image.height() {
        for x in 0..image.width() {
            let tx = x as i64 + dx as i64;
            let ty = y as i64 + dy as i64;
            if tx >= 0 && tx < image.width() as i64 && ty >= 0 && ty < image.height() as i64 {
                let i = image.offset(x, y);
                let p = image.pixels();
                builder.put(tx as u32, ty as u32, [p[i], p[i + 1], p[i + 2], p[i + 3]]);
            }
        }
    }
    builder.freeze()
}

/// Scale by independent per-axis factors, nearest-neighbor.
///
/// Output dimensions are `round(w * sx) x round(h * sy)`, floored at one
/// pixel. Factors must be finite and positive.
pub fn scale(image: &RasterImage, sx: f64, sy: f64) -> Result<RasterImage, EngineError> {
    if !sx.is_finite() || !sy.is_finite() || sx <= 0.0 || sy <= 0.0 {
        return Err(EngineError::InvalidParameter(format!(
            "scale factors must be finite and positive, got ({sx}, {sy})"
        )));
    }

    let out_width = ((image.width() as f64 * sx).round() as u32).max(1);
    let out_height = ((image.height() as f64 * sy).round() as u32).max(1);

    debug!(sx, sy, out_width, out_height, "scale");

    let mut builder = RasterBuilder::new(out_width, out_height);
    for y in 0..out_height {
        for x in 0..out_width {
            let src_x = ((x as f64 / sx) as u32).min(image.width() - 1);
            let src_y = ((y as f64 / sy) as u32).min(image.height() - 1);
            let i = image.offset(src_x, src_y);
            let p = image.pixels();
            builder.put(x, y, [p[i], p[i + 1], p[i + 2], p[i + 3]]);
        }
    }
    Ok(builder.freeze())
}

/// Mirror the image across the given axis; same dimensions.
pub fn reflection(image: &RasterImage, axis: ReflectionAxis) -> RasterImage {
    debug!(?axis, "reflection");

    let w = image.width();
    let h = image.height();
    let mut builder = RasterBuilder::new(w, h);
    for y in 0..h {
        for x in 0..w {
            let (src_x, src_y) = match axis {
                ReflectionAxis::Horizontal => (w - 1 - x, y),
                ReflectionAxis::Vertical => (x, h - 1 - y),
            };
            let i = image.offset(src_x, src_y);
            let p = image.pixels();
            builder.put(x, y, [p[i], p[i + 1], p[i + 2], p[i + 3]]);
        }
    }
    builder.freeze()
}

/// Shear along one axis by `factor`.
///
/// The sheared axis grows by `ceil(|factor| * other_axis)` so content never
/// leaves the canvas; a negative factor applies a compensating shift for the
/// same reason. The factor must be finite.
pub fn shear(image: &RasterImage, axis: ShearAxis, factor: f64) -> Result<RasterImage, EngineError> {
    if !factor.is_finite() {
        return Err(EngineError::InvalidParameter(format!(
            "shear factor must be finite, got {factor}"
        )));
    }

    let w = image.width();
    let h = image.height();
    let (growth, out_width, out_height) = match axis {
        ShearAxis::X => {
            let g = (factor.abs() * h as f64).ceil() as u32;
            (g, w + g, h)
        }
        ShearAxis::Y => {
            let g = (factor.abs() * w as f64).ceil() as u32;
            (g, w, h + g)
        }
    };
    let shift = if factor < 0.0 { growth as f64 } else { 0.0 };

    debug!(?axis, factor, out_width, out_height, "shear");

    let mut builder = RasterBuilder::new(out_width, out_height);
    for y in 0..out_height {
        for x in 0..out_width {
            let (src_x, src_y) = match axis {
                ShearAxis::X => ((x as f64 - shift - factor * y as f64).round(), y as f64),
                ShearAxis::Y => (x as f64, (y as f64 - shift - factor * x as f64).round()),
            };
            if src_x >= 0.0 && src_x < w as f64 && src_y >= 0.0 && src_y < h as f64 {
                let i = image.offset(src_x as u32, src_y as u32);
                let p = image.pixels();
                builder.put(x, y, [p[i], p[i + 1], p[i + 2], p[i + 3]]);
            }
        }
    }
    Ok(builder.freeze())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(w: u32, h: u32) -> RasterImage {
        let mut builder = RasterBuilder::new(w, h);
        for y in 0..h {
            for x in 0..w {
                builder.put_gray(x, y, (y * w + x) as u8 * 10);
            }
        }
        builder.freeze()
    }

    #[test]
    fn test_rotation_canvas_is_diagonal_square() {
        let image = RasterImage::solid(3, 4, [1, 1, 1, 255]);
        let rotated = rotation(&image, 30.0).unwrap();
        // diagonal = sqrt(9 + 16) = 5
        assert_eq!(rotated.width(), 5);
        assert_eq!(rotated.height(), 5);
    }

    #[test]
    fn test_rotation_zero_degrees_centers_source() {
        let image = gradient(4, 4);
        let rotated = rotation(&image, 0.0).unwrap();
        // diagonal = ceil(5.65) = 6, offset 1 per axis
        assert_eq!(rotated.width(), 6);
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(
                    rotated.get(x + 1, y + 1).unwrap(),
                    image.get(x, y).unwrap(),
                    "Pixel ({x}, {y}) must reappear centered"
                );
            }
        }
        assert_eq!(rotated.get(0, 0).unwrap(), [0, 0, 0, 0]);
    }

    #[test]
    fn test_rotation_quarter_turn_preserves_coverage() {
        let image = RasterImage::solid(3, 3, [7, 7, 7, 255]);
        let rotated = rotation(&image, 90.0).unwrap();
        let covered = rotated
            .pixels()
            .chunks_exact(4)
            .filter(|p| p[3] == 255)
            .count();
        assert_eq!(covered, 9, "A square rotated 90 degrees keeps all pixels");
    }

    #[test]
    fn test_rotation_rejects_non_finite_angle() {
        let image = RasterImage::solid(2, 2, [0, 0, 0, 255]);
        assert!(matches!(
            rotation(&image, f64::NAN),
            Err(EngineError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_translation_drops_pixels_and_exposes_zero() {
        let image = gradient(3, 3);
        let moved = translation(&image, 1, 0);
        assert_eq!(moved.get(1, 0).unwrap(), image.get(0, 0).unwrap());
        assert_eq!(moved.get(2, 2).unwrap(), image.get(1, 2).unwrap());
        assert_eq!(
            moved.get(0, 0).unwrap(),
            [0, 0, 0, 0],
            "Exposed column stays transparent"
        );
    }

    #[test]
    fn test_translation_negative_offsets() {
        let image = gradient(3, 3);
        let moved = translation(&image, -1, -1);
        assert_eq!(moved.get(0, 0).unwrap(), image.get(1, 1).unwrap());
        assert_eq!(moved.get(2, 2).unwrap(), [0, 0, 0, 0]);
    }

    #[test]
    fn test_scale_doubles_by_replication() {
        let image = gradient(2, 2);
        let scaled = scale(&image, 2.0, 2.0).unwrap();
        assert_eq!(scaled.width(), 4);
        assert_eq!(scaled.height(), 4);
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(
                    scaled.get(x, y).unwrap(),
                    image.get(x / 2, y / 2).unwrap(),
                    "Nearest-neighbor block at ({x}, {y})"
                );
            }
        }
    }

    #[test]
    fn test_scale_rejects_bad_factors() {
        let image = RasterImage::solid(2, 2, [0, 0, 0, 255]);
        for (sx, sy) in [(0.0, 1.0), (-1.0, 1.0), (1.0, f64::INFINITY)] {
            assert!(
                matches!(scale(&image, sx, sy), Err(EngineError::InvalidParameter(_))),
                "Expected rejection of ({sx}, {sy})"
            );
        }
    }

    #[test]
    fn test_reflection_mirrors_and_is_involutive() {
        let image = gradient(3, 2);
        let flipped = reflection(&image, ReflectionAxis::Horizontal);
        assert_eq!(flipped.get(0, 0).unwrap(), image.get(2, 0).unwrap());
        assert_eq!(
            reflection(&flipped, ReflectionAxis::Horizontal),
            image,
            "Reflecting twice restores the original"
        );

        let upside_down = reflection(&image, ReflectionAxis::Vertical);
        assert_eq!(upside_down.get(0, 0).unwrap(), image.get(0, 1).unwrap());
    }

    #[test]
    fn test_x_shear_slants_rows() {
        let image = gradient(2, 2);
        let sheared = shear(&image, ShearAxis::X, 1.0).unwrap();
        assert_eq!(sheared.width(), 4);
        assert_eq!(sheared.height(), 2);
        // Row 0 stays put, row 1 shifts right by one.
        assert_eq!(sheared.get(0, 0).unwrap(), image.get(0, 0).unwrap());
        assert_eq!(sheared.get(1, 1).unwrap(), image.get(0, 1).unwrap());
        assert_eq!(sheared.get(2, 1).unwrap(), image.get(1, 1).unwrap());
        assert_eq!(sheared.get(0, 1).unwrap(), [0, 0, 0, 0]);
    }

    #[test]
    fn test_negative_shear_keeps_content_on_canvas() {
        let image = gradient(2, 2);
        let sheared = shear(&image, ShearAxis::X, -1.0).unwrap();
        assert_eq!(sheared.width(), 4);
        // Compensating shift: row 0 lands at the far right, row 1 one left.
        assert_eq!(sheared.get(2, 0).unwrap(), image.get(0, 0).unwrap());
        assert_eq!(sheared.get(1, 1).unwrap(), image.get(0, 1).unwrap());
    }

    #[test]
    fn test_y_shear_slants_columns() {
        let image = gradient(2, 2);
        let sheared = shear(&image, ShearAxis::Y, 1.0).unwrap();
        assert_eq!(sheared.width(), 2);
        assert_eq!(sheared.height(), 4);
        assert_eq!(sheared.get(0, 0).unwrap(), image.get(0, 0).unwrap());
        assert_eq!(sheared.get(1, 1).unwrap(), image.get(1, 0).unwrap());
        assert_eq!(sheared.get(1, 2).unwrap(), image.get(1, 1).unwrap());
    }
}
