//! Two-image arithmetic and logic combination.
//!
//! Arithmetic operations accept differently-sized operands: the output
//! canvas is the bounding box of both, the first image is centered on it and
//! the second sits at the origin (this asymmetry is part of the workbench's
//! established behavior). Pixels where an operand has no coverage read as 0.
//!
//! Logic operations are strict: both operands must have identical
//! dimensions, otherwise [`EngineError::DimensionMismatch`] is returned.
//!
//! All channel math uses clamped-store semantics — results saturate into
//! `[0, 255]`, they never wrap.

use crate::error::EngineError;
use crate::raster::{clamp_u8, RasterBuilder};
use crate::RasterImage;
use tracing::debug;

/// Per-channel arithmetic combination of two images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOp {
    /// `a + b`, saturating at 255.
    Addition,
    /// `a - b`, flooring at 0.
    Subtraction,
    /// `a * b`, saturating at 255.
    Multiplication,
    /// `a / b` where `b != 0`, else 0.
    Division,
}

impl ArithmeticOp {
    #[inline]
    fn combine(self, a: f64, b: f64) -> f64 {
        match self {
            ArithmeticOp::Addition => a + b,
            ArithmeticOp::Subtraction => a - b,
            ArithmeticOp::Multiplication => a * b,
            ArithmeticOp::Division => {
                if b != 0.0 {
                    a / b
                } else {
                    0.0
                }
            }
        }
    }
}

/// Per-channel bitwise combination of two same-sized images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicOp {
    And,
    Or,
    Xor,
}

impl LogicOp {
    #[inline]
    fn combine(self, a: u8, b: u8) -> u8 {
        match self {
            LogicOp::And => a & b,
            LogicOp::Or => a | b,
            LogicOp::Xor => a ^ b,
        }
    }
}

/// Combine two images arithmetically.
///
/// The output canvas is `max(w1, w2) x max(h1, h2)`; `image1` is centered
/// via an x/y offset, `image2` is placed at the origin. Only the centered
/// footprint of `image1` is written; everything else stays transparent zero.
///
/// # Example
///
/// ```
/// use rasterbench::arithmetic::{arithmetic, ArithmeticOp};
/// use rasterbench::RasterImage;
///
/// let a = RasterImage::solid(2, 2, [200, 10, 0, 255]);
/// let b = RasterImage::solid(2, 2, [200, 5, 0, 255]);
/// let sum = arithmetic(&a, &b, ArithmeticOp::Addition);
///
/// // 200 + 200 clamps to 255; 10 + 5 = 15.
/// assert_eq!(sum.get(0, 0).unwrap(), [255, 15, 0, 255]);
/// ```
pub fn arithmetic(image1: &RasterImage, image2: &RasterImage, op: ArithmeticOp) -> RasterImage {
    let out_width = image1.width().max(image2.width());
    let out_height = image1.height().max(image2.height());
    let offset_x = (out_width - image1.width()) / 2;
    let offset_y = (out_height - image1.height()) / 2;

    debug!(
        ?op,
        out_width, out_height, offset_x, offset_y, "arithmetic combine"
    );

    let mut builder = RasterBuilder::new(out_width, out_height);

    for y in offset_y..offset_y + image1.height() {
        for x in offset_x..offset_x + image1.width() {
            let [r1, g1, b1] = image1.rgb(x - offset_x, y - offset_y);
            let [r2, g2, b2] = if x < image2.width() && y < image2.height() {
                image2.rgb(x, y)
            } else {
                [0, 0, 0]
            };

            builder.put_rgb(
                x,
                y,
                [
                    clamp_u8(op.combine(r1 as f64, r2 as f64)),
                    clamp_u8(op.combine(g1 as f64, g2 as f64)),
                    clamp_u8(op.combine(b1 as f64, b2 as f64)),
                ],
            );
        }
    }

    builder.freeze()
}

/// Combine two same-sized images bitwise, channel by channel.
///
/// Returns [`EngineError::DimensionMismatch`] when the operand dimensions
/// differ; logic has no meaningful centering behavior.
pub fn logic(
    image1: &RasterImage,
    image2: &RasterImage,
    op: LogicOp,
) -> Result<RasterImage, EngineError> {
    if image1.width() != image2.width() || image1.height() != image2.height() {
        return Err(EngineError::DimensionMismatch {
            expected_width: image1.width(),
            expected_height: image1.height(),
            actual_width: image2.width(),
            actual_height: image2.height(),
        });
    }

    debug!(?op, width = image1.width(), height = image1.height(), "logic combine");

    let mut builder = RasterBuilder::new(image1.width(), image1.height());
    for y in 0..image1.height() {
        for x in 0..image1.width() {
            let [r1, g1, b1] = image1.rgb(x, y);
            let [r2, g2, b2] = image2.rgb(x, y);
            builder.put_rgb(
                x,
                y,
                [
                    op.combine(r1, r2),
                    op.combine(g1, g2),
                    op.combine(b1, b2),
                ],
            );
        }
    }
    Ok(builder.freeze())
}
