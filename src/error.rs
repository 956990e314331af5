//! Engine-wide error types.
//!
//! Every operation either returns a valid [`RasterImage`](crate::RasterImage)
//! (or several) or fails with an [`EngineError`] without mutating its inputs.
//! Invalid parameters are rejected before any pixel work starts.

use crate::pgm::PgmError;
use thiserror::Error;

/// Unified error type for the engine's public API.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Unsupported or out-of-range operation parameter (non-positive zoom
    /// factor, malformed interval, zero-sized window, ...).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Two-image operation invoked on buffers whose dimensions are required
    /// to match but don't.
    #[error(
        "dimension mismatch: expected {expected_width}x{expected_height}, \
         got {actual_width}x{actual_height}"
    )]
    DimensionMismatch {
        expected_width: u32,
        expected_height: u32,
        actual_width: u32,
        actual_height: u32,
    },

    /// Pixel coordinates outside the image bounds.
    #[error("coordinates ({x}, {y}) out of bounds for {width}x{height} image")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Raw pixel buffer whose length disagrees with the declared dimensions.
    #[error("buffer of {len} bytes does not match {width}x{height} RGBA ({expected} bytes)")]
    BufferSize {
        len: usize,
        width: u32,
        height: u32,
        expected: usize,
    },

    /// PGM decode failure.
    #[error("PGM parse error: {0}")]
    Pgm(#[from] PgmError),
}
