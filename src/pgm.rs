//! Plain-text PGM (P2) decoding.
//!
//! The workbench accepts raw grayscale images in the text PGM format:
//! a magic line, a `"width height"` line, a max-value line, then
//! whitespace-separated grayscale samples. The magic and max-value lines are
//! accepted but not interpreted; samples are clamp-stored into all three
//! color channels of an opaque [`RasterImage`].
//!
//! Every other upload format (PNG, JPEG, ...) is decoded by the external
//! collaborator; only PGM lives in the engine.

use crate::error::EngineError;
use crate::raster::RasterBuilder;
use crate::RasterImage;
use thiserror::Error;

/// PGM decode failure.
#[derive(Debug, Error)]
pub enum PgmError {
    /// A required header line is absent.
    #[error("missing header line: {0}")]
    MissingLine(&'static str),

    /// The dimensions line is not two positive integers.
    #[error("invalid dimensions line: {0:?}")]
    InvalidDimensions(String),

    /// A pixel sample is not a valid integer.
    #[error("invalid sample value: {0}")]
    InvalidSample(#[from] std::num::ParseIntError),

    /// Sample count disagrees with the declared dimensions.
    #[error("expected {expected} samples, found {found}")]
    SampleCount { expected: usize, found: usize },
}

/// Decode a plain-text PGM document into a [`RasterImage`].
///
/// Samples above 255 clamp to 255 (clamped-store semantics, matching the
/// byte buffer the rest of the engine operates on).
///
/// # Example
///
/// ```
/// use rasterbench::pgm::decode;
///
/// let image = decode("P2\n2 2\n255\n0 64\n128 255\n").unwrap();
/// assert_eq!(image.width(), 2);
/// assert_eq!(image.get(1, 1).unwrap(), [255, 255, 255, 255]);
/// ```
pub fn decode(text: &str) -> Result<RasterImage, EngineError> {
    let mut lines = text.trim().lines();

    let _magic = lines.next().ok_or(PgmError::MissingLine("magic"))?;
    let dims = lines.next().ok_or(PgmError::MissingLine("dimensions"))?;
    let _max_value = lines.next().ok_or(PgmError::MissingLine("max value"))?;

    let (width, height) = parse_dimensions(dims)?;

    let mut samples = Vec::with_capacity(width as usize * height as usize);
    for line in lines {
        for token in line.split_whitespace() {
            let value: u32 = token.parse().map_err(PgmError::from)?;
            samples.push(value.min(255) as u8);
        }
    }

    let expected = width as usize * height as usize;
    if samples.len() != expected {
        return Err(PgmError::SampleCount {
            expected,
            found: samples.len(),
        }
        .into());
    }

    tracing::debug!(width, height, "decoded PGM image");

    let mut builder = RasterBuilder::new(width, height);
    for (i, &v) in samples.iter().enumerate() {
        let x = (i % width as usize) as u32;
        let y = (i / width as usize) as u32;
        builder.put_gray(x, y, v);
    }
    Ok(builder.freeze())
}

fn parse_dimensions(line: &str) -> Result<(u32, u32), PgmError> {
    let mut parts = line.split_whitespace();
    let invalid = || PgmError::InvalidDimensions(line.to_string());

    let width: u32 = parts
        .next()
        .ok_or_else(invalid)?
        .parse()
        .map_err(|_| invalid())?;
    let height: u32 = parts
        .next()
        .ok_or_else(invalid)?
        .parse()
        .map_err(|_| invalid())?;

    if width == 0 || height == 0 || parts.next().is_some() {
        return Err(invalid());
    }
    Ok((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_minimal_image() {
        let image = decode("P2\n2 2\n255\n0 64\n128 255\n").unwrap();
        assert_eq!(image.width(), 2);
        assert_eq!(image.height(), 2);
        assert_eq!(image.get(0, 0).unwrap(), [0, 0, 0, 255]);
        assert_eq!(image.get(1, 0).unwrap(), [64, 64, 64, 255]);
        assert_eq!(image.get(0, 1).unwrap(), [128, 128, 128, 255]);
        assert_eq!(image.get(1, 1).unwrap(), [255, 255, 255, 255]);
    }

    #[test]
    fn test_decode_samples_spread_over_arbitrary_lines() {
        let flat = decode("P2\n3 1\n255\n7 8 9\n").unwrap();
        let split = decode("P2\n3 1\n255\n7\n8\n9\n").unwrap();
        assert_eq!(flat, split, "Line breaks between samples are cosmetic");
    }

    #[test]
    fn test_decode_clamps_oversized_samples() {
        let image = decode("P2\n1 1\n1000\n999\n").unwrap();
        assert_eq!(image.get(0, 0).unwrap(), [255, 255, 255, 255]);
    }

    #[test]
    fn test_decode_rejects_missing_header() {
        assert!(matches!(
            decode("P2\n"),
            Err(EngineError::Pgm(PgmError::MissingLine("dimensions")))
        ));
        assert!(matches!(
            decode("P2\n2 2\n"),
            Err(EngineError::Pgm(PgmError::MissingLine("max value")))
        ));
    }

    #[test]
    fn test_decode_rejects_bad_dimensions() {
        for text in ["P2\nx 2\n255\n", "P2\n2\n255\n", "P2\n0 2\n255\n", "P2\n2 2 2\n255\n"] {
            assert!(
                matches!(
                    decode(text),
                    Err(EngineError::Pgm(PgmError::InvalidDimensions(_)))
                ),
                "Expected InvalidDimensions for {text:?}"
            );
        }
    }

    #[test]
    fn test_decode_rejects_non_numeric_sample() {
        assert!(matches!(
            decode("P2\n1 1\n255\nabc\n"),
            Err(EngineError::Pgm(PgmError::InvalidSample(_)))
        ));
    }

    #[test]
    fn test_decode_rejects_sample_count_mismatch() {
        match decode("P2\n2 2\n255\n1 2 3\n") {
            Err(EngineError::Pgm(PgmError::SampleCount { expected, found })) => {
                assert_eq!(expected, 4);
                assert_eq!(found, 3);
            }
            other => panic!("Expected SampleCount error, got {other:?}"),
        }
    }
}
