//! The raster buffer value type and its builder.
//!
//! [`RasterImage`] is the one data type every operation consumes and
//! produces: an interleaved RGBA byte buffer with explicit dimensions,
//! immutable after construction. Operations never mutate a source image;
//! they assemble their output through [`RasterBuilder`] and `freeze()` it.
//! This replaces the implicit "current 2D context" mutation pattern of
//! canvas-based implementations with unambiguous output ownership.
//!
//! # Example
//!
//! ```
//! use rasterbench::{RasterBuilder, RasterImage};
//!
//! let mut builder = RasterBuilder::new(2, 2);
//! builder.put_rgb(0, 0, [255, 0, 0]);
//! builder.put_rgb(1, 1, [0, 0, 255]);
//! let image: RasterImage = builder.freeze();
//!
//! assert_eq!(image.width(), 2);
//! assert_eq!(image.get(0, 0).unwrap(), [255, 0, 0, 255]);
//! ```

use crate::error::EngineError;

/// Bytes per pixel: R, G, B, A interleaved.
pub const CHANNELS: usize = 4;

/// An immutable raster image: width, height and an interleaved RGBA buffer
/// in row-major order. Alpha is conventionally 255 for opaque results.
///
/// Invariant: `pixels.len() == width * height * 4`, enforced at every
/// construction site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RasterImage {
    /// Build an image from a raw RGBA buffer.
    ///
    /// Fails with [`EngineError::BufferSize`] if the buffer length does not
    /// match `width * height * 4`.
    pub fn from_raw(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, EngineError> {
        let expected = width as usize * height as usize * CHANNELS;
        if pixels.len() != expected {
            return Err(EngineError::BufferSize {
                len: pixels.len(),
                width,
                height,
                expected,
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// An image filled with a single RGBA color.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let mut builder = RasterBuilder::new(width, height);
        builder.fill(rgba);
        builder.freeze()
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The raw interleaved RGBA buffer, row-major.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Byte offset of the pixel at `(x, y)`, bounds-checked.
    ///
    /// This is the guarded form of the classic `(y * width + x) * 4` index
    /// arithmetic; out-of-range coordinates are an [`EngineError::OutOfBounds`]
    /// error, never an undefined read.
    pub fn pixel_index(&self, x: u32, y: u32) -> Result<usize, EngineError> {
        if x >= self.width || y >= self.height {
            return Err(EngineError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.offset(x, y))
    }

    /// The RGBA quadruple at `(x, y)`, bounds-checked.
    pub fn get(&self, x: u32, y: u32) -> Result<[u8; 4], EngineError> {
        let i = self.pixel_index(x, y)?;
        Ok([
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ])
    }

    /// Unchecked byte offset; callers must guarantee `x < width, y < height`.
    #[inline]
    pub(crate) fn offset(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }

    /// RGB triple at `(x, y)`; callers must guarantee bounds.
    #[inline]
    pub(crate) fn rgb(&self, x: u32, y: u32) -> [u8; 3] {
        let i = self.offset(x, y);
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]]
    }

    /// Mean-of-channels intensity at `(x, y)`; callers must guarantee bounds.
    #[inline]
    pub(crate) fn intensity_at(&self, x: u32, y: u32) -> f64 {
        let [r, g, b] = self.rgb(x, y);
        intensity(r, g, b)
    }
}

/// Grayscale intensity as the plain channel mean `(R + G + B) / 3`.
///
/// Used by binary thresholding, density slicing, point enhancement and
/// segmentation.
#[inline]
pub fn intensity(r: u8, g: u8, b: u8) -> f64 {
    (r as f64 + g as f64 + b as f64) / 3.0
}

/// ITU-R BT.601 luma `0.2989 R + 0.587 G + 0.114 B`.
///
/// Used by interval enhancement and histogram equalization.
#[inline]
pub fn luma601(r: u8, g: u8, b: u8) -> f64 {
    0.2989 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64
}

/// Clamp an arithmetic result into the storable byte range.
///
/// Mirrors clamped-store semantics: additions saturate at 255, subtractions
/// floor at 0, NaN maps to 0.
#[inline]
pub fn clamp_u8(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.clamp(0.0, 255.0) as u8
}

/// Mutable staging buffer for building a [`RasterImage`].
///
/// Starts out fully transparent zero. `freeze()` consumes the builder and
/// yields the immutable image; there is no way back.
#[derive(Debug)]
pub struct RasterBuilder {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RasterBuilder {
    /// A zeroed `width x height` staging buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * CHANNELS],
        }
    }

    /// A staging buffer seeded with a copy of an existing image.
    pub fn from_image(image: &RasterImage) -> Self {
        Self {
            width: image.width,
            height: image.height,
            pixels: image.pixels.clone(),
        }
    }

    /// Mutable access to the raw staging bytes.
    #[inline]
    pub(crate) fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Staging buffer width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Staging buffer height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Write an RGBA quadruple; callers must guarantee bounds.
    #[inline]
    pub fn put(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        debug_assert!(
            x < self.width && y < self.height,
            "put({x}, {y}) outside {}x{} builder",
            self.width,
            self.height,
        );
        let i = (y as usize * self.width as usize + x as usize) * CHANNELS;
        self.pixels[i..i + 4].copy_from_slice(&rgba);
    }

    /// Write an opaque RGB triple (alpha forced to 255).
    #[inline]
    pub fn put_rgb(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        self.put(x, y, [rgb[0], rgb[1], rgb[2], 255]);
    }

    /// Write an opaque gray pixel (all three channels set to `v`).
    #[inline]
    pub fn put_gray(&mut self, x: u32, y: u32, v: u8) {
        self.put(x, y, [v, v, v, 255]);
    }

    /// Flood the whole buffer with one RGBA color.
    pub fn fill(&mut self, rgba: [u8; 4]) {
        for chunk in self.pixels.chunks_exact_mut(CHANNELS) {
            chunk.copy_from_slice(&rgba);
        }
    }

    /// Freeze into an immutable [`RasterImage`].
    pub fn freeze(self) -> RasterImage {
        RasterImage {
            width: self.width,
            height: self.height,
            pixels: self.pixels,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_accepts_matching_buffer() {
        let image = RasterImage::from_raw(2, 2, vec![0; 16]).unwrap();
        assert_eq!(image.width(), 2);
        assert_eq!(image.height(), 2);
        assert_eq!(image.pixels().len(), 16);
    }

    #[test]
    fn test_from_raw_rejects_mismatched_buffer() {
        let result = RasterImage::from_raw(2, 2, vec![0; 12]);
        match result {
            Err(EngineError::BufferSize { len, expected, .. }) => {
                assert_eq!(len, 12);
                assert_eq!(expected, 16);
            }
            other => panic!("Expected BufferSize error, got {other:?}"),
        }
    }

    #[test]
    fn test_pixel_index_row_major_layout() {
        let image = RasterImage::solid(3, 2, [0, 0, 0, 255]);
        assert_eq!(image.pixel_index(0, 0).unwrap(), 0);
        assert_eq!(image.pixel_index(2, 0).unwrap(), 8);
        assert_eq!(image.pixel_index(0, 1).unwrap(), 12);
        assert_eq!(image.pixel_index(2, 1).unwrap(), 20);
    }

    #[test]
    fn test_pixel_index_rejects_out_of_bounds() {
        let image = RasterImage::solid(3, 2, [0, 0, 0, 255]);
        assert!(matches!(
            image.pixel_index(3, 0),
            Err(EngineError::OutOfBounds { x: 3, y: 0, .. })
        ));
        assert!(matches!(
            image.pixel_index(0, 2),
            Err(EngineError::OutOfBounds { x: 0, y: 2, .. })
        ));
    }

    #[test]
    fn test_builder_starts_transparent() {
        let image = RasterBuilder::new(2, 1).freeze();
        assert_eq!(image.get(0, 0).unwrap(), [0, 0, 0, 0]);
        assert_eq!(image.get(1, 0).unwrap(), [0, 0, 0, 0]);
    }

    #[test]
    fn test_builder_put_and_freeze() {
        let mut builder = RasterBuilder::new(2, 2);
        builder.put(1, 0, [1, 2, 3, 4]);
        builder.put_rgb(0, 1, [9, 8, 7]);
        builder.put_gray(1, 1, 100);
        let image = builder.freeze();

        assert_eq!(image.get(1, 0).unwrap(), [1, 2, 3, 4]);
        assert_eq!(image.get(0, 1).unwrap(), [9, 8, 7, 255]);
        assert_eq!(image.get(1, 1).unwrap(), [100, 100, 100, 255]);
    }

    #[test]
    fn test_solid_fills_every_pixel() {
        let image = RasterImage::solid(3, 3, [10, 20, 30, 255]);
        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(image.get(x, y).unwrap(), [10, 20, 30, 255]);
            }
        }
    }

    #[test]
    fn test_intensity_is_channel_mean() {
        assert_eq!(intensity(0, 0, 0), 0.0);
        assert_eq!(intensity(255, 255, 255), 255.0);
        assert_eq!(intensity(30, 60, 90), 60.0);
    }

    #[test]
    fn test_luma601_weights() {
        assert_eq!(luma601(0, 0, 0), 0.0);
        let white = luma601(255, 255, 255);
        assert!(
            (white - 254.9745).abs() < 1e-9,
            "BT.601 weights sum to 0.9999, got {white}"
        );
    }

    #[test]
    fn test_clamp_u8_saturates() {
        assert_eq!(clamp_u8(-3.0), 0);
        assert_eq!(clamp_u8(0.0), 0);
        assert_eq!(clamp_u8(127.9), 127);
        assert_eq!(clamp_u8(255.0), 255);
        assert_eq!(clamp_u8(400.0), 255);
        assert_eq!(clamp_u8(f64::NAN), 0);
    }
}
