//! Halftoning: ordered dithering and error diffusion.
//!
//! Ordered dithering thresholds each pixel against a tiled index matrix and
//! touches nothing else. Error diffusion quantizes each channel to black or
//! white in raster order and pushes the quantization error onto neighbors
//! that have not been visited yet, per the selected kernel.

pub mod diffusion;
pub mod kernel;
pub mod ordered;
