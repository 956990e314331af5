//! Pixel-operation engine for an interactive image-processing workbench.
//!
//! Every operation consumes immutable [`RasterImage`] values (interleaved
//! RGBA) and produces new ones; nothing is mutated in place. The modules
//! group the operations the way the workbench presents them:
//!
//! - [`arithmetic`]: pixelwise arithmetic and logic between two images
//! - [`geometry`]: rotation, translation, scaling, reflection, shearing
//! - [`zoom`]: zoom in by replication or interpolation, out by deletion or
//!   mean value
//! - [`color`]: channel isolation, color-space conversion, pseudocoloring,
//!   bit-plane slicing
//! - [`enhance`]: point operations (interval stretch, binary, reverse, log,
//!   gamma and friends)
//! - [`histogram`]: histograms, equalization and chart rendering
//! - [`filter`]: low-pass, edge-preserving smoothing, high-pass, edge, line
//!   and dot detection
//! - [`halftone`]: ordered dithering and error diffusion
//! - [`threshold`]: global and local (adaptive) thresholding
//! - [`segment`]: threshold-based region segmentation
//!
//! Fallible operations return [`EngineError`]; the library emits `tracing`
//! events but never installs a subscriber.

pub mod arithmetic;
pub mod color;
pub mod enhance;
pub mod error;
pub mod filter;
pub mod geometry;
pub mod halftone;
pub mod histogram;
pub mod pgm;
pub mod raster;
pub mod segment;
pub mod stats;
pub mod threshold;
pub mod zoom;

pub use error::EngineError;
pub use raster::{RasterBuilder, RasterImage};
