//! Color operations: channel isolation, color-space decompositions,
//! pseudocoloring and bit-plane slicing.
//!
//! Decompositions return one grayscale (or tinted) plane per component
//! rather than a repacked image; the workbench displays the planes side by
//! side.

pub mod channels;
pub mod convert;
pub mod pseudocolor;
pub mod slicing;
