//! Error diffusion kernel definitions.
//!
//! Each kernel specifies how the quantization error of a pixel is
//! distributed to its not-yet-visited neighbors.

/// An error diffusion kernel.
///
/// Entries are `(dx, dy, weight)` offsets relative to the current pixel;
/// every neighbor receives `error * weight / divisor`. All kernels here
/// propagate 100% of the error (weights sum to the divisor).
///
/// `dy` is never negative and `dy == 0` entries point right, so diffusion
/// in raster order only ever touches unvisited pixels.
#[derive(Debug, Clone, Copy)]
pub struct DiffusionKernel {
    /// (dx, dy, weight) entries for error diffusion.
    pub entries: &'static [(i32, i32, u8)],

    /// Total divisor for normalizing weights.
    pub divisor: u8,

    /// Maximum dy value in entries; how many rows ahead the kernel reaches.
    pub max_dy: usize,
}

/// Floyd-Steinberg kernel.
///
/// The most widely known error diffusion algorithm.
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: DiffusionKernel = DiffusionKernel {
    entries: &[
        (1, 0, 7),  // right
        (-1, 1, 3), // bottom-left
        (0, 1, 5),  // bottom
        (1, 1, 1),  // bottom-right
    ],
    divisor: 16,
    max_dy: 1,
};

/// Rogers kernel: half the error right, half below.
///
/// ```text
///    X   1
///    1
/// ```
pub const ROGERS: DiffusionKernel = DiffusionKernel {
    entries: &[(1, 0, 1), (0, 1, 1)],
    divisor: 2,
    max_dy: 1,
};

/// Jarvis-Judice-Ninke kernel.
///
/// Twelve neighbors over three rows; smoother gradients than
/// Floyd-Steinberg at the cost of a larger reach.
///
/// ```text
///            X   7   5
///    3   5   7   5   3
///    1   3   5   3   1
/// ```
pub const JARVIS_JUDICE_NINKE: DiffusionKernel = DiffusionKernel {
    entries: &[
        (1, 0, 7),
        (2, 0, 5),
        (-2, 1, 3),
        (-1, 1, 5),
        (0, 1, 7),
        (1, 1, 5),
        (2, 1, 3),
        (-2, 2, 1),
        (-1, 2, 3),
        (0, 2, 5),
        (1, 2, 3),
        (2, 2, 1),
    ],
    divisor: 48,
    max_dy: 2,
};

/// Stucki kernel: Jarvis-Judice-Ninke's layout with power-of-two weights.
///
/// ```text
///            X   8   4
///    2   4   8   4   2
///    1   2   4   2   1
/// ```
pub const STUCKI: DiffusionKernel = DiffusionKernel {
    entries: &[
        (1, 0, 8),
        (2, 0, 4),
        (-2, 1, 2),
        (-1, 1, 4),
        (0, 1, 8),
        (1, 1, 4),
        (2, 1, 2),
        (-2, 2, 1),
        (-1, 2, 2),
        (0, 2, 4),
        (1, 2, 2),
        (2, 2, 1),
    ],
    divisor: 42,
    max_dy: 2,
};

/// Stevenson-Arce kernel.
///
/// Twelve neighbors on a hexagonal-style lattice reaching three rows down.
///
/// ```text
///            X   .   32  .
///    12  .   26  .   30  .   16
///        12  .   26  .   12
///    5   .   12  .   12  .   5
/// ```
pub const STEVENSON_ARCE: DiffusionKernel = DiffusionKernel {
    entries: &[
        (2, 0, 32),
        (-3, 1, 12),
        (-1, 1, 26),
        (1, 1, 30),
        (3, 1, 16),
        (-2, 2, 12),
        (0, 2, 26),
        (2, 2, 12),
        (-3, 3, 5),
        (-1, 3, 12),
        (1, 3, 12),
        (3, 3, 5),
    ],
    divisor: 200,
    max_dy: 3,
};
