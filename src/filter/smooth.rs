//! Edge-preserving smoothers of the Kuwahara family.
//!
//! All four filters share one scheme: partition the 5x5 neighborhood into
//! overlapping sub-regions, then output the mean of the sub-region with the
//! smallest variance, channel by channel. They differ only in the region
//! partition:
//!
//! * Kuwahara: the four 3x3 corner quadrants.
//! * Tomita-Tsuji: the quadrants plus the centered 3x3.
//! * Nagao-Matsuyama: the centered 3x3 plus four 7-pixel edge regions and
//!   four 7-pixel corner regions.
//! * Somboonkaew: all twelve oriented regions (quadrants, edges, corners).

use crate::error::EngineError;
use crate::filter::map_window;
use crate::raster::clamp_u8;
use crate::stats;
use crate::RasterImage;
use tracing::debug;

type Region = &'static [(i32, i32)];

const QUAD_NW: Region = &[
    (-2, -2), (-1, -2), (0, -2),
    (-2, -1), (-1, -1), (0, -1),
    (-2, 0), (-1, 0), (0, 0),
];
const QUAD_NE: Region = &[
    (0, -2), (1, -2), (2, -2),
    (0, -1), (1, -1), (2, -1),
    (0, 0), (1, 0), (2, 0),
];
const QUAD_SW: Region = &[
    (-2, 0), (-1, 0), (0, 0),
    (-2, 1), (-1, 1), (0, 1),
    (-2, 2), (-1, 2), (0, 2),
];
const QUAD_SE: Region = &[
    (0, 0), (1, 0), (2, 0),
    (0, 1), (1, 1), (2, 1),
    (0, 2), (1, 2), (2, 2),
];
const CENTER: Region = &[
    (-1, -1), (0, -1), (1, -1),
    (-1, 0), (0, 0), (1, 0),
    (-1, 1), (0, 1), (1, 1),
];

const EDGE_TOP: Region = &[(-1, -2), (0, -2), (1, -2), (-1, -1), (0, -1), (1, -1), (0, 0)];
const EDGE_BOTTOM: Region = &[(-1, 2), (0, 2), (1, 2), (-1, 1), (0, 1), (1, 1), (0, 0)];
const EDGE_LEFT: Region = &[(-2, -1), (-2, 0), (-2, 1), (-1, -1), (-1, 0), (-1, 1), (0, 0)];
const EDGE_RIGHT: Region = &[(2, -1), (2, 0), (2, 1), (1, -1), (1, 0), (1, 1), (0, 0)];

const CORNER_NE: Region = &[(1, -2), (2, -2), (0, -1), (1, -1), (2, -1), (0, 0), (1, 0)];
const CORNER_SE: Region = &[(2, 1), (2, 2), (1, 0), (1, 1), (1, 2), (0, 0), (0, 1)];
const CORNER_SW: Region = &[(-1, 2), (-2, 2), (0, 1), (-1, 1), (-2, 1), (0, 0), (-1, 0)];
const CORNER_NW: Region = &[(-2, -1), (-2, -2), (-1, 0), (-1, -1), (-1, -2), (0, 0), (0, -1)];

const KUWAHARA: &[Region] = &[QUAD_NW, QUAD_NE, QUAD_SW, QUAD_SE];
const TOMITA_TSUJI: &[Region] = &[QUAD_NW, QUAD_NE, QUAD_SW, QUAD_SE, CENTER];
const NAGAO_MATSUYAMA: &[Region] = &[
    CENTER, EDGE_TOP, EDGE_BOTTOM, EDGE_LEFT, EDGE_RIGHT, CORNER_NE, CORNER_SE, CORNER_SW,
    CORNER_NW,
];
const SOMBOONKAEW: &[Region] = &[
    QUAD_NW, QUAD_NE, QUAD_SW, QUAD_SE, EDGE_TOP, EDGE_BOTTOM, EDGE_LEFT, EDGE_RIGHT, CORNER_NE,
    CORNER_SE, CORNER_SW, CORNER_NW,
];

fn region_values(image: &RasterImage, cx: u32, cy: u32, region: Region, channel: usize) -> Vec<f64> {
    region
        .iter()
        .map(|&(dx, dy)| {
            let x = (cx as i32 + dx) as u32;
            let y = (cy as i32 + dy) as u32;
            image.pixels()[image.offset(x, y) + channel] as f64
        })
        .collect()
}

fn region_smooth(image: &RasterImage, regions: &[Region]) -> Result<RasterImage, EngineError> {
    map_window(image, 2, |cx, cy| {
        let mut rgb = [0u8; 3];
        for (channel, out) in rgb.iter_mut().enumerate() {
            let samples: Vec<Vec<f64>> = regions
                .iter()
                .map(|region| region_values(image, cx, cy, region, channel))
                .collect();
            let variances: Vec<f64> = samples.iter().map(|v| stats::variance(v)).collect();
            let calmest = stats::min_variance_index(&variances);
            *out = clamp_u8(stats::average(&samples[calmest]));
        }
        rgb
    })
}

/// Kuwahara filter over the four corner quadrants.
pub fn kuwahara(image: &RasterImage) -> Result<RasterImage, EngineError> {
    debug!("kuwahara filter");
    region_smooth(image, KUWAHARA)
}

/// Tomita-Tsuji filter: Kuwahara's quadrants plus the centered 3x3.
pub fn tomita_tsuji(image: &RasterImage) -> Result<RasterImage, EngineError> {
    debug!("tomita-tsuji filter");
    region_smooth(image, TOMITA_TSUJI)
}

/// Nagao-Matsuyama filter over nine oriented regions.
pub fn nagao_matsuyama(image: &RasterImage) -> Result<RasterImage, EngineError> {
    debug!("nagao-matsuyama filter");
    region_smooth(image, NAGAO_MATSUYAMA)
}

/// Somboonkaew filter over all twelve oriented regions.
pub fn somboonkaew(image: &RasterImage) -> Result<RasterImage, EngineError> {
    debug!("somboonkaew filter");
    region_smooth(image, SOMBOONKAEW)
}
