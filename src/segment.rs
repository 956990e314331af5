//! Threshold-based region segmentation.
//!
//! Segmentation labels pixels by intensity proximity to a set of seed
//! colors. The seed palette is ordinarily random; [`random_seeds`] draws it
//! from a caller-supplied RNG so tests and repeat runs stay deterministic.
//! Assignment is purely per-pixel, no connectivity constraint is applied.

use crate::error::EngineError;
use crate::raster::{intensity, RasterBuilder};
use crate::RasterImage;
use rand::Rng;
use tracing::debug;

/// Draw `count` random RGB seed colors from `rng`.
pub fn random_seeds<R: Rng>(rng: &mut R, count: u32) -> Vec<[u8; 3]> {
    (0..count).map(|_| rng.gen()).collect()
}

/// Assign every pixel to the seed whose intensity is closest to its own,
/// provided the difference is within `threshold`.
///
/// Matched pixels take the winning seed's color at full opacity; ties go to
/// the earliest seed in the palette. Pixels with no qualifying seed stay
/// transparent zero.
pub fn region_segmentation(
    image: &RasterImage,
    threshold: f64,
    seeds: &[[u8; 3]],
) -> Result<RasterImage, EngineError> {
    if seeds.is_empty() {
        return Err(EngineError::InvalidParameter(
            "segmentation needs at least one seed color".into(),
        ));
    }
    if !threshold.is_finite() || threshold < 0.0 {
        return Err(EngineError::InvalidParameter(format!(
            "segmentation threshold must be finite and non-negative, got {threshold}"
        )));
    }
    debug!(
        width = image.width(),
        height = image.height(),
        seeds = seeds.len(),
        threshold,
        "region segmentation"
    );

    let seed_levels: Vec<f64> = seeds.iter().map(|&[r, g, b]| intensity(r, g, b)).collect();

    let mut builder = RasterBuilder::new(image.width(), image.height());
    for y in 0..image.height() {
        for x in 0..image.width() {
            let level = image.intensity_at(x, y);

            let mut best: Option<usize> = None;
            let mut best_difference = f64::INFINITY;
            for (i, &seed_level) in seed_levels.iter().enumerate() {
                let difference = (level - seed_level).abs();
                if difference <= threshold && difference < best_difference {
                    best_difference = difference;
                    best = Some(i);
                }
            }

            if let Some(i) = best {
                builder.put_rgb(x, y, seeds[i]);
            }
        }
    }
    Ok(builder.freeze())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_seeds_are_reproducible() {
        let a = random_seeds(&mut StdRng::seed_from_u64(7), 5);
        let b = random_seeds(&mut StdRng::seed_from_u64(7), 5);
        assert_eq!(a.len(), 5);
        assert_eq!(a, b, "Same RNG seed must yield the same palette");
    }

    #[test]
    fn test_closest_seed_wins() {
        // Gray 120 sits 20 from the first seed and 60 from the second.
        let image = RasterImage::solid(2, 2, [120, 120, 120, 255]);
        let seeds = [[100, 100, 100], [180, 180, 180]];

        let segmented = region_segmentation(&image, 255.0, &seeds).unwrap();
        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(segmented.get(x, y).unwrap(), [100, 100, 100, 255]);
            }
        }
    }

    #[test]
    fn test_tie_goes_to_the_earlier_seed() {
        // Both seeds are 25 away from gray 125.
        let image = RasterImage::solid(1, 1, [125, 125, 125, 255]);
        let seeds = [[150, 150, 150], [100, 100, 100]];

        let segmented = region_segmentation(&image, 50.0, &seeds).unwrap();
        assert_eq!(segmented.get(0, 0).unwrap(), [150, 150, 150, 255]);
    }

    #[test]
    fn test_unqualified_pixels_stay_transparent() {
        let image = RasterImage::solid(2, 1, [255, 255, 255, 255]);
        let seeds = [[0, 0, 0]];

        let segmented = region_segmentation(&image, 10.0, &seeds).unwrap();
        assert_eq!(segmented.get(0, 0).unwrap(), [0, 0, 0, 0]);
        assert_eq!(segmented.get(1, 0).unwrap(), [0, 0, 0, 0]);
    }

    #[test]
    fn test_threshold_boundary_is_inclusive() {
        let image = RasterImage::solid(1, 1, [110, 110, 110, 255]);
        let seeds = [[100, 100, 100]];

        let segmented = region_segmentation(&image, 10.0, &seeds).unwrap();
        assert_eq!(segmented.get(0, 0).unwrap(), [100, 100, 100, 255]);
    }

    #[test]
    fn test_seed_color_decides_paint_but_intensity_decides_match() {
        // The seed's channels differ but its intensity (90) matches the
        // pixel; the painted color is the seed's actual RGB.
        let image = RasterImage::solid(1, 1, [90, 90, 90, 255]);
        let seeds = [[200, 50, 20]];

        let segmented = region_segmentation(&image, 0.0, &seeds).unwrap();
        assert_eq!(segmented.get(0, 0).unwrap(), [200, 50, 20, 255]);
    }

    #[test]
    fn test_rejects_empty_palette_and_bad_threshold() {
        let image = RasterImage::solid(1, 1, [0, 0, 0, 255]);
        assert!(matches!(
            region_segmentation(&image, 10.0, &[]),
            Err(EngineError::InvalidParameter(_))
        ));
        assert!(matches!(
            region_segmentation(&image, -1.0, &[[0, 0, 0]]),
            Err(EngineError::InvalidParameter(_))
        ));
        assert!(matches!(
            region_segmentation(&image, f64::NAN, &[[0, 0, 0]]),
            Err(EngineError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_end_to_end_with_random_palette() {
        let mut rng = StdRng::seed_from_u64(42);
        let seeds = random_seeds(&mut rng, 8);
        let image = RasterImage::solid(3, 3, [60, 120, 180, 255]);

        // Threshold 255 qualifies every seed, so every pixel is painted
        // with the same winner.
        let segmented = region_segmentation(&image, 255.0, &seeds).unwrap();
        let first = segmented.get(0, 0).unwrap();
        assert_eq!(first[3], 255);
        for chunk in segmented.pixels().chunks_exact(4) {
            assert_eq!(chunk, first);
        }
    }
}
