//! Low-pass smoothing: mean, median, maximum, minimum and mode windows.
//!
//! The mean filter averages each color channel independently. The order
//! statistics (median, max, min, mode) follow the workbench's established
//! behavior of computing the statistic on the red channel and writing it to
//! all three channels, which is exact for the grayscale inputs these filters
//! are used on.

use crate::error::EngineError;
use crate::filter::{map_window, window_samples};
use crate::raster::clamp_u8;
use crate::stats;
use crate::RasterImage;
use tracing::debug;

/// Supported square window sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowSize {
    Three,
    Five,
}

impl WindowSize {
    fn half(self) -> u32 {
        match self {
            WindowSize::Three => 1,
            WindowSize::Five => 2,
        }
    }
}

/// Channel-wise arithmetic mean over the window.
pub fn mean(image: &RasterImage, size: WindowSize) -> Result<RasterImage, EngineError> {
    debug!(?size, "mean filter");
    let half = size.half();
    map_window(image, half, |cx, cy| {
        let mut rgb = [0u8; 3];
        for (channel, out) in rgb.iter_mut().enumerate() {
            let values = window_samples(image, cx, cy, half, channel);
            *out = clamp_u8(stats::average(&values));
        }
        rgb
    })
}

fn red_statistic(
    image: &RasterImage,
    size: WindowSize,
    statistic: impl Fn(&[f64]) -> f64,
) -> Result<RasterImage, EngineError> {
    let half = size.half();
    map_window(image, half, |cx, cy| {
        let values = window_samples(image, cx, cy, half, 0);
        let v = clamp_u8(statistic(&values));
        [v, v, v]
    })
}

/// Window median of the red channel, written to all channels.
pub fn median(image: &RasterImage, size: WindowSize) -> Result<RasterImage, EngineError> {
    debug!(?size, "median filter");
    red_statistic(image, size, stats::median)
}

/// Window maximum of the red channel, written to all channels.
pub fn maximum(image: &RasterImage, size: WindowSize) -> Result<RasterImage, EngineError> {
    debug!(?size, "maximum filter");
    red_statistic(image, size, stats::max_value)
}

/// Window minimum of the red channel, written to all channels.
pub fn minimum(image: &RasterImage, size: WindowSize) -> Result<RasterImage, EngineError> {
    debug!(?size, "minimum filter");
    red_statistic(image, size, stats::min_value)
}

/// Window mode of the red channel, written to all channels.
pub fn mode(image: &RasterImage, size: WindowSize) -> Result<RasterImage, EngineError> {
    debug!(?size, "mode filter");
    red_statistic(image, size, stats::mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::RasterBuilder;

    fn noisy() -> RasterImage {
        // 3x3 of 100s with a 255 spike in the center.
        let mut builder = RasterBuilder::new(3, 3);
        builder.fill([100, 100, 100, 255]);
        builder.put_gray(1, 1, 255);
        builder.freeze()
    }

    #[test]
    fn test_mean_averages_the_window() {
        let smoothed = mean(&noisy(), WindowSize::Three).unwrap();
        assert_eq!(smoothed.width(), 1);
        assert_eq!(smoothed.height(), 1);
        // (8 * 100 + 255) / 9 = 117.2 -> 117
        assert_eq!(smoothed.get(0, 0).unwrap(), [117, 117, 117, 255]);
    }

    #[test]
    fn test_mean_averages_channels_independently() {
        let image = RasterImage::solid(3, 3, [30, 60, 90, 255]);
        let smoothed = mean(&image, WindowSize::Three).unwrap();
        assert_eq!(smoothed.get(0, 0).unwrap(), [30, 60, 90, 255]);
    }

    #[test]
    fn test_median_suppresses_the_spike() {
        let smoothed = median(&noisy(), WindowSize::Three).unwrap();
        assert_eq!(smoothed.get(0, 0).unwrap(), [100, 100, 100, 255]);
    }

    #[test]
    fn test_maximum_picks_the_spike() {
        let smoothed = maximum(&noisy(), WindowSize::Three).unwrap();
        assert_eq!(smoothed.get(0, 0).unwrap(), [255, 255, 255, 255]);
    }

    #[test]
    fn test_minimum_picks_the_floor() {
        let smoothed = minimum(&noisy(), WindowSize::Three).unwrap();
        assert_eq!(smoothed.get(0, 0).unwrap(), [100, 100, 100, 255]);
    }

    #[test]
    fn test_mode_picks_the_majority() {
        let smoothed = mode(&noisy(), WindowSize::Three).unwrap();
        assert_eq!(smoothed.get(0, 0).unwrap(), [100, 100, 100, 255]);
    }

    #[test]
    fn test_five_by_five_shrinks_two_per_side() {
        let image = RasterImage::solid(7, 6, [50, 50, 50, 255]);
        let smoothed = mean(&image, WindowSize::Five).unwrap();
        assert_eq!(smoothed.width(), 3);
        assert_eq!(smoothed.height(), 2);
    }

    #[test]
    fn test_filters_reject_undersized_images() {
        let image = RasterImage::solid(2, 2, [0, 0, 0, 255]);
        assert!(matches!(
            median(&image, WindowSize::Three),
            Err(EngineError::InvalidParameter(_))
        ));
    }
}
