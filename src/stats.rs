//! Neighborhood statistics shared by the spatial filters.
//!
//! Small numeric helpers over flat sample slices: weighted-mask dot product,
//! mean, population variance, order statistics and the minimal-variance scan
//! used by the Kuwahara-family smoothers.
//!
//! `average` and `variance` divide by the actual sample count. (Earlier
//! implementations hardcoded a divisor of 9, silently mis-weighting the
//! 7-element sub-regions of the Nagao-Matsuyama and Somboonkaew partitions;
//! that divisor is corrected here.)

/// Dot product of a weight mask with a same-length sample slice.
///
/// # Panics
///
/// Mismatched lengths are a programmer error and panic via `assert_eq!`.
pub fn apply_mask(mask: &[i32], values: &[f64]) -> f64 {
    assert_eq!(
        mask.len(),
        values.len(),
        "mask and neighborhood sample counts must match"
    );
    mask.iter()
        .zip(values)
        .map(|(&m, &v)| m as f64 * v)
        .sum()
}

/// Arithmetic mean of a sample slice. Empty input yields 0.
pub fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance of a sample slice. Empty input yields 0.
pub fn variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = average(values);
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64
}

/// Index of the smallest value; linear scan, first minimum wins ties.
///
/// # Panics
///
/// Panics on an empty slice (no meaningful answer exists).
pub fn min_variance_index(variances: &[f64]) -> usize {
    assert!(!variances.is_empty(), "no variances to compare");
    let mut min = variances[0];
    let mut pos = 0;
    for (i, &v) in variances.iter().enumerate().skip(1) {
        if v < min {
            min = v;
            pos = i;
        }
    }
    pos
}

/// Largest sample value. Empty input yields 0.
pub fn max_value(values: &[f64]) -> f64 {
    values.iter().copied().fold(0.0, f64::max)
}

/// Smallest sample value. Empty input yields 255.
pub fn min_value(values: &[f64]) -> f64 {
    values.iter().copied().fold(255.0, f64::min)
}

/// Median by sorting a scratch copy; upper-middle element for even counts.
/// Empty input yields 0.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted[sorted.len() / 2]
}

/// Most frequent sample; on frequency ties the value encountered first wins
/// (insertion order of the neighborhood walk).
///
/// Samples are bucketed as rounded bytes, which is exact for pixel data.
pub fn mode(values: &[f64]) -> f64 {
    let mut counts = [0u32; 256];
    for &v in values {
        counts[v.clamp(0.0, 255.0).round() as usize] += 1;
    }
    let best = counts.iter().copied().max().unwrap_or(0);
    values
        .iter()
        .map(|&v| v.clamp(0.0, 255.0).round())
        .find(|&v| counts[v as usize] == best)
        .unwrap_or(0.0)
}
