//! Axis and binning helpers shared by the chart renderers.

use chartpdf_table::min_max;
use std::ops::Range;

/// Fraction of the data span added on each side of an axis.
pub const AXIS_PADDING: f64 = 0.05;

/// Axis range covering `lo..hi` with padding on both sides.
///
/// When `include_zero` is set the range always reaches zero, as bar and
/// area charts are drawn from a zero baseline. Degenerate spans are widened
/// so plotters always has a non-empty range to map.
pub fn padded_range(lo: f64, hi: f64, include_zero: bool) -> Range<f64> {
    let (mut lo, mut hi) = if include_zero { (lo.min(0.0), hi.max(0.0)) } else { (lo, hi) };
    let span = hi - lo;
    if span.abs() < f64::EPSILON {
        let half = if lo.abs() < f64::EPSILON { 1.0 } else { lo.abs() * 0.1 };
        return (lo - half)..(hi + half);
    }
    let pad = span * AXIS_PADDING;
    if !(include_zero && lo >= 0.0) {
        lo -= pad;
    }
    if !(include_zero && hi <= 0.0) {
        hi += pad;
    }
    lo..hi
}

/// Padded range over `values`, or `0..1` when there are none.
pub fn value_axis(values: &[f64], include_zero: bool) -> Range<f64> {
    min_max(values).map_or(0.0..1.0, |(lo, hi)| padded_range(lo, hi, include_zero))
}

/// Label for a categorical tick at `position`; blank between categories.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn category_label(labels: &[String], position: f64) -> String {
    let rounded = position.round();
    if (position - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    labels.get(rounded as usize).cloned().unwrap_or_default()
}

/// Tick count for a categorical axis, capped to keep labels legible.
pub fn category_ticks(count: usize) -> usize {
    count.clamp(1, 12)
}

/// Compact numeric tick label: whole numbers without decimals.
pub fn format_tick(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{value:.0}")
    } else {
        let text = format!("{value:.2}");
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// One histogram bucket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    /// Inclusive lower edge.
    pub start: f64,
    /// Upper edge; inclusive for the last bin only.
    pub end: f64,
    /// Number of values in the bucket.
    pub count: usize,
}

/// Splits `values` into `bins` equal-width buckets between their extremes.
///
/// The last bucket is closed on the right so the maximum is counted. A
/// constant sample is spread over `value - 0.5 .. value + 0.5`.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn histogram_bins(values: &[f64], bins: usize) -> Vec<Bin> {
    let Some((mut lo, mut hi)) = min_max(values) else {
        return Vec::new();
    };
    let bins = bins.max(1);
    if (hi - lo).abs() < f64::EPSILON {
        lo -= 0.5;
        hi += 0.5;
    }
    let width = (hi - lo) / bins as f64;

    let mut counts = vec![0usize; bins];
    for value in values {
        let index = (((value - lo) / width).floor() as usize).min(bins - 1);
        counts[index] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| Bin {
            start: (i as f64).mul_add(width, lo),
            end: if i + 1 == bins { hi } else { ((i + 1) as f64).mul_add(width, lo) },
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padded_range_includes_zero() {
        let range = padded_range(95.0, 160.0, true);
        assert!((range.start - 0.0).abs() < f64::EPSILON);
        assert!(range.end > 160.0);
    }

    #[test]
    fn test_padded_range_negative_values() {
        let range = padded_range(-10.0, -2.0, true);
        assert!(range.start < -10.0);
        assert!((range.end - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_padded_range_degenerate() {
        let range = padded_range(5.0, 5.0, false);
        assert!(range.start < 5.0 && range.end > 5.0);
        let zero = padded_range(0.0, 0.0, true);
        assert!(zero.start < zero.end);
    }

    #[test]
    fn test_category_label() {
        let labels = vec!["Jan".to_string(), "Feb".to_string()];
        assert_eq!(category_label(&labels, 1.0), "Feb");
        assert_eq!(category_label(&labels, 0.5), "");
        assert_eq!(category_label(&labels, 2.0), "");
        assert_eq!(category_label(&labels, -1.0), "");
    }

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(120.0), "120");
        assert_eq!(format_tick(2.5), "2.5");
        assert_eq!(format_tick(0.126), "0.13");
    }

    #[test]
    fn test_histogram_bins_count_everything() {
        let values = [1.0, 2.0, 2.5, 3.0, 10.0];
        let bins = histogram_bins(&values, 3);
        assert_eq!(bins.len(), 3);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), values.len());
        assert!((bins[0].start - 1.0).abs() < f64::EPSILON);
        assert!((bins[2].end - 10.0).abs() < f64::EPSILON);
        assert_eq!(bins[2].count, 1);
    }

    #[test]
    fn test_histogram_constant_sample() {
        let bins = histogram_bins(&[4.0, 4.0], 10);
        assert_eq!(bins.len(), 10);
        assert!((bins[0].start - 3.5).abs() < 1e-9);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 2);
    }

    #[test]
    fn test_histogram_empty() {
        assert!(histogram_bins(&[], 10).is_empty());
    }
}
