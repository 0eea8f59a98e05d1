use getset::Getters;
use serde::{Deserialize, Serialize};

/// Data quality assumed when the caller does not supply one.
pub const DEFAULT_DATA_QUALITY: f64 = 0.8;

/// A deterministic band around a point estimate.
///
/// The band is not sampled: it is the estimate scaled by a fixed uncertainty
/// fraction discounted by the data quality. Bounds are never clamped, so a
/// percentage may exceed 100 or a low bound may go negative.
#[derive(Debug, Clone, Copy, PartialEq, Getters, Serialize, Deserialize)]
#[getset(get = "pub")]
pub struct ConfidenceInterval {
    low: f64,
    mid: f64,
    high: f64,
    /// Equals the data quality the interval was built with.
    confidence: f64,
}

impl ConfidenceInterval {
    /// Half-width of the band as a percentage of the midpoint.
    ///
    /// Returns `None` for a zero midpoint.
    pub fn relative_spread(&self) -> Option<f64> {
        if self.mid == 0.0 {
            return None;
        }
        Some((self.high - self.low) / (2.0 * self.mid) * 100.0)
    }
}

/// Wraps `base` in a band of width `uncertainty * (1 - data_quality)`.
///
/// Higher data quality narrows the band: a quality of 1.0 collapses it onto
/// the midpoint, a quality of 0.0 applies the full uncertainty.
pub fn build_interval(base: f64, uncertainty: f64, data_quality: f64) -> ConfidenceInterval {
    let adjusted = uncertainty * (1.0 - data_quality);
    ConfidenceInterval {
        low: base * (1.0 - adjusted),
        mid: base,
        high: base * (1.0 + adjusted),
        confidence: data_quality,
    }
}

/// [`build_interval`] with [`DEFAULT_DATA_QUALITY`].
pub fn build_interval_default(base: f64, uncertainty: f64) -> ConfidenceInterval {
    build_interval(base, uncertainty, DEFAULT_DATA_QUALITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_quality_collapses_band() {
        let ci = build_interval(100.0, 0.3, 1.0);
        assert_eq!(*ci.low(), 100.0);
        assert_eq!(*ci.mid(), 100.0);
        assert_eq!(*ci.high(), 100.0);
        assert_eq!(*ci.confidence(), 1.0);
    }

    #[test]
    fn test_zero_quality_applies_full_uncertainty() {
        let ci = build_interval(100.0, 0.3, 0.0);
        assert!((ci.low() - 70.0).abs() < 1e-9);
        assert_eq!(*ci.mid(), 100.0);
        assert!((ci.high() - 130.0).abs() < 1e-9);
        assert_eq!(*ci.confidence(), 0.0);
    }

    #[test]
    fn test_default_quality() {
        let ci = build_interval_default(1000.0, 0.5);
        // 0.5 * (1 - 0.8) = 0.1
        assert!((ci.low() - 900.0).abs() < 1e-9);
        assert!((ci.high() - 1100.0).abs() < 1e-9);
        assert_eq!(*ci.confidence(), DEFAULT_DATA_QUALITY);
    }

    #[test]
    fn test_bounds_are_not_clamped() {
        let ci = build_interval(10.0, 3.0, 0.0);
        assert!(*ci.low() < 0.0);
        assert!((ci.high() - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_ordering_holds_for_non_negative_base() {
        for &quality in &[0.0, 0.25, 0.65, 0.85, 1.0] {
            let ci = build_interval(42.0, 0.4, quality);
            assert!(ci.low() <= ci.mid() && ci.mid() <= ci.high());
        }
    }

    #[test]
    fn test_relative_spread() {
        let ci = build_interval(200.0, 0.3, 0.0);
        assert!((ci.relative_spread().unwrap() - 30.0).abs() < 1e-9);
        assert!(build_interval(0.0, 0.3, 0.5).relative_spread().is_none());
    }
}
