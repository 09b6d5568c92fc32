// Curvature classifier: aggregates the curvature series and applies the threshold.
// Rule: a path with no sharply curved segment anywhere is treated as scripted.

use crate::curvature::curvature_series;
use crate::types::*;

/// Stateless classifier. Holds only its configuration, so one instance can
/// be shared across sessions and threads.
#[derive(Debug, Clone, Default)]
pub struct CurvatureClassifier {
    config: DetectorConfig,
}

impl CurvatureClassifier {
    pub fn new(config: DetectorConfig) -> Self {
        CurvatureClassifier { config }
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Classify a recorded pointer path.
    ///
    /// Paths without measurable curvature (fewer than three samples, or
    /// stationary everywhere) get no statistics and the configured
    /// insufficient-data verdict. Otherwise the path is flagged when its
    /// maximum curvature does not exceed `macro_threshold`.
    pub fn classify(&self, path: &[Point]) -> ClassificationResult {
        let series = curvature_series(path);

        match summarize(&series) {
            Some(stats) => ClassificationResult {
                is_macro: stats.max <= self.config.macro_threshold,
                stats: Some(stats),
            },
            None => ClassificationResult::insufficient(self.config.flag_insufficient_data),
        }
    }

    /// Classify and format in one step, using the configured precision.
    pub fn report(&self, path: &[Point]) -> CurvatureReport {
        self.classify(path).report(self.config.report_precision)
    }
}

/// Mean, extremes and population standard deviation of a curvature series.
/// Returns `None` for an empty series.
///
/// The mean is `Σκ / len` clamped into `[min, max]`. Summation rounding can
/// leave the raw quotient up to a ulp outside that range (e.g. three copies
/// of `0.1`); the clamp keeps `min <= mean <= max` and makes the deviation of
/// an all-equal series exactly zero. It never moves the mean by more than the
/// rounding error and does not affect the decision, which reads `max`.
///
/// An infinite curvature makes the spread unbounded, so `std` is `+inf`.
pub fn summarize(series: &[f64]) -> Option<CurvatureStats> {
    if series.is_empty() {
        return None;
    }

    let count = series.len() as f64;
    let max = series.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = series.iter().copied().fold(f64::INFINITY, f64::min);
    let mean = (series.iter().sum::<f64>() / count).clamp(min, max);

    let std = if max.is_finite() {
        let variance = series.iter().map(|k| (k - mean).powi(2)).sum::<f64>() / count;
        variance.sqrt()
    } else {
        f64::INFINITY
    };

    Some(CurvatureStats {
        mean,
        max,
        min,
        std,
    })
}
