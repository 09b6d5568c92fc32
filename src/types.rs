// Strong typing over loose JSON. Points, results, reports and config.

use serde::{Deserialize, Serialize};

use crate::error::DetectorError;

/// Largest accepted `report_precision`, the same range as JS `toFixed`.
pub const MAX_REPORT_PRECISION: usize = 100;

/// Pointer position in raster coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point { x, y }
    }
}

/// Summary statistics over a non-empty curvature series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvatureStats {
    pub mean: f64,
    pub max: f64,
    pub min: f64,
    /// Population standard deviation (divisor = count).
    pub std: f64,
}

/// Outcome of one classification call.
///
/// `stats` is `None` when the path had no measurable curvature, so the four
/// statistics are always present or absent together.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub is_macro: bool,
    pub stats: Option<CurvatureStats>,
}

impl ClassificationResult {
    pub fn insufficient(is_macro: bool) -> Self {
        ClassificationResult {
            is_macro,
            stats: None,
        }
    }

    pub fn mean_curvature(&self) -> Option<f64> {
        self.stats.map(|s| s.mean)
    }

    pub fn max_curvature(&self) -> Option<f64> {
        self.stats.map(|s| s.max)
    }

    pub fn min_curvature(&self) -> Option<f64> {
        self.stats.map(|s| s.min)
    }

    pub fn curvature_std(&self) -> Option<f64> {
        self.stats.map(|s| s.std)
    }

    /// Display form with every statistic formatted fixed-point to `precision` decimals.
    /// Precision is capped at [`MAX_REPORT_PRECISION`].
    pub fn report(&self, precision: usize) -> CurvatureReport {
        let precision = precision.min(MAX_REPORT_PRECISION);
        let fmt = |v: Option<f64>| v.map(|v| format!("{:.*}", precision, v));
        CurvatureReport {
            is_macro: self.is_macro,
            values: ReportValues {
                mean_curvature: fmt(self.mean_curvature()),
                max_curvature: fmt(self.max_curvature()),
                min_curvature: fmt(self.min_curvature()),
                curvature_std: fmt(self.curvature_std()),
            },
        }
    }
}

/// Classification result as returned to JS.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurvatureReport {
    pub is_macro: bool,
    pub values: ReportValues,
}

/// Formatted statistics. Strings are display precision only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportValues {
    pub mean_curvature: Option<String>,
    pub max_curvature: Option<String>,
    pub min_curvature: Option<String>,
    pub curvature_std: Option<String>,
}

/// Detector configuration passed from JS.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// A path is flagged when its max curvature is at or below this value.
    #[serde(default = "default_macro_threshold")]
    pub macro_threshold: f64,
    /// Verdict for paths with no measurable curvature (too short or stationary).
    #[serde(default = "default_true")]
    pub flag_insufficient_data: bool,
    /// Decimals used when formatting a report.
    #[serde(default = "default_report_precision")]
    pub report_precision: usize,
    /// Message surfaced when a trigger is rejected.
    #[serde(default = "default_rejection_message")]
    pub rejection_message: String,
}

fn default_macro_threshold() -> f64 {
    0.01
}

fn default_true() -> bool {
    true
}

fn default_report_precision() -> usize {
    10
}

fn default_rejection_message() -> String {
    "Please try again.".to_string()
}

impl Default for DetectorConfig {
    fn default() -> Self {
        DetectorConfig {
            macro_threshold: default_macro_threshold(),
            flag_insufficient_data: default_true(),
            report_precision: default_report_precision(),
            rejection_message: default_rejection_message(),
        }
    }
}

impl DetectorConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, DetectorError> {
        let config: DetectorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DetectorError> {
        if !self.macro_threshold.is_finite() || self.macro_threshold < 0.0 {
            return Err(DetectorError::InvalidConfig(format!(
                "macro_threshold must be a finite non-negative number, got {}",
                self.macro_threshold
            )));
        }
        if self.report_precision > MAX_REPORT_PRECISION {
            return Err(DetectorError::InvalidConfig(format!(
                "report_precision must be at most {}, got {}",
                MAX_REPORT_PRECISION, self.report_precision
            )));
        }
        Ok(())
    }
}

/// Single interaction event from the host page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InteractionEvent {
    /// Pointer moved to a new position.
    PointerMove { x: f64, y: f64 },
    /// The guarded action fired (e.g. click on the protected target).
    Trigger,
    /// Any other pointer action; discards the pending path.
    UnrelatedAction,
}

/// Batch of interaction events from JS (minimizes JS↔WASM crossings).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventBatch {
    pub events: Vec<InteractionEvent>,
}

/// What the host should do with a triggered action.
#[derive(Debug, Clone, PartialEq)]
pub enum TriggerOutcome {
    Proceed {
        result: ClassificationResult,
    },
    Reject {
        result: ClassificationResult,
        message: String,
    },
}

impl TriggerOutcome {
    pub fn result(&self) -> &ClassificationResult {
        match self {
            TriggerOutcome::Proceed { result } | TriggerOutcome::Reject { result, .. } => result,
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, TriggerOutcome::Reject { .. })
    }

    pub fn report(&self, precision: usize) -> TriggerReport {
        let message = match self {
            TriggerOutcome::Proceed { .. } => None,
            TriggerOutcome::Reject { message, .. } => Some(message.clone()),
        };
        TriggerReport {
            proceed: !self.is_rejected(),
            message,
            report: self.result().report(precision),
        }
    }
}

/// Trigger outcome as returned to JS.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerReport {
    pub proceed: bool,
    pub message: Option<String>,
    pub report: CurvatureReport,
}
