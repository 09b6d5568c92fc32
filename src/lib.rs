// macro_guard: Rust/WASM pointer-path curvature classifier.
// All the decision logic lives here; JS only forwards events and acts on verdicts.

mod classifier;
mod curvature;
mod derivative;
mod error;
mod sampler;
mod types;

use wasm_bindgen::prelude::*;

pub use classifier::{summarize, CurvatureClassifier};
pub use curvature::{curvature_profile, curvature_series, point_curvature, MIN_PATH_POINTS};
pub use derivative::derivative;
pub use error::DetectorError;
pub use sampler::InteractionSampler;
pub use types::*;

/// Initialize panic hook and console logging for the browser.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    console_log::init_with_level(log::Level::Info).ok();
    log::info!("[MacroGuard] WASM module initialized");
}

fn to_js(err: DetectorError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn parse_config(config_json: Option<String>) -> Result<DetectorConfig, DetectorError> {
    match config_json {
        Some(json) if !json.trim().is_empty() => DetectorConfig::from_json(&json),
        _ => Ok(DetectorConfig::default()),
    }
}

/// One-shot classification of a JSON array of `{ "x": .., "y": .. }` points.
/// Returns the curvature report as JSON.
#[wasm_bindgen]
pub fn classify_path(points_json: &str, config_json: Option<String>) -> Result<String, JsValue> {
    let config = parse_config(config_json).map_err(to_js)?;
    let points: Vec<Point> = serde_json::from_str(points_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid points: {}", e)))?;

    let report = CurvatureClassifier::new(config).report(&points);
    serde_json::to_string(&report)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Per-session detector exposed to JavaScript.
/// Wraps an [`InteractionSampler`]; create one per guarded page or tab.
#[wasm_bindgen]
pub struct MacroDetector {
    sampler: InteractionSampler,
}

#[wasm_bindgen]
impl MacroDetector {
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<MacroDetector, JsValue> {
        let config = parse_config(config_json).map_err(to_js)?;

        Ok(MacroDetector {
            sampler: InteractionSampler::new(config),
        })
    }

    /// Record a pointer position. Returns whether it was kept.
    pub fn observe(&mut self, x: f64, y: f64) -> bool {
        self.sampler.observe(Point::new(x, y))
    }

    /// Classify the pending path and clear it.
    /// Returns JSON `{ proceed, message, report }`.
    pub fn trigger(&mut self) -> Result<String, JsValue> {
        let precision = self.sampler.config().report_precision;
        let report = self.sampler.trigger().report(precision);

        serde_json::to_string(&report)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Discard the pending path (unrelated pointer action).
    pub fn reset(&mut self) {
        self.sampler.reset();
    }

    pub fn pending_len(&self) -> usize {
        self.sampler.pending().len()
    }

    /// Process a batch of interaction events and return a JSON array with one
    /// trigger report per `Trigger` event.
    /// Batch interface to minimize JS↔WASM crossings.
    pub fn process_events(&mut self, events_json: &str) -> Result<String, JsValue> {
        let batch: EventBatch = serde_json::from_str(events_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid events: {}", e)))?;

        let precision = self.sampler.config().report_precision;
        let reports: Vec<TriggerReport> = self
            .sampler
            .process(&batch)
            .iter()
            .map(|outcome| outcome.report(precision))
            .collect();

        serde_json::to_string(&reports)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }
}
