// Interaction sampler: accumulates the pointer path between guarded actions.
// Owns the only mutable state; one sampler per session, the classifier stays pure.

use crate::classifier::CurvatureClassifier;
use crate::types::*;

/// Accumulates pointer positions and hands them to the classifier on trigger.
pub struct InteractionSampler {
    classifier: CurvatureClassifier,
    buffer: Vec<Point>,
    last_position: Option<Point>,
}

impl InteractionSampler {
    pub fn new(config: DetectorConfig) -> Self {
        InteractionSampler {
            classifier: CurvatureClassifier::new(config),
            buffer: Vec::new(),
            last_position: None,
        }
    }

    pub fn config(&self) -> &DetectorConfig {
        self.classifier.config()
    }

    /// Path accumulated since the last trigger or reset.
    pub fn pending(&self) -> &[Point] {
        &self.buffer
    }

    /// Record a pointer position. Returns `false` when the pointer has not
    /// moved since the previous observation or the coordinates are not finite.
    ///
    /// The previous position outlives buffer resets, so returning to the same
    /// spot after a trigger is still not a move.
    pub fn observe(&mut self, point: Point) -> bool {
        if !point.is_finite() {
            log::warn!("[MacroGuard] Ignoring non-finite pointer sample ({}, {})", point.x, point.y);
            return false;
        }
        if self.last_position == Some(point) {
            return false;
        }

        self.last_position = Some(point);
        self.buffer.push(point);
        true
    }

    /// Classify the pending path and clear it, whatever the verdict.
    pub fn trigger(&mut self) -> TriggerOutcome {
        let path = std::mem::take(&mut self.buffer);
        let result = self.classifier.classify(&path);

        let report = result.report(self.config().report_precision);
        log::debug!(
            "[MacroGuard] {} samples: mean={:?} max={:?} min={:?} std={:?} is_macro={}",
            path.len(),
            report.values.mean_curvature,
            report.values.max_curvature,
            report.values.min_curvature,
            report.values.curvature_std,
            result.is_macro
        );

        if result.is_macro {
            TriggerOutcome::Reject {
                result,
                message: self.config().rejection_message.clone(),
            }
        } else {
            TriggerOutcome::Proceed { result }
        }
    }

    /// Discard the pending path without classifying it.
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    /// Process a batch of events in order and return one outcome per trigger.
    pub fn process(&mut self, batch: &EventBatch) -> Vec<TriggerOutcome> {
        let mut outcomes = Vec::new();

        for event in &batch.events {
            match event {
                InteractionEvent::PointerMove { x, y } => {
                    self.observe(Point::new(*x, *y));
                }
                InteractionEvent::Trigger => outcomes.push(self.trigger()),
                InteractionEvent::UnrelatedAction => self.reset(),
            }
        }

        outcomes
    }
}

impl Default for InteractionSampler {
    fn default() -> Self {
        Self::new(DetectorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moves(points: &[(f64, f64)]) -> Vec<InteractionEvent> {
        points
            .iter()
            .map(|&(x, y)| InteractionEvent::PointerMove { x, y })
            .collect()
    }

    const RIGHT_ANGLE: [(f64, f64); 5] = [(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (2.0, 1.0), (2.0, 2.0)];

    #[test]
    fn repeated_positions_are_not_recorded() {
        let mut sampler = InteractionSampler::default();
        assert!(sampler.observe(Point::new(1.0, 1.0)));
        assert!(!sampler.observe(Point::new(1.0, 1.0)));
        assert!(sampler.observe(Point::new(1.0, 2.0)));
        assert_eq!(sampler.pending().len(), 2);
    }

    #[test]
    fn non_finite_samples_are_ignored() {
        let mut sampler = InteractionSampler::default();
        assert!(!sampler.observe(Point::new(f64::NAN, 1.0)));
        assert!(!sampler.observe(Point::new(0.0, f64::INFINITY)));
        assert!(sampler.pending().is_empty());
    }

    #[test]
    fn trigger_clears_buffer_after_proceed() {
        let mut sampler = InteractionSampler::default();
        for &(x, y) in &RIGHT_ANGLE {
            sampler.observe(Point::new(x, y));
        }

        let outcome = sampler.trigger();
        assert!(!outcome.is_rejected());
        assert!(sampler.pending().is_empty());
    }

    #[test]
    fn trigger_rejects_straight_path_with_message() {
        let mut sampler = InteractionSampler::new(DetectorConfig {
            rejection_message: "Retry".to_string(),
            ..Default::default()
        });
        for i in 0..10 {
            sampler.observe(Point::new(i as f64, 2.0 * i as f64));
        }

        match sampler.trigger() {
            TriggerOutcome::Reject { result, message } => {
                assert!(result.is_macro);
                assert_eq!(message, "Retry");
            }
            other => panic!("expected rejection, got {other:?}"),
        }
        assert!(sampler.pending().is_empty());
    }

    #[test]
    fn trigger_on_empty_buffer_rejects() {
        let mut sampler = InteractionSampler::default();
        let outcome = sampler.trigger();
        assert!(outcome.is_rejected());
        assert_eq!(outcome.result().stats, None);
    }

    #[test]
    fn verdict_does_not_stick_across_triggers() {
        let mut sampler = InteractionSampler::default();
        assert!(sampler.trigger().is_rejected());

        for &(x, y) in &RIGHT_ANGLE {
            sampler.observe(Point::new(x + 100.0, y));
        }
        assert!(!sampler.trigger().is_rejected());
    }

    #[test]
    fn last_position_survives_reset() {
        let mut sampler = InteractionSampler::default();
        sampler.observe(Point::new(5.0, 5.0));
        sampler.reset();
        assert!(sampler.pending().is_empty());
        assert!(!sampler.observe(Point::new(5.0, 5.0)));
    }

    #[test]
    fn batch_unrelated_action_discards_path() {
        let mut sampler = InteractionSampler::default();
        let mut events = moves(&RIGHT_ANGLE);
        events.push(InteractionEvent::UnrelatedAction);
        events.push(InteractionEvent::Trigger);

        let outcomes = sampler.process(&EventBatch { events });
        assert_eq!(outcomes.len(), 1);
        assert!(outcomes[0].is_rejected());
        assert_eq!(outcomes[0].result().stats, None);
    }

    #[test]
    fn batch_yields_outcome_per_trigger() {
        let mut sampler = InteractionSampler::default();
        let mut events = moves(&RIGHT_ANGLE);
        events.push(InteractionEvent::Trigger);
        events.extend(moves(&[(10.0, 10.0), (11.0, 11.0), (12.0, 12.0), (13.0, 13.0)]));
        events.push(InteractionEvent::Trigger);

        let outcomes = sampler.process(&EventBatch { events });
        assert_eq!(outcomes.len(), 2);
        assert!(!outcomes[0].is_rejected());
        assert!(outcomes[1].is_rejected());
        assert!(sampler.pending().is_empty());
    }
}
