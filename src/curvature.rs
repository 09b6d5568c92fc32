// Point-wise planar curvature of a sampled pointer path.
// κ = |x'·y'' − y'·x''| / (x'² + y'²)^1.5, undefined where the velocity is zero.
// Evaluated as |u × (a / s)| / s with s = |v| and u = v / s, which is the same
// quantity without squaring small speeds.

use crate::derivative::derivative;
use crate::types::Point;

/// Fewest samples for which a second derivative carries any information.
pub const MIN_PATH_POINTS: usize = 3;

/// Curvature at a single sample, or `None` when the sample is degenerate.
///
/// A zero velocity vector makes curvature undefined; such samples are
/// excluded rather than reported as zero. `NaN` results (only reachable from
/// non-finite coordinates) are excluded the same way. `+inf` is kept: it is an
/// unbounded bend, not a missing sample.
pub fn point_curvature(dx: f64, dy: f64, ddx: f64, ddy: f64) -> Option<f64> {
    if dx == 0.0 && dy == 0.0 {
        return None;
    }

    // Normalize by speed before multiplying so tiny coordinates don't underflow
    // (x'² + y'²)^1.5 to zero.
    let speed = dx.hypot(dy);
    let (ux, uy) = (dx / speed, dy / speed);
    let (ax, ay) = (ddx / speed, ddy / speed);
    let kappa = (ux * ay - uy * ax).abs() / speed;
    (!kappa.is_nan()).then_some(kappa)
}

/// Curvature at every sample of `path`, `None` where it is undefined.
///
/// Paths shorter than [`MIN_PATH_POINTS`] have no defined curvature anywhere.
pub fn curvature_profile(path: &[Point]) -> Vec<Option<f64>> {
    if path.len() < MIN_PATH_POINTS {
        return vec![None; path.len()];
    }

    let xs: Vec<f64> = path.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = path.iter().map(|p| p.y).collect();

    let dx = derivative(&xs);
    let dy = derivative(&ys);
    let ddx = derivative(&dx);
    let ddy = derivative(&dy);

    (0..path.len())
        .map(|i| point_curvature(dx[i], dy[i], ddx[i], ddy[i]))
        .collect()
}

/// Defined curvature values of `path` in sample order, degenerate samples dropped.
pub fn curvature_series(path: &[Point]) -> Vec<f64> {
    curvature_profile(path).into_iter().flatten().collect()
}
