// Finite-difference derivative estimation.
// Forward difference at the first sample, backward at the last, central in between.

/// Estimate the derivative of a uniformly sampled series.
///
/// The output has the same length as the input. Series shorter than two
/// samples have no defined difference and yield zeros.
pub fn derivative(series: &[f64]) -> Vec<f64> {
    let n = series.len();
    let mut d = vec![0.0; n];
    if n < 2 {
        return d;
    }

    for i in 1..n - 1 {
        d[i] = (series[i + 1] - series[i - 1]) / 2.0;
    }
    d[0] = series[1] - series[0];
    d[n - 1] = series[n - 1] - series[n - 2];

    d
}
