// File: crates/dataplot-core/src/grid.rs
// Summary: Evenly spaced value sampling used by label-size estimation.

/// `steps` values from `start` to `end`, both endpoints included.
///
/// Fewer than two steps degenerate to the endpoints themselves.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Largest finite value, or `0.0` when there is none.
pub(crate) fn fold_max(values: impl IntoIterator<Item = f64>) -> f64 {
    values.into_iter().filter(|v| v.is_finite()).fold(0.0, f64::max)
}
