// File: crates/dataplot-core/src/series.rs
// Summary: The single (x, y) data series a chart plots, plus its value range.

use crate::error::ConfigError;

/// How the data polygon is finished after the last point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PolygonClosing {
    /// Start and end at the axes' minimum corner, closing the fill to the origin.
    #[default]
    ToOrigin,
    /// Start at the first data point; the fill closes straight back to it.
    Open,
}

/// Parallel x/y value sequences of equal length.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl Series {
    /// Construct a series, rejecting mismatched lengths and non-finite values.
    pub fn try_new(xs: Vec<f64>, ys: Vec<f64>) -> Result<Self, ConfigError> {
        if xs.len() != ys.len() {
            return Err(ConfigError::SeriesLengthMismatch { xs: xs.len(), ys: ys.len() });
        }
        if let Some(index) = xs.iter().zip(&ys).position(|(x, y)| !x.is_finite() || !y.is_finite()) {
            return Err(ConfigError::NonFiniteData { index });
        }
        Ok(Self { xs, ys })
    }

    pub fn from_points(points: &[(f64, f64)]) -> Result<Self, ConfigError> {
        let (xs, ys): (Vec<f64>, Vec<f64>) = points.iter().copied().unzip();
        Self::try_new(xs, ys)
    }

    pub fn len(&self) -> usize { self.xs.len() }
    pub fn is_empty(&self) -> bool { self.xs.is_empty() }
    pub fn xs(&self) -> &[f64] { &self.xs }
    pub fn ys(&self) -> &[f64] { &self.ys }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }

    /// Data range usable as axis limits: `((x_min, x_max), (y_min, y_max))`.
    ///
    /// Empty series give `[0, 1]`. A single repeated value is widened upward
    /// by 1.0, or by enough to stay representable at large magnitudes.
    pub fn limits(&self) -> ((f64, f64), (f64, f64)) {
        (span(&self.xs), span(&self.ys))
    }
}

fn span(values: &[f64]) -> (f64, f64) {
    let (lo, hi) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    if hi > lo {
        return (lo, hi);
    }
    let pad = 1.0_f64.max(lo.abs() * f64::EPSILON * 1024.0);
    if (lo + pad).is_finite() { (lo, lo + pad) } else { (lo - pad, lo) }
}
