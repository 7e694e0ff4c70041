// File: crates/dataplot-core/src/axis.rs
// Summary: Axis model: value range, pixel length, label style and derived tick geometry.

use tracing::{debug, warn};

use crate::error::{BackendError, ConfigError};
use crate::grid::{fold_max, linspace};
use crate::text::{FontSlant, FontSpec, FontWeight, TextExtents, TextMeasure};

/// Number of values sampled across the limit when estimating label size.
pub const LABEL_SAMPLES: usize = 11;
/// Fewest ticks an axis will ever carry (both ends of its range).
pub const MIN_TICKS: usize = 2;
/// Most ticks an axis will carry, however long it is.
pub const MAX_TICKS: usize = 1000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Tick-label appearance; also drives how much room the axis reserves.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelStyle {
    pub font_family: String,
    pub font_size: f64,
    pub padding: f64,
    pub slant: FontSlant,
    pub weight: FontWeight,
}

impl LabelStyle {
    pub fn font(&self) -> FontSpec {
        FontSpec {
            family: self.font_family.clone(),
            slant: self.slant,
            weight: self.weight,
            size: self.font_size,
        }
    }
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            font_family: "Sans".to_string(),
            font_size: 10.0,
            padding: 4.0,
            slant: FontSlant::Normal,
            weight: FontWeight::Bold,
        }
    }
}

/// One labeled reference point. `position` is the pixel offset along the axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub label: String,
    pub extents: TextExtents,
}

/// Format a tick or sample value the way every label on an axis is printed.
pub fn format_label(value: f64) -> String {
    format!("{value:.1}")
}

/// One scale of a chart.
///
/// Lifecycle: configure limits and style, then per layout pass call
/// [`Axis::calculate_label_size`], [`Axis::set_size`] and
/// [`Axis::prerender_ticks`] in that order before reading tick geometry.
#[derive(Clone, Debug)]
pub struct Axis {
    orientation: Orientation,
    limit_min: f64,
    limit_max: f64,
    limit_locked: bool,
    size: f64,
    pub style: LabelStyle,
    label_max_width: f64,
    label_max_height: f64,
    tick_count: usize,
    tick_value_spacing: f64,
    ticks: Vec<Tick>,
}

impl Axis {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            limit_min: 0.0,
            limit_max: 1.0,
            limit_locked: false,
            size: 0.0,
            style: LabelStyle::default(),
            label_max_width: 0.0,
            label_max_height: 0.0,
            tick_count: 0,
            tick_value_spacing: 0.0,
            ticks: Vec::new(),
        }
    }

    pub fn horizontal() -> Self {
        Self::new(Orientation::Horizontal)
    }

    pub fn vertical() -> Self {
        Self::new(Orientation::Vertical)
    }

    pub fn orientation(&self) -> Orientation { self.orientation }
    pub fn limit(&self) -> (f64, f64) { (self.limit_min, self.limit_max) }
    pub fn limit_min(&self) -> f64 { self.limit_min }
    pub fn limit_max(&self) -> f64 { self.limit_max }
    pub fn size(&self) -> f64 { self.size }
    pub fn label_max_width(&self) -> f64 { self.label_max_width }
    pub fn label_max_height(&self) -> f64 { self.label_max_height }
    pub fn tick_count(&self) -> usize { self.tick_count }
    pub fn tick_value_spacing(&self) -> f64 { self.tick_value_spacing }
    pub fn ticks(&self) -> &[Tick] { &self.ticks }

    /// Store the value range. Nothing derived is recomputed.
    ///
    /// An explicit limit is kept across renders; the owning chart no longer
    /// fits this axis to its data.
    pub fn set_limit(&mut self, min: f64, max: f64) -> Result<(), ConfigError> {
        self.store_limit(min, max)?;
        self.limit_locked = true;
        Ok(())
    }

    /// Forget an explicit limit so the chart fits this axis to its data again.
    pub fn clear_limit(&mut self) {
        self.limit_locked = false;
    }

    pub fn has_explicit_limit(&self) -> bool {
        self.limit_locked
    }

    pub(crate) fn fit_limit(&mut self, min: f64, max: f64) -> Result<(), ConfigError> {
        if self.limit_locked {
            return Ok(());
        }
        self.store_limit(min, max)
    }

    fn store_limit(&mut self, min: f64, max: f64) -> Result<(), ConfigError> {
        // the spread itself must be finite, not only its ends
        if !min.is_finite() || !max.is_finite() || max <= min || !(max - min).is_finite() {
            return Err(ConfigError::InvalidLimit { min, max });
        }
        self.limit_min = min;
        self.limit_max = max;
        Ok(())
    }

    pub fn spread(&self) -> f64 {
        self.limit_max - self.limit_min
    }

    /// Assign the pixel length and derive tick count and value spacing.
    ///
    /// Previously generated ticks are discarded; call `prerender_ticks` again.
    pub fn set_size(&mut self, size: f64) -> Result<(), ConfigError> {
        if !size.is_finite() {
            return Err(ConfigError::InvalidSize(size));
        }
        if size < 0.0 {
            warn!(orientation = ?self.orientation, size, "negative axis size clamped to zero");
        }
        self.size = size.max(0.0);

        let divisor = match self.orientation {
            Orientation::Vertical => {
                2.0 * (2.0 * self.style.padding + self.label_max_height)
            }
            Orientation::Horizontal => 5.0 * self.style.font_size,
        };
        if !(divisor.is_finite() && divisor > 0.0) {
            return Err(ConfigError::DegenerateTickSpacing { orientation: self.orientation });
        }

        let raw = (self.size / divisor).floor();
        if raw < MIN_TICKS as f64 {
            warn!(orientation = ?self.orientation, size = self.size, raw, "tick count clamped to minimum");
        } else if raw > MAX_TICKS as f64 {
            warn!(orientation = ?self.orientation, size = self.size, raw, "tick count clamped to maximum");
        }
        self.tick_count = raw.clamp(MIN_TICKS as f64, MAX_TICKS as f64) as usize;
        self.tick_value_spacing = self.spread() / (self.tick_count - 1) as f64;
        self.ticks.clear();
        debug!(
            orientation = ?self.orientation,
            size = self.size,
            ticks = self.tick_count,
            spacing = self.tick_value_spacing,
            "axis sized"
        );
        Ok(())
    }

    /// Map a value to a pixel offset along the axis.
    ///
    /// Vertical axes grow upward in value but downward in pixels. Values
    /// outside the limit extrapolate linearly past `[0, size]`.
    pub fn convert_to_scale(&self, value: f64) -> f64 {
        let ratio = (value - self.limit_min) / self.spread();
        match self.orientation {
            Orientation::Horizontal => self.size * ratio,
            Orientation::Vertical => self.size * (1.0 - ratio),
        }
    }

    /// Estimate the largest label footprint from evenly spaced samples.
    pub fn calculate_label_size(&mut self, measure: &dyn TextMeasure) -> Result<(), BackendError> {
        let font = self.style.font();
        let extents = linspace(self.limit_min, self.limit_max, LABEL_SAMPLES)
            .into_iter()
            .map(|v| measure.measure(&font, &format_label(v)))
            .collect::<Result<Vec<_>, _>>()?;

        self.label_max_width = fold_max(extents.iter().map(|e| e.width));
        self.label_max_height = fold_max(extents.iter().map(|e| e.height));
        debug!(
            orientation = ?self.orientation,
            width = self.label_max_width,
            height = self.label_max_height,
            "label size sampled"
        );
        Ok(())
    }

    /// Regenerate the full tick set from the current limits and size.
    pub fn prerender_ticks(&mut self, measure: &dyn TextMeasure) -> Result<(), BackendError> {
        let font = self.style.font();
        let mut ticks = Vec::with_capacity(self.tick_count);
        for i in 0..self.tick_count {
            let value = self.limit_min + i as f64 * self.tick_value_spacing;
            let label = format_label(value);
            let extents = measure.measure(&font, &label)?;
            ticks.push(Tick { position: self.convert_to_scale(value), label, extents });
        }
        self.ticks = ticks;
        Ok(())
    }

    /// Horizontal room a vertical axis's labels consume.
    pub fn vertical_width(&self) -> f64 {
        self.label_max_width + 2.0 * self.style.padding
    }

    /// Vertical room a horizontal axis's labels consume.
    pub fn horizontal_height(&self) -> f64 {
        self.label_max_height + 2.0 * self.style.padding
    }
}
