// File: crates/dataplot-core/src/lib.rs
// Summary: Core library entry point; exports the axis layout engine and chart rendering API.

pub mod axis;
pub mod chart;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod series;
pub mod surface;
pub mod text;
pub mod theme;
pub mod types;

pub use axis::{format_label, Axis, LabelStyle, Orientation, Tick};
pub use chart::{Chart, RenderOptions, XAxisSizing};
pub use error::{BackendError, ChartError, ChartResult, ConfigError};
pub use geometry::{PlotLayout, Rect};
pub use series::{PolygonClosing, Series};
pub use surface::{write_atomically, SkiaSurface, Surface};
pub use text::{FontSlant, FontSpec, FontWeight, HeuristicTextMeasure, SkiaTextMeasure, TextExtents, TextMeasure};
pub use theme::Theme;
pub use types::{Insets, Point};

pub use skia_safe::Color;
