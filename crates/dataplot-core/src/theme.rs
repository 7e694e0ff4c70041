// File: crates/dataplot-core/src/theme.rs
// Summary: Colors and stroke widths for the axis frame, tick labels and data area.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub axis_line: skia::Color,
    pub axis_line_width: f64,
    pub axis_label: skia::Color,
    pub data_fill: skia::Color,
    pub data_stroke: skia::Color,
    pub data_stroke_width: f64,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            axis_line: skia::Color::from_argb(255, 51, 51, 51),
            axis_line_width: 2.0,
            axis_label: skia::Color::from_argb(255, 0, 0, 0),
            data_fill: skia::Color::from_argb(255, 102, 153, 255),
            data_stroke: skia::Color::from_argb(255, 51, 102, 179),
            data_stroke_width: 2.0,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_line_width: 2.0,
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            data_fill: skia::Color::from_argb(96, 64, 160, 255),
            data_stroke: skia::Color::from_argb(255, 64, 160, 255),
            data_stroke_width: 2.0,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_default()
}
