// File: crates/dataplot-core/src/text.rs
// Summary: Text-metrics capability used by axis layout, with Skia and heuristic providers.

use std::cell::RefCell;
use std::collections::HashMap;

use skia_safe as skia;
use tracing::debug;

use crate::error::BackendError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontSlant {
    #[default]
    Normal,
    Italic,
    Oblique,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Everything the backend needs to pick and size a face.
#[derive(Clone, Debug, PartialEq)]
pub struct FontSpec {
    pub family: String,
    pub slant: FontSlant,
    pub weight: FontWeight,
    pub size: f64,
}

/// Rendered extents of a string, in canvas pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextExtents {
    pub width: f64,
    pub height: f64,
}

/// Measurement capability injected into every layout pass.
///
/// Axis layout only ever asks "how big is this string in this font"; keeping
/// that behind a trait lets layout run without a rasterizer.
pub trait TextMeasure {
    fn measure(&self, font: &FontSpec, text: &str) -> Result<TextExtents, BackendError>;
}

/// Font-free estimate: ~0.6em per glyph, 1em tall.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasure;

impl TextMeasure for HeuristicTextMeasure {
    fn measure(&self, font: &FontSpec, text: &str) -> Result<TextExtents, BackendError> {
        Ok(TextExtents {
            width: 0.6 * font.size * text.chars().count() as f64,
            height: font.size,
        })
    }
}

type FaceKey = (String, FontWeight, FontSlant);

/// Measures with real typefaces resolved through the system font manager.
pub struct SkiaTextMeasure {
    fonts: skia::FontMgr,
    faces: RefCell<HashMap<FaceKey, Option<skia::Typeface>>>,
}

impl SkiaTextMeasure {
    pub fn new() -> Self {
        Self { fonts: skia::FontMgr::default(), faces: RefCell::new(HashMap::new()) }
    }

    fn skia_style(spec: &FontSpec) -> skia::FontStyle {
        use skia::font_style::{Slant, Weight, Width};
        let weight = match spec.weight {
            FontWeight::Normal => Weight::NORMAL,
            FontWeight::Bold => Weight::BOLD,
        };
        let slant = match spec.slant {
            FontSlant::Normal => Slant::Upright,
            FontSlant::Italic => Slant::Italic,
            FontSlant::Oblique => Slant::Oblique,
        };
        skia::FontStyle::new(weight, Width::NORMAL, slant)
    }

    fn typeface(&self, spec: &FontSpec) -> Option<skia::Typeface> {
        let key = (spec.family.clone(), spec.weight, spec.slant);
        if let Some(hit) = self.faces.borrow().get(&key) {
            return hit.clone();
        }
        let style = Self::skia_style(spec);
        let mut face = self.fonts.match_family_style(&spec.family, style);
        if face.is_none() && is_generic_family(&spec.family) {
            face = self.fonts.legacy_make_typeface(None::<&str>, style);
        }
        debug!(family = %spec.family, found = face.is_some(), "resolved typeface");
        self.faces.borrow_mut().insert(key, face.clone());
        face
    }

    /// Build a sized Skia font for `spec`.
    ///
    /// Generic families ("Sans", "serif", ...) fall back to the default face
    /// when the font manager has nothing better; named families must exist.
    pub fn font(&self, spec: &FontSpec) -> Result<skia::Font, BackendError> {
        match self.typeface(spec) {
            Some(face) => Ok(skia::Font::from_typeface(face, spec.size as f32)),
            None if is_generic_family(&spec.family) => {
                let mut font = skia::Font::default();
                font.set_size(spec.size as f32);
                Ok(font)
            }
            None => Err(BackendError::FontUnavailable { family: spec.family.clone() }),
        }
    }
}

impl Default for SkiaTextMeasure {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasure for SkiaTextMeasure {
    fn measure(&self, font: &FontSpec, text: &str) -> Result<TextExtents, BackendError> {
        let font = self.font(font)?;
        let (_advance, bounds) = font.measure_str(text, None);
        Ok(TextExtents { width: bounds.width() as f64, height: bounds.height() as f64 })
    }
}

fn is_generic_family(family: &str) -> bool {
    ["sans", "sans-serif", "serif", "monospace", "mono"]
        .iter()
        .any(|g| family.eq_ignore_ascii_case(g))
}
