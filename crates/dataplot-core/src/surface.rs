// File: crates/dataplot-core/src/surface.rs
// Summary: Drawing-surface capability and its Skia CPU raster implementation with PNG output.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use skia_safe as skia;
use tracing::info;

use crate::error::BackendError;
use crate::text::{FontSpec, SkiaTextMeasure};

/// Path-based drawing primitives the chart renders through.
///
/// Like a cairo context: `move_to`/`line_to`/`text_path` extend the current
/// path, `stroke` and `fill` paint it and start a new one, `fill_preserve`
/// paints it and keeps it for a following `stroke`.
pub trait Surface {
    fn set_color(&mut self, color: skia::Color);
    fn set_line_width(&mut self, width: f64);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn stroke(&mut self);
    fn fill_preserve(&mut self);
    fn fill(&mut self);
    /// Add `text` to the current path with its baseline origin at `(x, y)`.
    fn text_path(&mut self, x: f64, y: f64, text: &str, font: &FontSpec) -> Result<(), BackendError>;
}

struct PendingText {
    text: String,
    origin: skia::Point,
    font: skia::Font,
}

/// CPU raster surface backed by Skia.
pub struct SkiaSurface {
    surface: skia::Surface,
    fonts: SkiaTextMeasure,
    color: skia::Color,
    line_width: f32,
    path: skia::PathBuilder,
    texts: Vec<PendingText>,
}

impl SkiaSurface {
    /// Create a `width` x `height` raster cleared to `background`.
    pub fn new(width: i32, height: i32, background: skia::Color) -> Result<Self, BackendError> {
        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or(BackendError::SurfaceCreation { width, height })?;
        surface.canvas().clear(background);
        Ok(Self {
            surface,
            fonts: SkiaTextMeasure::new(),
            color: skia::Color::BLACK,
            line_width: 1.0,
            path: skia::PathBuilder::new(),
            texts: Vec::new(),
        })
    }

    fn paint(&self, style: skia::paint::Style) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_color(self.color);
        paint.set_style(style);
        paint.set_stroke_width(self.line_width);
        paint
    }

    fn paint_current(&mut self, style: skia::paint::Style) {
        let paint = self.paint(style);
        let canvas = self.surface.canvas();
        canvas.draw_path(&self.path.snapshot(), &paint);
        for t in &self.texts {
            canvas.draw_str(&t.text, t.origin, &t.font, &paint);
        }
    }

    fn clear_path(&mut self) {
        self.path.reset();
        self.texts.clear();
    }

    /// Snapshot the surface and encode it as PNG bytes.
    pub fn encode_png(&mut self) -> Result<Vec<u8>, BackendError> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(BackendError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }
}

impl Surface for SkiaSurface {
    fn set_color(&mut self, color: skia::Color) {
        self.color = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width as f32;
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.path.move_to((x as f32, y as f32));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.path.line_to((x as f32, y as f32));
    }

    fn stroke(&mut self) {
        self.paint_current(skia::paint::Style::Stroke);
        self.clear_path();
    }

    fn fill_preserve(&mut self) {
        self.paint_current(skia::paint::Style::Fill);
    }

    fn fill(&mut self) {
        self.paint_current(skia::paint::Style::Fill);
        self.clear_path();
    }

    fn text_path(&mut self, x: f64, y: f64, text: &str, font: &FontSpec) -> Result<(), BackendError> {
        let font = self.fonts.font(font)?;
        self.texts.push(PendingText {
            text: text.to_string(),
            origin: skia::Point::new(x as f32, y as f32),
            font,
        });
        Ok(())
    }
}

/// Write `bytes` to `path` so readers never observe a partial file.
///
/// Data goes to a hidden sibling first and is renamed into place. Each call
/// gets its own sibling, so concurrent writers to one path never share it.
pub fn write_atomically(path: &Path, bytes: &[u8]) -> Result<(), BackendError> {
    let io_err = |source| BackendError::Io { path: path.to_path_buf(), source };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    let tmp = temp_sibling(path);
    if let Err(e) = std::fs::write(&tmp, bytes).and_then(|_| std::fs::rename(&tmp, path)) {
        let _ = std::fs::remove_file(&tmp);
        return Err(io_err(e));
    }
    info!(path = %path.display(), bytes = bytes.len(), "wrote image");
    Ok(())
}

fn temp_sibling(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    static SEQ: AtomicUsize = AtomicUsize::new(0);
    let seq = SEQ.fetch_add(1, Ordering::Relaxed);
    path.with_file_name(format!(".{name}.{}.{seq}.tmp", std::process::id()))
}
