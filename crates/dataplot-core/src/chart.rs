// File: crates/dataplot-core/src/chart.rs
// Summary: Chart struct, layout resolution between the two axes, and the PNG rendering pipeline.

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::axis::Axis;
use crate::error::{BackendError, ChartResult, ConfigError};
use crate::geometry::{PlotLayout, Rect};
use crate::series::{PolygonClosing, Series};
use crate::surface::{write_atomically, SkiaSurface, Surface};
use crate::text::{SkiaTextMeasure, TextMeasure};
use crate::theme::Theme;
use crate::types::{Insets, Point, HEIGHT, OUTPUT, WIDTH};

/// How much horizontal room the x-axis is given.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum XAxisSizing {
    /// Canvas width minus margins and the y-axis label band, matching the drawn frame.
    #[default]
    ExcludeYAxisFootprint,
    /// Canvas width minus margins only; data runs past the right end of the frame
    /// by the y-axis footprint.
    FullWidth,
}

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub output: PathBuf,
    pub insets: Insets,
    pub theme: Theme,
    pub draw_labels: bool,
    pub closing: PolygonClosing,
    pub x_axis_sizing: XAxisSizing,
}

impl RenderOptions {
    pub fn new(width: i32, height: i32, output: impl Into<PathBuf>) -> Self {
        Self { width, height, output: output.into(), ..Self::default() }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            output: PathBuf::from(OUTPUT),
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
            closing: PolygonClosing::default(),
            x_axis_sizing: XAxisSizing::default(),
        }
    }
}

/// A single filled series on a horizontal and a vertical axis.
pub struct Chart {
    pub opts: RenderOptions,
    x_axis: Axis,
    y_axis: Axis,
    series: Series,
}

impl Chart {
    pub fn new(opts: RenderOptions) -> Self {
        Self {
            opts,
            x_axis: Axis::horizontal(),
            y_axis: Axis::vertical(),
            series: Series::default(),
        }
    }

    pub fn x_axis(&self) -> &Axis { &self.x_axis }
    pub fn y_axis(&self) -> &Axis { &self.y_axis }
    pub fn x_axis_mut(&mut self) -> &mut Axis { &mut self.x_axis }
    pub fn y_axis_mut(&mut self) -> &mut Axis { &mut self.y_axis }
    pub fn series(&self) -> &Series { &self.series }

    /// Replace the plotted series. `xs` and `ys` must be the same length.
    pub fn set_data(&mut self, xs: Vec<f64>, ys: Vec<f64>) -> Result<(), ConfigError> {
        self.series = Series::try_new(xs, ys)?;
        Ok(())
    }

    pub fn set_series(&mut self, series: Series) {
        self.series = series;
    }

    /// Resolve axis limits, sizes and ticks for the current options.
    ///
    /// Order matters: label sizes feed the axis sizes, which feed the tick
    /// counts, which feed the tick positions.
    pub fn layout(&mut self, measure: &dyn TextMeasure) -> ChartResult<PlotLayout> {
        let (width, height) = (self.opts.width, self.opts.height);
        if width <= 0 || height <= 0 {
            return Err(ConfigError::InvalidCanvas { width, height }.into());
        }
        let (w, h) = (f64::from(width), f64::from(height));
        let m = self.opts.insets;

        let ((x_min, x_max), (y_min, y_max)) = self.series.limits();
        self.x_axis.fit_limit(x_min, x_max)?;
        self.y_axis.fit_limit(y_min, y_max)?;

        self.x_axis.calculate_label_size(measure)?;
        self.y_axis.calculate_label_size(measure)?;

        let y_size = h - m.vsum() - self.x_axis.horizontal_height();
        let x_size = match self.opts.x_axis_sizing {
            XAxisSizing::ExcludeYAxisFootprint => w - m.hsum() - self.y_axis.vertical_width(),
            XAxisSizing::FullWidth => w - m.hsum(),
        };
        if x_size < 0.0 || y_size < 0.0 {
            warn!(x_size, y_size, "margins and labels exceed the canvas; plot area clamped");
        }
        self.y_axis.set_size(y_size.max(0.0))?;
        self.x_axis.set_size(x_size.max(0.0))?;

        self.x_axis.prerender_ticks(measure)?;
        self.y_axis.prerender_ticks(measure)?;

        let plot = Rect::from_ltwh_clamped(
            m.left + self.y_axis.vertical_width(),
            m.top,
            x_size,
            y_size,
        );
        let corner_y = h - m.bottom - self.x_axis.horizontal_height();
        let frame = [
            Point::new(plot.left, m.top),
            Point::new(plot.left, corner_y),
            Point::new(w - m.right, corner_y),
        ];
        let polygon = self.polygon(&plot);
        debug!(
            x_limit = ?self.x_axis.limit(),
            y_limit = ?self.y_axis.limit(),
            ?plot,
            vertices = polygon.len(),
            "layout resolved"
        );
        Ok(PlotLayout { plot, frame, polygon })
    }

    fn project(&self, plot: &Rect, x: f64, y: f64) -> Point {
        Point::new(
            plot.left + self.x_axis.convert_to_scale(x),
            plot.top + self.y_axis.convert_to_scale(y),
        )
    }

    fn polygon(&self, plot: &Rect) -> Vec<Point> {
        let data = self.series.points().map(|(x, y)| self.project(plot, x, y));
        match self.opts.closing {
            PolygonClosing::ToOrigin => {
                let origin = self.project(plot, self.x_axis.limit_min(), self.y_axis.limit_min());
                std::iter::once(origin).chain(data).chain(std::iter::once(origin)).collect()
            }
            PolygonClosing::Open => data.collect(),
        }
    }

    /// Draw a resolved layout: axis frame, tick labels, then the data polygon.
    pub fn draw(&self, surface: &mut dyn Surface, layout: &PlotLayout) -> Result<(), BackendError> {
        let theme = &self.opts.theme;

        surface.set_color(theme.axis_line);
        surface.set_line_width(theme.axis_line_width);
        let [top, corner, end] = layout.frame;
        surface.move_to(top.x, top.y);
        surface.line_to(corner.x, corner.y);
        surface.line_to(end.x, end.y);
        surface.stroke();

        if self.opts.draw_labels {
            surface.set_color(theme.axis_label);
            self.draw_y_labels(surface)?;
            self.draw_x_labels(surface, layout.plot.left)?;
            surface.fill();
        }

        if let Some((first, rest)) = layout.polygon.split_first() {
            surface.set_color(theme.data_fill);
            surface.move_to(first.x, first.y);
            for p in rest {
                surface.line_to(p.x, p.y);
            }
            surface.fill_preserve();
            surface.set_color(theme.data_stroke);
            surface.set_line_width(theme.data_stroke_width);
            surface.stroke();
        }
        Ok(())
    }

    /// Right-aligned against the axis line, vertically centred on the tick.
    fn draw_y_labels(&self, surface: &mut dyn Surface) -> Result<(), BackendError> {
        let axis = &self.y_axis;
        let font = axis.style.font();
        let right = self.opts.insets.left + axis.style.padding + axis.label_max_width();
        for tick in axis.ticks() {
            let x = right - tick.extents.width;
            let y = self.opts.insets.top + tick.position + tick.extents.height / 2.0;
            surface.text_path(x, y, &tick.label, &font)?;
        }
        Ok(())
    }

    /// Centred on the tick, baseline one padding above the bottom margin.
    fn draw_x_labels(&self, surface: &mut dyn Surface, plot_left: f64) -> Result<(), BackendError> {
        let axis = &self.x_axis;
        let font = axis.style.font();
        let baseline = f64::from(self.opts.height) - self.opts.insets.bottom - axis.style.padding;
        for tick in axis.ticks() {
            let x = plot_left + tick.position - tick.extents.width / 2.0;
            surface.text_path(x, baseline, &tick.label, &font)?;
        }
        Ok(())
    }

    /// Lay out and draw onto any surface, measuring text with `measure`.
    pub fn render_onto(
        &mut self,
        surface: &mut dyn Surface,
        measure: &dyn TextMeasure,
    ) -> ChartResult<PlotLayout> {
        let layout = self.layout(measure)?;
        self.draw(surface, &layout)?;
        Ok(layout)
    }

    fn render_png(&mut self) -> ChartResult<(PlotLayout, Vec<u8>)> {
        let measure = SkiaTextMeasure::new();
        let mut surface = SkiaSurface::new(self.opts.width, self.opts.height, self.opts.theme.background)?;
        let layout = self.render_onto(&mut surface, &measure)?;
        let bytes = surface.encode_png()?;
        Ok((layout, bytes))
    }

    /// Render to an in-memory PNG.
    pub fn render_to_png_bytes(&mut self) -> ChartResult<Vec<u8>> {
        Ok(self.render_png()?.1)
    }

    /// Render the chart and write it to `opts.output`.
    ///
    /// The file is only replaced once the whole image has been encoded.
    pub fn render(&mut self) -> ChartResult<PlotLayout> {
        let (layout, bytes) = self.render_png()?;
        write_atomically(&self.opts.output, &bytes)?;
        Ok(layout)
    }
}

impl Default for Chart {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}
