// File: crates/dataplot-core/tests/chart_layout.rs
// Purpose: Chart layout resolution and draw order, recorded without a rasterizer.

use approx::assert_abs_diff_eq;
use dataplot_core::{
    BackendError, Chart, ChartError, Color, ConfigError, FontSpec, HeuristicTextMeasure, Insets,
    Point, PolygonClosing, RenderOptions, Series, Surface, XAxisSizing,
};

#[derive(Clone, Debug, PartialEq)]
enum Op {
    Color(Color),
    LineWidth(f64),
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Stroke,
    FillPreserve,
    Fill,
    Text { x: f64, y: f64, text: String },
}

#[derive(Default)]
struct Recorder {
    ops: Vec<Op>,
}

impl Recorder {
    fn texts(&self) -> Vec<(f64, f64, String)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text { x, y, text } => Some((*x, *y, text.clone())),
                _ => None,
            })
            .collect()
    }
}

impl Surface for Recorder {
    fn set_color(&mut self, color: Color) { self.ops.push(Op::Color(color)); }
    fn set_line_width(&mut self, width: f64) { self.ops.push(Op::LineWidth(width)); }
    fn move_to(&mut self, x: f64, y: f64) { self.ops.push(Op::MoveTo(x, y)); }
    fn line_to(&mut self, x: f64, y: f64) { self.ops.push(Op::LineTo(x, y)); }
    fn stroke(&mut self) { self.ops.push(Op::Stroke); }
    fn fill_preserve(&mut self) { self.ops.push(Op::FillPreserve); }
    fn fill(&mut self) { self.ops.push(Op::Fill); }
    fn text_path(&mut self, x: f64, y: f64, text: &str, _font: &FontSpec) -> Result<(), BackendError> {
        self.ops.push(Op::Text { x, y, text: text.to_string() });
        Ok(())
    }
}

fn sample_chart(width: i32, height: i32) -> Chart {
    let mut chart = Chart::new(RenderOptions::new(width, height, "target/test_out/unused.png"));
    let xs = (0..=10).map(f64::from).collect::<Vec<_>>();
    let ys = vec![1.0, 3.0, 2.0, 5.0, 4.0, 6.0, 5.5, 3.0, 2.5, 1.5, 1.0];
    chart.set_data(xs, ys).expect("equal lengths");
    chart
}

#[test]
fn polygon_closes_on_the_limit_origin() {
    let mut chart = sample_chart(800, 200);
    let mut rec = Recorder::default();
    let layout = chart.render_onto(&mut rec, &HeuristicTextMeasure).expect("render");

    let x = chart.x_axis();
    let y = chart.y_axis();
    let origin = Point::new(
        layout.plot.left + x.convert_to_scale(x.limit_min()),
        layout.plot.top + y.convert_to_scale(y.limit_min()),
    );
    assert_eq!(layout.polygon.len(), 13);
    assert_eq!(layout.polygon.first(), Some(&origin));
    assert_eq!(layout.polygon.last(), Some(&origin));

    // the data path is the last move_to and runs up to fill_preserve
    let start = rec.ops.iter().rposition(|op| matches!(op, Op::MoveTo(..))).unwrap();
    assert_eq!(rec.ops[start], Op::MoveTo(origin.x, origin.y));
    let fill_at = rec.ops.iter().position(|op| *op == Op::FillPreserve).unwrap();
    assert_eq!(rec.ops[fill_at - 1], Op::LineTo(origin.x, origin.y));
    assert_eq!(rec.ops.last(), Some(&Op::Stroke));
}

#[test]
fn plot_area_sits_inside_margins_and_footprints() {
    let mut chart = sample_chart(800, 200);
    let layout = chart.layout(&HeuristicTextMeasure).expect("layout");
    let m = chart.opts.insets;
    let x = chart.x_axis();
    let y = chart.y_axis();

    assert_eq!(layout.plot.left, m.left + y.vertical_width());
    assert_eq!(layout.plot.top, m.top);
    assert_abs_diff_eq!(y.size(), 200.0 - m.vsum() - x.horizontal_height(), epsilon = 1e-9);
    assert_abs_diff_eq!(x.size(), 800.0 - m.hsum() - y.vertical_width(), epsilon = 1e-9);
    assert_eq!(layout.frame[0], Point::new(layout.plot.left, m.top));
    assert_abs_diff_eq!(layout.frame[1].y, layout.plot.bottom(), epsilon = 1e-9);
    assert_abs_diff_eq!(layout.frame[2].x, layout.plot.right(), epsilon = 1e-9);
}

#[test]
fn full_width_sizing_ignores_the_y_axis_footprint() {
    let mut chart = sample_chart(800, 200);
    chart.opts.x_axis_sizing = XAxisSizing::FullWidth;
    let layout = chart.layout(&HeuristicTextMeasure).expect("layout");
    let m = chart.opts.insets;

    assert_eq!(chart.x_axis().size(), 800.0 - m.hsum());
    // frame still ends at the right margin, so data overruns it
    assert!(layout.plot.right() > layout.frame[2].x);
}

#[test]
fn axes_fit_the_data_unless_limited() {
    let mut chart = sample_chart(640, 280);
    chart.layout(&HeuristicTextMeasure).unwrap();
    assert_eq!(chart.x_axis().limit(), (0.0, 10.0));
    assert_eq!(chart.y_axis().limit(), (1.0, 6.0));

    chart.x_axis_mut().set_limit(-5.0, 20.0).unwrap();
    chart.layout(&HeuristicTextMeasure).unwrap();
    assert_eq!(chart.x_axis().limit(), (-5.0, 20.0));
    assert_eq!(chart.y_axis().limit(), (1.0, 6.0));

    chart.x_axis_mut().clear_limit();
    chart.layout(&HeuristicTextMeasure).unwrap();
    assert_eq!(chart.x_axis().limit(), (0.0, 10.0));
}

#[test]
fn empty_series_degenerates_to_the_origin() {
    let mut chart = Chart::new(RenderOptions::new(400, 300, "target/test_out/unused.png"));
    let mut rec = Recorder::default();
    let layout = chart.render_onto(&mut rec, &HeuristicTextMeasure).expect("render");

    assert_eq!(chart.x_axis().limit(), (0.0, 1.0));
    assert_eq!(layout.polygon.len(), 2);
    assert_eq!(layout.polygon[0], layout.polygon[1]);
    assert!(rec.ops.contains(&Op::FillPreserve));
}

#[test]
fn open_closing_starts_at_the_first_point() {
    let mut chart = sample_chart(800, 200);
    chart.opts.closing = PolygonClosing::Open;
    let layout = chart.layout(&HeuristicTextMeasure).unwrap();

    assert_eq!(layout.polygon.len(), 11);
    let first = layout.polygon[0];
    assert_eq!(first.x, layout.plot.left + chart.x_axis().convert_to_scale(0.0));
    assert_eq!(first.y, layout.plot.top + chart.y_axis().convert_to_scale(1.0));
}

#[test]
fn oversized_margins_clamp_instead_of_failing() {
    let mut chart = sample_chart(60, 40);
    chart.opts.insets = Insets::uniform(50.0);
    let layout = chart.layout(&HeuristicTextMeasure).expect("clamped layout");

    assert_eq!(layout.plot.width, 0.0);
    assert_eq!(layout.plot.height, 0.0);
    assert_eq!(chart.x_axis().size(), 0.0);
    assert_eq!(chart.y_axis().tick_count(), 2);
}

#[test]
fn mismatched_series_is_rejected() {
    let mut chart = sample_chart(800, 200);
    let err = chart.set_data(vec![0.0, 1.0, 2.0], vec![1.0]).unwrap_err();
    assert_eq!(err, ConfigError::SeriesLengthMismatch { xs: 3, ys: 1 });
    // previous data survives
    assert_eq!(chart.series().len(), 11);

    let err = chart.set_data(vec![0.0, f64::NAN], vec![1.0, 2.0]).unwrap_err();
    assert_eq!(err, ConfigError::NonFiniteData { index: 1 });
}

#[test]
fn data_spanning_the_whole_f64_range_is_rejected() {
    let mut chart = Chart::new(RenderOptions::new(400, 300, "target/test_out/unused.png"));
    chart.set_data(vec![-1e308, 1e308], vec![0.0, 1.0]).expect("finite data");
    let err = chart.layout(&HeuristicTextMeasure).unwrap_err();
    assert!(matches!(
        err,
        ChartError::Config(ConfigError::InvalidLimit { min, max }) if min == -1e308 && max == 1e308
    ));

    // an explicit limit replaces the unusable data range
    chart.x_axis_mut().set_limit(-1.0, 1.0).unwrap();
    chart.layout(&HeuristicTextMeasure).expect("explicit limit");
    assert!(chart.x_axis().ticks().iter().all(|t| t.position.is_finite()));
}

#[test]
fn huge_canvas_keeps_tick_count_bounded() {
    let mut chart = sample_chart(i32::MAX, 200);
    chart.layout(&HeuristicTextMeasure).expect("layout");
    assert_eq!(chart.x_axis().tick_count(), dataplot_core::axis::MAX_TICKS);
    assert_eq!(chart.x_axis().ticks().len(), dataplot_core::axis::MAX_TICKS);
}

#[test]
fn data_limits_keep_small_ranges_and_widen_flat_ones() {
    let tiny = Series::try_new(vec![0.0, 5e-10], vec![2.0, 2.0]).unwrap();
    let ((x_lo, x_hi), (y_lo, y_hi)) = tiny.limits();
    assert_eq!((x_lo, x_hi), (0.0, 5e-10));
    assert_eq!((y_lo, y_hi), (2.0, 3.0));

    let flat = Series::try_new(vec![1e17, 1e17], vec![-f64::MAX, -f64::MAX]).unwrap();
    let ((x_lo, x_hi), (y_lo, y_hi)) = flat.limits();
    assert_eq!(x_lo, 1e17);
    assert!(x_hi > x_lo);
    assert!(y_hi > y_lo && y_lo.is_finite());

    let mut chart = Chart::new(RenderOptions::new(400, 300, "target/test_out/unused.png"));
    chart.set_data(vec![1e17, 1e17], vec![5.0, 5.0]).unwrap();
    chart.layout(&HeuristicTextMeasure).expect("flat data at large magnitude");
    assert!(chart.x_axis().tick_value_spacing() > 0.0);
}

#[test]
fn bad_canvas_and_label_style_surface_as_config_errors() {
    let mut chart = sample_chart(0, 200);
    let err = chart.layout(&HeuristicTextMeasure).unwrap_err();
    assert!(err.is_config());

    let mut chart = sample_chart(800, 200);
    chart.x_axis_mut().style.font_size = 0.0;
    let err = chart.layout(&HeuristicTextMeasure).unwrap_err();
    assert!(matches!(err, ChartError::Config(ConfigError::DegenerateTickSpacing { .. })));
}

#[test]
fn tick_labels_align_to_the_axis() {
    let mut chart = sample_chart(800, 200);
    let mut rec = Recorder::default();
    let layout = chart.render_onto(&mut rec, &HeuristicTextMeasure).unwrap();

    let texts = rec.texts();
    let y = chart.y_axis();
    let x = chart.x_axis();
    assert_eq!(texts.len(), y.tick_count() + x.tick_count());

    let right_edge = chart.opts.insets.left + y.style.padding + y.label_max_width();
    for ((tx, _, text), tick) in texts.iter().zip(y.ticks()) {
        assert_eq!(text, &tick.label);
        assert_abs_diff_eq!(tx + tick.extents.width, right_edge, epsilon = 1e-9);
    }

    let baseline = 200.0 - chart.opts.insets.bottom - x.style.padding;
    for ((tx, ty, _), tick) in texts[y.tick_count()..].iter().zip(x.ticks()) {
        assert_abs_diff_eq!(tx + tick.extents.width / 2.0, layout.plot.left + tick.position, epsilon = 1e-9);
        assert_eq!(*ty, baseline);
    }
}

#[test]
fn labels_can_be_skipped() {
    let mut chart = sample_chart(800, 200);
    chart.opts.draw_labels = false;
    let mut rec = Recorder::default();
    chart.render_onto(&mut rec, &HeuristicTextMeasure).unwrap();

    assert!(rec.texts().is_empty());
    assert!(!rec.ops.contains(&Op::Fill));
    // ticks are still laid out
    assert!(chart.x_axis().ticks().len() >= 2);
}

#[test]
fn theme_colors_reach_the_surface() {
    let mut chart = sample_chart(800, 200);
    chart.opts.theme = dataplot_core::theme::find("dark");
    let mut rec = Recorder::default();
    chart.render_onto(&mut rec, &HeuristicTextMeasure).unwrap();

    let theme = chart.opts.theme;
    assert_eq!(rec.ops.first(), Some(&Op::Color(theme.axis_line)));
    assert!(rec.ops.contains(&Op::Color(theme.data_fill)));
    assert!(rec.ops.contains(&Op::Color(theme.data_stroke)));
    assert!(rec.ops.contains(&Op::LineWidth(theme.data_stroke_width)));
}
