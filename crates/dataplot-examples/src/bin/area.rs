// File: crates/dataplot-examples/src/bin/area.rs
// Summary: Minimal example that renders a filled area chart with a styled y-axis to PNG.

use anyhow::Result;
use dataplot_core::{Chart, RenderOptions};

fn main() -> Result<()> {
    let xs = (0..=40).map(|i| i as f64 * 0.25).collect::<Vec<_>>();
    let ys = xs.iter().map(|x| 2.0 + x.sin() * 1.5 + x * 0.2).collect::<Vec<_>>();

    let mut chart = Chart::new(RenderOptions::new(800, 360, "target/out/example_area.png"));
    chart.set_data(xs, ys)?;
    chart.y_axis_mut().set_limit(0.0, 6.0)?;
    chart.y_axis_mut().style.font_size = 12.0;
    chart.y_axis_mut().style.padding = 6.0;

    let layout = chart.render()?;
    println!(
        "Wrote {} ({} x ticks, {} y ticks, plot {:.0}x{:.0})",
        chart.opts.output.display(),
        chart.x_axis().tick_count(),
        chart.y_axis().tick_count(),
        layout.plot.width,
        layout.plot.height,
    );
    Ok(())
}
