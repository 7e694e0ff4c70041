// File: crates/dataplot-demo/src/main.rs
// Summary: Demo loads an (x, y) CSV (or a built-in sample) and renders a filled area chart to PNG.

use anyhow::{bail, Context, Result};
use dataplot_core::{theme, Chart, Insets, RenderOptions, XAxisSizing};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const SAMPLE_X: [f64; 11] = [250.0, 350.0, 450.0, 550.0, 650.0, 750.0, 850.0, 950.0, 1050.0, 1150.0, 1250.0];
const SAMPLE_Y: [f64; 11] = [10.1, 20.2, 10.1, 35.1, 40.2, 45.3, 30.35, 20.4, 10.35, 5.3, 1.0];

const USAGE: &str = "usage: dataplot-demo [input.csv] [output.png] [--width N] [--height N] \
[--theme NAME] [--x-limit MIN:MAX] [--y-limit MIN:MAX] [--margin N] [--legacy-x-axis]";

#[derive(Debug, Default, PartialEq)]
struct Args {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    width: Option<i32>,
    height: Option<i32>,
    theme: Option<String>,
    x_limit: Option<(f64, f64)>,
    y_limit: Option<(f64, f64)>,
    margin: Option<f64>,
    legacy_x_axis: bool,
}

impl Args {
    fn parse(mut raw: impl Iterator<Item = String>) -> Result<Self> {
        let mut args = Args::default();
        let mut positional = Vec::new();
        while let Some(arg) = raw.next() {
            let mut value = |flag: &str| raw.next().with_context(|| format!("{flag} needs a value"));
            match arg.as_str() {
                "--width" => args.width = Some(value("--width")?.parse().context("--width")?),
                "--height" => args.height = Some(value("--height")?.parse().context("--height")?),
                "--theme" => args.theme = Some(value("--theme")?),
                "--x-limit" => args.x_limit = Some(parse_limit(&value("--x-limit")?)?),
                "--y-limit" => args.y_limit = Some(parse_limit(&value("--y-limit")?)?),
                "--margin" => args.margin = Some(value("--margin")?.parse().context("--margin")?),
                "--legacy-x-axis" => args.legacy_x_axis = true,
                "-h" | "--help" => bail!(USAGE),
                flag if flag.starts_with("--") => bail!("unknown flag {flag}\n{USAGE}"),
                _ => positional.push(PathBuf::from(arg)),
            }
        }
        let mut positional = positional.into_iter();
        args.input = positional.next();
        args.output = positional.next();
        if positional.next().is_some() {
            bail!("too many arguments\n{USAGE}");
        }
        Ok(args)
    }

    /// Without a CSV the demo reproduces the classic 640x280 sample chart.
    fn options(&self) -> RenderOptions {
        let (w, h) = if self.input.is_some() { (800, 600) } else { (640, 280) };
        let output = self.output.clone().unwrap_or_else(|| match &self.input {
            Some(input) => out_name_for(input),
            None => PathBuf::from("target/out/sample.png"),
        });
        let mut opts = RenderOptions::new(self.width.unwrap_or(w), self.height.unwrap_or(h), output);
        if let Some(name) = &self.theme {
            opts.theme = theme::find(name);
        }
        if let Some(m) = self.margin {
            opts.insets = Insets::uniform(m);
        }
        if self.legacy_x_axis {
            opts.x_axis_sizing = XAxisSizing::FullWidth;
        }
        opts
    }
}

fn parse_limit(s: &str) -> Result<(f64, f64)> {
    let (lo, hi) = s.split_once(':').with_context(|| format!("limit '{s}' must look like MIN:MAX"))?;
    let lo = lo.trim().parse::<f64>().with_context(|| format!("bad limit minimum in '{s}'"))?;
    let hi = hi.trim().parse::<f64>().with_context(|| format!("bad limit maximum in '{s}'"))?;
    Ok((lo, hi))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let args = Args::parse(std::env::args().skip(1))?;
    let mut chart = Chart::new(args.options());

    match &args.input {
        Some(path) => {
            let (xs, ys) = load_xy_csv(path)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            info!(rows = xs.len(), input = %path.display(), "loaded series");
            if xs.is_empty() {
                warn!("no rows loaded; check headers/delimiter");
            }
            chart.set_data(xs, ys)?;
        }
        None => {
            chart.set_data(SAMPLE_X.to_vec(), SAMPLE_Y.to_vec())?;
            chart.x_axis_mut().set_limit(200.0, 2000.0)?;
            chart.y_axis_mut().set_limit(1.0, 50.0)?;
        }
    }
    if let Some((lo, hi)) = args.x_limit {
        chart.x_axis_mut().set_limit(lo, hi)?;
    }
    if let Some((lo, hi)) = args.y_limit {
        chart.y_axis_mut().set_limit(lo, hi)?;
    }

    let layout = chart.render()?;
    info!(
        x_ticks = chart.x_axis().tick_count(),
        y_ticks = chart.y_axis().tick_count(),
        plot = ?layout.plot,
        "rendered"
    );
    println!("Wrote {}", chart.opts.output.display());
    Ok(())
}

/// Produce output file name like target/out/chart_<stem>.png
fn out_name_for(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    PathBuf::from("target/out").join(format!("chart_{stem}.png"))
}

/// Load two numeric columns. Headers named x/y (or similar) are preferred,
/// otherwise the first two columns are used. Unparseable rows are skipped.
fn load_xy_csv(path: &Path) -> Result<(Vec<f64>, Vec<f64>)> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_x = idx(&["x", "time", "timestamp", "index", "t"]).unwrap_or(0);
    let i_y = idx(&["y", "value", "close", "v"]).unwrap_or(1);
    if i_x == i_y {
        bail!("x and y resolve to the same column {i_x}");
    }

    let mut xs = Vec::new();
    let mut ys = Vec::new();
    let mut skipped = 0usize;
    for rec in rdr.records() {
        let rec = rec?;
        let parse = |i: usize| rec.get(i).and_then(|s| s.parse::<f64>().ok());
        match (parse(i_x), parse(i_y)) {
            (Some(x), Some(y)) => {
                xs.push(x);
                ys.push(y);
            }
            _ => skipped += 1,
        }
    }
    if skipped > 0 {
        warn!(skipped, "rows without two numeric values were skipped");
    }
    Ok((xs, ys))
}
