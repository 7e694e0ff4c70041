// File: crates/dataplot-core/src/error.rs
// Summary: Error taxonomy: configuration problems vs. graphics backend failures.

use std::path::PathBuf;

use thiserror::Error;

use crate::axis::Orientation;

pub type ChartResult<T> = Result<T, ChartError>;

/// Caller-supplied data or settings that cannot be laid out.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid axis limit [{min}, {max}]: max must be finite and greater than min")]
    InvalidLimit { min: f64, max: f64 },

    #[error("data series length mismatch: {xs} x values vs {ys} y values")]
    SeriesLengthMismatch { xs: usize, ys: usize },

    #[error("data point {index} is not finite")]
    NonFiniteData { index: usize },

    #[error("invalid axis size: {0}")]
    InvalidSize(f64),

    #[error("{orientation:?} axis cannot derive a tick spacing from its label style")]
    DegenerateTickSpacing { orientation: Orientation },

    #[error("invalid canvas size: width={width}, height={height}")]
    InvalidCanvas { width: i32, height: i32 },
}

/// The environment (fonts, rasterizer, filesystem) failed us.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("font family '{family}' is not available")]
    FontUnavailable { family: String },

    #[error("failed to create {width}x{height} raster surface")]
    SurfaceCreation { width: i32, height: i32 },

    #[error("PNG encoding failed")]
    Encode,

    #[error("cannot write '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum ChartError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl ChartError {
    pub fn is_config(&self) -> bool {
        matches!(self, ChartError::Config(_))
    }

    pub fn is_backend(&self) -> bool {
        matches!(self, ChartError::Backend(_))
    }
}
