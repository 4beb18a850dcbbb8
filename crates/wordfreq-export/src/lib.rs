use std::fs;
use std::path::Path;

mod chart;
mod table;
mod text;

pub use chart::{Bar, ChartLayout, ChartOptions, export_chart, export_chart_with, render};
pub use table::{UTF8_BOM, export_table};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Font error: {0}")]
    Font(#[from] ab_glyph::InvalidFont),

    #[error("top_n must be at least 1, got {0}")]
    InvalidTopN(usize),

    #[error("Chart of {width}x{height} is too small for {bars} bars")]
    ChartTooSmall { width: u32, height: u32, bars: usize },
}

/// Create the destination's parent directory if it is missing
pub(crate) fn ensure_parent(destination: &Path) -> std::io::Result<()> {
    match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}
