use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::parse_var;

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

fn default_top_n() -> usize {
    10
}

// 12x6 inch figure at 100 dpi
fn default_chart_width() -> u32 {
    1200
}

fn default_chart_height() -> u32 {
    600
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ExportConfig {
    /// Where generated csv/png artifacts land
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    #[serde(default = "default_chart_width")]
    pub chart_width: u32,
    #[serde(default = "default_chart_height")]
    pub chart_height: u32,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            top_n: default_top_n(),
            chart_width: default_chart_width(),
            chart_height: default_chart_height(),
        }
    }
}

impl ExportConfig {
    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        let output_dir = lookup("WORDFREQ_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_output_dir);

        let top_n = parse_var(lookup, "WORDFREQ_TOP_N").unwrap_or_else(default_top_n);

        let chart_width =
            parse_var(lookup, "WORDFREQ_CHART_WIDTH").unwrap_or_else(default_chart_width);

        let chart_height =
            parse_var(lookup, "WORDFREQ_CHART_HEIGHT").unwrap_or_else(default_chart_height);

        Self {
            output_dir,
            top_n,
            chart_width,
            chart_height,
        }
    }
}
