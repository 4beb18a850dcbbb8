use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;
use wordfreq_core::frequency::FrequencyTable;
use wordfreq_core::pipeline::Analysis;
use wordfreq_export::{ChartOptions, ExportError, export_chart_with, export_table};
use wordfreq_types::{OutputFormat, TextStatsRequest, TextStatsResponse, UnsupportedFormat};

use crate::state::AppState;

/// Raw input as it arrives at the boundary
#[derive(Debug, Clone)]
pub enum Input {
    Text(String),
    /// Uploaded bytes, expected to be UTF-8
    Upload(Vec<u8>),
}

impl Input {
    fn into_text(self) -> Result<String, ServiceError> {
        match self {
            Input::Text(text) => Ok(text),
            Input::Upload(bytes) => Ok(String::from_utf8(bytes)?),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnalyzeRequest {
    pub input: Input,
    pub format: OutputFormat,
    /// Overrides the configured chart size for png output
    pub top_n: Option<usize>,
}

impl From<TextStatsRequest> for AnalyzeRequest {
    fn from(request: TextStatsRequest) -> Self {
        Self {
            input: Input::Text(request.text),
            format: request.format,
            top_n: None,
        }
    }
}

#[derive(Debug)]
pub enum Response {
    /// Serialized `TextStatsResponse` body
    Json(String),
    /// Artifact written to disk
    File { path: PathBuf, format: OutputFormat },
    /// Nothing left to count after filtering
    NoContent { message: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Text must not be empty")]
    InvalidInput,

    #[error(transparent)]
    UnsupportedFormat(#[from] UnsupportedFormat),

    #[error("Uploaded file is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("Export failed: {0}")]
    Export(#[from] ExportError),

    #[error("Failed to serialize response: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ServiceError {
    /// Whether the caller sent something wrong, as opposed to a failure on our side
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ServiceError::InvalidInput
                | ServiceError::UnsupportedFormat(_)
                | ServiceError::Encoding(_)
                | ServiceError::Export(ExportError::InvalidTopN(_))
        )
    }
}

pub fn parse_format(raw: &str) -> Result<OutputFormat, ServiceError> {
    Ok(raw.parse()?)
}

/// Unique artifact path under `dir`, e.g. `word_frequency_<nanos>_<uuid>.csv`
pub fn artifact_path(dir: &Path, extension: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    let id = Uuid::new_v4().simple();
    dir.join(format!("word_frequency_{nanos}_{id}.{extension}"))
}

/// Validate, run the pipeline, and hand the table to the requested consumer.
/// Blocks on file IO for csv/png.
pub fn analyze(state: &AppState, request: AnalyzeRequest) -> Result<Response, ServiceError> {
    let text = request.input.into_text()?;
    if text.trim().is_empty() {
        return Err(ServiceError::InvalidInput);
    }

    match state.pipeline.run(&text) {
        Analysis::InvalidInput => Err(ServiceError::InvalidInput),
        Analysis::Empty => {
            tracing::info!("No content left after filtering");
            Ok(Response::NoContent {
                message: "No words left after removing punctuation and stopwords".to_string(),
            })
        }
        Analysis::Frequencies(table) => respond(state, &table, request.format, request.top_n),
    }
}

fn respond(
    state: &AppState,
    table: &FrequencyTable,
    format: OutputFormat,
    top_n: Option<usize>,
) -> Result<Response, ServiceError> {
    let export = &state.config.export;

    match format {
        OutputFormat::Json => {
            let body = serde_json::to_string(&TextStatsResponse::success(table.counts_projection()))?;
            Ok(Response::Json(body))
        }
        OutputFormat::Csv => {
            let path = artifact_path(&export.output_dir, format.extension());
            export_table(table, &path)?;
            Ok(Response::File { path, format })
        }
        OutputFormat::Png => {
            let options = ChartOptions {
                top_n: top_n.unwrap_or(export.top_n),
                width: export.chart_width,
                height: export.chart_height,
            };
            let path = artifact_path(&export.output_dir, format.extension());
            export_chart_with(table, &path, &options)?;
            Ok(Response::File { path, format })
        }
    }
}
