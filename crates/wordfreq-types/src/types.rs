use serde::{Deserialize, Serialize};

use crate::format::OutputFormat;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextStatsRequest {
    pub text: String,
    #[serde(default)]
    pub format: OutputFormat,
}

/// Envelope for inline results; `data` is whatever projection the caller serializes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextStatsResponse<T> {
    pub status: String,
    pub message: String,
    pub data: T,
}

impl<T> TextStatsResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: "success".to_string(),
            message: "Text analysis completed successfully".to_string(),
            data,
        }
    }
}
