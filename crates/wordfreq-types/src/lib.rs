pub mod format;
pub mod types;

pub use format::{OutputFormat, UnsupportedFormat};
pub use types::{TextStatsRequest, TextStatsResponse};
