use std::sync::Arc;

use wordfreq_config::Config;
use wordfreq_core::pipeline::Pipeline;
use wordfreq_core::stopwords::build_stopword_set;
use wordfreq_lang_vietnamese::segmenter_from_config;

/// Built once before any input is processed, then shared read-only
pub struct AppState {
    pub config: Config,
    pub pipeline: Pipeline,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let stopwords = Arc::new(build_stopword_set(&config.stopwords));
        if !stopwords.skipped_sources().is_empty() {
            tracing::warn!(
                "Running with partial stopword coverage, {} sources skipped",
                stopwords.skipped_sources().len()
            );
        }

        let segmenter = segmenter_from_config(&config.segmenter);
        let pipeline = Pipeline::new(stopwords, segmenter);
        tracing::debug!("Pipeline ready: {:?}", pipeline);

        Self::with_pipeline(config, pipeline)
    }

    pub fn with_pipeline(config: Config, pipeline: Pipeline) -> Self {
        Self { config, pipeline }
    }
}
