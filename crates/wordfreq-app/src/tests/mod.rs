mod service_tests;

use std::path::Path;
use std::sync::Arc;

use wordfreq_config::Config;
use wordfreq_core::pipeline::Pipeline;
use wordfreq_core::stopwords::StopwordSet;
use wordfreq_lang_vietnamese::VietnameseSegmenter;

use crate::state::AppState;

/// English + a couple of Vietnamese stopwords, "xin chào" as the only compound
pub(crate) fn test_state(output_dir: &Path) -> AppState {
    let mut config = Config::default();
    config.export.output_dir = output_dir.to_path_buf();

    let stopwords = StopwordSet::english().with_words(["mọi", "người", "là", "về"]);
    let segmenter = VietnameseSegmenter::new(["xin chào", "dự án", "ví dụ"].into_iter().collect(), 5);
    let pipeline = Pipeline::new(Arc::new(stopwords), Arc::new(segmenter));

    AppState::with_pipeline(config, pipeline)
}
