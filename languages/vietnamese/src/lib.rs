use std::sync::Arc;

use wordfreq_config::segmenter::SegmenterConfig;
use wordfreq_core::language::{Segmenter, WhitespaceSegmenter};

pub mod lexicon;
pub mod segmenter;

pub use lexicon::{Lexicon, LexiconError};
pub use segmenter::VietnameseSegmenter;

/// Segmenter selected by config: compound merging or plain whitespace splitting
pub fn segmenter_from_config(config: &SegmenterConfig) -> Arc<dyn Segmenter> {
    if config.compound_merge {
        Arc::new(VietnameseSegmenter::with_additional_lexicons(
            &config.lexicon_paths,
            config.max_syllables,
        ))
    } else {
        tracing::info!("Compound merging disabled, using whitespace segmentation");
        Arc::new(WhitespaceSegmenter)
    }
}
