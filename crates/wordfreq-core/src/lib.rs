pub mod frequency;
pub mod language;
pub mod pipeline;
pub mod preprocess;
pub mod stopwords;

pub use frequency::{CountsProjection, FrequencyRow, FrequencyTable, aggregate};
pub use language::{Segmenter, WhitespaceSegmenter, tokenize};
pub use pipeline::{Analysis, Pipeline};
pub use preprocess::{DefaultPreprocessor, Preprocessor, normalize};
pub use stopwords::{ENGLISH_STOPWORDS, StopwordSet, build_stopword_set, filter};
