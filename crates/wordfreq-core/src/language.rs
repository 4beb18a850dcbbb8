/// Word segmentation capability; turns normalized text into tokens
pub trait Segmenter: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &str;

    /// Split normalized text into tokens. Must be deterministic for a given input.
    fn segment(&self, text: &str) -> Vec<String>;
}

/// Plain whitespace splitting, no compound merging
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceSegmenter;

impl Segmenter for WhitespaceSegmenter {
    fn name(&self) -> &str {
        "whitespace"
    }

    fn segment(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(String::from).collect()
    }
}

/// Tokenize already-normalized text; blank input yields no tokens
pub fn tokenize(segmenter: &dyn Segmenter, normalized: &str) -> Vec<String> {
    if normalized.trim().is_empty() {
        return Vec::new();
    }

    let tokens = segmenter.segment(normalized);
    tracing::debug!("{} segmenter produced {} tokens", segmenter.name(), tokens.len());
    tokens
}
