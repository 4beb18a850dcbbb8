use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

// Unicode-aware \w covers letters, combining marks, digits and connector punctuation
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s\-]").expect("static pattern is valid"));

pub trait Preprocessor {
    /// Compose to NFC, blank out everything but word characters, whitespace
    /// and hyphens, then lowercase.
    fn process(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let composed: String = text.nfc().collect();
        NON_WORD.replace_all(&composed, " ").to_lowercase()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

pub fn normalize(text: &str) -> String {
    DefaultPreprocessor.process(text)
}
