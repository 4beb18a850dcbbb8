use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use unicode_normalization::UnicodeNormalization;
use wordfreq_config::stopwords::StopwordConfig;

/// NLTK English stopword list
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're",
    "you've", "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his",
    "himself", "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself",
    "they", "them", "their", "theirs", "themselves", "what", "which", "who", "whom", "this",
    "that", "that'll", "these", "those", "am", "is", "are", "was", "were", "be",
    "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing",
    "a", "an", "the", "and", "but", "if", "or", "because", "as", "until",
    "while", "of", "at", "by", "for", "with", "about", "against", "between", "into",
    "through", "during", "before", "after", "above", "below", "to", "from", "up", "down",
    "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each",
    "few", "more", "most", "other", "some", "such", "no", "nor", "not", "only",
    "own", "same", "so", "than", "too", "very", "s", "t", "can", "will",
    "just", "don", "don't", "should", "should've", "now", "d", "ll", "m", "o",
    "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn", "didn't",
    "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn", "isn't",
    "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't", "shouldn",
    "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn", "wouldn't",
];

/// Merged English + Vietnamese stopwords. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
    skipped: Vec<PathBuf>,
}

impl StopwordSet {
    /// Just the English list
    pub fn english() -> Self {
        Self::from_words(ENGLISH_STOPWORDS.iter().copied())
    }

    /// Set from arbitrary entries; entries are trimmed, blanks dropped
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();
        set.extend(words);
        set
    }

    /// Builder-style merge of extra entries
    pub fn with_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extend(words);
        self
    }

    fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let word = word.as_ref().trim();
            if !word.is_empty() {
                self.words.insert(word.nfc().collect());
            }
        }
    }

    /// Exact membership of the lowercase form
    pub fn contains(&self, word: &str) -> bool {
        if self.words.contains(word) {
            return true;
        }
        word.chars().any(char::is_uppercase) && self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Sources that were configured but could not be read
    pub fn skipped_sources(&self) -> &[PathBuf] {
        &self.skipped
    }
}

/// Read one stopword list: one entry per line, trimmed, blank lines dropped
pub fn load_list(path: &Path) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

/// Every list file the config points at, glob matches first, then explicit extras
fn resolve_sources(config: &StopwordConfig, skipped: &mut Vec<PathBuf>) -> Vec<PathBuf> {
    let mut sources = Vec::new();

    let pattern = config.glob_pattern();
    if !config.dir.is_dir() {
        tracing::warn!("Stopword directory {} does not exist", config.dir.display());
        skipped.push(config.dir.clone());
        sources.extend(config.extra_paths.iter().cloned());
        return sources;
    }

    match glob::glob(&pattern) {
        Ok(paths) => {
            for entry in paths {
                match entry {
                    Ok(path) => sources.push(path),
                    Err(e) => {
                        tracing::warn!("Unreadable stopword source {}: {}", e.path().display(), e);
                        skipped.push(e.path().to_path_buf());
                    }
                }
            }
        }
        Err(e) => {
            tracing::warn!("Invalid stopword pattern {}: {}", pattern, e);
            skipped.push(config.dir.join(&config.pattern));
        }
    }

    if sources.is_empty() {
        tracing::warn!("No stopword lists matched {}", pattern);
    }

    sources.extend(config.extra_paths.iter().cloned());
    sources
}

/// English list merged with every readable Vietnamese list. Unreadable
/// sources are logged and skipped; they never abort the build.
pub fn build_stopword_set(config: &StopwordConfig) -> StopwordSet {
    let mut skipped = Vec::new();
    let mut set = StopwordSet::english();

    for path in resolve_sources(config, &mut skipped) {
        match load_list(&path) {
            Ok(words) => {
                tracing::info!("Loaded {} stopwords from {}", words.len(), path.display());
                set.extend(words);
            }
            Err(e) => {
                tracing::warn!("Failed to load stopwords from {}: {}", path.display(), e);
                skipped.push(path);
            }
        }
    }

    set.skipped = skipped;
    tracing::info!(
        "Stopword set ready: {} entries, {} sources skipped",
        set.len(),
        set.skipped.len()
    );
    set
}

/// Drop every token that is a stopword. Order preserving; empty tokens are dropped too.
pub fn filter(tokens: Vec<String>, stopwords: &StopwordSet) -> Vec<String> {
    tokens
        .into_iter()
        .filter(|token| !token.is_empty() && !stopwords.contains(token))
        .collect()
}
