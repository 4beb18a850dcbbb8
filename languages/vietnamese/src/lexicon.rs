use std::collections::HashSet;
use std::path::Path;

use unicode_normalization::UnicodeNormalization;

#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Known multi-syllable words, stored NFC, lowercase, single-space separated
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: HashSet<String>,
    // First syllables of every entry, lets the matcher bail out early
    heads: HashSet<String>,
    max_syllables: usize,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lexicon shipped with the crate
    pub fn embedded() -> Self {
        let lexicon = Self::parse(include_str!("../data/lexicon.txt"));
        tracing::info!("Loaded {} embedded lexicon entries", lexicon.len());
        lexicon
    }

    /// One entry per line; blank lines and `#` comments ignored
    pub fn parse(content: &str) -> Self {
        let mut lexicon = Self::new();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            lexicon.insert(line);
        }
        lexicon
    }

    pub fn load_from_file(path: &Path) -> Result<Self, LexiconError> {
        tracing::info!("Loading lexicon from file: {}", path.display());
        let content = std::fs::read_to_string(path)?;
        let lexicon = Self::parse(&content);
        tracing::info!("Loaded {} lexicon entries from file", lexicon.len());
        Ok(lexicon)
    }

    /// Add an entry. Single-syllable entries are ignored since there is nothing to merge.
    pub fn insert(&mut self, entry: &str) -> bool {
        let composed: String = entry.nfc().collect::<String>().to_lowercase();
        let syllables: Vec<&str> = composed.split_whitespace().collect();
        if syllables.len() < 2 {
            return false;
        }

        self.max_syllables = self.max_syllables.max(syllables.len());
        self.heads.insert(syllables[0].to_string());
        self.words.insert(syllables.join(" "))
    }

    pub fn merge(mut self, other: Lexicon) -> Self {
        for word in other.words {
            self.insert(&word);
        }
        self
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Whether any entry starts with this syllable
    pub fn starts_with_syllable(&self, syllable: &str) -> bool {
        self.heads.contains(syllable)
    }

    /// Longest entry, in syllables
    pub fn max_syllables(&self) -> usize {
        self.max_syllables
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Lexicon {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut lexicon = Self::new();
        for entry in iter {
            lexicon.insert(entry.as_ref());
        }
        lexicon
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_parse_skips_comments_and_single_syllables() {
        let lexicon = Lexicon::parse("# header\n\nxin chào\n  Dự   Án \nnhà\n");
        assert_eq!(lexicon.len(), 2);
        assert!(lexicon.contains("xin chào"));
        assert!(lexicon.contains("dự án"));
        assert!(!lexicon.contains("nhà"));
        assert_eq!(lexicon.max_syllables(), 2);
        assert!(lexicon.starts_with_syllable("xin"));
        assert!(!lexicon.starts_with_syllable("chào"));
    }

    #[test]
    fn test_entries_are_composed() {
        let lexicon: Lexicon = ["xin cha\u{0300}o"].into_iter().collect();
        assert!(lexicon.contains("xin chào"));
    }

    #[test]
    fn test_embedded_lexicon() {
        let lexicon = Lexicon::embedded();
        assert!(lexicon.contains("xin chào"));
        assert!(lexicon.contains("thành phố hồ chí minh"));
        assert_eq!(lexicon.max_syllables(), 5);
    }

    #[test]
    fn test_merge_and_load() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "trí tuệ\nmáy học").unwrap();

        let extra = Lexicon::load_from_file(file.path()).unwrap();
        let merged = Lexicon::parse("xin chào\n").merge(extra);
        assert_eq!(merged.len(), 3);
        assert!(merged.contains("máy học"));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Lexicon::load_from_file(Path::new("/no/such/lexicon.txt"));
        assert!(matches!(result, Err(LexiconError::IoError(_))));
    }
}
