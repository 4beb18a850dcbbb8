use std::path::PathBuf;

use wordfreq_core::language::Segmenter;

use crate::lexicon::Lexicon;

/// Forward maximum matching over whitespace-separated syllables.
///
/// At each position the longest run of syllables found in the lexicon becomes a
/// single token (syllables joined by one space); anything else is emitted as a
/// lone syllable. Text without known compounds degrades to whitespace splitting.
#[derive(Debug, Clone)]
pub struct VietnameseSegmenter {
    lexicon: Lexicon,
    max_syllables: usize,
}

impl VietnameseSegmenter {
    pub fn new(lexicon: Lexicon, max_syllables: usize) -> Self {
        Self {
            lexicon,
            max_syllables,
        }
    }

    /// Embedded lexicon only
    pub fn with_defaults() -> Self {
        Self::with_additional_lexicons(&[], 5)
    }

    /// Embedded lexicon merged with every readable additional file
    pub fn with_additional_lexicons(additional_paths: &[PathBuf], max_syllables: usize) -> Self {
        let mut lexicon = Lexicon::embedded();

        for path in additional_paths {
            match Lexicon::load_from_file(path) {
                Ok(additional) => {
                    tracing::info!("Merging additional lexicon from: {}", path.display());
                    lexicon = lexicon.merge(additional);
                }
                Err(e) => {
                    tracing::warn!("Failed to load lexicon from {}: {}", path.display(), e);
                }
            }
        }

        Self::new(lexicon, max_syllables)
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    fn window(&self) -> usize {
        self.max_syllables.min(self.lexicon.max_syllables())
    }

    /// Length in syllables of the longest lexicon entry starting at `syllables[0]`
    fn longest_match(&self, syllables: &[&str]) -> usize {
        if !self.lexicon.starts_with_syllable(syllables[0]) {
            return 1;
        }

        let limit = self.window().min(syllables.len());
        (2..=limit)
            .rev()
            .find(|&len| self.lexicon.contains(&syllables[..len].join(" ")))
            .unwrap_or(1)
    }
}

impl Segmenter for VietnameseSegmenter {
    fn name(&self) -> &str {
        "vietnamese"
    }

    fn segment(&self, text: &str) -> Vec<String> {
        let syllables: Vec<&str> = text.split_whitespace().collect();
        let mut tokens = Vec::with_capacity(syllables.len());
        let mut i = 0;

        while i < syllables.len() {
            let len = self.longest_match(&syllables[i..]);
            tokens.push(syllables[i..i + len].join(" "));
            i += len;
        }

        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segmenter(entries: &[&str]) -> VietnameseSegmenter {
        VietnameseSegmenter::new(entries.iter().collect(), 5)
    }

    #[test]
    fn test_merges_known_compound() {
        let seg = segmenter(&["xin chào"]);
        assert_eq!(
            seg.segment("xin chào  xin chào mọi người "),
            vec!["xin chào", "xin chào", "mọi", "người"]
        );
    }

    #[test]
    fn test_prefers_longest_match() {
        let seg = segmenter(&["thành phố", "thành phố hồ chí minh", "hồ chí minh"]);
        assert_eq!(
            seg.segment("thành phố hồ chí minh đẹp"),
            vec!["thành phố hồ chí minh", "đẹp"]
        );
        assert_eq!(seg.segment("thành phố lớn"), vec!["thành phố", "lớn"]);
    }

    #[test]
    fn test_window_cap_limits_match_length() {
        let lexicon: Lexicon = ["thành phố", "thành phố hồ chí minh"].into_iter().collect();
        let seg = VietnameseSegmenter::new(lexicon, 2);
        assert_eq!(
            seg.segment("thành phố hồ chí minh"),
            vec!["thành phố", "hồ", "chí", "minh"]
        );
    }

    #[test]
    fn test_english_degrades_to_whitespace() {
        let seg = VietnameseSegmenter::with_defaults();
        assert_eq!(
            seg.segment("the quick brown-fox"),
            vec!["the", "quick", "brown-fox"]
        );
    }

    #[test]
    fn test_mixed_language_text() {
        let seg = VietnameseSegmenter::with_defaults();
        assert_eq!(
            seg.segment("dự án rust cho sinh viên"),
            vec!["dự án", "rust", "cho", "sinh viên"]
        );
    }

    #[test]
    fn test_is_deterministic() {
        let seg = VietnameseSegmenter::with_defaults();
        let text = "xin chào mọi người đây là ví dụ về dự án nhỏ";
        assert_eq!(seg.segment(text), seg.segment(text));
    }

    #[test]
    fn test_missing_additional_lexicon_is_skipped() {
        let seg = VietnameseSegmenter::with_additional_lexicons(
            &[PathBuf::from("/no/such/lexicon.txt")],
            4,
        );
        assert_eq!(seg.lexicon().len(), Lexicon::embedded().len());
    }

    #[test]
    fn test_empty_text() {
        assert!(VietnameseSegmenter::with_defaults().segment("").is_empty());
    }
}
