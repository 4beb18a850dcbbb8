use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{parse_bool, parse_list, parse_var};

fn default_compound_merge() -> bool {
    true
}

fn default_max_syllables() -> usize {
    5
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SegmenterConfig {
    /// Fuse known multi-syllable Vietnamese words into one token
    #[serde(default = "default_compound_merge")]
    pub compound_merge: bool,
    /// Upper bound on syllables per compound, regardless of the lexicon
    #[serde(default = "default_max_syllables")]
    pub max_syllables: usize,
    /// Lexicon files merged on top of the embedded one
    #[serde(default)]
    pub lexicon_paths: Vec<PathBuf>,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            compound_merge: default_compound_merge(),
            max_syllables: default_max_syllables(),
            lexicon_paths: vec![],
        }
    }
}

impl SegmenterConfig {
    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        let compound_merge =
            parse_bool(lookup, "WORDFREQ_COMPOUND_MERGE").unwrap_or_else(default_compound_merge);

        let max_syllables = parse_var(lookup, "WORDFREQ_MAX_SYLLABLES")
            .filter(|n: &usize| *n > 0)
            .unwrap_or_else(default_max_syllables);

        let lexicon_paths = parse_list(lookup, "WORDFREQ_LEXICON_PATHS")
            .into_iter()
            .map(PathBuf::from)
            .collect();

        Self {
            compound_merge,
            max_syllables,
            lexicon_paths,
        }
    }
}
