use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::parse_list;

fn default_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_pattern() -> String {
    "*stopwords.txt".to_string()
}

/// Where the Vietnamese stopword lists come from
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct StopwordConfig {
    /// Directory searched with `pattern`
    #[serde(default = "default_dir")]
    pub dir: PathBuf,
    /// Glob relative to `dir`
    #[serde(default = "default_pattern")]
    pub pattern: String,
    /// Explicit list files loaded in addition to the glob matches
    #[serde(default)]
    pub extra_paths: Vec<PathBuf>,
}

impl Default for StopwordConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            pattern: default_pattern(),
            extra_paths: vec![],
        }
    }
}

impl StopwordConfig {
    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        let dir = lookup("WORDFREQ_STOPWORDS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_dir);

        let pattern = lookup("WORDFREQ_STOPWORDS_PATTERN").unwrap_or_else(default_pattern);

        let extra_paths = parse_list(lookup, "WORDFREQ_STOPWORDS_EXTRA")
            .into_iter()
            .map(PathBuf::from)
            .collect();

        Self {
            dir,
            pattern,
            extra_paths,
        }
    }

    /// Full glob pattern rooted at `dir`. Only `pattern` is interpreted as a glob;
    /// metacharacters in `dir` match literally.
    pub fn glob_pattern(&self) -> String {
        let dir = glob::Pattern::escape(&self.dir.to_string_lossy());
        Path::new(&dir).join(&self.pattern).to_string_lossy().into_owned()
    }
}
