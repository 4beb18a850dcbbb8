use std::sync::Arc;

use crate::frequency::{FrequencyTable, aggregate};
use crate::language::{Segmenter, tokenize};
use crate::preprocess::normalize;
use crate::stopwords::{StopwordSet, filter};

/// Outcome of one pipeline run. Expected conditions are variants, not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Analysis {
    Frequencies(FrequencyTable),
    /// Text was empty or whitespace only; nothing was tokenized
    InvalidInput,
    /// Every token was punctuation or a stopword
    Empty,
}

impl Analysis {
    pub fn table(&self) -> Option<&FrequencyTable> {
        match self {
            Analysis::Frequencies(table) => Some(table),
            _ => None,
        }
    }

    pub fn into_table(self) -> Option<FrequencyTable> {
        match self {
            Analysis::Frequencies(table) => Some(table),
            _ => None,
        }
    }
}

/// normalize -> tokenize -> filter -> aggregate, over a shared read-only stopword set
#[derive(Clone)]
pub struct Pipeline {
    stopwords: Arc<StopwordSet>,
    segmenter: Arc<dyn Segmenter>,
}

impl Pipeline {
    pub fn new(stopwords: Arc<StopwordSet>, segmenter: Arc<dyn Segmenter>) -> Self {
        Self {
            stopwords,
            segmenter,
        }
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    /// Tokens that survive the stopword filter, in text order
    pub fn tokens(&self, text: &str) -> Vec<String> {
        let normalized = normalize(text);
        let tokens = tokenize(self.segmenter.as_ref(), &normalized);
        let before = tokens.len();

        let kept = filter(tokens, &self.stopwords);
        tracing::debug!("Stopword filter kept {} of {} tokens", kept.len(), before);
        kept
    }

    pub fn run(&self, text: &str) -> Analysis {
        if text.trim().is_empty() {
            return Analysis::InvalidInput;
        }

        let tokens = self.tokens(text);
        match aggregate(&tokens) {
            Some(table) => {
                tracing::debug!("Aggregated {} tokens into {} rows", tokens.len(), table.len());
                Analysis::Frequencies(table)
            }
            None => Analysis::Empty,
        }
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("segmenter", &self.segmenter.name())
            .field("stopwords", &self.stopwords.len())
            .finish()
    }
}
