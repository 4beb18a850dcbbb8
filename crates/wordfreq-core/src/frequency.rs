use std::collections::HashMap;

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyRow {
    pub word: String,
    pub count: usize,
}

/// Rows ranked by count, descending; equal counts keep first-appearance order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    rows: Vec<FrequencyRow>,
}

impl FrequencyTable {
    pub fn rows(&self) -> &[FrequencyRow] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &FrequencyRow> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.rows.iter().map(|row| row.count).sum()
    }

    /// First `n` rows (fewer if the table is shorter)
    pub fn top(&self, n: usize) -> &[FrequencyRow] {
        &self.rows[..n.min(self.rows.len())]
    }

    pub fn get(&self, word: &str) -> Option<usize> {
        self.rows.iter().find(|row| row.word == word).map(|row| row.count)
    }

    /// `{"counts": {word: count, ...}}` in table order
    pub fn counts_projection(&self) -> CountsProjection<'_> {
        CountsProjection(self)
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = &'a FrequencyRow;
    type IntoIter = std::slice::Iter<'a, FrequencyRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Column-keyed view of a table, words as keys
pub struct CountsProjection<'a>(&'a FrequencyTable);

struct CountsColumn<'a>(&'a [FrequencyRow]);

impl Serialize for CountsColumn<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for row in self.0 {
            map.serialize_entry(&row.word, &row.count)?;
        }
        map.end()
    }
}

impl Serialize for CountsProjection<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("CountsProjection", 1)?;
        state.serialize_field("counts", &CountsColumn(&self.0.rows))?;
        state.end()
    }
}

/// Count each distinct token and rank. None when there is nothing to count.
pub fn aggregate<S: AsRef<str>>(tokens: &[S]) -> Option<FrequencyTable> {
    if tokens.is_empty() {
        return None;
    }

    // (word, count, first appearance)
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut entries: Vec<(&str, usize, usize)> = Vec::new();

    for (position, token) in tokens.iter().enumerate() {
        let token = token.as_ref();
        match index.get(token) {
            Some(&slot) => entries[slot].1 += 1,
            None => {
                index.insert(token, entries.len());
                entries.push((token, 1, position));
            }
        }
    }

    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.2.cmp(&b.2)));

    let rows = entries
        .into_iter()
        .map(|(word, count, _)| FrequencyRow {
            word: word.to_string(),
            count,
        })
        .collect();

    Some(FrequencyTable { rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(table: &FrequencyTable) -> Vec<(&str, usize)> {
        table.iter().map(|row| (row.word.as_str(), row.count)).collect()
    }

    #[test]
    fn test_ranks_by_count() {
        let table = aggregate(&["b", "a", "a", "c", "a", "b"]).unwrap();
        assert_eq!(pairs(&table), vec![("a", 3), ("b", 2), ("c", 1)]);
    }

    #[test]
    fn test_ties_keep_first_appearance() {
        let table = aggregate(&["a", "b", "a", "b"]).unwrap();
        assert_eq!(pairs(&table), vec![("a", 2), ("b", 2)]);

        let table = aggregate(&["zeta", "alpha", "mid", "alpha", "zeta", "mid"]).unwrap();
        assert_eq!(pairs(&table), vec![("zeta", 2), ("alpha", 2), ("mid", 2)]);
    }

    #[test]
    fn test_tie_order_is_not_alphabetical() {
        let table = aggregate(&["y", "x", "w", "x"]).unwrap();
        assert_eq!(pairs(&table), vec![("x", 2), ("y", 1), ("w", 1)]);
    }

    #[test]
    fn test_empty_tokens_signal_empty_result() {
        let empty: [&str; 0] = [];
        assert!(aggregate(&empty).is_none());
    }

    #[test]
    fn test_total_matches_token_count() {
        let tokens = vec!["xin chào".to_string(), "dự án".into(), "xin chào".into()];
        let table = aggregate(&tokens).unwrap();
        assert_eq!(table.total(), tokens.len());
        assert_eq!(table.get("xin chào"), Some(2));
        assert_eq!(table.get("missing"), None);
    }

    #[test]
    fn test_top_clamps_to_length() {
        let table = aggregate(&["a", "b", "c"]).unwrap();
        assert_eq!(table.top(10).len(), 3);
        assert_eq!(table.top(2).len(), 2);
        assert!(table.top(0).is_empty());
    }

    #[test]
    fn test_counts_projection_keeps_table_order() {
        let table = aggregate(&["zeta", "alpha", "alpha"]).unwrap();
        let json = serde_json::to_string(&table.counts_projection()).unwrap();
        assert_eq!(json, r#"{"counts":{"alpha":2,"zeta":1}}"#);

        let table = aggregate(&["zeta", "alpha"]).unwrap();
        let json = serde_json::to_string(&table.counts_projection()).unwrap();
        assert_eq!(json, r#"{"counts":{"zeta":1,"alpha":1}}"#);
    }

    #[test]
    fn test_serialize_rows() {
        let table = aggregate(&["a"]).unwrap();
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json, serde_json::json!([{"word": "a", "count": 1}]));
    }
}
