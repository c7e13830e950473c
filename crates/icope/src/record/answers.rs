//! The answer record collected from one questionnaire submission.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{IcopeError, Result};

/// One submission's answers: an insertion-ordered mapping from field label to
/// answer string.
///
/// The record is built once at submission time and only read afterwards.
/// Every accessor is total: an absent label is "not answered", never an
/// error. Values outside the expected enumerated domains are simply strings
/// that fail the comparisons downstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerRecord {
    answers: IndexMap<String, String>,
}

impl AnswerRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from `(label, value)` pairs, preserving their order.
    pub fn from_pairs<L, V>(pairs: impl IntoIterator<Item = (L, V)>) -> Self
    where
        L: Into<String>,
        V: Into<String>,
    {
        Self {
            answers: pairs
                .into_iter()
                .map(|(l, v)| (l.into(), v.into()))
                .collect(),
        }
    }

    /// Load a record from a JSON object file (label -> value).
    ///
    /// This is the CLI input boundary; the web form submits the same shape
    /// over HTTP instead.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| IcopeError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let record = serde_json::from_reader(BufReader::new(file))?;
        Ok(record)
    }

    /// Look up an answer by label.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.answers.get(label).map(String::as_str)
    }

    /// Whether the label has a non-empty answer.
    ///
    /// A present-but-blank answer counts as unanswered, matching how the
    /// collector treats unfilled text inputs.
    pub fn is_answered(&self, label: &str) -> bool {
        self.get(label).is_some_and(|v| !v.is_empty())
    }

    /// Whether the answer for `label` equals `expected` exactly.
    ///
    /// Absent labels compare unequal to everything.
    pub fn answer_is(&self, label: &str, expected: &str) -> bool {
        self.get(label) == Some(expected)
    }

    /// Parse the answer for `label` as a number, if present and numeric.
    pub fn numeric(&self, label: &str) -> Option<f64> {
        self.get(label)?.trim().parse::<f64>().ok()
    }

    /// Iterate over `(label, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.answers.iter().map(|(l, v)| (l.as_str(), v.as_str()))
    }

    /// Labels in insertion order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.answers.keys().map(String::as_str)
    }

    /// Number of answered fields.
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Whether the record holds no answers at all.
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

impl From<IndexMap<String, String>> for AnswerRecord {
    fn from(answers: IndexMap<String, String>) -> Self {
        Self { answers }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_get_is_total() {
        let record = AnswerRecord::from_pairs([("姓名", "王小明")]);
        assert_eq!(record.get("姓名"), Some("王小明"));
        assert_eq!(record.get("不存在的欄位"), None);
    }

    #[test]
    fn test_blank_answer_is_unanswered() {
        let record = AnswerRecord::from_pairs([("電話", "")]);
        assert!(!record.is_answered("電話"));
        assert!(!record.is_answered("手機號碼"));
    }

    #[test]
    fn test_numeric_parsing() {
        let record = AnswerRecord::from_pairs([("秒數", " 12.5 "), ("備註", "abc")]);
        assert_eq!(record.numeric("秒數"), Some(12.5));
        assert_eq!(record.numeric("備註"), None);
        assert_eq!(record.numeric("缺少"), None);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let record = AnswerRecord::from_pairs([("c", "3"), ("a", "1"), ("b", "2")]);
        let labels: Vec<&str> = record.labels().collect();
        assert_eq!(labels, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_from_json_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all("{\"姓名\":\"王小明\",\"性別\":\"男\"}".as_bytes())
            .unwrap();

        let record = AnswerRecord::from_json_file(file.path()).unwrap();
        assert_eq!(record.get("姓名"), Some("王小明"));
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn test_from_json_file_missing() {
        let err = AnswerRecord::from_json_file("/no/such/answers.json").unwrap_err();
        assert!(err.to_string().contains("answers.json"));
    }
}
