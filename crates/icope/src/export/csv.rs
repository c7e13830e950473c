//! CSV serialization of an answer record.
//!
//! The encoding is fixed by what spreadsheet applications expect from the
//! download: a UTF-8 BOM so non-ASCII text survives legacy code pages, bare
//! header cells (labels are ours, not user input), and fully quoted data
//! cells with doubled quotes and newlines flattened to spaces.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

use crate::error::{IcopeError, Result};
use crate::record::{AnswerRecord, fields};

/// Byte-order marker prepended to the document.
const BOM: char = '\u{FEFF}';

/// File-name prefix for exports.
const FILE_PREFIX: &str = "ICOPE_問卷";

/// Name segment used when the record has no (or a blank) name answer.
const UNNAMED: &str = "未命名";

/// A rendered CSV export: the document text plus its computed file name.
///
/// Derived entirely from the record; building it twice yields byte-identical
/// output for the same date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvDocument {
    text: String,
    file_name: String,
}

impl CsvDocument {
    /// Render a record using today's local date for the file name.
    pub fn from_record(record: &AnswerRecord) -> Self {
        Self::from_record_on(record, Local::now().date_naive())
    }

    /// Render a record with an explicit date (injectable for tests).
    pub fn from_record_on(record: &AnswerRecord, date: NaiveDate) -> Self {
        Self {
            text: render(record),
            file_name: file_name_on(record, date),
        }
    }

    /// The document text, BOM included.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The document as bytes for transport.
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// The computed `ICOPE_問卷_<name>_<date>.csv` file name.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Write the document into `dir` under its computed file name.
    pub fn write_to(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let path = dir.as_ref().join(&self.file_name);
        let mut file = File::create(&path).map_err(|e| IcopeError::Io {
            path: path.clone(),
            source: e,
        })?;
        file.write_all(self.bytes()).map_err(|e| IcopeError::Io {
            path: path.clone(),
            source: e,
        })?;
        Ok(path)
    }
}

/// Render the two-row document: unquoted headers, quoted values, BOM prefix.
fn render(record: &AnswerRecord) -> String {
    let headers: Vec<&str> = record.labels().collect();
    let values: Vec<String> = record.iter().map(|(_, v)| escape_field(v)).collect();

    format!("{}{}\n{}", BOM, headers.join(","), values.join(","))
}

/// Escape one data cell: newlines become spaces, quotes are doubled, and the
/// whole cell is wrapped in double quotes.
fn escape_field(value: &str) -> String {
    let flat = value.replace('\n', " ");
    format!("\"{}\"", flat.replace('"', "\"\""))
}

/// Compute the export file name for an explicit date.
pub fn file_name_on(record: &AnswerRecord, date: NaiveDate) -> String {
    let name = record
        .get(fields::NAME)
        .filter(|n| !n.is_empty())
        .unwrap_or(UNNAMED);
    format!("{}_{}_{}.csv", FILE_PREFIX, name, date.format("%Y-%m-%d"))
}
