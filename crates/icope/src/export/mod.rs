//! Spreadsheet-safe CSV export of answer records.

mod csv;

pub use csv::{CsvDocument, file_name_on};
