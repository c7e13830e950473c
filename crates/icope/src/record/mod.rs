//! Answer records and their display grouping.

mod answers;
pub mod fields;
mod groups;

pub use answers::AnswerRecord;
pub use groups::{CheckedGroup, FieldValue, GroupedRecord};
