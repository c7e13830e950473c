//! icope: screening engine and CSV export for ICOPE elder-care assessments.
//!
//! The library turns one questionnaire submission (a flat label-to-answer
//! mapping) into follow-up referrals and a spreadsheet-safe CSV download.
//!
//! # Core Principles
//!
//! - **Total**: screening and export never fail, whatever the record holds
//! - **Read-only**: the answer record is built once and never mutated
//! - **Derived**: report, grouped view and CSV are recomputed, never cached
//!
//! # Example
//!
//! ```
//! use icope::{AnswerRecord, Submission};
//!
//! let record = AnswerRecord::from_pairs([("姓名", "王小明"), ("需輔具？", "是")]);
//! let submission = Submission::new(record);
//!
//! let report = submission.evaluate();
//! assert_eq!(report.recommendations(), vec![
//!     "請進行BHT-AD8量表評估", // orientation questions unanswered
//!     "請進行SPPB量表評估",
//! ]);
//! ```

pub mod error;
pub mod export;
pub mod record;
pub mod screening;

mod submission;

pub use error::{IcopeError, Result};
pub use export::CsvDocument;
pub use record::{AnswerRecord, GroupedRecord, fields};
pub use screening::{ALL_CLEAR, Domain, Referral, ScreeningReport};
pub use submission::{Submission, SubmissionSummary};
