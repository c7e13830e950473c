//! One submitted assessment and its derived artifacts.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::export::{CsvDocument, file_name_on};
use crate::record::{AnswerRecord, GroupedRecord};
use crate::screening::{self, ALL_CLEAR, ScreeningReport};

/// A completed questionnaire submission.
///
/// Owns the answer record created at submit time; everything else (report,
/// grouped view, CSV) is derived on demand and is identical on every call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    record: AnswerRecord,
}

impl Submission {
    /// Wrap a freshly collected answer record.
    pub fn new(record: AnswerRecord) -> Self {
        Self { record }
    }

    /// The underlying answers.
    pub fn record(&self) -> &AnswerRecord {
        &self.record
    }

    /// Run the six screening rules.
    pub fn evaluate(&self) -> ScreeningReport {
        screening::evaluate(&self.record)
    }

    /// The categorized display view.
    pub fn grouped(&self) -> GroupedRecord {
        GroupedRecord::from_record(&self.record)
    }

    /// Render the CSV export dated today.
    pub fn to_csv(&self) -> CsvDocument {
        CsvDocument::from_record(&self.record)
    }

    /// The export file name for an explicit date.
    pub fn export_file_name_on(&self, date: NaiveDate) -> String {
        file_name_on(&self.record, date)
    }

    /// Full summary for rendering: report, grouped view and file name.
    pub fn summarize(&self) -> SubmissionSummary {
        let report = self.evaluate();
        SubmissionSummary {
            all_clear: report.is_clear().then(|| ALL_CLEAR.to_string()),
            report,
            grouped: self.grouped(),
            export_file_name: self.to_csv().file_name().to_string(),
        }
    }
}

/// Everything the summary page needs after one submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionSummary {
    /// The screening report, referrals in rule order.
    pub report: ScreeningReport,
    /// The affirmation line, present only when no rule triggered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_clear: Option<String>,
    /// Answers grouped for display.
    pub grouped: GroupedRecord,
    /// File name the CSV download will use.
    pub export_file_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screening::Domain;

    #[test]
    fn test_summary_for_triggering_record() {
        let submission = Submission::new(AnswerRecord::from_pairs([
            ("姓名", "王小明"),
            ("需輔具？", "是"),
        ]));
        let summary = submission.summarize();

        assert!(summary.all_clear.is_none());
        assert!(summary.report.triggered(Domain::Mobility));
        assert!(summary.export_file_name.starts_with("ICOPE_問卷_王小明_"));
    }

    #[test]
    fn test_derivations_are_stable() {
        let submission = Submission::new(AnswerRecord::from_pairs([("物品1", "蘋果")]));
        assert_eq!(submission.evaluate(), submission.evaluate());

        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(
            submission.export_file_name_on(date),
            "ICOPE_問卷_未命名_2024-05-01.csv"
        );
    }
}
