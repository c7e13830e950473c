//! Categorized display view of an answer record.
//!
//! The summary page splits answers into basic demographics, two checkbox
//! groups and the remaining assessment fields. Grouping is display-only and
//! never feeds back into the screening rules.

use serde::{Deserialize, Serialize};

use super::answers::AnswerRecord;
use super::fields;

/// Placeholder shown for fields with no answer.
const BLANK: &str = "-";

/// A labelled answer for display; `None` renders as `-`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldValue {
    pub label: String,
    pub value: Option<String>,
}

impl FieldValue {
    /// The display text for this field.
    pub fn display(&self) -> &str {
        self.value.as_deref().filter(|v| !v.is_empty()).unwrap_or(BLANK)
    }
}

/// A checkbox group: which options were ticked, plus the free-text detail.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckedGroup {
    /// Checked option labels with the group prefix stripped.
    pub checked: Vec<String>,
    /// The accompanying free-text detail, when filled in.
    pub detail: Option<String>,
}

impl CheckedGroup {
    fn collect(record: &AnswerRecord, members: &[&str], prefix: &str, detail_field: &str) -> Self {
        let checked = members
            .iter()
            .filter(|&&f| f != detail_field && record.answer_is(f, fields::CHECKED))
            .map(|f| f.trim_start_matches(prefix).to_string())
            .collect();
        let detail = record
            .get(detail_field)
            .filter(|v| !v.is_empty())
            .map(String::from);
        Self { checked, detail }
    }

    /// Joined display line: checked labels separated by `、`, detail appended
    /// in full-width parentheses, `-` when nothing was entered.
    pub fn summary(&self) -> String {
        let mut out = self.checked.join("、");
        if let Some(detail) = &self.detail {
            out.push_str(&format!("（{}）", detail));
        }
        if out.is_empty() {
            out.push_str(BLANK);
        }
        out
    }
}

/// The answer record split into its display sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupedRecord {
    /// Every basic demographic field, answered or not.
    pub basic: Vec<FieldValue>,
    /// Chronic-condition history.
    pub chronic: CheckedGroup,
    /// Reasons for not registering on the LINE service.
    pub unregistered: CheckedGroup,
    /// Remaining answered fields (the assessment itself), in record order.
    pub assessment: Vec<FieldValue>,
}

impl GroupedRecord {
    /// Categorize a record into its display sections.
    pub fn from_record(record: &AnswerRecord) -> Self {
        let basic = fields::BASIC_FIELDS
            .iter()
            .map(|&label| FieldValue {
                label: label.to_string(),
                value: record.get(label).map(String::from),
            })
            .collect();

        let chronic = CheckedGroup::collect(
            record,
            &fields::CHRONIC_FIELDS,
            fields::CHRONIC_PREFIX,
            fields::CHRONIC_DETAIL,
        );
        let unregistered = CheckedGroup::collect(
            record,
            &fields::UNREGISTERED_FIELDS,
            fields::UNREGISTERED_PREFIX,
            fields::UNREGISTERED_DETAIL,
        );

        let assessment = record
            .iter()
            .filter(|(label, _)| {
                !fields::BASIC_FIELDS.contains(label)
                    && !fields::CHRONIC_FIELDS.contains(label)
                    && !fields::UNREGISTERED_FIELDS.contains(label)
            })
            .map(|(label, value)| FieldValue {
                label: label.to_string(),
                value: Some(value.to_string()),
            })
            .collect();

        Self {
            basic,
            chronic,
            unregistered,
            assessment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_fields_always_listed() {
        let record = AnswerRecord::from_pairs([("姓名", "王小明")]);
        let grouped = GroupedRecord::from_record(&record);

        assert_eq!(grouped.basic.len(), fields::BASIC_FIELDS.len());
        assert_eq!(grouped.basic[0].display(), "王小明");
        assert_eq!(grouped.basic[1].display(), "-");
    }

    #[test]
    fn test_chronic_summary_joins_checked() {
        let record = AnswerRecord::from_pairs([
            ("慢性疾病_高血壓", "on"),
            ("慢性疾病_糖尿病", "on"),
        ]);
        let grouped = GroupedRecord::from_record(&record);
        assert_eq!(grouped.chronic.summary(), "高血壓、糖尿病");
    }

    #[test]
    fn test_chronic_detail_appended() {
        let record = AnswerRecord::from_pairs([
            ("慢性疾病_其他", "on"),
            ("慢性疾病_其他詳情", "痛風"),
        ]);
        let grouped = GroupedRecord::from_record(&record);
        assert_eq!(grouped.chronic.summary(), "其他（痛風）");
    }

    #[test]
    fn test_detail_shown_even_without_checkbox() {
        // Matches the summary page: the detail text renders whether or not
        // the "other" box itself was ticked.
        let record = AnswerRecord::from_pairs([("未註冊_其他詳情", "看不懂")]);
        let grouped = GroupedRecord::from_record(&record);
        assert_eq!(grouped.unregistered.summary(), "（看不懂）");
    }

    #[test]
    fn test_empty_group_renders_dash() {
        let record = AnswerRecord::new();
        let grouped = GroupedRecord::from_record(&record);
        assert_eq!(grouped.chronic.summary(), "-");
        assert_eq!(grouped.unregistered.summary(), "-");
    }

    #[test]
    fn test_assessment_is_the_residual_group() {
        let record = AnswerRecord::from_pairs([
            ("姓名", "王小明"),
            ("慢性疾病_高血壓", "on"),
            ("物品1", "鉛筆"),
            ("需輔具？", "否"),
        ]);
        let grouped = GroupedRecord::from_record(&record);

        let labels: Vec<&str> = grouped.assessment.iter().map(|f| f.label.as_str()).collect();
        assert_eq!(labels, vec!["物品1", "需輔具？"]);
    }
}
