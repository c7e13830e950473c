//! End-to-end tests over a realistic submission.

use icope::{ALL_CLEAR, AnswerRecord, Domain, Submission};
use chrono::NaiveDate;

/// A filled-in questionnaire as the collector form would submit it, in form
/// order: demographics first, then the assessment sections.
fn full_submission() -> AnswerRecord {
    AnswerRecord::from_pairs([
        ("姓名", "林阿嬤"),
        ("身分證統一編號", "A123456789"),
        ("性別", "女"),
        ("生日_年", "1940"),
        ("生日_月", "3"),
        ("生日_日", "15"),
        ("具原住民身分", "否"),
        ("電話", "02-12345678"),
        ("手機號碼", "0912345678"),
        ("縣市", "臺北市"),
        ("鄉鎮市區", "大安區"),
        ("村里", "龍安里"),
        ("詳細地址", "和平東路二段1號"),
        ("慢性疾病_高血壓", "on"),
        ("慢性疾病_糖尿病", "on"),
        ("LINE註冊個人代碼", "LINE123"),
        ("未註冊_其他", "on"),
        ("未註冊_其他詳情", "家人代管手機"),
        ("今天的日期（年/月/日）", "2024/05/01"),
        ("現在在哪裡？", "社區活動中心"),
        ("物品1", "鉛筆"),
        ("物品2", "汽車"),
        ("物品3", "書"),
        ("椅子起身測試秒數", "14.5"),
        ("需輔具？", "否"),
        ("您的體重是否在無意中減輕了3公斤以上？", "否"),
        ("您是否曾經食慾不振？", "是"),
        ("您的眼睛看遠、看近或閱讀是否有困難？", "否"),
        ("WHO簡單視力「遠、近距離」測試", "通過"),
        ("高風險個案之眼科檢查調查表", "通過"),
        ("長者是否兩耳都聽得到？", "是"),
        ("您是否常感到煩悶（心煩或台語「阿雜」），或沒有希望？", "否"),
        ("您是否減少很多的活動和興趣的事？", "否"),
    ])
}

#[test]
fn test_report_matches_answers() {
    let submission = Submission::new(full_submission());
    let report = submission.evaluate();

    // Slow chair stand and reduced appetite, nothing else.
    let domains: Vec<Domain> = report.referrals.iter().map(|r| r.domain).collect();
    assert_eq!(domains, vec![Domain::Mobility, Domain::Nutrition]);
    assert_eq!(
        report.recommendations(),
        vec!["請進行SPPB量表評估", "請進行MNA-SF量表評估"]
    );
}

#[test]
fn test_grouped_view() {
    let submission = Submission::new(full_submission());
    let grouped = submission.grouped();

    assert_eq!(grouped.basic[0].display(), "林阿嬤");
    assert_eq!(grouped.chronic.summary(), "高血壓、糖尿病");
    assert_eq!(grouped.unregistered.summary(), "其他（家人代管手機）");

    // Assessment fields keep submission order and exclude the other groups.
    let first_assessment = grouped.assessment.first().unwrap();
    assert_eq!(first_assessment.label, "今天的日期（年/月/日）");
}

#[test]
fn test_csv_export_round_trip() {
    let submission = Submission::new(full_submission());
    let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    let doc = icope::CsvDocument::from_record_on(submission.record(), date);

    assert_eq!(doc.file_name(), "ICOPE_問卷_林阿嬤_2024-05-01.csv");
    assert!(doc.text().starts_with('\u{FEFF}'));

    // The quoted data row parses back to the original values.
    let body = doc.text().trim_start_matches('\u{FEFF}');
    let mut reader = csv::ReaderBuilder::new().from_reader(body.as_bytes());
    let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    let expected_headers: Vec<String> =
        submission.record().labels().map(String::from).collect();
    assert_eq!(headers, expected_headers);

    let row = reader.records().next().unwrap().unwrap();
    for ((_, value), cell) in submission.record().iter().zip(row.iter()) {
        assert_eq!(cell, value);
    }
    assert!(reader.records().next().is_none());
}

#[test]
fn test_all_clear_summary() {
    let mut pairs: Vec<(String, String)> = full_submission()
        .iter()
        .map(|(l, v)| (l.to_string(), v.to_string()))
        .collect();
    for (label, value) in &mut pairs {
        if label == "椅子起身測試秒數" {
            *value = "9".to_string();
        }
        if label == "您是否曾經食慾不振？" {
            *value = "否".to_string();
        }
    }

    let submission = Submission::new(AnswerRecord::from_pairs(pairs));
    let summary = submission.summarize();

    assert!(summary.report.is_clear());
    assert_eq!(summary.all_clear.as_deref(), Some(ALL_CLEAR));
}

#[test]
fn test_summary_serializes_to_json() {
    let submission = Submission::new(full_submission());
    let json = serde_json::to_value(submission.summarize()).unwrap();

    assert!(json["report"]["referrals"].is_array());
    assert_eq!(
        json["export_file_name"],
        format!(
            "ICOPE_問卷_林阿嬤_{}.csv",
            chrono::Local::now().date_naive().format("%Y-%m-%d")
        )
    );
}
