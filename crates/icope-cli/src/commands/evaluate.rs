//! Evaluate command - run the screening rules against a saved answer file.

use std::path::PathBuf;

use colored::Colorize;
use icope::{ALL_CLEAR, AnswerRecord, Submission};

pub fn run(file: PathBuf, json: bool, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("Answers file not found: {}", file.display()).into());
    }

    let record = AnswerRecord::from_json_file(&file)?;
    if verbose {
        println!("Loaded {} answers from {}", record.len(), file.display());
    }

    let submission = Submission::new(record);
    let summary = submission.summarize();

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("{}", "服務對象基本資料".cyan().bold());
    for field in &summary.grouped.basic {
        println!("  {}: {}", field.label, field.display());
    }
    println!("  慢性疾病史: {}", summary.grouped.chronic.summary());
    println!("  未註冊原因: {}", summary.grouped.unregistered.summary());

    println!();
    println!("{}", "ICOPE 長者功能評估量表".cyan().bold());
    for field in &summary.grouped.assessment {
        println!("  {}: {}", field.label, field.display());
    }

    println!();
    println!("{}", "建議".cyan().bold());
    if summary.report.is_clear() {
        println!("  {}", ALL_CLEAR.green().bold());
    } else {
        for referral in &summary.report.referrals {
            println!(
                "  {} {} — {}",
                "!".yellow().bold(),
                referral.domain.label(),
                referral.recommendation.yellow()
            );
        }
    }

    Ok(())
}
