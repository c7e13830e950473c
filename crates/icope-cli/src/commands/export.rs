//! Export command - write the CSV document for a saved answer file.

use std::path::PathBuf;

use colored::Colorize;
use icope::{AnswerRecord, CsvDocument};

pub fn run(
    file: PathBuf,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("Answers file not found: {}", file.display()).into());
    }

    let record = AnswerRecord::from_json_file(&file)?;
    if verbose {
        println!("Loaded {} answers from {}", record.len(), file.display());
    }

    // Default to the directory the answers live in.
    let out_dir = output.unwrap_or_else(|| {
        file.parent()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
    });

    let doc = CsvDocument::from_record(&record);
    let path = doc.write_to(&out_dir)?;

    println!(
        "{} {} ({} fields)",
        "Exported".cyan().bold(),
        path.display().to_string().white().bold(),
        record.len()
    );

    Ok(())
}
