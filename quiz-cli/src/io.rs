//! File I/O for the native CLI

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use quiz_core::{QuizDocument, QuizReport, QuizSession};

/// Load and validate a quiz JSON file.
pub fn load_quiz(path: &str) -> Result<QuizDocument> {
    let path = Path::new(path);
    let canonical = path
        .canonicalize()
        .with_context(|| format!("Failed to resolve path: {}", path.display()))?;

    let json = fs::read_to_string(&canonical)
        .with_context(|| format!("Failed to read file: {}", canonical.display()))?;

    quiz_core::load::from_json(&json)
        .with_context(|| format!("Invalid quiz file: {}", canonical.display()))
}

/// Get the ~/.quiz directory path, creating it if needed
pub fn quiz_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not find home directory")?;
    let quiz_dir = home.join(".quiz");

    if !quiz_dir.exists() {
        fs::create_dir_all(&quiz_dir)
            .with_context(|| format!("Failed to create {}", quiz_dir.display()))?;
    }

    Ok(quiz_dir)
}

/// Export the session's report to ~/.quiz/report.json
pub fn export_report(session: &QuizSession) -> Result<PathBuf> {
    let quiz_dir = quiz_dir()?;
    let export_path = quiz_dir.join("report.json");

    let report = QuizReport::from(session);
    let json = quiz_core::to_json(&report).context("Failed to serialize report")?;

    fs::write(&export_path, json)
        .with_context(|| format!("Failed to write {}", export_path.display()))?;

    Ok(export_path)
}
