use anyhow::{Context, Result};
use std::path::Path;
use vmo_core::validate::validate_file;

/// Validate a dataset file, printing every issue.
///
/// Returns `false` when the dataset has issues.
pub fn run_validate(path: &Path) -> Result<bool> {
    let report = validate_file(path)
        .with_context(|| format!("Failed to read dataset {}", path.display()))?;

    println!("Loaded {} items from {}.", report.total, path.display());

    for issue in &report.issues {
        eprintln!("{issue}");
    }

    if report.is_ok() {
        println!("✓ All items have correct types.");
        Ok(true)
    } else {
        println!(
            "✗ Found {} errors in {} items.",
            report.issue_count(),
            report.invalid_records()
        );
        Ok(false)
    }
}
