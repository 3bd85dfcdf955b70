use anyhow::Result;
use std::path::Path;
use vmo_core::audit::duplicate_codes;

use super::load_dataset;

const MAX_LISTED: usize = 20;

/// List model codes that repeat across different makes.
pub fn show_duplicates(dataset_path: &Path) -> Result<()> {
    let dataset = load_dataset(dataset_path)?;
    let duplicates = duplicate_codes(&dataset);

    if duplicates.is_empty() {
        println!("No duplicate codes found across different makes.");
        return Ok(());
    }

    println!(
        "Found {} codes that repeat across different makes:",
        duplicates.len()
    );
    for duplicate in duplicates.iter().take(MAX_LISTED) {
        println!(
            "  Code '{}' appears in: {}",
            duplicate.code,
            duplicate.makes.join(", ")
        );
    }
    if duplicates.len() > MAX_LISTED {
        println!("  ...and {} more.", duplicates.len() - MAX_LISTED);
    }

    Ok(())
}

/// Show record counts for the dataset.
pub fn show_stats(dataset_path: &Path) -> Result<()> {
    let dataset = load_dataset(dataset_path)?;
    let stats = dataset.stats();

    println!("\nVMO Dataset\n");
    println!("  File:   {}", dataset_path.display());
    println!("  Makes:  {}", stats.makes);
    println!("  Models: {}", stats.models);
    println!("  Total:  {}", stats.total());

    Ok(())
}
