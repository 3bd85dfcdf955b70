pub mod audit;
pub mod config;
pub mod search;
pub mod validate;

use anyhow::{Context, Result};
use std::path::Path;
use vmo_core::Dataset;

pub use audit::{show_duplicates, show_stats};
pub use search::{run_interactive, run_search};
pub use validate::run_validate;

/// Load the dataset, pointing at `vmo validate` when it is malformed.
fn load_dataset(path: &Path) -> Result<Dataset> {
    Dataset::load(path).with_context(|| {
        format!(
            "Failed to load dataset {} (run 'vmo validate' for details)",
            path.display()
        )
    })
}
