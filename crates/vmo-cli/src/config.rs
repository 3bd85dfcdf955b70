use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings for the `vmo` command. Later sources win: defaults, the config
/// file, `VMO_*` environment variables, then `--data`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// JSON list of make and model records.
    #[serde(default = "default_dataset_path")]
    pub dataset_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset_path: default_dataset_path(),
        }
    }
}

impl Config {
    /// Load the user's configuration; `dataset_path` (from `--data`) overrides
    /// whatever the file or environment says.
    pub fn load(dataset_path: Option<PathBuf>) -> Result<Self> {
        Self::load_from(&config_file_path(), dataset_path)
    }

    fn load_from(file: &Path, dataset_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Confygery::new().context("Failed to create config builder")?;
        if file.exists() {
            let file = file
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(file)
                .with_context(|| format!("Failed to load config file {file}"))?;
        }
        builder
            .add_env(env::Options::with_top_level("vmo"))
            .context("Failed to load environment variables")?;

        let mut config: Self = builder
            .build()
            .context("Failed to build configuration")?;
        if let Some(path) = dataset_path {
            config.dataset_path = path;
        }

        log::debug!("Using dataset {}", config.dataset_path.display());
        Ok(config)
    }
}

fn default_dataset_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("vmo-lookup")
        .join("vmos.json")
}

/// `config.toml` under the platform config directory.
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("vmo-lookup")
        .join("config.toml")
}

pub const EXAMPLE_CONFIG: &str = r#"# vmo-lookup configuration
# Overridden by VMO_DATASET_PATH and by `vmo --data <path>`.

# JSON list of make and model records. Run `vmo validate` after replacing it.
#dataset_path = "/path/to/vmos.json"
"#;

/// Write [`EXAMPLE_CONFIG`] to `path` unless a file is already there.
///
/// Returns whether a file was written.
pub fn write_example_config(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }
    std::fs::write(path, EXAMPLE_CONFIG).context("Failed to write config file")?;
    Ok(true)
}
