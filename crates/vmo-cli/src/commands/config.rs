use anyhow::Result;

use crate::config::{self, Config};

/// Show the current effective configuration.
pub fn show_config(config: &Config) -> Result<()> {
    println!("Current Configuration");
    println!("=====================\n");

    let config_path = config::config_file_path();
    println!("Config file: {}", config_path.display());
    println!(
        "File exists: {}\n",
        if config_path.exists() {
            "yes"
        } else {
            "no (using defaults)"
        }
    );

    println!("Settings:");
    println!("  dataset_path: {}", config.dataset_path.display());
    println!(
        "  dataset exists: {}",
        if config.dataset_path.exists() { "yes" } else { "no" }
    );

    println!("\nPriority: CLI args > ENV vars (VMO_*) > Config file > Defaults");

    Ok(())
}

/// Show the config file path.
pub fn show_path() -> Result<()> {
    println!("{}", config::config_file_path().display());
    Ok(())
}

/// Show example configuration.
pub fn show_example() -> Result<()> {
    print!("{}", config::EXAMPLE_CONFIG);
    Ok(())
}

/// Initialize config file with defaults.
pub fn init_config() -> Result<()> {
    let config_path = config::config_file_path();
    if config::write_example_config(&config_path)? {
        println!("✓ Created config file at: {}", config_path.display());
        println!("\nNext steps:");
        println!("  1. Point dataset_path at your VMO dataset");
        println!("  2. Check it: vmo validate");
        println!("  3. Look something up: vmo search 0AKL");
    } else {
        println!("✓ Config file already exists at: {}", config_path.display());
    }
    Ok(())
}
