use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod config;

use config::Config;

#[derive(Debug, Parser)]
#[command(name = "vmo", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the VMO dataset (default: ~/.local/share/vmo-lookup/vmos.json)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Look up a VMO code or name
    ///
    /// Matches records whose code starts with the query or whose search terms
    /// contain it, case-insensitively. Results are ranked:
    ///
    /// - Exact code matches first (makes before models)
    /// - Then codes starting with the query
    /// - Then records with a word starting with the query
    /// - Then shorter codes, then alphabetically by description
    ///
    /// At most 75 results are shown.
    Search {
        /// Code or name to look up (multiple words are joined with spaces)
        #[arg(required = true)]
        query: Vec<String>,

        /// Print matching records as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Read queries from stdin, one per line, and print results for each
    ///
    /// Enter an empty line to clear, `:q` or end-of-file to quit.
    Interactive,
    /// Check that every record in a dataset file is well formed
    Validate {
        /// Dataset to check (default: the configured dataset)
        path: Option<PathBuf>,
    },
    /// List model codes shared by more than one make
    Duplicates,
    /// Show record counts for the dataset
    Stats,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the current effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Print an example config file
    Example,
    /// Create the config file with defaults
    Init,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load(cli.data)?;

    match cli.command {
        Commands::Search { query, json } => {
            commands::run_search(&config.dataset_path, &query.join(" "), json)?;
        }
        Commands::Interactive => {
            commands::run_interactive(&config.dataset_path)?;
        }
        Commands::Validate { path } => {
            let path = path.unwrap_or(config.dataset_path);
            if !commands::run_validate(&path)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Duplicates => {
            commands::show_duplicates(&config.dataset_path)?;
        }
        Commands::Stats => {
            commands::show_stats(&config.dataset_path)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show_config(&config)?,
            ConfigAction::Path => commands::config::show_path()?,
            ConfigAction::Example => commands::config::show_example()?,
            ConfigAction::Init => commands::config::init_config()?,
        },
    }

    Ok(ExitCode::SUCCESS)
}
