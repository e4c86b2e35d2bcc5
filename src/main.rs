use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

use food_facts_cleaner::{logging, CleanerConfig, CleanerError, Pipeline};

#[derive(Parser)]
#[command(name = "food_facts_cleaner")]
#[command(about = "Filter and clean the Open Food Facts snack extract")]
#[command(version = "0.1.0")]
struct Cli {
    /// TOML file overriding the built-in paths and column lists
    #[arg(long)]
    config: Option<PathBuf>,
    /// Source CSV file
    #[arg(long)]
    input: Option<PathBuf>,
    /// Destination CSV file
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<ExitCode> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let mut config = CleanerConfig::load(cli.config.as_deref())?;
    if let Some(input) = cli.input {
        config.input_path = input;
    }
    if let Some(output) = cli.output {
        config.output_path = output;
    }

    let _log_guard = logging::init_logging(config.log_dir.as_deref());

    let input_path = config.input_path.clone();
    match Pipeline::new(config).run() {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(e @ CleanerError::MissingColumns { .. }) => {
            error!("Column selection failed: {}", e);
            println!(
                "Error loading columns. Check the column names in your CSV file. Details: {}",
                e
            );
            Ok(ExitCode::FAILURE)
        }
        Err(CleanerError::FileNotFound(_)) => {
            error!("Input file not found");
            println!(
                "Error: The file '{}' was not found. Please ensure the file is accessible.",
                input_path.display()
            );
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}
