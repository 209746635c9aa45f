mod commands;
mod input;
mod output;
mod store;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;
use std::process;

use commands::catalog::{AddArgs, ImportArgs, LoadFileArgs, SearchArgs};
use commands::economics::{EconomicsArgs, ExportArgs};

/// Unit-economics calculator and commission catalog for marketplace sellers
#[derive(Parser)]
#[command(
    name = "secon",
    version,
    about = "Unit-economics calculator and commission catalog for marketplace sellers",
    long_about = "Calculates per-unit and aggregate profitability for marketplace \
                  products under three simplified-taxation scenarios, and maintains \
                  a searchable product → commission catalog fed from bundled data, \
                  imports, and user-added records."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Directory holding the persisted catalog layers and bundled data
    #[arg(long, default_value = ".seller-econ", global = true)]
    data_dir: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate per-unit and aggregate economics
    Economics(EconomicsArgs),
    /// Serialize a calculation snapshot with formatted results
    Export(ExportArgs),
    /// Search the merged catalog by name or category substring
    Search(SearchArgs),
    /// Add a product to the user catalog layer
    Add(AddArgs),
    /// Import products from a JSON or delimited payload
    Import(ImportArgs),
    /// Replace the external catalog layer from a file
    LoadFile(LoadFileArgs),
    /// Print the merged catalog
    Catalog,
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Economics(args) => commands::economics::run_economics(args),
        Commands::Export(args) => commands::economics::run_export(args),
        Commands::Search(args) => commands::catalog::run_search(args, &cli.data_dir),
        Commands::Add(args) => commands::catalog::run_add(args, &cli.data_dir),
        Commands::Import(args) => commands::catalog::run_import(args, &cli.data_dir),
        Commands::LoadFile(args) => commands::catalog::run_load_file(args, &cli.data_dir),
        Commands::Catalog => commands::catalog::run_catalog(&cli.data_dir),
        Commands::Version => {
            println!("secon {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
