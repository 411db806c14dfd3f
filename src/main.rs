use anyhow::Result;
use busy::commands::{check, fmt, parse, resolve};
use busy::config::{BusyConfig, OutputFormat};
use busy::logging::init_logging;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "busy")]
#[command(about = "Parse, check and format BUSY v2 documents", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a config file (default: ./busy.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a document and print it
    Parse {
        /// Path to the document
        file: PathBuf,

        /// Output format: summary, json or yaml (default from config, else summary)
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// Validate documents, exiting non-zero if any fails
    Check {
        /// Paths to the documents
        #[arg(required = true, num_args = 1..)]
        files: Vec<PathBuf>,
    },

    /// Resolve a document's imports recursively
    Resolve {
        /// Path to the document
        file: PathBuf,
    },

    /// Re-serialize a document in canonical layout
    Fmt {
        /// Path to the document
        file: PathBuf,

        /// Write the result back to the file instead of printing it
        #[arg(short, long)]
        write: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = BusyConfig::load(cli.config.as_deref())?;
    init_logging(cli.verbose, &config)?;

    match cli.command {
        Commands::Parse { file, format } => {
            parse::execute(&file, format.unwrap_or(config.output.format))
        }
        Commands::Check { files } => check::execute(&files),
        Commands::Resolve { file } => resolve::execute(&file),
        Commands::Fmt { file, write } => fmt::execute(&file, write),
    }
}
