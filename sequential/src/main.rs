use anyhow::Result;
use clap::Parser;
use common::Config;
use sequential::{init_logger, run};
use std::{io, path::PathBuf};
use tracing::Level;

/// Counts words in a text file, skipping common stop words, and lists the most
/// frequent ones and the first few in alphabetical order.
#[derive(Parser, Debug)]
struct Cli {
    /// Text file to analyze
    #[arg(env = "TEXT_ANALYSIS_FILE")]
    file: PathBuf,
    /// How many of the most frequent words to list
    #[arg(short = 'k', long, env = "TEXT_ANALYSIS_TOP_K", default_value_t = 5)]
    top_k: usize,
    /// How many unique words to list alphabetically
    #[arg(short = 'n', long, env = "TEXT_ANALYSIS_UNIQUE", default_value_t = 50)]
    unique: usize,
    #[arg(long, env = "TEXT_ANALYSIS_LOG_LEVEL", default_value_t = Level::WARN)]
    log_level: Level,
    /// Write logs to a file in this directory instead of stderr
    #[arg(long, env = "TEXT_ANALYSIS_LOG_DIR")]
    log_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = init_logger(cli.log_level, cli.log_dir.as_deref());

    let config = Config {
        top_k: cli.top_k,
        unique: cli.unique,
    };
    run(&cli.file, config, &mut io::stdout().lock())?;
    Ok(())
}
