//! figsearch: find lines and squares of set cells in a bitmap file.
//!
//! `test` only validates the file; the other commands print the start and
//! end cell of the figure found (`r1 c1 r2 c2`), or `Not found` for a blank
//! bitmap. Any rejected bitmap prints `Invalid` on stderr and exits 1.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use figsearch::core::types::Mode;
use figsearch::exit_codes;
use figsearch::format::OutputFormat;
use figsearch::io::config::{FigsearchConfig, load_config};
use figsearch::logging;
use figsearch::query::{answer_file, check_file};

const VALID: &str = "Valid";
const INVALID: &str = "Invalid";

#[derive(Parser)]
#[command(
    name = "figsearch",
    version,
    about = "Search a bitmap for its longest lines and largest squares"
)]
struct Cli {
    /// Result rendering; overrides the config file.
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// TOML config file.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check for valid input.
    Test { file: PathBuf },
    /// Search for the longest horizontal line.
    Hline { file: PathBuf },
    /// Search for the longest vertical line.
    Vline { file: PathBuf },
    /// Search for the largest square with every cell set.
    Square { file: PathBuf },
    /// Search for the largest square with every border cell set.
    Frame { file: PathBuf },
}

fn main() {
    logging::init();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version are not failures.
            let code = if err.use_stderr() {
                exit_codes::USAGE
            } else {
                exit_codes::OK
            };
            let _ = err.print();
            std::process::exit(code);
        }
    };
    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => FigsearchConfig::default(),
    };
    let output = cli.format.unwrap_or(config.format);
    let code = match cli.command {
        Command::Test { file } => cmd_test(&file, &config),
        Command::Hline { file } => cmd_search(&file, Mode::HLine, &config, output)?,
        Command::Vline { file } => cmd_search(&file, Mode::VLine, &config, output)?,
        Command::Square { file } => cmd_search(&file, Mode::Square, &config, output)?,
        Command::Frame { file } => cmd_search(&file, Mode::Frame, &config, output)?,
    };
    Ok(code)
}

fn cmd_test(file: &Path, config: &FigsearchConfig) -> i32 {
    match check_file(file, config.max_cells) {
        Ok(()) => {
            println!("{VALID}");
            exit_codes::OK
        }
        Err(err) => {
            debug!(error = %err, "bitmap rejected");
            eprintln!("{INVALID}");
            exit_codes::INVALID
        }
    }
}

fn cmd_search(
    file: &Path,
    mode: Mode,
    config: &FigsearchConfig,
    output: OutputFormat,
) -> Result<i32> {
    let answer = match answer_file(file, mode, config.max_cells) {
        Ok(answer) => answer,
        Err(err) => {
            debug!(error = %err, mode = mode.name(), "bitmap rejected");
            eprintln!("{INVALID}");
            return Ok(exit_codes::INVALID);
        }
    };
    println!("{}", answer.render(output)?);
    Ok(exit_codes::OK)
}
