use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use envelope_ledger::cli::Interpreter;
use envelope_ledger::config::{LedgerPaths, Settings};
use envelope_ledger::logging::init_tracing;

#[derive(Parser)]
#[command(
    name = "envelope-ledger",
    author = "Kaylee Beyene",
    version,
    about = "Envelope budgeting ledger",
    long_about = "Tracks money held in accounts, money assigned to spending \
                  categories, and the deposits, assignments and spends that \
                  move it around."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a command script against a fresh budget
    Run {
        /// Path to the script, or "-" for stdin
        file: PathBuf,
    },

    /// Read commands interactively from stdin
    Shell,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    init_tracing(&settings.log_filter);

    match cli.command {
        Some(Commands::Run { file }) => {
            let source = if file.as_os_str() == "-" {
                io::read_to_string(io::stdin()).context("Failed to read script from stdin")?
            } else {
                std::fs::read_to_string(&file)
                    .with_context(|| format!("Failed to read script {}", file.display()))?
            };

            let mut interpreter = Interpreter::new(&settings);
            let stdout = io::stdout();
            let mut out = stdout.lock();
            interpreter.run_script(&source, &mut out)?;
            out.flush()?;
        }
        Some(Commands::Shell) => {
            let mut interpreter = Interpreter::new(&settings);
            let stdin = io::stdin();
            interpreter.run_shell(stdin.lock(), &mut io::stdout(), &mut io::stderr())?;
        }
        Some(Commands::Config) => {
            println!("Envelope Ledger Configuration");
            println!("=============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:            {}", settings.currency_symbol);
            println!(
                "  Allow overspent categories: {}",
                settings.allow_overspent_categories
            );
            println!("  Log filter:                 {}", settings.log_filter);
        }
        None => {
            println!("envelope-ledger - envelope budgeting from the command line");
            println!();
            println!("Run 'envelope-ledger --help' for usage information.");
            println!("Run 'envelope-ledger shell' to enter commands interactively.");
        }
    }

    Ok(())
}
