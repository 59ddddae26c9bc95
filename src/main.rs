//! Hangman - CLI
//!
//! Guess the word before the gallows is complete. Full-screen TUI by default,
//! or a line-based mode for plain terminals and pipes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{commands::run_simple, game::Vocabulary};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the word one letter at a time before the hangman is drawn",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default, 30 words) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for reproducible word choice
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Write logs to this file (filter with RUST_LOG, default: warn)
    #[arg(short, long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Set up logging without drawing over the TUI
///
/// Logs go to `--log-file` when given. Otherwise the simple mode logs to
/// stderr and the TUI stays silent.
fn init_tracing(log_file: Option<&Path>, tui: bool) -> Result<()> {
    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .try_init();
        }
        None if !tui => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(io::stderr)
                .try_init();
        }
        None => {}
    }
    Ok(())
}

/// Load the vocabulary based on the -w flag
fn load_vocabulary(wordlist: &str) -> Result<Vocabulary> {
    match wordlist {
        "embedded" => Ok(Vocabulary::embedded()),
        path => Vocabulary::from_file(Path::new(path))
            .with_context(|| format!("could not use word list '{path}'")),
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    let tui = matches!(command, Commands::Play);

    init_tracing(cli.log_file.as_deref(), tui)?;

    let vocabulary = load_vocabulary(&cli.wordlist)?;
    info!(
        words = vocabulary.len(),
        seeded = cli.seed.is_some(),
        "Vocabulary ready"
    );
    let mut rng = make_rng(cli.seed);

    match command {
        Commands::Play => run_play_command(&vocabulary, rng),
        Commands::Simple => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut out = io::stdout();
            run_simple(&vocabulary, &mut rng, &mut input, &mut out)?;
            Ok(())
        }
    }
}

fn run_play_command(vocabulary: &Vocabulary, rng: StdRng) -> Result<()> {
    use hangman::interactive::{App, run_tui};

    let app = App::new(vocabulary, rng);
    run_tui(app)
}
