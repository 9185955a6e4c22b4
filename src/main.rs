//! Kelime - CLI
//!
//! Turkish word guessing game with a TUI and line-oriented commands.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kelime::{
    commands::{define_word, evaluate_guess, run_simple},
    core::{Alphabet, Mode},
    game::{Game, GameConfig},
    input::InputRouter,
    output::print_evaluation,
    wordsource::SourceKind,
};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "kelime",
    about = "Türkçe kelime tahmin oyunu (Wordle benzeri)",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Mode: classic (5 letters, default), hard7 (7 letters), easy (5 letters, one revealed)
    #[arg(short, long, global = true, default_value = "classic")]
    mode: Mode,

    /// Word source: 'tdk' (default, sozluk.gov.tr), 'offline' (built-in list), or path to file
    #[arg(short, long, global = true, default_value = "tdk")]
    source: SourceKind,

    /// Alphabet: 'turkish' (default), 'latin', or the letters themselves
    #[arg(short, long, global = true, default_value = "turkish")]
    alphabet: Alphabet,

    /// Seconds to wait for each dictionary request
    #[arg(long, global = true, default_value = "15")]
    timeout: u64,

    /// Write logs to this file (the TUI logs nowhere otherwise)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Line-oriented game without TUI
    Simple,

    /// Score a guess against a target word
    Evaluate {
        /// The hidden word
        target: String,

        /// The guess to score
        guess: String,
    },

    /// Look up the meaning of a word
    Define {
        /// Word to look up
        word: String,
    },
}

/// Install the tracing subscriber
///
/// `RUST_LOG` overrides the default `info` level. With a log file everything
/// goes there; otherwise stderr is used unless the TUI owns the terminal.
fn init_logging(log_file: Option<&Path>, tui: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Cannot create log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None if tui => {}
        None => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_logging(cli.log_file.as_deref(), matches!(command, Commands::Play))?;

    let alphabet = cli.alphabet;
    let timeout = Duration::from_secs(cli.timeout);

    match command {
        Commands::Evaluate { target, guess } => run_evaluate_command(&target, &guess, &alphabet),
        Commands::Define { word } => run_define_command(&cli.source, &word, timeout).await,
        Commands::Play => {
            let (game, router) = build_game(&cli.source, cli.mode, alphabet, timeout)?;
            run_play_command(game, router).await
        }
        Commands::Simple => {
            let (game, router) = build_game(&cli.source, cli.mode, alphabet, timeout)?;
            run_simple(game, router).await
        }
    }
}

fn build_game(
    source: &SourceKind,
    mode: Mode,
    alphabet: Alphabet,
    timeout: Duration,
) -> Result<(Game, InputRouter)> {
    let config = GameConfig {
        mode,
        alphabet: alphabet.clone(),
        timeout,
    };
    let word_source = source.open(timeout)?;
    info!(%source, %mode, "starting");
    Ok((Game::new(config, word_source), InputRouter::new(alphabet)))
}

fn run_evaluate_command(target: &str, guess: &str, alphabet: &Alphabet) -> Result<()> {
    let result = evaluate_guess(target, guess, alphabet).map_err(|e| anyhow::anyhow!(e))?;
    print_evaluation(&result.target, &result.guess, &result.feedback);
    Ok(())
}

async fn run_define_command(source: &SourceKind, word: &str, timeout: Duration) -> Result<()> {
    let source = source.open(timeout)?;
    println!("{}", define_word(source.as_ref(), word, timeout).await);
    Ok(())
}

async fn run_play_command(game: Game, router: InputRouter) -> Result<()> {
    use kelime::interactive::{App, run_tui};

    let app = App::new(game, router);
    run_tui(app).await
}
