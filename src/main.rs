//! Hangman - CLI
//!
//! Terminal hangman with a classic line mode (default) and a full-screen TUI.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{
    commands::run_classic,
    core::{GameState, MAX_LIVES, TargetWord},
    output::render_result,
};
use std::io;
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

    /// Word to guess
    #[arg(short, long, global = true, default_value = "balloons")]
    word: String,

    /// Starting lives (1-11)
    #[arg(
        short,
        long,
        global = true,
        default_value_t = MAX_LIVES,
        value_parser = clap::value_parser!(u8).range(1..=i64::from(MAX_LIVES))
    )]
    lives: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Line-based game on stdin/stdout (default)
    Classic,

    /// Full-screen terminal interface
    Tui,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let target = TargetWord::new(cli.word).context("invalid --word")?;
    let game = GameState::with_lives(target, cli.lives);

    // Default to classic mode if no command given
    let command = cli.command.unwrap_or(Commands::Classic);

    match command {
        Commands::Classic => run_classic_command(game),
        Commands::Tui => run_tui_command(game),
    }
}

/// Log to stderr, quiet unless `RUST_LOG` asks for more
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_classic_command(mut game: GameState) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_classic(&mut game, stdin.lock(), stdout.lock())?;
    Ok(())
}

fn run_tui_command(game: GameState) -> Result<()> {
    use hangman::interactive::{App, run_tui};

    let game = run_tui(App::new(game))?;

    // Leave the result on the normal screen once the alternate screen is gone
    render_result(&mut io::stdout().lock(), &game)?;
    Ok(())
}
