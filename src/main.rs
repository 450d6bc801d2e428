//! Mastermind - CLI
//!
//! Line-based and TUI front ends for the code-breaking game.

use anyhow::Result;
use clap::{Parser, Subcommand};
use mastermind::commands::{Mode, PlayConfig, run_play};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Break a secret four-colour code within twelve attempts",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Skip the mode prompt: '1' to break the code, anything else to make it
    #[arg(short, long, global = true)]
    mode: Option<String>,

    /// Seed for the secret code generator (reproducible games)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Show the secret code before the first guess
    #[arg(long, global = true)]
    reveal: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Line-based game with the classic board (default)
    Play,

    /// Full-screen board (code breaker)
    Tui,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    // Default to the line-based game if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(rng, cli.mode.as_deref(), cli.reveal),
        Commands::Tui => run_tui_command(rng, cli.reveal),
    }
}

fn run_play_command(mut rng: StdRng, mode: Option<&str>, reveal: bool) -> Result<()> {
    let config = PlayConfig {
        mode: mode.map(Mode::from_selector),
        reveal_secret: reveal,
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    run_play(&mut input, &mut output, &mut rng, config)?;
    Ok(())
}

fn run_tui_command(rng: StdRng, reveal: bool) -> Result<()> {
    use mastermind::interactive::{App, run_tui};

    let app = App::new(rng, reveal);
    run_tui(app)
}
