//! Terminal frontend for the Orientus dungeon.

mod menu;
mod style;

use std::io;
use std::process;

use clap::{ArgAction, Parser};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use od_game::{Ending, GameConfig, GameSession};

use crate::menu::MenuPrompt;

#[derive(Parser)]
#[command(
    name = "orientus",
    about = "Dungeons of Lord Object Orientus: a tiny turn-based text adventure",
    version
)]
struct Cli {
    /// RNG seed for reproducible combat (default: random)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,

    /// Log more to stderr (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = run(cli.seed) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .init();
}

fn run(seed: Option<u64>) -> Result<(), String> {
    let mut config = GameConfig::default();
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    let mut session =
        GameSession::new(config).map_err(|e| format!("failed to start game: {e}"))?;
    let mut prompt = MenuPrompt::new(io::stdin().lock(), io::stdout());

    let ending = session.run(&mut prompt, |line| println!("{}", style::paint(line)));
    tracing::info!(?ending, "session finished");

    if ending == Ending::Defeat {
        println!("{}", style::hint("Better luck next time."));
    }
    Ok(())
}
