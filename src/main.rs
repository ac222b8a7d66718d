//! Spellbee - CLI
//!
//! Terminal spelling bee with four game modes, optional spoken words, and a
//! persisted score ranking.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use spellbee::catalog::Catalog;
use spellbee::console::{Console, Narrator};
use spellbee::scores::{DEFAULT_SCORE_FILE, ScoreStore};
use spellbee::session::Session;

#[derive(Parser)]
#[command(
    name = "spellbee",
    about = "Terminal spelling practice game with four modes and score rankings",
    version,
    author
)]
struct Cli {
    /// Ranking file location
    #[arg(short = 'f', long, default_value = DEFAULT_SCORE_FILE)]
    score_file: PathBuf,

    /// Disable spoken words even if a speech engine is installed
    #[arg(long)]
    no_speech: bool,

    /// Time Attack session length in seconds
    #[arg(short, long, default_value_t = 30)]
    duration: u64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr and stay quiet unless RUST_LOG asks for them, so
    // they never mix into the game screens.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let narrator = if cli.no_speech {
        Narrator::Silent
    } else {
        Narrator::detect()
    };

    let catalog = Catalog::embedded();
    let console = Console::new(narrator);
    let store = ScoreStore::new(cli.score_file);

    let mut session = Session::new(
        &catalog,
        console,
        store,
        Duration::from_secs(cli.duration),
    );
    session.run();

    Ok(())
}
