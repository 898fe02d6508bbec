use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use memterm::cli::Args;
use memterm::core::engine::Engine;
use memterm::games::memory::MemoryGame;

fn main() -> Result<()> {
    let args = Args::parse();

    // Off unless RUST_LOG says otherwise, so the alternate screen stays
    // clean; point stderr at a file to capture a session.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    info!(fps = args.fps, move_ms = args.move_ms, seed = args.seed, "starting memterm");
    let game = MemoryGame::new(args.fps, Duration::from_millis(args.move_ms), args.seed);

    let mut terminal = ratatui::init();
    let result = Engine::new(game).run(&mut terminal);
    ratatui::restore();
    result
}
