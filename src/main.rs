use anyhow::{Context, Result};
use tracing::info;

use rulebook_core::STARTING_FEN;
use rulebook_engine::Engine;

/// Parameters for one driver run.
struct RunConfig {
    /// Perft depth for the divide listing.
    depth: usize,
    /// Position to analyse.
    fen: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            fen: STARTING_FEN.to_string(),
        }
    }
}

impl RunConfig {
    /// Build from positional arguments: `[DEPTH] [FEN...]`.
    fn from_args(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let mut config = RunConfig::default();
        if let Some(depth) = args.next() {
            config.depth = depth
                .parse()
                .with_context(|| format!("invalid depth: {depth}"))?;
        }
        let rest: Vec<String> = args.collect();
        if !rest.is_empty() {
            config.fen = rest.join(" ");
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = RunConfig::from_args(std::env::args().skip(1))?;
    let engine = Engine::from_fen(&config.fen)
        .with_context(|| format!("invalid FEN: {}", config.fen))?;
    info!(depth = config.depth, fen = %engine.fen(), "rulebook starting");

    println!("{}", engine.board().pretty());
    println!("{} to move: {}", engine.side_to_move(), engine.status());
    println!();

    let mut total = 0u64;
    for (from, to, nodes) in engine.divide(config.depth) {
        println!("{from}{to}: {nodes}");
        total += nodes;
    }
    println!();
    println!("Nodes searched: {total}");
    Ok(())
}
