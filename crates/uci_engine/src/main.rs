use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use classical_engine::{
    move_to_uci, set_position_from_uci, ChessPosition, ClassicalEngine, Difficulty, EngineConfig,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(version, about = "UCI chess engine: fixed-depth alpha-beta search")]
struct Args {
    /// TOML engine config (difficulty, depth)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Difficulty preset: easy, medium or hard
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Search depth in plies; overrides the difficulty preset
    #[arg(long, value_parser = clap::value_parser!(i32).range(1..))]
    depth: Option<i32>,
}

fn main() -> Result<()> {
    // stdout carries the UCI protocol; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if let Some(difficulty) = args.difficulty {
        config.difficulty = difficulty;
    }
    if args.depth.is_some() {
        config.depth = args.depth;
    }
    config.validate().context("invalid engine config")?;

    let mut engine = ClassicalEngine::with_config(config);
    info!(depth = engine.depth(), "engine ready");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run(&mut engine, stdin.lock(), &mut stdout)
}

fn run(engine: &mut ClassicalEngine, input: impl BufRead, out: &mut impl Write) -> Result<()> {
    let mut pos = ChessPosition::startpos();

    for line in input.lines() {
        let line = line.context("reading stdin")?;
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, rest)) = parts.split_first() else {
            continue;
        };

        match command {
            "uci" => {
                writeln!(out, "id name {}", engine.name())?;
                writeln!(out, "id author {}", engine.author())?;
                writeln!(
                    out,
                    "option name Depth type spin default {} min 1 max 8",
                    engine.depth()
                )?;
                writeln!(out, "uciok")?;
            }
            "isready" => writeln!(out, "readyok")?,
            "setoption" => set_option(engine, rest),
            "ucinewgame" => {
                engine.new_game();
                pos = ChessPosition::startpos();
            }
            "position" => match set_position_from_uci(rest) {
                Ok(next) => pos = next,
                Err(err) => warn!(error = %err, "ignoring position command"),
            },
            "go" => {
                // Time controls are ignored; the search runs to fixed depth.
                let result = match engine.search(&pos) {
                    Ok(result) => result,
                    Err(err) => {
                        warn!(error = %err, "search failed");
                        writeln!(out, "bestmove 0000")?;
                        out.flush()?;
                        continue;
                    }
                };
                info!(
                    depth = result.depth,
                    nodes = result.nodes,
                    score = result.best_score,
                    "search finished"
                );
                let centipawns = (result.best_score * 100.0).round() as i64;
                writeln!(
                    out,
                    "info depth {} score cp {} nodes {}",
                    result.depth, centipawns, result.nodes
                )?;
                match result.best_move {
                    Some(mv) => writeln!(out, "bestmove {}", move_to_uci(&pos, mv))?,
                    None => writeln!(out, "bestmove 0000")?,
                }
            }
            "quit" => break,
            _ => {}
        }
        out.flush()?;
    }
    Ok(())
}

/// `setoption name Depth value N`
fn set_option(engine: &mut ClassicalEngine, args: &[&str]) {
    let name = args
        .iter()
        .position(|&t| t == "name")
        .and_then(|i| args.get(i + 1));
    let value = args
        .iter()
        .position(|&t| t == "value")
        .and_then(|i| args.get(i + 1));

    match (name, value) {
        (Some(&"Depth"), Some(v)) => match v.parse::<i32>() {
            Ok(depth) => engine.set_depth(depth.clamp(1, 8)),
            Err(_) => warn!(value = %v, "Depth must be an integer"),
        },
        _ => warn!(?args, "unsupported option"),
    }
}
