//! Strictly Hanoi - Unified CLI
//!
//! Runs scripted matches through the same drag protocol a front end uses.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Command};
use std::time::Duration;
use strictly_hanoi::{solver, MatchConfig, PegId, PuzzleController, PuzzleEvent};
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::EnvFilter;

// Upper bound on frames spent settling one drop.
const MAX_SETTLE_FRAMES: usize = 10_000;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Solve { frame_ms } => run_solve(config, frame_ms, cli.json),
        Command::Replay { moves, frame_ms } => run_replay(config, &moves, frame_ms, cli.json),
        Command::ShowConfig => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

fn load_config(path: Option<&std::path::Path>) -> Result<MatchConfig> {
    match path {
        Some(path) => MatchConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display())),
        None => {
            debug!("No config file, using defaults");
            Ok(MatchConfig::default())
        }
    }
}

/// Play the optimal solution.
#[instrument(skip(config))]
fn run_solve(config: MatchConfig, frame_ms: u64, json: bool) -> Result<()> {
    let mut controller = PuzzleController::new(config)?;
    let Some(steps) = solver::solve(controller.board()) else {
        bail!("the solver needs at least three pegs");
    };
    info!(
        steps = steps.len(),
        minimum = solver::minimum_moves(controller.board().total_disks()),
        "Solving"
    );

    let moves: Vec<(PegId, PegId)> = steps.iter().map(|step| (step.from, step.to)).collect();
    play(&mut controller, &moves, frame_ms, json)
}

/// Replay a list of moves.
#[instrument(skip(config, moves), fields(moves = moves.len()))]
fn run_replay(config: MatchConfig, moves: &[(PegId, PegId)], frame_ms: u64, json: bool) -> Result<()> {
    let mut controller = PuzzleController::new(config)?;
    play(&mut controller, moves, frame_ms, json)
}

fn play(
    controller: &mut PuzzleController,
    moves: &[(PegId, PegId)],
    frame_ms: u64,
    json: bool,
) -> Result<()> {
    let frame = Duration::from_millis(frame_ms.max(1));

    for &(from, to) in moves {
        if controller.outcome().is_some() {
            break;
        }
        drag(controller, from, to, frame);
        emit(controller, json)?;
    }

    if !json {
        println!("{}", controller.board().display());
        println!(
            "moves: {}  remaining: {}",
            controller.board().move_count(),
            controller.clock().formatted()
        );
    }
    if controller.outcome().is_none() {
        warn!("Moves exhausted before the match ended");
    }
    Ok(())
}

// Lift the top disk of `from`, carry it over `to`, release, and let it settle.
fn drag(controller: &mut PuzzleController, from: PegId, to: PegId, frame: Duration) {
    let Some(disk) = controller.board().top_disk(from).map(|d| d.id()) else {
        warn!(%from, "No disk to lift");
        return;
    };
    let Some(start) = controller.disk_position(disk) else {
        return;
    };
    if !controller.pointer_down(disk, start, start) {
        return;
    }
    if let Some(anchor) = controller.layout().anchor(to) {
        controller.pointer_move(anchor);
    }
    controller.overlap_enter(to);
    controller.pointer_up();

    for _ in 0..MAX_SETTLE_FRAMES {
        if controller.sessions().is_empty() {
            break;
        }
        controller.tick(frame);
    }
}

fn emit(controller: &mut PuzzleController, json: bool) -> Result<()> {
    for event in controller.drain_events() {
        if json {
            println!("{}", serde_json::to_string(&event)?);
        } else if !matches!(event, PuzzleEvent::HoverChanged { .. }) {
            println!("{event}");
        }
    }
    Ok(())
}
