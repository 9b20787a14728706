//! Command-line interface for strictly_hanoi.

use clap::{Parser, Subcommand};
use strictly_hanoi::PegId;

/// Strictly Hanoi - timed disk-stacking puzzle engine
#[derive(Parser, Debug)]
#[command(name = "strictly_hanoi")]
#[command(about = "Drive the stacking puzzle engine from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a match configuration file (defaults when omitted)
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Print events as JSON lines
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play the optimal solution through the drag protocol
    Solve {
        /// Frame length in milliseconds
        #[arg(long, default_value = "16")]
        frame_ms: u64,
    },

    /// Replay a list of moves such as `A:C B:C`
    Replay {
        /// Moves as `FROM:TO` peg labels or indices
        #[arg(required = true, value_parser = parse_move)]
        moves: Vec<(PegId, PegId)>,

        /// Frame length in milliseconds
        #[arg(long, default_value = "16")]
        frame_ms: u64,
    },

    /// Print the effective configuration as TOML
    ShowConfig,
}

/// Parses `FROM:TO` (also accepts `-` or `>` as separator).
pub fn parse_move(text: &str) -> Result<(PegId, PegId), String> {
    let (from, to) = text
        .split_once([':', '-', '>'])
        .ok_or_else(|| format!("expected FROM:TO, got {text:?}"))?;
    let peg = |label: &str| {
        PegId::from_label(label).ok_or_else(|| format!("unknown peg {label:?}"))
    };
    Ok((peg(from)?, peg(to)?))
}
