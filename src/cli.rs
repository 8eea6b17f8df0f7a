//! Command line arguments of the self-play runner.

use backgammon_rules::Player;
use clap::{Parser, ValueEnum};

/// Plays random games on the backgammon rules engine and reports results.
#[derive(Debug, Parser)]
#[command(name = "backgammon-rules", version)]
pub struct Cli {
    /// Number of games to play.
    #[arg(short, long, default_value_t = 10)]
    pub games: u32,

    /// Seed for dice and move choice. Taken from the OS when absent.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Side that opens every game.
    #[arg(long, value_enum, default_value_t = Side::Black)]
    pub first: Side,

    /// Print the board after every turn.
    #[arg(long)]
    pub show_board: bool,

    /// Log how many ways each turn could have been played.
    #[arg(long)]
    pub hints: bool,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Side {
    Black,
    White,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::Black => Player::Black,
            Side::White => Player::White,
        }
    }
}
