//! Error type shared by the rules engine and the game driver.

use crate::backgammon::{Move, Player};

/// Errors raised when a caller breaks a rule of the engine or of turn
/// sequencing. Move generation itself never fails.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum RulesError {
    /// The move is not among the legal moves of the position.
    #[display("Illegal move: {}", _0)]
    IllegalMove(Move),

    /// A die value outside 1..=6.
    #[display("Invalid die value {}", _0)]
    InvalidDie(u8),

    /// More than the four dice a double grants.
    #[display("Too many dice: {} (at most 4)", _0)]
    TooManyDice(usize),

    /// The board breaks a structural invariant.
    #[display("Invalid board: {}", _0)]
    InvalidBoard(String),

    /// No side is on turn yet.
    #[display("No side is on turn")]
    NoTurn,

    /// Dice must be rolled before moving.
    #[display("No dice rolled")]
    NoDice,

    /// A new roll was requested while dice are still unused.
    #[display("Dice are still in play")]
    DiceRemaining,

    /// The turn cannot end while a legal move exists.
    #[display("Legal moves remain")]
    MovesRemaining,

    /// The game has already been won.
    #[display("Game is over, {} won", _0)]
    GameOver(Player),
}

impl std::error::Error for RulesError {}
