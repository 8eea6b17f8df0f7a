pub mod backgammon;
pub mod engine;
pub mod error;
pub mod game;
mod misc;

pub use backgammon::{Board, Dice, Move, Outcome, Play, Player, Position};
pub use engine::{enumerate_distinct_outcomes, enumerate_outcomes, enumerate_outcomes_par};
pub use error::RulesError;
pub use game::{Game, GameOutcome};
