use std::fmt::Display;

use crate::backgammon::Player;

/// One end of a checker move: a point on the board, a side's jail
/// (only ever a move origin) or a side's home (only ever a destination).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Point(u8),
    Jail(Player),
    Home(Player),
}

impl Position {
    pub fn point(&self) -> Option<u8> {
        match self {
            Position::Point(index) => Some(*index),
            _ => None,
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Position::Point(index) => write!(f, "{}", index),
            Position::Jail(player) => write!(f, "{}-jail", player),
            Position::Home(player) => write!(f, "{}-home", player),
        }
    }
}
