use std::fmt::Display;

use crate::backgammon::Position;

/// A single checker move consuming one die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Position,
    pub to: Position,
    pub used_die: u8,
}

impl Move {
    pub fn new(from: Position, to: Position, used_die: u8) -> Self {
        Move { from, to, used_die }
    }

    pub fn is_bear_off(&self) -> bool {
        matches!(self.to, Position::Home(_))
    }

    pub fn is_entry(&self) -> bool {
        matches!(self.from, Position::Jail(_))
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} ({})", self.from, self.to, self.used_die)
    }
}
