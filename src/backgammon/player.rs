use std::fmt::Display;

/// The two sides. Black (side A) owns the positive point counts and moves
/// towards index 23, White (side B) owns the negative counts and moves
/// towards index 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Player {
    Black,
    White,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::Black, Player::White];

    pub fn opposite(&self) -> Player {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// Signed unit of one pip of movement. Also the sign of this side's
    /// point counts.
    pub fn direction(&self) -> i8 {
        match self {
            Player::Black => 1,
            Player::White => -1,
        }
    }

    /// Point where a jailed checker re-enters with `die` (1..=6).
    pub fn entry_point(&self, die: u8) -> u8 {
        match self {
            Player::Black => die - 1,
            Player::White => 24 - die,
        }
    }

    /// Pips a checker on `point` still has to travel to be borne off.
    pub fn pip_distance(&self, point: u8) -> u8 {
        match self {
            Player::Black => 24 - point,
            Player::White => point + 1,
        }
    }

    /// Inverse of [`Self::pip_distance`].
    pub fn point_at_distance(&self, distance: u8) -> u8 {
        match self {
            Player::Black => 24 - distance,
            Player::White => distance - 1,
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Player::Black => 0,
            Player::White => 1,
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Black => write!(f, "black"),
            Player::White => write!(f, "white"),
        }
    }
}
