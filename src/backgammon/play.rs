use std::{fmt::Display, ops::Deref};

use crate::{backgammon::Move, misc::TinyVec};

/// The ordered moves one side made during a turn. A roll grants at most
/// four moves, so it lives on the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Play {
    moves: TinyVec<Move, 4>,
}

impl Play {
    pub fn new() -> Self {
        Play { moves: TinyVec::new() }
    }

    /// Returns a copy of this play extended by `mv`.
    pub fn then(&self, mv: Move) -> Self {
        let mut play = *self;
        play.moves.push(mv);
        play
    }

    /// Same moves regardless of order.
    pub fn unordered_equal(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let mut used: u8 = 0;
        for mv in self.iter() {
            match other
                .iter()
                .enumerate()
                .position(|(i, candidate)| candidate == mv && used & (1 << i) == 0)
            {
                Some(index) => used |= 1 << index,
                None => return false,
            }
        }
        true
    }
}

impl Deref for Play {
    type Target = [Move];

    fn deref(&self) -> &Self::Target {
        &self.moves
    }
}

impl Display for Play {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, mv) in self.moves.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", mv)?;
        }
        Ok(())
    }
}
