use crate::backgammon::{Board, Play};

/// One way a turn can end: the final board and the moves that led there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Outcome {
    pub board: Board,
    pub play: Play,
}
