use tracing::{debug, instrument};

use crate::{
    backgammon::{Board, Move, Position},
    error::RulesError,
};

impl Board {
    /// Returns the board after `mv`, or [`RulesError::IllegalMove`] if `mv`
    /// is not one of [`Board::legal_moves`]. The turn does not change.
    #[instrument(level = "trace", skip_all, fields(mv = %mv))]
    pub fn apply_move(&self, mv: Move) -> Result<Board, RulesError> {
        if !self.legal_moves().contains(&mv) {
            debug!("rejected illegal move");
            return Err(RulesError::IllegalMove(mv));
        }
        let mut board = *self;
        board.make_move_unchecked(&mv);
        Ok(board)
    }

    /// Applies a move without checking it against the legal moves.
    /// Only use this with moves produced by [`Board::legal_moves`] for this
    /// very board, anything else can break the checker counts.
    pub fn make_move_unchecked(&mut self, mv: &Move) {
        let Some(player) = self.turn() else {
            panic!("Cannot move with nobody on turn");
        };
        let direction = player.direction();

        self.dice_mut().use_die(mv.used_die);

        match mv.from {
            Position::Point(from) => self.points_mut()[from as usize] -= direction,
            Position::Jail(side) => self.jail_mut()[side.index()] -= 1,
            Position::Home(_) => panic!("Cannot move from home"),
        }
        match mv.to {
            Position::Point(to) if self.point(to) == -direction => {
                self.points_mut()[to as usize] = direction;
                self.jail_mut()[player.opposite().index()] += 1;
            }
            Position::Point(to) => self.points_mut()[to as usize] += direction,
            Position::Home(side) => self.home_mut()[side.index()] += 1,
            Position::Jail(_) => panic!("Cannot move into jail"),
        }
    }
}
