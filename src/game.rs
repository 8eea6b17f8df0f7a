//! Turn sequencing on top of the rules engine: rolling, playing moves,
//! passing the turn and deciding when and how the game is won.

use rand::Rng;
use tracing::{debug, info, instrument};

use crate::{
    backgammon::{Board, Dice, HOME_QUADRANT, Move, Outcome, Player},
    engine::enumerate_outcomes,
    error::RulesError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Ongoing,
    Win(Player),
    /// The loser has not borne off a single checker.
    Gammon(Player),
    /// A gammon where the loser still has a checker in jail or in the
    /// winner's home quadrant.
    Backgammon(Player),
}

impl GameOutcome {
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameOutcome::Ongoing => None,
            GameOutcome::Win(player) | GameOutcome::Gammon(player) | GameOutcome::Backgammon(player) => {
                Some(*player)
            }
        }
    }

    /// Points the win is worth.
    pub fn value(&self) -> u8 {
        match self {
            GameOutcome::Ongoing => 0,
            GameOutcome::Win(_) => 1,
            GameOutcome::Gammon(_) => 2,
            GameOutcome::Backgammon(_) => 3,
        }
    }
}

/// Owns the current board and enforces the order of a turn:
/// roll, play until no legal move is left, end the turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
}

impl Game {
    /// Standard starting position with `first` on turn and no dice yet.
    pub fn new(first: Player) -> Self {
        Game { board: Board::start().with_turn(first) }
    }

    /// Continues from an arbitrary position, which has to hold 15 checkers
    /// per side and have a side on turn.
    pub fn from_board(board: Board) -> Result<Self, RulesError> {
        board.validate()?;
        if board.turn().is_none() {
            return Err(RulesError::NoTurn);
        }
        Ok(Game { board })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side on turn. Always set once the game is constructed.
    pub fn turn(&self) -> Player {
        match self.board.turn() {
            Some(player) => player,
            None => unreachable!("a game always has a side on turn"),
        }
    }

    fn ensure_ongoing(&self) -> Result<(), RulesError> {
        match self.board.winner() {
            Some(player) => Err(RulesError::GameOver(player)),
            None => Ok(()),
        }
    }

    /// Rolls two dice for the side on turn.
    pub fn roll<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Dice, RulesError> {
        let dice = Dice::roll(rng);
        self.set_dice(dice)?;
        Ok(dice)
    }

    /// Uses dice rolled elsewhere. Only allowed once the previous dice are
    /// spent or the turn was passed.
    #[instrument(level = "debug", skip_all, fields(turn = %self.turn(), dice = %dice))]
    pub fn set_dice(&mut self, dice: Dice) -> Result<(), RulesError> {
        self.ensure_ongoing()?;
        if !self.board.dice().is_empty() {
            return Err(RulesError::DiceRemaining);
        }
        self.board = self.board.with_dice(dice);
        debug!(moves = self.legal_moves().len(), "dice set");
        Ok(())
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        self.board.legal_moves()
    }

    /// Every way the current turn can still be played out.
    pub fn turn_outcomes(&self) -> Vec<Outcome> {
        enumerate_outcomes(&self.board)
    }

    #[instrument(level = "debug", skip_all, fields(turn = %self.turn(), mv = %mv))]
    pub fn play(&mut self, mv: Move) -> Result<(), RulesError> {
        self.ensure_ongoing()?;
        if self.board.dice().is_empty() {
            return Err(RulesError::NoDice);
        }
        self.board = self.board.apply_move(mv)?;
        if let Some(winner) = self.outcome().winner() {
            info!(%winner, outcome = ?self.outcome(), "game over");
        }
        Ok(())
    }

    /// Passes the turn once no legal move is left, dropping unusable dice.
    /// Returns the side now on turn.
    pub fn end_turn(&mut self) -> Result<Player, RulesError> {
        self.ensure_ongoing()?;
        if !self.legal_moves().is_empty() {
            return Err(RulesError::MovesRemaining);
        }
        let unused = *self.board.dice();
        self.board = self.board.end_turn();
        debug!(%unused, next = %self.turn(), "turn ended");
        Ok(self.turn())
    }

    pub fn outcome(&self) -> GameOutcome {
        let Some(winner) = self.board.winner() else {
            return GameOutcome::Ongoing;
        };
        let loser = winner.opposite();
        if self.board.home(loser) > 0 {
            return GameOutcome::Win(winner);
        }
        let loser_in_winners_home = (1..=HOME_QUADRANT)
            .map(|distance| winner.point_at_distance(distance))
            .any(|point| self.board.count_for(loser, point) > 0);
        if self.board.jail(loser) > 0 || loser_in_winners_home {
            GameOutcome::Backgammon(winner)
        } else {
            GameOutcome::Gammon(winner)
        }
    }

    pub fn is_over(&self) -> bool {
        self.board.winner().is_some()
    }
}
