use std::fmt::Display;

use crate::{backgammon::{Dice, Player}, error::RulesError};

pub const POINTS: usize = 24;
pub const CHECKERS_PER_SIDE: u8 = 15;
/// Points in each side's home quadrant, also the largest die value.
pub const HOME_QUADRANT: u8 = 6;

/// A backgammon position together with the state of the current turn.
///
/// Point counts are signed: positive values are Black checkers, negative
/// values White checkers. Boards are plain values, every transition
/// returns a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    points: [i8; POINTS],
    jail: [u8; 2],
    home: [u8; 2],
    turn: Option<Player>,
    dice: Dice,
}

impl Board {
    pub const START: [i8; POINTS] = [
        2, 0, 0, 0, 0, -5,
        0, -3, 0, 0, 0, 5,
        -5, 0, 0, 0, 3, 0,
        5, 0, 0, 0, 0, -2,
    ];

    /// The standard starting position. Nobody is on turn yet.
    pub fn start() -> Self {
        Board::from_points(Self::START)
    }

    /// Creates an empty board with no checkers on it.
    pub fn empty() -> Self {
        Board::from_points([0; POINTS])
    }

    pub fn from_points(points: [i8; POINTS]) -> Self {
        Board {
            points,
            jail: [0, 0],
            home: [0, 0],
            turn: None,
            dice: Dice::none(),
        }
    }

    pub fn with_turn(mut self, player: Player) -> Self {
        self.turn = Some(player);
        self
    }

    pub fn with_dice(mut self, dice: Dice) -> Self {
        self.dice = dice;
        self
    }

    pub fn with_jail(mut self, player: Player, count: u8) -> Self {
        self.jail[player.index()] = count;
        self
    }

    pub fn with_home(mut self, player: Player, count: u8) -> Self {
        self.home[player.index()] = count;
        self
    }

    pub fn points(&self) -> &[i8; POINTS] {
        &self.points
    }

    /// Signed checker count on a point.
    pub fn point(&self, index: u8) -> i8 {
        self.points[index as usize]
    }

    pub fn jail(&self, player: Player) -> u8 {
        self.jail[player.index()]
    }

    pub fn home(&self, player: Player) -> u8 {
        self.home[player.index()]
    }

    pub fn turn(&self) -> Option<Player> {
        self.turn
    }

    pub fn dice(&self) -> &Dice {
        &self.dice
    }

    pub(super) fn points_mut(&mut self) -> &mut [i8; POINTS] {
        &mut self.points
    }

    pub(super) fn jail_mut(&mut self) -> &mut [u8; 2] {
        &mut self.jail
    }

    pub(super) fn home_mut(&mut self) -> &mut [u8; 2] {
        &mut self.home
    }

    pub(super) fn dice_mut(&mut self) -> &mut Dice {
        &mut self.dice
    }

    pub fn owner(&self, index: u8) -> Option<Player> {
        match self.point(index) {
            0 => None,
            n if n > 0 => Some(Player::Black),
            _ => Some(Player::White),
        }
    }

    /// Number of `player`'s checkers on a point.
    pub fn count_for(&self, player: Player, index: u8) -> u8 {
        (self.point(index) * player.direction()).max(0) as u8
    }

    /// Two or more opposing checkers hold the point.
    pub fn is_blocked_for(&self, player: Player, index: u8) -> bool {
        self.count_for(player.opposite(), index) >= 2
    }

    pub fn checkers_on_board(&self, player: Player) -> u16 {
        (0..POINTS as u8).map(|i| self.count_for(player, i) as u16).sum()
    }

    /// Checkers on the board, in jail and borne off. 15 on a sound board.
    pub fn checker_total(&self, player: Player) -> u16 {
        self.checkers_on_board(player) + self.jail(player) as u16 + self.home(player) as u16
    }

    /// Pip distance of `player`'s checker furthest from bearing off.
    /// Jailed checkers are not counted.
    pub fn furthest_distance(&self, player: Player) -> Option<u8> {
        (0..POINTS as u8)
            .filter(|&i| self.count_for(player, i) > 0)
            .map(|i| player.pip_distance(i))
            .max()
    }

    pub fn winner(&self) -> Option<Player> {
        Player::ALL.into_iter().find(|&p| self.home(p) == CHECKERS_PER_SIDE)
    }

    /// Passes the turn to the other side with no dice rolled yet.
    /// A board with nobody on turn is returned unchanged.
    pub fn end_turn(&self) -> Board {
        let mut board = *self;
        board.turn = self.turn.map(|p| p.opposite());
        board.dice = Dice::none();
        board
    }

    /// Checks that every side has exactly 15 checkers and counters are in range.
    pub fn validate(&self) -> Result<(), RulesError> {
        for player in Player::ALL {
            if self.home(player) > CHECKERS_PER_SIDE {
                return Err(RulesError::InvalidBoard(format!(
                    "{} has {} checkers home",
                    player,
                    self.home(player)
                )));
            }
            let total = self.checker_total(player);
            if total != CHECKERS_PER_SIDE as u16 {
                return Err(RulesError::InvalidBoard(format!(
                    "{} has {} checkers, expected {}",
                    player, total, CHECKERS_PER_SIDE
                )));
            }
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::start()
    }
}

impl Board {
    fn write_row(
        &self,
        f: &mut std::fmt::Formatter<'_>,
        indices: impl Iterator<Item = usize>,
    ) -> std::fmt::Result {
        let cells: Vec<String> = indices.map(|i| format!("{:3}", self.points[i])).collect();
        writeln!(f, "{} |   | {}", cells[..6].join(" "), cells[6..].join(" "))
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, " 11  10   9   8   7   6 |   |   5   4   3   2   1   0")?;
        self.write_row(f, (0..12).rev())?;
        writeln!(f, "{}", "=".repeat(55))?;
        self.write_row(f, 12..24)?;
        writeln!(f, " 12  13  14  15  16  17 |   |  18  19  20  21  22  23")?;
        write!(
            f,
            "jail b:{} w:{}  home b:{} w:{}  turn: {}  dice: {}",
            self.jail(Player::Black),
            self.jail(Player::White),
            self.home(Player::Black),
            self.home(Player::White),
            self.turn.map_or("-".to_string(), |p| p.to_string()),
            self.dice,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_is_sound() {
        let board = Board::start();
        assert_eq!(board.validate(), Ok(()));
        for player in Player::ALL {
            assert_eq!(board.checker_total(player), 15);
        }
        assert_eq!(board.turn(), None);
        assert!(board.dice().is_empty());
        assert_eq!(board.furthest_distance(Player::Black), Some(24));
        assert_eq!(board.furthest_distance(Player::White), Some(24));
    }

    #[test]
    fn validate_rejects_miscounted_sides() {
        let board = Board::start().with_jail(Player::White, 1);
        assert!(matches!(board.validate(), Err(RulesError::InvalidBoard(_))));
        assert!(matches!(Board::empty().validate(), Err(RulesError::InvalidBoard(_))));
    }

    #[test]
    fn blocked_and_counts_follow_sign() {
        let board = Board::start();
        assert!(board.is_blocked_for(Player::White, 0));
        assert!(!board.is_blocked_for(Player::Black, 0));
        assert!(board.is_blocked_for(Player::Black, 5));
        assert_eq!(board.count_for(Player::White, 5), 5);
        assert_eq!(board.count_for(Player::Black, 5), 0);
        assert_eq!(board.owner(23), Some(Player::White));
        assert_eq!(board.owner(1), None);
    }

    #[test]
    fn end_turn_passes_turn_and_clears_dice() {
        let board = Board::start()
            .with_turn(Player::Black)
            .with_dice(Dice::from_roll(3, 1))
            .end_turn();
        assert_eq!(board.turn(), Some(Player::White));
        assert!(board.dice().is_empty());
        assert_eq!(board.points(), &Board::START);
    }

    #[test]
    fn winner_needs_fifteen_home() {
        let board = Board::empty().with_home(Player::White, 15).with_home(Player::Black, 3);
        assert_eq!(board.winner(), Some(Player::White));
        assert_eq!(Board::start().winner(), None);
    }

    #[test]
    fn display_lists_counters() {
        let text = Board::start().with_turn(Player::Black).to_string();
        assert!(text.contains("turn: black"));
        assert!(text.contains("jail b:0 w:0"));
    }
}
