use tracing::trace;

use crate::backgammon::{Board, Move, Player, Position, board::{HOME_QUADRANT, POINTS}};

impl Board {
    /// Every move the side on turn may make with one of its remaining dice.
    ///
    /// Jailed checkers must re-enter before anything else moves. Otherwise
    /// each occupied point is tried with each distinct die value, and once
    /// all checkers are in the home quadrant bear-off moves are added.
    /// Returns an empty list when no side is on turn or no dice remain.
    pub fn legal_moves(&self) -> Vec<Move> {
        let Some(player) = self.turn() else {
            return Vec::new();
        };
        if self.dice().is_empty() {
            return Vec::new();
        }
        let moves = if self.jail(player) > 0 {
            self.entry_moves(player)
        } else {
            let mut moves = self.board_moves(player);
            moves.extend(self.bear_off_moves(player));
            moves
        };
        trace!(%player, dice = %self.dice(), count = moves.len(), "generated legal moves");
        moves
    }

    fn entry_moves(&self, player: Player) -> Vec<Move> {
        self.dice()
            .unique_values()
            .iter()
            .map(|&die| (die, player.entry_point(die)))
            .filter(|&(_, entry)| !self.is_blocked_for(player, entry))
            .map(|(die, entry)| Move::new(Position::Jail(player), Position::Point(entry), die))
            .collect()
    }

    fn board_moves(&self, player: Player) -> Vec<Move> {
        let direction = player.direction();
        let dice = self.dice().unique_values();
        let mut moves = Vec::new();

        for origin in 0..POINTS as u8 {
            if self.count_for(player, origin) == 0 {
                continue;
            }
            for &die in dice.iter() {
                let target = origin as i8 + direction * die as i8;
                if !(0..POINTS as i8).contains(&target) {
                    continue;
                }
                let target = target as u8;
                if !self.is_blocked_for(player, target) {
                    moves.push(Move::new(Position::Point(origin), Position::Point(target), die));
                }
            }
        }
        moves
    }

    fn bear_off_moves(&self, player: Player) -> Vec<Move> {
        let furthest = match self.furthest_distance(player) {
            Some(distance) if distance <= HOME_QUADRANT => distance,
            _ => return Vec::new(),
        };
        let dice = self.dice();

        (1..=HOME_QUADRANT)
            .filter(|&distance| self.count_for(player, player.point_at_distance(distance)) > 0)
            .filter_map(|distance| {
                let used_die = if dice.contains(distance) {
                    distance
                } else if distance == furthest {
                    // An oversized die may only bear off the furthest checker.
                    dice.highest().filter(|&die| die > distance)?
                } else {
                    return None;
                };
                Some(Move::new(
                    Position::Point(player.point_at_distance(distance)),
                    Position::Home(player),
                    used_die,
                ))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backgammon::Dice;
    use proptest::prelude::*;
    use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};

    fn dice(values: &[u8]) -> Dice {
        Dice::from_values(values).unwrap()
    }

    const CAPTURE_BOARD: [i8; 24] = [
        2, 2, -1, -1, -2, -2,
        0, 0, 0, 0, 0, -9,
        0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 11,
    ];

    const BEAR_OFF_BOARD: [i8; 24] = [
        -15, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0,
        0, 0, 0, 5, 5, 5,
    ];

    #[test]
    fn moves_out_of_jail() {
        let board = Board::start()
            .with_turn(Player::White)
            .with_jail(Player::White, 1)
            .with_dice(dice(&[2, 6]));

        assert_eq!(
            board.legal_moves(),
            vec![Move::new(Position::Jail(Player::White), Position::Point(22), 2)]
        );
    }

    #[test]
    fn no_moves_out_of_jail_when_entry_is_blocked() {
        let board = Board::start()
            .with_turn(Player::White)
            .with_jail(Player::White, 1)
            .with_dice(dice(&[6, 6]));

        assert!(board.legal_moves().is_empty());
    }

    #[test]
    fn jailed_black_enters_from_the_low_end() {
        let board = Board::start()
            .with_turn(Player::Black)
            .with_jail(Player::Black, 2)
            .with_dice(dice(&[1, 6]));

        // Point 5 holds five white checkers.
        assert_eq!(
            board.legal_moves(),
            vec![Move::new(Position::Jail(Player::Black), Position::Point(0), 1)]
        );
    }

    #[test]
    fn duplicate_dice_enter_once() {
        let board = Board::empty()
            .with_turn(Player::Black)
            .with_jail(Player::Black, 1)
            .with_dice(dice(&[3, 3, 3, 3]));

        assert_eq!(board.legal_moves().len(), 1);
    }

    #[test]
    fn moves_around_the_board() {
        let board = Board::start().with_turn(Player::White);

        assert_eq!(board.with_dice(dice(&[5, 2])).legal_moves().len(), 6);
        assert_eq!(board.with_dice(dice(&[6, 2])).legal_moves().len(), 7);
    }

    #[test]
    fn captures_are_legal_blocks_are_not() {
        let board = Board::from_points(CAPTURE_BOARD)
            .with_turn(Player::Black)
            .with_dice(dice(&[2, 3]));
        let moves = board.legal_moves();

        assert_eq!(moves.len(), 3);
        assert!(moves.contains(&Move::new(Position::Point(0), Position::Point(3), 3)));
        assert!(moves.contains(&Move::new(Position::Point(0), Position::Point(2), 2)));
        assert!(!moves.contains(&Move::new(Position::Point(1), Position::Point(4), 3)));
    }

    #[test]
    fn moves_home() {
        let board = Board::from_points(BEAR_OFF_BOARD)
            .with_turn(Player::Black)
            .with_dice(dice(&[6, 2]));
        let moves = board.legal_moves();

        assert_eq!(moves.len(), 3);
        assert!(moves.contains(&Move::new(Position::Point(21), Position::Point(23), 2)));
        assert!(moves.contains(&Move::new(Position::Point(22), Position::Home(Player::Black), 2)));
        assert!(moves.contains(&Move::new(Position::Point(21), Position::Home(Player::Black), 6)));
    }

    #[test]
    fn oversized_die_only_bears_off_the_furthest_checker() {
        let board = Board::from_points(BEAR_OFF_BOARD)
            .with_turn(Player::Black)
            .with_dice(dice(&[6, 5]));
        let home_moves: Vec<_> = board.legal_moves().into_iter().filter(Move::is_bear_off).collect();

        // Neither die is exact, so the largest one is spent on point 21.
        assert_eq!(
            home_moves,
            vec![Move::new(Position::Point(21), Position::Home(Player::Black), 6)]
        );
    }

    #[test]
    fn oversized_bear_off_spends_the_largest_die() {
        let board = Board::from_points(BEAR_OFF_BOARD)
            .with_turn(Player::Black)
            .with_dice(dice(&[4, 6]));

        // The 4 would be enough, the 6 is used anyway.
        assert_eq!(
            board.legal_moves(),
            vec![Move::new(Position::Point(21), Position::Home(Player::Black), 6)]
        );
        let next = board.apply_move(board.legal_moves()[0]).unwrap();
        assert_eq!(next.dice().values(), &[4]);
    }

    #[test]
    fn white_bears_off_towards_index_zero() {
        let mut points = [0; 24];
        points[1] = -10;
        points[3] = -5;
        points[23] = 15;
        let board = Board::from_points(points)
            .with_turn(Player::White)
            .with_dice(dice(&[2, 5]));
        let home_moves: Vec<_> = board.legal_moves().into_iter().filter(Move::is_bear_off).collect();

        assert_eq!(
            home_moves,
            vec![
                Move::new(Position::Point(1), Position::Home(Player::White), 2),
                Move::new(Position::Point(3), Position::Home(Player::White), 5),
            ]
        );
    }

    #[test]
    fn no_bear_off_with_a_checker_outside_home() {
        let mut points = BEAR_OFF_BOARD;
        points[21] = 4;
        points[10] = 1;
        let board = Board::from_points(points)
            .with_turn(Player::Black)
            .with_dice(dice(&[1, 2]));

        assert!(board.legal_moves().iter().all(|mv| !mv.is_bear_off()));
    }

    #[test]
    fn nothing_to_do_without_dice_or_turn() {
        assert!(Board::start().with_turn(Player::Black).legal_moves().is_empty());
        assert!(Board::start().with_dice(dice(&[3, 1])).legal_moves().is_empty());
    }

    #[test]
    fn every_opening_roll_has_a_move() {
        for player in Player::ALL {
            for (die1, die2) in Dice::ALL {
                let board = Board::start()
                    .with_turn(player)
                    .with_dice(Dice::from_roll(die1, die2));
                assert!(!board.legal_moves().is_empty(), "no moves for {} {}/{}", player, die1, die2);
            }
        }
    }

    #[test]
    fn generation_is_repeatable() {
        let board = Board::from_points(CAPTURE_BOARD)
            .with_turn(Player::Black)
            .with_dice(dice(&[2, 3]));
        assert_eq!(board.legal_moves(), board.legal_moves());
    }

    /// Every position met while both sides play random moves for `turns` turns.
    fn random_positions(seed: u64, turns: usize) -> Vec<Board> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut board = Board::start().with_turn(Player::Black);
        let mut positions = Vec::new();
        for _ in 0..turns {
            if board.winner().is_some() {
                break;
            }
            board = board.with_dice(Dice::roll(&mut rng));
            positions.push(board);
            while let Some(&mv) = board.legal_moves().choose(&mut rng) {
                board = board.apply_move(mv).unwrap();
                positions.push(board);
            }
            board = board.end_turn();
        }
        positions
    }

    proptest! {
        #[test]
        fn legal_moves_respect_the_rules(seed in any::<u64>(), turns in 1usize..80) {
            for board in random_positions(seed, turns) {
                let Some(player) = board.turn() else {
                    panic!("random play always has a side on turn");
                };
                let moves = board.legal_moves();
                prop_assert_eq!(&moves, &board.legal_moves());

                if board.jail(player) > 0 {
                    prop_assert!(moves.iter().all(|mv| mv.from == Position::Jail(player)));
                }
                if board.furthest_distance(player).is_some_and(|d| d > HOME_QUADRANT) {
                    prop_assert!(moves.iter().all(|mv| !mv.is_bear_off()));
                }
                for mv in moves {
                    prop_assert!(board.dice().contains(mv.used_die));
                    let next = board.apply_move(mv).unwrap();
                    prop_assert_eq!(next.validate(), Ok(()));
                    prop_assert_eq!(next.dice().len(), board.dice().len() - 1);
                    prop_assert_eq!(next.turn(), board.turn());
                }
            }
        }
    }
}
