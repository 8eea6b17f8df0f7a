mod cli;

use std::fmt::Display;

use backgammon_rules::{
    Game, GameOutcome, Player, RulesError, enumerate_distinct_outcomes, enumerate_outcomes_par,
};
use clap::Parser;
use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

fn main() -> Result<(), RulesError> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut stats = Stats::default();
    for game_number in 1..=cli.games {
        let (outcome, turns) = play_game(&cli, &mut rng)?;
        info!(game = game_number, turns, ?outcome, "game finished");
        stats.record(outcome);
    }
    println!("{}", stats);
    Ok(())
}

/// Plays one game with both sides picking uniformly among their legal moves.
fn play_game<R: Rng>(cli: &Cli, rng: &mut R) -> Result<(GameOutcome, u32), RulesError> {
    let mut game = Game::new(cli.first.into());
    let mut turns = 0;

    while !game.is_over() {
        turns += 1;
        let dice = game.roll(rng)?;
        let player = game.turn();

        if cli.hints {
            let ways = enumerate_outcomes_par(game.board()).len();
            let positions = enumerate_distinct_outcomes(game.board()).len();
            info!(turn = turns, %player, %dice, ways, positions, "turn options");
        }

        while let Some(&mv) = game.legal_moves().choose(rng) {
            debug!(%player, %mv, "playing");
            game.play(mv)?;
            if game.is_over() {
                break;
            }
        }
        if game.is_over() {
            break;
        }

        game.end_turn()?;
        if cli.show_board {
            println!("=========================================================");
            println!("{} rolled {}", player, dice);
            println!("{}", game.board());
        }
    }
    Ok((game.outcome(), turns))
}

#[derive(Debug, Default)]
struct Stats {
    games: u32,
    wins: [u32; 2],
    gammons: [u32; 2],
    backgammons: [u32; 2],
}

impl Stats {
    fn record(&mut self, outcome: GameOutcome) {
        let side = |player: Player| match player {
            Player::Black => 0,
            Player::White => 1,
        };
        self.games += 1;
        match outcome {
            GameOutcome::Ongoing => {}
            GameOutcome::Win(player) => self.wins[side(player)] += 1,
            GameOutcome::Gammon(player) => self.gammons[side(player)] += 1,
            GameOutcome::Backgammon(player) => self.backgammons[side(player)] += 1,
        }
    }

    fn total_wins(&self, side: usize) -> u32 {
        self.wins[side] + self.gammons[side] + self.backgammons[side]
    }

    fn rate(&self, count: u32) -> f32 {
        if self.games == 0 {
            0.0
        } else {
            count as f32 / self.games as f32 * 100.0
        }
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "============================================")?;
        writeln!(f, "Games: {}", self.games)?;
        for (side, name) in [(0, "Black"), (1, "White")] {
            let wins = self.total_wins(side);
            writeln!(
                f,
                "{} Wins: {}, Winrate: {:.2}%, Gammons: {}, Backgammons: {}",
                name,
                wins,
                self.rate(wins),
                self.gammons[side],
                self.backgammons[side],
            )?;
        }
        write!(f, "============================================")
    }
}
