//! Full-turn search: every way the side on turn can play out its dice.

use hashbrown::HashSet;
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use tracing::{debug, instrument};

use crate::backgammon::{Board, Outcome, Play};

type Node = (Board, Play);

enum Expansion {
    Terminal(Outcome),
    Children(Vec<Node>),
}

fn expand((board, play): Node) -> Expansion {
    let moves = board.legal_moves();
    if moves.is_empty() {
        return Expansion::Terminal(Outcome { board, play });
    }
    Expansion::Children(
        moves
            .into_iter()
            .map(|mv| {
                let mut next = board;
                next.make_move_unchecked(&mv);
                (next, play.then(mv))
            })
            .collect(),
    )
}

/// Layered breadth-first search. `expand_layer` expands a whole frontier
/// and must keep its order; `keep` decides whether a child enters the
/// next frontier.
fn breadth_first(
    board: &Board,
    expand_layer: impl Fn(Vec<Node>) -> Vec<Expansion>,
    mut keep: impl FnMut(&Board) -> bool,
) -> Vec<Outcome> {
    let mut outcomes = Vec::new();
    let mut frontier = vec![(*board, Play::new())];
    let mut depth = 0;

    while !frontier.is_empty() {
        let mut next_frontier = Vec::new();
        for expansion in expand_layer(frontier) {
            match expansion {
                // The starting board itself is never an outcome.
                Expansion::Terminal(outcome) if depth > 0 => outcomes.push(outcome),
                Expansion::Terminal(_) => {}
                Expansion::Children(children) => next_frontier.extend(
                    children.into_iter().filter(|(child, _)| keep(child)),
                ),
            }
        }
        frontier = next_frontier;
        depth += 1;
    }
    outcomes
}

/// Every board the side on turn can end its turn on, paired with the
/// moves that lead there. A turn ends when the dice are spent or no
/// legal move is left. Different move orders reaching the same board are
/// listed separately. A board without any legal move yields nothing.
#[instrument(level = "debug", skip_all, fields(turn = ?board.turn(), dice = %board.dice()))]
pub fn enumerate_outcomes(board: &Board) -> Vec<Outcome> {
    let outcomes = breadth_first(board, |frontier| frontier.into_iter().map(expand).collect(), |_| true);
    debug!(count = outcomes.len(), "enumerated turn outcomes");
    outcomes
}

/// [`enumerate_outcomes`] with every frontier layer expanded on the rayon
/// thread pool. Returns the same outcomes in the same order.
#[instrument(level = "debug", skip_all, fields(turn = ?board.turn(), dice = %board.dice()))]
pub fn enumerate_outcomes_par(board: &Board) -> Vec<Outcome> {
    let outcomes = breadth_first(
        board,
        |frontier| frontier.into_par_iter().map(expand).collect(),
        |_| true,
    );
    debug!(count = outcomes.len(), "enumerated turn outcomes");
    outcomes
}

/// Like [`enumerate_outcomes`] but transpositions are collapsed: a board
/// (points, jail, home, turn and remaining dice) reached a second time is
/// not explored again. One outcome per distinct final board, carrying the
/// first move order found.
#[instrument(level = "debug", skip_all, fields(turn = ?board.turn(), dice = %board.dice()))]
pub fn enumerate_distinct_outcomes(board: &Board) -> Vec<Outcome> {
    let mut seen: HashSet<Board> = HashSet::new();
    let outcomes = breadth_first(
        board,
        |frontier| frontier.into_iter().map(expand).collect(),
        |child| seen.insert(*child),
    );
    debug!(count = outcomes.len(), explored = seen.len(), "enumerated distinct turn outcomes");
    outcomes
}
