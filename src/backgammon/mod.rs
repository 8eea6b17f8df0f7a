mod board;
pub use board::{Board, CHECKERS_PER_SIDE, HOME_QUADRANT, POINTS};

mod movegen;

mod apply;

mod player;
pub use player::Player;

mod position;
pub use position::Position;

mod outcome;
pub use outcome::Outcome;

mod checker_move;
pub use checker_move::Move;

mod play;
pub use play::Play;

mod dice;
pub use dice::Dice;
