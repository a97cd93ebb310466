mod board;
mod dice;
mod game_state;
mod player;

pub use board::{Board, BoardError, ColorGroup, Square, SquareIndex, SquareKind};
pub use dice::{DiceRng, DiceRoll, GameRng};
pub use game_state::GameState;
pub use player::{Player, PlayerNum, Players, STARTING_MONEY};
