//! Core Connect Four rules: board, players, turn tracking, win detection, and
//! the `Game` aggregate that ties them together.

mod board;
mod player;
mod shared;
mod state;
mod turn;
mod win;

pub use board::{Board, Cell};
pub use player::{Mark, PlayerId, Registry};
pub use shared::SharedGame;
pub use state::{Game, Move, Phase, StatusView};
pub use turn::TurnState;
pub use win::{Outcome, WinDetector};
