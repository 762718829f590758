//! Core Mancala game logic: the board arena, typed cell identifiers, and the
//! turn state machine with its free-turn and capture rules.

mod board;
mod cell;
mod player;
mod state;

pub use board::{Board, DEFAULT_STONES, POCKETS_PER_SIDE};
pub use cell::{Cell, CellId, PocketId, Side};
pub use player::{GameOutcome, Player};
pub use state::{GameState, TurnOutcome};
