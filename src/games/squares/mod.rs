//! Square-forming board game: board, rules and turn orchestration.

mod action;
mod board;
mod game;
mod types;

pub mod rules;

pub use action::{ConfigurationError, GameError, Move};
pub use board::{Board, BoardError, PlacementError};
pub use game::GameSession;
pub use rules::{compute_next_move, evaluate};
pub use types::{Cell, Color, Outcome, Phase, Player, PlayerKind, UnknownColor};
