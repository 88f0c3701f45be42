//! Moves and the errors raised when sequencing them.
//!
//! A move is a domain event: which color goes where. It can be
//! validated against a board before anything is mutated.

use super::board::{BoardError, PlacementError};
use super::types::{Color, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A placement of `color` at zero-based `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Column.
    pub x: usize,
    /// Row.
    pub y: usize,
    /// Color placed.
    pub color: Color,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(x: usize, y: usize, color: Color) -> Self {
        Self { x, y, color }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> ({}, {})", self.color, self.x, self.y)
    }
}

/// A game that cannot be set up as requested.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ConfigurationError {
    /// The board size is unusable.
    #[display("{}", _0)]
    BoardSize(BoardError),

    /// Both players asked for the same color.
    #[display("players must have different colors, both chose {}", _0)]
    DuplicateColor(Color),
}

impl std::error::Error for ConfigurationError {}

/// Error raised by the turn orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// Game cannot start with this size or these players.
    #[display("Invalid configuration: {}", _0)]
    InvalidConfiguration(ConfigurationError),

    /// Target cell is off the board or taken.
    #[display("Illegal move: {}", _0)]
    IllegalMove(PlacementError),

    /// The player to move is not human.
    #[display("It's not a human player's turn, {} is to move", _0)]
    WrongTurn(Player),

    /// The game is already decided.
    #[display("Game is already over")]
    GameOver,

    /// Move generation gave nothing while the board was still in progress.
    #[display("Engine invariant violation: {}", _0)]
    EngineInvariantViolation(String),
}

impl std::error::Error for GameError {}

impl GameError {
    /// Errors after which the session can keep going unchanged.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, GameError::EngineInvariantViolation(_))
    }
}
