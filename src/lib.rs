//! Squares library - rules engine and shells for the square-forming game
//!
//! Two players take turns placing tokens on an N×N board. Whoever first
//! has four tokens on the corners of a square (axis-aligned or tilted)
//! wins; a full board with no square is a draw.
//!
//! # Architecture
//!
//! - **Board**: bounds-checked grid with a flat text encoding
//! - **Rules**: pure `evaluate` and `compute_next_move` over a board
//! - **Session**: turn orchestration for one live game, human or automated players
//! - **Repl**: line-oriented command interpreter holding one session
//! - **Server**: stateless HTTP endpoints plus static front-end files
//!
//! # Example
//!
//! ```
//! use squares::{Color, GameSession, Outcome, Player};
//!
//! # fn example() -> Result<(), squares::GameError> {
//! let mut game = GameSession::start(
//!     4,
//!     Player::Human(Color::White),
//!     Player::Automated(Color::Black),
//! )?;
//!
//! // The automated reply is played before control comes back.
//! let placed = game.submit_human_move(0, 0)?;
//! assert_eq!(placed.len(), 2);
//! assert_eq!(game.outcome(), Outcome::InProgress);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod repl;
mod server;

// Crate-level exports - Configuration
pub use config::{ConfigError, ServerConfig};

// Crate-level exports - Command interpreter
pub use repl::{Command, CommandError, Flow, Repl, run_repl};

// Crate-level exports - HTTP transport
pub use server::{BoardRequest, MoveResponse, StatusResponse, router, serve};

// Crate-level exports - Game types
pub use games::squares::{
    Board, BoardError, Cell, Color, ConfigurationError, GameError, GameSession, Move,
    Outcome, Phase, PlacementError, Player, PlayerKind, UnknownColor, compute_next_move, evaluate,
};

/// Geometry and status rules, for callers that want the pieces.
pub mod rules {
    pub use crate::games::squares::rules::*;
}
