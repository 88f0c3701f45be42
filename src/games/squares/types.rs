//! Core domain types for the squares game.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Token color. A game always has exactly these two.
///
/// Iteration order (White, then Black) is the tie-break order used when
/// evaluating boards where both colors have a square.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, strum::EnumIter,
)]
pub enum Color {
    /// White tokens, marker `w`.
    #[serde(rename = "w")]
    #[display("w")]
    White,
    /// Black tokens, marker `b`.
    #[serde(rename = "b")]
    #[display("b")]
    Black,
}

impl Color {
    /// Returns the other color.
    pub fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Lower-case marker used in the flat board encoding.
    pub fn marker(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }

    /// Upper-case letter used when rendering a board for people.
    pub fn symbol(self) -> char {
        self.marker().to_ascii_uppercase()
    }

    /// Parses a single marker, case-insensitive.
    pub fn from_marker(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'w' => Some(Color::White),
            'b' => Some(Color::Black),
            _ => None,
        }
    }
}

/// A color string that names neither color.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("Unknown color: {:?}", _0)]
pub struct UnknownColor(pub String);

impl std::error::Error for UnknownColor {}

impl FromStr for Color {
    type Err = UnknownColor;

    /// Only the first non-blank character counts, so `"w"`, `"W"` and
    /// `"white"` all name [`Color::White`].
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .chars()
            .next()
            .and_then(Color::from_marker)
            .ok_or_else(|| UnknownColor(s.to_string()))
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// A token of the given color.
    Occupied(Color),
}

impl Cell {
    /// Returns the color on this cell, if any.
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(color) => Some(color),
        }
    }
}

/// Who decides a player's moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    /// Moves come from outside (keyboard, request).
    #[display("human")]
    Human,
    /// Moves come from the engine's placement rule.
    #[display("automated")]
    Automated,
}

/// A player bound to one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Player {
    /// Human player.
    #[display("{} (human)", _0)]
    Human(Color),
    /// Engine-driven player.
    #[display("{} (automated)", _0)]
    Automated(Color),
}

impl Player {
    /// Builds a player from its parts.
    pub fn new(kind: PlayerKind, color: Color) -> Self {
        match kind {
            PlayerKind::Human => Player::Human(color),
            PlayerKind::Automated => Player::Automated(color),
        }
    }

    /// The color this player places.
    pub fn color(self) -> Color {
        match self {
            Player::Human(color) | Player::Automated(color) => color,
        }
    }

    /// Whether this player is human or automated.
    pub fn kind(self) -> PlayerKind {
        match self {
            Player::Human(_) => PlayerKind::Human,
            Player::Automated(_) => PlayerKind::Automated,
        }
    }

    /// Returns true for automated players.
    pub fn is_automated(self) -> bool {
        matches!(self, Player::Automated(_))
    }
}

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No square yet and at least one empty cell.
    InProgress,
    /// The color has four tokens forming a square.
    Won(Color),
    /// Board is full and nobody has a square.
    Draw,
}

impl Outcome {
    /// Returns true once the game is decided.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Color> {
        match self {
            Outcome::Won(color) => Some(*color),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Won(color) => write!(f, "Winner: {}", color),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Lifecycle stage of a started game. A game that was never started has
/// no session and so no phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Moves are accepted.
    InProgress,
    /// The game is decided; holds the terminal outcome.
    Finished(Outcome),
}

impl From<Outcome> for Phase {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::InProgress => Phase::InProgress,
            terminal => Phase::Finished(terminal),
        }
    }
}
