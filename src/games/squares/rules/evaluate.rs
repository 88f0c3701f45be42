//! Board status evaluation.

use super::super::{Board, Outcome};
use super::draw::is_full;
use super::win::check_winner;
use tracing::{debug, instrument};

/// Evaluates a board: a square wins, otherwise a full board is a draw,
/// otherwise the game goes on.
#[instrument(skip(board), fields(size = board.size()))]
pub fn evaluate(board: &Board) -> Outcome {
    let outcome = if let Some(color) = check_winner(board) {
        Outcome::Won(color)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    };

    debug!(?outcome, "Board evaluated");
    outcome
}
