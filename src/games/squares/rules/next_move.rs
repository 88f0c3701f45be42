//! Move generation for the automated player.

use super::super::{Board, Cell, Color, Move, Outcome};
use super::evaluate::evaluate;
use tracing::{debug, instrument};

/// Picks the automated player's next move.
///
/// Returns `None` once the board is decided. Otherwise the move is the
/// first empty cell scanning rows top to bottom and each row left to
/// right. There is no look-ahead.
#[instrument(skip(board), fields(size = board.size(), %next_color))]
pub fn compute_next_move(board: &Board, next_color: Color) -> Option<Move> {
    if evaluate(board) != Outcome::InProgress {
        debug!("Board decided, no move");
        return None;
    }

    let chosen = board
        .cells()
        .find(|(_, _, cell)| *cell == Cell::Empty)
        .map(|(x, y, _)| Move::new(x, y, next_color));

    debug!(?chosen, "Next move computed");
    chosen
}
