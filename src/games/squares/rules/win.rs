//! Win detection for squares.

use super::super::{Board, Color};
use super::square::{has_any_square, Point};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Checks if some color has four tokens forming a square.
///
/// Colors are tried in their fixed order (White, then Black), so a board
/// where both colors have a square reports White. Normal play never gets
/// there because the game stops at the first square.
#[instrument(skip(board), fields(size = board.size()))]
pub fn check_winner(board: &Board) -> Option<Color> {
    for color in Color::iter() {
        let points: Vec<Point> = board
            .points_of(color)
            .into_iter()
            .map(|(x, y)| (x as i64, y as i64))
            .collect();

        if points.len() >= 4 && has_any_square(&points) {
            debug!(%color, "Winner found");
            return Some(color);
        }
    }

    None
}
