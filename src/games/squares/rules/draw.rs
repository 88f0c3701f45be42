//! Draw detection for squares.

use super::super::Board;
use tracing::instrument;

/// Checks if the board has no empty cell left.
///
/// A full board with no winner is a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

#[cfg(test)]
mod tests {
    use super::super::win::check_winner;
    use super::*;
    use crate::games::squares::Color;

    fn is_draw(board: &Board) -> bool {
        is_full(board) && check_winner(board).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new(3).unwrap();
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_full_board_without_square_is_draw() {
        let board = Board::parse(4, "wwwwwbwbbbwbbwbb").unwrap();
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_square_is_not_draw() {
        let mut board = Board::parse(3, "wbwbwbwb.").unwrap();
        board.place(2, 2, Color::White).unwrap();
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
