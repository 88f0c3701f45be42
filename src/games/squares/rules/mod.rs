//! Game rules for squares.
//!
//! Pure functions over a [`Board`](super::Board). Nothing here holds
//! state, so every function is safe to call from concurrent requests
//! with independent boards.

pub mod draw;
pub mod evaluate;
pub mod next_move;
pub mod square;
pub mod win;

pub use draw::is_full;
pub use evaluate::evaluate;
pub use next_move::compute_next_move;
pub use square::{has_any_square, is_square, Point};
pub use win::check_winner;
