//! Square N×N board and its flat text encoding.

use super::types::{Cell, Color};
use derive_more::Display;
use tracing::{debug, instrument};

/// Smallest size that is rejected; boards must be strictly larger.
pub const MIN_EXCLUSIVE_SIZE: usize = 2;

/// A flat board string that cannot be turned into a [`Board`].
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardError {
    /// Size is 2 or less.
    #[display("size must be > {}, got {}", MIN_EXCLUSIVE_SIZE, _0)]
    SizeTooSmall(usize),

    /// `size * size` does not fit in memory addressing.
    #[display("size {} is too large", _0)]
    SizeTooLarge(usize),

    /// Data does not hold exactly `size * size` cells.
    #[display("data length mismatch: expected {} but got {}", expected, actual)]
    LengthMismatch {
        /// Expected cell count.
        expected: usize,
        /// Cells found after stripping line breaks.
        actual: usize,
    },

    /// A character that is neither an empty marker nor a color.
    #[display("unknown cell symbol {:?} at index {}", symbol, index)]
    UnknownSymbol {
        /// The offending character.
        symbol: char,
        /// Index in the stripped data.
        index: usize,
    },
}

impl std::error::Error for BoardError {}

/// Why a placement cannot happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum PlacementError {
    /// Coordinates fall outside the board.
    #[display("({}, {}) is outside the board", x, y)]
    OutOfBounds {
        /// Column.
        x: usize,
        /// Row.
        y: usize,
    },
    /// The cell already holds a token.
    #[display("({}, {}) is already occupied", x, y)]
    Occupied {
        /// Column.
        x: usize,
        /// Row.
        y: usize,
    },
}

impl std::error::Error for PlacementError {}

/// Game board, addressed `(x, y)` with `x` the column and `y` the row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    /// Cells in row-major order.
    cells: Vec<Cell>,
}

fn cell_count(size: usize) -> Result<usize, BoardError> {
    if size <= MIN_EXCLUSIVE_SIZE {
        return Err(BoardError::SizeTooSmall(size));
    }
    size.checked_mul(size).ok_or(BoardError::SizeTooLarge(size))
}

impl Board {
    /// Creates an empty board.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardError> {
        let count = cell_count(size)?;
        Ok(Self {
            size,
            cells: vec![Cell::Empty; count],
        })
    }

    /// Parses the flat encoding: `size * size` characters, row-major.
    ///
    /// Line breaks are ignored. Space and `.` are empty cells; `w` and `b`
    /// (either case) are tokens.
    #[instrument(skip(data), fields(len = data.len()))]
    pub fn parse(size: usize, data: &str) -> Result<Self, BoardError> {
        let expected = cell_count(size)?;
        let symbols: Vec<char> = data.chars().filter(|c| *c != '\n' && *c != '\r').collect();
        if symbols.len() != expected {
            debug!(expected, actual = symbols.len(), "Rejecting board data");
            return Err(BoardError::LengthMismatch {
                expected,
                actual: symbols.len(),
            });
        }

        let cells = symbols
            .into_iter()
            .enumerate()
            .map(|(index, symbol)| match symbol {
                ' ' | '.' => Ok(Cell::Empty),
                other => Color::from_marker(other)
                    .map(Cell::Occupied)
                    .ok_or(BoardError::UnknownSymbol { symbol, index }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { size, cells })
    }

    /// Canonical flat encoding: lower-case markers, space for empty.
    pub fn serialize(&self) -> String {
        self.cells
            .iter()
            .map(|cell| match cell {
                Cell::Empty => ' ',
                Cell::Occupied(color) => color.marker(),
            })
            .collect()
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `(x, y)` lies on the board.
    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        self.in_bounds(x, y).then(|| y * self.size + x)
    }

    /// Cell at `(x, y)`, `None` when out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// True only for an in-bounds empty cell.
    pub fn is_empty(&self, x: usize, y: usize) -> bool {
        matches!(self.get(x, y), Some(Cell::Empty))
    }

    /// Checks that a token could be placed at `(x, y)`.
    pub fn check_placement(&self, x: usize, y: usize) -> Result<(), PlacementError> {
        match self.get(x, y) {
            None => Err(PlacementError::OutOfBounds { x, y }),
            Some(Cell::Occupied(_)) => Err(PlacementError::Occupied { x, y }),
            Some(Cell::Empty) => Ok(()),
        }
    }

    /// Places a token. The board is untouched when the placement is refused.
    #[instrument(skip(self))]
    pub fn place(&mut self, x: usize, y: usize, color: Color) -> Result<(), PlacementError> {
        self.check_placement(x, y)?;
        let i = y * self.size + x;
        self.cells[i] = Cell::Occupied(color);
        Ok(())
    }

    /// Returns true when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// All cells in row-major order with their coordinates.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (i % self.size, i / self.size, *cell))
    }

    /// Coordinates of every token of `color`, row-major.
    pub fn points_of(&self, color: Color) -> Vec<(usize, usize)> {
        self.cells()
            .filter(|(_, _, cell)| *cell == Cell::Occupied(color))
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    /// Aligned grid with 1-based row and column labels, `.` for empty
    /// cells and upper-case color letters.
    pub fn render(&self) -> String {
        let mut result = String::from("   ");
        for x in 1..=self.size {
            result.push_str(&format!(" {:>2}", x));
        }
        result.push('\n');

        for y in 0..self.size {
            result.push_str(&format!("{:>2} ", y + 1));
            for x in 0..self.size {
                let symbol = match self.cells[y * self.size + x] {
                    Cell::Empty => '.',
                    Cell::Occupied(color) => color.symbol(),
                };
                result.push_str(&format!(" {:>2}", symbol));
            }
            result.push_str(&format!("  {:>2}\n", y + 1));
        }
        result
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
