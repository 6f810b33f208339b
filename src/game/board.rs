use std::fmt;

use super::player::Mark;
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    /// Mark occupying this cell, if any
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Mark::X),
            Cell::O => Some(Mark::O),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    fn symbol(self) -> char {
        self.mark().map_or('.', Mark::icon)
    }
}

/// A `width` x `height` grid with gravity. Row 0 is the bottom row.
///
/// Cells are only ever written through [`Board::place`], which enforces that a
/// mark lands directly on top of the column's current stack. Occupied cells
/// never revert to empty.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Board {
    width: usize,
    height: usize,
    /// Row-major, bottom row first.
    cells: Vec<Cell>,
    #[serde(skip)]
    heights: Vec<usize>,
    #[serde(skip)]
    filled: usize,
}

impl Board {
    /// Create a new empty board. Callers pass dimensions from a validated
    /// `GameConfig`.
    pub(crate) fn new(width: usize, height: usize) -> Self {
        Board {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
            heights: vec![0; width],
            filled: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at a specific position, `None` if off the board
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(self.cells[row * self.width + col])
    }

    /// Number of marks stacked in a column
    pub fn column_height(&self, col: usize) -> Option<usize> {
        self.heights.get(col).copied()
    }

    /// Check if a column is full. Columns off the board count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        self.landing_row(col).is_none()
    }

    /// Row a mark dropped in `col` would land on, `None` if the column is full
    /// or off the board
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        self.column_height(col).filter(|&h| h < self.height)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.filled == self.cells.len()
    }

    /// Number of occupied cells
    pub fn filled(&self) -> usize {
        self.filled
    }

    /// Rows from bottom to top
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width.max(1)).take(self.height)
    }

    /// Write a mark at `(row, col)`. The target must be the landing cell of
    /// its column; anything else means the caller's view of the board is
    /// stale.
    pub(crate) fn place(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), MoveError> {
        let Some(landing) = self.landing_row(col) else {
            return Err(MoveError::InternalInconsistency(format!(
                "no landing row in column {col}"
            )));
        };
        if landing != row {
            return Err(MoveError::InternalInconsistency(format!(
                "column {col} lands on row {landing}, not row {row}"
            )));
        }
        let idx = row * self.width + col;
        if !self.cells[idx].is_empty() {
            return Err(MoveError::InternalInconsistency(format!(
                "cell ({row}, {col}) is already occupied"
            )));
        }
        self.cells[idx] = mark.to_cell();
        self.heights[col] += 1;
        self.filled += 1;
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(7, 6)
    }
}

impl fmt::Display for Board {
    /// Top row first, one character per cell, column indices underneath.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<&[Cell]> = self.rows().collect();
        for row in rows.iter().rev() {
            let line: Vec<String> = row.iter().map(|c| c.symbol().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        let footer: Vec<String> = (0..self.width).map(|c| (c % 10).to_string()).collect();
        write!(f, "{}", footer.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drop(board: &mut Board, col: usize, mark: Mark) -> usize {
        let row = board.landing_row(col).unwrap();
        board.place(row, col, mark).unwrap();
        row
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::default();
        for row in 0..board.height() {
            for col in 0..board.width() {
                assert_eq!(board.get(row, col), Some(Cell::Empty));
            }
        }
        assert_eq!(board.filled(), 0);
        assert!(!board.is_full());
    }

    #[test]
    fn test_get_off_board() {
        let board = Board::default();
        assert_eq!(board.get(6, 0), None);
        assert_eq!(board.get(0, 7), None);
    }

    #[test]
    fn test_drop_stacks_from_bottom() {
        let mut board = Board::default();

        assert_eq!(drop(&mut board, 3, Mark::X), 0);
        assert_eq!(board.get(0, 3), Some(Cell::X));

        assert_eq!(drop(&mut board, 3, Mark::O), 1);
        assert_eq!(board.get(1, 3), Some(Cell::O));
        assert_eq!(board.column_height(3), Some(2));
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::default();
        for _ in 0..board.height() {
            drop(&mut board, 0, Mark::X);
        }

        assert!(board.is_column_full(0));
        assert_eq!(board.landing_row(0), None);
        assert!(board.place(5, 0, Mark::O).unwrap_err().is_internal());
    }

    #[test]
    fn test_invalid_column_counts_as_full() {
        let board = Board::default();
        assert!(board.is_column_full(7));
        assert_eq!(board.column_height(7), None);
    }

    #[test]
    fn test_place_rejects_floating_cell() {
        let mut board = Board::default();
        let err = board.place(2, 1, Mark::X).unwrap_err();
        assert!(err.is_internal());
        assert_eq!(board.filled(), 0);
        assert_eq!(board.get(2, 1), Some(Cell::Empty));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(3, 2);
        for col in 0..3 {
            for _ in 0..2 {
                drop(&mut board, col, Mark::X);
            }
        }
        assert!(board.is_full());
        assert_eq!(board.filled(), 6);
    }

    #[test]
    fn test_rows_are_bottom_up() {
        let mut board = Board::new(3, 2);
        drop(&mut board, 1, Mark::X);
        let rows: Vec<&[Cell]> = board.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], &[Cell::Empty, Cell::X, Cell::Empty]);
        assert_eq!(rows[1], &[Cell::Empty; 3]);
    }

    #[test]
    fn test_display_renders_top_row_first() {
        let mut board = Board::new(3, 2);
        drop(&mut board, 0, Mark::X);
        drop(&mut board, 0, Mark::O);
        drop(&mut board, 2, Mark::X);
        assert_eq!(board.to_string(), "O . .\nX . X\n0 1 2");
    }
}
