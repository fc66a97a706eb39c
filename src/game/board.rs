/// Default board dimensions, matching the classic game.
pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 7;

/// Run length required to win.
const RUN_LENGTH: usize = 4;

/// Directional steps for the four run orientations, as (row, col) deltas:
/// horizontal, vertical, diagonal down-right, diagonal down-left.
const RUN_DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    One,
    Two,
}

/// A `height x width` grid of cells. Row 0 is the top; pieces stack from the
/// bottom row upward. Dimensions are fixed for the lifetime of a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
}

impl Board {
    /// Create a new empty board with the given dimensions.
    pub fn new(height: usize, width: usize) -> Self {
        Board {
            height,
            width,
            cells: vec![Cell::Empty; height * width],
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the cell at a specific position.
    /// Row 0 is the top, row `height - 1` is the bottom.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.height && col < self.width,
            "cell ({row}, {col}) out of bounds"
        );
        row * self.width + col
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.width || self.height == 0 {
            return true;
        }
        self.get(0, col) != Cell::Empty
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= self.width {
            return Err(MoveError::InvalidColumn);
        }

        if self.is_column_full(col) {
            return Err(MoveError::ColumnFull);
        }

        // Find the lowest empty row in this column
        for row in (0..self.height).rev() {
            if self.get(row, col) == Cell::Empty {
                let idx = self.index(row, col);
                self.cells[idx] = cell;
                return Ok(row);
            }
        }

        unreachable!("Column should not be full if is_column_full returned false");
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.width).all(|col| self.is_column_full(col))
    }

    /// Check whether `cell` owns a four-in-a-row run anywhere on the board.
    ///
    /// Every cell is scanned in row-major order and anchors four candidate
    /// runs, one per direction; the first complete run ends the scan. On a
    /// board smaller than 4 in both axes no run fits, so this never reports
    /// a win there.
    pub fn has_winning_run(&self, cell: Cell) -> bool {
        if cell == Cell::Empty {
            return false;
        }

        for row in 0..self.height {
            for col in 0..self.width {
                for (d_row, d_col) in RUN_DIRECTIONS {
                    if self.run_matches(row, col, d_row, d_col, cell) {
                        return true;
                    }
                }
            }
        }

        false
    }

    /// Check the run of `RUN_LENGTH` cells starting at (row, col) and
    /// stepping by (d_row, d_col): all must be in bounds and owned by `cell`.
    fn run_matches(&self, row: usize, col: usize, d_row: isize, d_col: isize, cell: Cell) -> bool {
        (0..RUN_LENGTH as isize).all(|i| {
            let r = row as isize + d_row * i;
            let c = col as isize + d_col * i;
            r >= 0
                && c >= 0
                && (r as usize) < self.height
                && (c as usize) < self.width
                && self.get(r as usize, c as usize) == cell
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::default();
        for row in 0..board.height() {
            for col in 0..board.width() {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::default();

        // Drop first piece in column 3
        let row = board.drop_piece(3, Cell::One).unwrap();
        assert_eq!(row, 5); // Should land at bottom
        assert_eq!(board.get(5, 3), Cell::One);

        // Drop second piece in same column
        let row = board.drop_piece(3, Cell::Two).unwrap();
        assert_eq!(row, 4); // Should land on top of first piece
        assert_eq!(board.get(4, 3), Cell::Two);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::default();

        // Fill column 0
        for _ in 0..board.height() {
            board.drop_piece(0, Cell::One).unwrap();
        }

        assert!(board.is_column_full(0));
        assert_eq!(board.drop_piece(0, Cell::Two), Err(MoveError::ColumnFull));
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::default();
        assert_eq!(board.drop_piece(7, Cell::One), Err(MoveError::InvalidColumn));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::default();
        for col in 0..board.width() {
            for _ in 0..board.height() {
                board.drop_piece(col, Cell::One).unwrap();
            }
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::default();
        // Create horizontal line at bottom row
        for col in 0..4 {
            board.drop_piece(col, Cell::One).unwrap();
        }
        assert!(board.has_winning_run(Cell::One));
        assert!(!board.has_winning_run(Cell::Two));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::default();
        // Create vertical line in column 3
        for _ in 0..4 {
            board.drop_piece(3, Cell::Two).unwrap();
        }
        assert!(board.has_winning_run(Cell::Two));
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = Board::default();
        // Create diagonal / pattern
        board.drop_piece(0, Cell::One).unwrap();

        board.drop_piece(1, Cell::Two).unwrap();
        board.drop_piece(1, Cell::One).unwrap();

        board.drop_piece(2, Cell::Two).unwrap();
        board.drop_piece(2, Cell::Two).unwrap();
        board.drop_piece(2, Cell::One).unwrap();

        board.drop_piece(3, Cell::Two).unwrap();
        board.drop_piece(3, Cell::Two).unwrap();
        board.drop_piece(3, Cell::Two).unwrap();
        board.drop_piece(3, Cell::One).unwrap();

        assert!(board.has_winning_run(Cell::One));
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut board = Board::default();
        // Create diagonal \ pattern
        board.drop_piece(6, Cell::One).unwrap();

        board.drop_piece(5, Cell::Two).unwrap();
        board.drop_piece(5, Cell::One).unwrap();

        board.drop_piece(4, Cell::Two).unwrap();
        board.drop_piece(4, Cell::Two).unwrap();
        board.drop_piece(4, Cell::One).unwrap();

        board.drop_piece(3, Cell::Two).unwrap();
        board.drop_piece(3, Cell::Two).unwrap();
        board.drop_piece(3, Cell::Two).unwrap();
        board.drop_piece(3, Cell::One).unwrap();

        assert!(board.has_winning_run(Cell::One));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::default();
        for col in 0..3 {
            board.drop_piece(col, Cell::One).unwrap();
        }
        assert!(!board.has_winning_run(Cell::One));
    }

    #[test]
    fn test_empty_cell_never_wins() {
        let board = Board::default();
        assert!(!board.has_winning_run(Cell::Empty));
    }

    #[test]
    fn test_custom_dimensions() {
        let mut board = Board::new(4, 5);
        assert_eq!(board.height(), 4);
        assert_eq!(board.width(), 5);

        let row = board.drop_piece(2, Cell::One).unwrap();
        assert_eq!(row, 3);
        assert_eq!(board.drop_piece(5, Cell::One), Err(MoveError::InvalidColumn));
    }

    #[test]
    fn test_no_win_possible_below_run_length() {
        let mut board = Board::new(3, 3);
        for col in 0..3 {
            for _ in 0..3 {
                board.drop_piece(col, Cell::One).unwrap();
            }
        }
        // Fully owned by one player, but no run of four fits
        assert!(board.is_full());
        assert!(!board.has_winning_run(Cell::One));
    }

    #[test]
    fn test_horizontal_mirror_preserves_win() {
        let width = DEFAULT_COLS;
        let drops = [0, 0, 1, 1, 2, 2, 3];

        let mut board = Board::default();
        let mut mirrored = Board::default();
        for (i, &col) in drops.iter().enumerate() {
            let cell = if i % 2 == 0 { Cell::One } else { Cell::Two };
            board.drop_piece(col, cell).unwrap();
            mirrored.drop_piece(width - 1 - col, cell).unwrap();
        }

        assert!(board.has_winning_run(Cell::One));
        assert!(mirrored.has_winning_run(Cell::One));
    }
}
