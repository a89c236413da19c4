//! Board module - manages the game grid
//!
//! The board is a 10x20 grid of [`Cell`]s stored as a flat row-major array.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19
//! (top to bottom). Pieces may hang above the grid (y < 0) while spawning or
//! rotating; that space is open, while the side walls and floor are solid.

use arrayvec::ArrayVec;

use crate::piece::ActivePiece;
use crate::types::{Cell, ColorId, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// Indices of rows removed by one clear, bottom to top (pre-compaction indices)
pub type ClearedRows = ArrayVec<u8, HEIGHT>;

/// The game board - 10 columns x 20 rows
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_SIZE],
        }
    }

    /// Build a board from rows, top row first
    pub fn from_cells(rows: [[Cell; WIDTH]; HEIGHT]) -> Self {
        let mut board = Self::new();
        for (y, row) in rows.iter().enumerate() {
            board.cells[y * WIDTH..(y + 1) * WIDTH].copy_from_slice(row);
        }
        board
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether a piece cell may not occupy (x, y).
    ///
    /// Side walls and the floor are always occupied. Rows above the grid
    /// (y < 0) are never occupied.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return true;
        }
        if y < 0 {
            return false;
        }
        matches!(self.get(x, y), Some(Cell::Filled(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        self.row(y).iter().all(Cell::is_filled)
    }

    /// One row of cells, top row is 0
    pub fn row(&self, y: usize) -> &[Cell] {
        &self.cells[y * WIDTH..(y + 1) * WIDTH]
    }

    /// Fill a whole row with one color
    pub fn fill_row(&mut self, y: usize, color: ColorId) {
        if y < HEIGHT {
            self.cells[y * WIDTH..(y + 1) * WIDTH].fill(Cell::Filled(color));
        }
    }

    /// Write the piece's color into every grid cell its matrix covers.
    ///
    /// The caller has already checked the position with
    /// [`collides`](crate::rules::collides); cells above the grid are dropped.
    pub fn merge(&mut self, piece: &ActivePiece) {
        for (x, y) in piece.cells() {
            self.set(x, y, Cell::Filled(piece.color));
        }
    }

    /// Remove every complete row and let the rows above fall into place.
    ///
    /// Rows are scanned bottom to top and the survivors are compacted downwards
    /// in one pass, so adjacent and non-adjacent completed rows are all caught.
    /// One empty row enters at the top per cleared row. Returns the cleared
    /// row indices; `len()` is the number of lines cleared.
    pub fn clear_completed_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let mut write_y = HEIGHT;

        for read_y in (0..HEIGHT).rev() {
            if self.is_row_full(read_y) {
                cleared.push(read_y as u8);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src = read_y * WIDTH;
                    self.cells.copy_within(src..src + WIDTH, write_y * WIDTH);
                }
            }
        }

        self.cells[..write_y * WIDTH].fill(Cell::Empty);
        cleared
    }

    /// Number of filled cells on the whole board
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_filled()).count()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the grid into a row-major 2D array
    pub fn write_grid(&self, out: &mut [[Cell; WIDTH]; HEIGHT]) {
        for (y, row) in out.iter_mut().enumerate() {
            row.copy_from_slice(self.row(y));
        }
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::shape;
    use crate::types::ShapeKind;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_walls_and_floor_are_occupied() {
        let board = Board::new();
        assert!(board.is_occupied(-1, 5));
        assert!(board.is_occupied(10, 5));
        assert!(board.is_occupied(4, 20));
        assert!(!board.is_occupied(4, 19));
        assert!(!board.is_occupied(4, -1));
        assert!(!board.is_occupied(4, -3));
        // Walls extend above the grid.
        assert!(board.is_occupied(-1, -1));
    }

    #[test]
    fn test_merge_writes_piece_color() {
        let mut board = Board::new();
        let mut piece = ActivePiece::spawn(shape(ShapeKind::O));
        piece.y = 18;
        board.merge(&piece);

        let color = Cell::Filled(piece.color);
        assert_eq!(board.get(4, 18), Some(color));
        assert_eq!(board.get(5, 18), Some(color));
        assert_eq!(board.get(4, 19), Some(color));
        assert_eq!(board.get(5, 19), Some(color));
        assert_eq!(board.filled_count(), 4);
    }

    #[test]
    fn test_clear_adjacent_rows() {
        let mut board = Board::new();
        board.fill_row(18, ColorId::Sky);
        board.fill_row(19, ColorId::Sky);
        board.set(0, 17, Cell::Filled(ColorId::Rose));

        let cleared = board.clear_completed_rows();
        assert_eq!(cleared.as_slice(), &[19, 18]);
        assert_eq!(board.get(0, 19), Some(Cell::Filled(ColorId::Rose)));
        assert_eq!(board.filled_count(), 1);
    }

    #[test]
    fn test_clear_without_full_rows_is_noop() {
        let mut board = Board::new();
        board.set(3, 19, Cell::Filled(ColorId::Lemon));
        let before = board.clone();
        assert!(board.clear_completed_rows().is_empty());
        assert_eq!(board, before);
    }

    #[test]
    fn test_clear_whole_board() {
        let mut board = Board::new();
        for y in 0..HEIGHT {
            board.fill_row(y, ColorId::Mint);
        }
        assert_eq!(board.clear_completed_rows().len(), HEIGHT);
        assert_eq!(board.filled_count(), 0);
    }

    #[test]
    fn test_from_cells_round_trip() {
        let mut rows = [[Cell::Empty; WIDTH]; HEIGHT];
        rows[5][3] = Cell::Filled(ColorId::Orchid);
        rows[19][9] = Cell::Filled(ColorId::Cobalt);
        let board = Board::from_cells(rows);

        let mut back = [[Cell::Empty; WIDTH]; HEIGHT];
        board.write_grid(&mut back);
        assert_eq!(rows, back);
    }
}
