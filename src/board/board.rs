//! Gravity-packed board grid

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Cell, Player, Pos};
use crate::config::GameConfig;
use crate::error::{MoveError, ShapeError};

/// Game board: `rows` rows of `cols` cells, row 0 on top.
///
/// Pieces are always gravity-packed: a cell below an empty cell in the same
/// column is empty. Only [`Board::drop_piece`] and the crate-internal
/// place/clear pair used by the search touch the cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Cell>>", into = "Vec<Vec<Cell>>")]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<Cell>>,
}

impl Board {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![vec![Cell::Empty; cols]; rows],
        }
    }

    /// Empty board shaped by the session settings
    pub fn for_config(config: &GameConfig) -> Self {
        Self::new(config.rows, config.cols)
    }

    /// Rebuild a board from stored rows, checking shape and gravity.
    pub fn from_rows(cells: Vec<Vec<Cell>>) -> Result<Self, ShapeError> {
        let rows = cells.len();
        let cols = cells.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(ShapeError::Empty);
        }
        for (row, line) in cells.iter().enumerate() {
            if line.len() != cols {
                return Err(ShapeError::Ragged {
                    row,
                    expected: cols,
                    found: line.len(),
                });
            }
        }
        for row in 0..rows - 1 {
            for col in 0..cols {
                if cells[row][col] != Cell::Empty && cells[row + 1][col] == Cell::Empty {
                    return Err(ShapeError::FloatingPiece { row, col });
                }
            }
        }
        Ok(Self { rows, cols, cells })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get cell at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[pos.row][pos.col]
    }

    /// Row-major view of the grid
    pub fn cells(&self) -> &[Vec<Cell>] {
        &self.cells
    }

    /// A column is playable while its top cell is empty
    #[inline]
    pub fn is_legal(&self, col: usize) -> bool {
        col < self.cols && self.cells[0][col] == Cell::Empty
    }

    /// Playable columns in ascending order
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.cols).filter(|&col| self.is_legal(col)).collect()
    }

    /// Row a piece dropped into `col` would land in
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= self.cols {
            return None;
        }
        (0..self.rows).rev().find(|&row| self.cells[row][col] == Cell::Empty)
    }

    /// Drop a piece for `player` into `col`, returning where it landed.
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<Pos, MoveError> {
        if col >= self.cols {
            return Err(MoveError::InvalidColumn {
                col,
                cols: self.cols,
            });
        }
        let row = self.landing_row(col).ok_or(MoveError::ColumnFull(col))?;
        let pos = Pos::new(row, col);
        self.place_piece(pos, player);
        Ok(pos)
    }

    /// Place a piece on the landing cell of its column.
    /// Use `drop_piece` for game moves.
    #[inline]
    pub(crate) fn place_piece(&mut self, pos: Pos, player: Player) {
        debug_assert_eq!(self.landing_row(pos.col), Some(pos.row));
        self.cells[pos.row][pos.col] = player.cell();
    }

    /// Remove the topmost piece of a column; exact inverse of `place_piece`.
    #[inline]
    pub(crate) fn clear_piece(&mut self, pos: Pos) {
        debug_assert!(pos.row == 0 || self.cells[pos.row - 1][pos.col] == Cell::Empty);
        self.cells[pos.row][pos.col] = Cell::Empty;
    }

    /// No column has room left
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells[0].iter().all(|&cell| cell != Cell::Empty)
    }

    /// Total pieces on board
    pub fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }

    /// Same board with the two players' pieces swapped
    pub fn mirrored(&self) -> Board {
        Self {
            rows: self.rows,
            cols: self.cols,
            cells: self
                .cells
                .iter()
                .map(|row| row.iter().map(|cell| cell.mirrored()).collect())
                .collect(),
        }
    }
}

impl TryFrom<Vec<Vec<Cell>>> for Board {
    type Error = ShapeError;

    fn try_from(cells: Vec<Vec<Cell>>) -> Result<Self, Self::Error> {
        Board::from_rows(cells)
    }
}

impl From<Board> for Vec<Vec<Cell>> {
    fn from(board: Board) -> Self {
        board.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::for_config(&GameConfig::default())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                let symbol = match cell {
                    Cell::Empty => ".",
                    Cell::Player1 => "X",
                    Cell::Player2 => "O",
                };
                write!(f, "{} ", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
