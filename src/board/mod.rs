//! Board representation for Connect Four

pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::Board;

use serde::{Deserialize, Serialize};

/// Default board height
pub const DEFAULT_ROWS: usize = 6;
/// Default board width
pub const DEFAULT_COLS: usize = 7;

/// The two sides of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get the other side
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Cell value this player's pieces occupy
    #[inline]
    pub fn cell(self) -> Cell {
        match self {
            Player::One => Cell::Player1,
            Player::Two => Cell::Player2,
        }
    }
}

/// Cell states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Player1,
    Player2,
}

impl Cell {
    /// Owner of the piece in this cell, if any
    #[inline]
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Player1 => Some(Player::One),
            Cell::Player2 => Some(Player::Two),
        }
    }

    /// Swap the owner of a piece (empty stays empty)
    #[inline]
    pub fn mirrored(self) -> Cell {
        match self {
            Cell::Empty => Cell::Empty,
            Cell::Player1 => Cell::Player2,
            Cell::Player2 => Cell::Player1,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        player.cell()
    }
}

/// Position on the board. Row 0 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step `steps` cells along `(dr, dc)`, staying inside a `rows` x `cols` board
    #[inline]
    pub fn offset(self, dr: isize, dc: isize, steps: usize, rows: usize, cols: usize) -> Option<Pos> {
        let r = self.row as isize + dr * steps as isize;
        let c = self.col as isize + dc * steps as isize;
        if r >= 0 && (r as usize) < rows && c >= 0 && (c as usize) < cols {
            Some(Pos::new(r as usize, c as usize))
        } else {
            None
        }
    }
}
