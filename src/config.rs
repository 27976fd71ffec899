//! Session configuration
//!
//! [`GameConfig`] is fixed for a whole game: board shape, win length and
//! whether player two is the bot. [`SettingsDraft`] holds the values while
//! they are being edited in the settings view and keeps them consistent.

use serde::{Deserialize, Serialize};

use crate::board::{DEFAULT_COLS, DEFAULT_ROWS};
use crate::error::ConfigError;

/// Shortest winning line allowed
pub const MIN_WIN_CELLS: usize = 3;
/// Default winning line length
pub const DEFAULT_WIN_CELLS: usize = 4;

/// Row count bounds offered by the settings view
pub const ROWS_RANGE: (usize, usize) = (3, 10);
/// Column count bounds offered by the settings view
pub const COLS_RANGE: (usize, usize) = (3, 13);

/// Board shape and rules for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    /// Pieces in a row needed to win
    pub win_cells: usize,
    /// Player two is played by the bot
    pub bot: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            win_cells: DEFAULT_WIN_CELLS,
            bot: true,
        }
    }
}

impl GameConfig {
    /// Check the preconditions the engine relies on.
    ///
    /// The engine itself never calls this; loaders of untrusted settings do.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < MIN_WIN_CELLS || self.cols < MIN_WIN_CELLS {
            return Err(ConfigError::BoardTooSmall {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.win_cells < MIN_WIN_CELLS {
            return Err(ConfigError::WinCellsTooSmall(self.win_cells));
        }
        if self.win_cells > self.max_win_cells() {
            return Err(ConfigError::WinCellsTooLarge {
                win_cells: self.win_cells,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Longest line that fits on the board
    #[inline]
    pub fn max_win_cells(&self) -> usize {
        self.rows.max(self.cols)
    }
}

/// Editable copy of the settings with the settings view's clamping rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsDraft {
    pub rows: usize,
    pub cols: usize,
    pub win_cells: usize,
    pub bot: bool,
}

impl SettingsDraft {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            rows: config.rows,
            cols: config.cols,
            win_cells: config.win_cells,
            bot: config.bot,
        }
    }

    /// Change the row count; shrinks the win length if it no longer fits.
    pub fn adjust_rows(&mut self, delta: isize) {
        self.rows = clamp_add(self.rows, delta, ROWS_RANGE);
        self.win_cells = self.win_cells.min(self.max_win_cells());
    }

    /// Change the column count; shrinks the win length if it no longer fits.
    pub fn adjust_cols(&mut self, delta: isize) {
        self.cols = clamp_add(self.cols, delta, COLS_RANGE);
        self.win_cells = self.win_cells.min(self.max_win_cells());
    }

    pub fn adjust_win_cells(&mut self, delta: isize) {
        self.win_cells = clamp_add(self.win_cells, delta, (MIN_WIN_CELLS, self.max_win_cells()));
    }

    pub fn toggle_bot(&mut self) {
        self.bot = !self.bot;
    }

    #[inline]
    pub fn max_win_cells(&self) -> usize {
        self.rows.max(self.cols)
    }

    pub fn can_decrease_win_cells(&self) -> bool {
        self.win_cells > MIN_WIN_CELLS
    }

    pub fn can_increase_win_cells(&self) -> bool {
        self.win_cells < self.max_win_cells()
    }

    /// Finished configuration
    pub fn apply(&self) -> GameConfig {
        GameConfig {
            rows: self.rows,
            cols: self.cols,
            win_cells: self.win_cells,
            bot: self.bot,
        }
    }
}

fn clamp_add(value: usize, delta: isize, (min, max): (usize, usize)) -> usize {
    let next = value as isize + delta;
    next.clamp(min as isize, max as isize) as usize
}
