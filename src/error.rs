//! Error types shared across the crate

/// Errors raised when applying a move to a live board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {col} is outside the board (0..{cols})")]
    InvalidColumn { col: usize, cols: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("game is over")]
    GameOver,

    #[error("bot is thinking")]
    BotTurn,
}

/// Errors raised when rebuilding a board from stored rows.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("board has no cells")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("piece at ({row}, {col}) sits above an empty cell")]
    FloatingPiece { row: usize, col: usize },
}

/// Configuration values that break the game's preconditions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("board must be at least 3x3, got {rows}x{cols}")]
    BoardTooSmall { rows: usize, cols: usize },

    #[error("win length must be at least 3, got {0}")]
    WinCellsTooSmall(usize),

    #[error("win length {win_cells} does not fit a {rows}x{cols} board")]
    WinCellsTooLarge {
        win_cells: usize,
        rows: usize,
        cols: usize,
    },
}

/// Errors from the keyed store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
