//! Connect Four with a configurable board and a minimax opponent
//!
//! Two players drop pieces into the columns of a `rows` x `cols` grid; the
//! first to line up `win_cells` pieces horizontally, vertically or
//! diagonally wins. A full top row with no line is a draw.
//!
//! # Architecture
//!
//! - [`board`]: Board model with gravity
//! - [`config`]: Session settings and the settings editor's rules
//! - [`rules`]: Win and draw detection
//! - [`eval`]: Window-based position evaluation
//! - [`search`]: Minimax with alpha-beta pruning
//! - [`engine`]: The bot, integrating rules and search
//! - [`replay`]: Step-by-step analysis of a played game
//! - [`storage`]: Keyed persistence of the session
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use connect_four::{Board, Opponent, Player};
//!
//! let mut board = Board::new(6, 7);
//! board.drop_piece(3, Player::One).unwrap();
//!
//! // Bot answers as player two
//! let mut bot = Opponent::new(4).with_depth(3);
//! if let Some(col) = bot.choose_move(&board) {
//!     let pos = board.drop_piece(col, Player::Two).unwrap();
//!     println!("Bot plays column {} (row {})", col, pos.row);
//! }
//! ```
//!
//! # Bot Priority
//!
//! 1. Column that wins immediately
//! 2. Column that blocks the opponent's immediate win
//! 3. Alpha-beta search, five plies deep
//! 4. Random legal column when the search has nothing to offer

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod replay;
pub mod rules;
pub mod search;
pub mod storage;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Player, Pos};
pub use config::GameConfig;
pub use engine::{MoveResult, Opponent, SearchType};
pub use error::{ConfigError, MoveError, ShapeError, StoreError};
