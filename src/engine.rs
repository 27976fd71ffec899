//! Bot move selection
//!
//! This module provides the bot that picks a column for its side. The choice
//! follows a priority system:
//!
//! 1. **Immediate win**: any column that completes a line for the bot
//! 2. **Block**: any column where the opponent would complete a line
//! 3. **Alpha-Beta**: minimax search to a fixed depth
//! 4. **Random**: a uniformly random legal column when the search has no move
//!
//! # Example
//!
//! ```
//! use connect_four::{Board, Opponent, Player};
//!
//! let mut board = Board::new(6, 7);
//! board.drop_piece(3, Player::One).unwrap();
//!
//! let mut bot = Opponent::new(4);
//! let result = bot.choose_move_with_stats(&board);
//! println!("Bot plays {:?} ({:?})", result.best_move, result.search_type);
//! ```

use std::time::Instant;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::board::{Board, Player};
use crate::rules::detect_win;
use crate::search::{Searcher, SEARCH_DEPTH, WIN_SCORE};

/// Which step of the priority list produced the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Column completes a line for the bot
    ImmediateWin,
    /// Column stops the opponent completing a line
    Block,
    /// Regular minimax result
    AlphaBeta,
    /// Search had no move; a legal column was drawn at random
    Random,
}

/// Result of a move choice with statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Column to play, `None` if the board has no legal column
    pub best_move: Option<usize>,
    /// Score of the chosen move from the bot's side
    pub score: i32,
    /// Step that found this move
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn immediate_win(col: usize, time_ms: u64) -> Self {
        Self {
            best_move: Some(col),
            score: WIN_SCORE,
            search_type: SearchType::ImmediateWin,
            time_ms,
            nodes: 0,
        }
    }

    #[inline]
    fn block(col: usize, time_ms: u64) -> Self {
        Self {
            best_move: Some(col),
            score: 0,
            search_type: SearchType::Block,
            time_ms,
            nodes: 0,
        }
    }

    #[inline]
    fn alpha_beta(col: usize, score: i32, time_ms: u64, nodes: u64) -> Self {
        Self {
            best_move: Some(col),
            score,
            search_type: SearchType::AlphaBeta,
            time_ms,
            nodes,
        }
    }

    #[inline]
    fn random(col: Option<usize>, score: i32, time_ms: u64, nodes: u64) -> Self {
        Self {
            best_move: col,
            score,
            search_type: SearchType::Random,
            time_ms,
            nodes,
        }
    }
}

/// Scripted opponent.
///
/// Plays `bot` (player two unless set otherwise) on boards with lines of
/// `win_cells`. The random source used for the fallback is a type parameter
/// so tests can seed it.
///
/// # Example
///
/// ```
/// use connect_four::{Board, Opponent};
///
/// let board = Board::new(4, 4);
/// let mut bot = Opponent::new(3).with_depth(3);
/// let col = bot.choose_move(&board).unwrap();
/// assert!(board.is_legal(col));
/// ```
pub struct Opponent<R = StdRng> {
    win_cells: usize,
    bot: Player,
    depth: u8,
    rng: R,
}

impl Opponent<StdRng> {
    /// Opponent seeded from system entropy, searching `SEARCH_DEPTH` plies.
    #[must_use]
    pub fn new(win_cells: usize) -> Self {
        Self::with_rng(win_cells, StdRng::from_entropy())
    }
}

impl<R: Rng> Opponent<R> {
    /// Opponent drawing its fallback moves from `rng`.
    #[must_use]
    pub fn with_rng(win_cells: usize, rng: R) -> Self {
        Self {
            win_cells,
            bot: Player::Two,
            depth: SEARCH_DEPTH,
            rng,
        }
    }

    #[must_use]
    pub fn with_bot(mut self, bot: Player) -> Self {
        self.bot = bot;
        self
    }

    /// Override the search depth
    #[must_use]
    pub fn with_depth(mut self, depth: u8) -> Self {
        self.depth = depth;
        self
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn bot(&self) -> Player {
        self.bot
    }

    /// Pick a column for the bot, or `None` if the board is full.
    ///
    /// This is a convenience method that returns only the column.
    /// Use `choose_move_with_stats` if you need search statistics.
    #[must_use]
    pub fn choose_move(&mut self, board: &Board) -> Option<usize> {
        self.choose_move_with_stats(board).best_move
    }

    /// Pick a column for the bot with details of how it was found.
    pub fn choose_move_with_stats(&mut self, board: &Board) -> MoveResult {
        let start = Instant::now();
        let elapsed_ms = || start.elapsed().as_millis() as u64;

        // 1. Our own winning move beats everything
        if let Some(col) = self.find_immediate_win(board, self.bot) {
            info!("bot wins in column {}", col);
            return MoveResult::immediate_win(col, elapsed_ms());
        }

        // 2. Stop the opponent's winning move
        if let Some(col) = self.find_immediate_win(board, self.bot.opponent()) {
            info!("bot blocks column {}", col);
            return MoveResult::block(col, elapsed_ms());
        }

        // 3. Regular search
        let mut searcher = Searcher::new(self.win_cells).with_bot(self.bot);
        let result = searcher.search(board, self.depth);
        if let Some(col) = result.column {
            debug!("bot searched column {} (score {})", col, result.score);
            return MoveResult::alpha_beta(col, result.score, elapsed_ms(), result.nodes);
        }

        // 4. Nothing decisive; any legal column will do
        let col = board.legal_columns().choose(&mut self.rng).copied();
        debug!("bot search gave no column, random pick {:?}", col);
        MoveResult::random(col, result.score, elapsed_ms(), result.nodes)
    }

    /// First column, in ascending order, where a piece for `player` completes
    /// a line.
    fn find_immediate_win(&self, board: &Board, player: Player) -> Option<usize> {
        board.legal_columns().into_iter().find(|&col| {
            let mut test_board = board.clone();
            test_board
                .drop_piece(col, player)
                .ok()
                .and_then(|pos| detect_win(&test_board, pos, player, self.win_cells, true))
                .is_some()
        })
    }
}
