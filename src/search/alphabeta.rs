//! Minimax search with alpha-beta pruning
//!
//! This module implements the core search algorithm for the Connect Four bot.
//! It is a plain two-sided minimax: the bot maximizes, its opponent
//! minimizes, and every score is measured from the bot's side.
//!
//! # Features
//!
//! - Terminal detection (either side has a line, or the board is full)
//! - Window heuristic at the depth horizon
//! - Alpha-beta cutoffs, which can be switched off for exhaustive search
//! - Ascending column order, so equal scores keep the lowest column
//!
//! # Example
//!
//! ```
//! use connect_four::board::{Board, Player};
//! use connect_four::search::Searcher;
//!
//! let mut board = Board::new(6, 7);
//! board.drop_piece(3, Player::One).unwrap();
//!
//! let mut searcher = Searcher::new(4);
//! let result = searcher.search(&board, 3);
//! if let Some(col) = result.column {
//!     println!("Best column: {}", col);
//! }
//! ```

use std::time::Instant;

use log::debug;

use crate::board::{Board, Player, Pos};
use crate::eval::evaluate;
use crate::rules::detect_any_win;

/// Plies searched by the bot
pub const SEARCH_DEPTH: u8 = 5;

/// Score of a position the bot has already won
pub const WIN_SCORE: i32 = 1_000_000;

/// Infinity score for alpha-beta bounds
const INF: i32 = i32::MAX;

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Times the remaining siblings were skipped
    pub cutoffs: u64,
    /// Terminal nodes where the bot had a line
    pub wins: u64,
    /// Terminal nodes where the opponent had a line
    pub losses: u64,
    /// Terminal nodes with no legal column
    pub draws: u64,
    /// Depth-horizon evaluations
    pub leaf_evals: u64,
}

/// Search result containing the best column found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best column, or `None` when the root itself was terminal
    pub column: Option<usize>,
    /// Score of the position from the bot's side
    pub score: i32,
    /// Depth searched
    pub depth: u8,
    /// Total nodes visited, root included
    pub nodes: u64,
    /// Search diagnostics
    pub stats: SearchStats,
}

impl SearchResult {
    /// Score says one side already has, or is forced into, a line
    pub fn is_decisive(&self) -> bool {
        self.score.abs() >= WIN_SCORE
    }
}

/// Minimax searcher.
///
/// The bot plays `bot` (player two unless set otherwise) and is always the
/// maximizing side. A searcher keeps no state between searches other than
/// its counters, which every call resets.
pub struct Searcher {
    win_cells: usize,
    bot: Player,
    pruning: bool,
    nodes: u64,
    stats: SearchStats,
}

impl Searcher {
    /// Searcher for lines of `win_cells`, with player two as the bot.
    pub fn new(win_cells: usize) -> Self {
        Self {
            win_cells,
            bot: Player::Two,
            pruning: true,
            nodes: 0,
            stats: SearchStats::default(),
        }
    }

    /// Side the search maximizes for
    #[must_use]
    pub fn with_bot(mut self, bot: Player) -> Self {
        self.bot = bot;
        self
    }

    /// Turn alpha-beta cutoffs on or off. Results are identical either way;
    /// only the number of visited nodes changes.
    #[must_use]
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    pub fn bot(&self) -> Player {
        self.bot
    }

    /// Search `depth` plies from `board` with the bot to move.
    pub fn search(&mut self, board: &Board, depth: u8) -> SearchResult {
        self.search_window(board, depth, -INF, INF, true)
    }

    /// Search with explicit bounds and side to move.
    pub fn search_window(
        &mut self,
        board: &Board,
        depth: u8,
        alpha: i32,
        beta: i32,
        maximizing: bool,
    ) -> SearchResult {
        let start = Instant::now();
        self.nodes = 0;
        self.stats = SearchStats::default();

        let mut work_board = board.clone();
        let (column, score) = self.minimax(&mut work_board, depth, alpha, beta, maximizing);

        debug!(
            "search depth={} column={:?} score={} nodes={} cutoffs={} in {:?}",
            depth,
            column,
            score,
            self.nodes,
            self.stats.cutoffs,
            start.elapsed()
        );

        SearchResult {
            column,
            score,
            depth,
            nodes: self.nodes,
            stats: self.stats.clone(),
        }
    }

    /// Core minimax. Children are explored by placing a piece on the shared
    /// working board and clearing it again before the next sibling.
    fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> (Option<usize>, i32) {
        self.nodes += 1;

        // Terminal positions, in priority order
        if detect_any_win(board, self.bot, self.win_cells) {
            self.stats.wins += 1;
            return (None, WIN_SCORE);
        }
        if detect_any_win(board, self.bot.opponent(), self.win_cells) {
            self.stats.losses += 1;
            return (None, -WIN_SCORE);
        }
        let moves = board.legal_columns();
        if moves.is_empty() {
            self.stats.draws += 1;
            return (None, 0);
        }
        if depth == 0 {
            self.stats.leaf_evals += 1;
            return (None, evaluate(board, self.bot, self.win_cells));
        }

        let mover = if maximizing { self.bot } else { self.bot.opponent() };
        let mut best_col = None;
        let mut best_score = if maximizing { -INF } else { INF };

        for col in moves {
            let Some(row) = board.landing_row(col) else {
                continue;
            };
            let pos = Pos::new(row, col);

            board.place_piece(pos, mover);
            let (_, score) = self.minimax(board, depth - 1, alpha, beta, !maximizing);
            board.clear_piece(pos);

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_col = Some(col);
                }
                alpha = alpha.max(best_score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_col = Some(col);
                }
                beta = beta.min(best_score);
            }

            if self.pruning && alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        (best_col, best_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(board: &mut Board, moves: &[usize]) {
        let mut player = Player::One;
        for &col in moves {
            board.drop_piece(col, player).unwrap();
            player = player.opponent();
        }
    }

    #[test]
    fn test_bot_line_is_terminal_at_any_depth() {
        let mut board = Board::new(6, 7);
        for col in 0..4 {
            board.drop_piece(col, Player::Two).unwrap();
        }
        board.drop_piece(6, Player::One).unwrap();

        for depth in [0, 1, 3, SEARCH_DEPTH] {
            let result = Searcher::new(4).search(&board, depth);
            assert_eq!(result.score, WIN_SCORE);
            assert_eq!(result.column, None);
            assert_eq!(result.nodes, 1);
            assert!(result.is_decisive());
        }
    }

    #[test]
    fn test_bot_line_checked_before_opponent_line() {
        let mut board = Board::new(6, 7);
        for col in 0..4 {
            board.drop_piece(col, Player::One).unwrap();
            board.drop_piece(col, Player::Two).unwrap();
        }
        let result = Searcher::new(4).search(&board, 2);
        assert_eq!(result.score, WIN_SCORE);
        assert_eq!(result.column, None);
    }

    #[test]
    fn test_opponent_line_is_terminal() {
        let mut board = Board::new(6, 7);
        for _ in 0..4 {
            board.drop_piece(5, Player::One).unwrap();
        }
        let result = Searcher::new(4).search(&board, 4);
        assert_eq!(result.score, -WIN_SCORE);
        assert_eq!(result.column, None);
    }

    #[test]
    fn test_full_board_is_draw() {
        let mut board = Board::new(3, 3);
        // X X O / O X X / X O O top-down, no three in a row
        play(&mut board, &[0, 0, 0, 1, 1, 2, 2, 2, 1]);
        assert!(board.is_full());
        assert!(!detect_any_win(&board, Player::One, 3));
        assert!(!detect_any_win(&board, Player::Two, 3));

        let result = Searcher::new(3).search(&board, SEARCH_DEPTH);
        assert_eq!(result.score, 0);
        assert_eq!(result.column, None);
        assert_eq!(result.stats.draws, 1);
    }

    #[test]
    fn test_depth_zero_evaluates() {
        let mut board = Board::new(6, 7);
        play(&mut board, &[3, 3, 2, 4]);
        let result = Searcher::new(4).search(&board, 0);
        assert_eq!(result.column, None);
        assert_eq!(result.score, evaluate(&board, Player::Two, 4));
        assert_eq!(result.stats.leaf_evals, 1);
    }

    #[test]
    fn test_takes_winning_column() {
        let mut board = Board::new(6, 7);
        for col in 1..4 {
            board.drop_piece(col, Player::Two).unwrap();
        }
        board.drop_piece(6, Player::One).unwrap();
        board.drop_piece(6, Player::One).unwrap();

        // Column 0 and column 4 both complete the line; the lower index is kept
        let result = Searcher::new(4).search(&board, 1);
        assert_eq!(result.column, Some(0));
        assert_eq!(result.score, WIN_SCORE);
    }

    #[test]
    fn test_pruning_matches_exhaustive_search() {
        let openings: [&[usize]; 5] = [
            &[],
            &[1],
            &[1, 2],
            &[0, 0, 3, 1],
            &[2, 1, 2, 3, 0],
        ];
        for moves in openings {
            let mut board = Board::new(4, 4);
            play(&mut board, moves);
            for depth in 1..=5 {
                let pruned = Searcher::new(3).search(&board, depth);
                let full = Searcher::new(3).with_pruning(false).search(&board, depth);
                assert_eq!(
                    pruned.column, full.column,
                    "column differs after {:?} at depth {}",
                    moves, depth
                );
                assert_eq!(pruned.score, full.score);
                assert!(pruned.nodes <= full.nodes);
            }
        }
    }

    #[test]
    fn test_pruning_saves_work() {
        let board = Board::new(4, 4);
        let pruned = Searcher::new(3).search(&board, 4);
        let full = Searcher::new(3).with_pruning(false).search(&board, 4);
        assert!(pruned.nodes < full.nodes);
        assert!(pruned.stats.cutoffs > 0);
        assert_eq!(full.stats.cutoffs, 0);
        assert_eq!((pruned.column, pruned.score), (Some(0), -967));
    }

    #[test]
    fn test_search_leaves_board_untouched() {
        let mut board = Board::new(6, 7);
        play(&mut board, &[3, 2, 3]);
        let before = board.clone();
        let _ = Searcher::new(4).search(&board, 3);
        assert_eq!(board, before);
    }

    #[test]
    fn test_empty_board_is_not_decisive() {
        let board = Board::new(6, 7);
        let result = Searcher::new(4).search(&board, SEARCH_DEPTH);
        assert!(!result.is_decisive());
        assert!(result.column.is_some_and(|col| board.is_legal(col)));
    }

    #[test]
    fn test_bot_can_be_player_one() {
        let mut board = Board::new(6, 7);
        for col in 0..3 {
            board.drop_piece(col, Player::One).unwrap();
        }
        let result = Searcher::new(4).with_bot(Player::One).search(&board, 1);
        assert_eq!(result.column, Some(3));
        assert_eq!(result.score, WIN_SCORE);
    }
}
