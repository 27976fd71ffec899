//! Heuristic evaluation function for Connect Four board positions
//!
//! This module provides the leaf evaluation for the minimax search.
//! The board is cut into every window of `win_cells` cells along the four
//! line directions; each window scores independently (see
//! [`window_score`]) and a small bonus rewards pieces in the center column.

use crate::board::{Board, Cell, Player, Pos};

use super::patterns::{window_score, WindowScore};

/// Every window of `win_cells` cells, in row, column, down-right, up-right
/// order.
///
/// A `rows` x `cols` board has `R(C-W+1) + C(R-W+1) + 2(R-W+1)(C-W+1)`
/// windows, with any negative factor counting as zero.
pub fn windows(board: &Board, win_cells: usize) -> Vec<Vec<Pos>> {
    let rows = board.rows();
    let cols = board.cols();
    let mut out = Vec::with_capacity(window_count(rows, cols, win_cells));
    if win_cells == 0 {
        return out;
    }

    // Horizontal
    if cols >= win_cells {
        for r in 0..rows {
            for c in 0..=cols - win_cells {
                out.push((0..win_cells).map(|i| Pos::new(r, c + i)).collect());
            }
        }
    }

    // Vertical
    if rows >= win_cells {
        for c in 0..cols {
            for r in 0..=rows - win_cells {
                out.push((0..win_cells).map(|i| Pos::new(r + i, c)).collect());
            }
        }
    }

    if rows >= win_cells && cols >= win_cells {
        // Diagonal down-right
        for r in 0..=rows - win_cells {
            for c in 0..=cols - win_cells {
                out.push((0..win_cells).map(|i| Pos::new(r + i, c + i)).collect());
            }
        }

        // Diagonal up-right
        for r in win_cells - 1..rows {
            for c in 0..=cols - win_cells {
                out.push((0..win_cells).map(|i| Pos::new(r - i, c + i)).collect());
            }
        }
    }

    out
}

/// Number of windows [`windows`] yields for a board shape
pub fn window_count(rows: usize, cols: usize, win_cells: usize) -> usize {
    let fit = |n: usize| (n + 1).saturating_sub(win_cells);
    rows * fit(cols) + cols * fit(rows) + 2 * fit(rows) * fit(cols)
}

/// Evaluate the board from the perspective of the given player.
///
/// Returns a score where higher is better for `player`. The score is not
/// zero-sum: a threat against `player` costs more than the same threat in
/// its favour earns.
///
/// # Arguments
/// * `board` - The current board state
/// * `player` - The side to evaluate for
/// * `win_cells` - Line length needed to win
#[must_use]
pub fn evaluate(board: &Board, player: Player, win_cells: usize) -> i32 {
    let own = player.cell();
    let opp = player.opponent().cell();

    let mut score = center_score(board, player);

    for window in windows(board, win_cells) {
        let (mut own_count, mut opp_count, mut empty) = (0, 0, 0);
        for pos in window {
            match board.get(pos) {
                Cell::Empty => empty += 1,
                cell if cell == own => own_count += 1,
                cell if cell == opp => opp_count += 1,
                _ => {}
            }
        }
        score += window_score(own_count, opp_count, empty, win_cells);
    }

    score
}

/// Center-column bonus for `player`
fn center_score(board: &Board, player: Player) -> i32 {
    let center = board.cols() / 2;
    let pieces = board
        .cells()
        .iter()
        .filter(|row| row[center] == player.cell())
        .count() as i32;
    pieces * WindowScore::CENTER_PIECE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_count_standard_board() {
        // 6x7, four to win: 24 horizontal + 21 vertical + 12 + 12 diagonal
        assert_eq!(window_count(6, 7, 4), 69);
        assert_eq!(windows(&Board::new(6, 7), 4).len(), 69);
    }

    #[test]
    fn test_window_count_line_longer_than_side() {
        // Only rows fit a window of 5 on a 3x5 board
        assert_eq!(window_count(3, 5, 5), 3);
        let all = windows(&Board::new(3, 5), 5);
        assert_eq!(all.len(), 3);
        assert!(all.iter().all(|w| w.iter().all(|p| p.row == w[0].row)));
    }

    #[test]
    fn test_windows_have_win_length() {
        let all = windows(&Board::new(4, 5), 3);
        assert_eq!(all.len(), window_count(4, 5, 3));
        assert!(all.iter().all(|w| w.len() == 3));
    }

    #[test]
    fn test_empty_board_scores_zero() {
        let board = Board::new(6, 7);
        assert_eq!(evaluate(&board, Player::One, 4), 0);
        assert_eq!(evaluate(&board, Player::Two, 4), 0);
    }

    #[test]
    fn test_center_piece() {
        let mut board = Board::new(6, 7);
        board.drop_piece(3, Player::Two).unwrap();
        // Center bonus only; a single piece fills no scoring window
        assert_eq!(evaluate(&board, Player::Two, 4), 3);
        assert_eq!(evaluate(&board, Player::One, 4), 0);
    }

    #[test]
    fn test_two_in_a_row() {
        let mut board = Board::new(6, 7);
        board.drop_piece(0, Player::Two).unwrap();
        board.drop_piece(1, Player::Two).unwrap();
        // Only the bottom-row window starting at col 0 holds both pieces
        assert_eq!(evaluate(&board, Player::Two, 4), 10);
        assert_eq!(evaluate(&board, Player::One, 4), -20);
    }

    #[test]
    fn test_threat_outweighs_own_chance() {
        let mut board = Board::new(6, 7);
        for col in 0..3 {
            board.drop_piece(col, Player::One).unwrap();
        }
        // One open window each way: 3-in-a-row plus the 2-piece window
        assert_eq!(evaluate(&board, Player::Two, 4), -1_000 - 20);
        assert_eq!(evaluate(&board, Player::One, 4), 100 + 10);
    }

    #[test]
    fn test_complete_line_dominates() {
        let mut board = Board::new(6, 7);
        for col in 0..4 {
            board.drop_piece(col, Player::Two).unwrap();
        }
        assert!(evaluate(&board, Player::Two, 4) >= 100_000);
    }

    #[test]
    fn test_mirror_symmetry() {
        let mut board = Board::new(6, 7);
        for (col, player) in [
            (3, Player::One),
            (3, Player::Two),
            (2, Player::One),
            (4, Player::Two),
            (4, Player::One),
            (1, Player::Two),
            (2, Player::One),
        ] {
            board.drop_piece(col, player).unwrap();
        }
        let mirrored = board.mirrored();
        assert_eq!(
            evaluate(&board, Player::One, 4),
            evaluate(&mirrored, Player::Two, 4)
        );
        assert_eq!(
            evaluate(&board, Player::Two, 4),
            evaluate(&mirrored, Player::One, 4)
        );
    }
}
