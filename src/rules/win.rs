//! Win and draw detection
//!
//! A win is `win_cells` or more same-player pieces in a row along one of four
//! directions. A draw is a board whose top row is full.

use crate::board::{Board, Cell, Player, Pos};

/// Direction vectors for line checking, in the order they are tried
pub const DIRECTIONS: [(isize, isize); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal down-right
    (1, -1), // Diagonal down-left (up-right)
];

/// Find the winning line through `pos` for `player`, if any.
///
/// Walks up to `win_cells - 1` cells away from `pos` in the positive then the
/// negative sense of each direction, counting `pos` itself once. The first
/// direction that reaches `win_cells` pieces returns every cell walked:
/// positive-side cells nearest first, then `pos`, then the negative side.
///
/// With `require_origin` set, `pos` must already hold `player`; otherwise it
/// is treated as a hypothetical piece of `player`.
pub fn detect_win(
    board: &Board,
    pos: Pos,
    player: Player,
    win_cells: usize,
    require_origin: bool,
) -> Option<Vec<Pos>> {
    let cell = player.cell();
    if require_origin && board.get(pos) != cell {
        return None;
    }

    for &(dr, dc) in &DIRECTIONS {
        let mut line = Vec::with_capacity(2 * win_cells);

        // Positive direction
        for step in 1..win_cells {
            match pos.offset(dr, dc, step, board.rows(), board.cols()) {
                Some(next) if board.get(next) == cell => line.push(next),
                _ => break,
            }
        }

        line.push(pos);

        // Negative direction
        for step in 1..win_cells {
            match pos.offset(-dr, -dc, step, board.rows(), board.cols()) {
                Some(prev) if board.get(prev) == cell => line.push(prev),
                _ => break,
            }
        }

        if line.len() >= win_cells {
            return Some(line);
        }
    }
    None
}

/// Check whether `player` has a completed line anywhere on the board.
///
/// Every cell holding `player` is tried as an origin; empty cells never match
/// a concrete player so they are skipped.
pub fn detect_any_win(board: &Board, player: Player, win_cells: usize) -> bool {
    let cell = player.cell();
    (0..board.rows()).any(|row| {
        (0..board.cols()).any(|col| {
            let pos = Pos::new(row, col);
            board.get(pos) == cell && detect_win(board, pos, player, win_cells, true).is_some()
        })
    })
}

/// Board is drawn once no column has room.
///
/// Only the top row is inspected; gravity packing makes that sufficient.
pub fn detect_draw(board: &Board) -> bool {
    board.cells()[0].iter().all(|&cell| cell != Cell::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn set(cells: &[Pos]) -> BTreeSet<Pos> {
        cells.iter().copied().collect()
    }

    /// Build a board from text rows, top row first: `.` empty, `X` one, `O` two.
    /// Rows go through `Board::from_rows`, so pieces must rest on others.
    fn board_from(rows: &[&str]) -> Board {
        let cells = rows
            .iter()
            .map(|line| {
                line.chars()
                    .map(|ch| match ch {
                        'X' => Cell::Player1,
                        'O' => Cell::Player2,
                        _ => Cell::Empty,
                    })
                    .collect()
            })
            .collect();
        Board::from_rows(cells).unwrap()
    }

    #[test]
    fn test_horizontal_win() {
        let board = board_from(&[
            ".......", //
            ".......",
            ".......",
            ".......",
            ".......",
            ".XXXX..",
        ]);
        let line = detect_win(&board, Pos::new(5, 4), Player::One, 4, true).unwrap();
        assert_eq!(line.len(), 4);
        assert_eq!(
            set(&line),
            set(&[Pos::new(5, 1), Pos::new(5, 2), Pos::new(5, 3), Pos::new(5, 4)])
        );
    }

    #[test]
    fn test_line_order() {
        let board = board_from(&[
            "....", //
            "....",
            "....",
            "XXX.",
        ]);
        let line = detect_win(&board, Pos::new(3, 1), Player::One, 3, true).unwrap();
        assert_eq!(line, vec![Pos::new(3, 2), Pos::new(3, 1), Pos::new(3, 0)]);
    }

    #[test]
    fn test_vertical_win() {
        let board = board_from(&[
            ".......", //
            ".......",
            "..O....",
            "..O....",
            "..O....",
            "..O....",
        ]);
        let line = detect_win(&board, Pos::new(2, 2), Player::Two, 4, true).unwrap();
        assert_eq!(
            set(&line),
            set(&[Pos::new(2, 2), Pos::new(3, 2), Pos::new(4, 2), Pos::new(5, 2)])
        );
        assert!(detect_win(&board, Pos::new(2, 2), Player::One, 4, true).is_none());
    }

    #[test]
    fn test_diagonal_down_right_win() {
        let board = board_from(&[
            ".......", //
            ".......",
            "X......",
            "OX.....",
            "OOX....",
            "OOOX...",
        ]);
        let line = detect_win(&board, Pos::new(2, 0), Player::One, 4, true).unwrap();
        assert_eq!(
            set(&line),
            set(&[Pos::new(2, 0), Pos::new(3, 1), Pos::new(4, 2), Pos::new(5, 3)])
        );
    }

    #[test]
    fn test_diagonal_up_right_win() {
        let board = board_from(&[
            ".......", //
            ".......",
            "......O",
            ".....OX",
            "....OXX",
            "...OXXX",
        ]);
        // Origin in the middle of the line
        let line = detect_win(&board, Pos::new(4, 4), Player::Two, 4, true).unwrap();
        assert_eq!(
            set(&line),
            set(&[Pos::new(5, 3), Pos::new(4, 4), Pos::new(3, 5), Pos::new(2, 6)])
        );
    }

    #[test]
    fn test_one_short_is_not_win() {
        let board = board_from(&[
            ".......", //
            ".......",
            ".......",
            ".......",
            ".......",
            "XXX.XX.",
        ]);
        assert!(detect_win(&board, Pos::new(5, 2), Player::One, 4, true).is_none());
        assert!(detect_win(&board, Pos::new(5, 4), Player::One, 4, true).is_none());
        assert!(!detect_any_win(&board, Player::One, 4));
    }

    #[test]
    fn test_hypothetical_origin() {
        let board = board_from(&[
            ".......", //
            ".......",
            ".......",
            ".......",
            ".......",
            "XXX.XX.",
        ]);
        let gap = Pos::new(5, 3);
        assert!(detect_win(&board, gap, Player::One, 4, true).is_none());
        let line = detect_win(&board, gap, Player::One, 4, false).unwrap();
        assert!(line.contains(&gap));
        assert!(line.len() >= 4);
    }

    #[test]
    fn test_origin_must_match_when_required() {
        let board = board_from(&[
            "...", //
            "...",
            "XXO",
        ]);
        assert!(detect_win(&board, Pos::new(2, 2), Player::One, 3, true).is_none());
        assert!(detect_win(&board, Pos::new(2, 2), Player::One, 3, false).is_some());
    }

    #[test]
    fn test_longer_line_still_wins() {
        let board = board_from(&[
            ".....", //
            ".....",
            "OOOOO",
        ]);
        let line = detect_win(&board, Pos::new(2, 2), Player::Two, 4, true).unwrap();
        assert!(line.len() >= 4);
    }

    #[test]
    fn test_any_win_finds_lines() {
        let board = board_from(&[
            "....", //
            "...O",
            "..OX",
            ".OXX",
        ]);
        assert!(detect_any_win(&board, Player::Two, 3));
        assert!(!detect_any_win(&board, Player::One, 3));
    }

    #[test]
    fn test_any_win_ignores_empty_cells() {
        // An empty cell next to an open line must not complete it
        let board = board_from(&[
            "....", //
            "....",
            "....",
            ".OO.",
        ]);
        assert!(!detect_any_win(&board, Player::Two, 3));
        assert!(!detect_any_win(&Board::new(4, 4), Player::One, 3));
    }

    #[test]
    fn test_draw_checks_top_row_only() {
        let full_top = board_from(&[
            "XOXO", //
            "OXOX",
            "XOXO",
        ]);
        assert!(detect_draw(&full_top));

        let open_top = board_from(&[
            "XO.O", //
            "OXOX",
            "XOXO",
        ]);
        assert!(!detect_draw(&open_top));
        assert!(!detect_draw(&Board::new(6, 7)));
    }
}
