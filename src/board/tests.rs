use super::*;
use crate::error::{MoveError, ShapeError};

#[test]
fn test_player_opponent() {
    assert_eq!(Player::One.opponent(), Player::Two);
    assert_eq!(Player::Two.opponent(), Player::One);
}

#[test]
fn test_player_cells() {
    assert_eq!(Cell::from(Player::One), Cell::Player1);
    assert_eq!(Player::Two.cell(), Cell::Player2);
    assert_eq!(Cell::Player1.player(), Some(Player::One));
    assert_eq!(Cell::Empty.player(), None);
}

#[test]
fn test_cell_mirrored() {
    assert_eq!(Cell::Player1.mirrored(), Cell::Player2);
    assert_eq!(Cell::Player2.mirrored(), Cell::Player1);
    assert_eq!(Cell::Empty.mirrored(), Cell::Empty);
}

#[test]
fn test_pos_offset() {
    let pos = Pos::new(2, 2);
    assert_eq!(pos.offset(1, -1, 2, 6, 7), Some(Pos::new(4, 0)));
    assert_eq!(pos.offset(0, 1, 4, 6, 7), Some(Pos::new(2, 6)));
    assert_eq!(pos.offset(-1, 0, 3, 6, 7), None);
    assert_eq!(pos.offset(0, 1, 5, 6, 7), None);
}

#[test]
fn test_pos_ordering() {
    assert!(Pos::new(0, 1) < Pos::new(1, 0));
    assert!(Pos::new(1, 0) < Pos::new(1, 1));
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new(DEFAULT_ROWS, DEFAULT_COLS);
    assert_eq!(board.rows(), 6);
    assert_eq!(board.cols(), 7);
    assert_eq!(board.piece_count(), 0);
    assert_eq!(board.legal_columns(), vec![0, 1, 2, 3, 4, 5, 6]);
    assert!(!board.is_full());
}

#[test]
fn test_drop_piece_stacks_from_bottom() {
    let mut board = Board::new(4, 4);
    assert_eq!(board.drop_piece(1, Player::One), Ok(Pos::new(3, 1)));
    assert_eq!(board.drop_piece(1, Player::Two), Ok(Pos::new(2, 1)));
    assert_eq!(board.get(Pos::new(3, 1)), Cell::Player1);
    assert_eq!(board.get(Pos::new(2, 1)), Cell::Player2);
    assert_eq!(board.landing_row(1), Some(1));
    assert_eq!(board.landing_row(0), Some(3));
}

#[test]
fn test_drop_piece_full_column() {
    let mut board = Board::new(3, 3);
    for _ in 0..3 {
        board.drop_piece(0, Player::One).unwrap();
    }
    assert!(!board.is_legal(0));
    assert_eq!(board.landing_row(0), None);
    assert_eq!(board.drop_piece(0, Player::Two), Err(MoveError::ColumnFull(0)));
    assert_eq!(board.legal_columns(), vec![1, 2]);
}

#[test]
fn test_drop_piece_out_of_range() {
    let mut board = Board::new(3, 3);
    assert_eq!(
        board.drop_piece(3, Player::One),
        Err(MoveError::InvalidColumn { col: 3, cols: 3 })
    );
    assert!(!board.is_legal(3));
    assert_eq!(board.landing_row(3), None);
}

#[test]
fn test_place_and_clear_are_inverse() {
    let mut board = Board::new(4, 4);
    board.drop_piece(2, Player::One).unwrap();
    let before = board.clone();

    let pos = Pos::new(board.landing_row(2).unwrap(), 2);
    board.place_piece(pos, Player::Two);
    assert_ne!(board, before);
    board.clear_piece(pos);
    assert_eq!(board, before);
}

#[test]
fn test_is_full() {
    let mut board = Board::new(3, 3);
    for col in 0..3 {
        for _ in 0..3 {
            board.drop_piece(col, Player::Two).unwrap();
        }
    }
    assert!(board.is_full());
    assert!(board.legal_columns().is_empty());
}

#[test]
fn test_mirrored_swaps_players() {
    let mut board = Board::new(4, 4);
    board.drop_piece(0, Player::One).unwrap();
    board.drop_piece(3, Player::Two).unwrap();

    let mirrored = board.mirrored();
    assert_eq!(mirrored.get(Pos::new(3, 0)), Cell::Player2);
    assert_eq!(mirrored.get(Pos::new(3, 3)), Cell::Player1);
    assert_eq!(mirrored.mirrored(), board);
}

#[test]
fn test_from_rows_rejects_bad_shapes() {
    assert_eq!(Board::from_rows(vec![]), Err(ShapeError::Empty));

    let ragged = vec![vec![Cell::Empty; 3], vec![Cell::Empty; 2]];
    assert_eq!(
        Board::from_rows(ragged),
        Err(ShapeError::Ragged {
            row: 1,
            expected: 3,
            found: 2
        })
    );

    let floating = vec![
        vec![Cell::Player1, Cell::Empty, Cell::Empty],
        vec![Cell::Empty, Cell::Empty, Cell::Empty],
    ];
    assert_eq!(
        Board::from_rows(floating),
        Err(ShapeError::FloatingPiece { row: 0, col: 0 })
    );
}

#[test]
fn test_json_shape_roundtrip() {
    let mut board = Board::new(3, 4);
    board.drop_piece(1, Player::One).unwrap();
    board.drop_piece(1, Player::Two).unwrap();

    let json = serde_json::to_string(&board).unwrap();
    let restored: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, board);

    let floating = r#"[["Player1","Empty"],["Empty","Empty"]]"#;
    assert!(serde_json::from_str::<Board>(floating).is_err());
}

#[test]
fn test_display() {
    let mut board = Board::new(2, 3);
    board.drop_piece(0, Player::One).unwrap();
    board.drop_piece(2, Player::Two).unwrap();
    assert_eq!(board.to_string(), ". . . \nX . O \n");
}
