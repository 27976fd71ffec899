//! Step-by-step analysis of a played game
//!
//! Given the columns chosen in order, [`analyze`] replays the game and
//! reports, for each step, where both players' pieces are and whether the
//! game is still running, won or drawn. The report serialises to JSON.

use serde::{Serialize, Serializer};

use crate::board::{Board, Player, Pos};
use crate::config::GameConfig;
use crate::rules::{detect_draw, detect_win};

/// Game status after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BoardState {
    /// No piece played yet
    Waiting,
    Pending,
    Win,
    Draw,
}

/// Positions of each side's pieces, one slot per player
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlayerPositions {
    pub player_1: Vec<Pos>,
    pub player_2: Vec<Pos>,
}

impl PlayerPositions {
    pub fn get(&self, player: Player) -> &[Pos] {
        match player {
            Player::One => &self.player_1,
            Player::Two => &self.player_2,
        }
    }

    fn push(&mut self, player: Player, pos: Pos) {
        match player {
            Player::One => self.player_1.push(pos),
            Player::Two => self.player_2.push(pos),
        }
    }
}

/// Winner of a finished game and the line that won it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WinnerInfo {
    #[serde(serialize_with = "player_key")]
    pub who: Player,
    pub positions: Vec<Pos>,
}

/// Same names as the position keys of `PlayerPositions`
fn player_key<S: Serializer>(player: &Player, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(match player {
        Player::One => "player_1",
        Player::Two => "player_2",
    })
}

/// State of the game after one step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepResult {
    /// Step number; 0 is the position before any move
    pub step: usize,
    #[serde(flatten)]
    pub positions: PlayerPositions,
    pub board_state: BoardState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<WinnerInfo>,
}

/// Side playing step `step` (1-based): player one on odd steps.
pub fn player_for_step(step: usize) -> Player {
    if step % 2 == 1 {
        Player::One
    } else {
        Player::Two
    }
}

/// Replay `steps` on an empty board shaped by `config`.
///
/// Steps into a full or missing column are skipped without an entry, but
/// still use up their turn. Analysis stops at the first win or draw.
pub fn analyze(steps: &[usize], config: &GameConfig) -> Vec<StepResult> {
    let mut board = Board::for_config(config);
    let mut positions = PlayerPositions::default();
    let mut report = vec![StepResult {
        step: 0,
        positions: PlayerPositions::default(),
        board_state: BoardState::Waiting,
        winner: None,
    }];

    for (index, &col) in steps.iter().enumerate() {
        let step = index + 1;
        let player = player_for_step(step);

        let Ok(pos) = board.drop_piece(col, player) else {
            continue;
        };
        positions.push(player, pos);

        let mut board_state = BoardState::Pending;
        let mut winner = None;
        if let Some(line) = detect_win(&board, pos, player, config.win_cells, true) {
            board_state = BoardState::Win;
            winner = Some(WinnerInfo {
                who: player,
                positions: line,
            });
        } else if detect_draw(&board) {
            board_state = BoardState::Draw;
        }

        report.push(StepResult {
            step,
            positions: positions.clone(),
            board_state,
            winner,
        });

        if matches!(board_state, BoardState::Win | BoardState::Draw) {
            break;
        }
    }

    report
}

/// Render a report as pretty JSON
pub fn to_json(report: &[StepResult]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
