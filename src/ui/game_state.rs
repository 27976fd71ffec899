//! Game state management for the Connect Four GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, info, warn};

use crate::config::GameConfig;
use crate::error::{MoveError, StoreError};
use crate::replay;
use crate::rules::{detect_draw, detect_win};
use crate::search::SEARCH_DEPTH;
use crate::storage::{KeyedStore, Storage};
use crate::{Board, MoveResult, Opponent, Player, Pos};

/// Pause before the bot starts searching, so its move does not land
/// on the same frame as the human's
pub const BOT_DELAY: Duration = Duration::from_millis(200);

/// Pause between the end of a game and the result window
pub const RESULT_DELAY: Duration = Duration::from_secs(2);

/// Bot computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub config: GameConfig,
    pub current_turn: Player,
    /// Cells of the winning line; empty while nobody has won
    pub winning_cells: Vec<Pos>,
    pub is_draw: bool,
    /// Columns played since this state was created or reset
    pub steps: Vec<usize>,
    pub last_move: Option<Pos>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub message: Option<String>,
    finished_at: Option<Instant>,
    bot_depth: u8,
    storage: Storage<Box<dyn KeyedStore>>,
}

impl GameState {
    /// Restore the session kept in `store`.
    pub fn new(store: Box<dyn KeyedStore>) -> Self {
        let mut storage = Storage::new(store);
        let config = storage.settings();
        let board = storage.board(&config);
        let (winning_cells, is_draw) =
            restored_outcome(&board, storage.winning_cells(), storage.is_draw());
        let current_turn = if board.piece_count() == 0 {
            Player::One
        } else {
            storage.current_player()
        };
        let finished_at = (!winning_cells.is_empty() || is_draw).then(Instant::now);

        info!(
            "session loaded: {}x{} board, {} to win, bot {}",
            config.rows,
            config.cols,
            config.win_cells,
            if config.bot { "on" } else { "off" }
        );

        Self {
            current_turn,
            board,
            config,
            winning_cells,
            is_draw,
            steps: Vec::new(),
            last_move: None,
            last_ai_result: None,
            ai_state: AiState::Idle,
            message: None,
            finished_at,
            bot_depth: SEARCH_DEPTH,
            storage,
        }
    }

    /// Override the bot's search depth
    #[must_use]
    pub fn with_bot_depth(mut self, depth: u8) -> Self {
        self.bot_depth = depth;
        self
    }

    /// Empty board, player one to move. Settings are kept.
    pub fn reset(&mut self) {
        self.board = Board::for_config(&self.config);
        self.current_turn = Player::One;
        self.winning_cells.clear();
        self.is_draw = false;
        self.steps.clear();
        self.last_move = None;
        self.last_ai_result = None;
        self.ai_state = AiState::Idle;
        self.message = None;
        self.finished_at = None;
        self.persist();
        info!("new game");
    }

    /// Store new settings and start a fresh game with them.
    pub fn apply_settings(&mut self, config: GameConfig) {
        self.config = config;
        if let Err(e) = self.storage.set_settings(&config) {
            warn!("could not save settings: {}", e);
        }
        self.reset();
    }

    pub fn is_game_over(&self) -> bool {
        !self.winning_cells.is_empty() || self.is_draw
    }

    pub fn winner(&self) -> Option<Player> {
        self.winning_cells
            .first()
            .and_then(|&pos| self.board.get(pos).player())
    }

    /// The game has been over long enough to show the result window
    pub fn show_result(&self) -> bool {
        self.finished_at
            .is_some_and(|at| at.elapsed() >= RESULT_DELAY)
    }

    /// Player two is played by the bot and it is its move
    pub fn is_ai_turn(&self) -> bool {
        self.config.bot && self.current_turn == Player::Two
    }

    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Human move into `col`.
    pub fn try_drop(&mut self, col: usize) -> Result<Pos, MoveError> {
        if self.is_game_over() {
            return Err(MoveError::GameOver);
        }
        if self.is_ai_thinking() || self.is_ai_turn() {
            return Err(MoveError::BotTurn);
        }
        self.execute_move(col)
    }

    /// Apply a move for the side to play (human or bot)
    fn execute_move(&mut self, col: usize) -> Result<Pos, MoveError> {
        let player = self.current_turn;
        let pos = self.board.drop_piece(col, player)?;

        self.steps.push(col);
        self.last_move = Some(pos);
        self.message = None;
        info!("{:?} plays column {}", player, col);

        if let Some(line) = detect_win(&self.board, pos, player, self.config.win_cells, true) {
            info!("{:?} wins with {:?}", player, line);
            self.winning_cells = line;
            self.finished_at = Some(Instant::now());
        } else if detect_draw(&self.board) {
            info!("game drawn");
            self.is_draw = true;
            self.finished_at = Some(Instant::now());
        } else {
            self.current_turn = player.opponent();
        }

        self.persist();
        self.log_replay();
        Ok(pos)
    }

    fn persist(&mut self) {
        if let Err(e) = self.save() {
            warn!("could not save game: {}", e);
        }
    }

    fn save(&mut self) -> Result<(), StoreError> {
        self.storage.set_board(&self.board)?;
        self.storage.set_current_player(self.current_turn)?;
        self.storage.set_winning_cells(&self.winning_cells)?;
        self.storage.set_is_draw(self.is_draw)
    }

    /// Debug dump of the per-step analysis. Skipped for restored games, whose
    /// earlier moves are not known.
    fn log_replay(&self) {
        if !log::log_enabled!(log::Level::Debug) || self.steps.len() != self.board.piece_count() {
            return;
        }
        let report = replay::analyze(&self.steps, &self.config);
        match replay::to_json(&report) {
            Ok(json) => debug!("replay: {}", json),
            Err(e) => warn!("could not render replay: {}", e),
        }
    }

    /// Start the bot on a worker thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.is_game_over() {
            return;
        }

        let board = self.board.clone();
        let win_cells = self.config.win_cells;
        let depth = self.bot_depth;

        let (tx, rx) = channel();

        thread::spawn(move || {
            thread::sleep(BOT_DELAY);
            let mut bot = Opponent::new(win_cells).with_depth(depth);
            let result = bot.choose_move_with_stats(&board);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Apply the bot's move if it has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, .. } => match receiver.try_recv() {
                Ok(result) => Some(result),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("Bot error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some(move_result) = result {
            self.ai_state = AiState::Idle;
            self.last_ai_result = Some(move_result.clone());

            match move_result.best_move {
                Some(col) => {
                    if let Err(e) = self.execute_move(col) {
                        warn!("bot move rejected: {}", e);
                        self.message = Some(e.to_string());
                    }
                }
                None => self.message = Some("Bot could not find a move".to_string()),
            }
        }
    }

    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }
}

/// Stored outcome, kept only if it still describes `board`.
///
/// The board is replaced by an empty one when its shape no longer matches the
/// settings, so a stored line may point at cells that do not exist any more.
fn restored_outcome(board: &Board, winning_cells: Vec<Pos>, is_draw: bool) -> (Vec<Pos>, bool) {
    let owner = |pos: &Pos| {
        (pos.row < board.rows() && pos.col < board.cols())
            .then(|| board.get(*pos).player())
            .flatten()
    };
    let line_holds = match winning_cells.first().map(owner) {
        None => true,
        Some(None) => false,
        Some(first) => winning_cells.iter().all(|pos| owner(pos) == first),
    };
    if !line_holds {
        warn!("stored winning line does not match the board; discarded");
        return (Vec::new(), false);
    }

    let is_draw = is_draw && winning_cells.is_empty() && detect_draw(board);
    (winning_cells, is_draw)
}
