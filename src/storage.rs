//! Keyed persistence for the game session
//!
//! A [`KeyedStore`] maps string keys to JSON strings. [`Storage`] wraps a
//! store with typed accessors for each piece of session state; reads that
//! fail fall back to defaults so a corrupt store never stops the game.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::board::{Board, Player, Pos};
use crate::config::GameConfig;
use crate::error::StoreError;

/// Session settings (`GameConfig`)
pub const SETTINGS: &str = "SETTINGS";
/// Board cells, row-major
pub const BOARD: &str = "BOARD";
/// Side to move
pub const CURRENT_PLAYER: &str = "CURRENT_PLAYER";
/// Cells of the winning line, empty while the game runs
pub const WIN_CELLS: &str = "WIN_CELLS";
/// Game ended in a draw
pub const IS_DRAW: &str = "IS_DRAW";

/// Environment variable naming the `FileStore` directory
pub const DATA_DIR_ENV: &str = "CONNECT_FOUR_DATA_DIR";
/// Directory used when `DATA_DIR_ENV` is unset
pub const DEFAULT_DATA_DIR: &str = ".connect_four";

/// String key/value store.
pub trait KeyedStore {
    /// Value stored under `key`, `None` if never set
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: KeyedStore + ?Sized> KeyedStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// In-memory store, lost when dropped
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyedStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One `<key>.json` file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Store rooted at `dir`, created if missing.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Store rooted at `$CONNECT_FOUR_DATA_DIR`, or `.connect_four`.
    pub fn from_env() -> Result<Self, StoreError> {
        let dir = std::env::var_os(DATA_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
        Self::new(dir)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyedStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::write(self.path(key), value)?;
        Ok(())
    }
}

/// Typed session state on top of a [`KeyedStore`].
pub struct Storage<S> {
    store: S,
}

impl<S: KeyedStore> Storage<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Stored settings. Missing settings are written with defaults; invalid
    /// or unreadable ones are replaced by defaults.
    pub fn settings(&mut self) -> GameConfig {
        match self.read::<GameConfig>(SETTINGS) {
            Ok(Some(config)) => match config.validate() {
                Ok(()) => config,
                Err(e) => {
                    warn!("stored settings rejected: {}", e);
                    GameConfig::default()
                }
            },
            Ok(None) => {
                let config = GameConfig::default();
                if let Err(e) = self.write(SETTINGS, &config) {
                    warn!("could not write default settings: {}", e);
                }
                config
            }
            Err(e) => {
                warn!("could not read settings: {}", e);
                GameConfig::default()
            }
        }
    }

    pub fn set_settings(&mut self, config: &GameConfig) -> Result<(), StoreError> {
        self.write(SETTINGS, config)
    }

    /// Stored board, or an empty one shaped by `config` if nothing usable is
    /// stored.
    pub fn board(&self, config: &GameConfig) -> Board {
        match self.read::<Board>(BOARD) {
            Ok(Some(board)) if board.rows() == config.rows && board.cols() == config.cols => board,
            Ok(Some(board)) => {
                warn!(
                    "stored board is {}x{}, settings say {}x{}; starting empty",
                    board.rows(),
                    board.cols(),
                    config.rows,
                    config.cols
                );
                Board::for_config(config)
            }
            Ok(None) => Board::for_config(config),
            Err(e) => {
                warn!("could not read board: {}", e);
                Board::for_config(config)
            }
        }
    }

    pub fn set_board(&mut self, board: &Board) -> Result<(), StoreError> {
        self.write(BOARD, board)
    }

    /// Side to move; player one if unknown
    pub fn current_player(&self) -> Player {
        self.read_or_default(CURRENT_PLAYER, Player::One)
    }

    pub fn set_current_player(&mut self, player: Player) -> Result<(), StoreError> {
        self.write(CURRENT_PLAYER, &player)
    }

    pub fn winning_cells(&self) -> Vec<Pos> {
        self.read_or_default(WIN_CELLS, Vec::new())
    }

    pub fn set_winning_cells(&mut self, cells: &[Pos]) -> Result<(), StoreError> {
        self.write(WIN_CELLS, cells)
    }

    pub fn is_draw(&self) -> bool {
        self.read_or_default(IS_DRAW, false)
    }

    pub fn set_is_draw(&mut self, is_draw: bool) -> Result<(), StoreError> {
        self.write(IS_DRAW, &is_draw)
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.store.get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn read_or_default<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.read(key) {
            Ok(Some(value)) => value,
            Ok(None) => default,
            Err(e) => {
                warn!("could not read {}: {}", key, e);
                default
            }
        }
    }

    fn write<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)?;
        self.store.set(key, &raw)
    }
}
