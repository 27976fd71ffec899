//! GUI module for the Connect Four game
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod game_state;
mod settings_view;
mod theme;

pub use app::ConnectFourApp;
pub use game_state::{AiState, GameState, BOT_DELAY, RESULT_DELAY};
pub use settings_view::SettingsAction;
