//! Game rules for Connect Four
//!
//! Win lines of a configurable length and full-board draws.

pub mod win;

// Re-exports for convenient access
pub use win::{detect_any_win, detect_draw, detect_win, DIRECTIONS};
