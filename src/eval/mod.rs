//! Evaluation module for Connect Four positions
//!
//! This module provides window scoring for board positions.
//! The evaluation considers:
//! - Windows one or two pieces short of a line, for both sides
//! - Completed lines
//! - Center column control

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, window_count, windows};
pub use patterns::{window_score, WindowScore};
