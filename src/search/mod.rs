//! Search module for the Connect Four bot
//!
//! Contains:
//! - Minimax with alpha-beta pruning to a fixed depth

pub mod alphabeta;

pub use alphabeta::{SearchResult, SearchStats, Searcher, SEARCH_DEPTH, WIN_SCORE};
