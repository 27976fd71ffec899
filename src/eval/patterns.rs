//! Window scores for Connect Four evaluation
//!
//! These constants define the scoring weights for a single window of
//! `win_cells` cells. Threats against us weigh more than our own chances of
//! the same size, so the bot prefers blocking over building.

/// Pattern scores for evaluation
pub struct WindowScore;

impl WindowScore {
    /// Every cell of the window is ours - a finished line
    pub const COMPLETE: i32 = 100_000;
    /// One cell short with the last cell empty
    pub const ONE_SHORT: i32 = 100;
    /// Two cells short with both remaining cells empty
    pub const TWO_SHORT: i32 = 10;

    /// Opponent one cell short - must block
    pub const OPP_ONE_SHORT: i32 = -1_000;
    /// Opponent two cells short
    pub const OPP_TWO_SHORT: i32 = -20;

    /// Bonus per own piece in the center column
    pub const CENTER_PIECE: i32 = 3;
}

/// Score one window from its piece counts.
///
/// Windows holding pieces of both sides can never become a line and score
/// nothing.
///
/// # Arguments
/// * `own` - cells holding the evaluated player's pieces
/// * `opp` - cells holding opponent pieces
/// * `empty` - empty cells
/// * `win_cells` - window length
pub fn window_score(own: usize, opp: usize, empty: usize, win_cells: usize) -> i32 {
    let mut score = 0;

    if own == win_cells {
        score += WindowScore::COMPLETE;
    } else if own + 1 == win_cells && empty == 1 {
        score += WindowScore::ONE_SHORT;
    } else if own + 2 == win_cells && empty == 2 {
        score += WindowScore::TWO_SHORT;
    }

    if opp + 1 == win_cells && empty == 1 {
        score += WindowScore::OPP_ONE_SHORT;
    } else if opp + 2 == win_cells && empty == 2 {
        score += WindowScore::OPP_TWO_SHORT;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_hierarchy() {
        assert!(WindowScore::COMPLETE > WindowScore::ONE_SHORT);
        assert!(WindowScore::ONE_SHORT > WindowScore::TWO_SHORT);
        assert!(WindowScore::OPP_ONE_SHORT < WindowScore::OPP_TWO_SHORT);
        // Blocking a threat outweighs building our own
        assert!(-WindowScore::OPP_ONE_SHORT > WindowScore::ONE_SHORT);
    }

    #[test]
    fn test_window_scores_four() {
        assert_eq!(window_score(4, 0, 0, 4), 100_000);
        assert_eq!(window_score(3, 0, 1, 4), 100);
        assert_eq!(window_score(2, 0, 2, 4), 10);
        assert_eq!(window_score(0, 3, 1, 4), -1_000);
        assert_eq!(window_score(0, 2, 2, 4), -20);
        assert_eq!(window_score(1, 0, 3, 4), 0);
        assert_eq!(window_score(0, 0, 4, 4), 0);
    }

    #[test]
    fn test_mixed_windows_are_dead() {
        assert_eq!(window_score(2, 1, 1, 4), 0);
        assert_eq!(window_score(1, 2, 1, 4), 0);
        assert_eq!(window_score(3, 1, 0, 4), 0);
        assert_eq!(window_score(1, 1, 1, 3), 0);
    }

    #[test]
    fn test_window_scores_three() {
        assert_eq!(window_score(3, 0, 0, 3), 100_000);
        assert_eq!(window_score(2, 0, 1, 3), 100);
        assert_eq!(window_score(1, 0, 2, 3), 10);
        assert_eq!(window_score(0, 1, 2, 3), -20);
    }
}
