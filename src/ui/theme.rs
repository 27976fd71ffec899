//! Theme constants for the Connect Four GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(30, 70, 160);
pub const HOLE: Color32 = Color32::from_rgb(20, 24, 32);

// Piece colors
pub const PLAYER_ONE: Color32 = Color32::from_rgb(220, 50, 50);
pub const PLAYER_ONE_HIGHLIGHT: Color32 = Color32::from_rgb(245, 120, 120);
pub const PLAYER_TWO: Color32 = Color32::from_rgb(240, 200, 40);
pub const PLAYER_TWO_HIGHLIGHT: Color32 = Color32::from_rgb(255, 235, 130);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(250, 250, 252);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

pub fn hover_column() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 255, 255, 30)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 100)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_OK: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_WAIT: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 16.0;
pub const POINTER_HEIGHT: f32 = 28.0;
pub const PIECE_RADIUS_RATIO: f32 = 0.42;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;

/// Fill and highlight colors of a player's pieces
pub fn piece_colors(player: crate::Player) -> (Color32, Color32) {
    match player {
        crate::Player::One => (PLAYER_ONE, PLAYER_ONE_HIGHLIGHT),
        crate::Player::Two => (PLAYER_TWO, PLAYER_TWO_HIGHLIGHT),
    }
}
