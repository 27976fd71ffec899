//! Board rendering for the Connect Four GUI

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::{Board, Player, Pos};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Area holding the grid (the pointer strip sits above it)
    board_rect: Rect,
    cols: usize,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
            cols: 0,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked column if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        current_turn: Player,
        last_move: Option<Pos>,
        winning_cells: &[Pos],
        accepts_input: bool,
    ) -> Option<usize> {
        let rows = board.rows() as f32;
        let cols = board.cols() as f32;
        self.cols = board.cols();

        // Fit the grid plus pointer strip into the available area
        let available = ui.available_size();
        let cell_w = (available.x - 2.0 * BOARD_MARGIN) / cols;
        let cell_h = (available.y - 2.0 * BOARD_MARGIN - POINTER_HEIGHT) / rows;
        self.cell_size = cell_w.min(cell_h).max(8.0);

        let size = Vec2::new(
            cols * self.cell_size + 2.0 * BOARD_MARGIN,
            rows * self.cell_size + 2.0 * BOARD_MARGIN + POINTER_HEIGHT,
        );
        let (response, painter) = ui.allocate_painter(size, Sense::click());

        self.board_rect = Rect::from_min_size(
            response.rect.min + Vec2::new(0.0, POINTER_HEIGHT),
            Vec2::new(size.x, size.y - POINTER_HEIGHT),
        );

        painter.rect_filled(self.board_rect, CornerRadius::same(8), BOARD_BG);
        self.draw_cells(&painter, board);

        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos);
        }
        self.draw_winning_cells(&painter, winning_cells);

        // Hover pointer and click
        let mut clicked = None;
        if accepts_input {
            if let Some(col) = response.hover_pos().and_then(|p| self.screen_to_column(p)) {
                let is_valid = board.is_legal(col);
                self.draw_pointer(&painter, response.rect.min.y, col, current_turn, is_valid);

                if response.clicked() && is_valid {
                    clicked = Some(col);
                }
            }
        }

        clicked
    }

    /// Draw every hole, filled or empty
    fn draw_cells(&self, painter: &Painter, board: &Board) {
        let radius = self.cell_size * PIECE_RADIUS_RATIO;
        for row in 0..board.rows() {
            for col in 0..board.cols() {
                let pos = Pos::new(row, col);
                let center = self.board_to_screen(pos);
                match board.get(pos).player() {
                    Some(player) => self.draw_piece(painter, center, radius, player),
                    None => {
                        painter.circle_filled(center, radius, HOLE);
                    }
                }
            }
        }
    }

    fn draw_piece(&self, painter: &Painter, center: Pos2, radius: f32, player: Player) {
        let (fill, highlight) = piece_colors(player);

        // Shadow
        painter.circle_filled(
            center + Vec2::new(2.0, 2.0),
            radius,
            Color32::from_rgba_unmultiplied(0, 0, 0, 60),
        );
        painter.circle_filled(center, radius, fill);
        painter.circle_stroke(center, radius * 0.7, Stroke::new(radius * 0.08, highlight));
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Ring the winning cells and join them
    fn draw_winning_cells(&self, painter: &Painter, cells: &[Pos]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);
        let radius = self.cell_size * PIECE_RADIUS_RATIO + 2.0;

        for pair in cells.windows(2) {
            painter.line_segment(
                [self.board_to_screen(pair[0]), self.board_to_screen(pair[1])],
                stroke,
            );
        }
        for &pos in cells {
            painter.circle_stroke(self.board_to_screen(pos), radius, stroke);
        }
    }

    /// Piece hovering above the column under the pointer, with the column shaded
    fn draw_pointer(&self, painter: &Painter, top: f32, col: usize, turn: Player, is_valid: bool) {
        let x = self.column_center(col);
        let column_rect = Rect::from_center_size(
            Pos2::new(x, self.board_rect.center().y),
            Vec2::new(self.cell_size, self.board_rect.height() - BOARD_MARGIN),
        );
        painter.rect_filled(column_rect, CornerRadius::same(4), hover_column());

        let center = Pos2::new(x, top + POINTER_HEIGHT * 0.5);
        let radius = (POINTER_HEIGHT * 0.4).min(self.cell_size * PIECE_RADIUS_RATIO);
        let color = if is_valid {
            piece_colors(turn).0
        } else {
            hover_invalid()
        };
        painter.circle_filled(center, radius, color);
    }

    fn column_center(&self, col: usize) -> f32 {
        self.board_rect.min.x + BOARD_MARGIN + (col as f32 + 0.5) * self.cell_size
    }

    /// Column under a screen position, if it is over the board
    pub fn screen_to_column(&self, screen_pos: Pos2) -> Option<usize> {
        let x = (screen_pos.x - self.board_rect.min.x - BOARD_MARGIN) / self.cell_size;
        if x < 0.0 {
            return None;
        }
        let col = x.floor() as usize;
        (col < self.cols).then_some(col)
    }

    /// Center of a cell on screen
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let y = self.board_rect.min.y + BOARD_MARGIN + (pos.row as f32 + 0.5) * self.cell_size;
        Pos2::new(self.column_center(pos.col), y)
    }
}
