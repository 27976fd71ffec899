//! Main application for the Connect Four GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, Vec2};

use crate::storage::KeyedStore;
use crate::Player;

use super::board_view::BoardView;
use super::game_state::{GameState, RESULT_DELAY};
use super::settings_view::{SettingsAction, SettingsView};
use super::theme::*;

/// Screen currently shown
enum View {
    Play,
    Settings(SettingsView),
}

/// Main Connect Four application
pub struct ConnectFourApp {
    state: GameState,
    board_view: BoardView,
    view: View,
}

impl ConnectFourApp {
    /// Create the app on top of a persisted session
    pub fn new(_cc: &eframe::CreationContext<'_>, store: Box<dyn KeyedStore>) -> Self {
        Self::with_state(GameState::new(store))
    }

    fn with_state(state: GameState) -> Self {
        Self {
            state,
            board_view: BoardView::default(),
            view: View::Play,
        }
    }

    fn toggle_settings(&mut self) {
        self.view = match self.view {
            View::Play => View::Settings(SettingsView::new(&self.state.config)),
            View::Settings(_) => View::Play,
        };
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn player_name(&self, player: Player) -> &'static str {
        match player {
            Player::One => "PLAYER 1",
            Player::Two if self.state.config.bot => "BOT",
            Player::Two => "PLAYER 2",
        }
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(8.0))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.label(RichText::new("CONNECT FOUR").size(22.0).strong().color(TEXT_PRIMARY));
                ui.label(
                    RichText::new(format!("Connect {} to win", self.state.config.win_cells))
                        .size(12.0)
                        .color(TEXT_SECONDARY),
                );
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if let Some(result) = &self.state.last_ai_result {
                    ui.add_space(10.0);
                    Self::card_frame().show(ui, |ui| {
                        ui.label(RichText::new("BOT").size(10.0).color(TEXT_MUTED));
                        ui.label(
                            RichText::new(format!("{:?} -> {:?}", result.search_type, result.best_move))
                                .size(11.0)
                                .color(STATUS_OK),
                        );
                        ui.label(
                            RichText::new(format!(
                                "score {}  {} nodes  {}ms",
                                result.score, result.nodes, result.time_ms
                            ))
                            .size(10.0)
                            .color(TEXT_SECONDARY),
                        );
                    });
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    ui.label(RichText::new(msg).size(11.0).color(STATUS_WAIT));
                }
            });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.state.current_turn;
            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(40.0, 40.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 18.0, piece_colors(turn).0);

                ui.add_space(10.0);
                ui.vertical(|ui| {
                    ui.label(RichText::new(self.player_name(turn)).size(16.0).strong().color(TEXT_PRIMARY));

                    let status = if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                        (
                            format!("Bot is thinking... {:.1}s", elapsed.as_secs_f32()),
                            STATUS_WAIT,
                        )
                    } else if self.state.is_game_over() {
                        ("Game over".to_string(), WIN_HIGHLIGHT)
                    } else {
                        ("To move".to_string(), STATUS_OK)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        let mut open_settings = false;
        Self::card_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                if ui.button("New game (N)").clicked() {
                    self.state.reset();
                }
                if ui.button("Settings (S)").clicked() {
                    open_settings = true;
                }
            });
            ui.add_space(6.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.board.piece_count()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
        if open_settings {
            self.toggle_settings();
        }
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let accepts_input = !self.state.is_game_over()
                && !self.state.is_ai_turn()
                && !self.state.is_ai_thinking();

            let clicked = self.board_view.show(
                ui,
                &self.state.board,
                self.state.current_turn,
                self.state.last_move,
                &self.state.winning_cells,
                accepts_input,
            );

            if let Some(col) = clicked {
                if let Err(e) = self.state.try_drop(col) {
                    self.state.message = Some(e.to_string());
                }
            }
        });
    }

    /// Winner or draw window, shown once the game has been over for a moment
    fn render_result_window(&mut self, ctx: &Context) {
        if !self.state.show_result() {
            return;
        }

        let text = match self.state.winner() {
            Some(player) => format!("{} WINS!", self.player_name(player)),
            None => "DRAW".to_string(),
        };

        let mut play_again = false;
        egui::Window::new("Game over")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(text).size(24.0).strong().color(WIN_HIGHLIGHT));
                    ui.add_space(12.0);
                    if ui.button("Play again").clicked() {
                        play_again = true;
                    }
                });
            });

        if play_again {
            self.state.reset();
        }
    }

    fn render_settings(&mut self, ctx: &Context) {
        let View::Settings(settings) = &mut self.view else {
            return;
        };

        let mut action = None;
        CentralPanel::default().show(ctx, |ui| {
            action = settings.show(ui);
        });

        match action {
            Some(SettingsAction::Back) => self.view = View::Play,
            Some(SettingsAction::Save(config)) => {
                self.state.apply_settings(config);
                self.view = View::Play;
            }
            None => {}
        }
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (new_game, settings) =
            ctx.input(|i| (i.key_pressed(egui::Key::N), i.key_pressed(egui::Key::S)));

        // N - New game, only while the board is shown
        if new_game && matches!(self.view, View::Play) {
            self.state.reset();
        }

        // S - Toggle settings
        if settings {
            self.toggle_settings();
        }
    }
}

impl eframe::App for ConnectFourApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        // Check bot result
        self.state.check_ai_result();

        // Start bot if needed
        if self.state.is_ai_turn() && !self.state.is_ai_thinking() && !self.state.is_game_over() {
            self.state.start_ai_thinking();
        }

        if matches!(self.view, View::Play) {
            self.render_side_panel(ctx);
            self.render_board(ctx);
            self.render_result_window(ctx);
        } else {
            self.render_settings(ctx);
        }

        // Keep polling while the bot works or the result window is due
        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        } else if self.state.is_game_over() && !self.state.show_result() {
            ctx.request_repaint_after(RESULT_DELAY);
        }
    }
}
