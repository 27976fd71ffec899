//! Settings screen: board shape, win length and bot toggle

use egui::{Button, CornerRadius, Frame, RichText};

use crate::config::{GameConfig, SettingsDraft, COLS_RANGE, ROWS_RANGE};

use super::theme::*;

/// What the user chose on the settings screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsAction {
    /// Leave without saving
    Back,
    /// Save and start a new game
    Save(GameConfig),
}

pub struct SettingsView {
    draft: SettingsDraft,
}

impl SettingsView {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            draft: SettingsDraft::from_config(config),
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui) -> Option<SettingsAction> {
        let mut action = None;

        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.label(RichText::new("SETTINGS").size(22.0).strong().color(TEXT_PRIMARY));
            ui.add_space(16.0);

            Frame::new()
                .fill(CARD_BG)
                .corner_radius(CornerRadius::same(8))
                .inner_margin(16.0)
                .show(ui, |ui| {
                    let draft = &mut self.draft;

                    if let Some(delta) = stepper(
                        ui,
                        "Columns",
                        draft.cols,
                        draft.cols > COLS_RANGE.0,
                        draft.cols < COLS_RANGE.1,
                    ) {
                        draft.adjust_cols(delta);
                    }

                    if let Some(delta) = stepper(
                        ui,
                        "Rows",
                        draft.rows,
                        draft.rows > ROWS_RANGE.0,
                        draft.rows < ROWS_RANGE.1,
                    ) {
                        draft.adjust_rows(delta);
                    }

                    if let Some(delta) = stepper(
                        ui,
                        "Win cells",
                        draft.win_cells,
                        draft.can_decrease_win_cells(),
                        draft.can_increase_win_cells(),
                    ) {
                        draft.adjust_win_cells(delta);
                    }

                    ui.add_space(8.0);
                    let mut bot = draft.bot;
                    if ui.checkbox(&mut bot, "Player two is the bot").changed() {
                        draft.toggle_bot();
                    }
                });

            ui.add_space(16.0);
            ui.horizontal(|ui| {
                if ui.button("Back").clicked() {
                    action = Some(SettingsAction::Back);
                }
                if ui.button(RichText::new("Save and start").strong()).clicked() {
                    action = Some(SettingsAction::Save(self.draft.apply()));
                }
            });
            ui.label(RichText::new("S - back").size(10.0).color(TEXT_MUTED));
        });

        action
    }
}

/// `label  [-] value [+]` row; returns the step clicked
fn stepper(ui: &mut egui::Ui, label: &str, value: usize, can_dec: bool, can_inc: bool) -> Option<isize> {
    let mut delta = None;
    ui.horizontal(|ui| {
        ui.label(RichText::new(label).size(14.0).color(TEXT_SECONDARY));
        ui.add_space(12.0);
        if ui.add_enabled(can_dec, Button::new("-")).clicked() {
            delta = Some(-1);
        }
        ui.label(RichText::new(value.to_string()).size(16.0).strong().color(TEXT_PRIMARY));
        if ui.add_enabled(can_inc, Button::new("+")).clicked() {
            delta = Some(1);
        }
    });
    delta
}
