//! Main application for the Gomoku GUI
//!
//! The app owns one `GameState` and is the only place where game outcomes
//! are turned into sounds and status messages.

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::BoardView;
use super::theme::*;
use crate::audio::{SoundEvent, SoundManager};
use crate::game::{GameState, MoveError, MoveOutcome};
use crate::{Pos, Stone};

/// Main Gomoku application
pub struct GomokuApp {
    game: GameState,
    board_view: BoardView,
    sounds: SoundManager,
    message: Option<String>,
}

impl Default for GomokuApp {
    fn default() -> Self {
        Self {
            game: GameState::new(),
            board_view: BoardView::default(),
            sounds: SoundManager::new(),
            message: None,
        }
    }
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Discard the finished game and start fresh
    fn new_game(&mut self) {
        self.game = GameState::new();
        self.message = None;
    }

    fn handle_click(&mut self, pos: Pos) {
        match self.game.try_place(pos.row as i32, pos.col as i32) {
            Ok(MoveOutcome::Placed) => {
                self.sounds.play(SoundEvent::Place);
                self.message = None;
            }
            Ok(MoveOutcome::Won) => {
                self.sounds.play(SoundEvent::Win);
                self.message = None;
            }
            Err(err @ (MoveError::Occupied { .. } | MoveError::OutOfBounds { .. })) => {
                self.sounds.play(SoundEvent::Invalid);
                self.message = Some(err.to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game is over - start a new one".to_string());
            }
        }
    }

    fn handle_undo(&mut self) {
        if self.game.undo_move() {
            self.sounds.play(SoundEvent::Undo);
            self.message = None;
        } else {
            self.message = Some("Nothing to undo".to_string());
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.new_game();
                        ui.close_menu();
                    }
                    if ui.button("Undo (U)").clicked() {
                        self.handle_undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("Sound", |ui| {
                    let label = if self.sounds.is_enabled() { "Mute effects" } else { "Unmute effects" };
                    if ui.button(label).clicked() {
                        self.sounds.toggle();
                        ui.close_menu();
                    }
                    let label = if self.sounds.is_music_enabled() { "Stop music (M)" } else { "Play music (M)" };
                    if ui.button(label).clicked() {
                        self.sounds.toggle_background_music();
                        ui.close_menu();
                    }
                    if ui.button("Switch music style (S)").clicked() {
                        self.sounds.switch_background_music(None);
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label("Hotseat - two players");
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);
                ui.add_space(10.0);

                self.render_audio_card(ui);

                if self.game.is_game_over() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui);
                }

                if let Some(msg) = self.message.clone() {
                    ui.add_space(10.0);
                    self.render_message_card(ui, &msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("\u{25cf}\u{25cb}").size(20.0).color(egui::Color32::from_rgb(180, 180, 185)));
            ui.add_space(4.0);
            ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("five in a row").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let is_black = self.game.current_player() == Stone::Black;
            let (stone_char, accent) = if is_black {
                ("\u{25cf}", egui::Color32::from_rgb(70, 70, 75))
            } else {
                ("\u{25cb}", egui::Color32::from_rgb(220, 220, 225))
            };

            ui.horizontal(|ui| {
                let stone_color = if is_black { TEXT_PRIMARY } else { egui::Color32::from_rgb(30, 30, 35) };

                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    stone_char,
                    egui::FontId::proportional(28.0),
                    stone_color,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    let name = self.game.current_player().name().to_uppercase();
                    ui.label(RichText::new(name).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if self.game.is_game_over() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else {
                        ("Your turn", STATUS_OK)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button(RichText::new("\u{21a9} Undo").size(12.0)).clicked() {
                    self.handle_undo();
                }
                ui.add_space(4.0);
                if ui.button(RichText::new("\u{1f504} New Game").size(12.0)).clicked() {
                    self.new_game();
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.game.move_count()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render audio controls card
    fn render_audio_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SOUND").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let mut sfx_on = self.sounds.is_enabled();
            if ui.checkbox(&mut sfx_on, "Sound effects").changed() {
                self.sounds.toggle();
            }

            let mut sfx_volume = self.sounds.volume();
            if ui.add(egui::Slider::new(&mut sfx_volume, 0.0..=1.0).text("volume")).changed() {
                self.sounds.set_volume(sfx_volume);
            }

            ui.add_space(6.0);

            let mut music_on = self.sounds.is_music_enabled();
            if ui.checkbox(&mut music_on, "Background music").changed() {
                self.sounds.toggle_background_music();
            }

            let mut music_volume = self.sounds.music_volume();
            if ui.add(egui::Slider::new(&mut music_volume, 0.0..=1.0).text("volume")).changed() {
                self.sounds.set_music_volume(music_volume);
            }

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if ui.button(RichText::new("\u{266b} Switch style").size(12.0)).clicked() {
                    self.sounds.switch_background_music(None);
                }
                ui.label(
                    RichText::new(self.sounds.current_style().name())
                        .size(11.0)
                        .color(TEXT_SECONDARY),
                );
            });
        });
    }

    /// Render game over card
    fn render_game_over_card(&mut self, ui: &mut egui::Ui) {
        let Some(winner) = self.game.winner() else {
            return;
        };
        let (symbol, accent) = if winner == Stone::Black {
            ("\u{25cf}", egui::Color32::from_rgb(70, 70, 75))
        } else {
            ("\u{25cb}", egui::Color32::from_rgb(220, 220, 225))
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);

                    ui.horizontal(|ui| {
                        ui.add_space(ui.available_width() / 2.0 - 60.0);
                        ui.label(RichText::new(symbol).size(32.0).color(accent));
                        ui.add_space(8.0);
                        ui.vertical(|ui| {
                            ui.label(RichText::new(winner.name().to_uppercase()).size(18.0).strong().color(TEXT_PRIMARY));
                            ui.label(RichText::new("WINS!").size(14.0).color(WIN_HIGHLIGHT));
                        });
                    });

                    ui.add_space(4.0);
                    ui.label(RichText::new("by 5-in-a-row").size(11.0).color(TEXT_SECONDARY));

                    ui.add_space(12.0);
                    if ui.button(RichText::new("\u{1f504} New Game").size(14.0).strong()).clicked() {
                        self.new_game();
                    }
                });
            });
    }

    /// Render status message card
    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("\u{26a0}").size(14.0));
                    ui.add_space(4.0);
                    ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            if let Some(pos) = self.board_view.show(ui, &self.game) {
                self.handle_click(pos);
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (undo, new_game, music, style) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::U),
                i.key_pressed(egui::Key::N),
                i.key_pressed(egui::Key::M),
                i.key_pressed(egui::Key::S),
            )
        });

        if undo {
            self.handle_undo();
        }
        if new_game {
            self.new_game();
        }
        if music {
            self.sounds.toggle_background_music();
        }
        if style {
            self.sounds.switch_background_music(None);
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}
