//! Main application for the tic-tac-toe GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, ScrollArea, SidePanel, TopBottomPanel};
use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::game::{self, Action, GameState, Interaction, ListOrder, Status};
use super::board_view::{mark_color, BoardView};
use super::theme::*;

/// Main tic-tac-toe application
///
/// Rendering only reads the game state; user input is collected as
/// [`Action`]s during the frame and dispatched afterwards.
pub struct TicTacToeApp {
    interaction: Interaction,
    board_view: BoardView,
    pending: Vec<Action>,
}

impl TicTacToeApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Self {
        let mut interaction = Interaction::new(GameState::with_order(config.game.list_order));

        let ctx = cc.egui_ctx.clone();
        interaction.on_change(move |_, _| ctx.request_repaint());

        Self {
            interaction,
            board_view: BoardView::new(config.ui.hover_preview),
            pending: Vec::new(),
        }
    }

    fn state(&self) -> &GameState {
        self.interaction.state()
    }

    /// Dispatch the actions gathered while rendering
    fn flush_actions(&mut self) {
        for action in std::mem::take(&mut self.pending) {
            if let Err(err) = self.interaction.dispatch(action) {
                warn!(?action, %err, "Action failed");
            }
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("Go to game start (Home)").clicked() {
                        self.pending.push(Action::JumpTo(0));
                        ui.close_menu();
                    }
                    if ui.button("Go to last move (End)").clicked() {
                        let last = self.state().history().len() - 1;
                        self.pending.push(Action::JumpTo(last));
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    if ui.button("Reverse list (R)").clicked() {
                        self.pending.push(Action::ToggleOrder);
                        ui.close_menu();
                    }
                });
            });
        });
    }

    /// Render the side panel with status and move history
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(8.0))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_status_card(ui);
                ui.add_space(10.0);

                self.render_history_card(ui);
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
            ui.label(RichText::new("X").size(22.0).strong().color(MARK_X));
            ui.label(RichText::new("O").size(22.0).strong().color(MARK_O));
            ui.add_space(4.0);
            ui.label(RichText::new("TIC-TAC-TOE").size(22.0).strong().color(TEXT_PRIMARY));
        });
    }

    /// Render the status line card
    fn render_status_card(&self, ui: &mut egui::Ui) {
        let status = game::status(self.state());
        let color = match status {
            Status::NextPlayer(mark) => mark_color(mark),
            Status::Winner(_) => WIN_HIGHLIGHT,
            Status::Draw => STATUS_DRAW,
        };

        Self::card_frame().show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(RichText::new("STATUS").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            ui.label(RichText::new(status.to_string()).size(18.0).strong().color(color));
            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state().current_step()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render the move list card
    fn render_history_card(&mut self, ui: &mut egui::Ui) {
        let entries = game::move_list(self.state());
        let order = match self.state().list_order() {
            ListOrder::Ascending => "oldest first",
            ListOrder::Descending => "newest first",
        };

        Self::card_frame().show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new("HISTORY").size(10.0).color(TEXT_MUTED));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(RichText::new(order).size(10.0).color(TEXT_SECONDARY));
                });
            });
            ui.add_space(6.0);

            let reverse = Frame::new()
                .fill(BUTTON_BG)
                .corner_radius(CornerRadius::same(6))
                .inner_margin(8.0)
                .show(ui, |ui| {
                    ui.add(
                        egui::Label::new(RichText::new("Reverse list").size(12.0).color(TEXT_PRIMARY))
                            .sense(egui::Sense::click()),
                    )
                    .clicked()
                })
                .inner;
            if reverse {
                self.pending.push(Action::ToggleOrder);
            }
            ui.add_space(8.0);

            ScrollArea::vertical().auto_shrink([false, true]).show(ui, |ui| {
                for entry in &entries {
                    let mut text = RichText::new(&entry.description).size(13.0);
                    text = if entry.is_current {
                        text.strong().color(TEXT_PRIMARY)
                    } else {
                        text.color(TEXT_SECONDARY)
                    };

                    ui.horizontal(|ui| {
                        ui.label(RichText::new(format!("{}.", entry.step + 1)).size(11.0).color(TEXT_MUTED));
                        if ui.selectable_label(entry.is_current, text).clicked() {
                            self.pending.push(Action::JumpTo(entry.step));
                        }
                        if let Some(pos) = entry.placed_at {
                            ui.label(
                                RichText::new(format!("({}, {})", pos.row + 1, pos.col + 1))
                                    .size(11.0)
                                    .color(TEXT_MUTED),
                            );
                        }
                    });
                }
            });
        });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let state = self.interaction.state();
            let board = *state.current_board();
            let highlighted = game::highlighted_cells(state);
            let next = match game::status(state) {
                Status::NextPlayer(mark) => Some(mark),
                Status::Winner(_) | Status::Draw => None,
            };

            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                if let Some(cell) = self.board_view.show(ui, &board, &highlighted, next) {
                    debug!(cell, "Board clicked");
                    self.pending.push(Action::Play(cell));
                }
            });
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let step = self.state().current_step();
        let last = self.state().history().len() - 1;

        ctx.input(|i| {
            // R - Reverse move list
            if i.key_pressed(egui::Key::R) {
                self.pending.push(Action::ToggleOrder);
            }

            // Left/Right - Step through history
            if i.key_pressed(egui::Key::ArrowLeft) && step > 0 {
                self.pending.push(Action::JumpTo(step - 1));
            }
            if i.key_pressed(egui::Key::ArrowRight) && step < last {
                self.pending.push(Action::JumpTo(step + 1));
            }

            // Home/End - First/last step
            if i.key_pressed(egui::Key::Home) {
                self.pending.push(Action::JumpTo(0));
            }
            if i.key_pressed(egui::Key::End) {
                self.pending.push(Action::JumpTo(last));
            }
        });
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        self.flush_actions();
    }
}
