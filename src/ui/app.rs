//! Main application for the Connect Four GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::{disc_color, BoardView};
use super::game_state::{GameResult, GameState, Outcome};
use super::theme::*;
use crate::{Difficulty, Disc, GameConfig, GameMode, Opponent};

/// Number keys mapped to columns
const COLUMN_KEYS: [egui::Key; 7] = [
    egui::Key::Num1,
    egui::Key::Num2,
    egui::Key::Num3,
    egui::Key::Num4,
    egui::Key::Num5,
    egui::Key::Num6,
    egui::Key::Num7,
];

/// Main Connect Four application
pub struct Connect4App {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl Default for Connect4App {
    fn default() -> Self {
        Self {
            state: GameState::new(GameConfig::default()),
            board_view: BoardView::default(),
            show_debug: true,
        }
    }
}

impl Connect4App {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Restart if the menu changed the configuration
    fn apply_config(&mut self, config: GameConfig) {
        if config != self.state.config {
            self.state.restart(config);
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        let mut config = self.state.config;

        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.state.reset();
                        ui.close_menu();
                    }
                    if ui.button("Undo (U)").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                    ui.separator();
                    ui.label(RichText::new("Mode").color(TEXT_MUTED));
                    for mode in GameMode::ALL {
                        ui.radio_value(&mut config.mode, mode, mode.label());
                    }
                    ui.separator();
                    ui.label(RichText::new("Opponent").color(TEXT_MUTED));
                    ui.radio_value(&mut config.opponent, Opponent::Engine, Opponent::Engine.label());
                    ui.radio_value(&mut config.opponent, Opponent::Human, Opponent::Human.label());
                });

                ui.menu_button("Difficulty", |ui| {
                    for difficulty in Difficulty::ALL {
                        ui.radio_value(&mut config.difficulty, difficulty, difficulty.to_string());
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match config.opponent {
                        Opponent::Engine => format!(
                            "{} - vs AI ({})",
                            config.mode.label(),
                            config.difficulty.label()
                        ),
                        Opponent::Human => format!("{} - Hotseat", config.mode.label()),
                    };
                    ui.label(mode_text);
                });
            });
        });

        self.apply_config(config);
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(egui::Color32::from_rgb(25, 27, 31)))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_timer_card(ui);
                ui.add_space(10.0);

                self.render_score_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(result) = self.state.game_over {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, &result);
                }

                if let Some(msg) = self.state.message.clone() {
                    ui.add_space(10.0);
                    self.render_message_card(ui, &msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(egui::Color32::from_rgb(35, 38, 43))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn card_heading(ui: &mut egui::Ui, text: &str) {
        ui.label(RichText::new(text).size(10.0).color(TEXT_MUTED));
        ui.add_space(6.0);
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("CONNECT FOUR").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new(self.state.config.mode.label()).size(11.0).color(TEXT_MUTED));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.state.current_turn;

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 20.0, disc_color(turn));

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(turn.name().to_uppercase())
                            .size(18.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );

                    let status = if self.state.is_ai_thinking() {
                        ("AI thinking...", TIMER_WARNING)
                    } else if self.state.game_over.is_some() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else {
                        ("Your turn", TIMER_NORMAL)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// Render timer card
    fn render_timer_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            Self::card_heading(ui, "TIMER");

            if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                let secs = elapsed.as_secs_f32();
                let color = if secs < 1.0 {
                    TIMER_NORMAL
                } else if secs < 3.0 {
                    TIMER_WARNING
                } else {
                    TIMER_CRITICAL
                };
                ui.label(RichText::new(format!("{:.2}s", secs)).size(28.0).strong().color(color));
            } else {
                let elapsed = self.state.move_timer.elapsed();
                ui.label(
                    RichText::new(format!("{:.1}s", elapsed.as_secs_f32()))
                        .size(24.0)
                        .color(TEXT_PRIMARY),
                );
            }

            if let Some(ai_time) = self.state.move_timer.ai_thinking_time {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Last AI: {:.3}s", ai_time.as_secs_f32()))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
            }
        });
    }

    /// Line tallies in Score Attack, the rule reminder in Classic
    fn render_score_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| match self.state.config.mode {
            GameMode::Classic => {
                Self::card_heading(ui, "RULES");
                ui.label(
                    RichText::new("First to connect four in a row, column or diagonal wins.")
                        .size(11.0)
                        .color(TEXT_SECONDARY),
                );
            }
            GameMode::ScoreAttack => {
                Self::card_heading(ui, "SCORE");
                let (red, blue) = self.state.tallies();
                Self::render_tally_row(ui, Disc::Red, red, red > blue);
                ui.add_space(6.0);
                Self::render_tally_row(ui, Disc::Blue, blue, blue > red);
                ui.add_space(6.0);
                ui.label(
                    RichText::new("Each four-in-a-row scores a point. Play ends on a full board.")
                        .size(10.0)
                        .color(TEXT_MUTED),
                );
            }
        });
    }

    fn render_tally_row(ui: &mut egui::Ui, disc: Disc, points: u32, leading: bool) {
        ui.horizontal(|ui| {
            let (rect, _) = ui.allocate_exact_size(Vec2::new(18.0, 18.0), egui::Sense::hover());
            ui.painter().circle_filled(rect.center(), 8.0, disc_color(disc));
            ui.label(RichText::new(disc.name()).size(13.0).color(TEXT_PRIMARY));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let text = RichText::new(points.to_string()).size(16.0).strong();
                ui.label(if leading {
                    text.color(WIN_HIGHLIGHT)
                } else {
                    text.color(TEXT_SECONDARY)
                });
            });
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            Self::card_heading(ui, "ACTIONS");

            ui.horizontal(|ui| {
                let btn_frame = Frame::new()
                    .fill(egui::Color32::from_rgb(50, 53, 58))
                    .corner_radius(CornerRadius::same(6))
                    .inner_margin(8.0);

                let action_button = |ui: &mut egui::Ui, text: &str| {
                    btn_frame
                        .show(ui, |ui| {
                            ui.add(
                                egui::Label::new(RichText::new(text).size(12.0).color(TEXT_PRIMARY))
                                    .sense(egui::Sense::click()),
                            )
                            .clicked()
                        })
                        .inner
                };

                if action_button(ui, "Undo") {
                    self.state.undo();
                }
                ui.add_space(4.0);
                if action_button(ui, "New Game") {
                    self.state.reset();
                }
                if self.state.config.opponent == Opponent::Human {
                    ui.add_space(4.0);
                    if action_button(ui, "Hint") {
                        self.state.request_suggestion();
                    }
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.move_history.len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
            ui.label(
                RichText::new("Keys: 1-7 drop, U undo, N new game")
                    .size(10.0)
                    .color(TEXT_MUTED),
            );
        });
    }

    /// Render debug card
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(egui::Color32::from_rgb(30, 33, 38))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                Self::card_heading(ui, "AI DEBUG");

                if let Some(result) = &self.state.last_ai_result {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new(format!("{:?}", result.search_type))
                                    .size(11.0)
                                    .strong()
                                    .color(TIMER_NORMAL),
                            );
                            ui.label(
                                RichText::new(format!("Score: {}", result.score))
                                    .size(10.0)
                                    .color(TEXT_SECONDARY),
                            );
                            ui.label(
                                RichText::new(format!("Depth: {}", result.depth))
                                    .size(10.0)
                                    .color(TEXT_SECONDARY),
                            );
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                            ui.vertical(|ui| {
                                ui.label(
                                    RichText::new(format!("{}ms", result.time_ms))
                                        .size(10.0)
                                        .color(TEXT_SECONDARY),
                                );
                                ui.label(
                                    RichText::new(format!("{} nodes", result.nodes))
                                        .size(10.0)
                                        .color(TEXT_MUTED),
                                );
                            });
                        });
                    });

                    if let Some(col) = result.column {
                        ui.add_space(4.0);
                        ui.label(
                            RichText::new(format!("-> column {}", col + 1))
                                .size(12.0)
                                .strong()
                                .color(WIN_HIGHLIGHT),
                        );
                    }
                } else {
                    ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                }

                if let Some(stats) = self.state.cache_stats() {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(format!(
                            "Cache: {:.0}% hits, {} clears",
                            stats.hit_rate() * 100.0,
                            stats.full_clears
                        ))
                        .size(10.0)
                        .color(TEXT_MUTED),
                    );
                }
            });
    }

    /// Render game over card
    fn render_game_over_card(&mut self, ui: &mut egui::Ui, result: &GameResult) {
        let (headline, accent) = match result.outcome {
            Outcome::Winner(disc) => (format!("{} WINS!", disc.name().to_uppercase()), disc_color(disc)),
            Outcome::Draw => ("DRAW".to_string(), TEXT_SECONDARY),
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("GAME OVER")
                            .size(12.0)
                            .color(egui::Color32::from_rgb(180, 255, 180)),
                    );
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(accent));

                    if let Some((red, blue)) = result.tallies {
                        ui.add_space(4.0);
                        ui.label(
                            RichText::new(format!("Red {} - {} Blue", red, blue))
                                .size(11.0)
                                .color(TEXT_SECONDARY),
                        );
                    }

                    ui.add_space(12.0);
                    Frame::new()
                        .fill(egui::Color32::from_rgb(60, 100, 70))
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            if ui
                                .add(
                                    egui::Label::new(
                                        RichText::new("New Game").size(14.0).strong().color(TEXT_PRIMARY),
                                    )
                                    .sense(egui::Sense::click()),
                                )
                                .clicked()
                            {
                                self.state.reset();
                            }
                        });
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
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(egui::Color32::from_rgb(40, 42, 46)).inner_margin(10.0))
            .show(ctx, |ui| {
                let winning_line = self.state.game_over.and_then(|r| r.winning_line);
                let accepts_input = self.state.game_over.is_none()
                    && self.state.is_human_turn()
                    && !self.state.is_ai_thinking();

                let clicked = ui
                    .vertical_centered(|ui| {
                        self.board_view.show(
                            ui,
                            &self.state.board,
                            self.state.current_turn,
                            self.state.last_move,
                            self.state.suggested_column,
                            winning_line,
                            accepts_input,
                        )
                    })
                    .inner;

                if let Some(col) = clicked {
                    self.drop_disc(col);
                }
            });
    }

    fn drop_disc(&mut self, col: usize) {
        if let Err(err) = self.state.try_drop(col) {
            self.state.message = Some(err.to_string());
        }
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (column, toggle_debug, hint, undo, new_game) = ctx.input(|i| {
            (
                COLUMN_KEYS.iter().position(|&key| i.key_pressed(key)),
                i.key_pressed(egui::Key::D),
                i.key_pressed(egui::Key::H),
                i.key_pressed(egui::Key::U),
                i.key_pressed(egui::Key::N),
            )
        });

        if let Some(col) = column {
            self.drop_disc(col);
        }
        if toggle_debug {
            self.show_debug = !self.show_debug;
        }
        if hint && self.state.config.opponent == Opponent::Human {
            self.state.request_suggestion();
        }
        if undo {
            self.state.undo();
        }
        if new_game {
            self.state.reset();
        }
    }
}

impl eframe::App for Connect4App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.check_ai_result();

        if self.state.is_ai_turn() && !self.state.is_ai_thinking() && self.state.game_over.is_none() {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // The move timer and the AI poll both need fresh frames
        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        } else if self.state.game_over.is_none() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
