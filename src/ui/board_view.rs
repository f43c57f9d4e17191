//! Board rendering for the Connect Four GUI

use crate::{Board, Disc, Pos, COLS, ROWS};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Area covered by the holes, labels excluded
    grid_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            grid_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked column if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        current_turn: Disc,
        last_move: Option<Pos>,
        suggested_column: Option<usize>,
        winning_line: Option<[Pos; 4]>,
        accepts_input: bool,
    ) -> Option<usize> {
        let available = ui.available_size();

        // Fit a 7:6 grid plus the label strip
        let cell_w = (available.x - 2.0 * BOARD_MARGIN - 20.0) / COLS as f32;
        let cell_h = (available.y - 2.0 * BOARD_MARGIN - LABEL_HEIGHT - 20.0) / ROWS as f32;
        self.cell_size = cell_w.min(cell_h).max(20.0);

        let size = Vec2::new(
            self.cell_size * COLS as f32 + 2.0 * BOARD_MARGIN,
            self.cell_size * ROWS as f32 + 2.0 * BOARD_MARGIN + LABEL_HEIGHT,
        );
        let (response, painter) = ui.allocate_painter(size, Sense::click());

        let board_rect = Rect::from_min_size(
            response.rect.min + Vec2::new(0.0, LABEL_HEIGHT),
            Vec2::new(size.x, size.y - LABEL_HEIGHT),
        );
        self.grid_rect = board_rect.shrink(BOARD_MARGIN);

        self.draw_column_labels(&painter);
        painter.rect_filled(board_rect, CornerRadius::same(10), BOARD_BG);
        painter.rect_stroke(
            board_rect,
            CornerRadius::same(10),
            Stroke::new(3.0, BOARD_BORDER),
            egui::StrokeKind::Inside,
        );

        if let Some(col) = suggested_column {
            painter.rect_filled(self.column_rect(col), CornerRadius::same(6), hint_column());
        }

        let hovered = response
            .hover_pos()
            .and_then(|p| self.screen_to_column(p))
            .filter(|_| accepts_input);
        if let Some(col) = hovered {
            painter.rect_filled(self.column_rect(col), CornerRadius::same(6), hover_column());
        }

        self.draw_discs(&painter, board);

        // Ghost disc where the hovered column would land
        if let Some(col) = hovered {
            if let Some(row) = board.next_open_row(col) {
                let center = self.cell_center(Pos::new(row as u8, col as u8));
                painter.circle_filled(
                    center,
                    self.disc_radius(),
                    preview_disc(disc_color(current_turn)),
                );
            }
        }

        if let Some(pos) = last_move {
            painter.circle_filled(self.cell_center(pos), LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
        }

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, &line);
        }

        match hovered {
            Some(col) if response.clicked() && !board.is_column_full(col) => Some(col),
            _ => None,
        }
    }

    /// Column numbers 1-7 above the board
    fn draw_column_labels(&self, painter: &Painter) {
        let font = egui::FontId::proportional(14.0);
        for col in 0..COLS {
            let x = self.grid_rect.min.x + (col as f32 + 0.5) * self.cell_size;
            let pos = Pos2::new(x, self.grid_rect.min.y - BOARD_MARGIN - LABEL_HEIGHT * 0.5);
            painter.text(
                pos,
                egui::Align2::CENTER_CENTER,
                format!("{}", col + 1),
                font.clone(),
                COLUMN_LABEL,
            );
        }
    }

    /// Draw every hole, filled or not
    fn draw_discs(&self, painter: &Painter, board: &Board) {
        let radius = self.disc_radius();
        for row in 0..ROWS {
            for col in 0..COLS {
                let center = self.cell_center(Pos::new(row as u8, col as u8));
                match board.cell(row, col) {
                    Disc::Empty => {
                        painter.circle_filled(center, radius, HOLE);
                    }
                    disc => self.draw_disc(painter, center, radius, disc),
                }
            }
        }
    }

    /// Draw a single disc with a shadow and a highlight
    fn draw_disc(&self, painter: &Painter, center: Pos2, radius: f32, disc: Disc) {
        let (base, highlight) = match disc {
            Disc::Red => (RED_DISC, RED_DISC_HIGHLIGHT),
            Disc::Blue => (BLUE_DISC, BLUE_DISC_HIGHLIGHT),
            Disc::Empty => return,
        };

        painter.circle_filled(
            center + Vec2::new(1.5, 1.5),
            radius,
            Color32::from_rgba_unmultiplied(0, 0, 0, 70),
        );
        painter.circle_filled(center, radius, base);
        painter.circle_stroke(center, radius * 0.75, Stroke::new(radius * 0.08, highlight));
    }

    /// Draw winning line highlight
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos; 4]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        painter.line_segment(
            [self.cell_center(line[0]), self.cell_center(line[3])],
            stroke,
        );
        for pos in line {
            painter.circle_stroke(self.cell_center(*pos), self.disc_radius() + 3.0, stroke);
        }
    }

    fn disc_radius(&self) -> f32 {
        self.cell_size * DISC_RADIUS_RATIO
    }

    fn column_rect(&self, col: usize) -> Rect {
        Rect::from_min_size(
            Pos2::new(
                self.grid_rect.min.x + col as f32 * self.cell_size,
                self.grid_rect.min.y,
            ),
            Vec2::new(self.cell_size, self.cell_size * ROWS as f32),
        )
    }

    /// Convert a screen x coordinate to a column
    pub fn screen_to_column(&self, screen_pos: Pos2) -> Option<usize> {
        let x = (screen_pos.x - self.grid_rect.min.x) / self.cell_size;
        let in_height = screen_pos.y >= self.grid_rect.min.y - BOARD_MARGIN - LABEL_HEIGHT
            && screen_pos.y <= self.grid_rect.max.y + BOARD_MARGIN;

        (in_height && x >= 0.0 && x < COLS as f32).then(|| x.floor() as usize)
    }

    /// Convert a board position to the centre of its hole
    pub fn cell_center(&self, pos: Pos) -> Pos2 {
        let x = self.grid_rect.min.x + (pos.col as f32 + 0.5) * self.cell_size;
        let y = self.grid_rect.min.y + (pos.row as f32 + 0.5) * self.cell_size;
        Pos2::new(x, y)
    }
}

/// Fill color for a player's discs
pub fn disc_color(disc: Disc) -> Color32 {
    match disc {
        Disc::Red => RED_DISC,
        Disc::Blue => BLUE_DISC,
        Disc::Empty => HOLE,
    }
}
