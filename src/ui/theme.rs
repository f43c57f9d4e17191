//! Theme constants for the Connect Four GUI

use egui::Color32;

// Board colors - dark slate frame
pub const BOARD_BG: Color32 = Color32::from_rgb(52, 58, 70);
pub const BOARD_BORDER: Color32 = Color32::from_rgb(36, 40, 48);
pub const HOLE: Color32 = Color32::from_rgb(24, 26, 30);
pub const COLUMN_LABEL: Color32 = Color32::from_rgb(200, 210, 230);

// Disc colors
pub const RED_DISC: Color32 = Color32::from_rgb(220, 45, 50);
pub const RED_DISC_HIGHLIGHT: Color32 = Color32::from_rgb(245, 110, 110);
pub const BLUE_DISC: Color32 = Color32::from_rgb(50, 120, 230);
pub const BLUE_DISC_HIGHLIGHT: Color32 = Color32::from_rgb(120, 170, 250);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(250, 250, 252);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Functions for colors that can't be const
pub fn hover_column() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 255, 255, 30)
}

pub fn hint_column() -> Color32 {
    Color32::from_rgba_unmultiplied(50, 220, 50, 45)
}

pub fn preview_disc(color: Color32) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), 110)
}

// Panel text
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Timer colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const TIMER_CRITICAL: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 16.0;
pub const LABEL_HEIGHT: f32 = 24.0;
pub const DISC_RADIUS_RATIO: f32 = 0.40;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;
