//! Theme constants for the tic-tac-toe GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(238, 232, 218);
pub const GRID_LINE: Color32 = Color32::from_rgb(60, 56, 52);
pub const CELL_WIN_BG: Color32 = Color32::from_rgb(190, 235, 180);

// Marks
pub const MARK_X: Color32 = Color32::from_rgb(205, 70, 60);
pub const MARK_O: Color32 = Color32::from_rgb(50, 110, 200);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 180, 50);

pub fn hover_preview(color: Color32) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), 70)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Button colors
pub const BUTTON_BG: Color32 = Color32::from_rgb(50, 53, 58);

// Status colors
pub const STATUS_DRAW: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 24.0;
pub const MAX_BOARD_SIZE: f32 = 480.0;
pub const GRID_LINE_WIDTH: f32 = 3.0;
pub const MARK_SIZE_RATIO: f32 = 0.3;
pub const MARK_STROKE_RATIO: f32 = 0.07;
